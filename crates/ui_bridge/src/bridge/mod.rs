//! Bridge between the UI library and the host
//!
//! - input: host events to UI input state
//! - cursor: UI cursor requests to the host window
//! - clipboard: UI clipboard access forwarded to the host
//! - font: font atlas upload and release
//! - render: draw lists to host draw calls
//! - platform: the [`Bridge`] tying the above into a frame lifecycle

pub mod clipboard;
pub mod cursor;
pub mod font;
pub mod input;
pub mod platform;
pub mod render;

#[cfg(test)]
mod tests;

pub use clipboard::ClipboardBridge;
pub use cursor::{map_cursor, update_mouse_cursor, CursorState};
pub use font::{host_texture_from_id, texture_id_from_host, FontTexture};
pub use input::process_event;
pub use platform::{Bridge, BridgeError, FrameState, ShutdownError};
pub use render::{DrawListRenderer, RenderStats};
