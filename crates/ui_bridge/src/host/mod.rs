//! Host platform interfaces
//!
//! What the bridge consumes from the host engine: its event enum, window
//! size and cursor control, the 2D renderer and the OS clipboard. The
//! headless module provides an in-memory implementation of all of them.

pub mod clipboard;
pub mod event;
pub mod headless;
pub mod renderer;
pub mod window;

pub use clipboard::HostClipboard;
pub use event::{
    Event, GamepadAxis, GamepadButton, GamepadId, KeyEvent, Keycode, Modifiers, MouseButton,
};
pub use headless::{CursorCall, HeadlessClipboard, HeadlessRenderer, HeadlessWindow, RecordedDraw};
pub use renderer::{
    ColorFormat, DrawCall, HostRenderer, HostVertex, PrimitiveType, RenderError, RenderResult,
    TextureHandle, VertexLayout, VertexSource,
};
pub use window::{CursorShape, HostWindow};
