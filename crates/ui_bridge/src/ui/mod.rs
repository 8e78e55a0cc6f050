//! UI library surface
//!
//! The types of the embedded immediate-mode UI library that the bridge
//! reads and writes. Widget and layout logic live in the library itself
//! and are not part of this crate.
//!
//! - io: input state, display metrics and capture flags
//! - input: key, navigation-input, mouse-button and cursor identifiers
//! - draw: per-frame draw lists and commands
//! - fonts: the rasterized font atlas record
//! - context: the owned library instance tying them together

pub mod context;
pub mod draw;
pub mod fonts;
pub mod input;
pub mod io;

pub use context::Context;
pub use draw::{
    col32, DrawCallback, DrawCmd, DrawCmdParams, DrawData, DrawIdx, DrawList, DrawVert, TextureId,
    COL32_A_SHIFT, COL32_B_SHIFT, COL32_G_SHIFT, COL32_R_SHIFT,
};
pub use fonts::{FontAtlas, FontError};
pub use input::{mouse_button, Key, MouseCursor, NavInput};
pub use io::{BackendFlags, ClipboardBackend, ConfigFlags, Io};
