//! # UI Bridge
//!
//! Glue between an embedded immediate-mode UI library and a host 2D game
//! framework.
//!
//! ## Features
//!
//! - **Input**: host keyboard, mouse, text and gamepad events feed the UI
//!   input state, and report whether the UI wants to capture them
//! - **Cursor and clipboard**: UI cursor requests reach the host window and
//!   the UI reads and writes the host clipboard
//! - **Font atlas**: the UI font bitmap lives in a host texture for as long
//!   as the bridge does
//! - **Rendering**: per-frame draw lists become host draw calls with scissor
//!   clipping and texture binding
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use ui_bridge::prelude::*;
//!
//! fn main() -> Result<(), BridgeError> {
//!     let fonts = FontAtlas::from_rgba32(1, 1, vec![255; 4])?;
//!     let mut bridge = Bridge::init(
//!         Context::new(fonts),
//!         HeadlessWindow::new(640.0, 480.0),
//!         HeadlessRenderer::new(640, 480),
//!         HeadlessClipboard::new(),
//!         BridgeConfig::default(),
//!     )?;
//!
//!     bridge.process_event(&Event::MouseMoved { coords: Vec2::new(10.0, 10.0) });
//!     bridge.update(Duration::from_millis(16));
//!     // ... build the UI frame and publish its draw data ...
//!     bridge.render_draw_data();
//!
//!     bridge.shutdown()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod bridge;
pub mod config;
pub mod foundation;
pub mod host;
pub mod ui;

pub use bridge::{Bridge, BridgeError, FrameState, RenderStats, ShutdownError};
pub use config::{BridgeConfig, Config, ConfigError, VertexUpload};

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        bridge::{Bridge, BridgeError, FrameState, RenderStats, ShutdownError},
        config::{BridgeConfig, Config, VertexUpload},
        foundation::{
            math::{RectI, Vec2, Vec2i},
            time::Timer,
        },
        host::{
            Event, HeadlessClipboard, HeadlessRenderer, HeadlessWindow, HostClipboard,
            HostRenderer, HostWindow, KeyEvent, Keycode, Modifiers, MouseButton,
        },
        ui::{Context, DrawCmd, DrawCmdParams, DrawData, DrawList, DrawVert, FontAtlas, Io, MouseCursor, TextureId},
    };
}
