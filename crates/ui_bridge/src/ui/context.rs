//! Explicitly owned UI library context
//!
//! Holds the state the UI library would otherwise keep in process-wide
//! globals: the [`Io`] record, the font atlas, the cursor the widgets asked
//! for and the draw data of the last finished frame.

use super::draw::DrawData;
use super::fonts::FontAtlas;
use super::input::MouseCursor;
use super::io::Io;

/// One UI library instance
#[derive(Debug, Default)]
pub struct Context {
    io: Io,
    fonts: FontAtlas,
    mouse_cursor: MouseCursor,
    draw_data: Option<DrawData>,
}

impl Context {
    /// Create a context around an already rasterized font atlas
    pub fn new(fonts: FontAtlas) -> Self {
        Self {
            fonts,
            ..Self::default()
        }
    }

    /// Input/output record
    pub const fn io(&self) -> &Io {
        &self.io
    }

    /// Mutable input/output record
    pub fn io_mut(&mut self) -> &mut Io {
        &mut self.io
    }

    /// Font atlas
    pub const fn fonts(&self) -> &FontAtlas {
        &self.fonts
    }

    /// Mutable font atlas
    pub fn fonts_mut(&mut self) -> &mut FontAtlas {
        &mut self.fonts
    }

    /// Cursor shape requested for the current frame
    pub const fn mouse_cursor(&self) -> MouseCursor {
        self.mouse_cursor
    }

    /// Request a cursor shape (done by widgets during layout)
    pub fn set_mouse_cursor(&mut self, cursor: MouseCursor) {
        self.mouse_cursor = cursor;
    }

    /// Publish the draw output of a finished frame
    pub fn set_draw_data(&mut self, draw_data: DrawData) {
        self.draw_data = Some(draw_data);
    }

    /// Draw output of the last finished frame
    pub const fn draw_data(&self) -> Option<&DrawData> {
        self.draw_data.as_ref()
    }

    /// Remove and return the last frame's draw output
    pub fn take_draw_data(&mut self) -> Option<DrawData> {
        self.draw_data.take()
    }
}
