//! Host window services used by the bridge
//!
//! Only size queries and cursor control; window creation and the main loop
//! stay with the host.

use crate::foundation::math::Vec2;

/// Cursor shapes the host can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    /// Default arrow
    #[default]
    Arrow,
    /// Text I-beam
    Text,
    /// Four-way move
    SizeAll,
    /// Vertical resize
    SizeVertical,
    /// Horizontal resize
    SizeHorizontal,
    /// Diagonal resize, bottom-left to top-right
    SizeBottomLeftTopRight,
    /// Diagonal resize, top-left to bottom-right
    SizeTopLeftBottomRight,
    /// Pointing hand
    Hand,
    /// Operation not allowed
    NotAllowed,
}

/// Window queries and cursor setters the bridge needs
pub trait HostWindow {
    /// Logical size of the client area
    fn size(&self) -> Vec2;

    /// Physical size of the framebuffer backing the client area
    fn framebuffer_size(&self) -> Vec2;

    /// Show or hide the OS cursor over the window
    fn set_mouse_cursor_visible(&mut self, visible: bool);

    /// Change the OS cursor shape over the window
    fn set_mouse_cursor(&mut self, shape: CursorShape);
}

impl<T: HostWindow + ?Sized> HostWindow for &mut T {
    fn size(&self) -> Vec2 {
        (**self).size()
    }

    fn framebuffer_size(&self) -> Vec2 {
        (**self).framebuffer_size()
    }

    fn set_mouse_cursor_visible(&mut self, visible: bool) {
        (**self).set_mouse_cursor_visible(visible);
    }

    fn set_mouse_cursor(&mut self, shape: CursorShape) {
        (**self).set_mouse_cursor(shape);
    }
}
