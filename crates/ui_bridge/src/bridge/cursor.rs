//! Cursor shape reconciliation
//!
//! Each frame the UI library names the cursor it wants. The host is only
//! told when that request differs from what was last applied.

use crate::host::window::{CursorShape, HostWindow};
use crate::ui::input::MouseCursor;
use crate::ui::io::{ConfigFlags, Io};

/// Host cursor for a UI cursor request; shapes the host lacks fall back to the arrow
pub const fn map_cursor(cursor: MouseCursor) -> CursorShape {
    match cursor {
        MouseCursor::TextInput => CursorShape::Text,
        MouseCursor::ResizeAll => CursorShape::SizeAll,
        MouseCursor::ResizeNS => CursorShape::SizeVertical,
        MouseCursor::ResizeEW => CursorShape::SizeHorizontal,
        MouseCursor::ResizeNESW => CursorShape::SizeBottomLeftTopRight,
        MouseCursor::ResizeNWSE => CursorShape::SizeTopLeftBottomRight,
        MouseCursor::Hand => CursorShape::Hand,
        MouseCursor::NotAllowed => CursorShape::NotAllowed,
        MouseCursor::Arrow | MouseCursor::None | MouseCursor::Wait | MouseCursor::Progress => {
            CursorShape::Arrow
        }
    }
}

/// Last cursor applied to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// UI request the host cursor currently reflects
    pub shape: MouseCursor,
    /// Whether the host cursor is shown
    pub visible: bool,
}

/// Bring the host cursor in line with the UI library's request
///
/// `state` starts as `None` and is filled on the first change. Hiding the
/// cursor forgets the applied shape, so the next visible request is always
/// applied even if it matches the shape shown before hiding.
pub fn update_mouse_cursor<W: HostWindow + ?Sized>(
    state: &mut Option<CursorState>,
    io: &Io,
    requested: MouseCursor,
    window: &mut W,
) {
    if io.config_flags.contains(ConfigFlags::NO_MOUSE_CURSOR_CHANGE) {
        return;
    }

    if io.mouse_draw_cursor || requested == MouseCursor::None {
        if state.map_or(true, |s| s.visible) {
            window.set_mouse_cursor_visible(false);
            *state = Some(CursorState {
                shape: MouseCursor::None,
                visible: false,
            });
        }
        return;
    }

    if state.map_or(false, |s| s.visible && s.shape == requested) {
        return;
    }

    let shape = map_cursor(requested);
    log::debug!("Cursor changed to {:?} ({:?})", requested, shape);
    window.set_mouse_cursor_visible(true);
    window.set_mouse_cursor(shape);
    *state = Some(CursorState {
        shape: requested,
        visible: true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::headless::{CursorCall, HeadlessWindow};

    #[test]
    fn test_cursor_table() {
        assert_eq!(map_cursor(MouseCursor::TextInput), CursorShape::Text);
        assert_eq!(map_cursor(MouseCursor::ResizeNESW), CursorShape::SizeBottomLeftTopRight);
        assert_eq!(map_cursor(MouseCursor::ResizeNWSE), CursorShape::SizeTopLeftBottomRight);
        assert_eq!(map_cursor(MouseCursor::Wait), CursorShape::Arrow);
        assert_eq!(map_cursor(MouseCursor::Progress), CursorShape::Arrow);
    }

    #[test]
    fn test_same_request_applied_once() {
        let io = Io::default();
        let mut window = HeadlessWindow::new(100.0, 100.0);
        let mut state = None;

        update_mouse_cursor(&mut state, &io, MouseCursor::TextInput, &mut window);
        update_mouse_cursor(&mut state, &io, MouseCursor::TextInput, &mut window);

        assert_eq!(window.cursor_shape_calls(), 1);
        assert_eq!(window.cursor(), CursorShape::Text);
    }

    #[test]
    fn test_none_hides_cursor() {
        let io = Io::default();
        let mut window = HeadlessWindow::new(100.0, 100.0);
        let mut state = None;

        update_mouse_cursor(&mut state, &io, MouseCursor::Hand, &mut window);
        update_mouse_cursor(&mut state, &io, MouseCursor::None, &mut window);
        assert!(!window.cursor_visible());

        // Showing the same shape again after hiding re-applies it
        update_mouse_cursor(&mut state, &io, MouseCursor::Hand, &mut window);
        assert!(window.cursor_visible());
        assert_eq!(window.cursor_shape_calls(), 2);
    }

    #[test]
    fn test_mouse_draw_cursor_hides() {
        let mut io = Io::default();
        io.mouse_draw_cursor = true;
        let mut window = HeadlessWindow::new(100.0, 100.0);
        let mut state = None;

        update_mouse_cursor(&mut state, &io, MouseCursor::Arrow, &mut window);
        update_mouse_cursor(&mut state, &io, MouseCursor::Arrow, &mut window);
        assert_eq!(window.cursor_calls(), &[CursorCall::Visible(false)]);
    }

    #[test]
    fn test_disabled_by_config() {
        let mut io = Io::default();
        io.config_flags |= ConfigFlags::NO_MOUSE_CURSOR_CHANGE;
        let mut window = HeadlessWindow::new(100.0, 100.0);
        let mut state = None;

        update_mouse_cursor(&mut state, &io, MouseCursor::Hand, &mut window);
        assert!(window.cursor_calls().is_empty());
        assert!(state.is_none());
    }
}
