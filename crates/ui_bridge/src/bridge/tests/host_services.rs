//! Input, cursor and clipboard behaviour seen through a whole bridge

use std::time::Duration;

use crate::bridge::{Bridge, CursorState};
use crate::config::BridgeConfig;
use crate::foundation::logging;
use crate::foundation::math::Vec2;
use crate::host::event::{Event, GamepadButton, GamepadId, Keycode, Modifiers, MouseButton};
use crate::host::headless::{CursorCall, HeadlessClipboard, HeadlessRenderer, HeadlessWindow};
use crate::host::window::CursorShape;
use crate::host::HostClipboard;
use crate::ui::context::Context;
use crate::ui::fonts::FontAtlas;
use crate::ui::input::{mouse_button, Key, MouseCursor, NavInput};

fn bridge_with_clipboard(
    config: BridgeConfig,
    clipboard: HeadlessClipboard,
) -> Bridge<HeadlessWindow, HeadlessRenderer> {
    logging::init_for_tests();
    let fonts = FontAtlas::from_rgba32(2, 2, vec![0; 16]).unwrap();
    Bridge::init(
        Context::new(fonts),
        HeadlessWindow::new(320.0, 240.0),
        HeadlessRenderer::new(320, 240),
        clipboard,
        config,
    )
    .unwrap()
}

fn bridge(config: BridgeConfig) -> Bridge<HeadlessWindow, HeadlessRenderer> {
    bridge_with_clipboard(config, HeadlessClipboard::new())
}

#[test]
fn test_capture_flags_decide_consumption() {
    let mut bridge = bridge(BridgeConfig::new());
    let click = Event::MouseButtonPressed {
        button: MouseButton::Left,
        coords: Vec2::new(5.0, 5.0),
    };

    assert!(!bridge.process_event(&click));
    assert!(bridge.io().mouse_down[mouse_button::LEFT]);

    bridge.context_mut().io_mut().want_capture_mouse = true;
    assert!(bridge.process_event(&click));
    assert!(!bridge.process_event(&Event::key_pressed(Keycode::Tab, Modifiers::empty())));

    bridge.context_mut().io_mut().want_capture_keyboard = true;
    assert!(bridge.process_event(&Event::key_pressed(Keycode::Tab, Modifiers::CONTROL)));
    assert!(bridge.io().is_key_down(Key::Tab));
    assert!(bridge.io().key_ctrl);
}

#[test]
fn test_text_entry_queues_characters() {
    let mut bridge = bridge(BridgeConfig::new());
    for rune in "hé!".chars() {
        bridge.process_event(&Event::TextEntered { rune });
    }
    assert_eq!(bridge.io().input_queue_characters(), &['h', 'é', '!']);
}

#[test]
fn test_cursor_shape_applied_once_across_updates() {
    let mut bridge = bridge(BridgeConfig::new());
    bridge.context_mut().set_mouse_cursor(MouseCursor::TextInput);

    bridge.update(Duration::from_millis(16));
    bridge.render_draw_data();
    bridge.update(Duration::from_millis(16));

    assert_eq!(bridge.window().cursor_shape_calls(), 1);
    assert_eq!(bridge.window().cursor(), CursorShape::Text);
    assert_eq!(
        bridge.cursor_state(),
        Some(CursorState {
            shape: MouseCursor::TextInput,
            visible: true
        })
    );
}

#[test]
fn test_cursor_hidden_then_shown_again() {
    let mut bridge = bridge(BridgeConfig::new());
    bridge.context_mut().set_mouse_cursor(MouseCursor::Hand);
    bridge.update(Duration::ZERO);
    bridge.context_mut().set_mouse_cursor(MouseCursor::None);
    bridge.update(Duration::ZERO);
    bridge.context_mut().set_mouse_cursor(MouseCursor::Hand);
    bridge.update(Duration::ZERO);

    assert_eq!(
        bridge.window().cursor_calls(),
        &[
            CursorCall::Visible(true),
            CursorCall::Shape(CursorShape::Hand),
            CursorCall::Visible(false),
            CursorCall::Visible(true),
            CursorCall::Shape(CursorShape::Hand),
        ]
    );
}

#[test]
fn test_cursor_untouched_when_changes_disabled() {
    let mut bridge = bridge(BridgeConfig::new().with_cursor_changes(false));
    bridge.context_mut().set_mouse_cursor(MouseCursor::ResizeAll);
    bridge.update(Duration::ZERO);

    assert!(bridge.window().cursor_calls().is_empty());
    assert_eq!(bridge.cursor_state(), None);
}

#[test]
fn test_software_cursor_hides_host_cursor() {
    let mut bridge = bridge(BridgeConfig::new().with_mouse_draw_cursor(true));
    assert!(bridge.io().mouse_draw_cursor);

    bridge.update(Duration::ZERO);
    bridge.update(Duration::ZERO);

    assert!(!bridge.window().cursor_visible());
    assert_eq!(bridge.window().cursor_calls(), &[CursorCall::Visible(false)]);
}

#[test]
fn test_clipboard_round_trip_through_host() {
    let mut host = HeadlessClipboard::new();
    host.set_string("from host");
    let mut bridge = bridge_with_clipboard(BridgeConfig::new(), host.clone());

    let io = bridge.context_mut().io_mut();
    assert_eq!(io.clipboard_text().as_deref(), Some("from host"));
    assert!(io.set_clipboard_text("from ui"));
    assert_eq!(host.get_string(), "from ui");
}

#[test]
fn test_gamepad_ignored_unless_enabled() {
    let press = Event::GamepadButtonPressed {
        id: GamepadId(0),
        button: GamepadButton::A,
    };

    let mut disabled = bridge(BridgeConfig::new());
    assert!(!disabled.process_event(&press));
    assert_eq!(disabled.io().nav_input(NavInput::Activate), 0.0);

    let mut enabled = bridge(BridgeConfig::new().with_gamepad(true));
    assert!(!enabled.process_event(&press));
    assert_eq!(enabled.io().nav_input(NavInput::Activate), 1.0);
}
