//! Input translation
//!
//! Maps one host [`Event`] onto mutations of the UI library's [`Io`] and
//! reports whether the host game should stop propagating it. The answer is
//! the library's want-capture flag for the event's category, read after the
//! mutation has been applied.

use crate::host::event::{Event, GamepadAxis, GamepadButton, KeyEvent, Keycode, Modifiers, MouseButton};
use crate::ui::input::{mouse_button, Key, NavInput};
use crate::ui::io::{ConfigFlags, Io};

/// Largest magnitude a gamepad axis reports
const AXIS_MAX: i32 = i16::MAX as i32;

/// UI key for a host key code, if the UI library tracks it
pub const fn map_keycode(keycode: Keycode) -> Option<Key> {
    let key = match keycode {
        Keycode::Tab => Key::Tab,
        Keycode::Left => Key::LeftArrow,
        Keycode::Right => Key::RightArrow,
        Keycode::Up => Key::UpArrow,
        Keycode::Down => Key::DownArrow,
        Keycode::PageUp => Key::PageUp,
        Keycode::PageDown => Key::PageDown,
        Keycode::Home => Key::Home,
        Keycode::End => Key::End,
        Keycode::Insert => Key::Insert,
        Keycode::Delete => Key::Delete,
        Keycode::Backspace => Key::Backspace,
        Keycode::Space => Key::Space,
        Keycode::Return => Key::Enter,
        Keycode::Escape => Key::Escape,
        Keycode::NumpadEnter => Key::KeyPadEnter,
        Keycode::A => Key::A,
        Keycode::C => Key::C,
        Keycode::V => Key::V,
        Keycode::X => Key::X,
        Keycode::Y => Key::Y,
        Keycode::Z => Key::Z,
        _ => return None,
    };
    Some(key)
}

/// Index into `Io::mouse_down` for a host button
pub const fn map_mouse_button(button: MouseButton) -> Option<usize> {
    match button {
        MouseButton::Left => Some(mouse_button::LEFT),
        MouseButton::Right => Some(mouse_button::RIGHT),
        MouseButton::Middle => Some(mouse_button::MIDDLE),
        MouseButton::XButton1 | MouseButton::XButton2 | MouseButton::Touch => None,
    }
}

/// Navigation input driven by a gamepad button
pub const fn map_gamepad_button(button: GamepadButton) -> Option<NavInput> {
    let input = match button {
        GamepadButton::A => NavInput::Activate,
        GamepadButton::B => NavInput::Cancel,
        GamepadButton::X => NavInput::Menu,
        GamepadButton::Y => NavInput::Input,
        GamepadButton::DPadLeft => NavInput::DpadLeft,
        GamepadButton::DPadRight => NavInput::DpadRight,
        GamepadButton::DPadUp => NavInput::DpadUp,
        GamepadButton::DPadDown => NavInput::DpadDown,
        GamepadButton::LeftBumper => NavInput::FocusPrev,
        GamepadButton::RightBumper => NavInput::FocusNext,
        GamepadButton::Back
        | GamepadButton::Guide
        | GamepadButton::Start
        | GamepadButton::LeftStick
        | GamepadButton::RightStick => return None,
    };
    Some(input)
}

/// Navigation inputs driven by the negative and positive half of an axis
pub const fn map_gamepad_axis(axis: GamepadAxis) -> Option<(Option<NavInput>, Option<NavInput>)> {
    match axis {
        GamepadAxis::LeftX => Some((Some(NavInput::LStickLeft), Some(NavInput::LStickRight))),
        GamepadAxis::LeftY => Some((Some(NavInput::LStickUp), Some(NavInput::LStickDown))),
        GamepadAxis::TriggerLeft => Some((None, Some(NavInput::TweakSlow))),
        GamepadAxis::TriggerRight => Some((None, Some(NavInput::TweakFast))),
        GamepadAxis::RightX | GamepadAxis::RightY => None,
    }
}

/// Analog value past the dead zone, rescaled to `[0, 1]`
#[allow(clippy::cast_precision_loss)]
fn axis_strength(magnitude: i32, dead_zone: i32) -> f32 {
    let span = (AXIS_MAX - dead_zone).max(1);
    ((magnitude - dead_zone) as f32 / span as f32).clamp(0.0, 1.0)
}

fn update_key(io: &mut Io, key: &KeyEvent, pressed: bool) {
    if let Some(mapped) = map_keycode(key.keycode) {
        io.keys_down[mapped.index()] = pressed;
    } else {
        log::trace!("Ignoring unmapped key {:?}", key.keycode);
    }

    // Modifiers are resynchronised from every key event, not tracked per key
    io.key_ctrl = key.modifiers.contains(Modifiers::CONTROL);
    io.key_shift = key.modifiers.contains(Modifiers::SHIFT);
    io.key_alt = key.modifiers.contains(Modifiers::ALT);
    io.key_super = key.modifiers.contains(Modifiers::SUPER);
}

fn update_mouse_button(io: &mut Io, button: MouseButton, pressed: bool) {
    if let Some(index) = map_mouse_button(button) {
        io.mouse_down[index] = pressed;
    }
}

fn update_gamepad_button(io: &mut Io, button: GamepadButton, pressed: bool) {
    if let Some(input) = map_gamepad_button(button) {
        io.nav_inputs[input.index()] = if pressed { 1.0 } else { 0.0 };
    }
}

fn update_gamepad_axis(io: &mut Io, axis: GamepadAxis, value: i16, dead_zone: i16) {
    let Some((negative, positive)) = map_gamepad_axis(axis) else {
        return;
    };
    let value = i32::from(value);
    let dead_zone = i32::from(dead_zone).abs();

    for input in [negative, positive].into_iter().flatten() {
        io.nav_inputs[input.index()] = 0.0;
    }
    if value > dead_zone {
        if let Some(input) = positive {
            io.nav_inputs[input.index()] = axis_strength(value, dead_zone);
        }
    } else if value < -dead_zone {
        if let Some(input) = negative {
            io.nav_inputs[input.index()] = axis_strength(-value, dead_zone);
        }
    }
}

/// Apply one host event to the UI input state
///
/// Returns true when the UI library wants this category of input, meaning
/// the host game should not also act on the event. Gamepad events and
/// event kinds the bridge does not translate always return false.
pub fn process_event(io: &mut Io, event: &Event, gamepad_dead_zone: i16) -> bool {
    let gamepad = io.config_flags.contains(ConfigFlags::NAV_ENABLE_GAMEPAD);

    match event {
        Event::KeyPressed(key) => {
            update_key(io, key, true);
            io.want_capture_keyboard
        }
        Event::KeyReleased(key) => {
            update_key(io, key, false);
            io.want_capture_keyboard
        }
        Event::MouseWheelScrolled { offset, .. } => {
            // One step per event in the direction of the offset, whatever its magnitude
            io.mouse_wheel_h += offset.x.signum();
            io.mouse_wheel += offset.y.signum();
            io.want_capture_mouse
        }
        Event::MouseButtonPressed { button, .. } => {
            update_mouse_button(io, *button, true);
            io.want_capture_mouse
        }
        Event::MouseButtonReleased { button, .. } => {
            update_mouse_button(io, *button, false);
            io.want_capture_mouse
        }
        Event::MouseMoved { coords } => {
            io.mouse_pos = *coords;
            io.want_capture_mouse
        }
        Event::TextEntered { rune } => {
            io.add_input_character(*rune);
            io.want_capture_keyboard
        }
        Event::GamepadButtonPressed { button, .. } if gamepad => {
            update_gamepad_button(io, *button, true);
            false
        }
        Event::GamepadButtonReleased { button, .. } if gamepad => {
            update_gamepad_button(io, *button, false);
            false
        }
        Event::GamepadAxisMoved { axis, value, .. } if gamepad => {
            update_gamepad_axis(io, *axis, *value, gamepad_dead_zone);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GAMEPAD_DEAD_ZONE;
    use crate::foundation::math::{Vec2, Vec2i};
    use crate::host::event::GamepadId;
    use approx::assert_relative_eq;

    fn process(io: &mut Io, event: &Event) -> bool {
        process_event(io, event, DEFAULT_GAMEPAD_DEAD_ZONE)
    }

    fn wheel(x: i32, y: i32) -> Event {
        Event::MouseWheelScrolled {
            offset: Vec2i::new(x, y),
            coords: Vec2::zeros(),
        }
    }

    fn axis(axis: GamepadAxis, value: i16) -> Event {
        Event::GamepadAxisMoved {
            id: GamepadId(0),
            axis,
            value,
        }
    }

    fn gamepad_io() -> Io {
        let mut io = Io::default();
        io.config_flags |= ConfigFlags::NAV_ENABLE_GAMEPAD;
        io
    }

    #[test]
    fn test_key_press_and_release() {
        let mut io = Io::default();
        process(&mut io, &Event::key_pressed(Keycode::Return, Modifiers::empty()));
        assert!(io.is_key_down(Key::Enter));

        process(&mut io, &Event::key_released(Keycode::Return, Modifiers::empty()));
        assert!(!io.is_key_down(Key::Enter));
    }

    #[test]
    fn test_unmapped_key_only_resyncs_modifiers() {
        let mut io = Io::default();
        io.keys_down[Key::Tab.index()] = true;
        io.key_alt = true;

        process(&mut io, &Event::key_pressed(Keycode::F, Modifiers::CONTROL | Modifiers::SHIFT));

        let mut expected = [false; Key::COUNT];
        expected[Key::Tab.index()] = true;
        assert_eq!(io.keys_down, expected);
        assert!(io.key_ctrl);
        assert!(io.key_shift);
        assert!(!io.key_alt);
        assert!(!io.key_super);
    }

    #[test]
    fn test_modifiers_follow_any_key_event() {
        let mut io = Io::default();
        process(&mut io, &Event::key_pressed(Keycode::LeftCtrl, Modifiers::CONTROL));
        assert!(io.key_ctrl);

        // Releasing an unrelated key with no modifiers held clears the flag
        process(&mut io, &Event::key_released(Keycode::A, Modifiers::empty()));
        assert!(!io.key_ctrl);
    }

    #[test]
    fn test_key_events_report_keyboard_capture() {
        let mut io = Io::default();
        io.want_capture_mouse = true;
        assert!(!process(&mut io, &Event::key_pressed(Keycode::Unknown, Modifiers::empty())));

        io.want_capture_keyboard = true;
        assert!(process(&mut io, &Event::key_pressed(Keycode::Unknown, Modifiers::empty())));
        assert!(process(&mut io, &Event::TextEntered { rune: 'x' }));
    }

    #[test]
    fn test_mouse_button_remap() {
        let cases = [
            (MouseButton::Left, mouse_button::LEFT),
            (MouseButton::Right, mouse_button::RIGHT),
            (MouseButton::Middle, mouse_button::MIDDLE),
        ];
        for (button, index) in cases {
            let mut io = Io::default();
            process(&mut io, &Event::MouseButtonPressed { button, coords: Vec2::zeros() });

            let mut expected = [false; mouse_button::COUNT];
            expected[index] = true;
            assert_eq!(io.mouse_down, expected, "{button:?}");
        }
    }

    #[test]
    fn test_side_buttons_are_ignored() {
        let mut io = Io::default();
        io.mouse_down = [true, false, true];
        for button in [MouseButton::XButton1, MouseButton::XButton2, MouseButton::Touch] {
            process(&mut io, &Event::MouseButtonReleased { button, coords: Vec2::zeros() });
        }
        assert_eq!(io.mouse_down, [true, false, true]);
    }

    #[test]
    fn test_wheel_counts_steps_not_distance() {
        let mut io = Io::default();
        process(&mut io, &wheel(5, -3));
        assert_eq!((io.mouse_wheel_h, io.mouse_wheel), (1, -1));

        process(&mut io, &wheel(0, -40));
        assert_eq!((io.mouse_wheel_h, io.mouse_wheel), (1, -2));
    }

    #[test]
    fn test_mouse_move_is_verbatim() {
        let mut io = Io::default();
        io.want_capture_mouse = true;
        let consumed = process(&mut io, &Event::MouseMoved { coords: Vec2::new(12.5, -3.0) });
        assert!(consumed);
        assert_eq!(io.mouse_pos, Vec2::new(12.5, -3.0));
    }

    #[test]
    fn test_text_is_queued() {
        let mut io = Io::default();
        process(&mut io, &Event::TextEntered { rune: 'ß' });
        process(&mut io, &Event::TextEntered { rune: '€' });
        assert_eq!(io.input_queue_characters(), &['ß', '€']);
    }

    #[test]
    fn test_other_events_are_not_consumed() {
        let mut io = Io::default();
        io.want_capture_keyboard = true;
        io.want_capture_mouse = true;
        assert!(!process(&mut io, &Event::Closed));
        assert!(!process(&mut io, &Event::Resized { size: Vec2i::new(10, 10) }));
    }

    #[test]
    fn test_gamepad_ignored_unless_enabled() {
        let mut io = Io::default();
        let press = Event::GamepadButtonPressed { id: GamepadId(0), button: GamepadButton::A };
        assert!(!process(&mut io, &press));
        assert_relative_eq!(io.nav_input(NavInput::Activate), 0.0);
    }

    #[test]
    fn test_gamepad_buttons_drive_nav_inputs() {
        let mut io = gamepad_io();
        io.want_capture_keyboard = true;
        io.want_capture_mouse = true;

        let press = Event::GamepadButtonPressed { id: GamepadId(0), button: GamepadButton::B };
        assert!(!process(&mut io, &press));
        assert_relative_eq!(io.nav_input(NavInput::Cancel), 1.0);

        let release = Event::GamepadButtonReleased { id: GamepadId(0), button: GamepadButton::B };
        process(&mut io, &release);
        assert_relative_eq!(io.nav_input(NavInput::Cancel), 0.0);
    }

    #[test]
    fn test_axis_dead_zone() {
        let mut io = gamepad_io();

        process(&mut io, &axis(GamepadAxis::LeftX, i16::MIN));
        assert_relative_eq!(io.nav_input(NavInput::LStickLeft), 1.0);
        assert_relative_eq!(io.nav_input(NavInput::LStickRight), 0.0);

        process(&mut io, &axis(GamepadAxis::LeftX, 8000));
        assert_relative_eq!(io.nav_input(NavInput::LStickLeft), 0.0);
        assert_relative_eq!(io.nav_input(NavInput::LStickRight), 0.0);

        process(&mut io, &axis(GamepadAxis::LeftX, i16::MAX));
        assert_relative_eq!(io.nav_input(NavInput::LStickRight), 1.0);
        assert_relative_eq!(io.nav_input(NavInput::LStickLeft), 0.0);
    }

    #[test]
    fn test_axis_strength_is_rescaled() {
        let mut io = gamepad_io();
        let halfway = 8000 + (32767 - 8000) / 2;
        process(&mut io, &axis(GamepadAxis::LeftY, i16::try_from(halfway).unwrap()));
        assert_relative_eq!(io.nav_input(NavInput::LStickDown), 0.5, epsilon = 1e-3);
    }

    #[test]
    fn test_trigger_has_no_negative_input() {
        let mut io = gamepad_io();
        process(&mut io, &axis(GamepadAxis::TriggerRight, -20000));
        assert!(io.nav_inputs.iter().all(|v| *v == 0.0));

        process(&mut io, &axis(GamepadAxis::TriggerRight, 20000));
        assert!(io.nav_input(NavInput::TweakFast) > 0.0);
    }
}
