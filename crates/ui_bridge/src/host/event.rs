//! Host input events
//!
//! The event enum the host window delivers from its queue. The bridge reads
//! these; the host game sees them too unless the bridge reports them consumed.

use bitflags::bitflags;

use crate::foundation::math::{Vec2, Vec2i};

/// Host key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keycode {
    /// Unrecognised key
    Unknown,
    /// A
    A,
    /// B
    B,
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
    /// H
    H,
    /// I
    I,
    /// J
    J,
    /// K
    K,
    /// L
    L,
    /// M
    M,
    /// N
    N,
    /// O
    O,
    /// P
    P,
    /// Q
    Q,
    /// R
    R,
    /// S
    S,
    /// T
    T,
    /// U
    U,
    /// V
    V,
    /// W
    W,
    /// X
    X,
    /// Y
    Y,
    /// Z
    Z,
    /// Digit keys on the main row
    Num(u8),
    /// Function keys F1..F12
    Function(u8),
    /// Tab
    Tab,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Home
    Home,
    /// End
    End,
    /// Insert
    Insert,
    /// Delete
    Delete,
    /// Backspace
    Backspace,
    /// Space bar
    Space,
    /// Return
    Return,
    /// Escape
    Escape,
    /// Enter on the numeric keypad
    NumpadEnter,
    /// Left control
    LeftCtrl,
    /// Right control
    RightCtrl,
    /// Left shift
    LeftShift,
    /// Right shift
    RightShift,
    /// Left alt
    LeftAlt,
    /// Right alt
    RightAlt,
    /// Left super / command
    LeftSuper,
    /// Right super / command
    RightSuper,
}

bitflags! {
    /// Modifier keys held when a key event fired
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift
        const SHIFT = 1 << 0;
        /// Control
        const CONTROL = 1 << 1;
        /// Alt
        const ALT = 1 << 2;
        /// Super / command
        const SUPER = 1 << 3;
    }
}

/// Host mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Middle button / wheel click
    Middle,
    /// Right button
    Right,
    /// First side button
    XButton1,
    /// Second side button
    XButton2,
    /// Touch contact
    Touch,
}

/// Identifier of a connected gamepad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GamepadId(pub u32);

/// Host gamepad buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    /// Bottom face button
    A,
    /// Right face button
    B,
    /// Left face button
    X,
    /// Top face button
    Y,
    /// Back / select
    Back,
    /// Guide / home
    Guide,
    /// Start
    Start,
    /// Left stick click
    LeftStick,
    /// Right stick click
    RightStick,
    /// Left shoulder
    LeftBumper,
    /// Right shoulder
    RightBumper,
    /// D-pad up
    DPadUp,
    /// D-pad down
    DPadDown,
    /// D-pad left
    DPadLeft,
    /// D-pad right
    DPadRight,
}

/// Host gamepad axes, each reported on the signed 16-bit range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    /// Left stick horizontal, negative is left
    LeftX,
    /// Left stick vertical, negative is up
    LeftY,
    /// Right stick horizontal
    RightX,
    /// Right stick vertical
    RightY,
    /// Left trigger, 0 at rest
    TriggerLeft,
    /// Right trigger, 0 at rest
    TriggerRight,
}

/// Payload of key press/release events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key that changed
    pub keycode: Keycode,
    /// Modifiers held at the time of the event
    pub modifiers: Modifiers,
}

/// One event from the host queue
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The window was asked to close
    Closed,
    /// The window changed size
    Resized {
        /// New logical size
        size: Vec2i,
    },
    /// A key went down
    KeyPressed(KeyEvent),
    /// A key went up
    KeyReleased(KeyEvent),
    /// The pointer moved
    MouseMoved {
        /// New position, already in display coordinates
        coords: Vec2,
    },
    /// A mouse button went down
    MouseButtonPressed {
        /// Button
        button: MouseButton,
        /// Pointer position
        coords: Vec2,
    },
    /// A mouse button went up
    MouseButtonReleased {
        /// Button
        button: MouseButton,
        /// Pointer position
        coords: Vec2,
    },
    /// The wheel scrolled
    MouseWheelScrolled {
        /// Scroll offset; only the sign of each component matters to the bridge
        offset: Vec2i,
        /// Pointer position
        coords: Vec2,
    },
    /// A character was typed
    TextEntered {
        /// The typed character
        rune: char,
    },
    /// A gamepad button went down
    GamepadButtonPressed {
        /// Gamepad
        id: GamepadId,
        /// Button
        button: GamepadButton,
    },
    /// A gamepad button went up
    GamepadButtonReleased {
        /// Gamepad
        id: GamepadId,
        /// Button
        button: GamepadButton,
    },
    /// A gamepad axis moved
    GamepadAxisMoved {
        /// Gamepad
        id: GamepadId,
        /// Axis
        axis: GamepadAxis,
        /// Raw value
        value: i16,
    },
}

impl Event {
    /// Key press shorthand
    pub const fn key_pressed(keycode: Keycode, modifiers: Modifiers) -> Self {
        Self::KeyPressed(KeyEvent { keycode, modifiers })
    }

    /// Key release shorthand
    pub const fn key_released(keycode: Keycode, modifiers: Modifiers) -> Self {
        Self::KeyReleased(KeyEvent { keycode, modifiers })
    }
}
