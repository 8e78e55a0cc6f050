//! Input identifiers defined by the UI library
//!
//! These are the library's own names for keys, navigation inputs, mouse
//! buttons and cursor shapes. The bridge maps host identifiers onto them.

/// Keys the UI library tracks down-state for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Key {
    /// Tab key
    Tab,
    /// Left arrow
    LeftArrow,
    /// Right arrow
    RightArrow,
    /// Up arrow
    UpArrow,
    /// Down arrow
    DownArrow,
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
    /// Enter / return
    Enter,
    /// Escape
    Escape,
    /// Enter on the numeric keypad
    KeyPadEnter,
    /// A key (select all)
    A,
    /// C key (copy)
    C,
    /// V key (paste)
    V,
    /// X key (cut)
    X,
    /// Y key (redo)
    Y,
    /// Z key (undo)
    Z,
}

impl Key {
    /// Number of tracked keys
    pub const COUNT: usize = 22;

    /// Index into `Io::keys_down`
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Analog navigation inputs fed from a gamepad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum NavInput {
    /// Activate / open / toggle
    Activate,
    /// Cancel / close / exit
    Cancel,
    /// Text input / on-screen keyboard
    Input,
    /// Tap: toggle menu, hold: focus
    Menu,
    /// D-pad left
    DpadLeft,
    /// D-pad right
    DpadRight,
    /// D-pad up
    DpadUp,
    /// D-pad down
    DpadDown,
    /// Left stick left
    LStickLeft,
    /// Left stick right
    LStickRight,
    /// Left stick up
    LStickUp,
    /// Left stick down
    LStickDown,
    /// Focus previous window
    FocusPrev,
    /// Focus next window
    FocusNext,
    /// Slower tweaks
    TweakSlow,
    /// Faster tweaks
    TweakFast,
}

impl NavInput {
    /// Number of navigation inputs
    pub const COUNT: usize = 16;

    /// Index into `Io::nav_inputs`
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Mouse button indices into `Io::mouse_down`
///
/// Right comes before middle, unlike the natural left/middle/right order.
pub mod mouse_button {
    /// Left button
    pub const LEFT: usize = 0;
    /// Right button
    pub const RIGHT: usize = 1;
    /// Middle button
    pub const MIDDLE: usize = 2;
    /// Number of tracked buttons
    pub const COUNT: usize = 3;
}

/// Cursor shape requested by the UI library for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseCursor {
    /// No cursor should be shown
    None,
    /// Default arrow
    #[default]
    Arrow,
    /// Text input I-beam
    TextInput,
    /// Move in all directions
    ResizeAll,
    /// Vertical resize
    ResizeNS,
    /// Horizontal resize
    ResizeEW,
    /// Resize along the bottom-left / top-right diagonal
    ResizeNESW,
    /// Resize along the top-left / bottom-right diagonal
    ResizeNWSE,
    /// Pointing hand
    Hand,
    /// Operation not allowed
    NotAllowed,
    /// Busy
    Wait,
    /// Busy in the background
    Progress,
}
