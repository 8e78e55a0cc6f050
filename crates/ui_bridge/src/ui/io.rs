//! The UI library's persistent input/output record
//!
//! `Io` holds everything the bridge writes (key and button state, pointer,
//! scroll, text, display metrics) and the flags the UI library writes back
//! for the bridge to read (want-capture, requested behaviours).

use bitflags::bitflags;

use super::input::{mouse_button, Key, NavInput};
use crate::foundation::math::Vec2;

bitflags! {
    /// Behaviour switches set by the application
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConfigFlags: u32 {
        /// Gamepad navigation; the backend fills `nav_inputs`
        const NAV_ENABLE_GAMEPAD = 1 << 1;
        /// The backend must leave the host cursor shape alone
        const NO_MOUSE_CURSOR_CHANGE = 1 << 5;
    }
}

bitflags! {
    /// Capabilities declared by the backend at init
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BackendFlags: u32 {
        /// The backend feeds gamepad navigation inputs
        const HAS_GAMEPAD = 1 << 0;
        /// The backend honours cursor shape requests
        const HAS_MOUSE_CURSORS = 1 << 1;
    }
}

/// Clipboard callbacks the UI library calls for copy and paste
pub trait ClipboardBackend {
    /// Current clipboard text, if any
    fn get(&mut self) -> Option<String>;
    /// Replace the clipboard text
    fn set(&mut self, text: &str);
}

/// Input state and display metrics shared between the UI library and its backend
pub struct Io {
    /// Application configuration flags
    pub config_flags: ConfigFlags,
    /// Capabilities the backend declared
    pub backend_flags: BackendFlags,
    /// Name of the platform backend, for diagnostics
    pub backend_platform_name: Option<String>,
    /// Name of the renderer backend, for diagnostics
    pub backend_renderer_name: Option<String>,

    /// Logical display size
    pub display_size: Vec2,
    /// Framebuffer pixels per logical unit
    pub display_framebuffer_scale: Vec2,
    /// Seconds elapsed since the previous frame
    pub delta_time: f32,

    /// Pointer position in display coordinates
    pub mouse_pos: Vec2,
    /// Down-state per mouse button, see [`mouse_button`]
    pub mouse_down: [bool; mouse_button::COUNT],
    /// Vertical wheel steps accumulated this frame
    pub mouse_wheel: i32,
    /// Horizontal wheel steps accumulated this frame
    pub mouse_wheel_h: i32,
    /// The UI library draws its own cursor
    pub mouse_draw_cursor: bool,

    /// Down-state per tracked key, indexed by [`Key::index`]
    pub keys_down: [bool; Key::COUNT],
    /// Control modifier
    pub key_ctrl: bool,
    /// Shift modifier
    pub key_shift: bool,
    /// Alt modifier
    pub key_alt: bool,
    /// Super / command modifier
    pub key_super: bool,

    /// Analog navigation values in `[0, 1]`, indexed by [`NavInput::index`]
    pub nav_inputs: [f32; NavInput::COUNT],

    /// The library wants keyboard input this frame
    pub want_capture_keyboard: bool,
    /// The library wants pointer input this frame
    pub want_capture_mouse: bool,

    input_queue_characters: Vec<char>,
    clipboard: Option<Box<dyn ClipboardBackend>>,
}

impl Default for Io {
    fn default() -> Self {
        Self {
            config_flags: ConfigFlags::empty(),
            backend_flags: BackendFlags::empty(),
            backend_platform_name: None,
            backend_renderer_name: None,
            display_size: Vec2::new(-1.0, -1.0),
            display_framebuffer_scale: Vec2::new(1.0, 1.0),
            delta_time: 1.0 / 60.0,
            mouse_pos: Vec2::new(f32::MIN, f32::MIN),
            mouse_down: [false; mouse_button::COUNT],
            mouse_wheel: 0,
            mouse_wheel_h: 0,
            mouse_draw_cursor: false,
            keys_down: [false; Key::COUNT],
            key_ctrl: false,
            key_shift: false,
            key_alt: false,
            key_super: false,
            nav_inputs: [0.0; NavInput::COUNT],
            want_capture_keyboard: false,
            want_capture_mouse: false,
            input_queue_characters: Vec::new(),
            clipboard: None,
        }
    }
}

impl std::fmt::Debug for Io {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Io")
            .field("config_flags", &self.config_flags)
            .field("backend_flags", &self.backend_flags)
            .field("display_size", &self.display_size)
            .field("display_framebuffer_scale", &self.display_framebuffer_scale)
            .field("mouse_pos", &self.mouse_pos)
            .field("mouse_down", &self.mouse_down)
            .field("keys_down", &self.keys_down)
            .field("has_clipboard", &self.clipboard.is_some())
            .finish_non_exhaustive()
    }
}

impl Io {
    /// Whether `key` is currently held
    pub const fn is_key_down(&self, key: Key) -> bool {
        self.keys_down[key.index()]
    }

    /// Current value of a navigation input
    pub const fn nav_input(&self, input: NavInput) -> f32 {
        self.nav_inputs[input.index()]
    }

    /// Queue a single character of text input
    pub fn add_input_character(&mut self, c: char) {
        if c != '\0' {
            self.input_queue_characters.push(c);
        }
    }

    /// Queue every character of a UTF-8 string
    pub fn add_input_characters_utf8(&mut self, text: &str) {
        for c in text.chars() {
            self.add_input_character(c);
        }
    }

    /// Characters queued since the last drain
    pub fn input_queue_characters(&self) -> &[char] {
        &self.input_queue_characters
    }

    /// Take the queued characters (the UI library does this once per frame)
    pub fn drain_input_characters(&mut self) -> Vec<char> {
        std::mem::take(&mut self.input_queue_characters)
    }

    /// Install the clipboard callbacks
    pub fn set_clipboard_backend(&mut self, backend: Box<dyn ClipboardBackend>) {
        self.clipboard = Some(backend);
    }

    /// Read the clipboard through the installed callbacks
    pub fn clipboard_text(&mut self) -> Option<String> {
        self.clipboard.as_mut().and_then(|backend| backend.get())
    }

    /// Write the clipboard through the installed callbacks
    ///
    /// Returns false when no clipboard backend is installed.
    pub fn set_clipboard_text(&mut self, text: &str) -> bool {
        match self.clipboard.as_mut() {
            Some(backend) => {
                backend.set(text);
                true
            }
            None => false,
        }
    }

    /// Reset per-frame scroll accumulators (the UI library does this after consuming them)
    pub fn end_frame(&mut self) {
        self.mouse_wheel = 0;
        self.mouse_wheel_h = 0;
    }
}
