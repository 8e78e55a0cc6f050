//! Clipboard forwarding
//!
//! Adapts the host clipboard service to the callbacks the UI library calls
//! for copy and paste.

use crate::host::clipboard::HostClipboard;
use crate::ui::io::ClipboardBackend;

/// Forwards UI clipboard requests to the host
#[derive(Debug, Clone)]
pub struct ClipboardBridge<C> {
    host: C,
}

impl<C: HostClipboard> ClipboardBridge<C> {
    /// Wrap a host clipboard
    pub const fn new(host: C) -> Self {
        Self { host }
    }
}

impl<C: HostClipboard> ClipboardBackend for ClipboardBridge<C> {
    fn get(&mut self) -> Option<String> {
        Some(self.host.get_string())
    }

    fn set(&mut self, text: &str) {
        self.host.set_string(text);
    }
}
