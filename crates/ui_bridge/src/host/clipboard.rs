//! Host clipboard service

/// OS clipboard access provided by the host
pub trait HostClipboard {
    /// Current clipboard text, empty when the clipboard holds no text
    fn get_string(&self) -> String;

    /// Replace the clipboard text
    fn set_string(&mut self, text: &str);
}
