//! Clipboard access

use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
}

pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard; holds the last copied text
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut contents = self.contents.lock().map_err(|_| ClipboardError::Unavailable)?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard for hosts without one (headless shell)
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_keeps_last_copy() {
        let clipboard = MemoryClipboard::new();
        clipboard.copy("first").unwrap();
        clipboard.copy("second").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
    }

    #[test]
    fn test_no_clipboard_is_unavailable() {
        assert_eq!(NoClipboard.copy("x"), Err(ClipboardError::Unavailable));
    }
}
