//! # Clipboard Bridge
//!
//! The only channel for bulk text exchange with the editor surface.
//! Supports both an in-process slot (tests, headless runs) and the host clipboard.
//!
//! The clipboard is a single-slot, last-writer-wins resource shared with the
//! editor itself. Nothing here serializes access across sessions; callers must
//! not run unrelated clipboard users while an editor session is active.

use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Clipboard access failures
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access system clipboard: {0}")]
    Unavailable(String),

    #[error("Failed to lock clipboard")]
    Poisoned,

    #[error("Clipboard transfer failed: {0}")]
    Transfer(String),
}

/// Trait for clipboard implementations
pub trait Clipboard: Send {
    /// Replace the clipboard payload
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Read the current payload; an empty clipboard reads as an empty string
    fn read_text(&self) -> Result<String, ClipboardError>;
}

impl<C: Clipboard + Sync + ?Sized> Clipboard for &C {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }

    fn read_text(&self) -> Result<String, ClipboardError> {
        (**self).read_text()
    }
}

/// In-process clipboard slot
///
/// Clones share the same slot, so a simulated editor and the page objects can
/// exchange text through it exactly like through the host clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    content: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        tracing::debug!("Writing {} characters to memory clipboard", text.len());
        let mut content = self.content.lock().map_err(|_| ClipboardError::Poisoned)?;
        content.clear();
        content.push_str(text);
        Ok(())
    }

    fn read_text(&self) -> Result<String, ClipboardError> {
        let content = self.content.lock().map_err(|_| ClipboardError::Poisoned)?;
        Ok(content.clone())
    }
}

/// Host clipboard through `arboard`
pub struct SystemClipboard {
    clipboard: Arc<Mutex<arboard::Clipboard>>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("clipboard", &"<system clipboard>")
            .finish()
    }
}

impl SystemClipboard {
    /// Open the host clipboard
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        Ok(Self {
            clipboard: Arc::new(Mutex::new(clipboard)),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        tracing::debug!("Writing {} characters to system clipboard", text.len());

        let mut clipboard = self.clipboard.lock().map_err(|_| ClipboardError::Poisoned)?;

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Transfer(e.to_string()))
    }

    fn read_text(&self) -> Result<String, ClipboardError> {
        let mut clipboard = self.clipboard.lock().map_err(|_| ClipboardError::Poisoned)?;

        match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Transfer(e.to_string())),
        }
    }
}
