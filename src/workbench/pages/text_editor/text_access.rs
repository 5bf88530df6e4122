//! Full-text and per-line access through the clipboard

use super::TextEditor;
use crate::config::CursorRestore;
use crate::workbench::error::PilotResult;
use crate::workbench::io::{Driver, Key, KeyInput};
use crate::workbench::models::BufferSnapshot;
use crate::workbench::Clipboard;

impl<'w, D: Driver, C: Clipboard> TextEditor<'w, D, C> {
    /// Whole buffer content, lines joined with `\n`
    ///
    /// Select-all moves the cursor to the end of the buffer. With
    /// [`CursorRestore::Restore`] it is driven back to where it was; with
    /// [`CursorRestore::Nudge`] a single UP press is sent, which only lands on
    /// the original position by coincidence.
    ///
    /// Restoring is best effort: when the position cannot be read or reached,
    /// the failure is logged and the copied text is still returned.
    pub fn get_text(&self) -> PilotResult<String> {
        match self.bench.config().cursor_restore {
            CursorRestore::Restore => {
                let before = self.coordinates();
                let text = self.copy_all()?;
                self.send(&[KeyInput::press(Key::Escape)])?;

                let restored = before.and_then(|coordinate| {
                    self.navigate_within(coordinate, &BufferSnapshot::from_text(&text))
                });
                if let Err(e) = restored {
                    tracing::warn!("Cursor not restored after reading editor text: {}", e);
                }
                Ok(text)
            }
            CursorRestore::Nudge => {
                let text = self.copy_all()?;
                self.send(&[KeyInput::press(Key::Up)])?;
                Ok(text)
            }
        }
    }

    /// Fresh line view of the buffer
    pub fn snapshot(&self) -> PilotResult<BufferSnapshot> {
        Ok(BufferSnapshot::from_text(&self.get_text()?))
    }

    fn copy_all(&self) -> PilotResult<String> {
        self.send(&[self.command_chord('a'), self.command_chord('c')])?;
        let text = self.bench.clipboard().read_text()?;
        tracing::debug!("Copied {} bytes from editor", text.len());
        Ok(text)
    }

    /// Replace the whole buffer by pasting `text` over a full selection
    pub fn set_text(&self, text: &str, format: bool) -> PilotResult<()> {
        self.bench.clipboard().write_text(text)?;
        self.send(&[self.command_chord('a'), self.command_chord('v')])?;
        tracing::debug!("Replaced editor content with {} bytes", text.len());

        if format {
            self.format_document()?;
        }
        Ok(())
    }

    /// Delete everything; the old content is left on the clipboard
    pub fn clear_text(&self) -> PilotResult<()> {
        self.send(&[
            self.command_chord('a'),
            self.command_chord('c'),
            KeyInput::press(Key::Backspace),
        ])
    }

    pub fn number_of_lines(&self) -> PilotResult<usize> {
        Ok(self.snapshot()?.line_count())
    }

    /// Content of the 1-based `line`
    pub fn text_at_line(&self, line: usize) -> PilotResult<String> {
        Ok(self.snapshot()?.line(line)?.to_string())
    }

    /// Replace the 1-based `line`, keeping every other line
    pub fn set_text_at_line(&self, line: usize, text: &str) -> PilotResult<()> {
        let updated = self.snapshot()?.with_line_replaced(line, text)?;
        self.set_text(&updated.to_text(), false)
    }
}
