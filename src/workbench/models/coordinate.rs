//! # Coordinates and Buffer Snapshots
//!
//! Both values are transient: a coordinate is re-read from the status bar and
//! a snapshot is re-copied through the clipboard for every operation.

use crate::workbench::error::{PilotError, PilotResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based cursor position, matching the gutter numbering on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub line: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}

/// Buffer content split into lines
///
/// Always holds at least one line; an empty buffer is one empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    lines: Vec<String>,
}

impl BufferSnapshot {
    /// Split clipboard text on `\n`
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Fail with `LineOutOfRange` unless `1 <= line <= line_count`
    pub fn check_line(&self, line: usize) -> PilotResult<()> {
        if line < 1 || line > self.line_count() {
            return Err(PilotError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            });
        }
        Ok(())
    }

    /// The `line`-th line, 1-based
    pub fn line(&self, line: usize) -> PilotResult<&str> {
        self.check_line(line)?;
        Ok(&self.lines[line - 1])
    }

    /// Copy of this snapshot with one line substituted
    pub fn with_line_replaced(&self, line: usize, text: &str) -> PilotResult<Self> {
        self.check_line(line)?;
        let mut lines = self.lines.clone();
        lines[line - 1] = text.to_string();
        Ok(Self { lines })
    }

    /// Join the lines back with `\n`
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_should_yield_one_empty_line() {
        let snapshot = BufferSnapshot::from_text("");
        assert_eq!(snapshot.line_count(), 1);
        assert_eq!(snapshot.line(1).unwrap(), "");
    }

    #[test]
    fn trailing_newline_should_count_as_extra_line() {
        let snapshot = BufferSnapshot::from_text("ab\ncde\n");
        assert_eq!(snapshot.line_count(), 3);
        assert_eq!(snapshot.line(2).unwrap(), "cde");
        assert_eq!(snapshot.line(3).unwrap(), "");
    }

    #[test]
    fn line_should_reject_zero_and_past_end() {
        let snapshot = BufferSnapshot::from_text("one\ntwo\nthree");

        for line in [0, 4] {
            match snapshot.line(line) {
                Err(PilotError::LineOutOfRange {
                    line: reported,
                    line_count,
                }) => {
                    assert_eq!(reported, line);
                    assert_eq!(line_count, 3);
                }
                other => panic!("Expected LineOutOfRange for line {line}, got {other:?}"),
            }
        }
    }

    #[test]
    fn with_line_replaced_should_keep_other_lines() {
        let snapshot = BufferSnapshot::from_text("one\ntwo\nthree");
        let replaced = snapshot.with_line_replaced(2, "xyz").unwrap();

        assert_eq!(replaced.to_text(), "one\nxyz\nthree");
        assert_eq!(snapshot.to_text(), "one\ntwo\nthree");
    }

    #[test]
    fn coordinate_should_display_like_status_bar() {
        assert_eq!(Coordinate::new(4, 2).to_string(), "Ln 4, Col 2");
    }
}
