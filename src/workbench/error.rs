//! Page object errors

use crate::workbench::clipboard::ClipboardError;
use crate::workbench::io::DriverError;
use crate::workbench::models::Coordinate;
use thiserror::Error;

/// Errors surfaced by page object operations
#[derive(Debug, Error)]
pub enum PilotError {
    #[error("Line number {line} does not exist (buffer has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    #[error("Column number {column} does not exist")]
    ColumnOutOfRange { column: usize },

    #[error("Column number {column} is not accessible on line {line}")]
    ColumnUnreachable { line: usize, column: usize },

    #[error("Cursor ended at {actual} instead of {expected}")]
    NavigationMismatch {
        expected: Coordinate,
        actual: Coordinate,
    },

    #[error("Cannot read cursor position from status text {0:?}")]
    MalformedStatus(String),

    #[error("Action '{0}' is not available")]
    ActionUnavailable(String),

    #[error("No item labelled '{label}'")]
    ItemNotFound { label: String },

    #[error("Tree item '{label}' has no usable aria-level (found {value:?})")]
    MalformedLevel {
        label: String,
        value: Option<String>,
    },

    #[error("Not a file URI: {0}")]
    InvalidFileUri(String),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Page object result
pub type PilotResult<T> = Result<T, PilotError>;

impl PilotError {
    /// True for the failures a menu reports when an action does not apply to
    /// the current content: the entry is missing or disabled.
    pub fn is_unavailable_action(&self) -> bool {
        matches!(
            self,
            PilotError::ActionUnavailable(_)
                | PilotError::ItemNotFound { .. }
                | PilotError::Driver(DriverError::NotFound { .. })
        )
    }
}
