//! Cursor movement with per-press verification
//!
//! Vertical presses go out in one batch; UP/DOWN never leave the buffer's line
//! range once the target line is known to exist. Horizontal presses go out one
//! at a time because LEFT/RIGHT wrap onto the neighbouring line at a line end,
//! and the status bar is the only way to notice that.

use super::TextEditor;
use crate::workbench::error::{PilotError, PilotResult};
use crate::workbench::io::Driver;
use crate::workbench::models::{
    BufferSnapshot, Coordinate, HorizontalWalk, NavigationPlan, StepOutcome,
};
use crate::workbench::pages::Locatable;
use crate::workbench::Clipboard;

impl<'w, D: Driver, C: Clipboard> TextEditor<'w, D, C> {
    /// Move the cursor to the 1-based `(line, column)`
    ///
    /// A failed move leaves the cursor wherever the last press put it.
    pub fn move_cursor(&self, line: usize, column: usize) -> PilotResult<()> {
        let snapshot = self.snapshot()?;
        self.navigate_within(Coordinate::new(line, column), &snapshot)
    }

    /// Navigate to `target`, validating it against an already read buffer
    pub(super) fn navigate_within(
        &self,
        target: Coordinate,
        snapshot: &BufferSnapshot,
    ) -> PilotResult<()> {
        snapshot.check_line(target.line)?;
        if target.column < 1 {
            return Err(PilotError::ColumnOutOfRange {
                column: target.column,
            });
        }

        let start = self.coordinates()?;
        let plan = NavigationPlan::between(start, target);
        tracing::debug!("Navigating {} -> {}: {:?}", start, target, plan);
        if plan.is_empty() {
            return Ok(());
        }

        let input_area = self.input_area()?;

        if !plan.vertical.is_empty() {
            self.driver().send_keys(&input_area, &plan.vertical.keys())?;
        }

        let mut current = self.coordinates()?;
        let mut walk = HorizontalWalk::new(current, target.column);
        tracing::debug!(
            "On line {} at column {}, {} horizontal presses to go",
            walk.fixed_line(),
            current.column,
            walk.remaining()
        );

        while let Some(press) = walk.next_press() {
            self.driver().send_keys(&input_area, &[press])?;
            current = self.coordinates()?;

            match walk.observe(current) {
                StepOutcome::Advanced => {}
                StepOutcome::Arrived => break,
                StepOutcome::Wrapped { observed } => {
                    tracing::debug!(
                        "Cursor wrapped to {} while seeking column {} on line {}",
                        observed,
                        target.column,
                        target.line
                    );
                    return Err(PilotError::ColumnUnreachable {
                        line: target.line,
                        column: target.column,
                    });
                }
            }
        }

        if current != target {
            return Err(PilotError::NavigationMismatch {
                expected: target,
                actual: current,
            });
        }

        tracing::debug!("Cursor at {}", current);
        Ok(())
    }
}
