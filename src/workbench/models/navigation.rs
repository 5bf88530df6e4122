//! # Navigation Plans
//!
//! The editor offers no absolute "set cursor" primitive, so the cursor is moved
//! with arrow key presses derived from the delta between two coordinates.
//! Vertical moves are sent as one batch. Horizontal moves are walked one press
//! at a time through [`HorizontalWalk`] so a wrap onto a neighbouring line is
//! caught the moment it happens.

use crate::workbench::io::{Key, KeyInput};
use crate::workbench::models::Coordinate;

/// Arrow key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn key(self) -> Key {
        match self {
            Direction::Up => Key::Up,
            Direction::Down => Key::Down,
            Direction::Left => Key::Left,
            Direction::Right => Key::Right,
        }
    }
}

/// Presses along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMove {
    pub direction: Direction,
    pub count: usize,
}

impl AxisMove {
    /// `current - target >= 0` moves up, otherwise down
    pub fn vertical(current_line: usize, target_line: usize) -> Self {
        if current_line >= target_line {
            Self {
                direction: Direction::Up,
                count: current_line - target_line,
            }
        } else {
            Self {
                direction: Direction::Down,
                count: target_line - current_line,
            }
        }
    }

    /// `current - target >= 0` moves left, otherwise right
    pub fn horizontal(current_column: usize, target_column: usize) -> Self {
        if current_column >= target_column {
            Self {
                direction: Direction::Left,
                count: current_column - target_column,
            }
        } else {
            Self {
                direction: Direction::Right,
                count: target_column - current_column,
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// All presses of this move as one batch
    pub fn keys(&self) -> Vec<KeyInput> {
        KeyInput::repeat(self.direction.key(), self.count)
    }

    /// A single press of this move
    pub fn single_press(&self) -> KeyInput {
        KeyInput::press(self.direction.key())
    }
}

/// Presses needed on both axes to go from one coordinate to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationPlan {
    pub vertical: AxisMove,
    pub horizontal: AxisMove,
}

impl NavigationPlan {
    pub fn between(current: Coordinate, target: Coordinate) -> Self {
        Self {
            vertical: AxisMove::vertical(current.line, target.line),
            horizontal: AxisMove::horizontal(current.column, target.column),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }
}

/// Result of observing the cursor after one horizontal press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still on the fixed line, more presses to go
    Advanced,
    /// Still on the fixed line, no presses left
    Arrived,
    /// The press moved the cursor onto another line
    Wrapped { observed: Coordinate },
}

/// Step machine for a horizontal move confined to one line
#[derive(Debug, Clone)]
pub struct HorizontalWalk {
    fixed_line: usize,
    step: AxisMove,
    remaining: usize,
}

impl HorizontalWalk {
    /// Start a walk from `current` (already on the target line) towards `target_column`
    pub fn new(current: Coordinate, target_column: usize) -> Self {
        let step = AxisMove::horizontal(current.column, target_column);
        Self {
            fixed_line: current.line,
            step,
            remaining: step.count,
        }
    }

    pub fn fixed_line(&self) -> usize {
        self.fixed_line
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The press to send next, or `None` once the walk is complete
    pub fn next_press(&self) -> Option<KeyInput> {
        (self.remaining > 0).then(|| self.step.single_press())
    }

    /// Record the coordinate observed right after a press
    pub fn observe(&mut self, observed: Coordinate) -> StepOutcome {
        if observed.line != self.fixed_line {
            return StepOutcome::Wrapped { observed };
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            StepOutcome::Arrived
        } else {
            StepOutcome::Advanced
        }
    }
}
