//! # Models
//!
//! Plain values inferred from the editor: cursor coordinates, buffer
//! snapshots and the key press plans that connect two coordinates.

pub mod coordinate;
pub mod navigation;

pub use coordinate::{BufferSnapshot, Coordinate};
pub use navigation::{AxisMove, Direction, HorizontalWalk, NavigationPlan, StepOutcome};
