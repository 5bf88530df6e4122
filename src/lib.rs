//! # editor-pilot - Page Objects for a Monaco-based Code Editor
//!
//! Drives the editor of a browser-hosted workbench through an automation
//! driver. The editor exposes neither its text nor its cursor, so both are
//! inferred from side channels:
//!
//! ```text
//!                   key presses / chords
//! ┌────────────┐ ─────────────────────────▶ ┌────────────────┐
//! │ TextEditor │                            │  Driver (DOM)  │
//! │            │ ◀───── status bar text ─── │                │
//! └────────────┘                            └────────────────┘
//!       ▲                                           │
//!       │            select-all + copy              │
//!       └──────────────── Clipboard ◀───────────────┘
//! ```
//!
//! - **Text** comes from a select-all + copy round-trip through the clipboard
//! - **Cursor** comes from parsing the "Ln X, Col Y" status bar item
//! - **Movement** replays arrow keys, verifying every horizontal press
//!
//! The driver and the clipboard are traits; [`workbench::io::MockWorkbench`]
//! simulates the editor for tests.

pub mod config;
pub mod logging;
pub mod workbench;

pub use workbench::*;
