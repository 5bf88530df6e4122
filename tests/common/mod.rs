//! Common test utilities for integration tests
//!
//! Builds a workbench session over the simulated editor. The mock shares its
//! clipboard with the session, so copy and paste behave like on a real host.

use editor_pilot::config::{CursorRestore, PilotConfig, Platform};
use editor_pilot::io::MockWorkbench;
use editor_pilot::logging::init_tracing;
use editor_pilot::{MemoryClipboard, Workbench};
use std::time::Duration;

pub type MockBench = Workbench<MockWorkbench, MemoryClipboard>;

/// Configuration with a fixed platform so recorded chords are predictable
pub fn test_config(cursor_restore: CursorRestore) -> PilotConfig {
    PilotConfig {
        platform: Platform::Other,
        wait_timeout: Duration::from_millis(100),
        cursor_restore,
        ..PilotConfig::default()
    }
}

/// Session over `mock` restoring the cursor after full-text reads
pub fn bench(mock: &MockWorkbench) -> MockBench {
    bench_with(mock, CursorRestore::Restore)
}

pub fn bench_with(mock: &MockWorkbench, cursor_restore: CursorRestore) -> MockBench {
    init_tracing();
    Workbench::new(mock.clone(), mock.clipboard(), test_config(cursor_restore))
}
