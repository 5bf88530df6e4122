//! Configuration constants and utilities for editor-pilot
//!
//! Settings come from defaults overridden by environment variables. The
//! locator table can additionally be replaced, fully or partially, by a JSON
//! file when the workbench markup differs from the defaults.

use crate::workbench::io::Modifier;
use crate::workbench::locators::Locators;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

/// Environment variable naming a locator JSON file
pub const LOCATORS_PATH_ENV_VAR: &str = "EDITOR_PILOT_LOCATORS";

/// Environment variable overriding the explicit wait timeout, in milliseconds
pub const WAIT_TIMEOUT_ENV_VAR: &str = "EDITOR_PILOT_TIMEOUT_MS";

/// Environment variable selecting the cursor handling after full-text reads
pub const CURSOR_RESTORE_ENV_VAR: &str = "EDITOR_PILOT_CURSOR_RESTORE";

/// Default explicit wait timeout
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Host platform, deciding the modifier used by editor shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Modifier for select-all, copy, paste and save
    pub fn command_modifier(self) -> Modifier {
        match self {
            Platform::MacOs => Modifier::Meta,
            Platform::Other => Modifier::Control,
        }
    }
}

/// What to do with the cursor after select-all + copy moved it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorRestore {
    /// Navigate back to the coordinate read before the copy
    #[default]
    Restore,
    /// Single UP press; only lands on the original position in special cases
    Nudge,
}

impl CursorRestore {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "restore" => Some(CursorRestore::Restore),
            "nudge" => Some(CursorRestore::Nudge),
            _ => None,
        }
    }
}

/// Settings shared by all page objects of one workbench session
#[derive(Debug, Clone)]
pub struct PilotConfig {
    pub locators: Locators,
    pub wait_timeout: Duration,
    pub platform: Platform,
    pub cursor_restore: CursorRestore,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            locators: Locators::default(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            platform: Platform::current(),
            cursor_restore: CursorRestore::default(),
        }
    }
}

impl PilotConfig {
    /// Build the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(LOCATORS_PATH_ENV_VAR) {
            config.locators = load_locators(Path::new(&path))?;
        }

        if let Some(millis) = lookup(WAIT_TIMEOUT_ENV_VAR) {
            let millis: u64 = millis
                .trim()
                .parse()
                .with_context(|| format!("{WAIT_TIMEOUT_ENV_VAR} must be a number, got '{millis}'"))?;
            config.wait_timeout = Duration::from_millis(millis);
        }

        if let Some(name) = lookup(CURSOR_RESTORE_ENV_VAR) {
            config.cursor_restore = CursorRestore::from_name(&name).with_context(|| {
                format!("{CURSOR_RESTORE_ENV_VAR} must be 'restore' or 'nudge', got '{name}'")
            })?;
        }

        tracing::debug!(
            "Loaded configuration: timeout={:?}, platform={:?}, cursor_restore={:?}",
            config.wait_timeout,
            config.platform,
            config.cursor_restore
        );

        Ok(config)
    }
}

/// Read a locator table from a JSON file
pub fn load_locators(path: &Path) -> Result<Locators> {
    tracing::debug!("Loading locators from '{}'", path.display());

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read locator file '{}'", path.display()))?;

    Locators::from_json(&json)
        .with_context(|| format!("Invalid locator file '{}'", path.display()))
}
