//! # Workbench Page Objects
//!
//! Entry point for test code: a [`Workbench`] owns the automation driver, the
//! clipboard and the configuration, and hands out page objects that borrow it.
//!
//! ```text
//! Workbench ──▶ TextEditor ──▶ ContentAssist ──▶ ContentAssistItem
//!           │              └─▶ ContextMenu
//!           ├─▶ StatusBar
//!           └─▶ ViewSection ──▶ ViewItem
//! ```

pub mod clipboard;
pub mod error;
pub mod io;
pub mod locators;
pub mod models;
pub mod pages;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use error::{PilotError, PilotResult};
pub use io::{Condition, Driver, DriverError, ElementHandle, Key, KeyInput, Modifier, Selector};
pub use locators::Locators;
pub use models::{BufferSnapshot, Coordinate, NavigationPlan};
pub use pages::{
    ContentAssist, ContentAssistItem, ContextMenu, Locatable, StatusBar, TextEditor, ViewItem,
    ViewSection, Waitable,
};

use crate::config::PilotConfig;
use pages::lookup::title_matches;

/// One automation session against a running workbench
pub struct Workbench<D: Driver, C: Clipboard> {
    driver: D,
    clipboard: C,
    config: PilotConfig,
}

impl<D: Driver, C: Clipboard> Workbench<D, C> {
    pub fn new(driver: D, clipboard: C, config: PilotConfig) -> Self {
        Self {
            driver,
            clipboard,
            config,
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn config(&self) -> &PilotConfig {
        &self.config
    }

    pub fn locators(&self) -> &Locators {
        &self.config.locators
    }

    /// The active text editor
    pub fn text_editor(&self) -> PilotResult<TextEditor<'_, D, C>> {
        let group = self.driver.locate(None, &self.locators().editor_group)?;
        let editor = self.driver.locate(Some(&group), &self.locators().editor)?;
        tracing::info!("Attached to text editor {}", editor);
        Ok(TextEditor::new(self, group, editor))
    }

    pub fn status_bar(&self) -> StatusBar<'_, D> {
        StatusBar::new(&self.driver, self.locators())
    }

    /// The side bar section whose title matches `title`, ignoring case
    pub fn view_section(&self, title: &str) -> PilotResult<ViewSection<'_, D, C>> {
        let locators = self.locators();
        for section in self.driver.locate_all(None, &locators.view_section)? {
            let title_element = self.driver.locate(Some(&section), &locators.section_title)?;
            let section_title = self.driver.text(&title_element)?;
            if title_matches(&section_title, title) {
                tracing::info!("Found view section '{}'", section_title);
                return Ok(ViewSection::new(self, section, section_title));
            }
        }
        Err(PilotError::ItemNotFound {
            label: title.to_string(),
        })
    }
}
