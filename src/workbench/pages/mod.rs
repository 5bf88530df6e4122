//! # Page Objects
//!
//! Each page object wraps one element handle. Shared behaviour comes from two
//! capability traits rather than a class hierarchy:
//!
//! - **Locatable**: scoped lookups below the wrapped element
//! - **Waitable**: block until the wrapped element is visible
//!
//! Row-based widgets (suggestions, menu entries, tree rows) differ only in
//! their lookup predicate, captured by [`lookup::ItemFamily`].

use crate::workbench::error::PilotResult;
use crate::workbench::io::{Condition, Driver, ElementHandle, Selector};
use crate::workbench::locators::has_class;
use std::time::Duration;

pub mod content_assist;
pub mod context_menu;
pub mod lookup;
pub mod status_bar;
pub mod text_editor;
pub mod view_section;

pub use content_assist::{ContentAssist, ContentAssistItem};
pub use context_menu::ContextMenu;
pub use status_bar::{parse_coordinates, StatusBar};
pub use text_editor::TextEditor;
pub use view_section::{ViewItem, ViewSection};

/// Page object that can search below its own element
pub trait Locatable {
    type Driver: Driver;

    fn driver(&self) -> &Self::Driver;

    fn element(&self) -> &ElementHandle;

    fn find(&self, selector: &Selector) -> PilotResult<ElementHandle> {
        Ok(self.driver().locate(Some(self.element()), selector)?)
    }

    fn find_all(&self, selector: &Selector) -> PilotResult<Vec<ElementHandle>> {
        Ok(self.driver().locate_all(Some(self.element()), selector)?)
    }

    /// Whether the element's `class` attribute lists `class`
    fn has_class(&self, class: &str) -> PilotResult<bool> {
        let classes = self
            .driver()
            .attribute(self.element(), "class")?
            .unwrap_or_default();
        Ok(has_class(&classes, class))
    }
}

/// Page object that can wait for its element to become visible
pub trait Waitable: Locatable + Sized {
    fn timeout(&self) -> Duration;

    fn wait(self) -> PilotResult<Self> {
        let condition = Condition::Visible(self.element().clone());
        self.driver().wait_until(&condition, self.timeout())?;
        Ok(self)
    }
}
