//! Suggestion popup of the text editor

use super::lookup::{find_row, labeled_rows, ItemFamily};
use super::{Locatable, Waitable};
use crate::workbench::error::PilotResult;
use crate::workbench::io::{Condition, Driver, ElementHandle};
use crate::workbench::{Clipboard, Workbench};
use std::time::Duration;

/// The open suggest widget
pub struct ContentAssist<'w, D: Driver, C: Clipboard> {
    bench: &'w Workbench<D, C>,
    element: ElementHandle,
}

impl<'w, D: Driver, C: Clipboard> Locatable for ContentAssist<'w, D, C> {
    type Driver = D;

    fn driver(&self) -> &D {
        self.bench.driver()
    }

    fn element(&self) -> &ElementHandle {
        &self.element
    }
}

impl<'w, D: Driver, C: Clipboard> Waitable for ContentAssist<'w, D, C> {
    fn timeout(&self) -> Duration {
        self.bench.config().wait_timeout
    }
}

impl<'w, D: Driver, C: Clipboard> ContentAssist<'w, D, C> {
    pub fn new(bench: &'w Workbench<D, C>, element: ElementHandle) -> Self {
        Self { bench, element }
    }

    /// Block until the "Loading..." message is gone
    pub fn wait_for_suggestions(&self) -> PilotResult<()> {
        let message = self.find(&self.bench.locators().suggest_message)?;
        self.driver()
            .wait_until(&Condition::NotVisible(message), self.timeout())?;
        Ok(())
    }

    /// All suggestions currently listed
    pub fn items(&self) -> PilotResult<Vec<ContentAssistItem<'w, D, C>>> {
        self.wait_for_suggestions()?;
        let rows = labeled_rows(self, ItemFamily::SuggestRow, self.bench.locators())?;
        Ok(rows
            .into_iter()
            .map(|row| ContentAssistItem::new(self.bench, row.element, row.label))
            .collect())
    }

    /// The suggestion labelled exactly `label`
    pub fn item(&self, label: &str) -> PilotResult<ContentAssistItem<'w, D, C>> {
        self.wait_for_suggestions()?;
        let row = find_row(self, ItemFamily::SuggestRow, self.bench.locators(), label)?;
        Ok(ContentAssistItem::new(self.bench, row.element, row.label))
    }
}

/// One row of the suggest widget
pub struct ContentAssistItem<'w, D: Driver, C: Clipboard> {
    bench: &'w Workbench<D, C>,
    element: ElementHandle,
    label: String,
}

impl<'w, D: Driver, C: Clipboard> Locatable for ContentAssistItem<'w, D, C> {
    type Driver = D;

    fn driver(&self) -> &D {
        self.bench.driver()
    }

    fn element(&self) -> &ElementHandle {
        &self.element
    }
}

impl<'w, D: Driver, C: Clipboard> Waitable for ContentAssistItem<'w, D, C> {
    fn timeout(&self) -> Duration {
        self.bench.config().wait_timeout
    }
}

impl<'w, D: Driver, C: Clipboard> ContentAssistItem<'w, D, C> {
    pub fn new(bench: &'w Workbench<D, C>, element: ElementHandle, label: String) -> Self {
        Self {
            bench,
            element,
            label,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Accept this suggestion
    pub fn select(&self) -> PilotResult<()> {
        tracing::debug!("Selecting suggestion '{}'", self.label);
        self.driver().click(&self.element)?;
        Ok(())
    }
}
