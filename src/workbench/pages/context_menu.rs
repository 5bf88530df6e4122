//! Right-click menu

use super::lookup::{find_row, labeled_rows, ItemFamily};
use super::{Locatable, Waitable};
use crate::workbench::error::{PilotError, PilotResult};
use crate::workbench::io::{Driver, ElementHandle};
use crate::workbench::locators::has_class;
use crate::workbench::{Clipboard, Workbench};
use std::time::Duration;

pub struct ContextMenu<'w, D: Driver, C: Clipboard> {
    bench: &'w Workbench<D, C>,
    element: ElementHandle,
}

impl<'w, D: Driver, C: Clipboard> Locatable for ContextMenu<'w, D, C> {
    type Driver = D;

    fn driver(&self) -> &D {
        self.bench.driver()
    }

    fn element(&self) -> &ElementHandle {
        &self.element
    }
}

impl<'w, D: Driver, C: Clipboard> Waitable for ContextMenu<'w, D, C> {
    fn timeout(&self) -> Duration {
        self.bench.config().wait_timeout
    }
}

impl<'w, D: Driver, C: Clipboard> ContextMenu<'w, D, C> {
    /// Right-click `target` and wait for the menu to show
    pub fn open_on(bench: &'w Workbench<D, C>, target: &ElementHandle) -> PilotResult<Self> {
        let driver = bench.driver();
        driver.context_click(target)?;
        let element = driver.locate(None, &bench.locators().context_menu)?;
        tracing::debug!("Opened context menu on {}", target);
        Self { bench, element }.wait()
    }

    /// Labels of all entries, in menu order
    pub fn items(&self) -> PilotResult<Vec<String>> {
        let rows = labeled_rows(self, ItemFamily::MenuEntry, self.bench.locators())?;
        Ok(rows.into_iter().map(|row| row.label).collect())
    }

    /// Click the entry labelled exactly `label`
    pub fn select(&self, label: &str) -> PilotResult<()> {
        let locators = self.bench.locators();
        let row = find_row(self, ItemFamily::MenuEntry, locators, label)?;

        let classes = self
            .driver()
            .attribute(&row.element, "class")?
            .unwrap_or_default();
        if has_class(&classes, &locators.disabled_class) {
            return Err(PilotError::ActionUnavailable(label.to_string()));
        }

        tracing::debug!("Selecting menu entry '{}'", label);
        self.driver().click(&row.element)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PilotConfig;
    use crate::workbench::io::mock::FormatSupport;
    use crate::workbench::io::MockWorkbench;
    use crate::workbench::MemoryClipboard;

    fn open_menu(
        bench: &Workbench<MockWorkbench, MemoryClipboard>,
    ) -> ContextMenu<'_, MockWorkbench, MemoryClipboard> {
        let input_area = bench.text_editor().unwrap().input_area().unwrap();
        ContextMenu::open_on(bench, &input_area).unwrap()
    }

    #[test]
    fn menu_should_list_entries() {
        let mock = MockWorkbench::new();
        let bench = Workbench::new(mock.clone(), mock.clipboard(), PilotConfig::default());

        let menu = open_menu(&bench);

        assert!(mock.is_menu_open());
        assert_eq!(
            menu.items().unwrap(),
            vec!["Cut", "Copy", "Paste", "Format Document"]
        );
    }

    #[test]
    fn disabled_entry_should_be_unavailable() {
        let mock = MockWorkbench::new().with_format_support(FormatSupport::Disabled);
        let bench = Workbench::new(mock.clone(), mock.clipboard(), PilotConfig::default());

        let menu = open_menu(&bench);
        mock.clear_recorded();

        match menu.select("Format Document") {
            Err(PilotError::ActionUnavailable(label)) => assert_eq!(label, "Format Document"),
            other => panic!("Expected ActionUnavailable, got {other:?}"),
        }
        assert!(mock.clicks().is_empty());
    }

    #[test]
    fn missing_entry_should_not_be_found() {
        let mock = MockWorkbench::new().with_format_support(FormatSupport::Missing);
        let bench = Workbench::new(mock.clone(), mock.clipboard(), PilotConfig::default());

        let result = open_menu(&bench).select("Format Document");
        assert!(matches!(result, Err(PilotError::ItemNotFound { .. })));
    }
}
