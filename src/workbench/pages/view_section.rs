//! # View Sections
//!
//! Collapsible panes of the side bar (explorer, outline, ...) holding a tree
//! of rows. Rows expose their depth through `aria-level`, starting at 1.

use super::lookup::{labeled_rows, ItemFamily, LabeledRow};
use super::Locatable;
use crate::workbench::error::{PilotError, PilotResult};
use crate::workbench::io::{Driver, ElementHandle, Key, KeyInput};
use crate::workbench::{Clipboard, Workbench};

pub struct ViewSection<'w, D: Driver, C: Clipboard> {
    bench: &'w Workbench<D, C>,
    element: ElementHandle,
    title: String,
}

impl<'w, D: Driver, C: Clipboard> Locatable for ViewSection<'w, D, C> {
    type Driver = D;

    fn driver(&self) -> &D {
        self.bench.driver()
    }

    fn element(&self) -> &ElementHandle {
        &self.element
    }
}

impl<'w, D: Driver, C: Clipboard> ViewSection<'w, D, C> {
    pub fn new(bench: &'w Workbench<D, C>, element: ElementHandle, title: String) -> Self {
        Self {
            bench,
            element,
            title,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn header(&self) -> PilotResult<ElementHandle> {
        self.find(&self.bench.locators().section_header)
    }

    pub fn is_expanded(&self) -> PilotResult<bool> {
        let header = self.header()?;
        let expanded = self.driver().attribute(&header, "aria-expanded")?;
        Ok(expanded.as_deref() == Some("true"))
    }

    /// Click the header unless the section is already open
    pub fn expand(&self) -> PilotResult<()> {
        if !self.is_expanded()? {
            tracing::debug!("Expanding section '{}'", self.title);
            let header = self.header()?;
            self.driver().click(&header)?;
        }
        Ok(())
    }

    /// Rows currently rendered; empty while the section is collapsed
    pub fn visible_items(&self) -> PilotResult<Vec<ViewItem<'w, D, C>>> {
        labeled_rows(self, ItemFamily::TreeRow, self.bench.locators())?
            .into_iter()
            .map(|row| self.view_item(row))
            .collect()
    }

    /// First row whose label contains `label`, if it sits at most `max_level`
    /// deep
    ///
    /// A `max_level` below 1 accepts any depth. Only the first matching row
    /// is considered, so a shallower row further down is not found.
    pub fn find_item(
        &self,
        label: &str,
        max_level: usize,
    ) -> PilotResult<Option<ViewItem<'w, D, C>>> {
        self.expand()?;

        let container = self.find(&self.bench.locators().tree_container)?;
        self.driver()
            .send_keys(&container, &[KeyInput::press(Key::Home)])?;

        let family = ItemFamily::TreeRow;
        let found = labeled_rows(self, family, self.bench.locators())?
            .into_iter()
            .find(|row| family.matches(&row.label, label));

        let Some(row) = found else {
            tracing::debug!("No item '{}' in section '{}'", label, self.title);
            return Ok(None);
        };

        let item = self.view_item(row)?;
        if max_level < 1 || item.level() <= max_level {
            Ok(Some(item))
        } else {
            tracing::debug!(
                "Item '{}' is at level {}, deeper than {}",
                item.label(),
                item.level(),
                max_level
            );
            Ok(None)
        }
    }

    fn view_item(&self, row: LabeledRow) -> PilotResult<ViewItem<'w, D, C>> {
        let value = self.driver().attribute(&row.element, "aria-level")?;
        let level = value
            .as_deref()
            .and_then(|level| level.trim().parse::<usize>().ok())
            .ok_or_else(|| PilotError::MalformedLevel {
                label: row.label.clone(),
                value: value.clone(),
            })?;
        Ok(ViewItem {
            bench: self.bench,
            element: row.element,
            label: row.label,
            level,
        })
    }
}

/// One row of a section tree
pub struct ViewItem<'w, D: Driver, C: Clipboard> {
    bench: &'w Workbench<D, C>,
    element: ElementHandle,
    label: String,
    level: usize,
}

impl<'w, D: Driver, C: Clipboard> Locatable for ViewItem<'w, D, C> {
    type Driver = D;

    fn driver(&self) -> &D {
        self.bench.driver()
    }

    fn element(&self) -> &ElementHandle {
        &self.element
    }
}

impl<'w, D: Driver, C: Clipboard> ViewItem<'w, D, C> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Leaf rows are never expanded
    pub fn is_expanded(&self) -> PilotResult<bool> {
        let expanded = self.driver().attribute(&self.element, "aria-expanded")?;
        Ok(expanded.as_deref() == Some("true"))
    }

    pub fn select(&self) -> PilotResult<()> {
        tracing::debug!("Selecting tree item '{}'", self.label);
        self.driver().click(&self.element)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::PilotConfig;
    use crate::workbench::error::PilotError;
    use crate::workbench::io::{Key, KeyInput, MockWorkbench};
    use crate::workbench::{MemoryClipboard, Workbench};

    fn outline() -> MockWorkbench {
        MockWorkbench::new().with_section(
            "Outline",
            &[("main", 1), ("config", 1), ("load_config", 2), ("parse", 3)],
        )
    }

    fn bench(mock: &MockWorkbench) -> Workbench<MockWorkbench, MemoryClipboard> {
        Workbench::new(mock.clone(), mock.clipboard(), PilotConfig::default())
    }

    #[test]
    fn expand_should_only_click_collapsed_header() {
        let mock = outline();
        let bench = bench(&mock);
        let section = bench.view_section("OUTLINE").unwrap();

        assert!(!section.is_expanded().unwrap());
        assert!(section.visible_items().unwrap().is_empty());

        section.expand().unwrap();
        section.expand().unwrap();

        assert!(section.is_expanded().unwrap());
        assert_eq!(mock.clicks(), vec!["section-header-0"]);
    }

    #[test]
    fn visible_items_should_carry_label_and_level() {
        let mock = outline();
        let bench = bench(&mock);
        let section = bench.view_section("outline").unwrap();
        section.expand().unwrap();

        let items: Vec<(String, usize)> = section
            .visible_items()
            .unwrap()
            .iter()
            .map(|item| (item.label().to_string(), item.level()))
            .collect();

        assert_eq!(items[2], ("load_config".to_string(), 2));
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn find_item_should_match_first_containing_label() {
        let mock = outline();
        let bench = bench(&mock);
        let section = bench.view_section("Outline").unwrap();

        // "config" also occurs in "load_config", the first row wins
        let item = section.find_item("config", 0).unwrap().unwrap();
        assert_eq!(item.label(), "config");
        assert_eq!(mock.count_input(&KeyInput::press(Key::Home)), 1);
    }

    #[test]
    fn find_item_should_honour_max_level() {
        let mock = outline();
        let bench = bench(&mock);
        let section = bench.view_section("Outline").unwrap();

        assert!(section.find_item("pars", 2).unwrap().is_none());
        assert_eq!(section.find_item("pars", 3).unwrap().unwrap().level(), 3);
        assert!(section.find_item("pars", 0).unwrap().is_some());
        assert!(section.find_item("missing", 0).unwrap().is_none());
    }

    #[test]
    fn row_without_level_should_be_reported() {
        let mock = MockWorkbench::new().with_section("Outline", &[("main", 1), ("orphan", 0)]);
        let bench = bench(&mock);
        let section = bench.view_section("Outline").unwrap();
        section.expand().unwrap();

        match section.visible_items() {
            Err(PilotError::MalformedLevel { label, value }) => {
                assert_eq!(label, "orphan");
                assert_eq!(value, None);
            }
            Err(e) => panic!("Expected MalformedLevel, got {e}"),
            Ok(items) => panic!("Unexpected {} items", items.len()),
        }
        assert_eq!(section.find_item("main", 0).unwrap().unwrap().level(), 1);
    }

    #[test]
    fn unknown_section_should_not_be_found() {
        let mock = outline();
        let bench = bench(&mock);
        assert!(bench.view_section("Timeline").is_err());
    }
}
