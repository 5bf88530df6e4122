//! Labelled row lookup shared by suggestion lists, menus and tree views

use super::Locatable;
use crate::workbench::error::{PilotError, PilotResult};
use crate::workbench::io::{Driver, ElementHandle, Selector};
use crate::workbench::locators::Locators;

/// Element families made of rows carrying a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFamily {
    SuggestRow,
    MenuEntry,
    TreeRow,
}

impl ItemFamily {
    pub fn row_selector(self, locators: &Locators) -> &Selector {
        match self {
            ItemFamily::SuggestRow => &locators.suggest_row,
            ItemFamily::MenuEntry => &locators.menu_item,
            ItemFamily::TreeRow => &locators.tree_row,
        }
    }

    pub fn label_selector(self, locators: &Locators) -> &Selector {
        match self {
            ItemFamily::SuggestRow => &locators.suggest_label,
            ItemFamily::MenuEntry => &locators.menu_label,
            ItemFamily::TreeRow => &locators.tree_label,
        }
    }

    /// Suggestions and menu entries match exactly, tree rows by substring
    pub fn matches(self, label: &str, wanted: &str) -> bool {
        match self {
            ItemFamily::SuggestRow | ItemFamily::MenuEntry => label == wanted,
            ItemFamily::TreeRow => label.contains(wanted),
        }
    }
}

/// A row element with its label text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow {
    pub element: ElementHandle,
    pub label: String,
}

/// All rows of `family` below `parent`, in document order
pub fn labeled_rows<P: Locatable>(
    parent: &P,
    family: ItemFamily,
    locators: &Locators,
) -> PilotResult<Vec<LabeledRow>> {
    let driver = parent.driver();
    let rows = parent.find_all(family.row_selector(locators))?;

    let mut labeled = Vec::with_capacity(rows.len());
    for row in rows {
        let label_element = driver.locate(Some(&row), family.label_selector(locators))?;
        let label = driver.text(&label_element)?;
        labeled.push(LabeledRow {
            element: row,
            label,
        });
    }

    tracing::debug!("Found {} {:?} rows", labeled.len(), family);
    Ok(labeled)
}

/// First row of `family` below `parent` whose label matches `wanted`
pub fn find_row<P: Locatable>(
    parent: &P,
    family: ItemFamily,
    locators: &Locators,
    wanted: &str,
) -> PilotResult<LabeledRow> {
    labeled_rows(parent, family, locators)?
        .into_iter()
        .find(|row| family.matches(&row.label, wanted))
        .ok_or_else(|| PilotError::ItemNotFound {
            label: wanted.to_string(),
        })
}

/// Section titles are rendered upper case by CSS, so compare without case
pub fn title_matches(rendered: &str, wanted: &str) -> bool {
    rendered.trim().eq_ignore_ascii_case(wanted.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_rows_should_match_exactly() {
        assert!(ItemFamily::SuggestRow.matches("println", "println"));
        assert!(!ItemFamily::SuggestRow.matches("println!", "println"));
        assert!(!ItemFamily::MenuEntry.matches("Format Document With...", "Format Document"));
    }

    #[test]
    fn tree_rows_should_match_by_substring() {
        assert!(ItemFamily::TreeRow.matches("src/main.rs", "main.rs"));
        assert!(!ItemFamily::TreeRow.matches("lib.rs", "main.rs"));
    }

    #[test]
    fn selectors_should_come_from_locator_table() {
        let locators = Locators::default();
        assert_eq!(
            ItemFamily::TreeRow.row_selector(&locators),
            &locators.tree_row
        );
        assert_eq!(
            ItemFamily::MenuEntry.label_selector(&locators),
            &locators.menu_label
        );
    }

    #[test]
    fn title_should_match_ignoring_case() {
        assert!(title_matches("OUTLINE", "Outline"));
        assert!(!title_matches("TIMELINE", "Outline"));
    }
}
