//! # Locators
//!
//! Every selector, class marker and label the page objects depend on. The
//! defaults target the current workbench DOM; a JSON file can override any
//! subset of them when the markup changes between releases.

use crate::workbench::io::Selector;
use serde::{Deserialize, Serialize};

/// Selector table shared by all page objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locators {
    /// Editor group hosting the tab strip and the editor
    pub editor_group: Selector,
    /// Root of the active editor
    pub editor: Selector,
    /// Active tab inside the editor group
    pub active_tab: Selector,
    /// Hidden textarea receiving keyboard input
    pub input_area: Selector,
    /// Monaco root carrying the `data-uri` attribute
    pub monaco_editor: Selector,
    /// Status bar item showing the cursor position
    pub status_position: Selector,

    pub suggest_widget: Selector,
    /// "Loading..." message inside the suggest widget
    pub suggest_message: Selector,
    pub suggest_row: Selector,
    pub suggest_label: Selector,

    pub context_menu: Selector,
    pub menu_item: Selector,
    pub menu_label: Selector,

    pub view_section: Selector,
    pub section_header: Selector,
    pub section_title: Selector,
    pub tree_container: Selector,
    pub tree_row: Selector,
    pub tree_label: Selector,

    /// Class present on a tab with unsaved changes
    pub dirty_class: String,
    /// Class present on an open suggest widget
    pub visible_class: String,
    /// Class present on a disabled menu entry
    pub disabled_class: String,
    /// Context menu label of the format action
    pub format_document_label: String,
}

impl Default for Locators {
    fn default() -> Self {
        Self {
            editor_group: Selector::class_name("editor-group-container"),
            editor: Selector::class_name("editor-instance"),
            active_tab: Selector::css("div.tab.active"),
            input_area: Selector::class_name("inputarea"),
            monaco_editor: Selector::class_name("monaco-editor"),
            status_position: Selector::css("[id='status.editor.selection']"),
            suggest_widget: Selector::class_name("suggest-widget"),
            suggest_message: Selector::class_name("message"),
            suggest_row: Selector::class_name("monaco-list-row"),
            suggest_label: Selector::class_name("label-name"),
            context_menu: Selector::class_name("monaco-menu-container"),
            menu_item: Selector::class_name("action-item"),
            menu_label: Selector::class_name("action-label"),
            view_section: Selector::class_name("split-view-view"),
            section_header: Selector::class_name("panel-header"),
            section_title: Selector::class_name("title"),
            tree_container: Selector::class_name("monaco-tree"),
            tree_row: Selector::class_name("monaco-tree-row"),
            tree_label: Selector::class_name("monaco-highlighted-label"),
            dirty_class: "dirty".to_string(),
            visible_class: "visible".to_string(),
            disabled_class: "disabled".to_string(),
            format_document_label: "Format Document".to_string(),
        }
    }
}

impl Locators {
    /// Parse a (possibly partial) locator table from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// True when a space separated `class` attribute value contains `class`
pub fn has_class(class_attribute: &str, class: &str) -> bool {
    class_attribute.split_whitespace().any(|c| c == class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_should_keep_remaining_defaults() {
        let locators = Locators::from_json(
            r#"{ "input_area": { "css": "textarea.native-edit-context" }, "dirty_class": "modified" }"#,
        )
        .unwrap();

        assert_eq!(
            locators.input_area,
            Selector::css("textarea.native-edit-context")
        );
        assert_eq!(locators.dirty_class, "modified");
        assert_eq!(locators.suggest_widget, Locators::default().suggest_widget);
    }

    #[test]
    fn json_export_should_parse_back_to_same_table() {
        let locators = Locators::default();
        let json = locators.to_json().unwrap();
        assert!(json.contains("\"class_name\": \"inputarea\""));
        assert_eq!(Locators::from_json(&json).unwrap(), locators);
    }

    #[test]
    fn has_class_should_match_whole_words_only() {
        assert!(has_class("tab active dirty", "dirty"));
        assert!(!has_class("tab active not-dirty", "dirty"));
        assert!(!has_class("", "visible"));
    }
}
