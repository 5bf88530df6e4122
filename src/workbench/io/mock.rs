//! # Mock Workbench for Testing
//!
//! An in-memory stand-in for the browser: it implements [`Driver`] over a
//! simulated editor with Monaco-like keyboard behaviour (selection collapse,
//! line wrapping on LEFT/RIGHT, sticky column on UP/DOWN), a status bar,
//! a suggest widget, a context menu and tree view sections.
//!
//! Every key input and click is recorded for verification in tests.

use super::{Condition, Driver, DriverError, DriverResult, ElementHandle, Key, KeyInput, Selector};
use crate::workbench::clipboard::{Clipboard, MemoryClipboard};
use crate::workbench::locators::Locators;
use crate::workbench::models::Coordinate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

const EDITOR_GROUP: &str = "editor-group";
const EDITOR: &str = "editor";
const ACTIVE_TAB: &str = "tab-active";
const INPUT_AREA: &str = "inputarea";
const MONACO_EDITOR: &str = "monaco-editor";
const STATUS_POSITION: &str = "status-position";
const SUGGEST_WIDGET: &str = "suggest-widget";
const SUGGEST_MESSAGE: &str = "suggest-message";
const CONTEXT_MENU: &str = "context-menu";

/// Key input or click observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInput {
    pub element: String,
    pub input: KeyInput,
}

/// How the context menu offers the format action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSupport {
    Enabled,
    Disabled,
    Missing,
}

/// How the context menu reacts to a right click on the input area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResponse {
    Opens,
    /// No menu element is ever rendered
    Never,
    /// The menu element is rendered but never becomes visible
    StaysHidden,
}

#[derive(Debug, Clone)]
struct TreeNode {
    label: String,
    level: usize,
    expanded: Option<bool>,
}

#[derive(Debug, Clone)]
struct Section {
    title: String,
    expanded: bool,
    nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone)]
struct MenuEntry {
    label: String,
    enabled: bool,
}

#[derive(Debug)]
struct MockState {
    lines: Vec<String>,
    cursor: Coordinate,
    preferred_column: Option<usize>,
    selection_all: bool,
    dirty: bool,
    file_uri: String,
    status_override: Option<String>,

    suggest_open: bool,
    suggest_hidden_by_css: bool,
    loading_visible: bool,
    loading_stuck: bool,
    suggestions: Vec<String>,

    menu_open: bool,
    menu_response: MenuResponse,
    format_support: FormatSupport,

    sections: Vec<Section>,

    inputs: Vec<RecordedInput>,
    clicks: Vec<String>,
}

impl MockState {
    fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Coordinate::new(1, 1),
            preferred_column: None,
            selection_all: false,
            dirty: false,
            file_uri: "file:///tmp/untitled.txt".to_string(),
            status_override: None,
            suggest_open: false,
            suggest_hidden_by_css: false,
            loading_visible: false,
            loading_stuck: false,
            suggestions: Vec::new(),
            menu_open: false,
            menu_response: MenuResponse::Opens,
            format_support: FormatSupport::Enabled,
            sections: Vec::new(),
            inputs: Vec::new(),
            clicks: Vec::new(),
        }
    }

    // === Buffer helpers ===

    fn full_text(&self) -> String {
        self.lines.join("\n")
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines[line - 1].chars().count()
    }

    fn end(&self) -> Coordinate {
        let last = self.lines.len();
        Coordinate::new(last, self.line_len(last) + 1)
    }

    fn byte_index(line: &str, column: usize) -> usize {
        line.char_indices()
            .nth(column - 1)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    fn replace_all(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.cursor = self.end();
        self.selection_all = false;
        self.preferred_column = None;
        self.dirty = true;
    }

    fn menu_entries(&self, locators: &Locators) -> Vec<MenuEntry> {
        let mut entries = vec![
            MenuEntry {
                label: "Cut".to_string(),
                enabled: true,
            },
            MenuEntry {
                label: "Copy".to_string(),
                enabled: true,
            },
            MenuEntry {
                label: "Paste".to_string(),
                enabled: true,
            },
        ];
        match self.format_support {
            FormatSupport::Enabled | FormatSupport::Disabled => entries.push(MenuEntry {
                label: locators.format_document_label.clone(),
                enabled: self.format_support == FormatSupport::Enabled,
            }),
            FormatSupport::Missing => {}
        }
        entries
    }

    fn status_text(&self) -> String {
        if let Some(text) = &self.status_override {
            return text.clone();
        }
        let mut status = self.cursor.to_string();
        if self.selection_all {
            let selected = self.full_text().chars().count();
            if selected > 0 {
                status.push_str(&format!(" ({selected} selected)"));
            }
        }
        status
    }

    // === Editing ===

    fn insert_char(&mut self, ch: char) {
        if self.selection_all {
            self.replace_all("");
        }
        let Coordinate { line, column } = self.cursor;
        let index = Self::byte_index(&self.lines[line - 1], column);
        if ch == '\n' {
            let rest = self.lines[line - 1].split_off(index);
            self.lines.insert(line, rest);
            self.cursor = Coordinate::new(line + 1, 1);
        } else {
            self.lines[line - 1].insert(index, ch);
            self.cursor.column += 1;
        }
        self.preferred_column = None;
        self.dirty = true;
    }

    fn insert_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert_char(ch);
        }
    }

    fn backspace(&mut self) {
        if self.selection_all {
            self.replace_all("");
            return;
        }
        let Coordinate { line, column } = self.cursor;
        if column > 1 {
            let index = Self::byte_index(&self.lines[line - 1], column - 1);
            self.lines[line - 1].remove(index);
            self.cursor.column -= 1;
        } else if line > 1 {
            let removed = self.lines.remove(line - 1);
            let previous_len = self.line_len(line - 1);
            self.lines[line - 2].push_str(&removed);
            self.cursor = Coordinate::new(line - 1, previous_len + 1);
        } else {
            return;
        }
        self.preferred_column = None;
        self.dirty = true;
    }

    fn copy(&self, clipboard: &MemoryClipboard) -> DriverResult<()> {
        let text = if self.selection_all {
            self.full_text()
        } else {
            // Copy without a selection takes the whole current line
            format!("{}\n", self.lines[self.cursor.line - 1])
        };
        clipboard
            .write_text(&text)
            .map_err(|e| DriverError::Other(e.to_string()))
    }

    fn paste(&mut self, clipboard: &MemoryClipboard) -> DriverResult<()> {
        let text = clipboard
            .read_text()
            .map_err(|e| DriverError::Other(e.to_string()))?;
        if self.selection_all {
            self.replace_all(&text);
        } else {
            self.insert_text(&text);
        }
        Ok(())
    }

    // === Cursor movement ===

    fn move_vertical(&mut self, down: bool) {
        self.selection_all = false;
        let wanted = self.preferred_column.unwrap_or(self.cursor.column);
        let line = self.cursor.line;

        if !down && line == 1 {
            self.cursor.column = 1;
            self.preferred_column = None;
            return;
        }
        if down && line == self.lines.len() {
            self.cursor.column = self.line_len(line) + 1;
            self.preferred_column = None;
            return;
        }

        let line = if down { line + 1 } else { line - 1 };
        self.cursor = Coordinate::new(line, wanted.min(self.line_len(line) + 1));
        self.preferred_column = Some(wanted);
    }

    fn move_left(&mut self) {
        self.preferred_column = None;
        if self.selection_all {
            // Collapse to the selection start
            self.selection_all = false;
            self.cursor = Coordinate::new(1, 1);
            return;
        }
        let Coordinate { line, column } = self.cursor;
        if column > 1 {
            self.cursor.column -= 1;
        } else if line > 1 {
            self.cursor = Coordinate::new(line - 1, self.line_len(line - 1) + 1);
        }
    }

    fn move_right(&mut self) {
        self.preferred_column = None;
        if self.selection_all {
            self.selection_all = false;
            self.cursor = self.end();
            return;
        }
        let Coordinate { line, column } = self.cursor;
        if column <= self.line_len(line) {
            self.cursor.column += 1;
        } else if line < self.lines.len() {
            self.cursor = Coordinate::new(line + 1, 1);
        }
    }

    fn escape(&mut self) {
        if self.suggest_open {
            self.suggest_open = false;
            self.loading_visible = false;
        } else if self.menu_open {
            self.menu_open = false;
        } else {
            self.selection_all = false;
        }
    }

    fn apply_editor_input(&mut self, input: &KeyInput, clipboard: &MemoryClipboard) -> DriverResult<()> {
        match input {
            KeyInput::Chord(_, Key::Char('a')) => {
                self.selection_all = true;
                self.cursor = self.end();
                self.preferred_column = None;
            }
            KeyInput::Chord(_, Key::Char('c')) => self.copy(clipboard)?,
            KeyInput::Chord(_, Key::Char('v')) => self.paste(clipboard)?,
            KeyInput::Chord(_, Key::Char('s')) => self.dirty = false,
            KeyInput::Chord(_, Key::Space) => {
                self.suggest_open = true;
                self.suggest_hidden_by_css = false;
                self.loading_visible = true;
            }
            KeyInput::Chord(_, _) => {}
            KeyInput::Press(key) => match key {
                Key::Up => self.move_vertical(false),
                Key::Down => self.move_vertical(true),
                Key::Left => self.move_left(),
                Key::Right => self.move_right(),
                Key::Home => {
                    self.selection_all = false;
                    self.preferred_column = None;
                    self.cursor.column = 1;
                }
                Key::Escape => self.escape(),
                Key::Backspace => self.backspace(),
                Key::Enter => self.insert_char('\n'),
                Key::Space => self.insert_char(' '),
                Key::Char(ch) => self.insert_char(*ch),
            },
            KeyInput::Text(text) => self.insert_text(text),
        }
        Ok(())
    }

    fn format_buffer(&mut self) {
        for line in &mut self.lines {
            let trimmed_len = line.trim_end().len();
            line.truncate(trimmed_len);
        }
        let line = self.cursor.line;
        self.cursor.column = self.cursor.column.min(self.line_len(line) + 1);
        self.dirty = true;
    }
}

/// Simulated workbench implementing [`Driver`]
///
/// Clones share the same simulated state.
#[derive(Debug, Clone)]
pub struct MockWorkbench {
    state: Arc<Mutex<MockState>>,
    locators: Locators,
    clipboard: MemoryClipboard,
}

impl MockWorkbench {
    /// Create an empty editor using the default locators
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::new())),
            locators: Locators::default(),
            clipboard: MemoryClipboard::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // === Builders ===

    /// Replace the buffer; the cursor goes to 1:1 and the editor is clean
    pub fn with_text(self, text: &str) -> Self {
        {
            let mut state = self.lock();
            state.lines = text.split('\n').map(str::to_string).collect();
            state.cursor = Coordinate::new(1, 1);
            state.dirty = false;
        }
        self
    }

    /// Answer to a different locator table
    pub fn with_locators(mut self, locators: Locators) -> Self {
        self.locators = locators;
        self
    }

    pub fn with_suggestions(self, suggestions: &[&str]) -> Self {
        self.lock().suggestions = suggestions.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add a collapsed tree view section with `(label, level)` rows
    ///
    /// A level of 0 leaves the row without an `aria-level` attribute.
    pub fn with_section(self, title: &str, rows: &[(&str, usize)]) -> Self {
        self.lock().sections.push(Section {
            title: title.to_string(),
            expanded: false,
            nodes: rows
                .iter()
                .map(|(label, level)| TreeNode {
                    label: label.to_string(),
                    level: *level,
                    expanded: None,
                })
                .collect(),
        });
        self
    }

    pub fn with_file_uri(self, uri: &str) -> Self {
        self.lock().file_uri = uri.to_string();
        self
    }

    pub fn with_format_support(self, support: FormatSupport) -> Self {
        self.lock().format_support = support;
        self
    }

    pub fn with_menu_response(self, response: MenuResponse) -> Self {
        self.lock().menu_response = response;
        self
    }

    /// Show a fixed status bar text instead of the cursor position
    pub fn with_status_text(self, text: &str) -> Self {
        self.lock().status_override = Some(text.to_string());
        self
    }

    /// Keep the suggest widget "Loading..." message visible forever
    pub fn with_stuck_loading(self) -> Self {
        self.lock().loading_stuck = true;
        self
    }

    // === Inspection ===

    /// The clipboard the simulated editor copies to and pastes from
    pub fn clipboard(&self) -> MemoryClipboard {
        self.clipboard.clone()
    }

    /// Whole simulated buffer, lines joined with `\n`
    pub fn buffer_text(&self) -> String {
        self.lock().full_text()
    }

    pub fn cursor(&self) -> Coordinate {
        self.lock().cursor
    }

    pub fn set_cursor(&self, cursor: Coordinate) {
        let mut state = self.lock();
        state.cursor = cursor;
        state.preferred_column = None;
        state.selection_all = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().dirty
    }

    pub fn set_dirty(&self, dirty: bool) {
        self.lock().dirty = dirty;
    }

    pub fn is_suggest_open(&self) -> bool {
        self.lock().suggest_open
    }

    /// Leave the `visible` class on the suggest widget but hide it through CSS
    pub fn hide_suggest_by_css(&self) {
        let mut state = self.lock();
        state.suggest_open = true;
        state.suggest_hidden_by_css = true;
    }

    pub fn is_menu_open(&self) -> bool {
        self.lock().menu_open
    }

    /// All key input received so far, in order
    pub fn recorded_inputs(&self) -> Vec<RecordedInput> {
        self.lock().inputs.clone()
    }

    /// How many times `input` was received
    pub fn count_input(&self, input: &KeyInput) -> usize {
        self.lock()
            .inputs
            .iter()
            .filter(|recorded| recorded.input == *input)
            .count()
    }

    pub fn clear_recorded(&self) {
        let mut state = self.lock();
        state.inputs.clear();
        state.clicks.clear();
    }

    /// Ids of clicked elements, in order
    pub fn clicks(&self) -> Vec<String> {
        self.lock().clicks.clone()
    }

    // === Element resolution ===

    fn resolve(&self, scope: Option<&ElementHandle>, selector: &Selector) -> Vec<String> {
        let locators = &self.locators;
        let state = self.lock();
        let scope = scope.map(ElementHandle::id);

        if *selector == locators.editor_group {
            vec![EDITOR_GROUP.to_string()]
        } else if *selector == locators.editor {
            vec![EDITOR.to_string()]
        } else if *selector == locators.active_tab {
            vec![ACTIVE_TAB.to_string()]
        } else if *selector == locators.input_area {
            vec![INPUT_AREA.to_string()]
        } else if *selector == locators.monaco_editor {
            vec![MONACO_EDITOR.to_string()]
        } else if *selector == locators.status_position {
            vec![STATUS_POSITION.to_string()]
        } else if *selector == locators.suggest_widget {
            vec![SUGGEST_WIDGET.to_string()]
        } else if *selector == locators.suggest_message {
            vec![SUGGEST_MESSAGE.to_string()]
        } else if *selector == locators.suggest_row {
            if !state.suggest_open || state.loading_visible {
                return Vec::new();
            }
            (0..state.suggestions.len())
                .map(|i| format!("suggest-row-{i}"))
                .collect()
        } else if *selector == locators.suggest_label {
            scope
                .and_then(|id| id.strip_prefix("suggest-row-"))
                .map(|i| vec![format!("suggest-label-{i}")])
                .unwrap_or_default()
        } else if *selector == locators.context_menu {
            if state.menu_open {
                vec![CONTEXT_MENU.to_string()]
            } else {
                Vec::new()
            }
        } else if *selector == locators.menu_item {
            if !state.menu_open {
                return Vec::new();
            }
            (0..state.menu_entries(locators).len())
                .map(|i| format!("menu-item-{i}"))
                .collect()
        } else if *selector == locators.menu_label {
            scope
                .and_then(|id| id.strip_prefix("menu-item-"))
                .map(|i| vec![format!("menu-label-{i}")])
                .unwrap_or_default()
        } else if *selector == locators.view_section {
            (0..state.sections.len())
                .map(|i| format!("section-{i}"))
                .collect()
        } else if *selector == locators.section_header {
            scope
                .and_then(|id| id.strip_prefix("section-"))
                .map(|i| vec![format!("section-header-{i}")])
                .unwrap_or_default()
        } else if *selector == locators.section_title {
            scope
                .and_then(|id| {
                    id.strip_prefix("section-header-")
                        .or_else(|| id.strip_prefix("section-"))
                })
                .map(|i| vec![format!("section-title-{i}")])
                .unwrap_or_default()
        } else if *selector == locators.tree_container {
            match scope.and_then(section_index) {
                Some(i) if state.sections.get(i).is_some_and(|s| s.expanded) => {
                    vec![format!("tree-{i}")]
                }
                _ => Vec::new(),
            }
        } else if *selector == locators.tree_row {
            let index = scope.and_then(|id| {
                section_index(id).or_else(|| id.strip_prefix("tree-").and_then(|i| i.parse().ok()))
            });
            match index.and_then(|i| state.sections.get(i).map(|s| (i, s))) {
                Some((i, section)) if section.expanded => (0..section.nodes.len())
                    .map(|j| format!("tree-row-{i}-{j}"))
                    .collect(),
                _ => Vec::new(),
            }
        } else if *selector == locators.tree_label {
            scope
                .and_then(|id| id.strip_prefix("tree-row-"))
                .map(|ij| vec![format!("tree-label-{ij}")])
                .unwrap_or_default()
        } else {
            Vec::new()
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        let state = self.lock();
        match id {
            SUGGEST_WIDGET => state.suggest_open && !state.suggest_hidden_by_css,
            SUGGEST_MESSAGE => state.loading_visible,
            CONTEXT_MENU => state.menu_open && state.menu_response == MenuResponse::Opens,
            _ => true,
        }
    }

    fn timeout(condition: &Condition, timeout: Duration) -> DriverError {
        DriverError::Timeout {
            condition: condition.clone(),
            timeout,
        }
    }
}

impl Default for MockWorkbench {
    fn default() -> Self {
        Self::new()
    }
}

fn section_index(id: &str) -> Option<usize> {
    id.strip_prefix("section-")?.parse().ok()
}

fn index_pair(id: &str, prefix: &str) -> Option<(usize, usize)> {
    let (i, j) = id.strip_prefix(prefix)?.split_once('-')?;
    Some((i.parse().ok()?, j.parse().ok()?))
}

fn indexed(id: &str, prefix: &str) -> Option<usize> {
    id.strip_prefix(prefix)?.parse().ok()
}

impl Driver for MockWorkbench {
    fn locate(
        &self,
        scope: Option<&ElementHandle>,
        selector: &Selector,
    ) -> DriverResult<ElementHandle> {
        self.locate_all(scope, selector)?
            .into_iter()
            .next()
            .ok_or_else(|| DriverError::NotFound {
                selector: selector.clone(),
            })
    }

    fn locate_all(
        &self,
        scope: Option<&ElementHandle>,
        selector: &Selector,
    ) -> DriverResult<Vec<ElementHandle>> {
        Ok(self
            .resolve(scope, selector)
            .into_iter()
            .map(ElementHandle::new)
            .collect())
    }

    fn send_keys(&self, element: &ElementHandle, input: &[KeyInput]) -> DriverResult<()> {
        let mut state = self.lock();
        for key in input {
            state.inputs.push(RecordedInput {
                element: element.id().to_string(),
                input: key.clone(),
            });
            if element.id() == INPUT_AREA {
                state.apply_editor_input(key, &self.clipboard)?;
            }
        }
        Ok(())
    }

    fn click(&self, element: &ElementHandle) -> DriverResult<()> {
        let id = element.id();
        let mut state = self.lock();
        state.clicks.push(id.to_string());

        if let Some(i) = indexed(id, "suggest-row-") {
            if let Some(suggestion) = state.suggestions.get(i).cloned() {
                state.insert_text(&suggestion);
                state.suggest_open = false;
            }
        } else if let Some(i) = indexed(id, "menu-item-") {
            let entries = state.menu_entries(&self.locators);
            if let Some(entry) = entries.get(i) {
                if entry.enabled && entry.label == self.locators.format_document_label {
                    state.format_buffer();
                }
                if entry.enabled {
                    state.menu_open = false;
                }
            }
        } else if let Some(i) = indexed(id, "section-header-") {
            if let Some(section) = state.sections.get_mut(i) {
                section.expanded = !section.expanded;
            }
        } else if let Some((i, j)) = index_pair(id, "tree-row-") {
            if let Some(node) = state.sections.get_mut(i).and_then(|s| s.nodes.get_mut(j)) {
                node.expanded = node.expanded.map(|expanded| !expanded);
            }
        }
        Ok(())
    }

    fn context_click(&self, element: &ElementHandle) -> DriverResult<()> {
        let mut state = self.lock();
        state.clicks.push(format!("context:{}", element.id()));
        if element.id() == INPUT_AREA && state.menu_response != MenuResponse::Never {
            state.menu_open = true;
        }
        Ok(())
    }

    fn wait_until(&self, condition: &Condition, timeout: Duration) -> DriverResult<()> {
        match condition {
            Condition::Visible(element) => {
                if self.is_visible(element.id()) {
                    Ok(())
                } else {
                    Err(Self::timeout(condition, timeout))
                }
            }
            Condition::NotVisible(element) => {
                if element.id() == SUGGEST_MESSAGE {
                    let mut state = self.lock();
                    if !state.loading_stuck {
                        // Suggestions finish loading while the caller waits
                        state.loading_visible = false;
                    }
                }
                if self.is_visible(element.id()) {
                    Err(Self::timeout(condition, timeout))
                } else {
                    Ok(())
                }
            }
        }
    }

    fn attribute(&self, element: &ElementHandle, name: &str) -> DriverResult<Option<String>> {
        let id = element.id();
        let state = self.lock();

        let value = match (id, name) {
            (ACTIVE_TAB, "class") => Some(if state.dirty {
                format!("tab active {}", self.locators.dirty_class)
            } else {
                "tab active".to_string()
            }),
            (MONACO_EDITOR, "data-uri") => Some(state.file_uri.clone()),
            (SUGGEST_WIDGET, "class") => Some(if state.suggest_open {
                format!("editor-widget suggest-widget {}", self.locators.visible_class)
            } else {
                "editor-widget suggest-widget".to_string()
            }),
            (_, "class") if id.starts_with("menu-item-") => {
                let enabled = indexed(id, "menu-item-")
                    .and_then(|i| state.menu_entries(&self.locators).get(i).map(|e| e.enabled))
                    .unwrap_or(true);
                Some(if enabled {
                    "action-item".to_string()
                } else {
                    format!("action-item {}", self.locators.disabled_class)
                })
            }
            (_, "aria-expanded") if id.starts_with("section-header-") => {
                indexed(id, "section-header-")
                    .and_then(|i| state.sections.get(i))
                    .map(|s| s.expanded.to_string())
            }
            (_, "aria-level") if id.starts_with("tree-row-") => index_pair(id, "tree-row-")
                .and_then(|(i, j)| state.sections.get(i)?.nodes.get(j))
                .filter(|node| node.level > 0)
                .map(|node| node.level.to_string()),
            (_, "aria-expanded") if id.starts_with("tree-row-") => index_pair(id, "tree-row-")
                .and_then(|(i, j)| state.sections.get(i)?.nodes.get(j)?.expanded)
                .map(|expanded| expanded.to_string()),
            _ => None,
        };
        Ok(value)
    }

    fn css_value(&self, element: &ElementHandle, property: &str) -> DriverResult<String> {
        let state = self.lock();
        let value = match (element.id(), property) {
            (SUGGEST_WIDGET, "visibility") => {
                if state.suggest_open && !state.suggest_hidden_by_css {
                    "visible"
                } else {
                    "hidden"
                }
            }
            (_, "visibility") => "visible",
            _ => "",
        };
        Ok(value.to_string())
    }

    fn text(&self, element: &ElementHandle) -> DriverResult<String> {
        let id = element.id();
        let state = self.lock();

        let text = if id == STATUS_POSITION {
            state.status_text()
        } else if id == SUGGEST_MESSAGE {
            if state.loading_visible {
                "Loading...".to_string()
            } else {
                String::new()
            }
        } else if let Some(i) = indexed(id, "suggest-label-") {
            state.suggestions.get(i).cloned().unwrap_or_default()
        } else if let Some(i) = indexed(id, "menu-label-") {
            state
                .menu_entries(&self.locators)
                .get(i)
                .map(|e| e.label.clone())
                .unwrap_or_default()
        } else if let Some(i) = indexed(id, "section-title-") {
            state
                .sections
                .get(i)
                .map(|s| s.title.clone())
                .unwrap_or_default()
        } else if let Some((i, j)) = index_pair(id, "tree-label-") {
            state
                .sections
                .get(i)
                .and_then(|s| s.nodes.get(j))
                .map(|n| n.label.clone())
                .unwrap_or_default()
        } else {
            String::new()
        };
        Ok(text)
    }
}
