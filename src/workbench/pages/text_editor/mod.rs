//! # Text Editor
//!
//! Page object for the editor in the active editor group. The widget offers no
//! API for its content or cursor, so every operation is an act/observe chain:
//!
//! - act: key presses and chords sent to the hidden input area
//! - observe: the clipboard for text, the status bar for the cursor
//!
//! Text access lives in [`text_access`], cursor movement in
//! [`cursor_navigation`]. This module holds the composed intents.

use super::{ContentAssist, ContextMenu, Locatable, StatusBar, Waitable};
use crate::workbench::error::{PilotError, PilotResult};
use crate::workbench::io::{Driver, ElementHandle, Key, KeyInput, Modifier};
use crate::workbench::locators::has_class;
use crate::workbench::models::Coordinate;
use crate::workbench::{Clipboard, Workbench};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

mod cursor_navigation;
mod text_access;

pub struct TextEditor<'w, D: Driver, C: Clipboard> {
    bench: &'w Workbench<D, C>,
    group: ElementHandle,
    element: ElementHandle,
}

impl<'w, D: Driver, C: Clipboard> Locatable for TextEditor<'w, D, C> {
    type Driver = D;

    fn driver(&self) -> &D {
        self.bench.driver()
    }

    fn element(&self) -> &ElementHandle {
        &self.element
    }
}

impl<'w, D: Driver, C: Clipboard> Waitable for TextEditor<'w, D, C> {
    fn timeout(&self) -> Duration {
        self.bench.config().wait_timeout
    }
}

impl<'w, D: Driver, C: Clipboard> TextEditor<'w, D, C> {
    pub fn new(bench: &'w Workbench<D, C>, group: ElementHandle, element: ElementHandle) -> Self {
        Self {
            bench,
            group,
            element,
        }
    }

    /// The hidden textarea receiving keyboard input
    pub fn input_area(&self) -> PilotResult<ElementHandle> {
        self.find(&self.bench.locators().input_area)
    }

    fn send(&self, input: &[KeyInput]) -> PilotResult<()> {
        let input_area = self.input_area()?;
        self.driver().send_keys(&input_area, input)?;
        Ok(())
    }

    /// Platform shortcut such as select-all or save
    fn command_chord(&self, ch: char) -> KeyInput {
        KeyInput::chord(
            self.bench.config().platform.command_modifier(),
            Key::Char(ch),
        )
    }

    /// Current cursor position as shown in the status bar
    pub fn coordinates(&self) -> PilotResult<Coordinate> {
        StatusBar::new(self.driver(), self.bench.locators()).coordinates()
    }

    /// Whether the active tab of this editor's group shows unsaved changes
    pub fn is_dirty(&self) -> PilotResult<bool> {
        let locators = self.bench.locators();
        let tab = self
            .driver()
            .locate(Some(&self.group), &locators.active_tab)?;
        let classes = self.driver().attribute(&tab, "class")?.unwrap_or_default();
        Ok(has_class(&classes, &locators.dirty_class))
    }

    pub fn save(&self) -> PilotResult<()> {
        tracing::info!("Saving editor content");
        self.send(&[self.command_chord('s')])
    }

    /// Local path of the file open in this editor
    pub fn file_path(&self) -> PilotResult<PathBuf> {
        let monaco = self.find(&self.bench.locators().monaco_editor)?;
        let uri = self
            .driver()
            .attribute(&monaco, "data-uri")?
            .unwrap_or_default();

        Url::parse(&uri)
            .ok()
            .filter(|url| url.scheme() == "file")
            .and_then(|url| url.to_file_path().ok())
            .ok_or(PilotError::InvalidFileUri(uri))
    }

    /// Open or close the suggestion popup
    ///
    /// Returns the popup when opening. Nothing is sent if the popup is already
    /// in the requested state.
    pub fn toggle_content_assist(
        &self,
        open: bool,
    ) -> PilotResult<Option<ContentAssist<'w, D, C>>> {
        let locators = self.bench.locators();
        let widget = self.find(&locators.suggest_widget)?;
        let classes = self
            .driver()
            .attribute(&widget, "class")?
            .unwrap_or_default();
        let flagged_visible = has_class(&classes, &locators.visible_class);

        if open {
            let visibility = self.driver().css_value(&widget, "visibility")?;
            if !flagged_visible || visibility == "hidden" {
                tracing::debug!("Opening content assist (visibility: {:?})", visibility);
                self.send(&[KeyInput::chord(Modifier::Control, Key::Space)])?;
            }
            let assist = ContentAssist::new(self.bench, widget).wait()?;
            Ok(Some(assist))
        } else {
            if flagged_visible {
                tracing::debug!("Closing content assist");
                self.send(&[KeyInput::press(Key::Escape)])?;
            }
            Ok(None)
        }
    }

    /// Run "Format Document" from the context menu
    ///
    /// A buffer without a formatter has the entry missing or disabled; that
    /// is logged and the menu dismissed without failing.
    pub fn format_document(&self) -> PilotResult<()> {
        let label = &self.bench.locators().format_document_label;
        let input_area = self.input_area()?;

        let outcome =
            ContextMenu::open_on(self.bench, &input_area).and_then(|menu| menu.select(label));

        match outcome {
            Ok(()) => {
                tracing::debug!("Formatted document");
                Ok(())
            }
            Err(e) if e.is_unavailable_action() => {
                tracing::warn!("{} is not available: {}", label, e);
                self.send(&[KeyInput::press(Key::Escape)])
            }
            Err(e) => Err(e),
        }
    }

    /// Move to `(line, column)` and type `text` there
    pub fn type_text(&self, line: usize, column: usize, text: &str) -> PilotResult<()> {
        self.move_cursor(line, column)?;
        tracing::debug!("Typing {:?} at {}:{}", text, line, column);
        self.send(&[KeyInput::text(text)])
    }
}
