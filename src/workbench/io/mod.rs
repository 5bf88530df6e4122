//! # Automation Driver Abstraction
//!
//! Provides the trait boundary between page objects and the browser automation
//! layer, so page objects never talk to a concrete WebDriver client.
//!
//! ## Design Principles
//!
//! - **Driver**: Abstracts element lookup, key dispatch, clicks and explicit waits
//! - **Opaque Handles**: Elements are referenced by driver-issued ids only
//! - **Blocking Calls**: Every call is synchronous; timeouts belong to the driver
//! - **Dependency Injection**: Enables testing without a browser
//!
//! ## Architecture
//!
//! ```text
//! Production:  TextEditor ──▶ impl Driver (WebDriver client) ──▶ browser DOM
//!
//! Testing:     TextEditor ──▶ MockWorkbench                  ──▶ in-memory editor
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub mod keys;
pub mod mock;

pub use keys::{Key, KeyInput, Modifier};
pub use mock::{MenuResponse, MockWorkbench, RecordedInput};

/// Errors reported by the automation layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("No element found for {selector}")]
    NotFound { selector: Selector },

    #[error("Timed out after {timeout:?} waiting for {condition}")]
    Timeout {
        condition: Condition,
        timeout: Duration,
    },

    #[error("Driver error: {0}")]
    Other(String),
}

/// Driver result
pub type DriverResult<T> = Result<T, DriverError>;

/// Strategy used to find an element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// A single CSS class name (e.g., "inputarea")
    ClassName(String),
    /// CSS selector (e.g., "div.tab.active")
    Css(String),
}

impl Selector {
    /// Create a class name selector
    pub fn class_name(name: impl Into<String>) -> Self {
        Self::ClassName(name.into())
    }

    /// Create a CSS selector
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::ClassName(name) => write!(f, "class name '{name}'"),
            Selector::Css(css) => write!(f, "css '{css}'"),
        }
    }
}

/// Driver-issued reference to a DOM element
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element '{}'", self.0)
    }
}

/// Conditions understood by [`Driver::wait_until`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Visible(ElementHandle),
    NotVisible(ElementHandle),
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Visible(element) => write!(f, "{element} to be visible"),
            Condition::NotVisible(element) => write!(f, "{element} to be not visible"),
        }
    }
}

/// Browser automation driver abstraction
///
/// All methods block until the driver answers. Implementations own whatever
/// interior synchronization they need, which is why every method takes `&self`.
pub trait Driver {
    /// Find the first element matching `selector`, searching below `scope`
    /// or from the document root when `scope` is `None`.
    fn locate(&self, scope: Option<&ElementHandle>, selector: &Selector)
        -> DriverResult<ElementHandle>;

    /// Find all elements matching `selector`; an empty list is not an error.
    fn locate_all(
        &self,
        scope: Option<&ElementHandle>,
        selector: &Selector,
    ) -> DriverResult<Vec<ElementHandle>>;

    /// Dispatch key input to an element, in order
    fn send_keys(&self, element: &ElementHandle, input: &[KeyInput]) -> DriverResult<()>;

    /// Left click an element
    fn click(&self, element: &ElementHandle) -> DriverResult<()>;

    /// Right click an element, opening its context menu
    fn context_click(&self, element: &ElementHandle) -> DriverResult<()>;

    /// Block until `condition` holds or `timeout` elapses
    fn wait_until(&self, condition: &Condition, timeout: Duration) -> DriverResult<()>;

    /// Read a DOM attribute; `None` when the attribute is absent
    fn attribute(&self, element: &ElementHandle, name: &str) -> DriverResult<Option<String>>;

    /// Read a computed CSS property
    fn css_value(&self, element: &ElementHandle, property: &str) -> DriverResult<String>;

    /// Read the rendered text of an element
    fn text(&self, element: &ElementHandle) -> DriverResult<String>;
}

impl<D: Driver + ?Sized> Driver for &D {
    fn locate(
        &self,
        scope: Option<&ElementHandle>,
        selector: &Selector,
    ) -> DriverResult<ElementHandle> {
        (**self).locate(scope, selector)
    }

    fn locate_all(
        &self,
        scope: Option<&ElementHandle>,
        selector: &Selector,
    ) -> DriverResult<Vec<ElementHandle>> {
        (**self).locate_all(scope, selector)
    }

    fn send_keys(&self, element: &ElementHandle, input: &[KeyInput]) -> DriverResult<()> {
        (**self).send_keys(element, input)
    }

    fn click(&self, element: &ElementHandle) -> DriverResult<()> {
        (**self).click(element)
    }

    fn context_click(&self, element: &ElementHandle) -> DriverResult<()> {
        (**self).context_click(element)
    }

    fn wait_until(&self, condition: &Condition, timeout: Duration) -> DriverResult<()> {
        (**self).wait_until(condition, timeout)
    }

    fn attribute(&self, element: &ElementHandle, name: &str) -> DriverResult<Option<String>> {
        (**self).attribute(element, name)
    }

    fn css_value(&self, element: &ElementHandle, property: &str) -> DriverResult<String> {
        (**self).css_value(element, property)
    }

    fn text(&self, element: &ElementHandle) -> DriverResult<String> {
        (**self).text(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_display_should_name_strategy() {
        assert_eq!(
            Selector::class_name("inputarea").to_string(),
            "class name 'inputarea'"
        );
        assert_eq!(Selector::css("div.tab").to_string(), "css 'div.tab'");
    }

    #[test]
    fn timeout_error_should_describe_condition() {
        let error = DriverError::Timeout {
            condition: Condition::NotVisible(ElementHandle::new("message")),
            timeout: Duration::from_millis(250),
        };
        assert_eq!(
            error.to_string(),
            "Timed out after 250ms waiting for element 'message' to be not visible"
        );
    }
}
