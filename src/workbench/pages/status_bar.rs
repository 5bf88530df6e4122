//! # Status Bar
//!
//! The editor exposes no cursor query API, so the position item of the status
//! bar ("Ln 4, Col 2") is the only source of truth for the cursor.

use crate::workbench::error::{PilotError, PilotResult};
use crate::workbench::io::Driver;
use crate::workbench::locators::Locators;
use crate::workbench::models::Coordinate;
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern is valid"));

/// Read the first two digit runs of a status text as `(line, column)`
///
/// Any further numbers, such as a selection length, are ignored.
pub fn parse_coordinates(text: &str) -> PilotResult<Coordinate> {
    let malformed = || PilotError::MalformedStatus(text.to_string());

    let mut numbers = DIGIT_RUN
        .find_iter(text)
        .map(|run| run.as_str().parse::<usize>());

    let line = numbers.next().ok_or_else(malformed)?.map_err(|_| malformed())?;
    let column = numbers.next().ok_or_else(malformed)?.map_err(|_| malformed())?;

    Ok(Coordinate::new(line, column))
}

/// Page object for the status bar
pub struct StatusBar<'w, D: Driver> {
    driver: &'w D,
    locators: &'w Locators,
}

impl<'w, D: Driver> StatusBar<'w, D> {
    pub fn new(driver: &'w D, locators: &'w Locators) -> Self {
        Self { driver, locators }
    }

    /// Raw text of the cursor position item
    pub fn position_text(&self) -> PilotResult<String> {
        let item = self.driver.locate(None, &self.locators.status_position)?;
        Ok(self.driver.text(&item)?)
    }

    /// Current cursor coordinate, freshly read
    pub fn coordinates(&self) -> PilotResult<Coordinate> {
        let text = self.position_text()?;
        let coordinate = parse_coordinates(&text)?;
        tracing::trace!("Status bar reads {:?} => {}", text, coordinate);
        Ok(coordinate)
    }
}
