//! Board layout configuration.
//!
//! The printed board is the default layout. Alternative layouts can be loaded
//! from JSON for testing variants; every layout is validated before a board
//! is built from it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{HabitatKey, LatitudeKey};
use crate::error::{RulesError, RulesResult};

/// One latitude row of the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLayout {
    /// Latitude of this row.
    pub latitude: LatitudeKey,
    /// One climax digit per habitat, left to right.
    pub climax_numbers: String,
}

impl RowLayout {
    /// Create a row.
    #[must_use]
    pub fn new(latitude: LatitudeKey, climax_numbers: &str) -> Self {
        Self {
            latitude,
            climax_numbers: climax_numbers.to_string(),
        }
    }
}

/// Shape and printing of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Habitats per row in the rectangular part of the board.
    pub width: usize,
    /// Rows from top (Arctic) to bottom.
    pub rows: Vec<RowLayout>,
    /// Columns under which the last row's extra habitats hang, left to right.
    pub overhang: Vec<usize>,
    /// Keys of the orogeny habitats.
    pub orogeny: Vec<String>,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            width: 6,
            rows: vec![
                RowLayout::new(LatitudeKey::Arctic, "263541"),
                RowLayout::new(LatitudeKey::JetStream, "614532"),
                RowLayout::new(LatitudeKey::HorseLatitudes, "243561"),
                RowLayout::new(LatitudeKey::Tropics, "73856412"),
            ],
            overhang: vec![2, 3],
            orogeny: ["A4", "J1", "J3", "H0", "H4", "T1"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl BoardLayout {
    /// Parse a layout from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns `Layout` for malformed JSON and `InvalidLayout` if the layout
    /// does not describe a buildable board.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read a layout file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, otherwise as [`Self::from_json`].
    pub fn load(path: impl AsRef<Path>) -> RulesResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check that the layout describes a buildable board.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLayout` describing the first problem found.
    pub fn validate(&self) -> RulesResult<()> {
        let invalid = |reason: String| Err(RulesError::InvalidLayout(reason));

        if self.width == 0 {
            return invalid("width must be positive".to_string());
        }
        if self.rows.is_empty() {
            return invalid("at least one row is required".to_string());
        }
        if self.width > usize::from(u8::MAX) || self.width + self.overhang.len() > usize::from(u8::MAX) {
            return invalid(format!("row of {} habitats is too long", self.width));
        }

        let mut seen = HashSet::new();
        let last = self.rows.len() - 1;
        for (row_idx, row) in self.rows.iter().enumerate() {
            if row.latitude.is_orogeny() {
                return invalid("the orogeny latitude cannot be a row".to_string());
            }
            if !seen.insert(row.latitude) {
                return invalid(format!("latitude {} appears twice", row.latitude));
            }
            if let Some(c) = row.climax_numbers.chars().find(|c| !matches!(c, '1'..='9')) {
                return invalid(format!(
                    "row {}: climax number {c:?} is not a digit 1-9",
                    row.latitude
                ));
            }
            let expected = if row_idx == last {
                self.width + self.overhang.len()
            } else {
                self.width
            };
            let actual = row.climax_numbers.chars().count();
            if actual != expected {
                return invalid(format!(
                    "row {} has {actual} habitats, expected {expected}",
                    row.latitude
                ));
            }
        }

        if self.overhang.windows(2).any(|w| w[0] >= w[1]) {
            return invalid("overhang columns must be strictly increasing".to_string());
        }
        if let Some(col) = self.overhang.iter().find(|&&col| col >= self.width) {
            return invalid(format!("overhang column {col} is off the board"));
        }

        for key in &self.orogeny {
            let parsed: HabitatKey = key
                .parse()
                .map_err(|_| RulesError::InvalidLayout(format!("bad orogeny key {key:?}")))?;
            let on_board = self
                .rows
                .iter()
                .position(|row| row.latitude == parsed.latitude)
                .is_some_and(|row_idx| {
                    let len = if row_idx == last {
                        self.width + self.overhang.len()
                    } else {
                        self.width
                    };
                    usize::from(parsed.index) < len
                });
            if !on_board {
                return invalid(format!("orogeny habitat {key} is not on the board"));
            }
        }

        Ok(())
    }
}
