//! Latitude bands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::HabitatId;
use crate::error::RulesError;

/// Key of a latitude band, or of the orogeny pseudo-latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LatitudeKey {
    /// Arctic.
    #[serde(rename = "A")]
    Arctic,
    /// Jet stream.
    #[serde(rename = "J")]
    JetStream,
    /// Horse latitudes.
    #[serde(rename = "H")]
    HorseLatitudes,
    /// Tropics.
    #[serde(rename = "T")]
    Tropics,
    /// Orogeny habitats, gathered from every real latitude.
    #[serde(rename = "O")]
    Orogeny,
}

impl LatitudeKey {
    /// Real latitude bands, top of the board first.
    pub const BANDS: [LatitudeKey; 4] = [
        LatitudeKey::Arctic,
        LatitudeKey::JetStream,
        LatitudeKey::HorseLatitudes,
        LatitudeKey::Tropics,
    ];

    /// Parse a single key letter.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(LatitudeKey::Arctic),
            'J' => Some(LatitudeKey::JetStream),
            'H' => Some(LatitudeKey::HorseLatitudes),
            'T' => Some(LatitudeKey::Tropics),
            'O' => Some(LatitudeKey::Orogeny),
            _ => None,
        }
    }

    /// The key letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            LatitudeKey::Arctic => 'A',
            LatitudeKey::JetStream => 'J',
            LatitudeKey::HorseLatitudes => 'H',
            LatitudeKey::Tropics => 'T',
            LatitudeKey::Orogeny => 'O',
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LatitudeKey::Arctic => "Arctic",
            LatitudeKey::JetStream => "Jet Stream",
            LatitudeKey::HorseLatitudes => "Horse Latitudes",
            LatitudeKey::Tropics => "Tropics",
            LatitudeKey::Orogeny => "Orogeny",
        }
    }

    /// Check if this is the orogeny pseudo-latitude.
    #[must_use]
    pub const fn is_orogeny(self) -> bool {
        matches!(self, LatitudeKey::Orogeny)
    }
}

impl FromStr for LatitudeKey {
    type Err = RulesError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut chars = key.chars();
        let parsed = match (chars.next(), chars.next()) {
            (Some(c), None) => LatitudeKey::from_char(c),
            _ => None,
        };
        parsed.ok_or_else(|| RulesError::InvalidLatitudeKey(key.to_string()))
    }
}

impl fmt::Display for LatitudeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A named group of habitats.
///
/// Does not own its habitats; it lists ids into the board's arena in a
/// fixed order, which is the order lowest-climax ties are broken in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Latitude {
    /// Key of this latitude.
    pub key: LatitudeKey,
    /// Display name.
    pub name: &'static str,
    /// Member habitats.
    pub habitats: Vec<HabitatId>,
}

impl Latitude {
    pub(crate) fn new(key: LatitudeKey) -> Self {
        Self {
            key,
            name: key.name(),
            habitats: Vec::new(),
        }
    }
}
