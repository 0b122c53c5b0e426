//! Animals: player species and immigrants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ecology::Genome;
use crate::error::RulesError;

/// Dentitions a player species can have (one per player color).
pub const PLAYER_DENTITIONS: std::ops::RangeInclusive<u8> = 2..=5;

/// Dentition of an immigrant predator.
pub const IMMIGRANT_PREDATOR_DENTITION: u8 = 1;

/// Dentition of an immigrant herbivore. Ranks below every player in ties.
pub const IMMIGRANT_HERBIVORE_DENTITION: u8 = 0;

/// Number of silhouettes (body plans) each player has.
pub const SILHOUETTE_COUNT: u8 = 4;

/// Where an animal came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// One of a player's species.
    Species {
        /// Body plan, `0..SILHOUETTE_COUNT`.
        silhouette: u8,
    },
    /// An immigrant, drawn from a tile.
    Immigrant {
        /// Key of the source tile.
        tile: String,
    },
}

/// An animal taking part in a contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Tooth count; identifies the owning player for species.
    pub dentition: u8,
    /// Body size.
    pub size: u8,
    /// DNA.
    pub genome: Genome,
    /// Species or immigrant.
    pub origin: Origin,
}

impl Animal {
    /// Create a player species.
    #[must_use]
    pub fn species(dentition: u8, size: u8, genome: Genome, silhouette: u8) -> Self {
        Self {
            dentition,
            size,
            genome,
            origin: Origin::Species { silhouette },
        }
    }

    /// Create an immigrant drawn from `tile`.
    #[must_use]
    pub fn immigrant(dentition: u8, size: u8, genome: Genome, tile: impl Into<String>) -> Self {
        Self {
            dentition,
            size,
            genome,
            origin: Origin::Immigrant { tile: tile.into() },
        }
    }

    /// Silhouette of a player species, `None` for immigrants.
    #[must_use]
    pub const fn silhouette(&self) -> Option<u8> {
        match self.origin {
            Origin::Species { silhouette } => Some(silhouette),
            Origin::Immigrant { .. } => None,
        }
    }

    /// Check if this animal belongs to a player.
    #[must_use]
    pub fn is_player_species(&self) -> bool {
        PLAYER_DENTITIONS.contains(&self.dentition)
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.dentition, self.size, self.genome)?;
        match &self.origin {
            Origin::Species { silhouette } => write!(f, ":{silhouette}"),
            Origin::Immigrant { tile } => write!(f, " ({tile})"),
        }
    }
}

impl FromStr for Animal {
    type Err = RulesError;

    /// Parse the compact `DENTITION:SIZE:GENOME[:SILHOUETTE]` form.
    ///
    /// The silhouette defaults to 0. Used by the command line and tests.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| RulesError::InvalidAnimalSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = spec.trim().split(':');
        let dentition = fields
            .next()
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or_else(|| invalid("dentition must be a number"))?;
        let size = fields
            .next()
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or_else(|| invalid("size must be a number"))?;
        let genome = fields.next().unwrap_or_default().parse::<Genome>()?;
        let silhouette = match fields.next() {
            Some(s) => s
                .parse::<u8>()
                .ok()
                .filter(|&n| n < SILHOUETTE_COUNT)
                .ok_or_else(|| invalid("silhouette must be 0-3"))?,
            None => 0,
        };
        if fields.next().is_some() {
            return Err(invalid("too many fields"));
        }

        Ok(Self::species(dentition, size, genome, silhouette))
    }
}
