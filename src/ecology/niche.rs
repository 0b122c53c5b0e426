//! Biome niches.
//!
//! A niche is the first tiebreaker in herbivore contests. It names exactly one
//! thing an herbivore can be better at: body size, belonging to a particular
//! player (by dentition), or carrying a particular DNA letter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ecology::{DnaLetter, PLAYER_DENTITIONS};
use crate::error::RulesError;

/// A biome's niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Niche {
    /// Bigger animals are favored.
    Size,
    /// The player with this dentition is favored.
    Dentition(u8),
    /// Animals carrying this letter are favored.
    DnaLetter(DnaLetter),
}

impl FromStr for Niche {
    type Err = RulesError;

    /// Parse `SIZE` (any case), a player dentition `2`-`5`, or a DNA letter.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        let invalid = || RulesError::InvalidNicheSpec(spec.to_string());

        if spec.eq_ignore_ascii_case("SIZE") {
            return Ok(Niche::Size);
        }

        if !spec.is_empty() && spec.chars().all(|c| c.is_ascii_digit()) {
            let dentition: u8 = spec.parse().map_err(|_| invalid())?;
            if PLAYER_DENTITIONS.contains(&dentition) {
                return Ok(Niche::Dentition(dentition));
            }
            return Err(invalid());
        }

        let mut chars = spec.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => DnaLetter::from_char(c)
                .map(Niche::DnaLetter)
                .ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Niche {
    type Error = RulesError;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        spec.parse()
    }
}

impl From<Niche> for String {
    fn from(niche: Niche) -> Self {
        niche.to_string()
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Niche::Size => write!(f, "SIZE"),
            Niche::Dentition(n) => write!(f, "{n}"),
            Niche::DnaLetter(letter) => write!(f, "{letter}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_any_case() {
        for spec in ["SIZE", "Size", "size", " size "] {
            assert_eq!(spec.parse::<Niche>().unwrap(), Niche::Size, "{spec:?}");
        }
    }

    #[test]
    fn test_dentition() {
        assert_eq!("2".parse::<Niche>().unwrap(), Niche::Dentition(2));
        assert_eq!("5".parse::<Niche>().unwrap(), Niche::Dentition(5));
        assert!("1".parse::<Niche>().is_err());
        assert!("6".parse::<Niche>().is_err());
        assert!("300".parse::<Niche>().is_err());
    }

    #[test]
    fn test_dna_letter() {
        assert_eq!("I".parse::<Niche>().unwrap(), Niche::DnaLetter(DnaLetter::I));
        assert_eq!("A".parse::<Niche>().unwrap(), Niche::DnaLetter(DnaLetter::A));
    }

    #[test]
    fn test_invalid() {
        for spec in ["", "X", "BB", "sizes", "-3", "b"] {
            assert!(
                matches!(spec.parse::<Niche>(), Err(RulesError::InvalidNicheSpec(_))),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for niche in [Niche::Size, Niche::Dentition(3), Niche::DnaLetter(DnaLetter::P)] {
            assert_eq!(niche.to_string().parse::<Niche>().unwrap(), niche);
        }
    }
}
