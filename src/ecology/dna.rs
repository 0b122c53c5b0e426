//! DNA letters and genomes.
//!
//! A genome is a multiset of DNA letters. Letters fall into two disjoint
//! classes: roadrunner letters (mobility and defense) and dietary letters
//! (what an animal can eat). The coverage predicates only ever look at one
//! class of the *other* genome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Number of distinct DNA letters.
pub const DNA_LETTER_COUNT: usize = 9;

/// A single DNA letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum DnaLetter {
    /// Armor (roadrunner).
    A = 0,
    /// Marine (roadrunner).
    M = 1,
    /// Nocturnal (roadrunner).
    N = 2,
    /// Speed (roadrunner).
    S = 3,
    /// Browser (dietary).
    B = 4,
    /// Grazer (dietary).
    G = 5,
    /// Hardshell (dietary).
    H = 6,
    /// Insectivore (dietary).
    I = 7,
    /// Predator (dietary).
    P = 8,
}

impl DnaLetter {
    /// All letters, roadrunner letters first.
    pub const ALL: [DnaLetter; DNA_LETTER_COUNT] = [
        DnaLetter::A,
        DnaLetter::M,
        DnaLetter::N,
        DnaLetter::S,
        DnaLetter::B,
        DnaLetter::G,
        DnaLetter::H,
        DnaLetter::I,
        DnaLetter::P,
    ];

    /// Roadrunner alphabet.
    pub const ROADRUNNER: [DnaLetter; 4] = [DnaLetter::A, DnaLetter::M, DnaLetter::N, DnaLetter::S];

    /// Dietary alphabet.
    pub const DIETARY: [DnaLetter; 5] = [
        DnaLetter::B,
        DnaLetter::G,
        DnaLetter::H,
        DnaLetter::I,
        DnaLetter::P,
    ];

    /// Parse a letter. Only uppercase letters are recognized.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(DnaLetter::A),
            'M' => Some(DnaLetter::M),
            'N' => Some(DnaLetter::N),
            'S' => Some(DnaLetter::S),
            'B' => Some(DnaLetter::B),
            'G' => Some(DnaLetter::G),
            'H' => Some(DnaLetter::H),
            'I' => Some(DnaLetter::I),
            'P' => Some(DnaLetter::P),
            _ => None,
        }
    }

    /// The letter as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            DnaLetter::A => 'A',
            DnaLetter::M => 'M',
            DnaLetter::N => 'N',
            DnaLetter::S => 'S',
            DnaLetter::B => 'B',
            DnaLetter::G => 'G',
            DnaLetter::H => 'H',
            DnaLetter::I => 'I',
            DnaLetter::P => 'P',
        }
    }

    /// Check if this is a roadrunner (mobility/defense) letter.
    #[must_use]
    pub const fn is_roadrunner(self) -> bool {
        matches!(self, DnaLetter::A | DnaLetter::M | DnaLetter::N | DnaLetter::S)
    }

    /// Check if this is a dietary letter.
    #[must_use]
    pub const fn is_dietary(self) -> bool {
        !self.is_roadrunner()
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DnaLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for DnaLetter {
    type Error = RulesError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        DnaLetter::from_char(c).ok_or(RulesError::InvalidDnaLetter(c))
    }
}

/// An immutable DNA multiset: an animal's genome or a biome's requirements.
///
/// Counts are stored in a fixed array indexed by letter, so genomes are
/// `Copy` and comparisons never allocate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Genome {
    counts: [u16; DNA_LETTER_COUNT],
}

impl Genome {
    /// The empty genome.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            counts: [0; DNA_LETTER_COUNT],
        }
    }

    /// Tally a sequence of letters into a genome.
    ///
    /// Counts saturate at `u16::MAX` per letter. Parsing a genome string
    /// rejects anything longer instead.
    #[must_use]
    pub fn from_letters(letters: impl IntoIterator<Item = DnaLetter>) -> Self {
        let mut genome = Self::empty();
        for letter in letters {
            let count = &mut genome.counts[letter.index()];
            *count = count.saturating_add(1);
        }
        genome
    }

    /// Number of copies of `letter` (0 if absent).
    #[must_use]
    #[inline]
    pub const fn count_of(&self, letter: DnaLetter) -> u16 {
        self.counts[letter.index()]
    }

    /// Check if this genome carries at least one `letter`.
    #[must_use]
    pub const fn has(&self, letter: DnaLetter) -> bool {
        self.count_of(letter) > 0
    }

    /// Total number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    /// Check if the genome holds no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Iterate over present letters and their counts, in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (DnaLetter, u16)> + '_ {
        DnaLetter::ALL
            .iter()
            .map(|&letter| (letter, self.count_of(letter)))
            .filter(|&(_, count)| count > 0)
    }

    /// Can an animal with this genome catch one with `other`?
    ///
    /// False if `other` has any roadrunner letter this genome lacks, or has
    /// more copies of it. Dietary letters in `other` are ignored.
    #[must_use]
    pub fn can_prey_on(&self, other: &Genome) -> bool {
        self.covers(other, &DnaLetter::ROADRUNNER)
    }

    /// Can an animal with this genome feed on `other`?
    ///
    /// False if `other` has any dietary letter this genome lacks, or has more
    /// copies of it. Roadrunner letters in `other` are ignored.
    #[must_use]
    pub fn can_feed_on(&self, other: &Genome) -> bool {
        self.covers(other, &DnaLetter::DIETARY)
    }

    fn covers(&self, other: &Genome, alphabet: &[DnaLetter]) -> bool {
        alphabet
            .iter()
            .all(|&letter| self.count_of(letter) >= other.count_of(letter))
    }
}

impl FromStr for Genome {
    type Err = RulesError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let mut genome = Self::empty();
        for c in spec.chars() {
            let letter = DnaLetter::try_from(c)?;
            let count = &mut genome.counts[letter.index()];
            *count = count
                .checked_add(1)
                .ok_or(RulesError::TooManyCopies(letter))?;
        }
        Ok(genome)
    }
}

impl TryFrom<String> for Genome {
    type Error = RulesError;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        spec.parse()
    }
}

impl From<Genome> for String {
    fn from(genome: Genome) -> Self {
        genome.to_string()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (letter, count) in self.iter() {
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genome(spec: &str) -> Genome {
        spec.parse().unwrap()
    }

    #[test]
    fn test_letter_classes() {
        assert!(DnaLetter::A.is_roadrunner());
        assert!(!DnaLetter::A.is_dietary());
        assert!(DnaLetter::P.is_dietary());
        assert!(!DnaLetter::P.is_roadrunner());
        for letter in DnaLetter::ALL {
            assert_ne!(letter.is_roadrunner(), letter.is_dietary());
        }
    }

    #[test]
    fn test_tally() {
        let g = genome("BBGAAA");
        assert_eq!(g.count_of(DnaLetter::B), 2);
        assert_eq!(g.count_of(DnaLetter::G), 1);
        assert_eq!(g.count_of(DnaLetter::A), 3);
        assert_eq!(g.count_of(DnaLetter::P), 0);
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn test_invalid_letter() {
        assert!(matches!(
            "BBX".parse::<Genome>(),
            Err(RulesError::InvalidDnaLetter('X'))
        ));
        assert!(matches!(
            "bb".parse::<Genome>(),
            Err(RulesError::InvalidDnaLetter('b'))
        ));
    }

    #[test]
    fn test_overlong_spec_is_rejected() {
        let at_cap = "B".repeat(usize::from(u16::MAX));
        assert_eq!(genome(&at_cap).count_of(DnaLetter::B), u16::MAX);

        let requirement = "B".repeat(70_000);
        assert!(matches!(
            requirement.parse::<Genome>(),
            Err(RulesError::TooManyCopies(DnaLetter::B))
        ));
        assert!(format!("{at_cap}B").parse::<Genome>().is_err());
    }

    #[test]
    fn test_empty_spec() {
        let g = genome("");
        assert!(g.is_empty());
        assert_eq!(g, Genome::empty());
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(genome("GABBA").to_string(), "AABBG");
    }

    #[test]
    fn test_can_prey_on() {
        let predators = ["BGA", "M", "MM", "INS"];
        let catchable = ["IG", "MGG", "MP", "HHS"];
        for (predator, prey) in predators.iter().zip(catchable) {
            assert!(
                genome(predator).can_prey_on(&genome(prey)),
                "{predator} should catch {prey}"
            );
        }

        let escapes = ["IGAA", "MSGG", "MN", "A"];
        for (predator, prey) in predators.iter().zip(escapes) {
            assert!(
                !genome(predator).can_prey_on(&genome(prey)),
                "{predator} should not catch {prey}"
            );
        }
    }

    #[test]
    fn test_can_feed_on() {
        let eaters = ["BGA", "M", "MMP", "INS"];
        let edible = ["BG", "", "MP", "IAA"];
        for (eater, food) in eaters.iter().zip(edible) {
            assert!(
                genome(eater).can_feed_on(&genome(food)),
                "{eater} should feed on {food}"
            );
        }

        let inedible = ["BGG", "H", "MPP", "IIN"];
        for (eater, food) in eaters.iter().zip(inedible) {
            assert!(
                !genome(eater).can_feed_on(&genome(food)),
                "{eater} should not feed on {food}"
            );
        }
    }

    #[test]
    fn test_predicates_not_symmetric() {
        let big = genome("BBG");
        let small = genome("B");
        assert!(big.can_feed_on(&small));
        assert!(!small.can_feed_on(&big));
    }

    #[test]
    fn test_serde_as_string() {
        let g = genome("PAS");
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"ASP\"");
        let back: Genome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert!(serde_json::from_str::<Genome>("\"XYZ\"").is_err());
    }
}
