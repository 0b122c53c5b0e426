//! Herbivore contests.
//!
//! When several herbivores compete for one biome, each is scored on three
//! tiers compared lexicographically:
//!
//! 1. Suitability: can it feed on the biome's requirements at all?
//! 2. Niche bonus: how well it fits the biome's niche.
//! 3. Dentition: fewer teeth lose the final tiebreak.
//!
//! The best-scoring animal wins only if it is suitable. If nobody is
//! suitable the biome supports no herbivore.

use serde::Serialize;
use tracing::{debug, trace};

use crate::ecology::{Animal, Genome, Niche};

/// Bonus awarded per matching niche point.
pub const NICHE_BONUS: u32 = 10;

/// Score of one herbivore, ordered lexicographically by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct HerbivoreScore {
    /// The animal can feed on the biome's requirements.
    pub suitable: bool,
    /// Niche tier: `10 × size` for size niches, otherwise 0 or 10.
    pub niche_bonus: u32,
    /// Final tiebreak.
    pub dentition: u8,
}

impl HerbivoreScore {
    /// The score as a single hundreds/tens/ones number.
    ///
    /// For display only: once the niche bonus reaches 100 this collides with
    /// the suitability tier, so never rank by it.
    #[must_use]
    pub fn points(&self) -> u32 {
        let suitability = if self.suitable { 100 } else { 0 };
        suitability + self.niche_bonus + u32::from(self.dentition)
    }
}

/// Result of an herbivore contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HerbivoreOutcome {
    /// Index of the surviving animal, if any.
    pub winner: Option<usize>,
    /// Score of every candidate, in input order.
    pub scores: Vec<HerbivoreScore>,
}

/// A contest between herbivores for one biome.
#[derive(Debug, Clone, Copy)]
pub struct HerbivoreContest<'a> {
    animals: &'a [Animal],
    requirements: &'a Genome,
    niche: Niche,
}

impl<'a> HerbivoreContest<'a> {
    /// Set up a contest over `animals` for a biome with the given
    /// requirements and niche. Order matters: earlier animals win exact ties.
    #[must_use]
    pub const fn new(animals: &'a [Animal], requirements: &'a Genome, niche: Niche) -> Self {
        Self {
            animals,
            requirements,
            niche,
        }
    }

    /// Score one animal against this contest's biome.
    #[must_use]
    pub fn score(&self, animal: &Animal) -> HerbivoreScore {
        let niche_bonus = match self.niche {
            Niche::Size => NICHE_BONUS * u32::from(animal.size),
            Niche::Dentition(n) if animal.dentition == n => NICHE_BONUS,
            Niche::DnaLetter(letter) if animal.genome.has(letter) => NICHE_BONUS,
            Niche::Dentition(_) | Niche::DnaLetter(_) => 0,
        };

        HerbivoreScore {
            suitable: animal.genome.can_feed_on(self.requirements),
            niche_bonus,
            dentition: animal.dentition,
        }
    }

    /// Resolve the contest.
    #[must_use]
    pub fn resolve(&self) -> HerbivoreOutcome {
        let scores: Vec<HerbivoreScore> = self.animals.iter().map(|a| self.score(a)).collect();

        // Only a strictly better score displaces the leader, so the first
        // listed animal wins exact ties.
        let mut best: Option<(usize, HerbivoreScore)> = None;
        for (idx, &score) in scores.iter().enumerate() {
            trace!(idx, points = score.points(), ?score, "herbivore scored");
            if best.is_none_or(|(_, leader)| score > leader) {
                best = Some((idx, score));
            }
        }

        let winner = best.filter(|(_, score)| score.suitable).map(|(idx, _)| idx);
        debug!(
            candidates = self.animals.len(),
            niche = %self.niche,
            requirements = %self.requirements,
            ?winner,
            "herbivore contest resolved"
        );

        HerbivoreOutcome { winner, scores }
    }

    /// The winning animal, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&'a Animal> {
        let animals = self.animals;
        self.resolve().winner.map(|idx| &animals[idx])
    }
}
