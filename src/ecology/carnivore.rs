//! Carnivore predation.
//!
//! Each prey animal in a biome is resolved on its own: every carnivore that
//! is allowed to target it competes, and the one with the most `P` DNA wins,
//! fewest teeth breaking ties. A carnivore that is eligible for both prey can
//! win both contests; nothing here reserves it for one.

use serde::Serialize;
use tracing::{debug, trace};

use crate::ecology::{Animal, DnaLetter, PLAYER_DENTITIONS};
use crate::error::{RulesError, RulesResult};

/// Most prey a single biome can hold.
pub const MAX_PREY: usize = 2;

/// Why a carnivore may not target a prey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ineligibility {
    /// Same player and same silhouette: the animals are one species.
    Cannibalism,
    /// Body sizes differ by more than one.
    SizeMismatch,
    /// The carnivore's diet does not cover the prey's DNA.
    CannotCatch,
}

/// Decide whether `carnivore` may target `prey`.
///
/// Checks run in a fixed order, so a cannibal is rejected as such even when
/// it could otherwise catch its prey.
///
/// # Errors
///
/// Returns the first rule the pairing breaks.
pub fn check_eligibility(carnivore: &Animal, prey: &Animal) -> Result<(), Ineligibility> {
    if PLAYER_DENTITIONS.contains(&carnivore.dentition)
        && carnivore.dentition == prey.dentition
        && carnivore.silhouette() == prey.silhouette()
    {
        return Err(Ineligibility::Cannibalism);
    }

    if carnivore.size.abs_diff(prey.size) > 1 {
        return Err(Ineligibility::SizeMismatch);
    }

    if !carnivore.genome.can_feed_on(&prey.genome) {
        return Err(Ineligibility::CannotCatch);
    }

    Ok(())
}

/// Result of a predation contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredationOutcome {
    /// For each prey, in input order, the index of the carnivore that eats it.
    pub kills: Vec<Option<usize>>,
}

impl PredationOutcome {
    /// Winning carnivore indices in prey order.
    ///
    /// The same carnivore may appear once per prey it won.
    pub fn winners(&self) -> impl Iterator<Item = usize> + '_ {
        self.kills.iter().flatten().copied()
    }

    /// Check if any prey was eaten.
    #[must_use]
    pub fn any_kills(&self) -> bool {
        self.kills.iter().any(Option::is_some)
    }
}

/// A predation contest in one biome.
#[derive(Debug, Clone)]
pub struct PredationContest<'a> {
    carnivores: &'a [Animal],
    prey: Vec<&'a Animal>,
}

impl<'a> PredationContest<'a> {
    /// Set up a contest between the carnivores and prey present in a biome.
    ///
    /// # Errors
    ///
    /// Returns `TooManyPrey` if more than [`MAX_PREY`] prey are given.
    pub fn new(carnivores: &'a [Animal], prey: &'a [Animal]) -> RulesResult<Self> {
        if prey.len() > MAX_PREY {
            return Err(RulesError::TooManyPrey(prey.len()));
        }
        Ok(Self {
            carnivores,
            prey: prey.iter().collect(),
        })
    }

    /// Set up a contest over a biome's prey slots. Empty slots are skipped,
    /// so `kills` follows the order of the occupied slots.
    #[must_use]
    pub fn from_slots(carnivores: &'a [Animal], slots: [Option<&'a Animal>; MAX_PREY]) -> Self {
        Self {
            carnivores,
            prey: slots.into_iter().flatten().collect(),
        }
    }

    /// Pick the carnivore that eats `prey`, if any may.
    ///
    /// Most `P` wins; equal `P` goes to the lower dentition; a full tie keeps
    /// the earlier carnivore.
    #[must_use]
    pub fn winner_for(&self, prey: &Animal) -> Option<usize> {
        let mut best: Option<(usize, u16, u8)> = None;

        for (idx, carnivore) in self.carnivores.iter().enumerate() {
            if let Err(reason) = check_eligibility(carnivore, prey) {
                trace!(idx, ?reason, "carnivore ineligible");
                continue;
            }

            let predation = carnivore.genome.count_of(DnaLetter::P);
            let improves = best.is_none_or(|(_, best_p, best_dentition)| {
                predation > best_p || (predation == best_p && carnivore.dentition < best_dentition)
            });
            if improves {
                best = Some((idx, predation, carnivore.dentition));
            }
        }

        best.map(|(idx, _, _)| idx)
    }

    /// Resolve every prey independently.
    #[must_use]
    pub fn resolve(&self) -> PredationOutcome {
        let kills: Vec<Option<usize>> = self.prey.iter().map(|p| self.winner_for(p)).collect();
        debug!(
            carnivores = self.carnivores.len(),
            prey = self.prey.len(),
            ?kills,
            "predation contest resolved"
        );
        PredationOutcome { kills }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn species(dentition: u8, size: u8, genome: &str, silhouette: u8) -> Animal {
        Animal::species(dentition, size, genome.parse().unwrap(), silhouette)
    }

    #[test]
    fn test_cannibalism_fires_before_catch_check() {
        let carnivore = species(3, 2, "PPBB", 1);
        let prey = species(3, 2, "B", 1);
        assert_eq!(
            check_eligibility(&carnivore, &prey),
            Err(Ineligibility::Cannibalism)
        );

        // Another silhouette of the same player is fair game.
        let cousin = species(3, 2, "B", 2);
        assert_eq!(check_eligibility(&carnivore, &cousin), Ok(()));
    }

    #[test]
    fn test_immigrants_are_never_cannibals() {
        let carnivore = Animal::immigrant(1, 2, "PB".parse().unwrap(), "M4");
        let prey = Animal::immigrant(1, 2, "B".parse().unwrap(), "M13");
        assert_eq!(check_eligibility(&carnivore, &prey), Ok(()));
    }

    #[test]
    fn test_size_window() {
        let prey = species(2, 3, "B", 0);
        for (size, ok) in [(1, false), (2, true), (3, true), (4, true), (5, false)] {
            let carnivore = species(4, size, "PB", 0);
            assert_eq!(
                check_eligibility(&carnivore, &prey).is_ok(),
                ok,
                "carnivore size {size}"
            );
        }
    }

    #[test]
    fn test_catch_check() {
        let prey = species(2, 2, "BBA", 0);
        assert_eq!(
            check_eligibility(&species(4, 2, "PB", 0), &prey),
            Err(Ineligibility::CannotCatch)
        );
        assert_eq!(check_eligibility(&species(4, 2, "PBB", 0), &prey), Ok(()));
    }

    #[test]
    fn test_most_predation_dna_wins() {
        let carnivores = [species(2, 2, "PB", 0), species(5, 2, "PPB", 0)];
        let prey = [species(3, 2, "B", 0)];
        let outcome = PredationContest::new(&carnivores, &prey).unwrap().resolve();
        assert_eq!(outcome.kills, vec![Some(1)]);
    }

    #[test]
    fn test_fewest_teeth_break_predation_tie() {
        let carnivores = [
            species(5, 2, "PPB", 0),
            species(3, 2, "PPB", 0),
            species(4, 2, "PPB", 0),
        ];
        let prey = [species(2, 2, "B", 0)];
        let outcome = PredationContest::new(&carnivores, &prey).unwrap().resolve();
        assert_eq!(outcome.kills, vec![Some(1)]);
    }

    #[test]
    fn test_full_tie_keeps_first_eligible() {
        let carnivores = [
            species(2, 9, "PPB", 0),
            species(4, 2, "PB", 0),
            species(4, 2, "PB", 1),
        ];
        let prey = [species(3, 2, "B", 0)];
        let outcome = PredationContest::new(&carnivores, &prey).unwrap().resolve();
        assert_eq!(outcome.kills, vec![Some(1)]);
    }

    #[test]
    fn test_each_prey_resolved_independently() {
        let carnivores = [species(2, 2, "PPBG", 0), species(4, 2, "PB", 0)];
        let prey = [species(3, 2, "B", 0), species(5, 2, "G", 0)];
        let outcome = PredationContest::new(&carnivores, &prey).unwrap().resolve();

        // The strongest carnivore wins both prey.
        assert_eq!(outcome.kills, vec![Some(0), Some(0)]);
        assert_eq!(outcome.winners().collect::<Vec<_>>(), vec![0, 0]);
    }

    #[test]
    fn test_prey_with_no_eligible_carnivore_survives() {
        let carnivores = [species(2, 5, "PB", 0)];
        let prey = [species(3, 2, "B", 0)];
        let outcome = PredationContest::new(&carnivores, &prey).unwrap().resolve();
        assert_eq!(outcome.kills, vec![None]);
        assert!(!outcome.any_kills());
    }

    #[test]
    fn test_no_prey() {
        let carnivores = [species(2, 2, "PB", 0)];
        let outcome = PredationContest::new(&carnivores, &[]).unwrap().resolve();
        assert!(outcome.kills.is_empty());
    }

    #[test]
    fn test_empty_slots_are_skipped() {
        let carnivores = [species(4, 2, "PBG", 0)];
        let rooter = species(3, 2, "G", 0);
        let contest = PredationContest::from_slots(&carnivores, [None, Some(&rooter)]);
        assert_eq!(contest.resolve().kills, vec![Some(0)]);

        let empty = PredationContest::from_slots(&carnivores, [None, None]);
        assert!(empty.resolve().kills.is_empty());
    }

    #[test]
    fn test_too_many_prey() {
        let prey = [species(2, 2, "B", 0), species(3, 2, "B", 0), species(4, 2, "B", 0)];
        assert!(matches!(
            PredationContest::new(&[], &prey),
            Err(RulesError::TooManyPrey(3))
        ));
    }
}
