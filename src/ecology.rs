//! Ecology rules.
//!
//! Decides who may eat whom:
//! - Genomes (DNA multisets) and their feed/prey coverage checks
//! - Niches used to break herbivore ties
//! - Animals (player species and immigrants)
//! - Herbivore contests for a biome
//! - Carnivore predation contests

mod animal;
mod carnivore;
mod dna;
mod herbivore;
mod niche;

pub use animal::{
    Animal, IMMIGRANT_HERBIVORE_DENTITION, IMMIGRANT_PREDATOR_DENTITION, Origin, PLAYER_DENTITIONS,
    SILHOUETTE_COUNT,
};
pub use carnivore::{
    Ineligibility, MAX_PREY, PredationContest, PredationOutcome, check_eligibility,
};
pub use dna::{DNA_LETTER_COUNT, DnaLetter, Genome};
pub use herbivore::{HerbivoreContest, HerbivoreOutcome, HerbivoreScore, NICHE_BONUS};
pub use niche::Niche;
