// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Megafauna: deterministic ecology rules for an evolution board game.
//!
//! This crate decides who eats whom and where tiles go:
//! - DNA genomes and their feed/prey coverage checks
//! - Herbivore contests for a biome, broken by niche and dentition
//! - Carnivore predation, one prey at a time
//! - The habitat board, its latitudes and lowest-climax placement
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Tiles (catalog, seeded stacks)    │
//! ├─────────────────────────────────────┤
//! │   Board (habitats, latitudes)       │
//! ├─────────────────────────────────────┤
//! │   Ecology (genomes, contests)       │
//! └─────────────────────────────────────┘
//! ```

pub mod board;
pub mod ecology;
pub mod error;
pub mod tiles;

pub use error::{RulesError, RulesResult};

// Re-export key types at crate root for convenience
pub use board::{Board, BoardLayout, Direction, Habitat, HabitatId, LatitudeKey, Placement};
pub use ecology::{
    Animal, DnaLetter, Genome, HerbivoreContest, HerbivoreOutcome, Niche, PredationContest,
    PredationOutcome,
};
pub use tiles::{Catalog, Tile, TileStacks};
