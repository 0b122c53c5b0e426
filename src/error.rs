//! Error types for the rules core.

use thiserror::Error;

use crate::ecology::DnaLetter;

/// Errors raised while building or querying rules entities.
///
/// None of these are recovered internally: a malformed spec string means the
/// upstream data is corrupt and must be fixed before resolution can proceed.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A genome spec contained a character outside the DNA alphabet.
    #[error("invalid DNA letter: {0:?}")]
    InvalidDnaLetter(char),

    /// A genome spec held more copies of one letter than a genome can count.
    #[error("too many copies of DNA letter {0}")]
    TooManyCopies(DnaLetter),

    /// A niche spec was neither SIZE, a player dentition, nor a DNA letter.
    #[error("{0:?} is not a valid niche spec")]
    InvalidNicheSpec(String),

    /// A compact animal spec (`DENTITION:SIZE:GENOME[:SILHOUETTE]`) was malformed.
    #[error("invalid animal spec {spec:?}: {reason}")]
    InvalidAnimalSpec {
        /// The offending spec.
        spec: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A latitude lookup used an unknown key.
    #[error("invalid latitude key: {0:?}")]
    InvalidLatitudeKey(String),

    /// A habitat lookup used an unknown key.
    #[error("invalid habitat key: {0:?}")]
    InvalidHabitatKey(String),

    /// A predation contest was given more prey than a biome can hold.
    #[error("a biome holds at most 2 prey, got {0}")]
    TooManyPrey(usize),

    /// A board layout failed validation.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// A tile record failed validation.
    #[error("invalid tile {key}: {reason}")]
    InvalidTile {
        /// Key of the offending tile.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A layout file could not be parsed.
    #[error("layout parse error: {0}")]
    Layout(#[from] serde_json::Error),

    /// A layout file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
