//! CLI command implementations for Megafauna.

pub(crate) mod board;
pub(crate) mod herbivore;
pub(crate) mod lowest;
pub(crate) mod predation;
pub(crate) mod tiles;

mod output;

use clap::ValueEnum;
use megafauna::{Board, BoardLayout, RulesError};
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::path::Path;

/// Output format shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<RulesError> for CliError {
    fn from(e: RulesError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Build the board from a layout file, or the printed board.
fn load_board(layout: Option<&Path>) -> Result<Board, CliError> {
    match layout {
        Some(path) => {
            let layout = BoardLayout::load(path).map_err(|e| {
                CliError::new(format!("Failed to load layout {}: {e}", path.display()))
            })?;
            Ok(Board::from_layout(&layout)?)
        }
        None => Ok(Board::new()),
    }
}

/// Print a value as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Parse one animal argument per entry.
fn parse_animals(specs: &[String]) -> Result<Vec<megafauna::Animal>, CliError> {
    specs
        .iter()
        .map(|spec| spec.parse().map_err(CliError::from))
        .collect()
}
