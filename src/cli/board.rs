//! Board command implementation.

use super::output::format_board;
use super::{CliError, OutputFormat, load_board, print_json};
use std::path::Path;

/// Execute the board command.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded.
pub(crate) fn execute(layout: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let board = load_board(layout)?;

    match format {
        OutputFormat::Text => print!("{}", format_board(&board)),
        OutputFormat::Json => print_json(&board)?,
    }

    Ok(())
}
