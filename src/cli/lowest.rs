//! Lowest-climax query implementation.

use super::{CliError, load_board};
use std::path::Path;

/// Execute the lowest command.
///
/// # Errors
///
/// Returns an error if the layout cannot be loaded or the latitude is unknown.
pub(crate) fn execute(latitude: &str, layout: Option<&Path>) -> Result<(), CliError> {
    let board = load_board(layout)?;
    let name = board.latitude(latitude)?.name;
    let habitat = board.find_lowest_climax(latitude)?;

    println!(
        "Lowest climax in {name}: {} (climax {})",
        habitat.key(),
        habitat.effective_climax_number()
    );

    Ok(())
}
