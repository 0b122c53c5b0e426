//! Tile listing command implementation.

use super::output::format_tiles;
use super::{CliError, OutputFormat, print_json};
use megafauna::tiles::{Catalog, Era, TileStacks};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Execute the tiles command.
///
/// # Errors
///
/// Returns an error if the catalog fails to load.
pub(crate) fn execute(seed: Option<u64>, format: OutputFormat) -> Result<(), CliError> {
    let catalog = Catalog::mesozoic()?;

    let Some(seed) = seed else {
        match format {
            OutputFormat::Text => print!("{}", format_tiles(catalog.iter())),
            OutputFormat::Json => print_json(&catalog.iter().collect::<Vec<_>>())?,
        }
        return Ok(());
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let stacks = TileStacks::shuffled(&catalog, &mut rng);

    match format {
        OutputFormat::Text => {
            println!("Stacks for seed {seed} (top first)");
            for era in [Era::Mesozoic, Era::Cenozoic] {
                println!();
                println!("{era:?} ({} tiles)", stacks.remaining(era));
                print!("{}", format_tiles(stacks.iter(era)));
            }
        }
        OutputFormat::Json => print_json(&stacks)?,
    }

    Ok(())
}
