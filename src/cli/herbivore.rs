//! Herbivore contest command implementation.

use super::output::{JsonCandidate, JsonHerbivoreResult, format_herbivore_text};
use super::{CliError, OutputFormat, parse_animals, print_json};
use megafauna::{Genome, HerbivoreContest, Niche};

/// Execute the herbivore command.
///
/// # Errors
///
/// Returns an error if the requirement, niche, or any animal fails to parse.
pub(crate) fn execute(
    requirement: &str,
    niche: &str,
    animals: &[String],
    format: OutputFormat,
) -> Result<(), CliError> {
    let requirements: Genome = requirement.parse()?;
    let niche: Niche = niche.parse()?;
    let animals = parse_animals(animals)?;

    let outcome = HerbivoreContest::new(&animals, &requirements, niche).resolve();

    match format {
        OutputFormat::Text => {
            println!("Biome needs {requirements}, niche {niche}");
            println!();
            print!("{}", format_herbivore_text(&animals, &outcome));
        }
        OutputFormat::Json => {
            let result = JsonHerbivoreResult {
                requirements: requirements.to_string(),
                niche,
                candidates: animals
                    .iter()
                    .zip(&outcome.scores)
                    .map(|(animal, &score)| JsonCandidate { animal, score })
                    .collect(),
                winner: outcome.winner,
            };
            print_json(&result)?;
        }
    }

    Ok(())
}
