//! Predation command implementation.

use super::output::{JsonPredationResult, format_predation_text};
use super::{CliError, OutputFormat, parse_animals, print_json};
use megafauna::PredationContest;
use megafauna::ecology::check_eligibility;

/// Execute the predation command.
///
/// # Errors
///
/// Returns an error if an animal fails to parse or there are too many prey.
pub(crate) fn execute(
    carnivores: &[String],
    prey: &[String],
    format: OutputFormat,
) -> Result<(), CliError> {
    let carnivores = parse_animals(carnivores)?;
    let prey = parse_animals(prey)?;

    let outcome = PredationContest::new(&carnivores, &prey)?.resolve();

    match format {
        OutputFormat::Text => {
            let reasons: Vec<Vec<_>> = prey
                .iter()
                .map(|victim| {
                    carnivores
                        .iter()
                        .map(|carnivore| check_eligibility(carnivore, victim).err())
                        .collect()
                })
                .collect();
            print!(
                "{}",
                format_predation_text(&carnivores, &prey, &outcome.kills, &reasons)
            );
        }
        OutputFormat::Json => {
            print_json(&JsonPredationResult {
                carnivores: &carnivores,
                prey: &prey,
                kills: outcome.kills,
            })?;
        }
    }

    Ok(())
}
