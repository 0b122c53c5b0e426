//! Output formatting utilities for CLI.

use megafauna::board::{Board, Direction, Habitat, HabitatId};
use megafauna::ecology::{Animal, HerbivoreOutcome, HerbivoreScore, Ineligibility, Niche};
use megafauna::tiles::{Tile, TileKind};
use serde::Serialize;

/// Width of one habitat cell in the board view.
const CELL: usize = 4;

/// Width of the row label in the board view.
const LABEL: usize = 18;

/// JSON-serializable herbivore contest.
#[derive(Debug, Serialize)]
pub(super) struct JsonHerbivoreResult<'a> {
    /// Biome requirements.
    pub(super) requirements: String,
    /// Biome niche.
    pub(super) niche: Niche,
    /// Candidates with their scores, in input order.
    pub(super) candidates: Vec<JsonCandidate<'a>>,
    /// Index of the winner (null if no herbivore is suitable).
    pub(super) winner: Option<usize>,
}

/// JSON-serializable herbivore candidate.
#[derive(Debug, Serialize)]
pub(super) struct JsonCandidate<'a> {
    /// The animal.
    pub(super) animal: &'a Animal,
    /// Its score.
    pub(super) score: HerbivoreScore,
}

/// JSON-serializable predation contest.
#[derive(Debug, Serialize)]
pub(super) struct JsonPredationResult<'a> {
    /// Carnivores, in input order.
    pub(super) carnivores: &'a [Animal],
    /// Prey, in input order.
    pub(super) prey: &'a [Animal],
    /// For each prey, the carnivore that eats it.
    pub(super) kills: Vec<Option<usize>>,
}

fn cell(habitat: &Habitat) -> String {
    let mark = if habitat.is_orogeny() { '^' } else { ' ' };
    format!("{:>width$}{mark}", habitat.effective_climax_number(), width = CELL - 1)
}

/// A habitat hangs below the board when its northern neighbor is in the
/// same latitude.
fn overhang_column(board: &Board, id: HabitatId) -> Option<usize> {
    let habitat = board.habitat(id);
    board
        .neighbor(id, Direction::North)
        .filter(|north| north.key().latitude == habitat.key().latitude)
        .map(|north| usize::from(north.key().index))
}

/// Format the board as a grid of climax numbers.
pub(super) fn format_board(board: &Board) -> String {
    let mut output = String::new();
    let mut hanging: Vec<(usize, String)> = Vec::new();

    output.push_str(&format!("{:LABEL$}", ""));
    let width = board
        .rows()
        .first()
        .and_then(|key| board.latitude(&key.to_string()).ok())
        .map_or(0, |lat| lat.habitats.len());
    for col in 0..width {
        output.push_str(&format!("{col:>width$} ", width = CELL - 1));
    }
    output.push('\n');

    for key in board.rows() {
        let Ok(latitude) = board.latitude(&key.to_string()) else {
            continue;
        };
        output.push_str(&format!("{:<LABEL$}", format!("{key} {}", latitude.name)));
        for &id in &latitude.habitats {
            match overhang_column(board, id) {
                Some(col) => hanging.push((col, cell(board.habitat(id)))),
                None => output.push_str(&cell(board.habitat(id))),
            }
        }
        output.push('\n');
    }

    if !hanging.is_empty() {
        let mut line = " ".repeat(LABEL);
        for (col, text) in hanging {
            let start = LABEL + col * CELL;
            if line.len() < start {
                line.push_str(&" ".repeat(start - line.len()));
            }
            line.push_str(&text);
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str("\n^ orogeny habitat\n");
    output
}

/// Format a herbivore contest as human-readable text.
pub(super) fn format_herbivore_text(animals: &[Animal], outcome: &HerbivoreOutcome) -> String {
    let mut output = String::new();

    for (idx, (animal, score)) in animals.iter().zip(&outcome.scores).enumerate() {
        let suitable = if score.suitable { "suitable" } else { "unsuitable" };
        output.push_str(&format!(
            "  #{idx} {:<16} {suitable:<10} niche {:>3}  dentition {}  ({} points)",
            animal.to_string(),
            score.niche_bonus,
            score.dentition,
            score.points()
        ));
        if outcome.winner == Some(idx) {
            output.push_str("  <- winner");
        }
        output.push('\n');
    }

    match outcome.winner {
        Some(idx) => output.push_str(&format!("\nWinner: #{idx} ({})\n", animals[idx])),
        None => output.push_str("\nNo herbivore can live here\n"),
    }
    output
}

/// Format a predation contest as human-readable text.
///
/// `reasons[p][c]` is why carnivore `c` may not target prey `p`, if it may not.
pub(super) fn format_predation_text(
    carnivores: &[Animal],
    prey: &[Animal],
    kills: &[Option<usize>],
    reasons: &[Vec<Option<Ineligibility>>],
) -> String {
    let mut output = String::new();

    for (p, (victim, kill)) in prey.iter().zip(kills).enumerate() {
        output.push_str(&format!("Prey #{p} {victim}\n"));
        for (c, carnivore) in carnivores.iter().enumerate() {
            let status = match reasons[p][c] {
                Some(Ineligibility::Cannibalism) => "cannibalism",
                Some(Ineligibility::SizeMismatch) => "size mismatch",
                Some(Ineligibility::CannotCatch) => "cannot catch",
                None if *kill == Some(c) => "eats it",
                None => "outcompeted",
            };
            output.push_str(&format!("  carnivore #{c} {:<16} {status}\n", carnivore.to_string()));
        }
        if kill.is_none() {
            output.push_str("  survives\n");
        }
    }
    output
}

/// Format tiles as one line each.
pub(super) fn format_tiles<'a>(tiles: impl Iterator<Item = &'a Tile>) -> String {
    let mut output = String::new();
    for tile in tiles {
        let header = &tile.header;
        let detail = match &tile.kind {
            TileKind::Biome(biome) => format!(
                "biome      climax {:>2}  needs {:<4} niche {}",
                biome.climax_number,
                biome.requirements.to_string(),
                biome.niche
            ),
            TileKind::Immigrant(immigrant) => match immigrant.size {
                Some(size) => format!("herbivore  size {size}    dna {}", immigrant.dna),
                None => format!("predator           dna {}", immigrant.dna),
            },
        };
        output.push_str(&format!(
            "{:<5} {} {:<4} {detail:<42} {}\n",
            header.key,
            header.latitude,
            format!("{:?}", header.terrain).to_lowercase(),
            header.title
        ));
    }
    output
}
