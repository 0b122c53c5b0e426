//! Board invariants - sanity checks that detect bugs.
//!
//! A board built from a validated layout, and mutated only through
//! placement, should never trigger these. They are bug detectors, not
//! gameplay rules.

use std::collections::BTreeSet;

use crate::board::{Board, Direction, HabitatId, LatitudeKey};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut push = |message: String| violations.push(InvariantViolation { message });

    for (index, habitat) in board.habitats.iter().enumerate() {
        if habitat.id != HabitatId(index) {
            push(format!(
                "Habitat {} stored at {index} claims id {}",
                habitat.key,
                habitat.id.0
            ));
        }

        if board.by_key.get(&habitat.key) != Some(&habitat.id) {
            push(format!("Habitat {} is missing from the key index", habitat.key));
        }

        if habitat.climax_number == 0 {
            push(format!("Habitat {} has climax number 0", habitat.key));
        }

        // Adjacency must be reciprocal.
        for direction in Direction::ALL {
            let Some(other) = habitat.neighbor(direction) else {
                continue;
            };
            let back = board
                .habitats
                .get(other.0)
                .and_then(|h| h.neighbor(direction.opposite()));
            if back != Some(habitat.id) {
                push(format!(
                    "Habitat {} links {direction:?} to #{} but the link is not returned",
                    habitat.key, other.0
                ));
            }
        }
    }

    if board.by_key.len() != board.habitats.len() {
        push(format!(
            "Key index has {} entries for {} habitats",
            board.by_key.len(),
            board.habitats.len()
        ));
    }

    // Every habitat sits in exactly the row its key names.
    let mut rostered = 0;
    for key in &board.rows {
        let Some(latitude) = board.latitudes.get(key) else {
            push(format!("Row {key} has no latitude entry"));
            continue;
        };
        for &id in &latitude.habitats {
            rostered += 1;
            match board.habitats.get(id.0) {
                Some(h) if h.key.latitude == *key => {}
                Some(h) => push(format!("Habitat {} listed under latitude {key}", h.key)),
                None => push(format!("Latitude {key} lists unknown habitat #{}", id.0)),
            }
        }
    }
    if rostered != board.habitats.len() {
        push(format!(
            "Rows list {rostered} habitats, board has {}",
            board.habitats.len()
        ));
    }

    // The orogeny latitude holds exactly the flagged habitats.
    let flagged: BTreeSet<HabitatId> = board
        .habitats
        .iter()
        .filter(|h| h.orogeny)
        .map(|h| h.id)
        .collect();
    let listed: BTreeSet<HabitatId> = board
        .latitudes
        .get(&LatitudeKey::Orogeny)
        .map(|lat| lat.habitats.iter().copied().collect())
        .unwrap_or_default();
    if flagged != listed {
        push(format!(
            "Orogeny latitude lists {} habitats but {} are flagged",
            listed.len(),
            flagged.len()
        ));
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(board: &Board) {
    let violations = check_invariants(board);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_board: &Board) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;
    use crate::tiles::Catalog;

    #[test]
    fn test_fresh_board_is_valid() {
        let board = Board::new();
        assert!(check_invariants(&board).is_empty());
        assert_invariants(&board);
    }

    #[test]
    fn test_valid_after_placements() {
        let catalog = Catalog::mesozoic().unwrap();
        let mut board = Board::new();
        for tile in catalog.iter() {
            board.place_tile(tile.clone()).unwrap();
        }
        assert!(check_invariants(&board).is_empty());
    }

    #[test]
    fn test_custom_layout_is_valid() {
        let mut layout = BoardLayout::default();
        layout.rows.pop();
        layout.rows[2].climax_numbers = "24356199".to_string();
        layout.overhang = vec![0, 5];
        layout.orogeny = vec!["H7".to_string()];
        let board = Board::from_layout(&layout).unwrap();
        assert!(check_invariants(&board).is_empty());
    }

    #[test]
    fn test_detects_one_way_link() {
        let mut board = Board::new();
        board.habitats[0].neighbors[Direction::West.index()] = Some(HabitatId(5));
        let violations = check_invariants(&board);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not returned"));
    }

    #[test]
    fn test_detects_unlisted_orogeny() {
        let mut board = Board::new();
        board.habitats[0].orogeny = true;
        let violations = check_invariants(&board);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().starts_with("Invariant violation: Orogeny"));
    }

    #[test]
    #[should_panic(expected = "Board invariant violations")]
    #[cfg(debug_assertions)]
    fn test_assert_panics() {
        let mut board = Board::new();
        board.habitats[3].climax_number = 0;
        assert_invariants(&board);
    }
}
