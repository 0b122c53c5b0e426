//! Integration tests for the board, tiles, and contests together.
//!
//! These tests play whole stacks onto the board and check that placement
//! keeps the board consistent.
//!
//! Run with: cargo test --release board_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use megafauna::board::{Board, BoardLayout, Direction, LatitudeKey, Placement, check_invariants};
use megafauna::tiles::{Catalog, Era, TileStacks};
use megafauna::{Animal, RulesError};

#[test]
fn test_full_stack_keeps_invariants() {
    let catalog = Catalog::mesozoic().unwrap();

    for seed in 0..20u64 {
        let mut stacks = TileStacks::shuffled(&catalog, &mut SmallRng::seed_from_u64(seed));
        let mut board = Board::new();
        let mut placed = 0;

        while let Some(tile) = stacks.draw(Era::Mesozoic) {
            let land_biome = tile.is_biome() && tile.header.terrain.is_land();
            match board.place_tile(tile).unwrap() {
                Placement::Placed { .. } => {
                    assert!(land_biome);
                    placed += 1;
                }
                Placement::Targeted { .. } => assert!(!land_biome),
            }
            let violations = check_invariants(&board);
            assert!(violations.is_empty(), "seed {seed}: {violations:?}");
        }

        let occupied = board.habitats().iter().filter(|h| h.biome().is_some()).count();
        assert!(occupied > 0 && occupied <= placed, "seed {seed}");
    }
}

#[test]
fn test_placement_is_deterministic_for_seed() {
    let catalog = Catalog::mesozoic().unwrap();

    let play = |seed: u64| -> Vec<String> {
        let mut stacks = TileStacks::shuffled(&catalog, &mut SmallRng::seed_from_u64(seed));
        let mut board = Board::new();
        while let Some(tile) = stacks.draw(Era::Mesozoic) {
            board.place_tile(tile).unwrap();
        }
        board
            .habitats()
            .iter()
            .map(|h| h.biome().map_or_else(String::new, |b| b.header.key.clone()))
            .collect()
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn test_lowest_climax_is_minimum_after_placements() {
    let catalog = Catalog::mesozoic().unwrap();
    let mut board = Board::new();
    for key in ["MT10", "MT18", "MT26", "MA16", "MJ15", "MO67"] {
        board.place_tile(catalog.get(key).cloned().unwrap()).unwrap();
    }

    for key in ["A", "J", "H", "T", "O"] {
        let lowest = board.find_lowest_climax(key).unwrap();
        let latitude = board.latitude(key).unwrap();
        let minimum = latitude
            .habitats
            .iter()
            .map(|&id| board.habitat(id).effective_climax_number())
            .min()
            .unwrap();
        assert_eq!(lowest.effective_climax_number(), minimum, "latitude {key}");
        assert!(latitude.habitats.contains(&lowest.id()));
    }
}

#[test]
fn test_orogeny_placement_is_visible_from_its_row() {
    let catalog = Catalog::mesozoic().unwrap();
    let mut board = Board::new();

    let placement = board
        .place_tile(catalog.get("MO67").cloned().unwrap())
        .unwrap();
    let j1 = board.habitat_by_key("J1").unwrap();
    assert_eq!(placement.habitat(), j1.id());

    // J1 now counts as 67, so the jet stream's lowest moves on.
    assert_eq!(j1.effective_climax_number(), 67);
    assert_eq!(board.find_lowest_climax("J").unwrap().key().to_string(), "J5");
}

#[test]
fn test_every_habitat_reachable_from_a0() {
    let board = Board::new();
    let start = board.habitat_by_key("A0").unwrap().id();

    let mut seen = vec![false; board.habitats().len()];
    let mut queue = vec![start];
    seen[start.index()] = true;
    while let Some(id) = queue.pop() {
        for (_, next) in board.habitat(id).neighbors() {
            if !seen[next.index()] {
                seen[next.index()] = true;
                queue.push(next);
            }
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn test_neighbor_lookup_through_board() {
    let board = Board::new();
    let t6 = board.habitat_by_key("T6").unwrap().id();
    let north = board.neighbor(t6, Direction::North).unwrap();
    assert_eq!(north.key().to_string(), "T2");
    assert!(board.neighbor(t6, Direction::South).is_none());
}

#[test]
fn test_layout_file_round_trip() {
    let mut layout = BoardLayout::default();
    layout.rows.retain(|row| row.latitude != LatitudeKey::Arctic);
    layout.orogeny.retain(|key| !key.starts_with('A'));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&layout).unwrap().as_bytes())
        .unwrap();

    let loaded = BoardLayout::load(file.path()).unwrap();
    assert_eq!(loaded, layout);

    let board = Board::from_layout(&loaded).unwrap();
    assert_eq!(board.rows().len(), 3);
    assert_eq!(board.latitude("O").unwrap().habitats.len(), 5);
    assert!(matches!(
        board.find_lowest_climax("A"),
        Err(RulesError::InvalidLatitudeKey(_))
    ));
    assert!(check_invariants(&board).is_empty());
}

#[test]
fn test_layout_file_errors() {
    assert!(matches!(
        BoardLayout::load("/nonexistent/layout.json"),
        Err(RulesError::Io(_))
    ));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"width": 6, "rows": [], "overhang": [], "orogeny": []}"#)
        .unwrap();
    assert!(matches!(
        BoardLayout::load(file.path()),
        Err(RulesError::InvalidLayout(_))
    ));
}

#[test]
fn test_immigrant_enters_contest_in_target_biome() {
    let catalog = Catalog::mesozoic().unwrap();
    let mut board = Board::new();

    // Termite Mounds need II.
    board
        .place_tile(catalog.get("MT42").cloned().unwrap())
        .unwrap();
    let immigrant_tile = catalog.get("M7").cloned().unwrap();
    let target = board.place_tile(immigrant_tile.clone()).unwrap();
    assert!(matches!(target, Placement::Targeted { .. }));

    let occupied = board.habitat_by_key("T6").unwrap();
    let biome = occupied.biome().unwrap();
    let crocodiles = immigrant_tile
        .immigrant()
        .unwrap()
        .herbivore(immigrant_tile.key())
        .unwrap();
    let player: Animal = "3:1:BI".parse().unwrap();
    let candidates = [player, crocodiles];
    let outcome = biome.herbivore_contest(&candidates).resolve();
    // Only the crocodiles carry II.
    assert_eq!(outcome.winner, Some(1));
}
