#![no_main]

use libfuzzer_sys::fuzz_target;
use megafauna::board::{Board, BoardLayout, check_invariants};

fuzz_target!(|data: &str| {
    // Any layout that validates must build a consistent board.
    let Ok(layout) = BoardLayout::from_json(data) else {
        return;
    };
    let Ok(board) = Board::from_layout(&layout) else {
        panic!("validated layout failed to build");
    };
    let violations = check_invariants(&board);
    assert!(violations.is_empty(), "{violations:?}");

    for key in board.rows() {
        let _ = board.find_lowest_climax(&key.to_string());
    }
});
