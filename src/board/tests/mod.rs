//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move counts from known positions
//! - `movegen.rs` - Capture rules, chains and king moves
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `draw.rs` - Draw detection (move limit, repetition) and game outcome
//! - `eval.rs` - Evaluator terms and colour symmetry
//! - `search.rs` - Search results, limits and scoring
//! - `search_tables.rs` - Killer and history tables
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod movegen;
mod perft;
mod search_tables;

use crate::board::{Move, Position};

pub(super) fn pos(notation: &str) -> Position {
    notation.parse().expect("valid position notation")
}

pub(super) fn find_move(position: &Position, text: &str) -> Move {
    position
        .parse_move(text, crate::board::CaptureRule::Forced)
        .expect("move should be legal")
}
