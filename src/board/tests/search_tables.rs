//! Tests for search tables: killer moves and history.

use crate::board::{HistoryTable, KillerTable, Move, SearchState, Square, EMPTY_MOVE};

fn make_move(from: &str, to: &str) -> Move {
    let from: Square = from.parse().expect("valid square");
    let to: Square = to.parse().expect("valid square");
    Move::quiet(from, to)
}

// ============================================================================
// Killer Move Tests
// ============================================================================

#[test]
fn test_killer_empty_initially() {
    let table = KillerTable::new();
    for ply in 0..10 {
        assert_eq!(table.primary(ply), EMPTY_MOVE);
        assert_eq!(table.secondary(ply), EMPTY_MOVE);
    }
}

#[test]
fn test_killer_update_shifts_to_secondary() {
    let mut table = KillerTable::new();
    let mv1 = make_move("c3", "d4");
    let mv2 = make_move("g3", "h4");

    table.update(0, mv1);
    assert_eq!(table.primary(0), mv1);
    assert_eq!(table.secondary(0), EMPTY_MOVE);

    table.update(0, mv2);
    assert_eq!(table.primary(0), mv2);
    assert_eq!(table.secondary(0), mv1);
}

#[test]
fn test_killer_same_move_not_duplicated() {
    let mut table = KillerTable::new();
    let mv1 = make_move("c3", "d4");
    let mv2 = make_move("g3", "h4");

    table.update(3, mv1);
    table.update(3, mv2);
    table.update(3, mv2);
    assert_eq!(table.primary(3), mv2);
    assert_eq!(table.secondary(3), mv1);
    // Other plies untouched
    assert_eq!(table.primary(2), EMPTY_MOVE);
}

#[test]
fn test_killer_ignores_out_of_range() {
    let mut table = KillerTable::new();
    table.update(10_000, make_move("c3", "d4"));
    table.update(1, EMPTY_MOVE);
    assert_eq!(table.primary(10_000), EMPTY_MOVE);
    assert_eq!(table.primary(1), EMPTY_MOVE);
}

// ============================================================================
// History Tests
// ============================================================================

#[test]
fn test_history_accumulates_depth_squared() {
    let mut table = HistoryTable::new();
    let mv = make_move("c3", "d4");
    table.update(mv, 3);
    table.update(mv, 2);
    assert_eq!(table.score(mv), 13);
    assert_eq!(table.score(make_move("c3", "b4")), 0);
}

#[test]
fn test_history_decay_and_reset() {
    let mut table = HistoryTable::new();
    let mv = make_move("e3", "f4");
    table.update(mv, 4);
    table.decay();
    assert_eq!(table.score(mv), 4);
    table.reset();
    assert_eq!(table.score(mv), 0);
}

#[test]
fn test_new_search_clears_killers_keeps_history() {
    let mut state = SearchState::new(1);
    let mv = make_move("a3", "b4");
    state.tables.killer_moves.update(0, mv);
    state.tables.history.update(mv, 8);
    state.stats.nodes = 99;

    state.new_search();
    assert_eq!(state.tables.killer_moves.primary(0), EMPTY_MOVE);
    assert_eq!(state.tables.history.score(mv), 16);
    assert_eq!(state.stats.nodes, 0);
}

#[test]
fn test_reset_tables_resizes() {
    let mut state = SearchState::new(1);
    let small = state.tables.tt.capacity();
    state.reset_tables(2);
    assert!(state.tables.tt.capacity() > small);
}
