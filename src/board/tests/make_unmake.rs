//! Make/unmake move correctness.

use super::{find_move, pos};
use crate::board::{CaptureRule, Color, PieceKind, Position, Square};
use crate::zobrist::full_hash;

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

#[test]
fn quiet_move_round_trip() {
    let mut position = Position::new();
    let mv = find_move(&position, "c3-d4");
    let info = position.make_move(mv);

    assert_eq!(position.side_to_move(), Color::Black);
    assert_eq!(position.reversible_plies(), 1);
    assert_eq!(position.piece_at(sq("d4")), Some((Color::White, PieceKind::Man)));
    assert_eq!(position.piece_at(sq("c3")), None);
    assert_eq!(position.hash(), full_hash(&position));
    assert!(info.captured().is_empty());
    assert!(!info.promoted());

    position.unmake_move(mv, info);
    assert_eq!(position, Position::new());
}

#[test]
fn capture_resets_counter() {
    let mut position = pos("W:Wc3:Bd4,h8").with_reversible_plies(40);
    let before = position;
    let mv = find_move(&position, "c3xe5");
    let info = position.make_move(mv);

    assert_eq!(position.reversible_plies(), 0);
    assert_eq!(position.piece_count(Color::Black), 1);
    assert!(info.captured().contains(sq("d4")));
    assert_eq!(position.hash(), full_hash(&position));

    position.unmake_move(mv, info);
    assert_eq!(position, before);
    assert_eq!(position.reversible_plies(), 40);
}

#[test]
fn man_promotes_on_last_rank() {
    let mut position = pos("W:Wa7:Bh2");
    let before = position;
    let mv = find_move(&position, "a7-b8");
    let info = position.make_move(mv);

    assert!(info.promoted());
    assert_eq!(position.piece_at(sq("b8")), Some((Color::White, PieceKind::King)));
    assert_eq!(position.hash(), full_hash(&position));

    position.unmake_move(mv, info);
    assert_eq!(position, before);
    assert_eq!(position.piece_at(sq("a7")), Some((Color::White, PieceKind::Man)));
}

#[test]
fn ring_capture_round_trip() {
    let mut position = pos("W:WKc3:Bd4,d6,b6,b4");
    let before = position;
    for mv in before.generate_moves(CaptureRule::Forced) {
        let info = position.make_move(mv);
        assert_eq!(position.piece_at(sq("c3")), Some((Color::White, PieceKind::King)));
        assert_eq!(position.piece_count(Color::Black), 0);
        assert_eq!(info.captured().popcount(), 4);
        assert_eq!(position.hash(), full_hash(&position));
        assert!(position.is_consistent());

        position.unmake_move(mv, info);
        assert_eq!(position, before);
    }
}

#[test]
fn captured_king_is_restored() {
    let mut position = pos("W:Wc3:BKd4,h8");
    let before = position;
    let mv = find_move(&position, "c3xe5");
    let info = position.make_move(mv);
    assert_eq!(position.kings_of(Color::Black).popcount(), 0);

    position.unmake_move(mv, info);
    assert_eq!(position, before);
    assert_eq!(position.piece_at(sq("d4")), Some((Color::Black, PieceKind::King)));
}

#[test]
fn apply_move_leaves_original() {
    let start = Position::new();
    let mv = find_move(&start, "g3-h4");
    let next = start.apply_move(mv);
    assert_eq!(start, Position::new());
    assert_ne!(next, start);
    assert_eq!(next.hash(), full_hash(&next));
}
