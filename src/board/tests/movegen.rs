//! Move generation: capture rules, chains, men and kings.

use super::pos;
use crate::board::{generate_legal_moves, CaptureRule, Move, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

fn names(moves: impl IntoIterator<Item = Move>) -> Vec<String> {
    let mut out: Vec<String> = moves.into_iter().map(|mv| format!("{mv:?}")).collect();
    out.sort();
    out
}

#[test]
fn forced_capture_is_mandatory() {
    let position = pos("W:Wc3:Bd4");
    let forced = position.generate_moves(CaptureRule::Forced);
    assert_eq!(forced.len(), 1);
    assert!(forced[0].matches(sq("c3"), sq("e5")));

    let optional = position.generate_moves(CaptureRule::Optional);
    assert_eq!(names(optional), ["Move(c3-b4)", "Move(c3xe5)"]);
    // Captures are listed first
    assert!(position.generate_moves(CaptureRule::Optional)[0].is_capture());
}

#[test]
fn men_slide_forward_kings_both_ways() {
    assert_eq!(
        names(pos("W:Wd4:Bh8").generate_moves(CaptureRule::Forced)),
        ["Move(d4-c5)", "Move(d4-e5)"]
    );
    assert_eq!(
        pos("W:WKd4:Bh8").generate_moves(CaptureRule::Forced).len(),
        4
    );
    // Black men move south
    assert_eq!(
        names(pos("B:Wa1:Bd6").generate_moves(CaptureRule::Forced)),
        ["Move(d6-c5)", "Move(d6-e5)"]
    );
}

#[test]
fn men_do_not_capture_backward() {
    let man = pos("W:Wd4:Bc3").generate_moves(CaptureRule::Forced);
    assert!(man.iter().all(|mv| !mv.is_capture()));
    assert_eq!(man.len(), 2);

    let king = pos("W:WKd4:Bc3").generate_moves(CaptureRule::Forced);
    assert_eq!(king.len(), 1);
    assert!(king[0].matches(sq("d4"), sq("b2")));
}

#[test]
fn king_chain_runs_backward() {
    let king = pos("W:WKa7:Bb6,d4").generate_moves(CaptureRule::Forced);
    assert_eq!(king.len(), 1);
    assert_eq!(king[0].jump_len(), 2);
    assert_eq!(king[0].destination(), sq("e3"));

    let man = pos("W:Wa7:Bb6,d4").generate_moves(CaptureRule::Forced);
    assert_eq!(names(man), ["Move(a7-b8)"]);
}

#[test]
fn only_maximal_chains_when_forced() {
    let position = pos("W:Wc1:Bd2,d4,b4,b2");
    let forced = position.generate_moves(CaptureRule::Forced);
    assert_eq!(forced.len(), 2);
    assert!(forced.iter().all(|mv| mv.jump_len() == 2));
    assert!(forced.iter().all(|mv| mv.destination() == sq("c5")));

    // Every hop is a stopping point when captures are optional
    let optional = position.generate_moves(CaptureRule::Optional);
    assert_eq!(
        names(optional),
        [
            "Move(c1xa3)",
            "Move(c1xa3xc5)",
            "Move(c1xe3)",
            "Move(c1xe3xc5)"
        ]
    );
}

#[test]
fn king_ring_returns_to_origin() {
    let position = pos("W:WKc3:Bd4,d6,b6,b4");
    let moves = position.generate_moves(CaptureRule::Forced);
    assert_eq!(moves.len(), 2);
    for &mv in &moves {
        assert_eq!(mv.jump_len(), 4);
        assert_eq!(mv.destination(), sq("c3"));
        let mut captured: Vec<String> = mv.captured_squares().map(|s| s.to_string()).collect();
        captured.sort();
        assert_eq!(captured, ["b4", "b6", "d4", "d6"]);
    }
}

#[test]
fn blocked_side_has_no_moves() {
    let position = pos("W:Wa1:Bb2,c3");
    assert!(position.generate_moves(CaptureRule::Forced).is_empty());
    assert!(position.generate_moves(CaptureRule::Optional).is_empty());
    assert!(!position.has_legal_move());
    assert!(pos("B:Wa1:Bb2,c3").has_legal_move());
}

#[test]
fn legality_depends_on_rule() {
    let position = pos("W:Wc3:Bd4");
    let decline = Move::quiet(sq("c3"), sq("b4"));
    assert!(position.is_legal_move(decline, CaptureRule::Optional));
    assert!(!position.is_legal_move(decline, CaptureRule::Forced));
    assert!(!position.is_legal_move(Move::null(), CaptureRule::Optional));
}

#[test]
fn free_function_matches_method() {
    let position = pos("W:Wc1:Bd2,d4,b4,b2");
    for rule in [CaptureRule::Forced, CaptureRule::Optional] {
        assert_eq!(
            generate_legal_moves(&position, rule).as_slice(),
            position.generate_moves(rule).as_slice()
        );
    }
}

#[test]
fn captures_only_list() {
    let start = crate::board::Position::new();
    assert!(start.generate_captures(CaptureRule::Forced).is_empty());
    assert_eq!(start.generate_moves(CaptureRule::Forced).len(), 7);
    assert_eq!(
        pos("W:Wc3:Bd4").generate_captures(CaptureRule::Optional).len(),
        1
    );
}
