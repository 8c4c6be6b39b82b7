//! Perft (performance test) for move generation correctness.

use crate::board::{CaptureRule, Position};
use std::time::Instant;

/// Leaf counts from the initial position under forced captures.
const START_COUNTS: &[(usize, u64)] = &[
    (1, 7),
    (2, 49),
    (3, 302),
    (4, 1469),
    (5, 7361),
    (6, 36768),
];

#[test]
fn perft_initial_position() {
    let mut position = Position::new();
    for &(depth, expected) in START_COUNTS {
        let start = Instant::now();
        let nodes = position.perft(depth, CaptureRule::Forced);
        println!("depth {depth}: {nodes} nodes in {:?}", start.elapsed());
        assert_eq!(nodes, expected, "perft({depth}) mismatch");
    }
    assert_eq!(position, Position::new());
}

#[test]
#[ignore = "slow in debug builds"]
fn perft_initial_position_depth_7() {
    let mut position = Position::new();
    assert_eq!(position.perft(7, CaptureRule::Forced), 179_740);
}

#[test]
fn divide_sums_to_perft() {
    let mut position = Position::new();
    let split = position.divide(4, CaptureRule::Forced);
    assert_eq!(split.len(), 7);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 1469);
    assert!(position.divide(0, CaptureRule::Forced).is_empty());
}

#[test]
fn optional_captures_only_add_moves() {
    let mut position = Position::new();
    // No capture is possible within the first two plies
    assert_eq!(position.perft(2, CaptureRule::Optional), 49);
    // From ply three on, declining a capture is an extra choice
    assert!(position.perft(3, CaptureRule::Optional) > 302);
    assert!(position.perft(4, CaptureRule::Optional) > 1469);
}

#[test]
fn perft_zero_is_one() {
    let mut position = Position::new();
    assert_eq!(position.perft(0, CaptureRule::Forced), 1);
}
