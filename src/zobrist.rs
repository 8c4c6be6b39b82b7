//! Zobrist hashing for checkers positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for the
//! transposition table and repetition detection.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, PieceKind, Position, Square, NUM_SQUARES};

const ZOBRIST_SEED: u64 = 9999;

pub(crate) struct ZobristKeys {
    // piece_keys[color][kind][square]
    pub(crate) piece_keys: [[[u64; NUM_SQUARES]; 2]; 2],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed so hashes are reproducible across runs
        let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);
        let mut piece_keys = [[[0; NUM_SQUARES]; 2]; 2];

        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        ZobristKeys {
            piece_keys,
            black_to_move_key,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, kind: PieceKind, sq: Square) -> u64 {
        self.piece_keys[color.index()][kind.index()][sq.index()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash of `position` recomputed from scratch, ignoring its cached hash.
#[must_use]
pub fn full_hash(position: &Position) -> u64 {
    let mut hash = 0;
    for color in Color::BOTH {
        for sq in position.pieces(color).iter() {
            let kind = PieceKind::from_is_king(position.kings().contains(sq));
            hash ^= ZOBRIST.piece(color, kind, sq);
        }
    }
    if position.side_to_move() == Color::Black {
        hash ^= ZOBRIST.black_to_move_key;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_distinct() {
        let mut seen = HashSet::new();
        for color in &ZOBRIST.piece_keys {
            for kind in color {
                for key in kind {
                    assert!(seen.insert(*key));
                }
            }
        }
        assert!(seen.insert(ZOBRIST.black_to_move_key));
    }

    #[test]
    fn keys_are_deterministic() {
        let again = ZobristKeys::new();
        assert_eq!(again.piece_keys, ZOBRIST.piece_keys);
        assert_eq!(again.black_to_move_key, ZOBRIST.black_to_move_key);
    }

    #[test]
    fn side_key_separates_sides() {
        let white = Position::new();
        let black = white.with_side_to_move(Color::Black);
        assert_eq!(full_hash(&white) ^ full_hash(&black), ZOBRIST.black_to_move_key);
    }
}
