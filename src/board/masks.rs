//! Pre-computed bitboard masks for evaluation.
//!
//! Every mask is written from White's side of the board. Black is
//! evaluated on the rotated board, so one set of masks serves both sides.

use super::types::{Bitboard, NUM_SQUARES};

const fn rank_of(idx: usize) -> usize {
    idx / 4
}

const fn file_of(idx: usize) -> usize {
    (idx % 4) * 2 + (idx / 4) % 2
}

/// d4, f4, c5, e5.
pub const CENTER: Bitboard = Bitboard(0x0006_6000);

/// Playable squares on files a-d.
pub const WEST_WING: Bitboard = {
    let mut mask = 0u32;
    let mut idx = 0;
    while idx < NUM_SQUARES {
        if file_of(idx) < 4 {
            mask |= 1 << idx;
        }
        idx += 1;
    }
    Bitboard(mask)
};

/// Playable squares on files e-h.
pub const EAST_WING: Bitboard = Bitboard(!WEST_WING.0);

/// Squares from which an opposing piece could still stop a man on the
/// given square: everything ahead of it inside the diagonal cone.
/// `PASSED_ZONE`[sq] empty of enemies means the man has a free run.
pub const PASSED_ZONE: [Bitboard; NUM_SQUARES] = {
    let mut masks = [Bitboard(0); NUM_SQUARES];
    let mut sq = 0;
    while sq < NUM_SQUARES {
        let rank = rank_of(sq);
        let file = file_of(sq);
        let mut other = 0;
        while other < NUM_SQUARES {
            let r = rank_of(other);
            let f = file_of(other);
            if r > rank && f.abs_diff(file) <= r - rank {
                masks[sq].0 |= 1 << other;
            }
            other += 1;
        }
        sq += 1;
    }
    masks
};

/// Trapped-king pattern in the a1 corner: enemy king on a1, own men on b2 and c3.
pub const TRAP_A1_KING: Bitboard = Bitboard(1 << 0);
pub const TRAP_A1_GUARDS: Bitboard = Bitboard((1 << 4) | (1 << 9));

/// Trapped-king pattern on the h-file: enemy king on h2, own men on g1, g3 and f4.
pub const TRAP_H2_KING: Bitboard = Bitboard(1 << 7);
pub const TRAP_H2_GUARDS: Bitboard = Bitboard((1 << 3) | (1 << 11) | (1 << 14));
