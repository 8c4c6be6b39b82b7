//! Bitboard type and operations.
//!
//! Bit `i` corresponds to playable square `i` (see [`Square`]). Even ranks
//! occupy the low nibble of each byte and odd ranks the high nibble, so a
//! diagonal step is a shift by 3, 4 or 5 depending on rank parity.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::square::{Direction, Square};

/// A 32-bit set of playable squares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u32);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// Ranks 1, 3, 5, 7 (files a, c, e, g).
    pub const EVEN_RANKS: Bitboard = Bitboard(0x0F0F_0F0F);
    /// Ranks 2, 4, 6, 8 (files b, d, f, h).
    pub const ODD_RANKS: Bitboard = Bitboard(0xF0F0_F0F0);
    /// Playable squares on the a-file.
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101);
    /// Playable squares on the h-file.
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080);

    /// Targets of a +3 step (odd ranks, files b-f).
    pub const SHIFT3_TARGETS: Bitboard = Bitboard(0x7070_7070);
    /// Targets of a +5 step (even ranks, files c-g).
    pub const SHIFT5_TARGETS: Bitboard = Bitboard(0x0E0E_0E0E);

    /// Create a bitboard with a single square set
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.index())
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.index()) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, sq: Square) -> Self {
        Bitboard(self.0 | (1 << sq.index()))
    }

    #[inline]
    #[must_use]
    pub const fn without(self, sq: Square) -> Self {
        Bitboard(self.0 & !(1 << sq.index()))
    }

    /// Rotate the board by 180 degrees, mapping square `i` to `31 - i`.
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Bitboard(self.0.reverse_bits())
    }

    /// Move every square one diagonal step in `dir`, dropping squares that
    /// would leave the board. Files a and h are masked so no step wraps.
    #[inline]
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let b = self.0;
        let even = Self::EVEN_RANKS.0;
        let odd = Self::ODD_RANKS.0;
        let not_a = !Self::FILE_A.0;
        let not_h = !Self::FILE_H.0;
        Bitboard(match dir {
            Direction::NorthWest => ((b & even & not_a) << 3) | ((b & odd) << 4),
            Direction::NorthEast => ((b & even) << 4) | ((b & odd & not_h) << 5),
            Direction::SouthWest => ((b & even & not_a) >> 5) | ((b & odd) >> 4),
            Direction::SouthEast => ((b & even) >> 4) | ((b & odd & not_h) >> 3),
        })
    }

    /// Squares whose neighbour in `dir` is in `self`.
    #[inline]
    #[must_use]
    pub const fn step_back(self, dir: Direction) -> Self {
        self.step(dir.opposite())
    }

    #[inline]
    #[must_use]
    pub fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

pub(crate) fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as u8;
    bb.0 &= bb.0 - 1;
    Square::from_index_unchecked(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
