//! Square and direction types.
//!
//! Only the 32 dark squares of the 8x8 board are playable. They are indexed
//! row by row from White's side, four per rank:
//!
//! ```text
//! rank 8:   b8  d8  f8  h8                  -> indices 28..=31
//! ...
//! rank 2:   b2  d2  f2  h2                  -> indices 4..=7
//! rank 1: a1  c1  e1  g1                    -> indices 0..=3
//! ```

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of playable squares.
pub const NUM_SQUARES: usize = 32;

/// A diagonal direction, seen from White's side of the board.
///
/// The discriminants are the 2-bit codes stored in a capture path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    pub const NORTH: [Direction; 2] = [Direction::NorthWest, Direction::NorthEast];
    pub const SOUTH: [Direction; 2] = [Direction::SouthWest, Direction::SouthEast];

    /// Index offset of a two-square jump in this direction.
    pub(crate) const JUMP_OFFSET: [i8; 4] = [7, 9, -9, -7];

    #[inline]
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code & 3 {
            0 => Direction::NorthWest,
            1 => Direction::NorthEast,
            2 => Direction::SouthWest,
            _ => Direction::SouthEast,
        }
    }

    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    #[must_use]
    pub const fn is_north(self) -> bool {
        (self as u8) & 2 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_east(self) -> bool {
        (self as u8) & 1 == 1
    }

    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn jump_offset(self) -> i8 {
        Self::JUMP_OFFSET[self as usize]
    }
}

/// A playable square, 0 (a1) through 31 (h8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

static NEIGHBORS: Lazy<[[Option<Square>; 4]; NUM_SQUARES]> = Lazy::new(|| {
    let mut table = [[None; 4]; NUM_SQUARES];
    for (idx, row) in table.iter_mut().enumerate() {
        let sq = Square(idx as u8);
        let rank = sq.rank() as isize;
        let file = sq.file() as isize;
        for dir in Direction::ALL {
            let dr = if dir.is_north() { 1 } else { -1 };
            let df = if dir.is_east() { 1 } else { -1 };
            row[dir as usize] = Square::from_coords_signed(rank + dr, file + df);
        }
    }
    table
});

impl Square {
    pub const A1: Square = Square(0);
    pub const H8: Square = Square(31);

    /// Create a square from its index (0-31).
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_SQUARES {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Square(index)
    }

    /// Create a square from rank and file (both 0-7). Light squares are rejected.
    #[must_use]
    pub const fn from_coords(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 && (rank + file) % 2 == 0 {
            Some(Square((rank * 4 + file / 2) as u8))
        } else {
            None
        }
    }

    fn from_coords_signed(rank: isize, file: isize) -> Option<Self> {
        if rank < 0 || file < 0 {
            return None;
        }
        Self::from_coords(rank as usize, file as usize)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank 0-7, where 0 is White's back rank.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 / 4) as usize
    }

    /// File 0-7, where 0 is the a-file.
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        ((self.0 % 4) * 2 + (self.0 / 4) % 2) as usize
    }

    /// The square rotated by 180 degrees (a1 <-> h8).
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        Square(31 - self.0)
    }

    /// Adjacent square in `dir`, if it is on the board.
    #[inline]
    #[must_use]
    pub fn neighbor(self, dir: Direction) -> Option<Square> {
        NEIGHBORS[self.index()][dir as usize]
    }

    /// Whether a two-square jump from here in `dir` stays on the board.
    #[inline]
    #[must_use]
    pub const fn can_jump(self, dir: Direction) -> bool {
        let idx = self.0;
        if idx >= 24 && dir.is_north() {
            return false;
        }
        if idx <= 7 && !dir.is_north() {
            return false;
        }
        if idx % 4 == 0 && !dir.is_east() {
            return false;
        }
        if idx % 4 == 3 && dir.is_east() {
            return false;
        }
        true
    }

    /// The jumped-over square and the landing square of a jump in `dir`.
    #[inline]
    #[must_use]
    pub fn jump(self, dir: Direction) -> Option<(Square, Square)> {
        if !self.can_jump(dir) {
            return None;
        }
        let over = self.neighbor(dir)?;
        let land = over.neighbor(dir)?;
        Some((over, land))
    }

    /// Landing square of a jump, computed by index offset. The caller
    /// guarantees the jump is on the board.
    #[inline]
    pub(crate) const fn offset_jump(self, dir: Direction) -> Square {
        Square((self.0 as i8 + dir.jump_offset()) as u8)
    }

    /// Chebyshev distance in king steps.
    #[must_use]
    pub fn distance(self, other: Square) -> usize {
        let dr = self.rank().abs_diff(other.rank());
        let df = self.file().abs_diff(other.file());
        dr.max(df)
    }

    /// Iterate over all 32 playable squares.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file() as u8 + b'a') as char,
            self.rank() + 1
        )
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => (c - b'1') as usize,
            _ => {
                return Err(SquareError::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };
        Square::from_coords(rank, file).ok_or_else(|| SquareError::NotPlayable {
            notation: s.to_string(),
        })
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::IndexOutOfBounds { index })
    }
}
