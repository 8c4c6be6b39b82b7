//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::{Direction, Square};

const FROM_MASK: u32 = 0x1F;
const TO_SHIFT: u32 = 5;
const LEN_SHIFT: u32 = 10;
const LEN_MASK: u32 = 0xF;
const PATH_SHIFT: u32 = 14;

/// Most hops a single capture can encode: the first landing plus nine
/// direction codes.
pub const MAX_JUMPS: usize = 10;

/// Compact 32-bit move representation.
///
/// Encoding:
/// - bits 0-4:   origin square
/// - bits 5-9:   landing square of the first step or hop
/// - bits 10-13: number of hops (0 for a quiet slide)
/// - bits 14-31: nine 2-bit direction codes for the hops after the first
///
/// The all-zero value is the null move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move(0)
    }

    /// A single diagonal slide.
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move(from.index() as u32 | (to.index() as u32) << TO_SHIFT)
    }

    /// The first hop of a capture. The chain length is filled in with
    /// [`Move::with_jump_len`] once the path is complete.
    #[inline]
    #[must_use]
    pub const fn jump(from: Square, first_landing: Square) -> Self {
        Move(from.index() as u32 | (first_landing.index() as u32) << TO_SHIFT | 1 << LEN_SHIFT)
    }

    /// Set direction code `i` (the hop after hop `i`), clearing every later code.
    #[inline]
    #[must_use]
    pub const fn with_jump_dir(self, i: usize, dir: Direction) -> Self {
        let shift = PATH_SHIFT + 2 * i as u32;
        let cleared = self.0 & !(u32::MAX << shift);
        Move(cleared | dir.code() << shift)
    }

    #[inline]
    #[must_use]
    pub const fn with_jump_len(self, len: usize) -> Self {
        Move((self.0 & !(LEN_MASK << LEN_SHIFT)) | ((len as u32) & LEN_MASK) << LEN_SHIFT)
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & FROM_MASK) as u8)
    }

    /// Landing square of the first step (or first hop for a capture).
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> TO_SHIFT) & FROM_MASK) as u8)
    }

    /// Number of pieces captured, 0 for a quiet move.
    #[inline]
    #[must_use]
    pub const fn jump_len(self) -> usize {
        ((self.0 >> LEN_SHIFT) & LEN_MASK) as usize
    }

    #[inline]
    #[must_use]
    pub const fn jump_dir(self, i: usize) -> Direction {
        Direction::from_code(self.0 >> (PATH_SHIFT + 2 * i as u32))
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.jump_len() > 0
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Final square of the moving piece.
    #[must_use]
    pub fn destination(self) -> Square {
        self.landings().last().unwrap_or_else(|| self.to())
    }

    /// Every square the piece lands on, in order. A quiet move yields its
    /// single target.
    pub fn landings(self) -> impl Iterator<Item = Square> {
        let hops = self.jump_len().max(1);
        let mut current = self.to();
        (0..hops).map(move |i| {
            if i > 0 {
                current = current.offset_jump(self.jump_dir(i - 1));
            }
            current
        })
    }

    /// Squares of the pieces removed by this capture, in hop order.
    pub fn captured_squares(self) -> impl Iterator<Item = Square> {
        let mut at = self.from();
        self.landings()
            .take(self.jump_len())
            .map(move |land| {
                let over = midpoint(at, land);
                at = land;
                over
            })
    }

    /// Equality against a move reconstructed from an origin/destination pair.
    #[inline]
    #[must_use]
    pub fn matches(self, from: Square, destination: Square) -> bool {
        !self.is_null() && self.from() == from && self.destination() == destination
    }

}

/// Square between two squares one jump apart.
#[inline]
pub(crate) fn midpoint(a: Square, b: Square) -> Square {
    let (a, b) = (a.index() as i32, b.index() as i32);
    let adjust = if (a / 4) % 2 == 0 { -1 } else { 1 };
    Square::from_index_unchecked(((a + b + adjust) / 2) as u8)
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move(null)");
        }
        write!(f, "Move({}", self.from())?;
        if self.is_capture() {
            for land in self.landings() {
                write!(f, "x{land}")?;
            }
        } else {
            write!(f, "-{}", self.to())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capture() {
            write!(f, "{}x{}", self.from(), self.destination())
        } else {
            write!(f, "{}-{}", self.from(), self.to())
        }
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const MAX_PLY: usize = 64;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    /// Append a move. Positions reachable in play never come close to the
    /// capacity; anything past it is dropped rather than overflowing.
    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "move list overflow");
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// A move with its transient ordering score.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    #[must_use]
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: EMPTY_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        if self.len < MAX_MOVES {
            self.moves[self.len] = ScoredMove { mv, score };
            self.len += 1;
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    /// Sort moves by score in descending order. The sort is stable, so
    /// equal scores keep generation order.
    pub fn sort_by_score_desc(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.score.cmp(&a.score));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }
}

impl Default for ScoredMoveList {
    fn default() -> Self {
        ScoredMoveList::new()
    }
}
