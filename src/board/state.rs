use super::error::PositionError;
use super::{Bitboard, Color, PieceKind, Square};
use crate::zobrist;

/// Plies without a capture after which the game is drawn.
pub const DRAW_PLY_LIMIT: u32 = 99;

/// White men on ranks 1-3.
pub(crate) const WHITE_START: Bitboard = Bitboard(0x0000_0FFF);
/// Black men on ranks 6-8.
pub(crate) const BLACK_START: Bitboard = Bitboard(0xFFF0_0000);

/// Most pieces a side can have on the board.
pub(crate) const MAX_PIECES_PER_SIDE: u32 = 12;

/// A checkers position.
///
/// Occupancy is kept per side; `kings` marks which occupied squares hold
/// kings, so a piece's colour is always taken from the occupancy sets. The
/// cached `hash` always equals a from-scratch Zobrist recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) kings: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) reversible_plies: u32,
    pub(crate) hash: u64,
}

impl Position {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position {
            occupied: [WHITE_START, BLACK_START],
            kings: Bitboard::EMPTY,
            side_to_move: Color::White,
            reversible_plies: 0,
            hash: 0,
        };
        position.hash = zobrist::full_hash(&position);
        position
    }

    /// An empty board with `side_to_move` to play.
    #[must_use]
    pub fn empty(side_to_move: Color) -> Self {
        let mut position = Position {
            occupied: [Bitboard::EMPTY; 2],
            kings: Bitboard::EMPTY,
            side_to_move,
            reversible_plies: 0,
            hash: 0,
        };
        position.hash = zobrist::full_hash(&position);
        position
    }

    /// Build a position from raw occupancy, validating the board invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::Overlap`] when a square is held by both
    /// sides, or a king flag sits on an empty square, and
    /// [`PositionError::TooManyPieces`] when a side has more than twelve
    /// pieces.
    pub fn from_parts(
        white: Bitboard,
        black: Bitboard,
        kings: Bitboard,
        side_to_move: Color,
    ) -> Result<Self, PositionError> {
        let overlap = (white & black) | (kings & !(white | black));
        if let Some(sq) = overlap.first() {
            return Err(PositionError::Overlap {
                square: sq.to_string(),
            });
        }
        for side in [white, black] {
            if side.popcount() > MAX_PIECES_PER_SIDE {
                return Err(PositionError::TooManyPieces {
                    count: side.popcount(),
                });
            }
        }

        let mut position = Position {
            occupied: [white, black],
            kings,
            side_to_move,
            reversible_plies: 0,
            hash: 0,
        };
        position.hash = zobrist::full_hash(&position);
        Ok(position)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Plies since the last capture.
    #[inline]
    #[must_use]
    pub fn reversible_plies(&self) -> u32 {
        self.reversible_plies
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// All pieces of `color`.
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn men(&self, color: Color) -> Bitboard {
        self.occupied[color.index()] & !self.kings
    }

    #[inline]
    #[must_use]
    pub fn kings_of(&self, color: Color) -> Bitboard {
        self.occupied[color.index()] & self.kings
    }

    /// Every king on the board, both colours.
    #[inline]
    #[must_use]
    pub fn kings(&self) -> Bitboard {
        self.kings
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied[0] | self.occupied[1]
    }

    #[inline]
    #[must_use]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceKind)> {
        let color = Color::BOTH
            .into_iter()
            .find(|&c| self.occupied[c.index()].contains(sq))?;
        Some((color, PieceKind::from_is_king(self.kings.contains(sq))))
    }

    #[inline]
    #[must_use]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.occupied[color.index()].popcount()
    }

    /// Whether the no-capture counter has reached the draw limit.
    #[inline]
    #[must_use]
    pub fn is_draw_by_counter(&self) -> bool {
        self.reversible_plies >= DRAW_PLY_LIMIT
    }

    /// The same board with a different side to move.
    #[must_use]
    pub fn with_side_to_move(mut self, color: Color) -> Self {
        if self.side_to_move != color {
            self.side_to_move = color;
            self.hash ^= zobrist::ZOBRIST.black_to_move_key;
        }
        self
    }

    /// The same board with the no-capture counter set to `plies`.
    #[must_use]
    pub fn with_reversible_plies(mut self, plies: u32) -> Self {
        self.reversible_plies = plies;
        self
    }

    /// The colour-mirrored position: the board is rotated by 180 degrees,
    /// the colours of all pieces are swapped and the other side moves.
    /// Every game-theoretic property is preserved with the roles exchanged.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut position = Position {
            occupied: [self.occupied[1].rotate(), self.occupied[0].rotate()],
            kings: self.kings.rotate(),
            side_to_move: !self.side_to_move,
            reversible_plies: self.reversible_plies,
            hash: 0,
        };
        position.hash = zobrist::full_hash(&position);
        position
    }

    /// Check the board invariants and the cached hash.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        (self.occupied[0] & self.occupied[1]).is_empty()
            && (self.kings & !self.occupied()).is_empty()
            && self.hash == zobrist::full_hash(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
