//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Color` and `PieceKind` - sides and man/king
//! - `Square` and `Direction` - the 32 playable squares and diagonals
//! - `Bitboard` - 32-bit square sets
//! - `Move` and `MoveList` - packed moves

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub(crate) use moves::{ScoredMoveList, EMPTY_MOVE, MAX_PLY};
pub use moves::{Move, MoveList, MoveListIntoIter, ScoredMove, MAX_JUMPS};
pub use piece::{Color, PieceKind};
pub use square::{Direction, Square, NUM_SQUARES};
