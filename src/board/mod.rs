//! English draughts board representation and game logic.
//!
//! The 32 playable squares are held in 32-bit bitboards. Move generation
//! covers quiet slides and multi-jump captures under either capture rule.
//!
//! # Example
//! ```
//! use draughts_engine::board::{CaptureRule, Position};
//!
//! let position = Position::new();
//! let moves = position.generate_moves(CaptureRule::Forced);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod eval;
mod game;
mod make_unmake;
mod masks;
mod movegen;
mod notation;
mod perft;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{MoveParseError, PositionError, SquareError};
pub use eval::EvalTerms;
pub use game::{DrawReason, Game, GameOutcome};
pub use make_unmake::UnmakeInfo;
pub use movegen::{generate_legal_moves, CaptureRule};
pub use notation::START_POSITION;
pub use state::{Position, DRAW_PLY_LIMIT};
pub use types::{
    Bitboard, BitboardIter, Color, Direction, Move, MoveList, MoveListIntoIter, PieceKind,
    ScoredMove, Square, MAX_JUMPS, NUM_SQUARES,
};

// Public API - search functions and configuration
pub use search::{
    search, search_position, SearchConfig, SearchInfoCallback, SearchIterationInfo, SearchResult,
    SearchState, INF, MATE_THRESHOLD,
};

// Re-export search internals for users who need fine-grained control
pub use search::{HistoryTable, KillerTable, SearchParams, SearchStats, SearchTables};

pub(crate) use types::{ScoredMoveList, EMPTY_MOVE, MAX_PLY};
