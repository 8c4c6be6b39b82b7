pub mod board;
pub mod cli;
pub mod tt;
pub mod zobrist;

pub use board::{CaptureRule, Color, Game, Move, PieceKind, Position, Square};
pub use tt::TranspositionTable;
