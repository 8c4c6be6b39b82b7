//! Error types for board parsing.
//!
//! The engine core is infallible; these errors only arise when text coming
//! from a host (square names, move strings, position notation) is parsed.

use std::fmt;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a two-character `<file><rank>` name
    InvalidNotation { notation: String },
    /// A light square, which is never used in checkers
    NotPlayable { notation: String },
    /// Square index outside 0-31
    IndexOutOfBounds { index: u8 },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::NotPlayable { notation } => {
                write!(f, "Square '{notation}' is not a playable dark square")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-31)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Fewer than two squares in the move string
    InvalidFormat { notation: String },
    /// One of the squares could not be parsed
    InvalidSquare { notation: String, error: SquareError },
    /// Well-formed, but no legal move in the position matches
    NoMatch { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(f, "Move '{notation}' must name at least two squares")
            }
            MoveParseError::InvalidSquare { notation, error } => {
                write!(f, "Invalid square in move '{notation}': {error}")
            }
            MoveParseError::NoMatch { notation } => {
                write!(f, "No legal move matches '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::InvalidSquare { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Error type for position notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Notation needs `<side>:W<squares>:B<squares>`
    MissingField { field: &'static str },
    /// Side to move must be `W` or `B`
    InvalidSide { found: String },
    /// A piece list entry is not a square
    InvalidSquare { entry: String, error: SquareError },
    /// A square is listed for both sides or twice
    Overlap { square: String },
    /// More pieces than a side can ever have
    TooManyPieces { count: u32 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingField { field } => {
                write!(f, "Position notation is missing the {field} field")
            }
            PositionError::InvalidSide { found } => {
                write!(f, "Invalid side to move '{found}', expected 'W' or 'B'")
            }
            PositionError::InvalidSquare { entry, error } => {
                write!(f, "Invalid piece entry '{entry}': {error}")
            }
            PositionError::Overlap { square } => {
                write!(f, "Square {square} is occupied more than once")
            }
            PositionError::TooManyPieces { count } => {
                write!(f, "Too many pieces ({count}) for one side")
            }
        }
    }
}

impl std::error::Error for PositionError {}
