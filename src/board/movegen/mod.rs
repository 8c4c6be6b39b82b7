//! Legal move generation.
//!
//! Quiet slides come from whole-board shifts of the empty set; captures are
//! found the same way and then walked square by square to build chains.

mod jumps;
mod quiet;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Move, MoveList, Position};

/// How captures constrain the move list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CaptureRule {
    /// English draughts: a capture must be taken when available and a
    /// chain must be followed until no further hop exists.
    #[default]
    Forced,
    /// Captures may be declined, and a chain may stop after any hop.
    Optional,
}

impl fmt::Display for CaptureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureRule::Forced => write!(f, "forced"),
            CaptureRule::Optional => write!(f, "optional"),
        }
    }
}

impl FromStr for CaptureRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forced" | "true" | "on" => Ok(CaptureRule::Forced),
            "optional" | "false" | "off" => Ok(CaptureRule::Optional),
            _ => Err(format!("unknown capture rule '{s}'")),
        }
    }
}

impl Position {
    /// All legal moves for the side to move. Captures come first.
    ///
    /// Under [`CaptureRule::Forced`] only captures are returned when any
    /// exist; otherwise quiet moves are added after them.
    #[must_use]
    pub fn generate_moves(&self, rule: CaptureRule) -> MoveList {
        let mut moves = MoveList::new();
        self.push_captures(rule, &mut moves);
        if rule == CaptureRule::Optional || moves.is_empty() {
            self.push_quiet_moves(&mut moves);
        }
        moves
    }

    /// Capture moves only, as the quiescence search needs them.
    #[must_use]
    pub fn generate_captures(&self, rule: CaptureRule) -> MoveList {
        let mut moves = MoveList::new();
        self.push_captures(rule, &mut moves);
        moves
    }

    /// Whether the side to move has any move at all, without building a list.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        !self.jumpers().is_empty() || self.has_quiet_move()
    }

    /// Whether `mv` is one of the legal moves here.
    #[must_use]
    pub fn is_legal_move(&self, mv: Move, rule: CaptureRule) -> bool {
        !mv.is_null() && self.generate_moves(rule).contains(mv)
    }
}

/// Free-function form of [`Position::generate_moves`].
#[must_use]
pub fn generate_legal_moves(position: &Position, rule: CaptureRule) -> MoveList {
    position.generate_moves(rule)
}
