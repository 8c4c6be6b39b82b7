use std::fmt;

use super::{CaptureRule, Color, Move, MoveList, Position, UnmakeInfo};

/// Why a game ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    /// The no-capture counter reached its limit.
    MoveLimit,
    /// The same position occurred for the third time.
    Repetition,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The given side won: the other side has no legal move.
    Win(Color),
    Draw(DrawReason),
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(color) => write!(f, "{color} wins"),
            GameOutcome::Draw(DrawReason::MoveLimit) => write!(f, "draw by move limit"),
            GameOutcome::Draw(DrawReason::Repetition) => write!(f, "draw by repetition"),
        }
    }
}

/// A position together with the moves that led to it.
///
/// Owns the undo stack, so a move can be taken back exactly, and the hashes
/// of earlier positions for repetition detection.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    capture_rule: CaptureRule,
    history: Vec<(Move, UnmakeInfo)>,
    // hashes[i] is the hash before history[i] was played
    hashes: Vec<u64>,
}

impl Game {
    #[must_use]
    pub fn new(capture_rule: CaptureRule) -> Self {
        Game::from_position(Position::new(), capture_rule)
    }

    #[must_use]
    pub fn from_position(position: Position, capture_rule: CaptureRule) -> Self {
        Game {
            position,
            capture_rule,
            history: Vec::with_capacity(256),
            hashes: Vec::with_capacity(256),
        }
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn capture_rule(&self) -> CaptureRule {
        self.capture_rule
    }

    pub fn set_capture_rule(&mut self, rule: CaptureRule) {
        self.capture_rule = rule;
    }

    /// Moves played so far, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|(mv, _)| *mv)
    }

    /// Number of plies played.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.position.generate_moves(self.capture_rule)
    }

    /// Play `mv`, which must be legal in the current position.
    pub fn apply_move(&mut self, mv: Move) {
        self.hashes.push(self.position.hash);
        let info = self.position.make_move(mv);
        self.history.push((mv, info));
    }

    /// Take back the last move, returning it, or `None` at the start.
    pub fn undo_move(&mut self) -> Option<Move> {
        let (mv, info) = self.history.pop()?;
        self.hashes.pop();
        self.position.unmake_move(mv, info);
        Some(mv)
    }

    /// Whether the current position already occurred since the last
    /// capture with the same side to move.
    #[must_use]
    pub fn is_repetition(&self) -> bool {
        self.repetitions() > 0
    }

    /// How many earlier positions since the last capture equal the current one.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        let hash = self.position.hash;
        let reach = (self.position.reversible_plies as usize).min(self.hashes.len());
        self.hashes[self.hashes.len() - reach..]
            .iter()
            .rev()
            .skip(1)
            .step_by(2)
            .filter(|&&h| h == hash)
            .count()
    }

    /// `None` while the game is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.position.has_legal_move() {
            return Some(GameOutcome::Win(!self.position.side_to_move));
        }
        if self.position.is_draw_by_counter() {
            return Some(GameOutcome::Draw(DrawReason::MoveLimit));
        }
        if self.repetitions() >= 2 {
            return Some(GameOutcome::Draw(DrawReason::Repetition));
        }
        None
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(CaptureRule::default())
    }
}
