//! Core search implementation.
//!
//! This module implements:
//! - Iterative deepening with a full window
//! - Alpha-beta search with PVS
//! - Verified static cutoffs
//! - Late move reductions (LMR)
//! - Late move pruning (LMP)
//! - Quiescence search over captures
//! - Move ordering (TT move, capture length, killers, history)

mod iterative;
mod pruning;
mod quiescence;

pub(super) use iterative::run_search;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::tt::{value_to_tt, BoundType, TTEntry};

use super::constants::{
    CAPTURE_HOP_SCORE, CAPTURE_SCORE, HISTORY_MAX_SCORE, KILLER1_SCORE, KILLER2_SCORE,
    TIME_CHECK_INTERVAL, TT_MOVE_SCORE,
};
use super::{SearchInfoCallback, SearchState, INF};
use crate::board::{CaptureRule, Game, Move, MoveList, ScoredMoveList, EMPTY_MOVE, MAX_PLY};

/// Principal variation, filled in from the leaves up.
#[derive(Clone, Copy)]
pub(crate) struct PvLine {
    moves: [Move; MAX_PLY],
    len: usize,
}

impl PvLine {
    pub(crate) fn new() -> Self {
        PvLine {
            moves: [EMPTY_MOVE; MAX_PLY],
            len: 0,
        }
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    /// Replace the line with `mv` followed by the child's line.
    fn update(&mut self, mv: Move, child: &PvLine) {
        let tail = child.len.min(MAX_PLY - 1);
        self.moves[0] = mv;
        self.moves[1..=tail].copy_from_slice(&child.moves[..tail]);
        self.len = tail + 1;
    }

    pub(crate) fn moves(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

/// Search context for a single search
pub(super) struct SearchContext<'a> {
    pub game: &'a mut Game,
    pub state: &'a mut SearchState,
    pub stop: &'a AtomicBool,
    pub rule: CaptureRule,
    pub use_tt: bool,
    pub start_time: Instant,
    pub time_limit_ms: u64,
    pub node_limit: u64,
    pub nodes: u64,
    /// Set once any limit is hit; the running iteration is then discarded
    pub stopped: bool,
    /// Depth of the running iteration
    pub root_depth: u32,
    pub info_callback: Option<SearchInfoCallback>,
}

impl SearchContext<'_> {
    fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// Check the stop flag and the node and time limits.
    ///
    /// Limits other than the external flag are ignored until the first
    /// iteration has completed.
    fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        if self.stop.load(Ordering::Relaxed) {
            self.stopped = true;
            return true;
        }
        if self.root_depth <= 1 {
            return false;
        }
        if self.node_limit > 0 && self.nodes >= self.node_limit {
            self.stopped = true;
        } else if self.time_limit_ms > 0
            && self.nodes % TIME_CHECK_INTERVAL == 0
            && self.elapsed_ms() >= self.time_limit_ms
        {
            self.stopped = true;
        }
        self.stopped
    }

    fn order_moves(&self, moves: &MoveList, ply: usize, tt_move: Move) -> ScoredMoveList {
        let killers = &self.state.tables.killer_moves;
        let (killer1, killer2) = (killers.primary(ply), killers.secondary(ply));
        let history = &self.state.tables.history;

        let mut scored = ScoredMoveList::new();
        for &mv in moves {
            let score = if mv == tt_move {
                TT_MOVE_SCORE
            } else if mv.is_capture() {
                CAPTURE_SCORE + CAPTURE_HOP_SCORE * mv.jump_len() as i32
            } else if mv == killer1 {
                KILLER1_SCORE
            } else if mv == killer2 {
                KILLER2_SCORE
            } else {
                history.score(mv).min(HISTORY_MAX_SCORE)
            };
            scored.push(mv, score);
        }
        scored.sort_by_score_desc();
        scored
    }

    fn store_tt(&mut self, entry: TTEntry) {
        if self.use_tt && !self.stopped {
            self.state.tables.tt.store(entry.hash, entry);
        }
    }

    /// Fail-hard negamax. Returns 0 without meaning once the search stops.
    pub(super) fn negamax(
        &mut self,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        ply: usize,
        pv: &mut PvLine,
    ) -> i32 {
        pv.clear();
        if self.should_stop() {
            return 0;
        }
        self.nodes += 1;

        let is_root = ply == 0;
        let is_pv = beta - alpha > 1;
        let position = *self.game.position();

        if !is_root && (position.is_draw_by_counter() || self.game.is_repetition()) {
            return if position.has_legal_move() {
                0
            } else {
                -INF + ply as i32
            };
        }

        if depth == 0 || ply >= MAX_PLY - 1 {
            return self.quiescence(alpha, beta, ply);
        }

        let alpha_orig = alpha;
        let hash = position.hash();
        let mut tt_move = EMPTY_MOVE;
        let mut static_eval = None;

        if self.use_tt {
            if let Some(entry) = self.state.tables.tt.probe(hash) {
                self.state.stats.tt_hits += 1;
                tt_move = entry.best_move;
                static_eval = entry.static_eval;
                if !is_root {
                    if let Some(value) = entry.usable_value(depth, alpha, beta, ply) {
                        // At PV nodes only an exact score inside the window ends the node
                        let exact_inside =
                            entry.bound == BoundType::Exact && value > alpha && value < beta;
                        if !is_pv || exact_inside {
                            return value.clamp(alpha, beta);
                        }
                    }
                }
            }
        }

        let moves = position.generate_moves(self.rule);
        if moves.is_empty() {
            return -INF + ply as i32;
        }

        if !is_pv && !is_root {
            if let Some(value) = self.verified_cutoff(depth, beta, ply, &mut static_eval) {
                return value;
            }
        }

        let ordered = self.order_moves(&moves, ply, tt_move);
        let full_window_moves = if is_root { 2 } else { 1 };
        let mut best_move = EMPTY_MOVE;
        let mut child = PvLine::new();

        for (index, scored) in ordered.iter().enumerate() {
            let mv = scored.mv;
            let quiet = !mv.is_capture();
            if self.skip_late_move(is_pv || is_root, quiet, depth, index + 1) {
                continue;
            }

            self.game.apply_move(mv);
            let score = if index < full_window_moves {
                -self.negamax(depth - 1, -beta, -alpha, ply + 1, &mut child)
            } else {
                let reduction = self.reduction(quiet, depth, index);
                let mut score = -self.negamax(
                    (depth - 1).saturating_sub(reduction),
                    -alpha - 1,
                    -alpha,
                    ply + 1,
                    &mut child,
                );
                if reduction > 0 && score > alpha {
                    score = -self.negamax(depth - 1, -alpha - 1, -alpha, ply + 1, &mut child);
                }
                if score > alpha && score < beta {
                    score = -self.negamax(depth - 1, -beta, -alpha, ply + 1, &mut child);
                }
                score
            };
            self.game.undo_move();

            if self.should_stop() {
                return 0;
            }

            if score > alpha {
                alpha = score;
                best_move = mv;
                pv.update(mv, &child);

                if score >= beta {
                    if quiet {
                        self.state.tables.killer_moves.update(ply, mv);
                        self.state.tables.history.update(mv, depth);
                    }
                    self.store_tt(TTEntry {
                        hash,
                        best_move: mv,
                        value: value_to_tt(beta, ply),
                        static_eval,
                        depth,
                        bound: BoundType::LowerBound,
                    });
                    return beta;
                }
            }
        }

        self.store_tt(TTEntry {
            hash,
            best_move,
            value: value_to_tt(alpha, ply),
            static_eval,
            depth,
            bound: BoundType::classify(alpha, alpha_orig, beta),
        });
        alpha
    }
}

fn format_pv(pv: &[Move]) -> String {
    pv.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
