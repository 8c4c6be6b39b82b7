//! Pruning and reduction decisions for the main search.

use super::{PvLine, SearchContext};
use crate::board::search::MATE_THRESHOLD;

impl SearchContext<'_> {
    /// Cut a non-PV node whose static eval clears beta by a margin, once a
    /// shallow null-window search of the same position confirms it.
    ///
    /// `static_eval` is filled in when it had to be computed, so the caller
    /// can store it.
    pub(super) fn verified_cutoff(
        &mut self,
        depth: u32,
        beta: i32,
        ply: usize,
        static_eval: &mut Option<i32>,
    ) -> Option<i32> {
        let params = self.state.params;
        if depth < params.verify_min_depth
            || ply < params.verify_min_ply
            || beta <= params.verify_beta_floor
            || beta.abs() > MATE_THRESHOLD
        {
            return None;
        }

        let game = &*self.game;
        let eval = *static_eval.get_or_insert_with(|| game.position().evaluate());
        let target = beta + params.verify_margin;
        if eval < target {
            return None;
        }

        // Same side to move: the result is already from our point of view
        let verify_depth = depth.saturating_sub(4).max(1);
        let mut scratch = PvLine::new();
        let value = self.negamax(verify_depth, target - 1, target, ply, &mut scratch);
        if self.stopped || value < target {
            None
        } else {
            Some(beta)
        }
    }

    /// Late move pruning: quiet moves past the limit for this depth are not
    /// searched at non-PV nodes.
    pub(super) fn skip_late_move(
        &self,
        is_pv: bool,
        quiet: bool,
        depth: u32,
        move_number: usize,
    ) -> bool {
        let params = &self.state.params;
        !is_pv && quiet && depth >= params.lmp_min_depth && move_number > params.lmp_limit(depth)
    }

    /// Plies to take off a late quiet move's null-window probe.
    pub(super) fn reduction(&self, quiet: bool, depth: u32, index: usize) -> u32 {
        let params = &self.state.params;
        if quiet && depth >= params.lmr_min_depth && index >= params.lmr_threshold(depth) {
            params.lmr_reduction
        } else {
            0
        }
    }
}
