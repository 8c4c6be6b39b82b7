/// Tunable pruning and time thresholds.
#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    /// Reduce late quiet moves from this depth on.
    pub lmr_min_depth: u32,
    /// Moves searched at full depth before reductions start, at depth 0.
    /// The threshold grows by one every four plies of depth.
    pub lmr_min_move: usize,
    pub lmr_reduction: u32,
    /// Skip late quiet moves at non-PV nodes from this depth on.
    pub lmp_min_depth: u32,
    /// Static eval must exceed beta by this much to try a verified cutoff.
    pub verify_margin: i32,
    pub verify_min_depth: u32,
    pub verify_min_ply: usize,
    /// No verified cutoffs when beta is this low (the side is lost anyway).
    pub verify_beta_floor: i32,
    /// Stop deepening once this share of the time budget is used.
    pub soft_time_percent: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            lmr_min_depth: 2,
            lmr_min_move: 2,
            lmr_reduction: 1,
            lmp_min_depth: 3,
            verify_margin: 30,
            verify_min_depth: 3,
            verify_min_ply: 3,
            verify_beta_floor: -1500,
            soft_time_percent: 50,
        }
    }
}

impl SearchParams {
    /// Index (0-based) of the first move that may be reduced at `depth`.
    #[must_use]
    pub fn lmr_threshold(&self, depth: u32) -> usize {
        self.lmr_min_move + depth as usize / 4
    }

    /// Quiet moves beyond this count are skipped at `depth`.
    #[must_use]
    pub fn lmp_limit(&self, depth: u32) -> usize {
        let d = depth as usize;
        (3 + d * d) / 2
    }
}
