//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening with a full window, keeping the last completed depth
//! - Negamax alpha-beta with principal variation search
//! - Late move reductions and late move pruning for quiet moves
//! - Verified static cutoffs at non-PV nodes
//! - Quiescence search over captures with stand-pat
//! - Move ordering (TT move, captures, killers, history)
//! - Transposition table for move ordering and cutoffs

mod constants;
mod negamax;
mod params;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::tt::{TranspositionTable, DEFAULT_TT_MB};

use super::{CaptureRule, Game, Move, Position, EMPTY_MOVE, MAX_PLY, NUM_SQUARES};
pub use constants::{INF, MATE_THRESHOLD};
pub use params::SearchParams;

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the side to move has no move
    pub best_move: Option<Move>,
    /// Principal variation of the last completed depth
    pub pv: Vec<Move>,
    /// Score from the side to move's point of view
    pub score: i32,
    pub nodes: u64,
    /// Last fully searched depth
    pub depth: u32,
}

impl SearchResult {
    /// Moves to a forced result, positive when the side to move wins.
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        mate_in(self.score)
    }
}

pub(crate) fn mate_in(score: i32) -> Option<i32> {
    if score.abs() <= MATE_THRESHOLD {
        None
    } else if score > 0 {
        Some((INF - score + 1) / 2)
    } else {
        Some(-(INF + score + 1) / 2)
    }
}

/// Statistics tracked during search
#[derive(Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub total_nodes: u64,
    pub tt_hits: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
        self.tt_hits = 0;
    }
}

pub struct KillerTable {
    slots: [[Move; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[EMPTY_MOVE; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn primary(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(EMPTY_MOVE, |row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, ply: usize) -> Move {
        self.slots.get(ply).map_or(EMPTY_MOVE, |row| row[1])
    }

    pub fn update(&mut self, ply: usize, mv: Move) {
        if ply >= MAX_PLY || mv.is_null() {
            return;
        }
        if self.slots[ply][0] != mv {
            self.slots[ply][1] = self.slots[ply][0];
            self.slots[ply][0] = mv;
        }
    }

    pub fn reset(&mut self) {
        self.slots = [[EMPTY_MOVE; 2]; MAX_PLY];
    }
}

/// Cutoff counts indexed by origin and final destination.
pub struct HistoryTable {
    entries: [[i32; NUM_SQUARES]; NUM_SQUARES],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: [[0; NUM_SQUARES]; NUM_SQUARES],
        }
    }

    #[must_use]
    pub fn score(&self, mv: Move) -> i32 {
        self.entries[mv.from().index()][mv.destination().index()]
    }

    /// Update history score for a move that caused a beta cutoff
    pub fn update(&mut self, mv: Move, depth: u32) {
        let entry = &mut self.entries[mv.from().index()][mv.destination().index()];
        let bonus = (depth * depth) as i32;
        *entry = entry.saturating_add(bonus);
    }

    pub fn decay(&mut self) {
        for row in &mut self.entries {
            for entry in row {
                *entry >>= 2;
            }
        }
    }

    pub fn reset(&mut self) {
        self.entries = [[0; NUM_SQUARES]; NUM_SQUARES];
    }
}

/// Tables used during search (TT, killers, history)
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killer_moves: KillerTable,
    pub history: HistoryTable,
}

/// Search state persisted across searches
pub struct SearchState {
    pub stats: SearchStats,
    pub tables: SearchTables,
    pub params: SearchParams,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        SearchState {
            stats: SearchStats::default(),
            tables: SearchTables {
                tt: TranspositionTable::new(tt_mb),
                killer_moves: KillerTable::new(),
                history: HistoryTable::new(),
            },
            params: SearchParams::default(),
        }
    }

    pub fn new_search(&mut self) {
        self.stats.reset_search();
        // Old history still helps ordering; stale killers do not.
        self.tables.history.decay();
        self.tables.killer_moves.reset();
    }

    pub fn params_mut(&mut self) -> &mut SearchParams {
        &mut self.params
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    /// Replace the transposition table with an empty one of `tt_mb` MB.
    pub fn reset_tables(&mut self, tt_mb: usize) {
        log::debug!("resizing transposition table to {tt_mb} MB");
        self.tables.tt = TranspositionTable::new(tt_mb);
        self.tables.history.reset();
        self.tables.killer_moves.reset();
        self.stats.reset_search();
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tables.tt.hashfull_per_mille()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(DEFAULT_TT_MB)
    }
}

// ============================================================================
// UNIFIED SEARCH API
// ============================================================================

/// Configuration for a search operation.
#[derive(Clone)]
pub struct SearchConfig {
    /// Maximum depth to search (None = up to `MAX_PLY - 1`)
    pub max_depth: Option<u32>,
    /// Time limit in milliseconds (0 = unlimited)
    pub time_limit_ms: u64,
    /// Node limit (0 = unlimited)
    pub node_limit: u64,
    /// Overrides the game's capture rule when set
    pub capture_rule: Option<CaptureRule>,
    /// Probe and store the transposition table
    pub use_tt: bool,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: None,
            time_limit_ms: 0,
            node_limit: 0,
            capture_rule: None,
            use_tt: true,
            info_callback: None,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchConfig {
            max_depth: Some(max_depth),
            ..Default::default()
        }
    }

    /// Create a time-limited search config
    #[must_use]
    pub fn time(time_limit_ms: u64) -> Self {
        SearchConfig {
            time_limit_ms,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_time(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    /// Set node limit
    #[must_use]
    pub fn with_nodes(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    #[must_use]
    pub fn with_capture_rule(mut self, rule: CaptureRule) -> Self {
        self.capture_rule = Some(rule);
        self
    }

    #[must_use]
    pub fn with_tt(mut self, use_tt: bool) -> Self {
        self.use_tt = use_tt;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u64,
    pub score: i32,
    pub mate_in: Option<i32>,
    pub pv: String,
    pub tt_hits: u64,
    pub hashfull: u32,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Search the game's current position.
///
/// Repetitions are detected against the moves already played in `game`.
/// The game is left in the position it was given in.
///
/// # Example
/// ```
/// use std::sync::atomic::AtomicBool;
/// use draughts_engine::board::{search, Game, SearchConfig, SearchState};
///
/// let mut game = Game::default();
/// let mut state = SearchState::new(1);
/// let result = search(&mut game, &mut state, SearchConfig::depth(4), &AtomicBool::new(false));
/// assert!(result.best_move.is_some());
/// ```
#[allow(clippy::needless_pass_by_value)] // Config is intentionally consumed
pub fn search(
    game: &mut Game,
    state: &mut SearchState,
    config: SearchConfig,
    stop: &AtomicBool,
) -> SearchResult {
    negamax::run_search(game, state, &config, stop)
}

/// Search `position` for `time_ms` milliseconds with a fresh table and the
/// forced capture rule.
///
/// A budget of 0 searches depth 1 only; it never means unlimited time.
#[must_use]
pub fn search_position(position: &Position, time_ms: u64) -> SearchResult {
    let mut game = Game::from_position(*position, CaptureRule::Forced);
    let mut state = SearchState::default();
    let config = if time_ms == 0 {
        SearchConfig::depth(1)
    } else {
        SearchConfig::time(time_ms)
    };
    search(&mut game, &mut state, config, &AtomicBool::new(false))
}
