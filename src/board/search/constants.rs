//! Search constants.
//!
//! Scores, move ordering priorities and fixed limits used by the
//! alpha-beta search.

use crate::board::MAX_PLY;

// ============================================================================
// SCORES
// ============================================================================

/// Larger than any reachable score; a side with no moves at ply `p` scores
/// `-INF + p`.
pub const INF: i32 = 50_000;

/// Scores with absolute value above this are forced wins or losses
pub const MATE_THRESHOLD: i32 = INF - MAX_PLY as i32;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier. Ordered: TT > captures > killers > history

/// Hash move (from transposition table) - highest priority
pub const TT_MOVE_SCORE: i32 = 1 << 20;

/// Any capture; longer chains first
pub const CAPTURE_SCORE: i32 = 10_000;
pub const CAPTURE_HOP_SCORE: i32 = 100;

/// First killer move (quiet that caused beta cutoff at same ply)
pub const KILLER1_SCORE: i32 = 9_000;

/// Second killer move (replaced killer)
pub const KILLER2_SCORE: i32 = 8_000;

/// History scores are capped below the killers
pub const HISTORY_MAX_SCORE: i32 = 7_000;

// ============================================================================
// LIMITS
// ============================================================================

/// Nodes between clock reads
pub const TIME_CHECK_INTERVAL: u64 = 1024;
