//! Transposition table for caching search results.
//!
//! A fixed number of slots indexed by `hash % capacity`. Every store
//! overwrites its slot; a probe is only answered when the stored hash
//! matches in full.

use std::mem;

use crate::board::{Move, MATE_THRESHOLD};

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    /// Bound for a node that returned `value`, searched with the window
    /// it was entered with.
    #[must_use]
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Self {
        if value <= alpha {
            BoundType::UpperBound
        } else if value >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

/// Convert a mate score from the search's root-relative frame to the
/// node-relative frame the table stores.
#[must_use]
pub fn value_to_tt(value: i32, ply: usize) -> i32 {
    if value > MATE_THRESHOLD {
        value + ply as i32
    } else if value < -MATE_THRESHOLD {
        value - ply as i32
    } else {
        value
    }
}

/// Inverse of [`value_to_tt`].
#[must_use]
pub fn value_from_tt(value: i32, ply: usize) -> i32 {
    if value > MATE_THRESHOLD {
        value - ply as i32
    } else if value < -MATE_THRESHOLD {
        value + ply as i32
    } else {
        value
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub hash: u64,
    pub best_move: Move,
    /// Search value, mate scores relative to this node.
    pub value: i32,
    pub static_eval: Option<i32>,
    pub depth: u32,
    pub bound: BoundType,
}

impl TTEntry {
    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        if self.best_move.is_null() {
            None
        } else {
            Some(self.best_move)
        }
    }

    /// The stored value, if it is deep enough and its bound settles the
    /// window `(alpha, beta)`. `ply` converts mate scores back to the
    /// root frame.
    #[must_use]
    pub fn usable_value(&self, depth: u32, alpha: i32, beta: i32, ply: usize) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        let value = value_from_tt(self.value, ply);
        match self.bound {
            BoundType::Exact => Some(value),
            BoundType::LowerBound if value >= beta => Some(value),
            BoundType::UpperBound if value <= alpha => Some(value),
            _ => None,
        }
    }
}

pub struct TranspositionTable {
    slots: Vec<Option<TTEntry>>,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let slot_size = mem::size_of::<Option<TTEntry>>();
        let capacity = ((size_mb * 1024 * 1024) / slot_size).max(1);
        TranspositionTable {
            slots: vec![None; capacity],
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn index(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    /// The entry for `hash`, if its slot holds that exact position.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        self.slots[self.index(hash)].filter(|entry| entry.hash == hash)
    }

    /// Store `entry` under `hash`, replacing whatever the slot held.
    pub fn store(&mut self, hash: u64, entry: TTEntry) {
        let idx = self.index(hash);
        self.slots[idx] = Some(TTEntry { hash, ..entry });
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample the first 1000 slots
        let sample_size = self.slots.len().min(1000);
        let occupied = self.slots[..sample_size]
            .iter()
            .filter(|slot| slot.is_some())
            .count();
        ((occupied as u64 * 1000) / sample_size as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(DEFAULT_TT_MB)
    }
}
