// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the enumeration search.
//!
//! Every change to trailed search state records the previous value on the
//! trail. Backtracking unwinds the trail to a checkpoint (simply an earlier
//! trail length) and hands the recorded values back, newest first, so the
//! owner can restore them.

pub mod trailed;

pub use trailed::{TrailValue, Trailed, TrailedRegistry};

use crate::geometry::constants::NDOTS;

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailEntry {
    /// Identifier of the trailed value that changed
    pub(crate) id: usize,
    /// The value before the change (stored as u64)
    pub(crate) old_value: u64,
}

/// The trail of state changes since the search started.
///
/// # Memory Model
///
/// Each `SearchContext` owns its own trail, so independent searches (for
/// example one per pattern length) never share mutable state.
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size.
    ///
    /// A full-length path records two changes per dot; anything beyond a
    /// small multiple of that is a bug in a predicate.
    const MAX_SIZE: usize = 8 * NDOTS;

    /// Create a new empty trail.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(Self::MAX_SIZE),
        }
    }

    /// Record a state change in the trail (internal use only).
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE (indicates a bug in the search algorithm).
    pub(crate) fn record_change(&mut self, id: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }

        self.entries.push(TrailEntry { id, old_value });
    }

    /// Remove every entry recorded after `checkpoint`, newest first.
    ///
    /// The caller must restore each yielded value to undo the changes.
    pub(crate) fn unwind_to(&mut self, checkpoint: usize) -> impl Iterator<Item = TrailEntry> + '_ {
        let start = checkpoint.min(self.entries.len());
        self.entries.drain(start..).rev()
    }

    /// Get the current number of entries in the trail.
    ///
    /// This is also the checkpoint to pass to `unwind_to` later.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_unwind_yields_newest_first() {
        let mut trail = Trail::new();

        trail.record_change(1, 10);
        let checkpoint = trail.len();
        trail.record_change(2, 20);
        trail.record_change(3, 30);

        let undone: Vec<_> = trail.unwind_to(checkpoint).collect();
        assert_eq!(
            undone,
            vec![
                TrailEntry { id: 3, old_value: 30 },
                TrailEntry { id: 2, old_value: 20 },
            ]
        );
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();

        trail.record_change(1, 10);
        let outer = trail.len();
        trail.record_change(2, 20);
        let inner = trail.len();
        trail.record_change(3, 30);

        assert_eq!(trail.unwind_to(inner).count(), 1);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail.unwind_to(outer).count(), 1);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_unwind_past_end_is_noop() {
        let mut trail = Trail::new();
        trail.record_change(1, 10);
        assert_eq!(trail.unwind_to(5).count(), 0);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    #[should_panic(expected = "Trail overflow")]
    fn test_trail_overflow() {
        let mut trail = Trail::new();

        for i in 0..Trail::MAX_SIZE + 1 {
            trail.record_change(i, 0);
        }
    }
}
