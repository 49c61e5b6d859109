// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the grid and the DYNAMIC search state.
//!
//! The SearchContext is the data structure passed through every predicate:
//! - The grid: immutable, borrowed, shared by any number of contexts
//! - Trail and path state: mutable, owned, restored on backtrack
//! - Statistics and collected patterns: mutable, owned, never restored
//!
//! Contexts borrowing the same grid are fully independent, so searches for
//! different lengths can run side by side.

use crate::geometry::{Dot, DotSet, GridTopology};
use crate::pattern::Pattern;
use crate::state::{PathState, Statistics};
use crate::trail::Trail;

/// Search context for one enumeration run.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     grid: &GridTopology,       // Immutable, shared
///     trail: Trail,              // Mutable, owned
///     path: PathState,           // Mutable, owned, trail-tracked
///     statistics: Statistics,    // Mutable, owned
///     found: Vec<Pattern>,       // Mutable, owned
/// }
/// ```
#[derive(Debug)]
pub struct SearchContext<'g> {
    /// Coordinates and skip rules
    pub grid: &'g GridTopology,
    /// Trail for backtracking
    pub trail: Trail,
    /// The partial pattern under construction
    pub path: PathState,
    /// Search counters
    pub statistics: Statistics,
    /// Patterns recorded so far, in the order found
    pub found: Vec<Pattern>,
}

impl<'g> SearchContext<'g> {
    /// Create a new search context over `grid`.
    pub fn new(grid: &'g GridTopology) -> Self {
        Self {
            grid,
            trail: Trail::new(),
            path: PathState::new(),
            statistics: Statistics::new(),
            found: Vec::new(),
        }
    }

    // Safe trail wrapper methods
    // These keep the trail and the path state in step

    /// Append a dot to the current path (trail-tracked).
    pub fn push_dot(&mut self, dot: Dot) {
        self.path.push(&mut self.trail, dot);
    }

    /// Undo every trailed change made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        for entry in self.trail.unwind_to(checkpoint) {
            self.path.restore(entry);
        }
    }

    /// The dots of the current path.
    pub fn path_dots(&self) -> &[Dot] {
        self.path.dots()
    }

    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    pub fn last_dot(&self) -> Option<Dot> {
        self.path.last()
    }

    pub fn visited(&self) -> DotSet {
        self.path.visited()
    }

    /// The current path as a pattern.
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn current_pattern(&self) -> Pattern {
        assert!(!self.path.is_empty(), "No pattern: path is empty");
        Pattern::from_unique(self.path.dots().to_vec())
    }

    /// Record the current path as a found pattern.
    pub fn record_pattern(&mut self) {
        let pattern = self.current_pattern();
        self.found.push(pattern);
    }

    /// Take the recorded patterns, leaving the list empty.
    pub fn take_found(&mut self) -> Vec<Pattern> {
        std::mem::take(&mut self.found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_context_new() {
        let grid = GridTopology::standard();
        let ctx = SearchContext::new(&grid);
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.path_len(), 0);
        assert!(ctx.found.is_empty());
    }

    #[test]
    fn test_rewind_restores_path() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);

        ctx.push_dot(Dot::new(1));
        let checkpoint = ctx.trail.len();
        ctx.push_dot(Dot::new(5));
        ctx.push_dot(Dot::new(9));
        assert_eq!(ctx.current_pattern().to_string(), "1-5-9");

        ctx.rewind_to(checkpoint);
        assert_eq!(ctx.path_dots(), &[Dot::new(1)]);
        assert_eq!(ctx.visited(), DotSet::from_dots(&[Dot::new(1)]));
    }

    #[test]
    fn test_record_survives_rewind() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);

        ctx.push_dot(Dot::new(2));
        ctx.push_dot(Dot::new(6));
        ctx.record_pattern();
        ctx.rewind_to(0);

        assert_eq!(ctx.path_len(), 0);
        let found = ctx.take_found();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_string(), "2-6");
        assert!(ctx.found.is_empty());
    }

    #[test]
    fn test_independent_contexts() {
        let grid = GridTopology::standard();
        let mut ctx1 = SearchContext::new(&grid);
        let ctx2 = SearchContext::new(&grid);

        ctx1.push_dot(Dot::new(3));
        assert_eq!(ctx1.path_len(), 1);
        assert_eq!(ctx2.path_len(), 0);
    }
}
