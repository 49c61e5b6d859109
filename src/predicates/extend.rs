// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ExtendPathPredicate: grow the path one dot per round.
//!
//! Round `r` chooses the dot at position `r` of the pattern. Candidates are
//! tried in ascending dot order, so complete patterns come out in
//! lexicographic order. A candidate is pruned when it is already visited,
//! or when the move from the previous dot passes over an unvisited dot.
//! Validity is prefix-closed, so pruning a prefix never loses a pattern.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::constants::NDOTS;
use crate::geometry::Dot;
use crate::state::Counters;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendPathPredicate {
    length: usize,
}

impl ExtendPathPredicate {
    /// Extend until the path holds `length` dots.
    ///
    /// # Panics
    ///
    /// Panics if `length` exceeds the number of dots.
    pub fn new(length: usize) -> Self {
        assert!(length <= NDOTS, "Cannot build a path of {} dots", length);
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Predicate for ExtendPathPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == self.length {
            return PredicateResult::Success;
        }
        PredicateResult::Choices(NDOTS)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let dot = Dot::from_index(choice);
        let visited = ctx.visited();

        if visited.contains(dot) {
            ctx.statistics.increment_counter(Counters::RejectedRepeats);
            return PredicateResult::Failure;
        }
        if let Some(previous) = ctx.last_dot() {
            if !ctx.grid.permits(previous, dot, visited) {
                ctx.statistics.increment_counter(Counters::RejectedSkips);
                return PredicateResult::Failure;
            }
        }

        ctx.push_dot(dot);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ExtendPath"
    }
}
