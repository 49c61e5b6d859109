// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! A program that ends in `FailPredicate` therefore visits every solution
//! (collecting them by side effect) and finally exhausts.
//!
//! # Example
//!
//! ```
//! use unlock_patterns::context::SearchContext;
//! use unlock_patterns::engine::EngineBuilder;
//! use unlock_patterns::geometry::GridTopology;
//! use unlock_patterns::predicates::{ExtendPathPredicate, FailPredicate, RecordPatternPredicate};
//!
//! let grid = GridTopology::standard();
//! let mut ctx = SearchContext::new(&grid);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ExtendPathPredicate::new(2)))
//!     .add(Box::new(RecordPatternPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! // Engine is consumed, returns None once every choice is exhausted
//! assert!(engine.search(&mut ctx).is_none());
//! // 9 × 8 ordered pairs, minus the 16 moves that skip an unvisited dot
//! assert_eq!(ctx.found.len(), 56);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack.
const MAX_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. Prefer `EngineBuilder`,
    /// which guarantees the sequence ends with a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - can resume by calling search() again
    /// - `None` if exhausted (backtracked past first predicate) - search is complete
    ///
    /// Results are delivered via side effects on `ctx`, not by the return value.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND).
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }

            // Push initial stack entry for first predicate
            self.stack.push(StackEntry {
                predicate_index: 0,
                round: 0,
                in_choice_mode: false,
                current_choice: 0,
                num_choices: 0,
                trail_checkpoint: ctx.trail.len(),
            });
        } else {
            // Resuming after Suspend: behave as a failure, backtracking to
            // the most recent entry with choices left to try
            while self.stack.last().is_some_and(|entry| !entry.in_choice_mode) {
                self.stack.pop();
            }
        }

        // Main execution loop
        while let Some(entry) = self.stack.last_mut() {
            // Rewind trail to this entry's checkpoint
            let checkpoint = entry.trail_checkpoint;
            ctx.rewind_to(checkpoint);

            if !entry.in_choice_mode {
                // Call mode: try_pred
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => {
                        // Move to next predicate
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        // Stay at same predicate, increment round
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Backtrack
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        // Enter choice mode
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => {
                        // Pause execution, return engine for resumption
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: check if we've exhausted all choices
                if entry.current_choice >= entry.num_choices {
                    // Backtrack
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => {
                        self.push_next_predicate(ctx);
                    }
                    PredicateResult::SuccessSamePredicate => {
                        self.push_same_predicate(ctx);
                    }
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        // Invalid: retry_pred cannot return Choices or Suspend
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }

        None // Search exhausted (all choices failed)
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = self.current_predicate_index() + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack.push(StackEntry {
            predicate_index: next_index,
            round: 0,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (predicate_index, round) = match self.stack.last() {
            Some(current) => (current.predicate_index, current.round + 1),
            None => unreachable!("push_same_predicate called with empty stack"),
        };

        self.stack.push(StackEntry {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.len(),
        });
    }

    fn current_predicate_index(&self) -> usize {
        match self.stack.last() {
            Some(current) => current.predicate_index,
            None => unreachable!("no predicate is executing"),
        }
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder that assembles a predicate program ending in a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append the terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> BuiltEngine {
        self.predicates.push(predicate);
        BuiltEngine {
            predicates: self.predicates,
        }
    }
}

/// A predicate program known to end in a terminal predicate.
#[derive(Debug)]
pub struct BuiltEngine {
    predicates: Vec<Box<dyn Predicate>>,
}

impl BuiltEngine {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Dot, GridTopology};
    use crate::predicates::{FailPredicate, SuspendPredicate};

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that places one of two dots.
    #[derive(Debug)]
    struct TwoDots;

    impl Predicate for TwoDots {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(2)
        }

        fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            ctx.push_dot(Dot::new(choice as u8 + 1));
            PredicateResult::Success
        }
    }

    /// Test predicate that records the current path length.
    #[derive(Debug)]
    struct RecordLength(Vec<usize>);

    impl Predicate for RecordLength {
        fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            self.0.push(ctx.path_len());
            ctx.record_pattern();
            PredicateResult::Success
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some()); // Suspended - engine returned
        let engine = engine.unwrap();
        assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Suspend, no retries
    }

    #[test]
    fn test_immediate_failure() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);
        let engine = EngineBuilder::new().terminal(Box::new(FailPredicate)).build();

        assert!(engine.search(&mut ctx).is_none()); // Exhausted - engine consumed
    }

    #[test]
    fn test_empty_predicates() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);
        let engine = SearchEngine::new(vec![]);

        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_choices_are_rewound_between_alternatives() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);
        let engine = EngineBuilder::new()
            .add(Box::new(TwoDots))
            .add(Box::new(RecordLength(Vec::new())))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        let found: Vec<String> = ctx.found.iter().map(|p| p.to_string()).collect();
        assert_eq!(found, vec!["1", "2"]);
        assert_eq!(ctx.path_len(), 0);
    }

    #[test]
    fn test_resume_after_suspend() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);
        let engine = EngineBuilder::new()
            .add(Box::new(TwoDots))
            .add(Box::new(RecordLength(Vec::new())))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).expect("first solution");
        assert_eq!(ctx.current_pattern().to_string(), "1");
        let engine = engine.search(&mut ctx).expect("second solution");
        assert_eq!(ctx.current_pattern().to_string(), "2");
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(ctx.found.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let grid = GridTopology::standard();
        let mut ctx = SearchContext::new(&grid);
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);

        let _ = engine.search(&mut ctx);
    }
}
