// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! The enumeration program for patterns of length `n` is:
//!
//! ```text
//! ExtendPath(n)  ->  RecordPattern  ->  Count(PatternsFound)  ->  Fail
//! ```
//!
//! `ExtendPath` places one dot per round until the path holds `n` dots,
//! pruning any dot that would repeat or skip an unvisited dot. The terminal
//! `Fail` forces the engine to backtrack through every alternative.
//!
//! # Organization
//!
//! - `extend`: ExtendPathPredicate, the only choice point
//! - `record`: RecordPatternPredicate, collects a complete path
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod extend;
pub mod record;

pub use extend::ExtendPathPredicate;
pub use record::RecordPatternPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// Always fails, forcing backtracking. Ending a program with it makes the
/// engine explore every alternative, which is how enumeration collects
/// all patterns.
///
/// # Example
///
/// ```
/// use unlock_patterns::context::SearchContext;
/// use unlock_patterns::engine::EngineBuilder;
/// use unlock_patterns::geometry::GridTopology;
/// use unlock_patterns::predicates::{ExtendPathPredicate, FailPredicate};
///
/// let grid = GridTopology::standard();
/// let mut ctx = SearchContext::new(&grid);
/// let engine = EngineBuilder::new()
///     .add(Box::new(ExtendPathPredicate::new(3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all paths then fail
/// assert!(engine.search(&mut ctx).is_none());
/// assert_eq!(ctx.path_len(), 0);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the engine with the current path intact. Calling `search` again
/// resumes with the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
