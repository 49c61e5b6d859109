// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordPatternPredicate: save the completed path.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};

/// Copies the current path into `SearchContext::found`.
///
/// The recorded list is not trailed, so patterns survive backtracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordPatternPredicate;

impl Predicate for RecordPatternPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        ctx.record_pattern();
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "RecordPattern"
    }
}
