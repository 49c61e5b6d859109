// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Skip rules: moves that pass over another dot.

use crate::geometry::{Dot, DotSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A direct move between `a` and `b` (in either direction) passes over
/// `middle`, and is only legal if `middle` has already been visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkipRule {
    pub a: Dot,
    pub b: Dot,
    pub middle: Dot,
}

impl SkipRule {
    pub fn new(a: Dot, b: Dot, middle: Dot) -> Self {
        Self { a, b, middle }
    }

    /// Does the move `previous -> next` match this rule's endpoint pair?
    pub fn fires(&self, previous: Dot, next: Dot) -> bool {
        (previous == self.a && next == self.b) || (previous == self.b && next == self.a)
    }

    /// Is the move `previous -> next` allowed by this rule, given the dots
    /// visited so far?
    pub fn permits(&self, previous: Dot, next: Dot, visited: DotSet) -> bool {
        !self.fires(previous, next) || visited.contains(self.middle)
    }
}

impl fmt::Display for SkipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} over {}", self.a, self.b, self.middle)
    }
}
