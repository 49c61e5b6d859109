// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validity of a pattern against the grid's skip rules.
//!
//! The check is a walk over the pattern carrying the set of visited dots.
//! The set is folded forward by value, so checking one candidate shares no
//! state with checking another.

use crate::error::Violation;
use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH};
use crate::geometry::{Dot, DotSet, GridTopology};
use crate::pattern::Pattern;

impl GridTopology {
    /// Check that `pattern` is a legal unlock gesture.
    ///
    /// Fails with `LengthOutOfRange` outside 4..=9 dots, otherwise with the
    /// first illegal skip found by [`check_moves`](Self::check_moves).
    pub fn check(&self, pattern: &Pattern) -> Result<(), Violation> {
        let length = pattern.len();
        if !(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&length) {
            return Err(Violation::LengthOutOfRange(length));
        }
        self.check_moves(pattern.dots())
    }

    /// Walk the moves of `dots` and stop at the first illegal skip.
    ///
    /// The visited set starts with the first dot. A move that passes over
    /// another dot is legal if that dot was visited at any earlier point.
    /// No length restriction is applied.
    pub fn check_moves(&self, dots: &[Dot]) -> Result<(), Violation> {
        let Some(&first) = dots.first() else {
            return Ok(());
        };

        dots.windows(2)
            .enumerate()
            .try_fold(DotSet::empty().with(first), |visited, (i, pair)| {
                let (from, to) = (pair[0], pair[1]);
                match self.skipped_dot(from, to) {
                    Some(middle) if !visited.contains(middle) => Err(Violation::IllegalSkip {
                        step: i + 1,
                        from,
                        to,
                        middle,
                    }),
                    _ => Ok(visited.with(to)),
                }
            })
            .map(|_| ())
    }

    /// Convenience wrapper around [`check`](Self::check).
    pub fn is_valid(&self, pattern: &Pattern) -> bool {
        self.check(pattern).is_ok()
    }
}
