// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Patterns: ordered, non-repeating sequences of dots.
//!
//! A `Pattern` only guarantees that it is well formed (non-empty, every dot
//! on the grid, no dot twice). Whether it is a legal unlock gesture is a
//! separate question answered by [`GridTopology::check`](crate::geometry::GridTopology::check).
//!
//! # Examples
//!
//! ```
//! use unlock_patterns::pattern::Pattern;
//!
//! let pattern: Pattern = "1-5-9-6".parse().unwrap();
//! assert_eq!(pattern.len(), 4);
//! assert_eq!(pattern.to_string(), "1-5-9-6");
//! assert_eq!("1596".parse::<Pattern>().unwrap(), pattern);
//! ```

pub mod validity;

use crate::error::PatternError;
use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, NDOTS};
use crate::geometry::{Dot, DotSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of distinct dots.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Dot>", into = "Vec<Dot>")]
pub struct Pattern {
    dots: Vec<Dot>,
}

impl Pattern {
    /// Create a pattern, rejecting empty sequences and repeated dots.
    pub fn new(dots: Vec<Dot>) -> Result<Self, PatternError> {
        if dots.is_empty() {
            return Err(PatternError::Empty);
        }
        if dots.len() > NDOTS {
            return Err(PatternError::TooLong(dots.len()));
        }
        let mut seen = DotSet::empty();
        for &dot in &dots {
            if seen.contains(dot) {
                return Err(PatternError::RepeatedDot(dot));
            }
            seen.insert(dot);
        }
        Ok(Self { dots })
    }

    /// Create a pattern from raw dot labels.
    pub fn from_ids(ids: &[u8]) -> Result<Self, PatternError> {
        let dots = ids
            .iter()
            .map(|&id| Dot::try_new(id).ok_or(PatternError::UnknownDot(id)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(dots)
    }

    /// Build a pattern the caller knows to be well formed.
    pub(crate) fn from_unique(dots: Vec<Dot>) -> Self {
        debug_assert!(Self::new(dots.clone()).is_ok());
        Self { dots }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Always false: patterns hold at least one dot.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn first(&self) -> Dot {
        self.dots[0]
    }

    pub fn last(&self) -> Dot {
        self.dots[self.dots.len() - 1]
    }

    /// The set of dots this pattern visits.
    pub fn visited(&self) -> DotSet {
        DotSet::from_dots(&self.dots)
    }

    /// The same dots drawn in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut dots = self.dots.clone();
        dots.reverse();
        Self { dots }
    }

    /// Suggest a corrected pattern for free-form user input.
    ///
    /// Keeps only the digits 1..=9 in the order typed. Returns `None` when
    /// the cleaned-up digits repeat or do not make a pattern of
    /// `MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH` dots.
    ///
    /// ```
    /// use unlock_patterns::pattern::Pattern;
    ///
    /// let suggestion = Pattern::suggest("1a2 3,04").unwrap();
    /// assert_eq!(suggestion.to_string(), "1-2-3-4");
    /// assert!(Pattern::suggest("1123").is_none());
    /// ```
    pub fn suggest(input: &str) -> Option<Self> {
        let ids: Vec<u8> = input
            .chars()
            .filter_map(|c| c.to_digit(10))
            .filter(|&d| d != 0)
            .map(|d| d as u8)
            .collect();
        if !(MIN_PATTERN_LENGTH..=MAX_PATTERN_LENGTH).contains(&ids.len()) {
            return None;
        }
        Self::from_ids(&ids).ok()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse `"1593"` or `"1-5-9-3"`; `,` and whitespace also separate dots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ids = Vec::with_capacity(NDOTS);
        for c in s.chars() {
            match c {
                '-' | ',' => {}
                c if c.is_whitespace() => {}
                c => match c.to_digit(10) {
                    Some(d) => ids.push(d as u8),
                    None => return Err(PatternError::InvalidCharacter(c)),
                },
            }
        }
        Self::from_ids(&ids)
    }
}

impl TryFrom<Vec<Dot>> for Pattern {
    type Error = PatternError;

    fn try_from(dots: Vec<Dot>) -> Result<Self, Self::Error> {
        Self::new(dots)
    }
}

impl From<Pattern> for Vec<Dot> {
    fn from(pattern: Pattern) -> Self {
        pattern.dots
    }
}

impl fmt::Display for Pattern {
    /// Format a pattern as "1-5-9-3".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, dot) in self.dots.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", dot)?;
        }
        Ok(())
    }
}
