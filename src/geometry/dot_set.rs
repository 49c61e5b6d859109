// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DotSet type for representing sets of dots as bitsets.
//!
//! Used as the "visited" set of the validity walk and of the enumeration
//! search. The set is `Copy`, so each step of a walk can produce a new set
//! without disturbing the previous one.
//!
//! # Examples
//!
//! ```
//! use unlock_patterns::geometry::{Dot, DotSet};
//!
//! let mut set = DotSet::empty();
//! set.insert(Dot::new(1));
//! set.insert(Dot::new(5));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{1,5}");
//! assert!(set.with(Dot::new(9)).contains(Dot::new(9)));
//! assert!(!set.contains(Dot::new(9)));
//! ```

use crate::geometry::{constants::NDOTS, Dot};
use std::fmt;

/// A set of dots represented as a bitset.
///
/// Bit i (counting from LSB) is set if the dot with index i is in the set.
///
/// Uses u64 for compatibility with the trail system (which only supports u64 values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DotSet(u64);

impl DotSet {
    /// Create an empty dot set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a dot set containing every dot on the grid.
    pub const fn full() -> Self {
        Self((1 << NDOTS) - 1)
    }

    /// Create a dot set from a slice of dots.
    pub fn from_dots(dots: &[Dot]) -> Self {
        dots.iter().fold(Self::empty(), |set, &dot| set.with(dot))
    }

    /// Create a dot set from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & Self::full().0)
    }

    /// Check if the set contains a specific dot.
    pub fn contains(self, dot: Dot) -> bool {
        (self.0 >> dot.index()) & 1 != 0
    }

    /// Insert a dot into the set.
    pub fn insert(&mut self, dot: Dot) {
        self.0 |= 1 << dot.index();
    }

    /// Return a copy of this set with `dot` added.
    #[must_use]
    pub fn with(self, dot: Dot) -> Self {
        Self(self.0 | 1 << dot.index())
    }

    /// Get the number of dots in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value (u64 for trail compatibility).
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Iterate over all dots in the set, in ascending label order.
    pub fn iter(self) -> impl Iterator<Item = Dot> {
        DotSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over dots in a DotSet.
struct DotSetIter {
    bits: u64,
    index: usize,
}

impl Iterator for DotSetIter {
    type Item = Dot;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NDOTS {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Dot::from_index(idx));
            }
        }
        None
    }
}

impl FromIterator<Dot> for DotSet {
    fn from_iter<I: IntoIterator<Item = Dot>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, dot| set.with(dot))
    }
}

impl fmt::Display for DotSet {
    /// Format a dot set as "{1,5,9}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, dot) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", dot)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert!(DotSet::empty().is_empty());
        assert_eq!(DotSet::full().len(), NDOTS);
        assert_eq!(DotSet::full().bits(), 0x1ff);
    }

    #[test]
    fn test_insert() {
        let mut set = DotSet::empty();
        set.insert(Dot::new(3));
        set.insert(Dot::new(7));
        assert!(set.contains(Dot::new(3)));
        assert!(set.contains(Dot::new(7)));
        assert!(!set.contains(Dot::new(5)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let set = DotSet::from_dots(&[Dot::new(1)]);
        let extended = set.with(Dot::new(2));
        assert_eq!(set.len(), 1);
        assert_eq!(extended.len(), 2);
    }

    #[test]
    fn test_iter_order() {
        let set: DotSet = [Dot::new(9), Dot::new(2), Dot::new(5)].into_iter().collect();
        let labels: Vec<u8> = set.iter().map(Dot::value).collect();
        assert_eq!(labels, vec![2, 5, 9]);
    }

    #[test]
    fn test_from_bits_masks_unknown_dots() {
        assert_eq!(DotSet::from_bits(u64::MAX), DotSet::full());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DotSet::empty()), "{}");
        assert_eq!(format!("{}", DotSet::from_dots(&[Dot::new(1), Dot::new(9)])), "{1,9}");
    }
}
