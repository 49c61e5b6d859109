// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dot type for grid positions.
//!
//! Dots are labelled 1..=9 row by row, as they are shown to the user.

use crate::geometry::constants::NDOTS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dot on the unlock grid, in the range 1..=NDOTS.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// dot labels with coordinates or 0-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Dot(u8);

impl Dot {
    /// Create a new dot, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `label` is 0 or greater than NDOTS.
    pub fn new(label: u8) -> Self {
        assert!(
            label >= 1 && (label as usize) <= NDOTS,
            "Dot out of range: {}",
            label
        );
        Self(label)
    }

    /// Try to create a new dot, returning None if out of range.
    pub fn try_new(label: u8) -> Option<Self> {
        if label >= 1 && (label as usize) <= NDOTS {
            Some(Self(label))
        } else {
            None
        }
    }

    /// Create a dot from its 0-based index.
    pub(crate) fn from_index(index: usize) -> Self {
        Self::new(index as u8 + 1)
    }

    /// Get the label (1..=NDOTS).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the 0-based index (for array indexing).
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Iterate over all dots in label order.
    pub fn all() -> impl Iterator<Item = Dot> {
        (1..=NDOTS as u8).map(Dot)
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Dot {
    type Error = String;

    fn try_from(label: u8) -> Result<Self, Self::Error> {
        Dot::try_new(label).ok_or_else(|| format!("dot label {} is not in 1..={}", label, NDOTS))
    }
}

impl From<Dot> for u8 {
    fn from(dot: Dot) -> u8 {
        dot.0
    }
}
