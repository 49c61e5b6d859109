// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dynamic path state for the enumeration search.
//!
//! The path under construction is a fixed array of dots plus a trailed
//! length and a trailed visited set. Only the length and the visited set
//! need restoring on backtrack: slots beyond the length are never read.

use crate::geometry::constants::NDOTS;
use crate::geometry::{Dot, DotSet};
use crate::trail::{Trail, TrailEntry, Trailed, TrailedRegistry};

/// The partial pattern being extended by the search (mutable, trail-tracked).
#[derive(Debug, Clone)]
pub struct PathState {
    /// Dots in drawing order. Only `..length` is meaningful.
    dots: [Dot; NDOTS],

    /// Number of dots placed so far.
    length: Trailed<u8>,

    /// Dots placed so far, as a set.
    visited: Trailed<DotSet>,
}

impl PathState {
    pub fn new() -> Self {
        let mut registry = TrailedRegistry::new();
        Self {
            // Placeholder contents; never read before being written.
            dots: [Dot::new(1); NDOTS],
            length: registry.register(0u8),
            visited: registry.register(DotSet::empty()),
        }
    }

    pub fn len(&self) -> usize {
        self.length.get() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length.get() == 0
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots[..self.len()]
    }

    pub fn last(&self) -> Option<Dot> {
        self.dots().last().copied()
    }

    pub fn visited(&self) -> DotSet {
        self.visited.get()
    }

    /// Append a dot, recording the previous length and visited set on the trail.
    ///
    /// # Panics
    ///
    /// Panics if the path is already full.
    pub fn push(&mut self, trail: &mut Trail, dot: Dot) {
        let length = self.len();
        assert!(length < NDOTS, "Path overflow: already holds {} dots", NDOTS);
        self.dots[length] = dot;
        self.length.set(trail, length as u8 + 1);
        self.visited.set(trail, self.visited.get().with(dot));
    }

    /// Undo one trailed change.
    pub(crate) fn restore(&mut self, entry: TrailEntry) {
        if entry.id == self.length.id() {
            self.length.restore(entry.old_value);
        } else if entry.id == self.visited.id() {
            self.visited.restore(entry.old_value);
        } else {
            panic!("Unknown trail id {} for path state", entry.id);
        }
    }
}

impl Default for PathState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_restore() {
        let mut trail = Trail::new();
        let mut path = PathState::new();

        path.push(&mut trail, Dot::new(2));
        let checkpoint = trail.len();
        path.push(&mut trail, Dot::new(5));
        path.push(&mut trail, Dot::new(8));
        assert_eq!(path.dots(), &[Dot::new(2), Dot::new(5), Dot::new(8)]);
        assert_eq!(path.visited().len(), 3);

        for entry in trail.unwind_to(checkpoint) {
            path.restore(entry);
        }
        assert_eq!(path.dots(), &[Dot::new(2)]);
        assert_eq!(path.last(), Some(Dot::new(2)));
        assert_eq!(path.visited(), DotSet::from_dots(&[Dot::new(2)]));
    }

    #[test]
    fn test_empty_path() {
        let path = PathState::new();
        assert!(path.is_empty());
        assert_eq!(path.last(), None);
        assert!(path.visited().is_empty());
    }
}
