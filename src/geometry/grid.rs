// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Grid topology: dot coordinates and skip rules.
//!
//! A `GridTopology` is built once and never mutated afterwards. Both the
//! enumeration engine and the path analyzer borrow the same instance, so
//! validity and geometry always agree on where the dots are.

use crate::error::ConfigError;
use crate::geometry::constants::{
    DEFAULT_COORDINATES, MAX_COORDINATE, NDOTS, OVERLAP_DISTANCE, SKIP_RULES,
};
use crate::geometry::{Dot, DotSet, Point, Segment, SkipRule};
use serde::Serialize;

/// Static description of the 3×3 grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridTopology {
    /// Coordinates of dots 1..=NDOTS, indexed by `Dot::index`.
    coordinates: [Point; NDOTS],

    /// The fixed skip rules.
    skip_rules: Vec<SkipRule>,

    /// Chained parallel segments closer than this count as an overlap.
    overlap_threshold: i64,

    /// Lookup table: `middles[a][b]` is the dot skipped over by a move a -> b.
    #[serde(skip)]
    middles: [[Option<Dot>; NDOTS]; NDOTS],
}

impl GridTopology {
    /// The standard grid with default screen coordinates.
    pub fn standard() -> Self {
        Self::build(DEFAULT_COORDINATES.map(Point::from), OVERLAP_DISTANCE)
    }

    /// A grid with custom coordinates and the standard skip rules.
    ///
    /// Rejects tables in which two dots share a coordinate, since crossings
    /// at a dot would then be ambiguous, and coordinates beyond
    /// `MAX_COORDINATE`, which would overflow the intersection arithmetic.
    pub fn with_coordinates(coordinates: [(i64, i64); NDOTS]) -> Result<Self, ConfigError> {
        let coordinates = coordinates.map(Point::from);
        for (i, a) in coordinates.iter().enumerate() {
            if a.x.abs() > MAX_COORDINATE || a.y.abs() > MAX_COORDINATE {
                return Err(ConfigError::CoordinateOutOfRange {
                    dot: Dot::from_index(i),
                    point: *a,
                });
            }
            if let Some(j) = coordinates[i + 1..].iter().position(|b| a == b) {
                return Err(ConfigError::DuplicateCoordinate {
                    first: Dot::from_index(i),
                    second: Dot::from_index(i + 1 + j),
                });
            }
        }
        Ok(Self::build(coordinates, OVERLAP_DISTANCE))
    }

    /// Replace the overlap threshold.
    ///
    /// The threshold is compared squared, so its square must fit in `i64`.
    pub fn with_overlap_threshold(mut self, threshold: i64) -> Result<Self, ConfigError> {
        if threshold <= 0 {
            return Err(ConfigError::OverlapThreshold(threshold));
        }
        if threshold.checked_mul(threshold).is_none() {
            return Err(ConfigError::OverlapThresholdTooLarge(threshold));
        }
        self.overlap_threshold = threshold;
        Ok(self)
    }

    fn build(coordinates: [Point; NDOTS], overlap_threshold: i64) -> Self {
        let skip_rules: Vec<SkipRule> = SKIP_RULES
            .iter()
            .map(|&(a, b, middle)| SkipRule::new(Dot::new(a), Dot::new(b), Dot::new(middle)))
            .collect();

        let mut middles = [[None; NDOTS]; NDOTS];
        for rule in &skip_rules {
            middles[rule.a.index()][rule.b.index()] = Some(rule.middle);
            middles[rule.b.index()][rule.a.index()] = Some(rule.middle);
        }

        Self {
            coordinates,
            skip_rules,
            overlap_threshold,
            middles,
        }
    }

    /// Coordinate of a dot.
    pub fn coordinate(&self, dot: Dot) -> Point {
        self.coordinates[dot.index()]
    }

    /// All coordinates, indexed by `Dot::index`.
    pub fn coordinates(&self) -> &[Point; NDOTS] {
        &self.coordinates
    }

    /// Is `point` exactly the location of one of the dots?
    pub fn is_dot_coordinate(&self, point: Point) -> bool {
        self.coordinates.contains(&point)
    }

    pub fn skip_rules(&self) -> &[SkipRule] {
        &self.skip_rules
    }

    pub fn overlap_threshold(&self) -> i64 {
        self.overlap_threshold
    }

    /// The dot passed over by a direct move `previous -> next`, if any.
    pub fn skipped_dot(&self, previous: Dot, next: Dot) -> Option<Dot> {
        self.middles[previous.index()][next.index()]
    }

    /// Is the move `previous -> next` legal given the dots visited so far?
    ///
    /// Only the presence of the skipped dot matters, not when it was visited.
    pub fn permits(&self, previous: Dot, next: Dot, visited: DotSet) -> bool {
        self.skipped_dot(previous, next)
            .map_or(true, |middle| visited.contains(middle))
    }

    /// The segment drawn between two dots.
    pub fn segment(&self, from: Dot, to: Dot) -> Segment {
        Segment::new(self.coordinate(from), self.coordinate(to))
    }
}

impl Default for GridTopology {
    fn default() -> Self {
        Self::standard()
    }
}
