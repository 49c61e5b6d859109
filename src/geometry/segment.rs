// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Line segments between consecutive dots and their pairwise crossings.
//!
//! Intersections are computed on the infinite lines through each segment
//! with the determinant form of the line-line intersection formula
//! (<https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection>), then
//! bounded to the segments. All arithmetic is exact `i64`; the intersection
//! point is truncated toward zero onto the integer screen grid.

use crate::geometry::{GridTopology, Point};
use serde::Serialize;
use std::fmt;

/// A drawn segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// How two segments of a path relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The segments cross at a point that is not a dot.
    Point(Point),

    /// The segments lie on the same line and the later one doubles back
    /// over the earlier one.
    Overlap,

    /// No crossing: disjoint, parallel, or touching only at a dot.
    None,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Does `point` lie strictly inside this segment's extent on at least
    /// one axis?
    ///
    /// Combined with `point` lying on the segment's line, this places it on
    /// the segment proper rather than on its extension, and excludes the
    /// endpoints themselves.
    pub fn strictly_spans(&self, point: Point) -> bool {
        strictly_between(self.start.x, point.x, self.end.x)
            || strictly_between(self.start.y, point.y, self.end.y)
    }

    /// Classify this (earlier) segment against a `later` segment of the same path.
    ///
    /// A zero determinant means the two lines are parallel. This is checked
    /// before dividing, and such pairs only ever yield `Overlap` or `None`.
    /// Endpoints taken from a `GridTopology` are within `MAX_COORDINATE`, which
    /// keeps every product below in range.
    pub fn crossing(&self, later: &Segment, grid: &GridTopology) -> Crossing {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        let (x3, y3) = (later.start.x, later.start.y);
        let (x4, y4) = (later.end.x, later.end.y);

        let determinant = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        if determinant == 0 {
            return if self.is_doubled_back_by(later, grid.overlap_threshold()) {
                Crossing::Overlap
            } else {
                Crossing::None
            };
        }

        let a = x1 * y2 - y1 * x2;
        let b = x3 * y4 - y3 * x4;
        let point = Point::new(
            (a * (x3 - x4) - (x1 - x2) * b) / determinant,
            (a * (y3 - y4) - (y1 - y2) * b) / determinant,
        );

        if !grid.is_dot_coordinate(point) && self.strictly_spans(point) && later.strictly_spans(point)
        {
            Crossing::Point(point)
        } else {
            Crossing::None
        }
    }

    /// For a parallel pair: does `later` continue from this segment's end and
    /// come back to within `threshold` of this segment's start?
    fn is_doubled_back_by(&self, later: &Segment, threshold: i64) -> bool {
        self.end == later.start && later.end.distance_squared(self.start) < threshold * threshold
    }
}

fn strictly_between(a: i64, value: i64, b: i64) -> bool {
    (a < value && value < b) || (a > value && value > b)
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
