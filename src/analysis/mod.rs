// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometry of a drawn path: its segments, crossings and overlaps.
//!
//! Each segment is tested against every earlier segment of the same path.
//! Crossing points are collected into a set, so a point where several
//! pairs cross is reported once. Overlaps are counted per pair.
//!
//! # Examples
//!
//! ```
//! use unlock_patterns::analysis::PathAnalyzer;
//! use unlock_patterns::geometry::{GridTopology, Point};
//!
//! let grid = GridTopology::standard();
//! let analyzer = PathAnalyzer::new(&grid);
//!
//! // The last segment, 1 -> 6, crosses the first, 3 -> 4
//! let analysis = analyzer.analyze_ids(&[3, 4, 1, 6]).unwrap();
//! assert_eq!(analysis.segments.len(), 3);
//! assert!(analysis.intersections.contains(&Point::new(224, 131)));
//! ```

pub mod report;

pub use report::{CrossingSummary, PatternReport};

use crate::error::PatternError;
use crate::geometry::{Crossing, Dot, GridTopology, Point, Segment};
use crate::pattern::Pattern;
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of analysing one path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathAnalysis {
    /// One segment per consecutive pair of dots, in drawing order.
    pub segments: Vec<Segment>,
    /// Distinct crossing points. Never contains a dot coordinate.
    pub intersections: BTreeSet<Point>,
    /// Number of segment pairs where the path doubles back on itself.
    pub overlap_count: usize,
}

impl PathAnalysis {
    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    pub fn is_simple(&self) -> bool {
        self.intersections.is_empty() && self.overlap_count == 0
    }
}

/// Analyses paths drawn over one grid.
///
/// Holds only a shared reference, so one analyzer can be used for any
/// number of paths, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct PathAnalyzer<'g> {
    grid: &'g GridTopology,
}

impl<'g> PathAnalyzer<'g> {
    pub fn new(grid: &'g GridTopology) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'g GridTopology {
        self.grid
    }

    /// Analyse a path given as dots.
    ///
    /// A single dot has no segments and yields an empty analysis. Validity
    /// is not checked: any sequence of dots can be drawn.
    pub fn analyze(&self, dots: &[Dot]) -> Result<PathAnalysis, PatternError> {
        if dots.is_empty() {
            return Err(PatternError::Empty);
        }

        let segments: Vec<Segment> = dots
            .windows(2)
            .map(|pair| self.grid.segment(pair[0], pair[1]))
            .collect();

        let mut intersections = BTreeSet::new();
        let mut overlap_count = 0;
        for (i, later) in segments.iter().enumerate().skip(1) {
            for earlier in &segments[..i] {
                match earlier.crossing(later, self.grid) {
                    Crossing::Point(point) => {
                        intersections.insert(point);
                    }
                    Crossing::Overlap => overlap_count += 1,
                    Crossing::None => {}
                }
            }
        }

        Ok(PathAnalysis {
            segments,
            intersections,
            overlap_count,
        })
    }

    /// Analyse a path given as raw dot labels.
    pub fn analyze_ids(&self, ids: &[u8]) -> Result<PathAnalysis, PatternError> {
        let dots = ids
            .iter()
            .map(|&id| Dot::try_new(id).ok_or(PatternError::UnknownDot(id)))
            .collect::<Result<Vec<_>, _>>()?;
        self.analyze(&dots)
    }

    /// Analyse a pattern. Patterns are never empty, so this cannot fail.
    pub fn analyze_pattern(&self, pattern: &Pattern) -> PathAnalysis {
        match self.analyze(pattern.dots()) {
            Ok(analysis) => analysis,
            Err(_) => unreachable!("patterns are never empty"),
        }
    }

    /// Analyse a pattern and summarise it for display.
    pub fn report(&self, pattern: &Pattern) -> PatternReport {
        let analysis = self.analyze_pattern(pattern);
        PatternReport::new(pattern, &analysis, self.grid.is_valid(pattern))
    }
}
