// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable summaries of analysed patterns.

use crate::analysis::{PathAnalysis, PathAnalyzer};
use crate::geometry::Point;
use crate::pattern::Pattern;
use serde::Serialize;
use std::fmt;

/// What is shown for the pattern currently being played back.
///
/// Scalar fields come first so the report serializes cleanly to TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternReport {
    pub pattern: Pattern,
    pub length: usize,
    pub valid: bool,
    pub intersections: usize,
    pub overlaps: usize,
    pub crossing_points: Vec<Point>,
}

impl PatternReport {
    pub fn new(pattern: &Pattern, analysis: &PathAnalysis, valid: bool) -> Self {
        Self {
            pattern: pattern.clone(),
            length: pattern.len(),
            valid,
            intersections: analysis.intersection_count(),
            overlaps: analysis.overlap_count,
            crossing_points: analysis.intersections.iter().copied().collect(),
        }
    }
}

impl fmt::Display for PatternReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pattern:       {}", self.pattern)?;
        writeln!(f, "Length:        {}", self.length)?;
        writeln!(f, "Valid:         {}", if self.valid { "yes" } else { "no" })?;
        write!(f, "Intersections: {}", self.intersections)?;
        if !self.crossing_points.is_empty() {
            let points: Vec<String> = self.crossing_points.iter().map(Point::to_string).collect();
            write!(f, " at {}", points.join(", "))?;
        }
        writeln!(f)?;
        write!(f, "Overlaps:      {}", self.overlaps)
    }
}

/// Totals over many patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrossingSummary {
    /// Patterns analysed.
    pub patterns: usize,
    /// Patterns with at least one crossing point.
    pub with_crossings: usize,
    /// Patterns with at least one overlap.
    pub with_overlaps: usize,
    /// Distinct crossing points, summed over patterns.
    pub total_crossings: usize,
    pub total_overlaps: usize,
    /// Largest number of crossing points in a single pattern.
    pub max_crossings: usize,
}

impl CrossingSummary {
    pub fn collect<'p>(analyzer: &PathAnalyzer<'_>, patterns: impl IntoIterator<Item = &'p Pattern>) -> Self {
        patterns
            .into_iter()
            .map(|pattern| analyzer.analyze_pattern(pattern))
            .fold(Self::default(), |mut summary, analysis| {
                summary.add(&analysis);
                summary
            })
    }

    pub fn add(&mut self, analysis: &PathAnalysis) {
        let crossings = analysis.intersection_count();
        self.patterns += 1;
        self.with_crossings += usize::from(crossings > 0);
        self.with_overlaps += usize::from(analysis.overlap_count > 0);
        self.total_crossings += crossings;
        self.total_overlaps += analysis.overlap_count;
        self.max_crossings = self.max_crossings.max(crossings);
    }
}

impl fmt::Display for CrossingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} patterns: {} with crossings ({} points, at most {} in one), {} with overlaps ({} in total)",
            self.patterns,
            self.with_crossings,
            self.total_crossings,
            self.max_crossings,
            self.with_overlaps,
            self.total_overlaps
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate;
    use crate::geometry::GridTopology;

    #[test]
    fn test_report_display() {
        let grid = GridTopology::standard();
        let analyzer = PathAnalyzer::new(&grid);
        let pattern: Pattern = "3416".parse().unwrap();
        let report = analyzer.report(&pattern);

        assert_eq!(report.length, 4);
        assert!(report.valid);
        assert_eq!(report.intersections, 1);
        assert_eq!(
            report.to_string(),
            "Pattern:       3-4-1-6\n\
             Length:        4\n\
             Valid:         yes\n\
             Intersections: 1 at (224, 131)\n\
             Overlaps:      0"
        );
    }

    #[test]
    fn test_report_for_invalid_pattern() {
        let grid = GridTopology::standard();
        let report = PathAnalyzer::new(&grid).report(&"137".parse().unwrap());
        assert!(!report.valid);
        assert_eq!(report.intersections, 0);
    }

    #[test]
    fn test_summary_length_four() {
        let grid = GridTopology::standard();
        let enumeration = enumerate(&grid, 4, 4).unwrap();
        let summary = CrossingSummary::collect(&PathAnalyzer::new(&grid), enumeration.iter());

        assert_eq!(summary.patterns, 1624);
        assert_eq!(summary.with_crossings, 280);
        assert_eq!(summary.total_crossings, 280);
        assert_eq!(summary.with_overlaps, 160);
        assert_eq!(summary.total_overlaps, 160);
        assert_eq!(summary.max_crossings, 1);
    }
}
