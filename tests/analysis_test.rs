// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for path analysis over enumerated patterns.

mod common;

use common::pattern;
use std::collections::BTreeSet;
use unlock_patterns::{
    enumerate, CrossingSummary, GridTopology, PathAnalyzer, PatternError, Point, Violation,
};

fn points(list: &[(i64, i64)]) -> BTreeSet<Point> {
    list.iter().map(|&p| Point::from(p)).collect()
}

#[test]
fn test_straight_diagonal_through_centre() {
    let grid = GridTopology::standard();
    let p = pattern("159");
    assert!(grid.check_moves(p.dots()).is_ok());

    let analysis = PathAnalyzer::new(&grid).analyze_pattern(&p);
    assert_eq!(analysis.segments.len(), 2);
    assert_eq!(analysis.intersection_count(), 0);
    assert_eq!(analysis.overlap_count, 0);
}

#[test]
fn test_corner_skip_without_middle_is_invalid() {
    let grid = GridTopology::standard();
    let err = grid.check_moves(pattern("137").dots()).unwrap_err();
    assert!(matches!(err, Violation::IllegalSkip { step: 1, middle, .. } if middle.value() == 2));
}

#[test]
fn test_zig_zag_has_no_crossings() {
    // Every segment lies on a grid line, and grid lines only meet at dots
    let grid = GridTopology::standard();
    let p = pattern("741258963");
    assert!(grid.is_valid(&p));

    let analysis = PathAnalyzer::new(&grid).analyze_pattern(&p);
    assert_eq!(analysis.segments.len(), 8);
    assert_eq!(analysis.intersection_count(), 0);
    assert_eq!(analysis.overlap_count, 0);
}

#[test]
fn test_reversal_symmetry() {
    let grid = GridTopology::standard();
    let analyzer = PathAnalyzer::new(&grid);
    let enumeration = enumerate(&grid, 4, 6).unwrap();

    for p in enumeration.iter() {
        let forward = analyzer.analyze_pattern(p);
        let backward = analyzer.analyze_pattern(&p.reversed());
        assert_eq!(forward.intersections, backward.intersections, "{}", p);
        assert_eq!(forward.overlap_count, backward.overlap_count, "{}", p);
    }
}

#[test]
fn test_swapped_segments_same_crossings() {
    // 1-6 then 7-2, drawn in either order
    let grid = GridTopology::standard();
    let analyzer = PathAnalyzer::new(&grid);
    let a = analyzer.analyze_pattern(&pattern("16729"));
    let b = analyzer.analyze_pattern(&pattern("92761"));
    assert_eq!(a.intersections, points(&[(192, 115), (276, 158), (317, 245)]));
    assert_eq!(a.intersections, b.intersections);
}

#[test]
fn test_endpoint_exclusion() {
    let grid = GridTopology::standard();
    let analyzer = PathAnalyzer::new(&grid);
    let enumeration = enumerate(&grid, 4, 6).unwrap();

    for p in enumeration.iter() {
        for point in analyzer.analyze_pattern(p).intersections {
            assert!(!grid.is_dot_coordinate(point), "{} crosses at dot {}", p, point);
        }
    }
}

#[test]
fn test_summaries_by_length() {
    let grid = GridTopology::standard();
    let analyzer = PathAnalyzer::new(&grid);
    let enumeration = enumerate(&grid, 4, 6).unwrap();

    let expected = [(4, 280, 280, 160, 1), (5, 3000, 3672, 1024, 3), (6, 16776, 26384, 4776, 5)];
    for (length, with_crossings, total_crossings, total_overlaps, max_crossings) in expected {
        let summary = CrossingSummary::collect(&analyzer, enumeration.patterns(length));
        assert_eq!(summary.patterns, enumeration.count(length));
        assert_eq!(summary.with_crossings, with_crossings, "length {}", length);
        assert_eq!(summary.total_crossings, total_crossings, "length {}", length);
        assert_eq!(summary.total_overlaps, total_overlaps, "length {}", length);
        assert_eq!(summary.max_crossings, max_crossings, "length {}", length);
    }
}

#[test]
fn test_malformed_input() {
    let grid = GridTopology::standard();
    let analyzer = PathAnalyzer::new(&grid);
    assert_eq!(analyzer.analyze_ids(&[]), Err(PatternError::Empty));
    assert_eq!(analyzer.analyze_ids(&[4, 12]), Err(PatternError::UnknownDot(12)));
}

#[test]
fn test_analysis_is_shareable_across_threads() {
    let grid = GridTopology::standard();
    let analyzer = PathAnalyzer::new(&grid);
    let patterns = [pattern("3416"), pattern("18349"), pattern("2315")];

    let counts: Vec<(usize, usize)> = std::thread::scope(|scope| {
        let handles: Vec<_> = patterns
            .iter()
            .map(|p| {
                scope.spawn(move || {
                    let analysis = analyzer.analyze_pattern(p);
                    (analysis.intersection_count(), analysis.overlap_count)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(counts, vec![(1, 0), (3, 0), (0, 1)]);
}

#[test]
fn test_most_crossed_nine_dot_pattern() {
    let grid = GridTopology::standard();
    let p = pattern("183492765");
    assert!(grid.is_valid(&p));

    let analysis = PathAnalyzer::new(&grid).analyze_pattern(&p);
    assert_eq!(analysis.intersection_count(), 12);
    assert_eq!(analysis.overlap_count, 0);
    assert!(analysis.intersections.contains(&Point::new(146, 213)));
}
