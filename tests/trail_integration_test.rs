// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests verify that the trail system works correctly when integrated
//! with SearchContext, demonstrating the core backtracking behavior that
//! the search engine depends on.

use unlock_patterns::geometry::DotSet;
use unlock_patterns::{Dot, GridTopology, SearchContext};

#[test]
fn test_search_context_simple_backtracking() {
    let grid = GridTopology::standard();
    let mut ctx = SearchContext::new(&grid);

    // Initial state
    assert_eq!(ctx.path_len(), 0);

    // Checkpoint and modify using safe wrapper
    let checkpoint = ctx.trail.len();
    ctx.push_dot(Dot::new(5));

    assert_eq!(ctx.path_dots(), &[Dot::new(5)]);
    assert_eq!(ctx.trail.len(), 2); // length and visited set

    // Rewind restores old values
    ctx.rewind_to(checkpoint);
    assert_eq!(ctx.path_len(), 0);
    assert!(ctx.visited().is_empty());
    assert_eq!(ctx.trail.len(), 0);
}

#[test]
fn test_search_context_nested_backtracking() {
    let grid = GridTopology::standard();
    let mut ctx = SearchContext::new(&grid);

    let cp1 = ctx.trail.len();
    assert_eq!(cp1, 0);

    ctx.push_dot(Dot::new(1));
    ctx.push_dot(Dot::new(2));

    // Nested checkpoint
    let cp2 = ctx.trail.len();
    ctx.push_dot(Dot::new(3));
    ctx.push_dot(Dot::new(6));
    assert_eq!(ctx.current_pattern().to_string(), "1-2-3-6");

    // Rewind to cp2
    ctx.rewind_to(cp2);
    assert_eq!(ctx.current_pattern().to_string(), "1-2");
    assert_eq!(ctx.visited(), DotSet::from_dots(&[Dot::new(1), Dot::new(2)]));

    // A different branch from the same point
    ctx.push_dot(Dot::new(5));
    assert_eq!(ctx.current_pattern().to_string(), "1-2-5");

    // Rewind to cp1
    ctx.rewind_to(cp1);
    assert_eq!(ctx.path_len(), 0);
    assert_eq!(ctx.visited(), DotSet::empty());
}

#[test]
fn test_full_path_fits_on_trail() {
    let grid = GridTopology::standard();
    let mut ctx = SearchContext::new(&grid);

    for dot in Dot::all() {
        ctx.push_dot(dot);
    }
    assert_eq!(ctx.path_len(), 9);
    assert_eq!(ctx.visited(), DotSet::full());

    ctx.rewind_to(0);
    assert_eq!(ctx.path_len(), 0);
}
