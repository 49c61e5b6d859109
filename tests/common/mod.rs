// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use unlock_patterns::engine::SearchEngine;
use unlock_patterns::geometry::constants::NDOTS;
use unlock_patterns::{Dot, GridTopology, Pattern, SearchContext};

/// Every ordered selection of `k` distinct dots, in lexicographic order.
///
/// Generated without any pruning, as an independent reference for the
/// search.
pub fn k_permutations(k: usize) -> Vec<Vec<Dot>> {
    fn extend(prefix: &mut Vec<Dot>, used: &mut [bool; NDOTS], k: usize, out: &mut Vec<Vec<Dot>>) {
        if prefix.len() == k {
            out.push(prefix.clone());
            return;
        }
        for dot in Dot::all() {
            if used[dot.index()] {
                continue;
            }
            used[dot.index()] = true;
            prefix.push(dot);
            extend(prefix, used, k, out);
            prefix.pop();
            used[dot.index()] = false;
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::with_capacity(k), &mut [false; NDOTS], k, &mut out);
    out
}

/// The valid patterns of length `k`, found by filtering every permutation.
pub fn brute_force_patterns(grid: &GridTopology, k: usize) -> Vec<Pattern> {
    k_permutations(k)
        .into_iter()
        .filter(|dots| grid.check_moves(dots).is_ok())
        .map(|dots| Pattern::new(dots).expect("permutations never repeat"))
        .collect()
}

pub fn pattern(s: &str) -> Pattern {
    s.parse().expect("test pattern should parse")
}

/// Count all solutions from a suspending search engine.
///
/// Runs the search to exhaustion, counting how many times it suspends.
pub fn count_all_solutions(engine: SearchEngine, ctx: &mut SearchContext) -> usize {
    let mut count = 0;
    let mut current = Some(engine);

    while let Some(engine) = current {
        current = engine.search(ctx);
        if current.is_some() {
            count += 1;
        }
    }

    count
}
