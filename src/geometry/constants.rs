// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed constants of the 3×3 unlock grid.
//!
//! The grid is numbered row by row:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```
//!
//! All coordinates are integer screen points (y grows downwards), which keeps
//! the intersection arithmetic exact and reproducible.

/// Number of dots on the grid.
pub const NDOTS: usize = 9;

/// Shortest pattern accepted as an unlock gesture.
pub const MIN_PATTERN_LENGTH: usize = 4;

/// Longest pattern: every dot visited once.
pub const MAX_PATTERN_LENGTH: usize = NDOTS;

/// Default screen coordinates of dots 1..=9, indexed by `dot - 1`.
///
/// Column spacing is 156 points, row spacing 163 points.
pub const DEFAULT_COORDINATES: [(i64, i64); NDOTS] = [
    (68, 50),
    (224, 50),
    (380, 50),
    (68, 213),
    (224, 213),
    (380, 213),
    (68, 376),
    (224, 376),
    (380, 376),
];

/// Distance below which two parallel, chained segments count as an overlap.
///
/// Just under two column steps (2 × 156 = 312), so that continuing straight
/// along a row (1→2→3) is not an overlap while doubling back (2→3→1) is.
pub const OVERLAP_DISTANCE: i64 = 310;

/// Largest absolute coordinate a grid may use.
///
/// The intersection numerator is a difference of products of three
/// coordinates; with every coordinate within ±2^19 each product stays within
/// 2^59 and the whole computation fits in `i64`.
pub const MAX_COORDINATE: i64 = 1 << 19;

/// Skip rules as `(endpoint, endpoint, required middle dot)`.
///
/// A direct move between the two endpoints passes over the middle dot and is
/// only legal once the middle dot has been visited. Rules are undirected.
///
/// - Corner to corner along an edge: 1-3, 1-7, 3-9, 7-9
/// - Corner to corner through the centre: 1-9, 3-7
/// - Edge midpoint to edge midpoint through the centre: 2-8, 4-6
pub const SKIP_RULES: [(u8, u8, u8); 8] = [
    (1, 3, 2),
    (1, 7, 4),
    (1, 9, 5),
    (3, 7, 5),
    (3, 9, 6),
    (7, 9, 8),
    (2, 8, 5),
    (4, 6, 5),
];

/// Compute factorial at compile time.
const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Number of ordered selections of `k` distinct items out of `n`: n!/(n-k)!.
///
/// This is the size of the raw candidate space for patterns of length `k`
/// before any skip rule is applied.
pub const fn permutations(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else {
        factorial(n) / factorial(n - k)
    }
}

/// Known count of valid patterns for each length 4..=9 on the standard grid.
pub const KNOWN_PATTERN_COUNTS: [(usize, usize); 6] = [
    (4, 1624),
    (5, 7152),
    (6, 26016),
    (7, 72912),
    (8, 140704),
    (9, 140704),
];

const _: () = assert!(NDOTS <= 64, "DotSet stores dots in a u64");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(9), 362880);
    }

    #[test]
    fn test_permutations() {
        assert_eq!(permutations(9, 4), 3024);
        assert_eq!(permutations(9, 9), 362880);
        assert_eq!(permutations(9, 0), 1);
        assert_eq!(permutations(3, 4), 0);
    }

    #[test]
    fn test_known_counts_fit_candidate_space() {
        for (length, count) in KNOWN_PATTERN_COUNTS {
            assert!(count <= permutations(NDOTS, length));
        }
        let total: usize = KNOWN_PATTERN_COUNTS.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 389112);
    }

    #[test]
    fn test_skip_rule_middles_are_between_endpoints() {
        for (a, b, middle) in SKIP_RULES {
            let (ax, ay) = DEFAULT_COORDINATES[a as usize - 1];
            let (bx, by) = DEFAULT_COORDINATES[b as usize - 1];
            let (mx, my) = DEFAULT_COORDINATES[middle as usize - 1];
            assert_eq!((ax + bx) / 2, mx, "rule {}-{}", a, b);
            assert_eq!((ay + by) / 2, my, "rule {}-{}", a, b);
        }
    }
}
