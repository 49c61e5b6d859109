// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the unlock grid.
//!
//! This module contains type-safe representations of the grid primitives:
//! - Dot: Grid positions (1..=9)
//! - DotSet: Bitset of dots
//! - Point: Integer screen coordinates
//! - Segment: A drawn line between two dots
//! - SkipRule: A move that passes over another dot
//! - GridTopology: Coordinates and skip rules, shared read-only

pub mod constants;
pub mod dot;
pub mod dot_set;
pub mod grid;
pub mod point;
pub mod segment;
pub mod skip_rule;

// Re-export for convenience
pub use constants::*;
pub use dot::Dot;
pub use dot_set::DotSet;
pub use grid::GridTopology;
pub use point::Point;
pub use segment::{Crossing, Segment};
pub use skip_rule::SkipRule;
