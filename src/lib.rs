// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration and geometric analysis of 3×3 unlock patterns.
//!
//! A pattern is a path through some of the nine dots of a 3×3 grid, never
//! visiting a dot twice, and never passing straight over a dot that has
//! not already been visited. This crate enumerates every such pattern of
//! 4 to 9 dots, and, for any drawn path, finds where the path crosses
//! itself and where it doubles back over its own line.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: Grid (Immutable)
//!
//! A [`GridTopology`](geometry::GridTopology) holds the dot coordinates and
//! the skip rules. It is built once and shared by reference.
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during enumeration, tracked on the trail:
//! - Trail - records state changes for O(1) backtracking
//! - Path - the dots placed so far, and the set of visited dots
//!
//! # Search Algorithm
//!
//! For each length, a predicate program is run to exhaustion:
//!
//! 1. **ExtendPathPredicate**: choose the next dot, pruning repeats and
//!    illegal skips as soon as they appear
//! 2. **RecordPatternPredicate**: keep the completed path
//! 3. **FailPredicate**: backtrack for the next alternative
//!
//! # Example
//!
//! ```
//! use unlock_patterns::{enumerate, GridTopology, PathAnalyzer};
//!
//! let grid = GridTopology::standard();
//! let enumeration = enumerate(&grid, 4, 4).unwrap();
//! assert_eq!(enumeration.total(), 1624);
//!
//! let analyzer = PathAnalyzer::new(&grid);
//! let crossing = enumeration
//!     .iter()
//!     .find(|p| analyzer.analyze_pattern(p).intersection_count() > 0)
//!     .unwrap();
//! assert_eq!(crossing.to_string(), "1-5-2-4");
//! ```

pub mod analysis;
pub mod config;
pub mod context;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod geometry;
pub mod pattern;
pub mod predicates;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use analysis::{CrossingSummary, PathAnalysis, PathAnalyzer, PatternReport};
pub use config::Config;
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use enumerate::{enumerate, enumerate_lengths, spawn_enumeration, Enumeration, EnumerationWorker};
pub use error::{ConfigError, EnumerateError, Error, PatternError, Result, Violation};
pub use geometry::{Dot, GridTopology, Point, Segment};
pub use pattern::Pattern;
pub use trail::Trail;
