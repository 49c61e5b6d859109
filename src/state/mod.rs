// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DYNAMIC state (mutable, tracked on trail).
//!
//! - Path state: the partial pattern under construction
//! - Statistics: counters updated by predicates (not trailed)

pub mod path;
pub mod statistics;

pub use path::PathState;
pub use statistics::{Counters, Statistics};
