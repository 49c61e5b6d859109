// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Every error is scoped to a single call: nothing here is fatal to the
//! hosting process, and nothing is retried internally.

use crate::geometry::constants::{MAX_COORDINATE, MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, NDOTS};
use crate::geometry::{Dot, Point};
use std::path::PathBuf;
use thiserror::Error;

/// A sequence of dot labels could not be turned into a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("dot {0} is not on the grid (expected 1..={max})", max = NDOTS)]
    UnknownDot(u8),

    #[error("invalid character {0:?} in pattern")]
    InvalidCharacter(char),

    #[error("dot {0} appears more than once")]
    RepeatedDot(Dot),

    #[error("pattern has {0} dots but the grid only has {max}", max = NDOTS)]
    TooLong(usize),
}

/// A well-formed pattern breaks the unlock rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error(
        "pattern has {0} dots, expected {min}..={max}",
        min = MIN_PATTERN_LENGTH,
        max = MAX_PATTERN_LENGTH
    )]
    LengthOutOfRange(usize),

    #[error("step {step}: moving {from} -> {to} skips over unvisited dot {middle}")]
    IllegalSkip {
        step: usize,
        from: Dot,
        to: Dot,
        middle: Dot,
    },
}

/// Invalid arguments to `enumerate`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerateError {
    #[error(
        "invalid length range {min}..={max}: need {lowest} <= min <= max <= {highest}",
        lowest = MIN_PATTERN_LENGTH,
        highest = MAX_PATTERN_LENGTH
    )]
    RangeError { min: usize, max: usize },

    #[error("enumeration worker panicked")]
    WorkerPanicked,
}

/// Invalid run-time configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("grid needs exactly {expected} coordinates, got {0}", expected = NDOTS)]
    CoordinateCount(usize),

    #[error("dots {first} and {second} share the same coordinate")]
    DuplicateCoordinate { first: Dot, second: Dot },

    #[error("dot {dot} at {point} is outside the coordinate range ±{max}", max = MAX_COORDINATE)]
    CoordinateOutOfRange { dot: Dot, point: Point },

    #[error("overlap threshold must be positive, got {0}")]
    OverlapThreshold(i64),

    #[error("overlap threshold {0} is too large to square")]
    OverlapThresholdTooLarge(i64),

    #[error(transparent)]
    Range(#[from] EnumerateError),
}

/// Any error produced by this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("invalid pattern: {0}")]
    Violation(#[from] Violation),

    #[error(transparent)]
    Enumerate(#[from] EnumerateError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
