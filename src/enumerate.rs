// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of every valid pattern over a range of lengths.
//!
//! Each length gets its own `SearchContext` and its own predicate program,
//! run to exhaustion. Patterns arrive in lexicographic order, so no sorting
//! is needed afterwards.

use crate::context::SearchContext;
use crate::engine::EngineBuilder;
use crate::error::EnumerateError;
use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH};
use crate::geometry::GridTopology;
use crate::pattern::Pattern;
use crate::predicates::{ExtendPathPredicate, FailPredicate, RecordPatternPredicate};
use crate::state::{Counters, Statistics};
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Check that `MIN_PATTERN_LENGTH <= min <= max <= MAX_PATTERN_LENGTH`.
pub fn check_range(min: usize, max: usize) -> Result<(), EnumerateError> {
    if MIN_PATTERN_LENGTH <= min && min <= max && max <= MAX_PATTERN_LENGTH {
        Ok(())
    } else {
        Err(EnumerateError::RangeError { min, max })
    }
}

/// Enumerate every valid pattern with a length in `min..=max`.
///
/// The range is validated before any search work starts.
///
/// # Example
///
/// ```
/// use unlock_patterns::enumerate::enumerate;
/// use unlock_patterns::geometry::GridTopology;
///
/// let grid = GridTopology::standard();
/// let enumeration = enumerate(&grid, 4, 5).unwrap();
/// assert_eq!(enumeration.count(4), 1624);
/// assert_eq!(enumeration.count(5), 7152);
/// assert!(enumerate(&grid, 5, 4).is_err());
/// ```
pub fn enumerate(grid: &GridTopology, min: usize, max: usize) -> Result<Enumeration, EnumerateError> {
    check_range(min, max)?;
    Ok(enumerate_each(grid, min..=max))
}

/// Enumerate only the requested lengths, which need not be contiguous.
///
/// Every length is checked before any search work starts; repeated lengths
/// are searched once.
///
/// ```
/// use unlock_patterns::enumerate::enumerate_lengths;
/// use unlock_patterns::geometry::GridTopology;
///
/// let grid = GridTopology::standard();
/// let enumeration = enumerate_lengths(&grid, &[4, 6]).unwrap();
/// assert_eq!(enumeration.lengths().collect::<Vec<_>>(), vec![4, 6]);
/// assert_eq!(enumeration.count(5), 0);
/// ```
pub fn enumerate_lengths(grid: &GridTopology, lengths: &[usize]) -> Result<Enumeration, EnumerateError> {
    for &length in lengths {
        check_range(length, length)?;
    }
    let distinct: BTreeSet<usize> = lengths.iter().copied().collect();
    Ok(enumerate_each(grid, distinct))
}

fn enumerate_each(grid: &GridTopology, lengths: impl IntoIterator<Item = usize>) -> Enumeration {
    let start = Instant::now();
    let mut enumeration = Enumeration::default();
    for length in lengths {
        let length_start = Instant::now();
        let (patterns, statistics) = enumerate_length(grid, length);
        debug!(
            "length {}: {} patterns ({} repeats and {} skips rejected) in {:.3?}",
            length,
            patterns.len(),
            statistics.get(Counters::RejectedRepeats),
            statistics.get(Counters::RejectedSkips),
            length_start.elapsed()
        );
        enumeration.counts_by_length.insert(length, patterns.len());
        enumeration.patterns_by_length.insert(length, patterns);
        enumeration.statistics.merge(&statistics);
    }
    enumeration.elapsed = start.elapsed();

    info!(
        "enumerated {} patterns of lengths {:?} in {:.3?}",
        enumeration.total(),
        enumeration.lengths().collect::<Vec<_>>(),
        enumeration.elapsed
    );
    enumeration
}

/// Run the search for a single length, with no range check.
///
/// Lengths below `MIN_PATTERN_LENGTH` are allowed here; they are useful for
/// exercising the search on small cases.
///
/// # Panics
///
/// Panics if `length` exceeds the number of dots.
pub fn enumerate_length(grid: &GridTopology, length: usize) -> (Vec<Pattern>, Statistics) {
    let mut ctx = SearchContext::new(grid);
    let engine = EngineBuilder::new()
        .add(Box::new(ExtendPathPredicate::new(length)))
        .add(Box::new(RecordPatternPredicate))
        .add(Statistics::counting_predicate(Counters::PatternsFound, None))
        .terminal(Box::new(FailPredicate))
        .build();

    let exhausted = engine.search(&mut ctx).is_none();
    debug_assert!(exhausted, "enumeration program never suspends");

    let patterns = ctx.take_found();
    (patterns, ctx.statistics)
}

/// Every valid pattern in a length range, grouped by length.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    patterns_by_length: BTreeMap<usize, Vec<Pattern>>,
    counts_by_length: BTreeMap<usize, usize>,
    statistics: Statistics,
    elapsed: Duration,
}

impl Enumeration {
    pub fn patterns_by_length(&self) -> &BTreeMap<usize, Vec<Pattern>> {
        &self.patterns_by_length
    }

    pub fn counts_by_length(&self) -> &BTreeMap<usize, usize> {
        &self.counts_by_length
    }

    /// Patterns of one length, in lexicographic order.
    ///
    /// Empty if the length was outside the enumerated range.
    pub fn patterns(&self, length: usize) -> &[Pattern] {
        self.patterns_by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn count(&self, length: usize) -> usize {
        self.counts_by_length.get(&length).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts_by_length.values().sum()
    }

    /// The enumerated lengths, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts_by_length.keys().copied()
    }

    /// All patterns: ascending length, then lexicographic.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns_by_length.values().flatten()
    }

    /// Patterns whose length is one of `lengths`, in `iter()` order, or in
    /// the opposite order when `reversed` is set.
    pub fn select(&self, lengths: &[usize], reversed: bool) -> Vec<&Pattern> {
        let mut selected: Vec<&Pattern> = self
            .iter()
            .filter(|pattern| lengths.contains(&pattern.len()))
            .collect();
        if reversed {
            selected.reverse();
        }
        selected
    }

    /// Search counters summed over all lengths.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Wall-clock time spent searching.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl<'a> IntoIterator for &'a Enumeration {
    type Item = &'a Pattern;
    type IntoIter = std::iter::Flatten<std::collections::btree_map::Values<'a, usize, Vec<Pattern>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns_by_length.values().flatten()
    }
}

/// Enumeration running on a dedicated thread.
#[derive(Debug)]
pub struct EnumerationWorker {
    handle: JoinHandle<Result<Enumeration, EnumerateError>>,
}

impl EnumerationWorker {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the whole result.
    pub fn join(self) -> Result<Enumeration, EnumerateError> {
        self.handle
            .join()
            .map_err(|_| EnumerateError::WorkerPanicked)?
    }
}

/// Start `enumerate` on a worker thread.
///
/// The range is checked here, before the thread starts, so a bad range is
/// reported to the caller straight away.
pub fn spawn_enumeration(
    grid: GridTopology,
    min: usize,
    max: usize,
) -> Result<EnumerationWorker, EnumerateError> {
    check_range(min, max)?;
    let handle = thread::spawn(move || enumerate(&grid, min, max));
    Ok(EnumerationWorker { handle })
}
