// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trailed values that automatically record changes for backtracking.

use super::Trail;
use crate::geometry::DotSet;

/// Values that can be stored on the trail as a raw u64.
pub trait TrailValue: Copy {
    fn to_raw(self) -> u64;
    fn from_raw(raw: u64) -> Self;
}

impl TrailValue for u8 {
    fn to_raw(self) -> u64 {
        self as u64
    }

    fn from_raw(raw: u64) -> Self {
        raw as u8
    }
}

impl TrailValue for DotSet {
    fn to_raw(self) -> u64 {
        self.bits()
    }

    fn from_raw(raw: u64) -> Self {
        DotSet::from_bits(raw)
    }
}

/// A value that records its previous value on the trail whenever it is set.
///
/// # Example
///
/// ```ignore
/// let mut trail = Trail::new();
/// let mut registry = TrailedRegistry::new();
/// let mut value = registry.register(4u8);
///
/// let checkpoint = trail.len();
/// value.set(&mut trail, 5);
/// for entry in trail.unwind_to(checkpoint) {
///     value.restore(entry.old_value);
/// }
/// assert_eq!(value.get(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Trailed<T: TrailValue> {
    /// The current value
    value: T,
    /// Unique identifier for trail tracking
    id: usize,
}

impl<T: TrailValue> Trailed<T> {
    /// Create a new trailed value with the given ID.
    ///
    /// The caller must ensure that `id` is unique within its owner.
    /// Use `TrailedRegistry` to manage IDs.
    pub(crate) fn new(id: usize, initial_value: T) -> Self {
        Self {
            value: initial_value,
            id,
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value
    }

    /// Get the unique ID for this trailed value.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Set the value, recording the old value in the trail.
    pub fn set(&mut self, trail: &mut Trail, new_value: T) {
        trail.record_change(self.id, self.value.to_raw());
        self.value = new_value;
    }

    /// Restore a value previously recorded on the trail.
    pub(crate) fn restore(&mut self, old_value: u64) {
        self.value = T::from_raw(old_value);
    }
}

/// Registry for managing unique IDs for Trailed values.
#[derive(Debug, Default)]
pub struct TrailedRegistry {
    next_id: usize,
}

impl TrailedRegistry {
    /// Create a new registry starting at ID 0.
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    /// Register a new trailed value with an initial value.
    pub fn register<T: TrailValue>(&mut self, initial_value: T) -> Trailed<T> {
        let id = self.next_id;
        self.next_id += 1;
        Trailed::new(id, initial_value)
    }
}
