//! Sliding window of settled readings.
//!
//! # Invariants
//! - `capacity == 2 * tolerance + 1`, so capacity is always odd
//! - `len() <= capacity()`; the oldest reading is evicted first
//! - An exactly balanced window (only possible before it fills) reads online

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct ReachabilityWindow {
    samples: VecDeque<bool>,
    capacity: usize,
}

impl ReachabilityWindow {
    /// Create an empty window that absorbs up to `tolerance` dissenting readings.
    pub fn with_tolerance(tolerance: u32) -> Self {
        let capacity = (tolerance as usize).saturating_mul(2).saturating_add(1);
        Self {
            samples: VecDeque::new(),
            capacity,
        }
    }

    /// Append a reading, evicting the oldest one when full.
    pub fn push(&mut self, reading: bool) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(reading);
    }

    /// Majority vote over the window. Ties resolve to `true`.
    pub fn majority(&self) -> bool {
        let true_count = self.true_count();
        let false_count = self.samples.len() - true_count;
        true_count >= false_count
    }

    pub fn true_count(&self) -> usize {
        self.samples.iter().filter(|reading| **reading).count()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Readings from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.samples.iter().copied()
    }
}
