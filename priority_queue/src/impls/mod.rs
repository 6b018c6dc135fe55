use super::{MaxCache, PriorityQueue};
use crate::slots::Slots;
use crate::{NegativeInfinity, Priority};
use std::collections::TryReserveError;

impl<P: Priority> PriorityQueue<P> {
    pub fn new() -> Self {
        Self {
            slots: Slots::new(),
            max: MaxCache::negative_infinity(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity),
            max: MaxCache::negative_infinity(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // current view of the doubling/halving schedule
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Inserts `value`. Storage grows by doubling; a failed reservation is
    /// handed back and the queue is left exactly as it was.
    pub fn push(&mut self, value: P) -> Result<(), TryReserveError> {
        self.slots.append(value)?;
        self.max.raise(value);
        self.swim(self.slots.len());
        Ok(())
    }

    /// The smallest value currently queued, `None` when empty.
    pub fn peek_min(&self) -> Option<P> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.slots.value(1))
        }
    }

    /// The largest value currently queued, `None` when empty. The cache
    /// is kept in lockstep with every mutation, so no rescan happens here.
    pub fn peek_max(&self) -> Option<P> {
        self.max.get()
    }

    /// Removes and returns the smallest value, `None` when empty.
    pub fn pop_min(&mut self) -> Option<P> {
        let last = self.slots.len();
        if last == 0 {
            return None;
        }
        self.slots.swap(1, last);
        let removed = self.slots.remove_last()?;
        self.sink(1);
        if self.slots.is_empty() {
            self.max = MaxCache::negative_infinity();
        } else if self.max.matches(removed) {
            // a value equal to the cached maximum left the queue; in a
            // min-heap the maximum sits in a childless slot, so only the
            // leaves need rescanning. Removing a duplicate of the maximum
            // lands here too, which wastes the rescan but is never wrong.
            self.max = self.slots.leaves().max().into();
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.max = MaxCache::negative_infinity();
    }

    /// Visits the live values in heap layout order; no ordering is
    /// guaranteed beyond the heap property itself.
    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        self.slots.iter()
    }

    fn swim(&mut self, mut slot: usize) {
        while let Some(parent) = self.slots.parent(slot) {
            if self.slots.value(parent) <= self.slots.value(slot) {
                break;
            }
            self.slots.swap(parent, slot);
            slot = parent;
        }
    }

    fn sink(&mut self, mut slot: usize) {
        loop {
            let smallest_child = match self.slots.children(slot) {
                (None, None) => break,
                (Some(left), None) => left,
                (None, Some(right)) => right,
                (Some(left), Some(right)) => {
                    if self.slots.value(right) < self.slots.value(left) {
                        right
                    } else {
                        left
                    }
                }
            };
            if self.slots.value(slot) <= self.slots.value(smallest_child) {
                break;
            }
            self.slots.swap(slot, smallest_child);
            slot = smallest_child;
        }
    }
}

impl<P: Priority> Default for PriorityQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}
