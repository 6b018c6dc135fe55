use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;

enum SlotDir {
    Left,
    Right,
}

// Heap storage addressed by 1-based slot numbers, so that parent(k) = k/2
// and the children of k are 2k and 2k+1; slot k lives at cells[k - 1].
// `capacity` carries the doubling/halving schedule, which is tracked apart
// from whatever the allocator actually handed the Vec.
#[derive(Debug, Serialize, Deserialize)]
pub struct Slots<P> {
    cells: Vec<P>,
    capacity: usize,
}

impl<P: Copy> Slots<P> {
    pub fn new() -> Self {
        Self {
            cells: vec![],
            capacity: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn value(&self, slot: usize) -> P {
        self.cells[slot - 1]
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.cells.swap(a - 1, b - 1);
    }

    pub fn parent(&self, slot: usize) -> Option<usize> {
        if slot == 1 {
            None
        } else {
            Some(slot / 2)
        }
    }

    fn child(&self, slot: usize, dir: SlotDir) -> Option<usize> {
        let child = match dir {
            SlotDir::Left => 2 * slot,
            SlotDir::Right => 2 * slot + 1,
        };
        if child <= self.cells.len() {
            Some(child)
        } else {
            None
        }
    }

    pub fn children(&self, slot: usize) -> (Option<usize>, Option<usize>) {
        (
            self.child(slot, SlotDir::Left),
            self.child(slot, SlotDir::Right),
        )
    }

    // slots past len/2 have no children
    pub fn first_leaf(&self) -> usize {
        self.cells.len() / 2 + 1
    }

    pub fn leaves(&self) -> impl Iterator<Item = P> + '_ {
        self.cells[self.first_leaf() - 1..].iter().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = P> + '_ {
        self.cells.iter().copied()
    }

    // Appends into the next free slot, doubling capacity first when full.
    // The reservation happens before anything is written, so a failed grow
    // leaves the slots exactly as they were.
    pub fn append(&mut self, value: P) -> Result<(), TryReserveError> {
        if self.cells.len() == self.capacity {
            let grown = if self.capacity == 0 {
                1
            } else {
                self.capacity * 2
            };
            self.cells.try_reserve_exact(grown - self.cells.len())?;
            self.capacity = grown;
        }
        self.cells.push(value);
        Ok(())
    }

    // Removes the last slot, then halves capacity once the live slots fit
    // in a quarter of it. Halving cannot strand a live slot: at the point
    // it fires, len <= capacity / 4 < capacity / 2.
    pub fn remove_last(&mut self) -> Option<P> {
        let removed = self.cells.pop()?;
        if self.cells.len() <= self.capacity / 4 {
            self.capacity /= 2;
            self.cells.shrink_to(self.capacity);
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_of(values: &[i64]) -> Slots<i64> {
        let mut slots = Slots::new();
        for &value in values {
            slots.append(value).unwrap();
        }
        slots
    }

    #[test]
    fn parent_arithmetic_is_one_indexed() {
        let slots = slots_of(&[10, 20, 30, 40, 50]);
        assert_eq!(slots.parent(1), None);
        assert_eq!(slots.parent(2), Some(1));
        assert_eq!(slots.parent(3), Some(1));
        assert_eq!(slots.parent(4), Some(2));
        assert_eq!(slots.parent(5), Some(2));
    }

    #[test]
    fn children_stop_at_the_live_prefix() {
        let slots = slots_of(&[10, 20, 30, 40, 50]);
        assert_eq!(slots.children(1), (Some(2), Some(3)));
        assert_eq!(slots.children(2), (Some(4), Some(5)));
        assert_eq!(slots.children(3), (None, None));
    }

    #[test]
    fn leaves_are_the_childless_suffix() {
        let slots = slots_of(&[10, 20, 30, 40, 50]);
        assert_eq!(slots.first_leaf(), 3);
        assert_eq!(slots.leaves().collect::<Vec<_>>(), vec![30, 40, 50]);
    }

    #[test]
    fn append_doubles_capacity_from_zero() {
        let mut slots = Slots::new();
        let mut seen = vec![slots.capacity()];
        for value in 0..9 {
            slots.append(value).unwrap();
            if seen.last() != Some(&slots.capacity()) {
                seen.push(slots.capacity());
            }
        }
        assert_eq!(seen, vec![0, 1, 2, 4, 8, 16]);
    }

    #[test]
    fn remove_last_halves_capacity_at_quarter_occupancy() {
        let mut slots = slots_of(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(slots.capacity(), 16);
        while slots.len() > 4 {
            slots.remove_last();
            assert_eq!(slots.capacity(), if slots.len() > 4 { 16 } else { 8 });
        }
        while slots.remove_last().is_some() {
            assert!(slots.capacity() >= slots.len());
        }
        assert_eq!(slots.capacity(), 1);
    }

    #[test]
    fn draining_a_single_slot_releases_all_capacity() {
        let mut slots = slots_of(&[42]);
        assert_eq!(slots.capacity(), 1);
        assert_eq!(slots.remove_last(), Some(42));
        assert_eq!(slots.capacity(), 0);
    }
}
