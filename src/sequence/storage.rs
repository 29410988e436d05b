//! Backing regions and the generation counter shared with views.
//!
//! A [`Storage`] is a fixed block of `capacity` cells. Cloning it clones the
//! reference, not the cells, so an owner and all of its views read and write
//! the same memory. `Cell` keeps that aliasing free of `unsafe`: elements are
//! `Copy` and only ever moved in and out by value.

use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use crate::element::Element;

/// A fixed-capacity region of element cells.
pub(crate) struct Storage<T> {
    cells: Rc<[Cell<T>]>,
}

impl<T> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Self {
            cells: Rc::clone(&self.cells),
        }
    }
}

impl<T> Storage<T> {
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub(crate) fn cells(&self, range: Range<usize>) -> &[Cell<T>] {
        &self.cells[range]
    }

    /// Returns `true` if both handles refer to the same region.
    #[cfg(test)]
    pub(crate) fn same_region(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cells, &other.cells)
    }
}

impl<T: Element> Storage<T> {
    /// Allocates a region of `capacity` zero-valued cells.
    pub(crate) fn allocate(capacity: usize) -> Self {
        Self {
            cells: (0..capacity).map(|_| Cell::new(T::zero())).collect(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> T {
        self.cells[index].get()
    }

    #[inline]
    pub(crate) fn set(&self, index: usize, value: T) {
        self.cells[index].set(value);
    }

    #[inline]
    pub(crate) fn swap(&self, first: usize, second: usize) {
        self.cells[first].swap(&self.cells[second]);
    }

    /// Moves `source` so that it starts at `destination`.
    ///
    /// Walks forward when moving left and backward when moving right, so an
    /// overlapping source is never clobbered before it is read.
    pub(crate) fn copy_within(&self, source: Range<usize>, destination: usize) {
        let count = source.len();
        if destination <= source.start {
            for offset in 0..count {
                self.set(destination + offset, self.get(source.start + offset));
            }
        } else {
            for offset in (0..count).rev() {
                self.set(destination + offset, self.get(source.start + offset));
            }
        }
    }

    /// Copies `source` of another region into this one at `destination`.
    pub(crate) fn copy_from(&self, destination: usize, other: &Self, source: Range<usize>) {
        for (offset, index) in source.enumerate() {
            self.set(destination + offset, other.get(index));
        }
    }

    pub(crate) fn write_slice(&self, destination: usize, values: &[T]) {
        for (offset, value) in values.iter().enumerate() {
            self.set(destination + offset, *value);
        }
    }

    pub(crate) fn fill(&self, range: Range<usize>, value: T) {
        for index in range {
            self.set(index, value);
        }
    }
}

/// Counts the regions a sequence has installed.
///
/// The owner and its views share one counter. A view remembers the value at
/// the moment it was taken and is stale once the counter has moved on.
#[derive(Clone, Default)]
pub(crate) struct Generation {
    counter: Rc<Cell<u64>>,
}

impl Generation {
    #[inline]
    pub(crate) fn current(&self) -> u64 {
        self.counter.get()
    }

    /// Moves to the next generation and returns it.
    pub(crate) fn advance(&self) -> u64 {
        let next = self.counter.get().wrapping_add(1);
        self.counter.set(next);
        next
    }
}
