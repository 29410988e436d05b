//! Capacity management: deciding when a fresh region is needed.
//!
//! | Operation             | Growth policy                     | Complexity              |
//! |-----------------------|-----------------------------------|-------------------------|
//! | `reallocate`          | exactly the requested capacity    | O(capacity) / O(1)      |
//! | `extend_by`           | exact fit                         | O(n) when growing       |
//! | `expand`              | exact fit                         | O(n)                    |
//! | `reserve_for_append`  | `max(2 * capacity, needed)`       | amortised O(1) per push |

use super::Sequence;
use super::storage::Storage;
use crate::element::Element;

#[cold]
pub(super) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T: Element> Sequence<T> {
    /// Sets the length and capacity.
    ///
    /// A `length` above `capacity` is clamped to `capacity`. When `capacity`
    /// differs from the current one a fresh region of exactly that size is
    /// installed and `min(len, length)` elements are carried over, which
    /// makes every outstanding view stale. Otherwise the existing region is
    /// re-viewed to `length`; slots beyond the previous length then hold
    /// whatever the region last stored there.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = Sequence::with_capacity(4);
    /// sequence.reallocate(10, 4);
    /// assert_eq!(sequence.len(), 4);
    /// assert_eq!(sequence.capacity(), 4);
    ///
    /// sequence.reallocate(2, 8);
    /// assert_eq!((sequence.len(), sequence.capacity()), (2, 8));
    /// ```
    pub fn reallocate(&mut self, length: usize, capacity: usize) {
        let length = length.min(capacity);
        if capacity == self.capacity() {
            self.len = length;
        } else {
            let storage = Storage::allocate(capacity);
            storage.copy_from(0, &self.storage, 0..self.len.min(length));
            self.install(storage, length);
        }
    }

    /// Grows the length by `count` slots.
    ///
    /// The capacity becomes `max(capacity, len + count)`: growth is exact,
    /// never doubling.
    ///
    /// # Panics
    ///
    /// Panics if `len + count` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [1, 2].into();
    /// sequence.extend_by(3);
    /// assert_eq!(sequence.len(), 5);
    /// assert_eq!(sequence.capacity(), 5);
    /// assert_eq!(sequence.get(0), Some(1));
    /// ```
    pub fn extend_by(&mut self, count: usize) {
        let length = self.grown_length(count);
        self.reallocate(length, self.capacity().max(length));
    }

    /// Opens `count` slots at `index`, shifting the tail right.
    ///
    /// `index` is clamped to the length. When the capacity is insufficient
    /// the sequence moves to a region of exactly the new length and the gap
    /// holds the zero value; otherwise the tail moves in place, back to
    /// front, and the gap contents are unspecified.
    ///
    /// # Panics
    ///
    /// Panics if `len + count` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [1, 2, 3].into();
    /// sequence.expand(1, 2);
    /// assert_eq!(sequence.len(), 5);
    /// assert_eq!(sequence.get(0), Some(1));
    /// assert_eq!(sequence.get(3), Some(2));
    /// assert_eq!(sequence.get(4), Some(3));
    /// ```
    pub fn expand(&mut self, index: usize, count: usize) {
        let index = index.min(self.len);
        let length = self.grown_length(count);
        if length > self.capacity() {
            let storage = Storage::allocate(length);
            storage.copy_from(0, &self.storage, 0..index);
            storage.copy_from(index + count, &self.storage, index..self.len);
            self.install(storage, length);
        } else {
            self.storage.copy_within(index..self.len, index + count);
            self.len = length;
        }
    }

    /// Resizes the region so that the capacity equals the length.
    pub fn shrink_to_fit(&mut self) {
        self.reallocate(self.len, self.len);
    }

    /// Sets the length to zero, keeping the region.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// `len + additional`, panicking with "capacity overflow" past `usize::MAX`.
    pub(crate) fn grown_length(&self, additional: usize) -> usize {
        let Some(length) = self.len.checked_add(additional) else {
            capacity_overflow()
        };
        length
    }

    /// Ensures room for `additional` more elements, doubling when it must grow.
    pub(crate) fn reserve_for_append(&mut self, additional: usize) {
        let needed = self.grown_length(additional);
        if needed > self.capacity() {
            let capacity = needed.max(self.capacity().saturating_mul(2));
            self.reallocate(self.len, capacity);
        }
    }
}
