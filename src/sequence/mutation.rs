//! Mutation operations built on the capacity manager.
//!
//! Index-bearing operations clamp their arguments and quietly do nothing
//! when the clamped range is empty. Only `insert`, `set` and operations
//! taking an [`Operand`] return errors.

use super::Sequence;
use super::capacity::capacity_overflow;
use super::operand::{Operand, gathered};
use super::storage::Storage;
use crate::element::Element;
use crate::error::SequenceError;

impl<T: Element> Sequence<T> {
    /// Appends a single element, doubling the capacity when it is exhausted.
    pub fn push(&mut self, element: T) {
        self.reserve_for_append(1);
        self.storage.set(self.len, element);
        self.len += 1;
    }

    /// Appends an element or the contents of a collection.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] for a [`Dynamic`](super::Dynamic)
    /// operand of the wrong shape and [`SequenceError::StaleView`] for a
    /// stale view operand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<f32> = Sequence::new();
    /// sequence.append(5.0).unwrap();
    /// sequence.append([1.0, 2.0]).unwrap();
    /// assert_eq!(sequence, [5.0, 1.0, 2.0]);
    /// ```
    pub fn append<O: Operand<T>>(&mut self, operand: O) -> Result<(), SequenceError> {
        let incoming = gathered(&operand)?;
        self.reserve_for_append(incoming.len());
        self.storage.write_slice(self.len, &incoming);
        self.len += incoming.len();
        Ok(())
    }

    /// Places an element or collection in front of the current contents.
    ///
    /// Always installs a fresh region sized exactly for the combined length.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::append`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [3].into();
    /// sequence.prepend([1, 2]).unwrap();
    /// assert_eq!(sequence, [1, 2, 3]);
    /// assert_eq!(sequence.capacity(), 3);
    /// ```
    pub fn prepend<O: Operand<T>>(&mut self, operand: O) -> Result<(), SequenceError> {
        let incoming = gathered(&operand)?;
        let length = incoming.len() + self.len;
        let storage = Storage::allocate(length);
        storage.write_slice(0, &incoming);
        storage.copy_from(incoming.len(), &self.storage, 0..self.len);
        self.install(storage, length);
        Ok(())
    }

    /// Splices an element or collection in at `index`.
    ///
    /// Always installs a fresh region sized exactly for the combined length.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index > len`, and the
    /// errors of [`Sequence::append`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [1, 4].into();
    /// sequence.insert(1, [2, 3]).unwrap();
    /// assert_eq!(sequence, [1, 2, 3, 4]);
    /// assert!(sequence.insert(9, 5).is_err());
    /// ```
    pub fn insert<O: Operand<T>>(
        &mut self,
        index: usize,
        operand: O,
    ) -> Result<(), SequenceError> {
        if index > self.len {
            return Err(SequenceError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        let incoming = gathered(&operand)?;
        let length = self.grown_length(incoming.len());
        let storage = Storage::allocate(length);
        storage.copy_from(0, &self.storage, 0..index);
        storage.write_slice(index, &incoming);
        storage.copy_from(index + incoming.len(), &self.storage, index..self.len);
        self.install(storage, length);
        Ok(())
    }

    /// Replaces the whole contents with an element or collection.
    ///
    /// Installs a fresh region sized exactly for the operand.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::append`].
    pub fn replace<O: Operand<T>>(&mut self, operand: O) -> Result<(), SequenceError> {
        let incoming = gathered(&operand)?;
        let storage = Storage::allocate(incoming.len());
        storage.write_slice(0, &incoming);
        self.install(storage, incoming.len());
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// Returns `None` without touching the sequence if `index` is out of range.
    pub fn delete(&mut self, index: usize) -> Option<T> {
        let removed = self.get(index)?;
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Some(removed)
    }

    /// Removes the half-open range `[start, end)` in place.
    ///
    /// `end` is clamped to the length; nothing happens when the clamped range
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [1, 2, 3, 4, 5].into();
    /// sequence.cut(1, 3);
    /// assert_eq!(sequence, [1, 4, 5]);
    /// ```
    pub fn cut(&mut self, start: usize, end: usize) {
        let end = end.min(self.len);
        if end <= start {
            return;
        }
        self.storage.copy_within(end..self.len, start);
        self.len -= end - start;
    }

    /// Keeps only `[start, end)`, discarding both sides with a single copy.
    ///
    /// Both bounds are clamped to the length; an inverted range is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [1, 2, 3, 4, 5].into();
    /// sequence.trim(1, 3);
    /// assert_eq!(sequence, [2, 3]);
    /// ```
    pub fn trim(&mut self, start: usize, end: usize) {
        let start = start.min(self.len);
        let end = end.min(self.len);
        if end < start {
            return;
        }
        self.storage.copy_within(start..end, 0);
        self.len = end - start;
    }

    /// Copies `count` elements from `source` to `destination`, overlap-safe.
    ///
    /// The copy is limited to what fits inside the current length at both
    /// ends.
    pub fn block_copy(&mut self, destination: usize, source: usize, count: usize) {
        if destination >= self.len || source >= self.len {
            return;
        }
        let end = source.saturating_add(count).min(self.len);
        let count = (end - source).min(self.len - destination);
        self.storage.copy_within(source..source + count, destination);
    }

    /// Writes the zero value over `count` elements starting at `start`.
    pub fn block_clear(&mut self, start: usize, count: usize) {
        if start >= self.len {
            return;
        }
        let end = start.saturating_add(count).min(self.len);
        self.storage.fill(start..end, T::zero());
    }

    /// Copies an operand's elements over the contents starting at `offset`.
    ///
    /// The length never changes: elements that would land past the end are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Same as [`Sequence::append`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [1, 2, 3].into();
    /// sequence.overwrite(1, [8, 9, 10]).unwrap();
    /// assert_eq!(sequence, [1, 8, 9]);
    /// ```
    pub fn overwrite<O: Operand<T>>(
        &mut self,
        offset: usize,
        operand: O,
    ) -> Result<(), SequenceError> {
        let incoming = gathered(&operand)?;
        if offset < self.len {
            let count = incoming.len().min(self.len - offset);
            self.storage.write_slice(offset, &incoming[..count]);
        }
        Ok(())
    }

    /// Writes `value` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SequenceError> {
        if index >= self.len {
            return Err(SequenceError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        self.storage.set(index, value);
        Ok(())
    }

    /// Writes the zero value at `index`; out-of-range indices are ignored.
    pub fn clear_at(&mut self, index: usize) {
        if index < self.len {
            self.storage.set(index, T::zero());
        }
    }

    /// Exchanges the elements at `first` and `second`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, first: usize, second: usize) {
        self.assert_in_bounds(first);
        self.assert_in_bounds(second);
        self.storage.swap(first, second);
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let Some(mut back) = self.len.checked_sub(1) else {
            return;
        };
        let mut front = 0;
        while front < back {
            self.storage.swap(front, back);
            front += 1;
            back -= 1;
        }
    }

    /// Returns a new sequence holding `count` back-to-back copies of this one.
    ///
    /// The capacity of the result is `max(capacity, len * count)`.
    ///
    /// # Panics
    ///
    /// Panics if `len * count` overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = [1, 2].into();
    /// assert_eq!(sequence.repeat(3), [1, 2, 1, 2, 1, 2]);
    /// ```
    #[must_use]
    pub fn repeat(&self, count: usize) -> Self {
        let Some(length) = self.len.checked_mul(count) else {
            capacity_overflow()
        };
        let storage = Storage::allocate(self.capacity().max(length));
        for offset in (0..length).step_by(self.len.max(1)) {
            storage.copy_from(offset, &self.storage, 0..self.len);
        }
        Self::from_storage(storage, length)
    }
}
