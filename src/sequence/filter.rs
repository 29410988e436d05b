//! Filtering and searching.
//!
//! Every in-place filter goes through one compaction pass: a read cursor
//! walks the sequence while a write cursor trails it, an element is copied
//! only once the write cursor has fallen behind, and the final length is
//! wherever the write cursor stops. O(n) time, O(1) extra space, stable.

use std::num::NonZeroUsize;

use super::Sequence;
use super::membership::membership_set;
use crate::element::Element;
use crate::error::SequenceError;

/// How many matches [`Sequence::find_n`] collects.
///
/// Converting from `usize` maps `0` to [`MatchLimit::All`].
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
/// use slicekit::sequence::MatchLimit;
///
/// assert_eq!(MatchLimit::from(0), MatchLimit::All);
/// assert_eq!(
///     MatchLimit::from(2),
///     MatchLimit::AtMost(NonZeroUsize::new(2).unwrap())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLimit {
    /// Collect every match.
    All,
    /// Stop after this many matches.
    AtMost(NonZeroUsize),
}

impl From<usize> for MatchLimit {
    fn from(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or(Self::All, Self::AtMost)
    }
}

impl MatchLimit {
    const fn is_reached(self, found: usize) -> bool {
        match self {
            Self::All => false,
            Self::AtMost(limit) => found >= limit.get(),
        }
    }
}

impl<T: Element> Sequence<T> {
    /// Single-pass, order-preserving compaction keeping elements for which
    /// `keep` returns `true`.
    fn compact<F: FnMut(T) -> bool>(&mut self, mut keep: F) {
        let mut write = 0;
        for read in 0..self.len {
            let element = self.storage.get(read);
            if read != write {
                self.storage.set(write, element);
            }
            if keep(element) {
                write += 1;
            }
        }
        self.len = write;
    }

    /// Keeps only the elements satisfying `predicate`, in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [1, 2, 3, 4, 5, 6].into();
    /// sequence.keep_if(|element| element % 2 == 0);
    /// assert_eq!(sequence, [2, 4, 6]);
    /// ```
    pub fn keep_if<P: FnMut(T) -> bool>(&mut self, predicate: P) {
        self.compact(predicate);
    }

    /// Keeps only the elements equal to `value`, in place.
    pub fn keep_if_eq(&mut self, value: T) {
        self.compact(|element| element == value);
    }

    /// Removes the elements satisfying `predicate`, in place.
    pub fn delete_if<P: FnMut(T) -> bool>(&mut self, mut predicate: P) {
        self.compact(|element| !predicate(element));
    }

    /// Removes the elements equal to `value`, in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<&str> = ["a", "b", "a"].into();
    /// sequence.delete_if_eq("a");
    /// assert_eq!(sequence, ["b"]);
    /// ```
    pub fn delete_if_eq(&mut self, value: T) {
        self.compact(|element| element != value);
    }

    /// Returns a new sequence of the elements satisfying `predicate`.
    ///
    /// The result starts with a capacity of a quarter of this length.
    #[must_use]
    pub fn select<P: FnMut(T) -> bool>(&self, mut predicate: P) -> Self {
        let mut selected = Self::with_capacity(self.len / 4);
        for element in self {
            if predicate(element) {
                selected.push(element);
            }
        }
        selected
    }

    /// Returns a new sequence of the elements equal to `value`.
    #[must_use]
    pub fn select_eq(&self, value: T) -> Self {
        self.select(|element| element == value)
    }

    /// Overwrites every element satisfying `predicate` with `replacement`.
    pub fn replace_if<P: FnMut(T) -> bool>(&mut self, mut predicate: P, replacement: T) {
        for index in 0..self.len {
            if predicate(self.storage.get(index)) {
                self.storage.set(index, replacement);
            }
        }
    }

    /// Overwrites every element equal to `value` with `replacement`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [0, 1, 0].into();
    /// sequence.replace_if_eq(0, 7);
    /// assert_eq!(sequence, [7, 1, 7]);
    /// ```
    pub fn replace_if_eq(&mut self, value: T, replacement: T) {
        self.replace_if(|element| element == value, replacement);
    }

    /// Returns the index of the first element equal to `value`.
    #[must_use]
    pub fn find(&self, value: T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    /// Returns the indices of elements equal to `value`, stopping once
    /// `limit` matches have been found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::{MatchLimit, Sequence};
    ///
    /// let sequence: Sequence<i32> = [1, 0, 1, 1].into();
    /// assert_eq!(sequence.find_n(1, 2), [0, 2]);
    /// assert_eq!(sequence.find_n(1, 0), [0, 2, 3]);
    /// assert_eq!(sequence.find_n(1, MatchLimit::All), [0, 2, 3]);
    /// ```
    pub fn find_n<L: Into<MatchLimit>>(&self, value: T, limit: L) -> Sequence<usize> {
        let limit = limit.into();
        let mut indices = Sequence::new();
        for (index, element) in self.iter().enumerate() {
            if element == value {
                indices.push(index);
                if limit.is_reached(indices.len()) {
                    break;
                }
            }
        }
        indices
    }

    /// Removes repeated elements in place, keeping first occurrences in
    /// their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = [3, 1, 2, 1].into();
    /// sequence.uniq();
    /// assert_eq!(sequence, [3, 1, 2]);
    /// ```
    pub fn uniq(&mut self) {
        let mut seen = membership_set(self.len);
        self.compact(|element| seen.insert(element.membership_key()));
    }

    /// Gathers the elements at `indices`, in the order given, into a new
    /// sequence. Indices may repeat and need not be sorted.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] for the first index that
    /// is not below the length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<char> = ['a', 'b', 'c'].into();
    /// assert_eq!(sequence.values_at([2, 0, 2]).unwrap(), ['c', 'a', 'c']);
    /// assert!(sequence.values_at([3]).is_err());
    /// ```
    pub fn values_at<I>(&self, indices: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices = indices.into_iter();
        let mut values = Self::with_capacity(indices.size_hint().0);
        for index in indices {
            let value = self.get(index).ok_or(SequenceError::IndexOutOfBounds {
                index,
                length: self.len,
            })?;
            values.push(value);
        }
        Ok(values)
    }
}
