//! Read-only traversal.
//!
//! Callbacks come in two explicit shapes, value-only and index-plus-value,
//! instead of one entry point that inspects its argument at runtime.

use std::cell::Cell;
use std::iter::FusedIterator;

use super::Sequence;
use super::storage::Storage;
use crate::element::Element;

impl<T: Element> Sequence<T> {
    /// Returns an iterator over the elements by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = [1, 2, 3].into();
    /// let doubled: Vec<i32> = sequence.iter().map(|element| element * 2).collect();
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// assert_eq!(sequence.iter().rev().next(), Some(3));
    /// ```
    pub fn iter(&self) -> SequenceIterator<'_, T> {
        SequenceIterator::new(self.storage.cells(0..self.len))
    }

    /// Calls `function` with every element, front to back.
    pub fn each<F: FnMut(T)>(&self, function: F) {
        self.iter().for_each(function);
    }

    /// Calls `function` with every index and element, front to back.
    pub fn each_with_index<F: FnMut(usize, T)>(&self, mut function: F) {
        for (index, element) in self.iter().enumerate() {
            function(index, element);
        }
    }

    /// Calls `function` with every element, back to front.
    pub fn reverse_each<F: FnMut(T)>(&self, function: F) {
        self.iter().rev().for_each(function);
    }

    /// Calls `function` with every index and element, back to front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<char> = ['a', 'b'].into();
    /// let mut visited = Vec::new();
    /// sequence.reverse_each_with_index(|index, element| visited.push((index, element)));
    /// assert_eq!(visited, vec![(1, 'b'), (0, 'a')]);
    /// ```
    pub fn reverse_each_with_index<F: FnMut(usize, T)>(&self, mut function: F) {
        for (index, element) in self.iter().enumerate().rev() {
            function(index, element);
        }
    }

    /// Returns the index of the first element failing `predicate`, or the
    /// length if every element satisfies it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = [2, 4, 5, 6].into();
    /// assert_eq!(sequence.position_while(|element| element % 2 == 0), 2);
    /// assert_eq!(sequence.position_while(|element| element > 0), 4);
    /// ```
    pub fn position_while<P: FnMut(T) -> bool>(&self, mut predicate: P) -> usize {
        self.position_while_indexed(|_, element| predicate(element))
    }

    /// Index-aware form of [`Sequence::position_while`].
    pub fn position_while_indexed<P: FnMut(usize, T) -> bool>(&self, mut predicate: P) -> usize {
        self.iter()
            .enumerate()
            .position(|(index, element)| !predicate(index, element))
            .unwrap_or(self.len)
    }

    /// Returns the index of the first element satisfying `predicate`, or the
    /// length if none does.
    pub fn position_until<P: FnMut(T) -> bool>(&self, mut predicate: P) -> usize {
        self.position_until_indexed(|_, element| predicate(element))
    }

    /// Index-aware form of [`Sequence::position_until`].
    pub fn position_until_indexed<P: FnMut(usize, T) -> bool>(&self, mut predicate: P) -> usize {
        self.iter()
            .enumerate()
            .position(|(index, element)| predicate(index, element))
            .unwrap_or(self.len)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A by-value iterator over a sequence or view.
pub struct SequenceIterator<'a, T> {
    cells: std::slice::Iter<'a, Cell<T>>,
}

impl<'a, T> SequenceIterator<'a, T> {
    pub(crate) fn new(cells: &'a [Cell<T>]) -> Self {
        Self { cells: cells.iter() }
    }
}

impl<T: Element> Iterator for SequenceIterator<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cells.next().map(Cell::get)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl<T: Element> DoubleEndedIterator for SequenceIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.cells.next_back().map(Cell::get)
    }
}

impl<T: Element> ExactSizeIterator for SequenceIterator<'_, T> {}

impl<T: Element> FusedIterator for SequenceIterator<'_, T> {}

/// An owning iterator over a sequence.
pub struct SequenceIntoIterator<T> {
    storage: Storage<T>,
    front: usize,
    back: usize,
}

impl<T: Element> Iterator for SequenceIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        (self.front < self.back).then(|| {
            let element = self.storage.get(self.front);
            self.front += 1;
            element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T: Element> DoubleEndedIterator for SequenceIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        (self.front < self.back).then(|| {
            self.back -= 1;
            self.storage.get(self.back)
        })
    }
}

impl<T: Element> ExactSizeIterator for SequenceIntoIterator<T> {}

impl<T: Element> FusedIterator for SequenceIntoIterator<T> {}

impl<T: Element> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SequenceIntoIterator {
            storage: self.storage,
            front: 0,
            back: self.len,
        }
    }
}

impl<'a, T: Element> IntoIterator for &'a Sequence<T> {
    type Item = T;
    type IntoIter = SequenceIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
