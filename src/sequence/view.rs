//! Non-owning windows into a sequence's region.

use std::fmt;

use super::Sequence;
use super::iteration::SequenceIterator;
use super::storage::{Generation, Storage};
use crate::element::Element;
use crate::error::SequenceError;

/// A window of `[offset, offset + len)` into the region of a [`Sequence`].
///
/// A view shares memory with its owner: writes through either side are seen
/// by the other. The view records the owner's generation when it is taken.
/// After the owner installs a new region the view is stale, and every
/// accessor returns [`SequenceError::StaleView`] instead of reading memory
/// the owner no longer uses.
///
/// Operations that keep the region (`cut`, `trim`, `keep_if`, in-place
/// `expand`, ...) leave views valid; what they read afterwards is whatever
/// the owner has written into the shared slots.
///
/// # Examples
///
/// ```rust
/// use slicekit::sequence::Sequence;
/// use slicekit::SequenceError;
///
/// let mut sequence: Sequence<i32> = [1, 2, 3].into();
/// let tail = sequence.cdr();
/// assert_eq!(tail.to_vec().unwrap(), vec![2, 3]);
///
/// sequence.set(2, 30).unwrap();
/// assert_eq!(tail.get(1), Ok(30));
///
/// sequence.append([4, 5]).unwrap();
/// assert!(matches!(tail.get(0), Err(SequenceError::StaleView { .. })));
/// ```
pub struct View<T> {
    storage: Storage<T>,
    offset: usize,
    len: usize,
    generation: Generation,
    taken_at: u64,
}

impl<T: Element> View<T> {
    pub(crate) fn new(
        storage: Storage<T>,
        offset: usize,
        len: usize,
        generation: Generation,
    ) -> Self {
        debug_assert!(offset + len <= storage.capacity());
        let taken_at = generation.current();
        Self {
            storage,
            offset,
            len,
            generation,
            taken_at,
        }
    }

    /// Returns the number of elements in the window.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the window is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the owner's generation at the time the view was taken.
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.taken_at
    }

    /// Returns `true` once the owner has moved to a new region.
    #[inline]
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.generation.current() != self.taken_at
    }

    fn check(&self) -> Result<(), SequenceError> {
        let current_generation = self.generation.current();
        if current_generation == self.taken_at {
            Ok(())
        } else {
            Err(SequenceError::StaleView {
                view_generation: self.taken_at,
                current_generation,
            })
        }
    }

    fn checked_index(&self, index: usize) -> Result<usize, SequenceError> {
        self.check()?;
        if index < self.len {
            Ok(self.offset + index)
        } else {
            Err(SequenceError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        }
    }

    /// Returns the element at `index` within the window.
    ///
    /// # Errors
    ///
    /// [`SequenceError::StaleView`] if the view is stale, otherwise
    /// [`SequenceError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T, SequenceError> {
        let index = self.checked_index(index)?;
        Ok(self.storage.get(index))
    }

    /// Writes `value` at `index`; the owner sees the write.
    ///
    /// # Errors
    ///
    /// Same as [`View::get`].
    pub fn set(&self, index: usize, value: T) -> Result<(), SequenceError> {
        let index = self.checked_index(index)?;
        self.storage.set(index, value);
        Ok(())
    }

    /// Returns the first element of the window, `None` if it is empty.
    ///
    /// # Errors
    ///
    /// [`SequenceError::StaleView`] if the view is stale.
    pub fn car(&self) -> Result<Option<T>, SequenceError> {
        self.check()?;
        Ok((self.len > 0).then(|| self.storage.get(self.offset)))
    }

    /// Returns the window minus its first element.
    ///
    /// # Errors
    ///
    /// [`SequenceError::StaleView`] if the view is stale.
    pub fn cdr(&self) -> Result<Self, SequenceError> {
        self.restrict_to(1, self.len)
    }

    /// Narrows the window to `[start, end)` relative to its own start.
    ///
    /// Bounds are clamped the same way as [`Sequence::restrict_to`].
    ///
    /// # Errors
    ///
    /// [`SequenceError::StaleView`] if the view is stale.
    pub fn restrict_to(&self, start: usize, end: usize) -> Result<Self, SequenceError> {
        self.check()?;
        let start = start.min(self.len);
        let end = end.clamp(start, self.len);
        Ok(Self {
            storage: self.storage.clone(),
            offset: self.offset + start,
            len: end - start,
            generation: self.generation.clone(),
            taken_at: self.taken_at,
        })
    }

    /// Returns an iterator over the window.
    ///
    /// # Errors
    ///
    /// [`SequenceError::StaleView`] if the view is stale.
    pub fn iter(&self) -> Result<SequenceIterator<'_, T>, SequenceError> {
        self.check()?;
        Ok(SequenceIterator::new(
            self.storage.cells(self.offset..self.offset + self.len),
        ))
    }

    /// Copies the window into a new, independent sequence.
    ///
    /// # Errors
    ///
    /// [`SequenceError::StaleView`] if the view is stale.
    pub fn to_sequence(&self) -> Result<Sequence<T>, SequenceError> {
        self.check()?;
        let storage = Storage::allocate(self.len);
        storage.copy_from(0, &self.storage, self.offset..self.offset + self.len);
        Ok(Sequence::from_storage(storage, self.len))
    }

    /// Copies the window into a `Vec`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::StaleView`] if the view is stale.
    pub fn to_vec(&self) -> Result<Vec<T>, SequenceError> {
        Ok(self.iter()?.collect())
    }

    fn matches<I: Iterator<Item = T>>(&self, length: usize, elements: I) -> bool {
        self.len == length && self.iter().is_ok_and(|mine| mine.eq(elements))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Clones the handle; the clone aliases the same window.
impl<T> Clone for View<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            offset: self.offset,
            len: self.len,
            generation: self.generation.clone(),
            taken_at: self.taken_at,
        }
    }
}

impl<T: Element> fmt::Debug for View<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.iter() {
            Ok(elements) => formatter.debug_list().entries(elements).finish(),
            Err(_) => formatter
                .debug_struct("View")
                .field("stale", &true)
                .field("generation", &self.taken_at)
                .finish(),
        }
    }
}

/// Stale views compare unequal to everything, themselves included.
impl<T: Element> PartialEq for View<T> {
    fn eq(&self, other: &Self) -> bool {
        other
            .iter()
            .is_ok_and(|elements| self.matches(other.len, elements))
    }
}

impl<T: Element> PartialEq<[T]> for View<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.matches(other.len(), other.iter().copied())
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for View<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Element> PartialEq<Vec<T>> for View<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: Element> PartialEq<Sequence<T>> for View<T> {
    fn eq(&self, other: &Sequence<T>) -> bool {
        self.matches(other.len(), other.iter())
    }
}
