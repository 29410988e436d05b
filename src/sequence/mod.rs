//! Growable sequences with bulk operations.
//!
//! [`Sequence`] is a contiguous, growable array of [`Element`] values with
//! Lisp/Ruby-style operations: in-place compaction, set algebra, cons-cell
//! emulation, block copy/clear and explicit capacity management.
//!
//! # Capacity
//!
//! `len() <= capacity()` always holds. Shrinking never reallocates. Growing
//! beyond the capacity always installs a fresh region: [`Sequence::extend_by`]
//! and [`Sequence::expand`] size it exactly, [`Sequence::append`] doubles.
//!
//! # Views
//!
//! [`Sequence::cdr`] and [`Sequence::restrict_to`] return a [`View`]: a
//! non-owning alias into the same region. Writes through a view are seen by
//! the owner and the other way round. Once the owner installs a new region,
//! earlier views are stale and every access through them fails with
//! [`SequenceError::StaleView`](crate::SequenceError::StaleView).
//!
//! ```rust
//! use slicekit::sequence;
//! use slicekit::sequence::Sequence;
//!
//! let mut numbers: Sequence<i32> = sequence![1, 2, 3];
//! let rest = numbers.cdr();
//! rest.set(0, 20).unwrap();
//! assert_eq!(numbers, [1, 20, 3]);
//!
//! numbers.prepend(0).unwrap(); // always reallocates
//! assert!(rest.is_stale());
//! assert!(rest.get(0).is_err());
//! ```
//!
//! # Operands and criteria
//!
//! Operations that accept "an element or a collection" take an [`Operand`].
//! Filters come in two forms: a predicate (`keep_if`) and a literal value
//! compared for equality (`keep_if_eq`).
//!
//! ```rust
//! use slicekit::sequence::Sequence;
//!
//! let mut numbers: Sequence<i32> = Sequence::new();
//! numbers.append(5).unwrap();
//! numbers.append([1, 2, 1]).unwrap();
//! numbers.delete_if_eq(1);
//! assert_eq!(numbers, [5, 2]);
//! numbers.keep_if(|element| element > 2);
//! assert_eq!(numbers, [5]);
//! ```

mod capacity;
mod filter;
mod iteration;
mod list;
mod membership;
mod mutation;
mod operand;
mod ordering;
mod set;
mod storage;
mod view;

use std::fmt;

use crate::element::Element;

pub use filter::MatchLimit;
pub use iteration::{SequenceIntoIterator, SequenceIterator};
pub use operand::{Dynamic, Operand, OperandBuffer};
pub use view::View;

use storage::{Generation, Storage};

/// A growable, ordered container of [`Element`] values.
///
/// # Examples
///
/// ```rust
/// use slicekit::sequence::Sequence;
///
/// let mut sequence: Sequence<i32> = [3, 1, 2, 1].into();
/// sequence.uniq();
/// assert_eq!(sequence, [3, 1, 2]);
///
/// sequence.cut(0, 1);
/// assert_eq!(sequence, [1, 2]);
/// assert_eq!(format!("{sequence}"), "(1 2)");
/// ```
pub struct Sequence<T> {
    storage: Storage<T>,
    len: usize,
    generation: Generation,
}

// Storage is shared through `Rc`, so neither sequences nor views may cross threads.
static_assertions::assert_not_impl_any!(Sequence<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Sequence<f64>: Send, Sync);
static_assertions::assert_not_impl_any!(View<i32>: Send, Sync);

impl<T: Element> Sequence<T> {
    /// Creates a new empty sequence with no capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<u8> = Sequence::new();
    /// assert!(sequence.is_empty());
    /// assert_eq!(sequence.capacity(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence able to hold `capacity` elements without reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(Storage::allocate(capacity), 0)
    }

    pub(crate) fn from_storage(storage: Storage<T>, len: usize) -> Self {
        debug_assert!(len <= storage.capacity());
        Self {
            storage,
            len,
            generation: Generation::default(),
        }
    }

    /// Returns the number of logically present elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current region can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns how many regions this sequence has installed since it was created.
    ///
    /// Views taken at an older generation are stale.
    #[inline]
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.current()
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        (index < self.len).then(|| self.storage.get(index))
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).map(|index| self.storage.get(index))
    }

    /// Returns `true` if any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.iter().any(|element| element == value)
    }

    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns a view over `[start, end)` without copying.
    ///
    /// Both bounds are clamped to the length; an inverted range yields an
    /// empty view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = [1, 2, 3, 4].into();
    /// let middle = sequence.restrict_to(1, 3);
    /// assert_eq!(middle.to_vec().unwrap(), vec![2, 3]);
    /// assert!(sequence.restrict_to(3, 1).is_empty());
    /// ```
    #[must_use]
    pub fn restrict_to(&self, start: usize, end: usize) -> View<T> {
        let start = start.min(self.len);
        let end = end.clamp(start, self.len);
        View::new(
            self.storage.clone(),
            start,
            end - start,
            self.generation.clone(),
        )
    }

    /// Replaces the backing region, invalidating every outstanding view.
    pub(crate) fn install(&mut self, storage: Storage<T>, len: usize) {
        debug_assert!(len <= storage.capacity());
        let old_capacity = self.storage.capacity();
        let new_capacity = storage.capacity();
        self.storage = storage;
        self.len = len;
        let generation = self.generation.advance();
        tracing::trace!(
            target: "slicekit::storage",
            old_capacity,
            new_capacity,
            len,
            generation,
            "installed storage region"
        );
    }

    #[inline]
    pub(crate) fn assert_in_bounds(&self, index: usize) {
        assert!(
            index < self.len,
            "index {index} out of bounds for length {}",
            self.len
        );
    }

    /// Element at `index`, panicking like slice indexing when out of range.
    #[inline]
    pub(crate) fn element(&self, index: usize) -> T {
        self.assert_in_bounds(index);
        self.storage.get(index)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Element> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy into a fresh region of the same capacity. Views of the original
/// do not alias the clone.
impl<T: Element> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let storage = Storage::allocate(self.capacity());
        storage.copy_from(0, &self.storage, 0..self.len);
        Self::from_storage(storage, self.len)
    }
}

impl<T: Element> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, " ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

impl<T: Element> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Element> PartialEq<[T]> for Sequence<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl<T: Element> PartialEq<&[T]> for Sequence<T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Element> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

/// A stale view never equals anything.
impl<T: Element> PartialEq<View<T>> for Sequence<T> {
    fn eq(&self, other: &View<T>) -> bool {
        other
            .iter()
            .is_ok_and(|elements| self.len == other.len() && self.iter().eq(elements))
    }
}

impl<T: Element> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::new();
        Extend::extend(&mut sequence, iter);
        sequence
    }
}

impl<T: Element> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_for_append(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<T: Element> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        let storage = Storage::allocate(elements.len());
        storage.write_slice(0, elements);
        Self::from_storage(storage, elements.len())
    }
}

impl<T: Element> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from(elements.as_slice())
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(elements.as_slice())
    }
}

impl<T: Element> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.to_vec()
    }
}

/// Creates a [`Sequence`] from a list of elements.
///
/// # Examples
///
/// ```rust
/// use slicekit::sequence;
/// use slicekit::sequence::Sequence;
///
/// let empty: Sequence<i32> = sequence![];
/// assert!(empty.is_empty());
///
/// let numbers = sequence![1, 2, 3];
/// assert_eq!(numbers.capacity(), 3);
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::sequence::Sequence::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Sequence::from([$($element),+])
    };
}
