//! Cons-cell emulation: the first element is the car, the rest is the cdr.

use super::Sequence;
use super::View;
use super::operand::{Operand, gathered, scalar_of};
use super::storage::Storage;
use crate::element::Element;
use crate::error::SequenceError;

impl<T: Element> Sequence<T> {
    /// Returns the first element, or `None` if the sequence is empty.
    #[must_use]
    pub fn car(&self) -> Option<T> {
        self.get(0)
    }

    /// Returns a view over everything after the first element.
    ///
    /// No elements are copied. The view is empty when `len() <= 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<i32> = [1, 2, 3].into();
    /// assert_eq!(sequence.cdr(), [2, 3]);
    /// assert!(sequence.cdr().cdr().unwrap().cdr().unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn cdr(&self) -> View<T> {
        self.restrict_to(1, self.len)
    }

    /// Replaces the first element, creating it if the sequence is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] when the operand is a
    /// collection rather than a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = Sequence::new();
    /// sequence.rplaca(7).unwrap();
    /// assert_eq!(sequence, [7]);
    /// sequence.rplaca(8).unwrap();
    /// assert_eq!(sequence, [8]);
    /// assert!(sequence.rplaca([1, 2]).is_err());
    /// ```
    pub fn rplaca<O: Operand<T>>(&mut self, operand: O) -> Result<(), SequenceError> {
        let value = scalar_of(&operand)?;
        if self.is_empty() {
            self.push(value);
        } else {
            self.storage.set(0, value);
        }
        Ok(())
    }

    /// Replaces everything after the first element with the operand's
    /// elements.
    ///
    /// When the result does not fit, the sequence moves to a region of
    /// exactly `1 + n` slots. An empty operand truncates to the car. On an
    /// empty sequence the car becomes the zero value.
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
    /// sequence.rplacd([7, 8, 9]).unwrap();
    /// assert_eq!(sequence, [1, 7, 8, 9]);
    ///
    /// sequence.rplacd(Vec::<i32>::new()).unwrap();
    /// assert_eq!(sequence, [1]);
    /// ```
    pub fn rplacd<O: Operand<T>>(&mut self, operand: O) -> Result<(), SequenceError> {
        let incoming = gathered(&operand)?;
        let car = self.car().unwrap_or_else(T::zero);
        let length = incoming.len() + 1;
        if length > self.capacity() {
            let storage = Storage::allocate(length);
            storage.set(0, car);
            storage.write_slice(1, &incoming);
            self.install(storage, length);
        } else {
            self.storage.set(0, car);
            self.storage.write_slice(1, &incoming);
            self.len = length;
        }
        Ok(())
    }
}
