//! Element comparisons, sorting, shuffling and in-place arithmetic.
//!
//! Index-based comparisons and arithmetic index like slices do: an index at
//! or beyond the length panics.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Sequence;
use crate::element::{Element, Numeric, Signed};

impl<T: Element> Sequence<T> {
    /// Three-way comparison of the elements at `first` and `second`.
    ///
    /// Incomparable pairs (NaN) compare [`Ordering::Equal`].
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use slicekit::sequence::Sequence;
    ///
    /// let sequence: Sequence<f64> = [1.0, 2.0, f64::NAN].into();
    /// assert_eq!(sequence.compare(0, 1), Ordering::Less);
    /// assert_eq!(sequence.compare(1, 0), Ordering::Greater);
    /// assert_eq!(sequence.compare(0, 2), Ordering::Equal);
    /// ```
    #[must_use]
    pub fn compare(&self, first: usize, second: usize) -> Ordering {
        self.element(first).three_way(&self.element(second))
    }

    /// Compares the zero value against the element at `index`: `Less` when
    /// the element is positive.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn zero_compare(&self, index: usize) -> Ordering {
        T::zero().three_way(&self.element(index))
    }

    /// `s[first] < s[second]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn less(&self, first: usize, second: usize) -> bool {
        self.element(first) < self.element(second)
    }

    /// `s[first] <= s[second]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn at_least(&self, first: usize, second: usize) -> bool {
        self.element(first) <= self.element(second)
    }

    /// `s[first] == s[second]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn same(&self, first: usize, second: usize) -> bool {
        self.element(first) == self.element(second)
    }

    /// `s[first] >= s[second]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn at_most(&self, first: usize, second: usize) -> bool {
        self.element(first) >= self.element(second)
    }

    /// `s[first] > s[second]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn more(&self, first: usize, second: usize) -> bool {
        self.element(first) > self.element(second)
    }

    /// `zero < s[index]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn zero_less(&self, index: usize) -> bool {
        T::zero() < self.element(index)
    }

    /// `zero <= s[index]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn zero_at_least(&self, index: usize) -> bool {
        T::zero() <= self.element(index)
    }

    /// `zero == s[index]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn zero_same(&self, index: usize) -> bool {
        T::zero() == self.element(index)
    }

    /// `zero >= s[index]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn zero_at_most(&self, index: usize) -> bool {
        T::zero() >= self.element(index)
    }

    /// `zero > s[index]`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn zero_more(&self, index: usize) -> bool {
        T::zero() > self.element(index)
    }

    /// Sorts ascending in place using [`Element::total_order`].
    ///
    /// The region is kept, so views stay valid and observe the new order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<f32> = [3.0, -1.0, 2.5].into();
    /// sequence.sort();
    /// assert_eq!(sequence, [-1.0, 2.5, 3.0]);
    /// ```
    pub fn sort(&mut self) {
        let mut elements = self.to_vec();
        elements.sort_by(T::total_order);
        self.storage.write_slice(0, &elements);
    }

    /// Shuffles in place with a generator seeded from the operating system.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut StdRng::from_os_rng());
    }

    /// Shuffles in place with `rng` (Fisher–Yates: every permutation is
    /// equally likely).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<i32> = (0..10).collect();
    /// sequence.shuffle_with(&mut StdRng::seed_from_u64(7));
    /// sequence.sort();
    /// assert_eq!(sequence, (0..10).collect::<Vec<_>>());
    /// ```
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for index in (1..self.len).rev() {
            let other = rng.random_range(0..=index);
            self.storage.swap(index, other);
        }
    }
}

impl<T: Numeric> Sequence<T> {
    fn update<F: FnOnce(T) -> T>(&mut self, index: usize, operation: F) {
        let value = operation(self.element(index));
        self.storage.set(index, value);
    }

    fn combine<F: FnOnce(T, T) -> T>(&mut self, target: usize, source: usize, operation: F) {
        let operand = self.element(source);
        self.update(target, |value| operation(value, operand));
    }

    /// `s[index] += 1`. Integers wrap at their bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn increment(&mut self, index: usize) {
        self.update(index, |value| value.wrapping_add(T::one()));
    }

    /// `s[index] -= 1`. Integers wrap at their bounds.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn decrement(&mut self, index: usize) {
        self.update(index, |value| value.wrapping_sub(T::one()));
    }

    /// `s[target] += s[source]`.
    ///
    /// Integer arithmetic wraps at the type's bounds, so the result does not
    /// depend on the build profile. The same holds for the other operations
    /// in this family.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let mut sequence: Sequence<u16> = [2, 5].into();
    /// sequence.add(0, 1);
    /// sequence.multiply(1, 0);
    /// assert_eq!(sequence, [7, 35]);
    /// ```
    pub fn add(&mut self, target: usize, source: usize) {
        self.combine(target, source, |value, operand| value.wrapping_add(operand));
    }

    /// `s[target] -= s[source]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn subtract(&mut self, target: usize, source: usize) {
        self.combine(target, source, |value, operand| value.wrapping_sub(operand));
    }

    /// `s[target] *= s[source]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn multiply(&mut self, target: usize, source: usize) {
        self.combine(target, source, |value, operand| value.wrapping_mul(operand));
    }

    /// `s[target] /= s[source]`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range, or for integer division by
    /// zero.
    pub fn divide(&mut self, target: usize, source: usize) {
        self.combine(target, source, |value, operand| value.wrapping_div(operand));
    }
}

impl<T: Signed> Sequence<T> {
    /// `s[index] = -s[index]`. The integer minimum negates to itself.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn negate(&mut self, index: usize) {
        self.update(index, T::wrapping_neg);
    }
}
