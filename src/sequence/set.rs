//! Set algebra over distinct values.
//!
//! Results are new sequences holding each value at most once. Membership is
//! decided by [`Element::membership_key`], so `0.0` and `-0.0` are one value.
//! Callers should treat the order of union and difference results as
//! unspecified.

use super::Sequence;
use super::membership::membership_set;
use crate::element::Element;

impl<T: Element> Sequence<T> {
    /// Returns the values present in both sequences, each once, ordered by
    /// first appearance in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::sequence::Sequence;
    ///
    /// let left: Sequence<i32> = [1, 2, 2, 3].into();
    /// let right: Sequence<i32> = [3, 3, 2, 5].into();
    /// assert_eq!(left.set_intersection(&right), [3, 2]);
    /// ```
    #[must_use]
    pub fn set_intersection(&self, other: &Self) -> Self {
        let mut remaining = membership_set(self.len);
        for element in self {
            remaining.insert(element.membership_key());
        }
        let mut intersection = Self::new();
        for element in other {
            if remaining.remove(&element.membership_key()) {
                intersection.push(element);
            }
        }
        intersection
    }

    /// Returns every value present in either sequence, each once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use slicekit::sequence::Sequence;
    ///
    /// let left: Sequence<i32> = [1, 2, 2].into();
    /// let right: Sequence<i32> = [2, 3].into();
    /// let union: HashSet<i32> = left.set_union(&right).into_iter().collect();
    /// assert_eq!(union, HashSet::from([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn set_union(&self, other: &Self) -> Self {
        let mut seen = membership_set(self.len + other.len);
        self.iter()
            .chain(other.iter())
            .filter(|element| seen.insert(element.membership_key()))
            .collect()
    }

    /// Returns the symmetric difference: values present in exactly one of
    /// the two sequences, each once.
    #[must_use]
    pub fn set_difference(&self, other: &Self) -> Self {
        let mut left = membership_set(self.len);
        for element in self {
            left.insert(element.membership_key());
        }
        let mut right = membership_set(other.len);
        for element in other {
            right.insert(element.membership_key());
        }

        let mut emitted = membership_set(left.len() + right.len());
        let mut difference = Self::new();
        for element in self {
            let key = element.membership_key();
            if !right.contains(&key) && emitted.insert(key) {
                difference.push(element);
            }
        }
        for element in other {
            let key = element.membership_key();
            if !left.contains(&key) && emitted.insert(key) {
                difference.push(element);
            }
        }
        difference
    }
}
