//! Property-based tests for `Sequence` laws.
//!
//! Set-algebra results are compared as sets: their order is unspecified.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use slicekit::sequence::Sequence;

fn as_set(sequence: &Sequence<i32>) -> HashSet<i32> {
    sequence.iter().collect()
}

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20..20_i32, 0..40)
}

// =============================================================================
// Compaction Laws
// =============================================================================

proptest! {
    /// Trim Law: trim(i, j) leaves exactly the slice [i, j)
    #[test]
    fn prop_trim_yields_slice(
        elements in small_values(),
        first in 0..50_usize,
        second in 0..50_usize,
    ) {
        let length = elements.len();
        let start = first.min(second).min(length);
        let end = first.max(second).min(length);

        let mut sequence = Sequence::from(elements.clone());
        sequence.trim(start, end);
        prop_assert_eq!(sequence, elements[start..end].to_vec());
    }

    /// Cut Law: cut(i, j) removes exactly the slice [i, j)
    #[test]
    fn prop_cut_removes_slice(
        elements in small_values(),
        first in 0..50_usize,
        second in 0..50_usize,
    ) {
        let length = elements.len();
        let start = first.min(second).min(length);
        let end = first.max(second).min(length);

        let mut expected = elements.clone();
        expected.drain(start..end);

        let mut sequence = Sequence::from(elements);
        sequence.cut(start, end);
        prop_assert_eq!(sequence, expected);
    }

    /// Uniq Idempotence: uniq(uniq(s)) == uniq(s)
    #[test]
    fn prop_uniq_is_idempotent(elements in small_values()) {
        let mut once = Sequence::from(elements);
        once.uniq();
        let mut twice = once.clone();
        twice.uniq();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.len(), as_set(&once).len());
    }

    /// Partition Law: keep_if(p) and delete_if(p) split the input, each in order
    #[test]
    fn prop_keep_and_delete_partition(elements in small_values(), pivot in -20..20_i32) {
        let predicate = |element: i32| element < pivot;

        let mut kept = Sequence::from(elements.clone());
        kept.keep_if(predicate);
        let mut deleted = Sequence::from(elements.clone());
        deleted.delete_if(predicate);

        let expected_kept: Vec<i32> = elements.iter().copied().filter(|&e| predicate(e)).collect();
        let expected_deleted: Vec<i32> = elements.iter().copied().filter(|&e| !predicate(e)).collect();
        prop_assert_eq!(&kept, &expected_kept);
        prop_assert_eq!(&deleted, &expected_deleted);
        prop_assert_eq!(kept.len() + deleted.len(), elements.len());
    }

    /// Select Law: select(p) matches keep_if(p) without touching the source
    #[test]
    fn prop_select_matches_keep_if(elements in small_values()) {
        let sequence = Sequence::from(elements.clone());
        let selected = sequence.select(|element| element % 3 == 0);
        let mut kept = sequence.clone();
        kept.keep_if(|element| element % 3 == 0);
        prop_assert_eq!(selected, kept);
        prop_assert_eq!(sequence, elements);
    }
}

// =============================================================================
// Set Laws
// =============================================================================

proptest! {
    /// Union contains both inputs
    #[test]
    fn prop_union_is_superset(left in small_values(), right in small_values()) {
        let left = Sequence::from(left);
        let right = Sequence::from(right);
        let union = as_set(&left.set_union(&right));
        prop_assert!(as_set(&left).is_subset(&union));
        prop_assert!(as_set(&right).is_subset(&union));
        prop_assert_eq!(union, &as_set(&left) | &as_set(&right));
    }

    /// Intersection is contained in both inputs
    #[test]
    fn prop_intersection_is_subset(left in small_values(), right in small_values()) {
        let left = Sequence::from(left);
        let right = Sequence::from(right);
        let intersection = left.set_intersection(&right);
        let members = as_set(&intersection);
        prop_assert_eq!(intersection.len(), members.len());
        prop_assert!(members.is_subset(&as_set(&left)));
        prop_assert!(members.is_subset(&as_set(&right)));
    }

    /// The left input is partitioned by the intersection and the part of the
    /// symmetric difference drawn from it
    #[test]
    fn prop_left_partitioned_by_intersection_and_difference(
        left in small_values(),
        right in small_values(),
    ) {
        let left = Sequence::from(left);
        let right = Sequence::from(right);
        let left_set = as_set(&left);
        let intersection = as_set(&left.set_intersection(&right));
        let difference = as_set(&left.set_difference(&right));

        let only_left: HashSet<i32> = difference.intersection(&left_set).copied().collect();
        prop_assert!(intersection.is_disjoint(&only_left));
        prop_assert_eq!(&intersection | &only_left, left_set);
        prop_assert_eq!(difference, &as_set(&left) ^ &as_set(&right));
    }
}

// =============================================================================
// Ordering Laws
// =============================================================================

proptest! {
    /// Sort yields an ascending permutation
    #[test]
    fn prop_sort_is_ascending_permutation(elements in prop::collection::vec(any::<f64>(), 0..40)) {
        let mut sequence = Sequence::from(elements.clone());
        sequence.sort();

        let mut expected = elements;
        expected.sort_by(f64::total_cmp);
        let sorted = sequence.to_vec();
        prop_assert_eq!(sorted.len(), expected.len());
        for (actual, wanted) in sorted.iter().zip(&expected) {
            prop_assert_eq!(actual.to_bits(), wanted.to_bits());
        }
    }

    /// Shuffle is a permutation
    #[test]
    fn prop_shuffle_is_permutation(elements in small_values(), seed in any::<u64>()) {
        let mut sequence = Sequence::from(elements.clone());
        sequence.shuffle_with(&mut StdRng::seed_from_u64(seed));

        let mut shuffled = sequence.to_vec();
        let mut original = elements;
        shuffled.sort_unstable();
        original.sort_unstable();
        prop_assert_eq!(shuffled, original);
    }

    /// Reverse is an involution
    #[test]
    fn prop_reverse_twice_is_identity(elements in small_values()) {
        let mut sequence = Sequence::from(elements.clone());
        sequence.reverse();
        sequence.reverse();
        prop_assert_eq!(sequence, elements);
    }
}

// =============================================================================
// Capacity Laws
// =============================================================================

proptest! {
    /// Appending never shrinks capacity and keeps len <= capacity
    #[test]
    fn prop_append_keeps_length_within_capacity(chunks in prop::collection::vec(small_values(), 0..10)) {
        let mut sequence: Sequence<i32> = Sequence::new();
        let mut expected = Vec::new();
        for chunk in chunks {
            let capacity = sequence.capacity();
            sequence.append(chunk.clone()).unwrap();
            expected.extend(chunk);
            prop_assert!(sequence.capacity() >= capacity);
            prop_assert!(sequence.len() <= sequence.capacity());
        }
        prop_assert_eq!(sequence, expected);
    }

    /// Insert places the operand at the index and shifts the tail
    #[test]
    fn prop_insert_matches_vec_splice(
        elements in small_values(),
        incoming in small_values(),
        position in 0..50_usize,
    ) {
        let index = position.min(elements.len());
        let mut expected = elements.clone();
        expected.splice(index..index, incoming.iter().copied());

        let mut sequence = Sequence::from(elements);
        sequence.insert(index, incoming).unwrap();
        prop_assert_eq!(sequence, expected);
    }
}
