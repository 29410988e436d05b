//! Membership sets used by `uniq` and the set algebra.
//!
//! The hasher is selected by Cargo feature: `ahash` takes precedence over
//! `fxhash` (the default); with neither, the standard `RandomState` is used.

use std::collections::HashSet;

#[cfg(feature = "ahash")]
pub(crate) type MembershipHasher = ahash::RandomState;

#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub(crate) type MembershipHasher = rustc_hash::FxBuildHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type MembershipHasher = std::collections::hash_map::RandomState;

pub(crate) type MembershipSet<K> = HashSet<K, MembershipHasher>;

pub(crate) fn membership_set<K>(capacity: usize) -> MembershipSet<K> {
    HashSet::with_capacity_and_hasher(capacity, MembershipHasher::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_set_insert_reports_novelty() {
        let mut set = membership_set(4);
        assert!(set.insert(1_u32));
        assert!(!set.insert(1_u32));
        assert_eq!(set.len(), 1);
    }
}
