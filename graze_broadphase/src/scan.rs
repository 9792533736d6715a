// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free scan primitives over arbitrary snapshots.
//!
//! These operate on any [`Snapshot`] — the shared registry's, or one the
//! host assembled by hand for a localized query ("check only the tiles near
//! the player"). They are purely geometric: self-exclusion and the overlap
//! predicate, nothing else. Participant flags and announcement live in the
//! [`Broadphase`](crate::Broadphase) facade.

use core::fmt::Debug;

use graze_aabb::Aabb;
use graze_registry::Snapshot;

/// Visit every snapshot entry whose AABB overlaps `query`.
///
/// Entries are visited in snapshot order; the entry whose key equals `owner`
/// is skipped (an entity never collides with itself). Calls `f(key, aabb)`
/// once per overlapping entry.
pub fn visit_overlaps<K, T, F>(owner: K, query: &Aabb<T>, snapshot: &Snapshot<K, T>, mut f: F)
where
    K: Copy + Eq + Debug,
    T: Copy + PartialOrd + Debug,
    F: FnMut(K, Aabb<T>),
{
    for (key, aabb) in snapshot.iter() {
        if key == owner {
            continue;
        }
        if query.overlaps(&aabb) {
            f(key, aabb);
        }
    }
}

/// Whether `query` overlaps any snapshot entry other than `owner`'s.
///
/// Stops at the first hit.
pub fn any_overlap<K, T>(owner: K, query: &Aabb<T>, snapshot: &Snapshot<K, T>) -> bool
where
    K: Copy + Eq + Debug,
    T: Copy + PartialOrd + Debug,
{
    first_overlap(owner, query, snapshot).is_some()
}

/// The first snapshot entry (in snapshot order) overlapping `query`,
/// excluding `owner`'s own entry.
pub fn first_overlap<K, T>(owner: K, query: &Aabb<T>, snapshot: &Snapshot<K, T>) -> Option<K>
where
    K: Copy + Eq + Debug,
    T: Copy + PartialOrd + Debug,
{
    snapshot
        .iter()
        .find(|(key, aabb)| *key != owner && query.overlaps(aabb))
        .map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn snap() -> Snapshot<u32, f64> {
        [
            (1, Aabb::new(0.0, 0.0, 2.0, 2.0)),
            (2, Aabb::new(1.0, 1.0, 3.0, 3.0)),
            (3, Aabb::new(10.0, 10.0, 12.0, 12.0)),
            (4, Aabb::new(1.5, 1.5, 2.5, 2.5)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn visits_hits_in_snapshot_order_excluding_owner() {
        let query = Aabb::new(0.5, 0.5, 2.0, 2.0);
        let mut hits: Vec<u32> = Vec::new();
        visit_overlaps(1, &query, &snap(), |k, _| hits.push(k));
        assert_eq!(hits, [2, 4]);
    }

    #[test]
    fn self_only_snapshot_has_no_overlaps() {
        let only: Snapshot<u32, f64> = [(1, Aabb::new(0.0, 0.0, 2.0, 2.0))].into_iter().collect();
        let query = Aabb::new(0.0, 0.0, 2.0, 2.0);
        assert!(!any_overlap(1, &query, &only));
        assert_eq!(first_overlap(1, &query, &only), None);
        let mut count = 0;
        visit_overlaps(1, &query, &only, |_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn first_overlap_respects_snapshot_order() {
        let query = Aabb::new(0.5, 0.5, 2.0, 2.0);
        // Entity 1's box is first in the snapshot, so a foreign owner sees it first.
        assert_eq!(first_overlap(99, &query, &snap()), Some(1));
        // Entity 1 itself sees the next hit in order.
        assert_eq!(first_overlap(1, &query, &snap()), Some(2));
    }

    #[test]
    fn empty_snapshot_yields_nothing() {
        let empty: Snapshot<u32, f64> = Snapshot::from_entries(Vec::new());
        assert!(!any_overlap(1, &Aabb::new(0.0, 0.0, 5.0, 5.0), &empty));
    }
}
