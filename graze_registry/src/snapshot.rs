// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-time registry copies.

use alloc::vec::Vec;
use core::fmt::Debug;

use graze_aabb::Aabb;

/// An owned, point-in-time copy of registry entries.
///
/// Snapshots are what scans iterate: because the entries are copied out of
/// the live registry, a collision callback that mutates the registry cannot
/// change the set of partners an in-progress scan visits. Entries preserve
/// the registry's insertion order.
///
/// Snapshots can also be assembled from any source of `(key, aabb)` pairs —
/// e.g. "just the tile entities near the player" — for localized queries
/// that never touch the shared registry:
///
/// ```
/// use graze_aabb::Aabb;
/// use graze_registry::Snapshot;
///
/// let snap: Snapshot<u32, f64> = [
///     (1, Aabb::new(0.0, 0.0, 1.0, 1.0)),
///     (2, Aabb::new(2.0, 0.0, 3.0, 1.0)),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(snap.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Snapshot<K, T> {
    entries: Vec<(K, Aabb<T>)>,
}

impl<K, T> Snapshot<K, T>
where
    K: Copy + Eq + Debug,
    T: Copy + PartialOrd + Debug,
{
    /// Wrap an already-collected entry list.
    pub fn from_entries(entries: Vec<(K, Aabb<T>)>) -> Self {
        Self { entries }
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, aabb)` pairs in snapshot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Aabb<T>)> + '_ {
        self.entries.iter().copied()
    }

    /// The AABB recorded for `key` at snapshot time, if present.
    ///
    /// Linear lookup; snapshots are scan fodder, not an index.
    pub fn aabb_of(&self, key: K) -> Option<Aabb<T>> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, aabb)| *aabb)
    }
}

impl<K, T> FromIterator<(K, Aabb<T>)> for Snapshot<K, T>
where
    K: Copy + Eq + Debug,
    T: Copy + PartialOrd + Debug,
{
    fn from_iter<I: IntoIterator<Item = (K, Aabb<T>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_snapshot_preserves_order() {
        let snap: Snapshot<u8, i64> = [
            (3, Aabb::new(0, 0, 1, 1)),
            (1, Aabb::new(2, 0, 3, 1)),
            (2, Aabb::new(4, 0, 5, 1)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<u8> = snap.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [3, 1, 2]);
        assert_eq!(snap.aabb_of(1), Some(Aabb::new(2, 0, 3, 1)));
        assert_eq!(snap.aabb_of(9), None);
    }
}
