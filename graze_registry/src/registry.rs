// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable entity → AABB mapping and its error type.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use graze_aabb::Aabb;
use hashbrown::HashMap;

use crate::snapshot::Snapshot;

/// Errors reported by registry mutation.
///
/// All variants are local, recoverable conditions; none poison the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// `track` was called for an identity that is already tracked.
    DuplicateEntity,
    /// `update` or `untrack` was called for an identity that is not tracked.
    NotFound,
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateEntity => write!(f, "entity is already tracked"),
            Self::NotFound => write!(f, "entity is not tracked"),
        }
    }
}

impl core::error::Error for RegistryError {}

/// Mutable mapping from entity identity to its last-known AABB.
///
/// `K` is the host's opaque entity identity: any cheap, hashable,
/// equality-comparable handle that stays stable for the entity's tracked
/// lifetime. The registry holds at most one entry per identity.
///
/// Iteration — and therefore [`snapshot`][Self::snapshot] order, and the
/// order broad-phase scans visit partners in — is **insertion order**:
/// entities appear in the order they were tracked, with untracked entries
/// closing the gap. This makes first-match queries deterministic.
///
/// Storage is an ordered entry vector plus a key → slot map; lookups are
/// O(1), removal is O(n) to preserve order. The broad phase scans linearly
/// anyway, so registry sizes are expected to stay small.
#[derive(Clone, Debug)]
pub struct Registry<K, T> {
    entries: Vec<(K, Aabb<T>)>,
    slots: HashMap<K, usize>,
}

impl<K, T> Registry<K, T>
where
    K: Copy + Eq + Hash + Debug,
    T: Copy + PartialOrd + Debug,
{
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Create an empty registry with room for at least `n` entities.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            slots: HashMap::with_capacity(n),
        }
    }

    /// Number of tracked entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entities are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is currently tracked.
    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(&key)
    }

    /// The last-known AABB for `key`, if tracked.
    pub fn get(&self, key: K) -> Option<Aabb<T>> {
        self.slots.get(&key).map(|&i| self.entries[i].1)
    }

    /// Start tracking `key` with its initial AABB.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateEntity`] if `key` is already tracked; the
    /// existing entry is left untouched.
    pub fn track(&mut self, key: K, aabb: Aabb<T>) -> Result<(), RegistryError> {
        if self.slots.contains_key(&key) {
            return Err(RegistryError::DuplicateEntity);
        }
        self.slots.insert(key, self.entries.len());
        self.entries.push((key, aabb));
        Ok(())
    }

    /// Stop tracking `key`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if `key` is not tracked. Untracking an
    /// absent entity is an error (rather than a no-op) so that host
    /// lifecycle bugs — double-untrack, untrack-before-track — surface
    /// immediately, matching the strictness of [`update`][Self::update].
    pub fn untrack(&mut self, key: K) -> Result<(), RegistryError> {
        let Some(slot) = self.slots.remove(&key) else {
            return Err(RegistryError::NotFound);
        };
        self.entries.remove(slot);
        // Entries after the removed slot shifted down by one.
        for (k, _) in &self.entries[slot..] {
            if let Some(s) = self.slots.get_mut(k) {
                *s -= 1;
            }
        }
        Ok(())
    }

    /// Overwrite the stored AABB for `key`.
    ///
    /// This is how a moving entity keeps its broad-phase footprint current.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if `key` was never tracked (or was
    /// already untracked).
    pub fn update(&mut self, key: K, aabb: Aabb<T>) -> Result<(), RegistryError> {
        let Some(&slot) = self.slots.get(&key) else {
            return Err(RegistryError::NotFound);
        };
        self.entries[slot].1 = aabb;
        Ok(())
    }

    /// Re-derive every tracked AABB from an external shape source.
    ///
    /// One pass over the registry, intended to run once per update cycle
    /// from the host driver rather than once per query.
    pub fn refresh_all(&mut self, mut derive: impl FnMut(K) -> Aabb<T>) {
        for (key, aabb) in &mut self.entries {
            *aabb = derive(*key);
        }
    }

    /// Take a complete, self-consistent copy of the registry.
    ///
    /// The snapshot is independent of the live map: callbacks that
    /// `track`/`untrack`/`update` mid-scan never change what an in-progress
    /// snapshot walk visits. Entries appear in insertion order.
    pub fn snapshot(&self) -> Snapshot<K, T> {
        Snapshot::from_entries(self.entries.clone())
    }

    /// Iterate `(key, aabb)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Aabb<T>)> + '_ {
        self.entries.iter().copied()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }
}

impl<K, T> Default for Registry<K, T>
where
    K: Copy + Eq + Hash + Debug,
    T: Copy + PartialOrd + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn unit(x: f64, y: f64) -> Aabb<f64> {
        Aabb::from_origin_size(x, y, 1.0, 1.0)
    }

    #[test]
    fn track_then_snapshot_holds_exactly_one_entry() {
        let mut reg: Registry<u32, f64> = Registry::new();
        reg.track(7, unit(1.0, 2.0)).unwrap();

        let snap = reg.snapshot();
        let hits: Vec<_> = snap.iter().filter(|(k, _)| *k == 7).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].1, unit(1.0, 2.0));
    }

    #[test]
    fn duplicate_track_is_rejected_and_keeps_original() {
        let mut reg: Registry<u32, f64> = Registry::new();
        reg.track(7, unit(0.0, 0.0)).unwrap();
        assert_eq!(
            reg.track(7, unit(9.0, 9.0)),
            Err(RegistryError::DuplicateEntity)
        );
        assert_eq!(reg.get(7), Some(unit(0.0, 0.0)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn untrack_removes_and_errors_when_absent() {
        let mut reg: Registry<u32, f64> = Registry::new();
        reg.track(1, unit(0.0, 0.0)).unwrap();
        reg.untrack(1).unwrap();
        assert!(!reg.contains(1));
        assert!(reg.snapshot().iter().all(|(k, _)| k != 1));
        assert_eq!(reg.untrack(1), Err(RegistryError::NotFound));
    }

    #[test]
    fn update_untracked_is_not_found() {
        let mut reg: Registry<u32, f64> = Registry::new();
        assert_eq!(
            reg.update(42, unit(0.0, 0.0)),
            Err(RegistryError::NotFound)
        );
    }

    #[test]
    fn update_overwrites_stored_aabb() {
        let mut reg: Registry<u32, f64> = Registry::new();
        reg.track(1, unit(0.0, 0.0)).unwrap();
        reg.update(1, unit(3.0, 4.0)).unwrap();
        assert_eq!(reg.get(1), Some(unit(3.0, 4.0)));
    }

    #[test]
    fn iteration_is_insertion_ordered_across_removal() {
        let mut reg: Registry<u32, f64> = Registry::new();
        for k in [10, 20, 30, 40] {
            reg.track(k, unit(k as f64, 0.0)).unwrap();
        }
        reg.untrack(20).unwrap();

        let keys: Vec<u32> = reg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [10, 30, 40]);

        // Slot bookkeeping survives the shift: lookups still hit.
        assert_eq!(reg.get(30), Some(unit(30.0, 0.0)));
        reg.update(40, unit(-1.0, -1.0)).unwrap();
        assert_eq!(reg.get(40), Some(unit(-1.0, -1.0)));

        // New entries append at the end.
        reg.track(20, unit(20.0, 0.0)).unwrap();
        let keys: Vec<u32> = reg.snapshot().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [10, 30, 40, 20]);
    }

    #[test]
    fn snapshot_is_isolated_from_mutation() {
        let mut reg: Registry<u32, f64> = Registry::new();
        reg.track(1, unit(0.0, 0.0)).unwrap();
        reg.track(2, unit(5.0, 5.0)).unwrap();
        let snap = reg.snapshot();

        reg.untrack(1).unwrap();
        reg.track(3, unit(9.0, 9.0)).unwrap();
        reg.update(2, unit(-5.0, -5.0)).unwrap();

        let keys: Vec<u32> = snap.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [1, 2]);
        assert_eq!(snap.aabb_of(2), Some(unit(5.0, 5.0)));
    }

    #[test]
    fn refresh_all_rederives_every_entry() {
        let mut reg: Registry<u32, f64> = Registry::new();
        reg.track(1, unit(0.0, 0.0)).unwrap();
        reg.track(2, unit(1.0, 0.0)).unwrap();

        reg.refresh_all(|k| unit(k as f64 * 10.0, 7.0));
        assert_eq!(reg.get(1), Some(unit(10.0, 7.0)));
        assert_eq!(reg.get(2), Some(unit(20.0, 7.0)));
    }
}
