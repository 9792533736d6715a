// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The broad-phase facade: registry + participants + announcement.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use graze_aabb::Aabb;
use graze_contact::{ContactSink, ContactState};
use graze_registry::{Registry, RegistryError, Snapshot};
use hashbrown::HashMap;

use crate::types::{ParticipantFlags, ScanMode, ScanResult};

#[derive(Clone, Debug)]
struct Participant<K> {
    flags: ParticipantFlags,
    contacts: ContactState<K>,
}

/// One broad-phase instance: a registry of rectangles plus per-entity
/// contact state and capability flags.
///
/// Nothing here is global — hosts construct an instance at startup (or
/// several, e.g. one per collision layer) and drop it at shutdown. All
/// operations are synchronous, bounded, and take `&mut self`, so mutation is
/// statically serialized; wrapping an instance in a mutex is the supported
/// route to multi-threaded use.
///
/// The expected per-cycle rhythm, driven by the host's update loop:
///
/// 1. [`update`][Self::update] moved entities (or [`refresh_all`][Self::refresh_all] once),
/// 2. [`scan`][Self::scan] with [`ScanMode::Announce`] for entities that moved,
/// 3. [`end_cycle`][Self::end_cycle] to retire separated contacts.
#[derive(Clone, Debug)]
pub struct Broadphase<K, T> {
    registry: Registry<K, T>,
    participants: HashMap<K, Participant<K>>,
}

impl<K, T> Broadphase<K, T>
where
    K: Copy + Eq + Hash + Debug,
    T: Copy + PartialOrd + Debug,
{
    /// Create an empty broad phase.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            participants: HashMap::new(),
        }
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &Registry<K, T> {
        &self.registry
    }

    /// Number of tracked participants.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no participants are tracked.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Whether `key` is tracked.
    pub fn contains(&self, key: K) -> bool {
        self.participants.contains_key(&key)
    }

    /// The last-known AABB for `key`.
    pub fn aabb_of(&self, key: K) -> Option<Aabb<T>> {
        self.registry.get(key)
    }

    /// The contact state for `key`, if tracked.
    pub fn contacts(&self, key: K) -> Option<&ContactState<K>> {
        self.participants.get(&key).map(|p| &p.contacts)
    }

    /// Start tracking `key` with default flags (collidable, no exit events).
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateEntity`] if `key` is already tracked.
    pub fn track(&mut self, key: K, aabb: Aabb<T>) -> Result<(), RegistryError> {
        self.track_with_flags(key, aabb, ParticipantFlags::default())
    }

    /// Start tracking `key` with explicit flags.
    ///
    /// The participant starts with an empty contact set.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateEntity`] if `key` is already tracked.
    pub fn track_with_flags(
        &mut self,
        key: K,
        aabb: Aabb<T>,
        flags: ParticipantFlags,
    ) -> Result<(), RegistryError> {
        self.registry.track(key, aabb)?;
        self.participants.insert(
            key,
            Participant {
                flags,
                contacts: ContactState::new(),
            },
        );
        Ok(())
    }

    /// Stop tracking `key`, dropping its contact state.
    ///
    /// Other entities that held `key` as an active partner retire it on the
    /// next [`end_cycle`][Self::end_cycle] pass (with an exit event if they
    /// opted in).
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if `key` is not tracked.
    pub fn untrack(&mut self, key: K) -> Result<(), RegistryError> {
        self.registry.untrack(key)?;
        self.participants.remove(&key);
        Ok(())
    }

    /// Overwrite the stored AABB for `key`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if `key` is not tracked.
    pub fn update(&mut self, key: K, aabb: Aabb<T>) -> Result<(), RegistryError> {
        self.registry.update(key, aabb)
    }

    /// Re-derive every tracked AABB from an external shape source, once per
    /// update cycle.
    pub fn refresh_all(&mut self, derive: impl FnMut(K) -> Aabb<T>) {
        self.registry.refresh_all(derive);
    }

    /// The capability flags for `key`, if tracked.
    pub fn flags(&self, key: K) -> Option<ParticipantFlags> {
        self.participants.get(&key).map(|p| p.flags)
    }

    /// Replace the capability flags for `key`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if `key` is not tracked.
    pub fn set_flags(&mut self, key: K, flags: ParticipantFlags) -> Result<(), RegistryError> {
        match self.participants.get_mut(&key) {
            Some(p) => {
                p.flags = flags;
                Ok(())
            }
            None => Err(RegistryError::NotFound),
        }
    }

    /// Take a point-in-time copy of the registry.
    pub fn snapshot(&self) -> Snapshot<K, T> {
        self.registry.snapshot()
    }

    /// Direct pairwise check against current registry state.
    ///
    /// `false` when the keys are equal, when either side is untracked, when
    /// either side is not [`COLLIDABLE`][ParticipantFlags::COLLIDABLE], or
    /// when the rectangles simply do not overlap. Never an error: a disabled
    /// participant is a normal condition.
    pub fn colliding(&self, a: K, b: K) -> bool {
        if a == b {
            return false;
        }
        if !self.is_collidable(a) || !self.is_collidable(b) {
            return false;
        }
        let (Some(ra), Some(rb)) = (self.registry.get(a), self.registry.get(b)) else {
            return false;
        };
        ra.overlaps(&rb)
    }

    /// Scan `query` against a snapshot of the shared registry.
    ///
    /// The snapshot is taken at call time, so announce callbacks (or
    /// anything else) mutating the registry cannot change the set of
    /// partners this scan visits. See [`scan_snapshot`][Self::scan_snapshot]
    /// for scanning an externally assembled snapshot instead.
    ///
    /// Behavior per [`ScanMode`]: `Silent` and `FirstMatch` have no side
    /// effects and stop at the first hit; `Announce` visits every hit in
    /// snapshot order and announces each one to both sides' contact state,
    /// emitting `enter` through `sink` for each side that newly activated.
    /// A non-collidable owner sees no overlaps in any mode; non-collidable
    /// partners are skipped.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if `owner` is not tracked — announce
    /// routing needs the owner's participant record.
    pub fn scan(
        &mut self,
        owner: K,
        query: Aabb<T>,
        mode: ScanMode,
        sink: &mut impl ContactSink<K>,
    ) -> Result<ScanResult<K>, RegistryError> {
        if !self.participants.contains_key(&owner) {
            return Err(RegistryError::NotFound);
        }
        let snapshot = self.registry.snapshot();
        Ok(self.scan_entries(owner, &query, &snapshot, mode, sink))
    }

    /// Scan `query` against an arbitrary external snapshot.
    ///
    /// For localized queries — e.g. a snapshot holding only nearby tile
    /// entities. Snapshot keys with no participant record are treated as
    /// collidable; announcing against them updates only the owner's side.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] if `owner` is not tracked.
    pub fn scan_snapshot(
        &mut self,
        owner: K,
        query: Aabb<T>,
        snapshot: &Snapshot<K, T>,
        mode: ScanMode,
        sink: &mut impl ContactSink<K>,
    ) -> Result<ScanResult<K>, RegistryError> {
        if !self.participants.contains_key(&owner) {
            return Err(RegistryError::NotFound);
        }
        Ok(self.scan_entries(owner, &query, snapshot, mode, sink))
    }

    /// The cycle-end retire pass.
    ///
    /// For every participant, re-tests each active partner against the
    /// partner's *current* registry AABB (the authoritative shared state)
    /// with the plain predicate — no fresh broad-phase scan. Partners that
    /// no longer overlap, were untracked, or had either side lose
    /// `COLLIDABLE` move back to inactive; `exit` fires through `sink` only
    /// for entities whose flags include
    /// [`EXIT_EVENTS`][ParticipantFlags::EXIT_EVENTS].
    ///
    /// Run this once per update cycle even when nothing was announced that
    /// cycle, so stale partners still retire. Cost is the sum of active-set
    /// sizes, independent of registry size. No ordering is guaranteed
    /// between different entities' retirements.
    pub fn end_cycle(&mut self, sink: &mut impl ContactSink<K>) {
        let mut retired: Vec<(K, K, bool)> = Vec::new();
        for (&key, part) in &self.participants {
            let exits = part.flags.contains(ParticipantFlags::EXIT_EVENTS);
            for partner in part.contacts.partners() {
                if !self.colliding(key, partner) {
                    retired.push((key, partner, exits));
                }
            }
        }
        for (key, partner, exits) in retired {
            if let Some(part) = self.participants.get_mut(&key)
                && part.contacts.deactivate(partner)
                && exits
            {
                sink.exit(key, partner);
            }
        }
    }

    fn scan_entries(
        &mut self,
        owner: K,
        query: &Aabb<T>,
        snapshot: &Snapshot<K, T>,
        mode: ScanMode,
        sink: &mut impl ContactSink<K>,
    ) -> ScanResult<K> {
        let miss = match mode {
            ScanMode::FirstMatch => ScanResult::First(None),
            _ => ScanResult::Overlapping(false),
        };
        if !self.is_collidable(owner) {
            return miss;
        }
        let mut found = false;
        for (key, aabb) in snapshot.iter() {
            if key == owner {
                continue;
            }
            if !self.is_collidable(key) {
                continue;
            }
            if !query.overlaps(&aabb) {
                continue;
            }
            match mode {
                ScanMode::Silent => return ScanResult::Overlapping(true),
                ScanMode::FirstMatch => return ScanResult::First(Some(key)),
                ScanMode::Announce => {
                    found = true;
                    self.announce(owner, key, sink);
                }
            }
        }
        if found { ScanResult::Overlapping(true) } else { miss }
    }

    /// Deliver a collision observation to both sides of the pair.
    ///
    /// Each side whose contact state newly activates gets exactly one
    /// `enter`. Sides without a participant record (external-snapshot keys)
    /// are skipped — absence of the capability is a checked no-op.
    fn announce(&mut self, owner: K, partner: K, sink: &mut impl ContactSink<K>) {
        if let Some(part) = self.participants.get_mut(&owner)
            && part.contacts.observe(partner)
        {
            sink.enter(owner, partner);
        }
        if let Some(part) = self.participants.get_mut(&partner)
            && part.contacts.observe(owner)
        {
            sink.enter(partner, owner);
        }
    }

    /// Unknown keys (external snapshots) default to collidable.
    fn is_collidable(&self, key: K) -> bool {
        self.participants
            .get(&key)
            .is_none_or(|p| p.flags.contains(ParticipantFlags::COLLIDABLE))
    }
}

impl<K, T> Default for Broadphase<K, T>
where
    K: Copy + Eq + Hash + Debug,
    T: Copy + PartialOrd + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
