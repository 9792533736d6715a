// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-entity active-contact set.

use core::fmt::Debug;

use smallvec::SmallVec;

/// How many active partners fit inline before spilling to the heap.
///
/// Broad-phase contact sets are almost always empty or near-empty; four
/// covers the common case without allocation.
const INLINE_PARTNERS: usize = 4;

/// One entity's set of currently-active collision partners.
///
/// A partner is `Active` from the first cycle a scan finds it overlapping
/// until the cycle-end retire pass finds it separated. The set is owned by
/// exactly one entity's participant record and is never shared; membership
/// changes only through [`observe`][Self::observe] and
/// [`deactivate`][Self::deactivate].
///
/// Membership checks are linear scans over a small inline buffer, which
/// beats hashing at the handful-of-partners sizes the broad phase produces.
#[derive(Clone, Debug, Default)]
pub struct ContactState<K> {
    active: SmallVec<[K; INLINE_PARTNERS]>,
}

impl<K: Copy + PartialEq + Debug> ContactState<K> {
    /// Create an empty contact set.
    pub fn new() -> Self {
        Self {
            active: SmallVec::new(),
        }
    }

    /// Record that a scan found `partner` overlapping this entity.
    ///
    /// Returns `true` exactly when `partner` transitions Inactive → Active —
    /// the caller should emit an `enter` event then and only then. Observing
    /// an already-Active partner returns `false` and changes nothing, which
    /// is what keeps sustained contact from re-announcing every cycle.
    pub fn observe(&mut self, partner: K) -> bool {
        if self.active.contains(&partner) {
            return false;
        }
        self.active.push(partner);
        true
    }

    /// Move `partner` back to Inactive.
    ///
    /// Returns `true` if the partner was Active — the caller decides whether
    /// that warrants an `exit` event. Deactivating an Inactive partner is a
    /// no-op.
    pub fn deactivate(&mut self, partner: K) -> bool {
        match self.active.iter().position(|p| *p == partner) {
            Some(i) => {
                self.active.remove(i);
                true
            }
            None => false,
        }
    }

    /// Whether `partner` is currently Active.
    pub fn is_active(&self, partner: K) -> bool {
        self.active.contains(&partner)
    }

    /// Iterate the Active partners in activation order.
    pub fn partners(&self) -> impl Iterator<Item = K> + '_ {
        self.active.iter().copied()
    }

    /// Number of Active partners.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no partners are Active.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drop every Active partner without reporting exits.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn observe_fires_once_per_contact() {
        let mut state: ContactState<u32> = ContactState::new();
        assert!(state.observe(1));
        assert!(!state.observe(1));
        assert!(!state.observe(1));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn deactivate_then_observe_is_a_new_edge() {
        let mut state: ContactState<u32> = ContactState::new();
        assert!(state.observe(1));
        assert!(state.deactivate(1));
        assert!(!state.is_active(1));
        assert!(state.observe(1));
    }

    #[test]
    fn deactivate_inactive_is_a_noop() {
        let mut state: ContactState<u32> = ContactState::new();
        assert!(!state.deactivate(99));
        state.observe(1);
        assert!(!state.deactivate(99));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn partners_iterate_in_activation_order() {
        let mut state: ContactState<u32> = ContactState::new();
        for p in [5, 3, 8] {
            state.observe(p);
        }
        let partners: Vec<u32> = state.partners().collect();
        assert_eq!(partners, [5, 3, 8]);
    }

    #[test]
    fn spills_past_inline_capacity() {
        let mut state: ContactState<u32> = ContactState::new();
        for p in 0..10 {
            assert!(state.observe(p));
        }
        assert_eq!(state.len(), 10);
        assert!(state.deactivate(7));
        assert_eq!(state.len(), 9);
        assert!(!state.is_active(7));
    }
}
