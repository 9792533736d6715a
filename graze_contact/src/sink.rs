// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing notification interface.

use alloc::vec::Vec;
use core::fmt::Debug;

/// Receiver for contact transition events.
///
/// Hosts implement this to learn when an entity's rectangle begins or stops
/// overlapping a partner's. The broad phase delivers each partner's
/// notification as an independent call, in scan order; implementations own
/// whatever error handling they need internally — a sink must not panic, and
/// whatever it does for one partner has no effect on delivery for the rest.
pub trait ContactSink<K> {
    /// `entity`'s rectangle began overlapping `partner`'s.
    ///
    /// Fired exactly once per contact: sustained overlap across later cycles
    /// does not re-enter.
    fn enter(&mut self, entity: K, partner: K);

    /// `entity`'s rectangle stopped overlapping `partner`'s.
    ///
    /// Only delivered for entities that opted into exit notifications.
    fn exit(&mut self, entity: K, partner: K);
}

/// A contact transition, as recorded by [`ContactLog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactEvent<K> {
    /// `.0` began overlapping `.1`.
    Enter(K, K),
    /// `.0` stopped overlapping `.1`.
    Exit(K, K),
}

/// A sink that records every event, for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct ContactLog<K> {
    /// Every event received, in delivery order.
    pub events: Vec<ContactEvent<K>>,
}

impl<K> ContactLog<K> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Forget all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<K: Copy + PartialEq + Debug> ContactLog<K> {
    /// Number of recorded `Enter` events.
    pub fn enter_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ContactEvent::Enter(..)))
            .count()
    }

    /// Number of recorded `Exit` events.
    pub fn exit_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ContactEvent::Exit(..)))
            .count()
    }

    /// Whether the log contains the given event.
    pub fn contains(&self, event: ContactEvent<K>) -> bool {
        self.events.contains(&event)
    }
}

impl<K: Copy + PartialEq + Debug> ContactSink<K> for ContactLog<K> {
    fn enter(&mut self, entity: K, partner: K) {
        self.events.push(ContactEvent::Enter(entity, partner));
    }

    fn exit(&mut self, entity: K, partner: K) {
        self.events.push(ContactEvent::Exit(entity, partner));
    }
}

/// A sink that discards every event.
///
/// Handy for `Silent`/`FirstMatch` scans, which never announce but share the
/// scanning entry point with announcing scans.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopSink;

impl<K> ContactSink<K> for NoopSink {
    fn enter(&mut self, _entity: K, _partner: K) {}

    fn exit(&mut self, _entity: K, _partner: K) {}
}
