// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graze Broadphase: linear AABB overlap scanning with enter/exit events.
//!
//! ## Overview
//!
//! This crate ties the workspace together. A [`Broadphase`] instance owns a
//! [`Registry`](graze_registry::Registry) of entity rectangles and a
//! participant table (capability flags + per-entity
//! [`ContactState`](graze_contact::ContactState)). Scans run against owned
//! snapshots of the registry, compare rectangles with the strict
//! [`Aabb::overlaps`](graze_aabb::Aabb::overlaps) predicate, and — in
//! [`ScanMode::Announce`] — convert overlaps into edge-triggered
//! `enter`/`exit` notifications through a host-implemented
//! [`ContactSink`](graze_contact::ContactSink).
//!
//! Scanning is deliberately a linear pass over the snapshot: no spatial
//! index, O(N) per scan. That is the intended trade-off for the small
//! registries this targets; entries are visited (and announced) in the
//! registry's insertion order, so first-match queries are deterministic.
//!
//! The scan mode is an explicit argument on every call. There is no shared
//! "announce" toggle to reset, so a `Silent` probe immediately after an
//! `Announce` scan behaves exactly as written, even under re-entrancy.
//!
//! ## Per-cycle rhythm
//!
//! ```rust
//! use graze_aabb::Aabb;
//! use graze_broadphase::{Broadphase, ParticipantFlags, ScanMode};
//! use graze_contact::{ContactEvent, ContactLog};
//!
//! let mut bp: Broadphase<u32, f64> = Broadphase::new();
//! let flags = ParticipantFlags::COLLIDABLE | ParticipantFlags::EXIT_EVENTS;
//! bp.track_with_flags(1, Aabb::new(0.0, 0.0, 1.0, 1.0), flags)?;
//! bp.track_with_flags(2, Aabb::new(0.5, 0.5, 1.5, 1.5), flags)?;
//!
//! let mut log = ContactLog::new();
//!
//! // Cycle 1: entity 1 moved, so it rescans. Both sides hear about it.
//! let query = bp.aabb_of(1).unwrap();
//! let hit = bp.scan(1, query, ScanMode::Announce, &mut log)?;
//! assert!(hit.any());
//! bp.end_cycle(&mut log);
//! assert_eq!(log.events, [ContactEvent::Enter(1, 2), ContactEvent::Enter(2, 1)]);
//!
//! // Cycle 2: entity 2 leaves; the retire pass emits the exits.
//! bp.update(2, Aabb::new(9.0, 9.0, 10.0, 10.0))?;
//! bp.end_cycle(&mut log);
//! assert_eq!(log.exit_count(), 2);
//! # Ok::<(), graze_registry::RegistryError>(())
//! ```
//!
//! ## Localized queries
//!
//! [`scan_snapshot`](Broadphase::scan_snapshot) accepts any
//! [`Snapshot`](graze_registry::Snapshot) — assemble one from, say, the tile
//! entities near a character and scan against that instead of the shared
//! registry. The [`scan`](mod@crate::scan) module offers the raw primitives
//! ([`visit_overlaps`], [`first_overlap`], [`any_overlap`]) for hosts that
//! want snapshot scanning without a facade at all.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod scan;
mod types;
mod world;

pub use scan::{any_overlap, first_overlap, visit_overlaps};
pub use types::{ParticipantFlags, ScanMode, ScanResult};
pub use world::Broadphase;
