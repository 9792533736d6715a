// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graze Registry: the shared entity → AABB mapping behind the broad phase.
//!
//! A [`Registry`] holds the last-known rectangle for every tracked entity.
//! Entities participate explicitly: the host calls [`Registry::track`] when
//! an entity starts colliding, [`Registry::update`] (or
//! [`Registry::refresh_all`]) as it moves, and [`Registry::untrack`] before
//! disposing of it. There is no implicit lifecycle binding and no global
//! instance — hosts construct as many registries as they need (for example,
//! one per collision layer).
//!
//! Scans never iterate the live map. [`Registry::snapshot`] returns an
//! owned, point-in-time [`Snapshot`] in deterministic insertion order;
//! callbacks fired while walking a snapshot are free to mutate the registry
//! without affecting the set of entries the walk visits.
//!
//! # Example
//!
//! ```rust
//! use graze_aabb::Aabb;
//! use graze_registry::{Registry, RegistryError};
//!
//! let mut reg: Registry<u32, f64> = Registry::new();
//! reg.track(1, Aabb::new(0.0, 0.0, 1.0, 1.0))?;
//! reg.track(2, Aabb::new(5.0, 5.0, 6.0, 6.0))?;
//!
//! // Moving entity 2 keeps its broad-phase footprint current.
//! reg.update(2, Aabb::new(0.5, 0.5, 1.5, 1.5))?;
//!
//! let snap = reg.snapshot();
//! assert_eq!(snap.len(), 2);
//!
//! // The snapshot is immune to later mutation.
//! reg.untrack(1)?;
//! assert_eq!(snap.len(), 2);
//! assert_eq!(reg.len(), 1);
//! # Ok::<(), RegistryError>(())
//! ```

#![no_std]

extern crate alloc;

mod registry;
mod snapshot;

pub use registry::{Registry, RegistryError};
pub use snapshot::Snapshot;
