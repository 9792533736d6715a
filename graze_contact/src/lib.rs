// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graze Contact: edge-triggered contact state for broad-phase collisions.
//!
//! The broad phase finds the same overlapping pair on every cycle that two
//! entities stay in contact. Hosts almost never want that firehose — they
//! want one event when contact begins and one when it ends. This crate turns
//! level-triggered scan results into those edges:
//!
//! - [`ContactState`] is one entity's set of currently-active partners. Its
//!   [`observe`][ContactState::observe] reports `true` only on the
//!   Inactive → Active transition; repeated observations of a sustained
//!   contact are absorbed.
//! - [`ContactSink`] is the interface a host implements to receive
//!   `enter`/`exit` notifications. [`ContactLog`] records events for tests,
//!   [`NoopSink`] discards them.
//!
//! The companion retire pass (deactivating partners that no longer overlap,
//! once per update cycle) lives in `graze_broadphase`, which owns the
//! authoritative rectangles; this crate only tracks membership.
//!
//! # Example
//!
//! ```rust
//! use graze_contact::ContactState;
//!
//! let mut contacts: ContactState<u32> = ContactState::new();
//!
//! // Three consecutive cycles of sustained contact: one edge.
//! assert!(contacts.observe(7));
//! assert!(!contacts.observe(7));
//! assert!(!contacts.observe(7));
//!
//! // Separation, then contact again: a fresh edge.
//! assert!(contacts.deactivate(7));
//! assert!(contacts.observe(7));
//! ```

#![no_std]

extern crate alloc;

mod sink;
mod state;

pub use sink::{ContactEvent, ContactLog, ContactSink, NoopSink};
pub use state::ContactState;
