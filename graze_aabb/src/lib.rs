// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graze AABB: the rectangle value type shared by every graze crate.
//!
//! This crate holds the two leaves of the broad phase:
//!
//! - [`Aabb`], an axis-aligned rectangle stored as min/max corners, generic
//!   over the scalar type `T`.
//! - [`Aabb::overlaps`], the strict overlap predicate every collision check
//!   in the workspace reduces to.
//!
//! It does not depend on any geometry crate. Hosts that describe colliders
//! with a geometry library convert to [`Aabb`] at the boundary (see the
//! `demos` member for a kurbo-based example).
//!
//! ## Sign conventions
//!
//! Rectangles arriving from host engines are not always min/max ordered: a
//! collider anchored at its top-left corner is naturally described with a
//! height that extends *downward*, i.e. a negative extent. Normalization
//! happens once, at construction, in [`Aabb::from_origin_size`] — the
//! predicate assumes ordered corners and never re-normalizes.
//!
//! ## Strictness
//!
//! Overlap uses strict inequalities: rectangles that merely share an edge do
//! **not** overlap, so adjacent tiles never report spurious collisions, and
//! an empty (zero-area or inverted) rectangle overlaps nothing at all,
//! itself included.
//!
//! # Example
//!
//! ```rust
//! use graze_aabb::Aabb;
//!
//! let a = Aabb::from_origin_size(0.0, 0.0, 1.0, 1.0);
//! let b = Aabb::from_origin_size(0.5, 0.5, 1.0, 1.0);
//! assert!(a.overlaps(&b));
//!
//! // Edge-touching is not overlap.
//! let c = Aabb::from_origin_size(1.0, 0.0, 1.0, 1.0);
//! assert!(!a.overlaps(&c));
//!
//! // A downward-growing box normalizes at construction.
//! let d = Aabb::from_origin_size(0.0, 1.0, 1.0, -1.0);
//! assert_eq!(d, Aabb::new(0.0, 0.0, 1.0, 1.0));
//! ```

#![no_std]

mod aabb;
mod scalar;

pub use aabb::Aabb;
pub use scalar::Scalar;
