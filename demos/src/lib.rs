// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-engine glue shared by the graze demos.
//!
//! The core crates only store and compare [`Aabb`] values; deriving a box
//! from an engine-side collider description is the host's job. This crate
//! shows one such derivation for a kurbo-described collider: a size plus an
//! offset of the collider's center from the entity position, scaled by the
//! entity's scale factors.

use graze_aabb::Aabb;
use kurbo::{Point, Size, Vec2};

/// An engine-side box collider description.
///
/// `offset` displaces the collider center from the entity's position;
/// `size` is the unscaled extent of the box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColliderShape {
    /// Collider center relative to the entity position.
    pub offset: Vec2,
    /// Unscaled collider extent.
    pub size: Size,
}

impl ColliderShape {
    /// A collider centered on the entity position.
    pub fn centered(size: Size) -> Self {
        Self {
            offset: Vec2::ZERO,
            size,
        }
    }
}

/// Derive a broad-phase AABB for a collider at a world position.
///
/// Follows the screen-space convention of anchoring at the top-left corner
/// and growing the box *downward*, so the raw extents handed to the core are
/// `(|w|, -|h|)`; `Aabb::from_origin_size` normalizes that back to ordered
/// corners. Extents use the absolute scaled size throughout: a negative
/// scale factor mirrors the collider in place around its center rather than
/// shifting the box off-position.
pub fn derive_aabb(shape: ColliderShape, position: Point, scale: Vec2) -> Aabb<f64> {
    let center = position + shape.offset;
    let w = (shape.size.width * scale.x).abs();
    let h = (shape.size.height * scale.y).abs();
    let left = center.x - w / 2.0;
    let top = center.y + h / 2.0;
    Aabb::from_origin_size(left, top, w, -h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_unit_collider_brackets_position() {
        let shape = ColliderShape::centered(Size::new(2.0, 4.0));
        let aabb = derive_aabb(shape, Point::new(10.0, 10.0), Vec2::new(1.0, 1.0));
        assert_eq!(aabb, Aabb::new(9.0, 8.0, 11.0, 12.0));
    }

    #[test]
    fn offset_and_scale_apply_before_anchoring() {
        let shape = ColliderShape {
            offset: Vec2::new(1.0, 0.0),
            size: Size::new(2.0, 2.0),
        };
        let aabb = derive_aabb(shape, Point::new(0.0, 0.0), Vec2::new(2.0, 1.0));
        assert_eq!(aabb, Aabb::new(-1.0, -1.0, 3.0, 1.0));
    }

    #[test]
    fn mirrored_scale_stays_centered() {
        let shape = ColliderShape::centered(Size::new(2.0, 2.0));
        let flipped = derive_aabb(shape, Point::ZERO, Vec2::new(-1.0, -1.0));
        let straight = derive_aabb(shape, Point::ZERO, Vec2::new(1.0, 1.0));
        // Mirroring happens in place: the box must not drift off-center.
        assert_eq!(flipped, Aabb::new(-1.0, -1.0, 1.0, 1.0));
        assert_eq!(flipped, straight);
        assert!(!flipped.is_empty());

        // Mirroring one axis leaves the footprint identical too.
        let x_only = derive_aabb(shape, Point::new(3.0, 2.0), Vec2::new(-2.0, 1.0));
        assert_eq!(x_only, Aabb::new(1.0, 1.0, 5.0, 3.0));
    }
}
