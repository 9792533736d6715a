// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis-aligned rectangle type and its overlap predicate.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::scalar::Scalar;

/// Axis-aligned bounding box in 2D, stored as ordered min/max corners.
///
/// Construct with [`Aabb::new`] when you already hold ordered corners, or
/// with [`Aabb::from_origin_size`] when you hold an origin and extents of
/// arbitrary sign. The rest of the workspace assumes `min_* <= max_*` holds
/// per axis for non-empty boxes; constructors uphold this, the predicate
/// relies on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb<T> {
    /// Create a new AABB from min/max corners.
    #[inline(always)]
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb<T> {
    /// Whether this AABB overlaps another.
    ///
    /// Strict on every axis: two AABBs that merely share an edge or corner do
    /// *not* overlap, and an empty AABB (see [`is_empty`][Self::is_empty])
    /// overlaps nothing — not even an identical empty AABB. Symmetric in its
    /// arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use graze_aabb::Aabb;
    ///
    /// let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Aabb::new(5.0, 5.0, 15.0, 15.0);
    /// assert!(a.overlaps(&b));
    ///
    /// // Shared edge: no overlap.
    /// let c = Aabb::new(10.0, 0.0, 20.0, 10.0);
    /// assert!(!a.overlaps(&c));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }

    /// Whether this AABB contains the point (closed on all edges).
    #[inline]
    pub fn contains_point(&self, x: T, y: T) -> bool {
        self.min_x <= x && self.min_y <= y && x <= self.max_x && y <= self.max_y
    }

    /// Return true if the AABB is empty or inverted (no area). Assumes no NaN.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.max_x <= self.min_x || self.max_y <= self.min_y
    }
}

impl<T: Scalar> Aabb<T> {
    /// Create an AABB from an origin and extents, normalizing negative sizes.
    ///
    /// `w` and `h` may be negative: a host that anchors a collider at its
    /// top-left corner and grows it downward will hand this a negative
    /// height. The resulting corners are min/max ordered either way, so the
    /// predicate never needs to re-check sign conventions.
    #[inline]
    pub fn from_origin_size(x: T, y: T, w: T, h: T) -> Self {
        let x2 = T::add(x, w);
        let y2 = T::add(y, h);
        Self {
            min_x: min_t(x, x2),
            min_y: min_t(y, y2),
            max_x: max_t(x, x2),
            max_y: max_t(y, y2),
        }
    }

    /// Width of the AABB; zero for empty or inverted boxes.
    #[inline]
    pub fn width(&self) -> T {
        max_t(T::sub(self.max_x, self.min_x), T::zero())
    }

    /// Height of the AABB; zero for empty or inverted boxes.
    #[inline]
    pub fn height(&self) -> T {
        max_t(T::sub(self.max_y, self.min_y), T::zero())
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb;

    #[test]
    fn overlap_is_symmetric() {
        let a = Aabb::new(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::new(0.5, 0.5, 1.5, 1.5);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Aabb::new(3.0, 3.0, 4.0, 4.0);
        assert!(!a.overlaps(&far));
        assert!(!far.overlaps(&a));
    }

    #[test]
    fn edge_touching_is_not_overlap() {
        let a = Aabb::from_origin_size(0.0, 0.0, 1.0, 1.0);
        // Shares the x = 1 edge with `a`.
        let b = Aabb::from_origin_size(1.0, 0.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));

        // Corner contact only.
        let c = Aabb::from_origin_size(1.0, 1.0, 1.0, 1.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn zero_area_overlaps_nothing() {
        let point = Aabb::new(0.5, 0.5, 0.5, 0.5);
        let unit = Aabb::new(0.0, 0.0, 1.0, 1.0);
        assert!(!point.overlaps(&unit));
        assert!(!unit.overlaps(&point));
        assert!(!point.overlaps(&point));

        // Zero width but positive height is still empty.
        let line = Aabb::new(0.5, 0.0, 0.5, 1.0);
        assert!(!line.overlaps(&unit));
    }

    #[test]
    fn negative_extents_normalize_at_construction() {
        // Anchored at the top-left, growing downward: negative height.
        let down = Aabb::from_origin_size(2.0, 5.0, 3.0, -4.0);
        assert_eq!(down, Aabb::new(2.0, 1.0, 5.0, 5.0));
        assert!(!down.is_empty());

        // Both extents negative.
        let both = Aabb::from_origin_size(0, 0, -10_i64, -10);
        assert_eq!(both, Aabb::new(-10, -10, 0, 0));

        let other = Aabb::new(-5, -5, -1, -1);
        assert!(both.overlaps(&other));
    }

    #[test]
    fn width_height_clamp_to_zero() {
        let inverted = Aabb::new(5.0, 5.0, 1.0, 1.0);
        assert_eq!(inverted.width(), 0.0);
        assert_eq!(inverted.height(), 0.0);
        assert!(inverted.is_empty());

        let a = Aabb::from_origin_size(1.0, 1.0, 4.0, -2.0);
        assert_eq!(a.width(), 4.0);
        assert_eq!(a.height(), 2.0);
    }

    #[test]
    fn contains_point_is_closed() {
        let a = Aabb::new(0, 0, 10, 10);
        assert!(a.contains_point(0, 0));
        assert!(a.contains_point(10, 10));
        assert!(a.contains_point(5, 5));
        assert!(!a.contains_point(11, 5));
    }

    #[test]
    fn unit_squares_half_offset_overlap() {
        let a = Aabb::from_origin_size(0.0, 0.0, 1.0, 1.0);
        let b = Aabb::from_origin_size(0.5, 0.5, 1.0, 1.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
