// Copyright 2025 the Graze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for rectangle coordinates.

use core::fmt::Debug;

/// Numeric scalar abstraction for 2D AABB coordinates.
///
/// This trait provides the minimal arithmetic needed to build an [`Aabb`]
/// from an origin and (possibly negative) extents. Comparisons come from the
/// `PartialOrd` supertrait; nothing here assumes positive values.
///
/// [`Aabb`]: crate::Aabb
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
}

impl Scalar for f64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline(always)]
    fn zero() -> Self {
        0.0
    }
}

impl Scalar for i64 {
    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a.saturating_add(b)
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline(always)]
    fn zero() -> Self {
        0
    }
}
