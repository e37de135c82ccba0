//! The vector capability estimators are generic over
//!
//! Anything that can be zeroed, added, subtracted and scaled by a real
//! number can be dead-reckoned. Implementations are provided for the
//! primitive floats, for fixed-size arrays of any `Kinematic` element, and
//! for [`Vec2`](crate::Vec2) / [`Vec3`](crate::Vec3).

use std::fmt::Debug;

/// Fixed-arity real vector arithmetic
///
/// Scaling always takes an `f64` factor because factors are derived from
/// clock deltas, which are `f64` seconds.
pub trait Kinematic: Copy + PartialEq + Debug {
    /// The additive identity
    fn zero() -> Self;

    /// Component-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Component-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Multiply every component by `factor`
    fn scale(self, factor: f64) -> Self;

    /// True when every component is finite
    fn is_finite(&self) -> bool;

    /// Linear interpolation: `self + (other - self) * t`
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    fn lerp(self, other: Self, t: f64) -> Self {
        self.add(other.sub(self).scale(t))
    }

    /// Rate of change from `from` to `to` over `dt` seconds
    ///
    /// Returns `fallback` when `|dt| < epsilon` or `dt == 0` instead of
    /// dividing by a near-zero interval.
    fn slope(from: Self, to: Self, dt: f64, epsilon: f64, fallback: Self) -> Self {
        if dt.abs() < epsilon || dt == 0.0 {
            fallback
        } else {
            to.sub(from).scale(1.0 / dt)
        }
    }
}

impl Kinematic for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl Kinematic for f32 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    fn scale(self, factor: f64) -> Self {
        (self as f64 * factor) as f32
    }
}

impl<T: Kinematic, const N: usize> Kinematic for [T; N] {
    fn zero() -> Self {
        [T::zero(); N]
    }

    fn add(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].add(rhs[i]))
    }

    fn sub(self, rhs: Self) -> Self {
        std::array::from_fn(|i| self[i].sub(rhs[i]))
    }

    fn scale(self, factor: f64) -> Self {
        self.map(|c| c.scale(factor))
    }

    fn is_finite(&self) -> bool {
        self.iter().all(Kinematic::is_finite)
    }
}
