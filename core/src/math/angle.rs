//! Angular quantities.

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
///
/// The ball's geometry is specified in degrees throughout, while the
/// trigonometric functions want radians; `Angle` keeps the two apart.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

const RADS_PER_DEG: f32 = PI / 180.0;

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(TAU / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(TAU / 2.0);
    /// A 360 degree angle.
    pub const FULL: Self = Self(TAU);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use std::f32;
    /// # use boing_core::math::degs;
    /// assert_eq!(degs(90.0).to_rads(), f32::consts::FRAC_PI_2);
    /// ```
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    /// # Examples
    /// ```
    /// # use std::f32;
    /// # use boing_core::math::rads;
    /// assert_eq!(rads(f32::consts::PI).to_degs(), 180.0);
    /// ```
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }

    /// Returns the sine of `self`.
    /// # Examples
    /// ```
    /// # use boing_core::math::degs;
    /// assert_eq!(degs(-90.0).sin(), -1.0);
    /// ```
    pub fn sin(self) -> f32 {
        use super::float::f32;
        f32::sin(self.0)
    }
    /// Returns the cosine of `self`.
    /// # Examples
    /// ```
    /// # use boing_core::assert_approx_eq;
    /// # use boing_core::math::degs;
    /// assert_approx_eq!(degs(60.0).cos(), 0.5);
    /// ```
    pub fn cos(self) -> f32 {
        use super::float::f32;
        f32::cos(self.0)
    }
    /// Simultaneously computes the sine and cosine of `self`.
    /// # Examples
    /// ```
    /// # use boing_core::assert_approx_eq;
    /// # use boing_core::math::degs;
    /// let (sin, cos) = degs(90.0).sin_cos();
    /// assert_approx_eq!(sin, 1.0);
    /// assert_approx_eq!(cos, 0.0);
    /// ```
    pub fn sin_cos(self) -> (f32, f32) {
        use super::float::f32;
        f32::sin_cos(self.0)
    }

    /// Returns `self` "wrapped around" to the range `min..max`.
    ///
    /// # Examples
    /// ```
    /// # use boing_core::assert_approx_eq;
    /// # use boing_core::math::angle::*;
    /// assert_approx_eq!(degs(-90.0).wrap(Angle::ZERO, Angle::FULL), degs(270.0))
    /// ```
    #[must_use]
    pub fn wrap(self, min: Self, max: Self) -> Self {
        use super::float::f32;
        Self(min.0 + f32::rem_euclid(self.0 - min.0, max.0 - min.0))
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(f32::relative_epsilon())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}
