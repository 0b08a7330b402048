//! Displacement vectors.

use core::fmt::{Debug, Formatter};
use core::marker::PhantomData as Pd;
use core::ops::{Add, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;

/// A generic vector type, tagged with the space it belongs to.
///
/// Vectors are the differences of [points][crate::math::point::Point]:
/// translations, offsets, and steps.
#[repr(transparent)]
pub struct Vector<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 2-vector with `f32` components.
pub type Vec2<Space = ()> = Vector<[f32; 2], Space>;

/// Returns a 2-vector with components `x` and `y`.
pub const fn vec2<Sp>(x: f32, y: f32) -> Vec2<Sp> {
    Vector([x, y], Pd)
}

impl<R, Sp> Vector<R, Sp> {
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp> Vec2<Sp> {
    /// Returns the x component of `self`.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y()
    }
}

impl<Sp> ApproxEq<Self, f32> for Vec2<Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

// Manual impls of Copy, Clone, Default, and PartialEq to avoid
// superfluous where Sp: Trait bounds

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Vec<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp> Add for Vec2<Sp> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        vec2(self.x() + rhs.x(), self.y() + rhs.y())
    }
}
impl<Sp> Sub for Vec2<Sp> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        vec2(self.x() - rhs.x(), self.y() - rhs.y())
    }
}
impl<Sp> Mul<f32> for Vec2<Sp> {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        vec2(self.x() * rhs, self.y() * rhs)
    }
}
impl<Sp> Neg for Vec2<Sp> {
    type Output = Self;
    fn neg(self) -> Self {
        vec2(-self.x(), -self.y())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn vector_arithmetic() {
        let v: Vec2 = vec2(1.0, 2.0);
        assert_eq!(v + vec2(-2.0, 1.0), vec2(-1.0, 3.0));
        assert_eq!(v - vec2(-2.0, 1.0), vec2(3.0, 1.0));
        assert_eq!(v * 3.0, vec2(3.0, 6.0));
        assert_eq!(-v, vec2(-1.0, -2.0));
    }

    #[test]
    fn dot_product() {
        let v: Vec2 = vec2(0.5, 0.5);
        assert_eq!(v.dot(&vec2(-2.0, 2.0)), 0.0);
        assert_eq!(v.dot(&vec2(-4.0, -4.0)), -4.0);
    }

    #[test]
    fn debug() {
        let v: Vec2 = vec2(1.0, -2.0);
        assert_eq!(format!("{v:?}"), "Vec<()>[1.0, -2.0]");
    }
}
