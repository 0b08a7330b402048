//! Points in two-dimensional space.

use core::fmt::{Debug, Formatter};
use core::marker::PhantomData as Pd;
use core::ops::{Add, Sub};

use crate::math::{
    approx::ApproxEq,
    vec::{Vec2, vec2},
};

/// A generic point type, tagged with the space it belongs to.
///
/// Unlike vectors, points cannot be added together; only a vector can be
/// added to a point, and the difference of two points is a vector.
#[repr(transparent)]
pub struct Point<Repr, Space = ()>(pub Repr, Pd<Space>);

/// A 2-point with `f32` components.
pub type Point2<Space = ()> = Point<[f32; 2], Space>;

/// Returns a 2-point with `x` and `y` components.
pub const fn pt2<Sp>(x: f32, y: f32) -> Point2<Sp> {
    Point([x, y], Pd)
}

impl<R, Sp> Point<R, Sp> {
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp> Point2<Sp> {
    /// The origin of the space.
    pub const ORIGIN: Self = pt2(0.0, 0.0);

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
    /// Returns the vector from the origin to `self`.
    #[inline]
    pub fn to_vec(self) -> Vec2<Sp> {
        vec2(self.x(), self.y())
    }
    /// Returns `self` with its components truncated towards zero,
    /// as a pair of `i32` pixel coordinates.
    ///
    /// # Examples
    /// ```
    /// # use boing_core::math::{Point2, pt2};
    /// let p: Point2 = pt2(12.9, -3.7);
    /// assert_eq!(p.trunc(), [12, -3]);
    /// ```
    #[inline]
    pub fn trunc(self) -> [i32; 2] {
        self.0.map(|c| c as i32)
    }
}

impl<Sp> ApproxEq<Self, f32> for Point2<Sp> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

//
// Foreign trait impls
//

// Manual impls of Copy, Clone, Default, and PartialEq to avoid
// superfluous where Sp: Trait bounds

impl<R: Copy, Sp> Copy for Point<R, Sp> {}

impl<R: Clone, Sp> Clone for Point<R, Sp> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), Pd)
    }
}

impl<R: Default, Sp> Default for Point<R, Sp> {
    fn default() -> Self {
        Self(R::default(), Pd)
    }
}

impl<R: PartialEq, Sp> PartialEq for Point<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Point<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Point<{:?}>", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Point<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self(repr, Pd)
    }
}

impl<Sp> Add<Vec2<Sp>> for Point2<Sp> {
    type Output = Self;
    fn add(self, v: Vec2<Sp>) -> Self {
        pt2(self.x() + v.x(), self.y() + v.y())
    }
}

impl<Sp> Sub for Point2<Sp> {
    type Output = Vec2<Sp>;
    fn sub(self, other: Self) -> Vec2<Sp> {
        vec2(self.x() - other.x(), self.y() - other.y())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn point_plus_vector() {
        let p: Point2 = pt2(320.0, 150.0);
        assert_eq!(p + vec2(50.0, 0.0), pt2(370.0, 150.0));
    }

    #[test]
    fn point_minus_point() {
        let p: Point2 = pt2(3.0, 4.0);
        assert_eq!(p - pt2(1.0, 1.0), vec2(2.0, 3.0));
        assert_eq!(p - Point2::ORIGIN, p.to_vec());
    }

    #[test]
    fn truncation_is_towards_zero() {
        let p: Point2 = pt2(-0.9, 431.99);
        assert_eq!(p.trunc(), [0, 431]);
    }

    #[test]
    fn debug() {
        let p: Point2 = pt2(1.0, -2.0);
        assert_eq!(format!("{p:?}"), "Point<()>[1.0, -2.0]");
    }
}
