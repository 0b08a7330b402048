//! Affine 2D transforms.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData as Pd;

use crate::math::{
    angle::Angle,
    approx::ApproxEq,
    point::{Point2, pt2},
    vec::Vec2,
};

/// Tag type for a mapping from space `Src` to space `Dst`.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct RealToReal<Src, Dst>(Pd<(Src, Dst)>);

/// A generic matrix type, tagged with the mapping it represents.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<Repr, Map>(pub Repr, Pd<Map>);

/// An affine transform from 2D space `Src` to 2D space `Dst`, stored as
/// the upper two rows of a 3×3 homogeneous matrix:
/// ```text
/// / x' \   / m00 m01 m02 \   / x \
/// \ y' / = \ m10 m11 m12 / · | y |
///                            \ 1 /
/// ```
pub type Mat2x3<Src, Dst> = Matrix<[[f32; 3]; 2], RealToReal<Src, Dst>>;

impl<Src, Dst> Mat2x3<Src, Dst> {
    /// Returns a matrix with the given rows.
    pub const fn new(rows: [[f32; 3]; 2]) -> Self {
        Self(rows, Pd)
    }

    /// Returns the composite transform that first applies `self`,
    /// then `other`.
    ///
    /// # Examples
    /// ```
    /// # use boing_core::assert_approx_eq;
    /// # use boing_core::math::*;
    /// let m: Mat2x3<(), ()> = scale2(2.0).then(&translate2(vec2(1.0, 0.0)));
    /// assert_approx_eq!(m.apply(&pt2(3.0, 4.0)), pt2(7.0, 8.0));
    /// ```
    #[must_use]
    pub fn then<D>(&self, other: &Mat2x3<Dst, D>) -> Mat2x3<Src, D> {
        let [[a, b, c], [d, e, f]] = other.0;
        let [[g, h, i], [j, k, l]] = self.0;
        Mat2x3::new([
            [a * g + b * j, a * h + b * k, a * i + b * l + c],
            [d * g + e * j, d * h + e * k, d * i + e * l + f],
        ])
    }

    /// Maps a point in `Src` to the corresponding point in `Dst`.
    #[inline]
    pub fn apply(&self, p: &Point2<Src>) -> Point2<Dst> {
        let [[a, b, c], [d, e, f]] = self.0;
        let [x, y] = p.0;
        pt2(a * x + b * y + c, d * x + e * y + f)
    }

    /// Returns the determinant of the linear part of `self`.
    pub fn determinant(&self) -> f32 {
        let [[a, b, _], [d, e, _]] = self.0;
        a * e - b * d
    }

    /// Returns the inverse of `self`, mapping `Dst` back to `Src`.
    ///
    /// The inverse of a rotation is the rotation by the opposite angle:
    /// ```
    /// # use boing_core::assert_approx_eq;
    /// # use boing_core::math::*;
    /// let tilt: Mat2x3<(), ()> = rotate2(degs(17.0));
    /// let p = pt2(0.5, -0.25);
    /// assert_approx_eq!(tilt.inverse().apply(&tilt.apply(&p)), p);
    /// ```
    ///
    /// # Panics
    /// In debug mode, if `self` is singular or nearly so.
    #[must_use]
    pub fn inverse(&self) -> Mat2x3<Dst, Src> {
        use super::float::f32;
        let det = self.determinant();
        debug_assert!(
            f32::abs(det) > core::primitive::f32::EPSILON,
            "singular or near-singular matrix has no well-defined inverse"
        );
        let [[a, b, c], [d, e, f]] = self.0;
        let r = det.recip();
        let (ia, ib, id, ie) = (e * r, -b * r, -d * r, a * r);
        Mat2x3::new([
            [ia, ib, -(ia * c + ib * f)],
            [id, ie, -(id * c + ie * f)],
        ])
    }
}

/// Returns a matrix rotating counterclockwise (in a y-up space) by `a`:
/// ```text
/// x' = x·cos(a) − y·sin(a)
/// y' = x·sin(a) + y·cos(a)
/// ```
/// In a y-down space such as the screen, the rotation appears clockwise.
pub fn rotate2<Sp>(a: Angle) -> Mat2x3<Sp, Sp> {
    let (sin, cos) = a.sin_cos();
    Mat2x3::new([[cos, -sin, 0.0], [sin, cos, 0.0]])
}

/// Returns a matrix scaling uniformly by `s`.
///
/// Scaling is how one unit of measure turns into another, so the source
/// and destination spaces can differ.
pub const fn scale2<Src, Dst>(s: f32) -> Mat2x3<Src, Dst> {
    Mat2x3::new([[s, 0.0, 0.0], [0.0, s, 0.0]])
}

/// Returns a matrix translating by `v`.
pub fn translate2<Sp>(v: Vec2<Sp>) -> Mat2x3<Sp, Sp> {
    Mat2x3::new([[1.0, 0.0, v.x()], [0.0, 1.0, v.y()]])
}

impl<Src, Dst> ApproxEq<Self, f32> for Mat2x3<Src, Dst> {
    fn approx_eq_eps(&self, other: &Self, eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl<R: Debug, M: Debug + Default> Debug for Matrix<R, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix<{:?}>", M::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<S: Debug + Default, D: Debug + Default> Debug for RealToReal<S, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}→{:?}", S::default(), D::default())
    }
}
