//! Two-dimensional linear algebra and other useful mathematics.
//!
//! Includes [points][point], [vectors][self::vec], [matrices][mat],
//! [colors][color], and [angles][angle], as well as utilities such as
//! approximate equality comparisons.
//!
//! Points, vectors, and matrices are tagged with a type that represents
//! the *space* they're embedded in. A point on the unit sphere cannot be
//! passed where a screen-space point is expected without going through an
//! explicit transform, which catches a whole class of mix-ups at compile
//! time instead of as a ball drawn in the top left corner.

pub use {
    angle::{Angle, degs, rads},
    approx::ApproxEq,
    color::{Color, Color3, Color4, rgb, rgba},
    mat::{Mat2x3, rotate2, scale2, translate2},
    point::{Point2, pt2},
    vec::{Vec2, vec2},
};

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod point;
pub mod vec;
