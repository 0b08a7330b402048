//! Geometry of the ball: the sphere lattice, its tiles, and its shadow.

use core::fmt::Debug;
use core::ops::{Index, IndexMut};

use crate::math::{Mat2x3, Point2};

pub mod shadow;
pub mod sphere;
pub mod tiles;

/// Local coordinate space of the ball: the unit circle centered at the
/// origin, x to the right and y down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Local;

/// Number of latitude lines, poles included, in a [`Lattice`].
pub const LATS: usize = 10;

/// Number of longitude lines in a [`Lattice`]. Only the first nine carry
/// points on the sphere; the tenth is unused.
pub const LONS: usize = 10;

/// A 10×10 grid of points on the ball, indexed by `[latitude, longitude]`.
///
/// Regenerated every frame by [`sphere::sphere_points`] and mapped into
/// screen space with [`Lattice::transform`].
#[derive(Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Lattice<Sp>(pub [[Point2<Sp>; LONS]; LATS]);

/// Quadrilateral, defined by four vertices in winding order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Quad<V>(pub [V; 4]);

impl<Sp> Lattice<Sp> {
    /// Returns a lattice with every point at the origin.
    pub const fn new() -> Self {
        Self([[Point2::ORIGIN; LONS]; LATS])
    }

    /// Returns the lattice with `tf` applied to each of its points.
    pub fn transform<D>(&self, tf: &Mat2x3<Sp, D>) -> Lattice<D> {
        Lattice(self.0.map(|row| row.map(|p| tf.apply(&p))))
    }

    /// Returns an iterator over the rows of constant latitude.
    pub fn rows(&self) -> impl Iterator<Item = &[Point2<Sp>; LONS]> {
        self.0.iter()
    }

    /// Returns the four corners of the cell whose top left corner is at
    /// `[lat, lon]`.
    ///
    /// # Panics
    /// If `lat >= LATS - 1` or `lon >= LONS - 1`.
    pub fn quad(&self, [lat, lon]: [usize; 2]) -> Quad<Point2<Sp>> {
        Quad([
            self[[lat, lon]],
            self[[lat + 1, lon]],
            self[[lat + 1, lon + 1]],
            self[[lat, lon + 1]],
        ])
    }
}

impl<Sp> Default for Lattice<Sp> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Sp: Debug + Default> Debug for Lattice<Sp> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Lattice<{:?}>", Sp::default())?;
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<Sp> Index<[usize; 2]> for Lattice<Sp> {
    type Output = Point2<Sp>;

    #[inline]
    fn index(&self, [lat, lon]: [usize; 2]) -> &Point2<Sp> {
        &self.0[lat][lon]
    }
}

impl<Sp> IndexMut<[usize; 2]> for Lattice<Sp> {
    #[inline]
    fn index_mut(&mut self, [lat, lon]: [usize; 2]) -> &mut Point2<Sp> {
        &mut self.0[lat][lon]
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{pt2, scale2};

    use super::*;

    #[test]
    fn new_lattice_is_all_origin() {
        let l: Lattice<Local> = Lattice::new();
        assert!(l.rows().flatten().all(|p| *p == Point2::ORIGIN));
        assert_eq!(l.rows().count(), 10);
    }

    #[test]
    fn indexing() {
        let mut l: Lattice<Local> = Lattice::new();
        l[[3, 7]] = pt2(1.0, 2.0);
        assert_eq!(l.0[3][7], pt2(1.0, 2.0));
        assert_eq!(l[[7, 3]], Point2::ORIGIN);
    }

    #[test]
    fn quad_corners_in_winding_order() {
        let mut l: Lattice<Local> = Lattice::new();
        for lat in 0..LATS {
            for lon in 0..LONS {
                l[[lat, lon]] = pt2(lat as f32, lon as f32);
            }
        }
        let Quad(vs) = l.quad([2, 5]);
        assert_eq!(
            vs,
            [pt2(2.0, 5.0), pt2(3.0, 5.0), pt2(3.0, 6.0), pt2(2.0, 6.0)]
        );
    }

    #[test]
    fn transform_applies_to_every_point() {
        let mut l: Lattice<Local> = Lattice::new();
        l[[9, 9]] = pt2(1.0, -1.0);

        let tf: Mat2x3<Local, Local> = scale2(2.0);
        let l = l.transform(&tf);
        assert_eq!(l[[9, 9]], pt2(2.0, -2.0));
        assert_eq!(l[[0, 0]], Point2::ORIGIN);
    }
}
