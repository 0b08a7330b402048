//! The sphere lattice and its projection onto the screen.

use crate::anim::{AnimationState, TILE_WIDTH};
use crate::math::{
    angle::{Angle, degs},
    mat::{Mat2x3, rotate2, scale2, translate2},
    point::{Point2, pt2},
};
use crate::render::Screen;

use super::{LATS, Lattice, Local};

/// Returns the latitude of the `i`th line of latitude at rotation `phase`.
///
/// Lines 0 and 9 are the poles, at −90° and +90° regardless of the phase.
/// The lines in between are 22.5° apart, shifted by `phase`:
/// ```text
/// lat(i) = −90° + phase + (i − 1) · 22.5°
/// ```
/// # Examples
/// ```
/// # use boing_core::geom::sphere::latitude;
/// # use boing_core::math::degs;
/// assert_eq!(latitude(0.0, 0), degs(-90.0));
/// assert_eq!(latitude(0.0, 5), degs(0.0));
/// assert_eq!(latitude(10.0, 9), degs(90.0));
/// ```
pub fn latitude(phase: f32, i: usize) -> Angle {
    match i {
        0 => degs(-90.0),
        9 => degs(90.0),
        _ => degs(-90.0 + phase + (i as f32 - 1.0) * TILE_WIDTH),
    }
}

/// Returns the longitude of the `j`th line of longitude.
pub fn longitude(j: usize) -> Angle {
    degs(-90.0 + j as f32 * TILE_WIDTH)
}

/// Computes the lattice of points on the unit sphere at rotation `phase`.
///
/// The sphere is seen from the side, rotating about its vertical axis, so
/// the latitude lines of the lattice appear as vertical curves and the
/// longitude lines as horizontal chords. Point `[i, j]` lies at
/// ```text
/// (sin(lat(i)) · cos(lon(j)), sin(lon(j)))
/// ```
/// Only the first nine longitude columns are computed; the tenth is left
/// at the origin.
///
/// `phase` is expected to be in `[0, 22.5)`; larger values are equivalent
/// to a shift by whole tiles, which changes the colors but not the shape.
pub fn sphere_points(phase: f32) -> Lattice<Local> {
    let sin_lat: [f32; LATS] =
        core::array::from_fn(|i| latitude(phase, i).sin());

    let mut res = Lattice::new();
    for j in 0..LATS - 1 {
        let (y, l) = longitude(j).sin_cos();
        for (i, s) in sin_lat.iter().enumerate() {
            res[[i, j]] = pt2(s * l, y);
        }
    }
    res
}

/// The shape and orientation of the ball.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ball {
    /// The tilt of the axis of rotation.
    pub tilt: Angle,
    /// The radius of the ball, in pixels.
    pub scale: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self { tilt: degs(17.0), scale: 120.0 }
    }
}

impl Ball {
    /// Returns the transform from the local space of the ball to the
    /// screen, with the center of the ball at `center`.
    ///
    /// The lattice is first tilted, then scaled, then translated.
    pub fn transform(&self, center: Point2<Screen>) -> Mat2x3<Local, Screen> {
        rotate2(self.tilt)
            .then(&scale2(self.scale))
            .then(&translate2(center.to_vec()))
    }

    /// Computes the screen-space lattice of the ball in state `st`.
    pub fn project(&self, st: &AnimationState) -> Lattice<Screen> {
        sphere_points(st.twist()).transform(&self.transform(st.center()))
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn latitudes_at_phase_zero() {
        let lats: [f32; 10] =
            core::array::from_fn(|i| latitude(0.0, i).to_degs());
        assert_approx_eq!(
            lats,
            [-90.0, -90.0, -67.5, -45.0, -22.5, 0.0, 22.5, 45.0, 67.5, 90.0],
            eps = 1e-5
        );
    }

    #[test]
    fn poles_do_not_depend_on_phase() {
        for phase in [0.0, 5.0, 11.25, 22.4] {
            let pts = sphere_points(phase);
            for j in 0..9 {
                // sin(±90°) = ±1, the x coordinate is ±cos(lon)
                let cos_lon = longitude(j).cos();
                assert_approx_eq!(pts[[0, j]].x(), -cos_lon);
                assert_approx_eq!(pts[[9, j]].x(), cos_lon);
            }
        }
    }

    #[test]
    fn points_are_on_unit_disc() {
        for phase in [0.0, 7.0, 15.0, 22.4] {
            let pts = sphere_points(phase);
            for p in pts.rows().flatten() {
                let r2 = p.to_vec().dot(&p.to_vec());
                assert!(r2 <= 1.0 + 1e-6, "{p:?}");
            }
        }
    }

    #[test]
    fn longitude_rows_have_constant_y() {
        let pts = sphere_points(3.0);
        for j in 0..9 {
            let y = longitude(j).sin();
            for i in 0..10 {
                assert_approx_eq!(pts[[i, j]].y(), y);
            }
        }
    }

    #[test]
    fn tenth_column_is_origin() {
        let pts = sphere_points(12.0);
        for i in 0..10 {
            assert_eq!(pts[[i, 9]], Point2::ORIGIN);
        }
    }

    #[test]
    fn top_row_at_equator_phase() {
        // Point [5, 0] is on the equator at the top of the ball
        let pts = sphere_points(0.0);
        assert_approx_eq!(pts[[5, 0]], pt2(0.0, -1.0));
        assert_approx_eq!(pts[[5, 4]], pt2(0.0, 0.0));
    }

    #[test]
    fn transform_maps_origin_to_center() {
        let ball = Ball::default();
        let c = pt2(320.0, 150.0);
        assert_approx_eq!(ball.transform(c).apply(&Point2::ORIGIN), c);
    }

    #[test]
    fn transform_matches_tilt_then_scale() {
        let ball = Ball::default();
        let (st, ct) = degs(17.0).sin_cos();
        let (x, y) = (0.6, -0.8);
        let p = ball.transform(pt2(100.0, 200.0)).apply(&pt2(x, y));
        assert_approx_eq!(
            p,
            pt2(
                (x * ct - y * st) * 120.0 + 100.0,
                (x * st + y * ct) * 120.0 + 200.0
            )
        );
    }

    #[test]
    fn tilt_round_trip() {
        let tilt: Mat2x3<Local, Local> = rotate2(degs(17.0));
        let inv = tilt.inverse();
        for p in sphere_points(9.0).rows().flatten() {
            assert_approx_eq!(inv.apply(&tilt.apply(p)), *p, eps = 1e-5);
        }
    }

    #[test]
    fn project_places_lattice_around_center() {
        let ball = Ball::default();
        let st = AnimationState::default();
        let pts = ball.project(&st);

        // The unused column collapses onto the center
        assert_approx_eq!(pts[[4, 9]], st.center());

        for p in pts.rows().flatten() {
            let d = *p - st.center();
            assert!(d.dot(&d) <= 120.0 * 120.0 + 0.1, "{p:?}");
        }
    }
}
