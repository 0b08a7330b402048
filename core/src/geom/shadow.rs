//! The shadow the ball casts on the back wall.

use crate::math::{point::Point2, vec::Vec2};

use super::Lattice;

/// Number of vertices in the shadow polygon.
pub const VERTS: usize = 16;

/// Returns the silhouette polygon of the ball, displaced by `offset`.
///
/// The outline follows the leftmost latitude line down from the top of the
/// ball, then the rightmost one back up from the bottom. Both lines have
/// nine points, but the polygon only has sixteen vertices: the second pass
/// overwrites the two lowest points of the first, cutting a corner off the
/// lower left of the silhouette.
pub fn shadow<Sp>(
    lattice: &Lattice<Sp>,
    offset: Vec2<Sp>,
) -> [Point2<Sp>; VERTS] {
    let mut poly = [Point2::ORIGIN; VERTS];
    for i in 0..=8 {
        poly[i] = lattice[[0, i]] + offset;
    }
    for i in 0..=8 {
        poly[7 + i] = lattice[[9, 8 - i]] + offset;
    }
    poly
}

#[cfg(test)]
mod tests {
    use crate::math::{pt2, vec2};

    use super::*;

    fn numbered() -> Lattice<()> {
        let mut l = Lattice::new();
        for lat in 0..10 {
            for lon in 0..10 {
                l[[lat, lon]] = pt2(lat as f32, lon as f32);
            }
        }
        l
    }

    #[test]
    fn vertex_order_with_overwrite() {
        let poly = shadow(&numbered(), vec2(0.0, 0.0));

        for (i, p) in poly[..7].iter().enumerate() {
            assert_eq!(*p, pt2(0.0, i as f32), "vertex {i}");
        }
        for (i, p) in poly[7..].iter().enumerate() {
            assert_eq!(*p, pt2(9.0, (8 - i) as f32), "vertex {}", i + 7);
        }
    }

    #[test]
    fn vertices_are_offset() {
        let poly = shadow(&numbered(), vec2(50.0, 0.0));
        assert_eq!(poly[0], pt2(50.0, 0.0));
        assert_eq!(poly[15], pt2(59.0, 0.0));
    }
}
