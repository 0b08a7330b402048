//! Tessellation of the lattice into checkered tiles.

use core::fmt::{Debug, Formatter};

use crate::math::point::Point2;

use super::{LATS, Lattice, Quad};

/// Number of tile rows, one between each pair of adjacent longitudes.
pub const ROWS: usize = 8;
/// Number of tiles on each row, one between each pair of adjacent latitudes.
pub const COLS: usize = LATS - 1;
/// Number of tiles on the ball.
pub const COUNT: usize = ROWS * COLS;

/// The shade of a tile.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Shade {
    #[default]
    Light,
    Dark,
}

/// A single quadrilateral cell of the lattice and its shade.
#[derive(Copy, Clone, PartialEq)]
pub struct Tile<Sp> {
    pub quad: Quad<Point2<Sp>>,
    pub shade: Shade,
}

impl Shade {
    /// Returns the other shade.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl<Sp: Debug + Default> Debug for Tile<Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tile")
            .field("quad", &self.quad)
            .field("shade", &self.shade)
            .finish()
    }
}

/// Returns the tiles of `lattice` in drawing order.
///
/// Tiles are emitted row by row, top to bottom; within a row, from the
/// leftmost latitude to the rightmost. The shade alternates on every tile,
/// starting from dark if `alternate` is true and light otherwise. As each
/// row has an odd number of tiles, the pattern also alternates vertically.
pub fn tiles<Sp>(
    lattice: &Lattice<Sp>,
    alternate: bool,
) -> impl Iterator<Item = Tile<Sp>> + '_ {
    let first = if alternate { Shade::Dark } else { Shade::Light };
    (0..ROWS)
        .flat_map(|lon| (0..COLS).map(move |lat| [lat, lon]))
        .scan(first, |shade, pos| {
            let tile = Tile { quad: lattice.quad(pos), shade: *shade };
            *shade = shade.flip();
            Some(tile)
        })
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::anim::{AnimationState, Physics};
    use crate::geom::sphere::Ball;
    use crate::math::pt2;

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
    fn tile_count_is_72() {
        assert_eq!(tiles(&numbered(), false).count(), COUNT);
        assert_eq!(COUNT, 72);

        let phys = Physics::default();
        let mut st = AnimationState::new(&phys);
        for _ in 0..200 {
            st = st.step(&phys);
            let lattice = Ball::default().project(&st);
            assert_eq!(tiles(&lattice, st.is_alternate()).count(), 72);
        }
    }

    #[test]
    fn scan_order_is_row_major() {
        let ts: Vec<_> = tiles(&numbered(), false).collect();

        assert_eq!(
            ts[0].quad.0,
            [pt2(0.0, 0.0), pt2(1.0, 0.0), pt2(1.0, 1.0), pt2(0.0, 1.0)]
        );
        assert_eq!(ts[8].quad.0[0], pt2(8.0, 0.0));
        assert_eq!(ts[9].quad.0[0], pt2(0.0, 1.0));
        assert_eq!(
            ts[71].quad.0,
            [pt2(8.0, 7.0), pt2(9.0, 7.0), pt2(9.0, 8.0), pt2(8.0, 8.0)]
        );
    }

    #[test]
    fn shades_alternate_per_tile() {
        let ts: Vec<_> = tiles(&numbered(), false).collect();
        assert_eq!(ts[0].shade, Shade::Light);
        for w in ts.windows(2) {
            assert_ne!(w[0].shade, w[1].shade);
        }
        // Odd row length flips the shade of the first tile of each row
        assert_eq!(ts[9].shade, Shade::Dark);
    }

    #[test]
    fn alternate_starts_dark() {
        let lattice = numbered();
        let mut ts = tiles(&lattice, true);
        assert_eq!(ts.next().map(|t| t.shade), Some(Shade::Dark));
        assert_eq!(ts.next().map(|t| t.shade), Some(Shade::Light));
    }

    #[test]
    fn half_the_tiles_are_dark() {
        let dark = tiles(&numbered(), false)
            .filter(|t| t.shade == Shade::Dark)
            .count();
        assert_eq!(dark, 36);
    }
}
