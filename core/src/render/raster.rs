//! Translation of vector shapes into discrete pixels in the framebuffer.
//!
//! Rasterization proceeds by turning a shape such as a polygon into a
//! sequence of *scanlines*, each corresponding to a horizontal span of
//! pixels covered by the shape on a given line. The caller decides what
//! to do with each span; typically it is filled with a color.
//!
//! A pixel is *covered*, and drawn, if and only if its center point lies
//! inside the shape. This ensures that if two polygons share an edge, each
//! pixel at the boundary is drawn by exactly one of them, with no gaps or
//! overdrawn pixels. For the checkered ball this means that the tiles fit
//! together seamlessly.

use alloc::vec::Vec;
use core::ops::Range;

use crate::math::point::Point2;
use crate::render::Screen;
use crate::util::dims::Dims;

/// A horizontal, 1-pixel-thick "slice" of a shape being rasterized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scanline {
    /// The y coordinate of the line.
    pub y: usize,
    /// The range of x coordinates spanned by the line.
    pub xs: Range<usize>,
}

/// Point in screen space.
pub type ScreenPt = Point2<Screen>;

/// Rasterizes a filled polygon defined by `verts`.
///
/// The polygon may be concave or even self-intersecting; the even-odd rule
/// determines which regions are inside. Invokes `scan_fn` for each nonempty
/// span of covered pixels, in top to bottom order. Spans are clipped to the
/// rectangle `(0, 0)..dims`.
///
/// Polygons with fewer than three vertices cover no pixels.
pub fn polygon<F>(verts: &[ScreenPt], dims: Dims, mut scan_fn: F)
where
    F: FnMut(Scanline),
{
    if verts.len() < 3 {
        return;
    }
    let (w, h) = (dims.0 as f32, dims.1 as f32);

    let (y_min, y_max) = verts
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v.y()), hi.max(v.y()))
        });

    // Find the y values of the first and one-past-last pixel centers
    // covered vertically, then clamp to the viewport
    let y0 = round_up_to_half(y_min).clamp(0.5, h + 0.5);
    let y1 = round_up_to_half(y_max).clamp(0.5, h + 0.5);

    let edges = || verts.iter().zip(verts.iter().cycle().skip(1));
    let mut xs = Vec::with_capacity(verts.len());

    let mut y = y0;
    while y < y1 {
        // Intersect the pixel center line with every edge. An edge crosses
        // the line if exactly one of its endpoints is strictly above it;
        // this counts shared vertices exactly once and skips horizontal
        // edges altogether.
        xs.clear();
        xs.extend(edges().filter_map(|(a, b)| {
            ((a.y() < y) != (b.y() < y)).then(|| {
                let t = (y - a.y()) / (b.y() - a.y());
                a.x() + t * (b.x() - a.x())
            })
        }));
        xs.sort_unstable_by(f32::total_cmp);

        for span in xs.chunks_exact(2) {
            let x0 = round_up_to_half(span[0]).clamp(0.5, w + 0.5);
            let x1 = round_up_to_half(span[1]).clamp(0.5, w + 0.5);
            if x0 < x1 {
                scan_fn(Scanline {
                    y: y as usize,
                    xs: x0 as usize..x1 as usize,
                });
            }
        }
        y += 1.0;
    }
}

/// Rasterizes a one-pixel-thick line between two points.
///
/// Invokes `scan_fn` for each pixel drawn. The pixel containing the start
/// point is drawn, the one containing the end point is not. Pixels outside
/// the rectangle `(0, 0)..dims` are skipped.
pub fn line<F>([mut p0, mut p1]: [ScreenPt; 2], dims: Dims, mut scan_fn: F)
where
    F: FnMut(Scanline),
{
    let (w, h) = (dims.0 as usize, dims.1 as usize);
    let mut plot = |x: f32, y: f32| {
        if x >= 0.0 && y >= 0.0 {
            let (x, y) = (x as usize, y as usize);
            if x < w && y < h {
                scan_fn(Scanline { y, xs: x..x + 1 });
            }
        }
    };

    if p0.y() > p1.y() {
        (p0, p1) = (p1, p0);
    }
    let [dx, dy] = (p1 - p0).0;

    if crate::math::float::f32::abs(dx) > dy {
        // More wide than tall
        if dx < 0.0 {
            // Always draw from left to right
            (p0, p1) = (p1, p0);
        }
        let dy_dx = dy / dx;
        let x0 = round_up_to_half(p0.x());
        let x1 = round_up_to_half(p1.x());
        // Adjust y0 to match the rounded x0
        let mut y = p0.y() + dy_dx * (x0 - p0.x());
        let mut x = x0;
        while x < x1 {
            plot(x, y);
            x += 1.0;
            y += dy_dx;
        }
    } else {
        // More tall than wide
        let dx_dy = dx / dy;
        let y0 = round_up_to_half(p0.y());
        let y1 = round_up_to_half(p1.y());
        // Adjust x0 to match the rounded y0
        let mut x = p0.x() + dx_dy * (y0 - p0.y());
        let mut y = y0;
        while y < y1 {
            plot(x, y);
            y += 1.0;
            x += dx_dy;
        }
    }
}

/// Returns the center of the first pixel whose center is greater than `x`.
#[inline]
fn round_up_to_half(x: f32) -> f32 {
    crate::math::float::f32::floor(x + 0.5) + 0.5
}
