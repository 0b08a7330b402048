//! Render targets.
//!
//! A render target is anything that can carry out the three drawing
//! commands the scene needs: clearing the whole target, drawing a line,
//! and filling a polygon. The typical render target is a framebuffer,
//! but a target can also forward the commands to a hardware-accelerated
//! renderer, or just record them.

use crate::math::color::{Color3, Color4};
use crate::util::buf::AsMutSlice2;
use crate::util::dims::Dims;

use super::raster::{self, Scanline, ScreenPt};
use super::stats::Throughput;

/// Trait for types that can be used as render targets.
pub trait Target {
    /// Fills the whole target with `color`.
    fn clear(&mut self, color: Color3);

    /// Draws a one-pixel-thick line between two points.
    ///
    /// Returns count of pixels input and output.
    fn line(&mut self, seg: [ScreenPt; 2], color: Color4) -> Throughput;

    /// Fills the polygon defined by `verts`.
    ///
    /// Returns count of pixels input and output.
    fn fill_polygon(&mut self, verts: &[ScreenPt], color: Color4)
    -> Throughput;
}

/// Framebuffer, a color buffer of `0x00_RR_GG_BB` pixels rasterized into
/// in software.
#[derive(Clone)]
pub struct Framebuf<Col> {
    pub color_buf: Col,
}

impl<Col: AsMutSlice2<u32>> Framebuf<Col> {
    /// Returns a framebuffer drawing into `color_buf`.
    pub fn new(color_buf: Col) -> Self {
        Self { color_buf }
    }

    /// Returns the width and height of `self`.
    pub fn dims(&mut self) -> Dims {
        self.color_buf.as_mut_slice2().dims()
    }

    /// Writes a single scanline of `color` into this framebuffer.
    ///
    /// Opaque colors overwrite the existing pixels, translucent colors are
    /// blended over them, and fully transparent colors are discarded.
    pub fn rasterize(&mut self, sl: Scanline, color: Color4) -> Throughput {
        let Scanline { y, xs } = sl;
        let mut cbuf = self.color_buf.as_mut_slice2();
        let span = &mut cbuf[y][xs];

        let mut io = Throughput { i: span.len(), o: 0 };
        if color.is_opaque() {
            span.fill(color.to_rgb().to_rgb_u32());
            io.o = io.i;
        } else if color.a() > 0 {
            for pix in span {
                let dst = Color3::from_rgb_u32(*pix);
                *pix = color.over(dst).to_rgb_u32();
            }
            io.o = io.i;
        }
        io
    }
}

impl<Col: AsMutSlice2<u32>> Target for Framebuf<Col> {
    fn clear(&mut self, color: Color3) {
        self.color_buf
            .as_mut_slice2()
            .fill(color.to_rgb_u32());
    }

    fn line(&mut self, seg: [ScreenPt; 2], color: Color4) -> Throughput {
        let dims = self.dims();
        let mut io = Throughput::default();
        raster::line(seg, dims, |sl| io += self.rasterize(sl, color));
        io
    }

    fn fill_polygon(
        &mut self,
        verts: &[ScreenPt],
        color: Color4,
    ) -> Throughput {
        let dims = self.dims();
        let mut io = Throughput::default();
        raster::polygon(verts, dims, |sl| io += self.rasterize(sl, color));
        io
    }
}
