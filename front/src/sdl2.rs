//! Frontend using the `sdl2` crate for window creation and event handling.
//!
//! Unlike the `minifb` frontend, drawing does not go through the software
//! rasterizer: lines and polygons are forwarded to the SDL renderer and
//! the `SDL2_gfx` primitives library.

use std::{
    mem::take,
    ops::ControlFlow,
    time::Instant,
};

use log::{info, trace};
use sdl2::{
    EventPump,
    event::Event,
    gfx::primitives::DrawRenderer,
    keyboard::Keycode,
    pixels::Color,
    rect::Point,
    render::WindowCanvas,
};

use boing_core::math::color::{Color3, Color4};
use boing_core::render::{
    raster::ScreenPt, stats::Stats, stats::Throughput, target::Target,
};
use boing_core::util::dims::{Dims, PAL_640_512};

use crate::{Frame, Result, pace::Pacer};

/// A lightweight wrapper of an `SDL2` window.
pub struct Window {
    /// The SDL canvas.
    pub canvas: WindowCanvas,
    /// The SDL event pump.
    pub ev_pump: EventPump,
    /// The width and height of the window.
    pub dims: Dims,
    /// The frame pacer, if the frame rate is capped.
    pub pacer: Option<Pacer>,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub vsync: bool,
}

/// Render target forwarding drawing commands to an SDL canvas.
///
/// Coordinates are truncated to 16-bit integers. SDL cannot tell how many
/// pixels a primitive covers, so the returned pixel counts are always zero.
pub struct Canvas<'a> {
    pub imp: &'a mut WindowCanvas,
    /// The first error returned by SDL, if any.
    pub error: Option<String>,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: PAL_640_512,
            title: "Amiga Boing Ball",
            target_fps: Some(60),
            vsync: false,
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets whether vertical sync is enabled.
    ///
    /// If true, frame rate is tied to the monitor's refresh rate.
    pub fn vsync(mut self, enabled: bool) -> Self {
        self.vsync = enabled;
        self
    }

    /// Creates the window.
    ///
    /// # Errors
    /// Returns [`Error::Sdl`][crate::Error::Sdl] if SDL fails to
    /// initialize or to create the window or its renderer.
    pub fn build(self) -> Result<Window> {
        let Self { dims, title, target_fps, vsync } = self;

        let sdl = sdl2::init()?;

        let mut canvas = sdl
            .video()?
            .window(title, dims.0, dims.1)
            .build()
            .map_err(|e| e.to_string())?
            .into_canvas();

        if vsync {
            canvas = canvas.present_vsync();
        }

        let canvas = canvas
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;

        let ev_pump = sdl.event_pump()?;

        info!("created {}×{} SDL window \"{title}\"", dims.0, dims.1);
        let pacer = target_fps.map(Pacer::from_fps);
        Ok(Window { canvas, ev_pump, dims, pacer })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. title bar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// # Errors
    /// Returns [`Error::Sdl`][crate::Error::Sdl] if drawing a frame fails.
    pub fn run<F>(&mut self, mut frame_fn: F) -> Result<()>
    where
        F: FnMut(&mut Frame<Canvas>) -> ControlFlow<()>,
    {
        let mut stats = Stats::new();

        'main: for n in 0.. {
            for e in self.ev_pump.poll_iter() {
                match e {
                    Event::Quit { .. }
                    | Event::KeyDown {
                        keycode: Some(Keycode::Escape), ..
                    } => break 'main,
                    _ => (),
                }
            }

            let frame_start = Instant::now();
            let frame = &mut Frame {
                n,
                target: Canvas::new(&mut self.canvas),
                stats: Stats::new(),
            };
            let cf = frame_fn(frame);
            let mut frame_stats = take(&mut frame.stats);

            if let Some(e) = frame.target.error.take() {
                return Err(e.into());
            }
            if cf.is_break() {
                break;
            }
            self.canvas.present();

            trace!("frame {n} drawn in {:?}", frame_stats.time);
            frame_stats.frames = 1;
            stats += frame_stats;
            if let Some(pacer) = &self.pacer {
                if pacer.wait(frame_start) {
                    stats.missed += 1;
                }
            }
        }
        info!("rendering statistics:\n{stats}");
        Ok(())
    }
}

impl<'a> Canvas<'a> {
    /// Returns a render target drawing on `imp`.
    pub fn new(imp: &'a mut WindowCanvas) -> Self {
        Self { imp, error: None }
    }

    fn record(&mut self, res: std::result::Result<(), String>) {
        if let Err(e) = res {
            self.error.get_or_insert(e);
        }
    }
}

impl Target for Canvas<'_> {
    fn clear(&mut self, color: Color3) {
        let [r, g, b] = color.0;
        self.imp.set_draw_color(Color::RGB(r, g, b));
        self.imp.clear();
    }

    fn line(&mut self, [p0, p1]: [ScreenPt; 2], color: Color4) -> Throughput {
        self.imp.set_draw_color(to_sdl(color));
        let [x0, y0] = to_i16(p0);
        let [x1, y1] = to_i16(p1);
        let res = self.imp.draw_line(
            Point::new(x0.into(), y0.into()),
            Point::new(x1.into(), y1.into()),
        );
        self.record(res);
        Throughput::default()
    }

    fn fill_polygon(
        &mut self,
        verts: &[ScreenPt],
        color: Color4,
    ) -> Throughput {
        let (xs, ys): (Vec<i16>, Vec<i16>) = verts
            .iter()
            .map(|&p| {
                let [x, y] = to_i16(p);
                (x, y)
            })
            .unzip();
        let res = self.imp.filled_polygon(&xs, &ys, to_sdl(color));
        self.record(res);
        Throughput::default()
    }
}

fn to_sdl(c: Color4) -> Color {
    let [r, g, b, a] = c.0;
    Color::RGBA(r, g, b, a)
}

fn to_i16(p: ScreenPt) -> [i16; 2] {
    [p.x() as i16, p.y() as i16]
}
