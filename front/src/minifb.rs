//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    mem::take,
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use log::{info, trace};
use minifb::{Key, WindowOptions};

use boing_core::render::{stats::Stats, target};
use boing_core::util::{
    buf::{Buf2, MutSlice2},
    dims::{Dims, PAL_640_512},
};

use crate::{Frame, Result, pace::Pacer};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
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
    pub opts: WindowOptions,
}

/// Software framebuffer drawing directly into the window's pixel buffer.
pub type Framebuf<'a> = target::Framebuf<MutSlice2<'a, u32>>;

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: PAL_640_512,
            title: "Amiga Boing Ball",
            target_fps: Some(60),
            opts: WindowOptions::default(),
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
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    ///
    /// # Errors
    /// Returns [`Error::Minifb`][crate::Error::Minifb] if the window
    /// cannot be created.
    pub fn build(self) -> Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let imp =
            minifb::Window::new(title, dims.0 as usize, dims.1 as usize, opts)?;
        info!("created {}×{} minifb window \"{title}\"", dims.0, dims.1);
        let pacer = target_fps.map(Pacer::from_fps);
        Ok(Window { imp, dims, pacer })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with pixel data from `fb`.
    ///
    /// The data is interpreted as colors in `0x00_RR_GG_BB` format.
    pub fn present(&mut self, fb: &[u32]) -> Result<()> {
        let Dims(w, h) = self.dims;
        self.imp
            .update_with_buffer(fb, w as usize, h as usize)?;
        Ok(())
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// The accumulated statistics are logged when the loop ends.
    pub fn run<F>(&mut self, mut frame_fn: F) -> Result<()>
    where
        F: FnMut(&mut Frame<Framebuf>) -> ControlFlow<()>,
    {
        let mut cbuf = Buf2::new(self.dims);
        let mut stats = Stats::new();

        for n in 0.. {
            if self.should_quit() {
                break;
            }
            let frame_start = Instant::now();
            let frame = &mut Frame {
                n,
                target: target::Framebuf::new(cbuf.as_mut_slice2()),
                stats: Stats::new(),
            };
            let cf = frame_fn(frame);
            let mut frame_stats = take(&mut frame.stats);

            if let Break(_) = cf {
                break;
            }
            self.present(cbuf.data())?;

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

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}
