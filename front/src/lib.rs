//! Frontends for running the Boing Ball demo in a window.
//!
//! Each frontend provides a `Window` with a builder and a `run` method that
//! drives the main loop: it polls for input, invokes a callback to draw the
//! next frame, presents the result, and sleeps to keep the frame rate.

use std::fmt::{self, Display, Formatter};

use boing_core::render::stats::Stats;

pub mod pace;

#[cfg(feature = "minifb")]
pub mod minifb;

#[cfg(feature = "sdl2")]
pub mod sdl2;

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<Tgt> {
    /// Number of the current frame, starting from zero.
    pub n: u32,
    /// Render target in which to draw.
    pub target: Tgt,
    /// Statistics of the current frame, accumulated by the main loop.
    pub stats: Stats,
}

/// Error creating a window or presenting a frame.
#[derive(Debug)]
pub enum Error {
    /// An error reported by `minifb`.
    #[cfg(feature = "minifb")]
    Minifb(::minifb::Error),
    /// An error reported by SDL.
    #[cfg(feature = "sdl2")]
    Sdl(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "minifb")]
            Error::Minifb(e) => write!(f, "minifb error: {e}"),
            #[cfg(feature = "sdl2")]
            Error::Sdl(e) => write!(f, "SDL error: {e}"),
            #[allow(unreachable_patterns)]
            _ => unreachable!(),
        }
    }
}

#[cfg(feature = "minifb")]
impl From<::minifb::Error> for Error {
    fn from(e: ::minifb::Error) -> Self {
        Error::Minifb(e)
    }
}

#[cfg(feature = "sdl2")]
impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Sdl(e)
    }
}
