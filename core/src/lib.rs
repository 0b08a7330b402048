//! ```text
//!    ____   ____  _____ _   _  _____
//!   | __ ) / __ \|_   _| \ | |/ ____|
//!   |  _ \| |  | | | | |  \| | |  __
//!   | |_) | |__| |_| |_| |\  | |_|_ |
//!   |____/ \____/|_____|_| \_|\_____|
//! ```
//!
//! Core functionality of the Boing Ball demo.
//!
//! Includes a small, strongly typed 2D math library with points, vectors,
//! affine matrices, colors, and angles; the per-frame geometry of the ball
//! (sphere lattice, checkered tiles, and shadow); the bounce physics; and
//! a software rasterizer for filling polygons and drawing lines into a
//! pixel buffer.
//!
//! Nothing in this crate touches a window or a clock. A frame is produced
//! by [stepping][anim::AnimationState::step] the animation state and
//! handing it to a [`Scene`][render::scene::Scene], which issues drawing
//! commands to any [`Target`][render::target::Target].
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of `std`. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for `no_std` targets.
//!
//! One of the two must be enabled; the ball cannot be computed without
//! trigonometry.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

#[cfg(not(feature = "fp"))]
compile_error!("boing-core requires either the `std` or the `libm` feature");

pub mod anim;
pub mod geom;
pub mod math;
pub mod render;
pub mod util;

pub mod prelude {
    pub use crate::anim::{AnimationState, Heading, Physics};
    pub use crate::geom::{
        Lattice, Local, Quad, sphere::Ball, tiles::Shade, tiles::Tile,
    };
    pub use crate::math::{
        angle::{Angle, degs, rads},
        color::{Color3, Color4, rgb, rgba},
        mat::{Mat2x3, rotate2, scale2, translate2},
        point::{Point2, pt2},
        vec::{Vec2, vec2},
    };
    pub use crate::render::{
        Screen,
        scene::Scene,
        stats::Stats,
        target::{Framebuf, Target},
    };
    pub use crate::util::{
        buf::{AsMutSlice2, Buf2, MutSlice2},
        dims::Dims,
    };
}
