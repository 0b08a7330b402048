//! Turning the scene into pixels.
//!
//! This module contains the [scene][scene] description and drawing order,
//! the [target][target] abstraction that drawing commands are issued to,
//! a software [rasterizer][raster] used by the framebuffer target, and
//! rendering [statistics][stats].

pub mod raster;
pub mod scene;
pub mod stats;
pub mod target;

/// Screen space coordinate basis: pixels, x to the right and y down, with
/// the origin at the top left corner of the window.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Screen;
