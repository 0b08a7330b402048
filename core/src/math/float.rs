//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! re-exports them either from `std` or from the `libm` crate, depending
//! on which feature is enabled, under the common name `f32`:
//! ```
//! # use boing_core::math::float::f32;
//! assert_eq!(f32::floor(1.5), 1.0);
//! ```
//! Import it in a narrow scope; in a module scope it would shadow the
//! primitive type.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabsf as abs;
    pub use libm::floorf as floor;
    pub use libm::truncf as trunc;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;

    /// Returns the least non-negative remainder of `x` (mod `m`).
    #[inline]
    pub fn rem_euclid(x: f32, m: f32) -> f32 {
        let r = x % m;
        r + if r < 0.0 { abs(m) } else { 0.0 }
    }
    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        (sin(x), cos(x))
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;
