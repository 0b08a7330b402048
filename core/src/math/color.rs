//! Colors and color spaces.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;

//
// Types
//

/// A generic color type, similar to [`Vector`][crate::math::vec::Vector].
///
/// # Type parameters
/// * `Repr`: the representation of the components of `Self`.
///   Color components are also called *channels*.
/// * `Space`: the color space that `Self` is an element of.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The (S)RGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgb;

/// The (S)RGBA color space (RGB plus alpha, or opacity).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Rgba;

/// An RGB color with `u8` components.
pub type Color3<Space = Rgb> = Color<[u8; 3], Space>;

/// An RGBA color with `u8` components.
pub type Color4<Space = Rgba> = Color<[u8; 4], Space>;

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Ch>(r: Ch, g: Ch, b: Ch) -> Color<[Ch; 3], Rgb> {
    Color([r, g, b], PhantomData)
}
/// Returns a new RGBA color with `r`, `g`, `b`, and `a` components.
pub const fn rgba<Ch>(r: Ch, g: Ch, b: Ch, a: Ch) -> Color<[Ch; 4], Rgba> {
    Color([r, g, b, a], PhantomData)
}

//
// Inherent impls
//

impl Color3 {
    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    ///
    /// # Examples
    /// ```
    /// # use boing_core::math::rgb;
    /// assert_eq!(rgb(0xB7u8, 0x2D, 0xA8).to_rgb_u32(), 0x00_B7_2D_A8);
    /// ```
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
    /// Returns the color with the channels of a `0x00_RR_GG_BB` value.
    #[inline]
    pub const fn from_rgb_u32(c: u32) -> Self {
        let [_, r, g, b] = c.to_be_bytes();
        rgb(r, g, b)
    }
}

impl Color4 {
    /// Returns the color channels of `self`, discarding alpha.
    #[inline]
    pub const fn to_rgb(self) -> Color3 {
        let [r, g, b, _] = self.0;
        rgb(r, g, b)
    }
    /// Returns the alpha channel of `self`.
    #[inline]
    pub const fn a(&self) -> u8 {
        self.0[3]
    }
    /// Returns whether `self` is fully opaque.
    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a() == 0xFF
    }

    /// Composites `self` over `dst` with the "over" operator,
    /// weighting by the alpha of `self`.
    ///
    /// # Examples
    /// ```
    /// # use boing_core::math::{rgb, rgba};
    /// let half_red = rgba(0xFFu8, 0, 0, 0x80);
    /// assert_eq!(half_red.over(rgb(0, 0, 0xFF)), rgb(0x80, 0, 0x7F));
    /// ```
    pub fn over(self, dst: Color3) -> Color3 {
        let a = self.a() as u32;
        let [r, g, b] = [0, 1, 2].map(|i| {
            let (s, d) = (self.0[i] as u32, dst.0[i] as u32);
            ((s * a + d * (0xFF - a) + 0x7F) / 0xFF) as u8
        });
        rgb(r, g, b)
    }
}

//
// Foreign trait impls
//

impl<Sp: Debug + Default> Debug for Color<[u8; 3], Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{:?}(#{r:02X}{g:02X}{b:02X})", Sp::default())
    }
}

impl<Sp: Debug + Default> Debug for Color<[u8; 4], Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "{:?}(#{r:02X}{g:02X}{b:02X}{a:02X})", Sp::default())
    }
}

impl<R, Sp> From<R> for Color<R, Sp> {
    #[inline]
    fn from(els: R) -> Self {
        Self(els, PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn rgb_to_u32() {
        assert_eq!(rgb(0x11u8, 0x22, 0x33).to_rgb_u32(), 0x00_11_22_33);
    }

    #[test]
    fn u32_round_trip() {
        let c = rgb(0xAAu8, 0xAA, 0xAA);
        assert_eq!(Color3::from_rgb_u32(c.to_rgb_u32()), c);
    }

    #[test]
    fn opaque_over_is_source() {
        let red = rgba(0xFFu8, 0, 0, 0xFF);
        assert!(red.is_opaque());
        assert_eq!(red.over(rgb(0xAA, 0xAA, 0xAA)), red.to_rgb());
    }

    #[test]
    fn transparent_over_is_destination() {
        let clear = rgba(0xFFu8, 0xFF, 0xFF, 0);
        assert_eq!(clear.over(rgb(0x66, 0x66, 0x66)), rgb(0x66, 0x66, 0x66));
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", rgb(0xB7u8, 0x2D, 0xA8)), "Rgb(#B72DA8)");
        assert_eq!(
            format!("{:?}", rgba(0x66u8, 0x66, 0x66, 0xFF)),
            "Rgba(#666666FF)"
        );
    }
}
