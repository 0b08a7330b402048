//! Various utility types and functions.

pub mod buf;

pub mod dims {
    /// Width and height of a window, buffer, or other rectangular area.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
    pub struct Dims<T = u32>(pub T, pub T);

    /// The classic PAL Amiga high-resolution screen size, 640×512.
    pub const PAL_640_512: Dims = Dims(640, 512);

    impl Dims<u32> {
        /// Returns the number of elements in an area of size `self`.
        pub const fn area(&self) -> usize {
            self.0 as usize * self.1 as usize
        }
    }
}
