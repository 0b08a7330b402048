//! Two-dimensional buffers, such as framebuffers.

use alloc::{vec, vec::Vec};
use core::fmt::{Debug, Formatter};
use core::ops::{Deref, DerefMut};

use inner::Inner;

use super::dims::Dims;

/// A trait for types that can provide a mutable view of their data
/// as a `MutSlice2`.
pub trait AsMutSlice2<T> {
    /// Returns a mutably borrowed `MutSlice2` view of `Self`.
    fn as_mut_slice2(&mut self) -> MutSlice2<'_, T>;
}

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index `w * y + x` in the
/// backing vector.
///
/// # Examples
/// ```
/// # use boing_core::util::{buf::*, dims::Dims};
/// // Elements initialized with `Default::default()`
/// let mut buf = Buf2::new(Dims(4, 4));
/// // Indexing with a pair [x, y] yields element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with an usize i yields row with index i as a slice:
/// assert_eq!(&buf[1usize], &[0, 0, 123, 0]);
/// ```
#[derive(Clone, PartialEq)]
#[repr(transparent)]
pub struct Buf2<T>(Inner<T, Vec<T>>);

/// A mutable rectangular view to a region of a `Buf2`, or in general
/// any `&mut [T]` slice of memory, such as a window's pixel buffer.
///
/// The rows of a `MutSlice2` may be `stride` elements apart, leaving
/// elements between the end of a row and the start of the next untouched:
/// ```text
/// +------stride-----+
/// |____w____        |
/// |r0_______|       |
/// |r1_______|  h    |
/// |r2_______|       |
/// +-----------------+
/// ```
#[repr(transparent)]
pub struct MutSlice2<'a, T>(Inner<T, &'a mut [T]>);

impl<T> Buf2<T> {
    /// Returns a buffer of size `dims`, with every element initialized
    /// by calling `T::default()`.
    pub fn new(dims: Dims) -> Self
    where
        T: Clone + Default,
    {
        Self::new_from(dims, vec![T::default(); dims.area()])
    }
    /// Returns a buffer of size `dims`, with elements initialized with
    /// values from `init` in row-major order.
    ///
    /// # Panics
    /// If there are fewer than `w * h` elements in `init`.
    pub fn new_from<I>(dims: Dims, init: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let (w, h) = (dims.0 as usize, dims.1 as usize);
        let data: Vec<_> = init.into_iter().take(w * h).collect();
        assert_eq!(data.len(), w * h);
        Self(Inner::new(w, h, w, data))
    }

    /// Returns a view of the backing data of `self`.
    pub fn data(&self) -> &[T] {
        self.0.data()
    }
}

impl<'a, T> MutSlice2<'a, T> {
    /// Returns a new `MutSlice2` view to `data` with dimensions `w` and `h`
    /// and stride `stride`.
    ///
    /// # Panics
    /// if `stride < width` or if the slice would overflow `data`.
    pub fn new(w: usize, h: usize, stride: usize, data: &'a mut [T]) -> Self {
        Self(Inner::new(w, h, stride, data))
    }
}

impl<T> AsMutSlice2<T> for Buf2<T> {
    #[inline]
    fn as_mut_slice2(&mut self) -> MutSlice2<'_, T> {
        self.0.as_mut_slice2()
    }
}
impl<T> AsMutSlice2<T> for MutSlice2<'_, T> {
    #[inline]
    fn as_mut_slice2(&mut self) -> MutSlice2<'_, T> {
        self.0.as_mut_slice2()
    }
}

impl<T> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.0.debug_fmt(f, "Buf2")
    }
}
impl<T> Debug for MutSlice2<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.0.debug_fmt(f, "MutSlice2")
    }
}

impl<T> Deref for Buf2<T> {
    type Target = Inner<T, Vec<T>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<'a, T> Deref for MutSlice2<'a, T> {
    type Target = Inner<T, &'a mut [T]>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Buf2<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
impl<T> DerefMut for MutSlice2<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

pub mod inner {
    use core::fmt::Formatter;
    use core::marker::PhantomData;
    use core::ops::{Deref, DerefMut, Index, IndexMut};

    use crate::util::buf::MutSlice2;
    use crate::util::dims::Dims;

    /// A helper type that abstracts over owned and borrowed buffers.
    /// The types `Buf2` and `MutSlice2` deref to `Inner`.
    #[derive(Copy, Clone, PartialEq)]
    pub struct Inner<T, D> {
        w: usize,
        h: usize,
        stride: usize,
        data: D,
        _pd: PhantomData<T>,
    }

    impl<T, D> Inner<T, D> {
        /// Returns the width and height of `self`.
        #[inline]
        pub fn dims(&self) -> Dims {
            Dims(self.w as u32, self.h as u32)
        }

        #[inline]
        fn to_index(&self, x: usize, y: usize) -> usize {
            if x >= self.w || y >= self.h {
                self.position_out_of_bounds(x, y)
            }
            y * self.stride + x
        }

        #[cold]
        #[inline(never)]
        #[track_caller]
        fn position_out_of_bounds(&self, x: usize, y: usize) -> ! {
            panic!(
                "position (x={x}, y={y}) out of bounds (0..{}, 0..{})",
                self.w, self.h
            )
        }

        /// A helper for implementing `Debug`.
        pub(super) fn debug_fmt(
            &self,
            f: &mut Formatter,
            name: &str,
        ) -> core::fmt::Result {
            f.debug_struct(name)
                .field("w", &self.w)
                .field("h", &self.h)
                .field("stride", &self.stride)
                .finish()
        }
    }

    impl<T, D: Deref<Target = [T]>> Inner<T, D> {
        /// # Panics
        /// if `stride < w` or if the slice would overflow `data`.
        #[rustfmt::skip]
        pub(super) fn new(w: usize, h: usize, stride: usize, data: D)
            -> Self
        {
            assert!(stride >= w);
            assert!(h == 0 || (h - 1) * stride + w <= data.len());
            Self { w, h, stride, data, _pd: PhantomData }
        }

        /// Returns the data of `self` as a linear slice.
        pub(super) fn data(&self) -> &[T] {
            &self.data
        }

        /// Returns an iterator over the rows of `self` as `&[T]` slices.
        pub fn rows(&self) -> impl Iterator<Item = &[T]> {
            let w = self.w;
            self.data()
                .chunks(self.stride.max(1))
                .take(self.h)
                .map(move |row| &row[..w])
        }

        /// Returns an iterator over all the elements of `self` in row-major
        /// order: first the elements on row 0 from left to right, followed
        /// by the elements on row 1, and so on.
        pub fn iter(&self) -> impl Iterator<Item = &'_ T> {
            self.rows().flatten()
        }
    }

    impl<T, D: DerefMut<Target = [T]>> Inner<T, D> {
        /// Returns a mutably borrowed view of `self`.
        pub fn as_mut_slice2(&mut self) -> MutSlice2<'_, T> {
            let (w, h, stride) = (self.w, self.h, self.stride);
            MutSlice2::new(w, h, stride, &mut self.data)
        }

        /// Fills the buffer with clones of `val`.
        ///
        /// Elements between rows of a strided buffer are left untouched.
        pub fn fill(&mut self, val: T)
        where
            T: Clone,
        {
            let (w, h) = (self.w, self.h);
            if self.stride == w {
                self.data[..w * h].fill(val);
            } else {
                self.data
                    .chunks_mut(self.stride)
                    .take(h)
                    .for_each(|row| row[..w].fill(val.clone()));
            }
        }
    }

    impl<T, D: Deref<Target = [T]>> Index<usize> for Inner<T, D> {
        type Output = [T];

        /// Returns a reference to the row of `self` at index `i`.
        #[inline]
        fn index(&self, i: usize) -> &[T] {
            &self.data()[i * self.stride..][..self.w]
        }
    }

    impl<T, D: DerefMut<Target = [T]>> IndexMut<usize> for Inner<T, D> {
        /// Returns a mutable reference to the row of `self` at index `i`.
        #[inline]
        fn index_mut(&mut self, row: usize) -> &mut [T] {
            let idx = row * self.stride;
            let w = self.w;
            &mut self.data[idx..idx + w]
        }
    }

    impl<T, D: Deref<Target = [T]>> Index<[usize; 2]> for Inner<T, D> {
        type Output = T;

        /// Returns a reference to the element of `self` at position `pos`.
        /// # Panics
        /// If `pos` is out of bounds of `self`.
        #[inline]
        fn index(&self, [x, y]: [usize; 2]) -> &T {
            &self.data[self.to_index(x, y)]
        }
    }

    impl<T, D: DerefMut<Target = [T]>> IndexMut<[usize; 2]> for Inner<T, D> {
        /// Returns a mutable reference to the element of `self`
        /// at position `pos`.
        /// # Panics
        /// If `pos` is out of bounds of `self`.
        #[inline]
        fn index_mut(&mut self, [x, y]: [usize; 2]) -> &mut T {
            let idx = self.to_index(x, y);
            &mut self.data[idx]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buf_new() {
        let buf: Buf2<i32> = Buf2::new(Dims(3, 2));
        assert_eq!(buf.data(), &[0, 0, 0, 0, 0, 0]);
        assert_eq!(buf.dims(), Dims(3, 2));
    }

    #[test]
    fn buf_new_from() {
        let buf = Buf2::new_from(Dims(3, 2), 1..);
        assert_eq!(buf.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    #[should_panic]
    fn buf_new_from_too_few_elements_should_panic() {
        let _ = Buf2::new_from(Dims(3, 2), 0..5);
    }

    #[test]
    fn buf_indexing() {
        let mut buf = Buf2::new_from(Dims(4, 5), 0..);

        assert_eq!(buf[[0, 0]], 0);
        assert_eq!(buf[[1, 0]], 1);
        assert_eq!(buf[[3, 4]], 19);
        assert_eq!(buf[2usize], [8, 9, 10, 11]);

        buf[[3, 4]] = 123;
        assert_eq!(buf[[3, 4]], 123);
    }

    #[test]
    #[should_panic]
    fn buf_index_past_end_should_panic() {
        let buf: Buf2<()> = Buf2::new(Dims(4, 5));
        let () = buf[[4, 0]];
    }

    #[test]
    #[should_panic]
    fn slice_stride_less_than_width_should_panic() {
        let _ = MutSlice2::new(4, 4, 3, &mut [0; 16]);
    }

    #[test]
    fn mut_slice_with_stride() {
        let mut data = [0, 1, 2, 3, 4, 5, 6, 7];
        let mut slice = MutSlice2::new(3, 2, 4, &mut data);

        assert_eq!(slice[[1, 1]], 5);
        slice[[2, 1]] = 60;

        let rows: Vec<_> = slice.rows().collect();
        assert_eq!(rows, [&[0, 1, 2][..], &[4, 5, 60][..]]);
    }

    #[test]
    #[rustfmt::skip]
    fn mut_slice_fill() {
        let mut data = [0; 8];
        let mut slice = MutSlice2::new(3, 2, 4, &mut data);

        slice.fill(1);

        assert_eq!(data, [1, 1, 1, 0,
                          1, 1, 1, 0]);
    }

    #[test]
    fn buf_iter_row_major() {
        let order = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let mut buf = Buf2::new_from(Dims(2, 2), order);
        assert!(buf.iter().eq(&order));

        buf.as_mut_slice2().fill((9, 9));
        assert!(buf.iter().all(|&p| p == (9, 9)));
    }
}
