//! Aligned scratch windows
//!
//! A window is the fixed-length buffer a sort backend works on. It is aligned to
//! 64 bytes so a full window is exactly one AVX-512 register and can be moved with
//! aligned loads and stores.
//!
//! ```text
//! Window8  (f64 x 8):  [ 0  1  2  3  4  5  6  7 ]                 = 64 bytes
//! Window16 (f32 x 16): [ 0  1  2  3  4  5  6  7  8 ... 15 ]       = 64 bytes
//!                        └──── radius ───┘└──── radius ────┘
//! ```
//!
//! Lanes are stored in sample order; the left half holds the samples before the
//! centre position and the right half starts at the centre itself.

use crate::backend::SortBackend;
use crate::lane::Lane;
use core::ops::{Index, IndexMut};

/// Fixed-size window with 64-byte alignment.
#[repr(C, align(64))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignedWindow<T, const N: usize> {
    data: [T; N],
}

/// Eight `f64` lanes.
pub type Window8 = AlignedWindow<f64, 8>;

/// Sixteen `f32` lanes.
pub type Window16 = AlignedWindow<f32, 16>;

impl<T: Lane, const N: usize> AlignedWindow<T, N> {
    /// Create a zero-filled window.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
        }
    }

    /// Wrap an existing array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Number of lanes.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false for the window shapes in use.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Lanes as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Lanes as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Lanes as an array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Consume the window and return its lanes.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }
}

impl<T: Lane, const N: usize> Default for AlignedWindow<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Index<usize> for AlignedWindow<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for AlignedWindow<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

/// A window shape the median filter supports.
///
/// Implemented only for [`Window8`] and [`Window16`]; code generic over this trait
/// therefore covers exactly the `(8, f64)` and `(16, f32)` pairings.
pub trait FixedWindow: Copy + Default + Send + Sync + 'static {
    /// Lane type paired with this size.
    type Lane: Lane;

    /// Number of lanes.
    const SIZE: usize;

    /// Number of neighbours on each side of the centre.
    const RADIUS: usize = Self::SIZE / 2;

    /// Lanes as a slice.
    fn lanes(&self) -> &[Self::Lane];

    /// Lanes as a mutable slice.
    fn lanes_mut(&mut self) -> &mut [Self::Lane];

    /// Overwrite every lane from `samples[..SIZE]`, converting each sample.
    ///
    /// # Panics
    /// Panics if `samples` holds fewer than `SIZE` values.
    #[inline(always)]
    fn fill_from(&mut self, samples: &[i32]) {
        let source = &samples[..Self::SIZE];
        for (lane, &sample) in self.lanes_mut().iter_mut().zip(source) {
            *lane = Self::Lane::from_sample(sample);
        }
    }

    /// Sort the window ascending with backend `B`.
    fn sort_with<B: SortBackend>(&mut self);
}

impl FixedWindow for Window8 {
    type Lane = f64;
    const SIZE: usize = 8;

    #[inline(always)]
    fn lanes(&self) -> &[f64] {
        &self.data
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline(always)]
    fn sort_with<B: SortBackend>(&mut self) {
        B::sort8(self)
    }
}

impl FixedWindow for Window16 {
    type Lane = f32;
    const SIZE: usize = 16;

    #[inline(always)]
    fn lanes(&self) -> &[f32] {
        &self.data
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline(always)]
    fn sort_with<B: SortBackend>(&mut self) {
        B::sort16(self)
    }
}
