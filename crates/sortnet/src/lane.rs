//! Working lane types for window values
//!
//! Samples are stored as `i32` but sorted and averaged as floating point. A
//! [`Lane`] knows how to get in and out of the sample domain and how to order
//! itself without branching.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Mul};

/// Floating-point lane held in a sort window.
///
/// Implemented for `f64` (8-sample windows) and `f32` (16-sample windows).
/// Values are always converted from `i32`, so NaN never reaches a lane.
pub trait Lane:
    Copy + Default + PartialOrd + Debug + Send + Sync + Add<Output = Self> + Mul<Output = Self> + 'static
{
    /// One half in this lane's own precision.
    const HALF: Self;

    /// Convert a PCM sample into the working type.
    fn from_sample(sample: i32) -> Self;

    /// Convert back to a PCM sample, truncating toward zero.
    ///
    /// Values outside the `i32` range saturate at `i32::MIN` / `i32::MAX`.
    fn to_sample(self) -> i32;

    /// Branch-free minimum.
    fn lane_min(self, other: Self) -> Self;

    /// Branch-free maximum.
    fn lane_max(self, other: Self) -> Self;

    /// Raw IEEE-754 bits widened to `u64`, for bit-exact comparisons.
    fn bits(self) -> u64;

    /// Three-way comparison computed as `(a > b) - (a < b)`.
    ///
    /// Total for NaN-free input; equal values compare as [`Ordering::Equal`].
    #[inline(always)]
    fn three_way(a: &Self, b: &Self) -> Ordering {
        match (a > b) as i8 - (a < b) as i8 {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}

impl Lane for f64 {
    const HALF: Self = 0.5;

    #[inline(always)]
    fn from_sample(sample: i32) -> Self {
        sample as f64
    }

    #[inline(always)]
    fn to_sample(self) -> i32 {
        self as i32
    }

    #[inline(always)]
    fn lane_min(self, other: Self) -> Self {
        self.min(other)
    }

    #[inline(always)]
    fn lane_max(self, other: Self) -> Self {
        self.max(other)
    }

    #[inline(always)]
    fn bits(self) -> u64 {
        self.to_bits()
    }
}

impl Lane for f32 {
    const HALF: Self = 0.5;

    #[inline(always)]
    fn from_sample(sample: i32) -> Self {
        sample as f32
    }

    #[inline(always)]
    fn to_sample(self) -> i32 {
        self as i32
    }

    #[inline(always)]
    fn lane_min(self, other: Self) -> Self {
        self.min(other)
    }

    #[inline(always)]
    fn lane_max(self, other: Self) -> Self {
        self.max(other)
    }

    #[inline(always)]
    fn bits(self) -> u64 {
        self.to_bits() as u64
    }
}
