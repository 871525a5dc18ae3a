//! Comparison sort backend
//!
//! The reference implementation: an `O(n log n)` unstable sort driven by the
//! three-way comparator `(a > b) - (a < b)`. Every other backend is tested
//! against this one.

use crate::backend::SortBackend;
use crate::lane::Lane;
use crate::window::{Window16, Window8};

/// Generic comparison sort.
#[derive(Copy, Clone, Debug, Default)]
pub struct ComparisonBackend;

impl SortBackend for ComparisonBackend {
    #[inline]
    fn sort8(window: &mut Window8) {
        window.as_mut_slice().sort_unstable_by(f64::three_way);
    }

    #[inline]
    fn sort16(window: &mut Window16) {
        window.as_mut_slice().sort_unstable_by(f32::three_way);
    }

    fn name() -> &'static str {
        "comparison"
    }
}
