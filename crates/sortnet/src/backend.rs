//! Sort backend trait
//!
//! This module defines the contract every window sorter satisfies. All backends
//! (comparison, portable network, AVX-512 network) sort the same two window shapes
//! and must agree bit-for-bit; only speed differs.

use crate::window::{Window16, Window8};

/// Window sort backend
///
/// # Contract Requirements
///
/// 1. **Ascending order**: after a call, `window[i] <= window[i + 1]` for every `i`
/// 2. **Bit-identical**: for the same input every backend yields the same lane bits
/// 3. **No allocation**: backends are `no_std` and sort in place
/// 4. **Zero-sized**: backends carry no state and are `Copy`
///
/// Tie order is irrelevant; equal integer-derived values have identical bits.
///
/// # Example
///
/// ```rust
/// use median_sortnet::{ComparisonBackend, SortBackend, Window16};
///
/// let mut window = Window16::from_array(core::array::from_fn(|i| (15 - i) as f32));
/// ComparisonBackend::sort16(&mut window);
/// assert_eq!(window[0], 0.0);
/// assert_eq!(window[15], 15.0);
/// ```
pub trait SortBackend: Copy {
    /// Sort an eight-lane `f64` window in place.
    fn sort8(window: &mut Window8);

    /// Sort a sixteen-lane `f32` window in place.
    fn sort16(window: &mut Window16);

    /// Backend identifier for logging: `"comparison"`, `"network"` or `"avx512"`.
    fn name() -> &'static str;
}
