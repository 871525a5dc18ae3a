use median_sortnet::{FixedWindow, Lane};

/// Median of a sorted window, truncated to a sample.
///
/// The two central lanes are averaged in the window's own lane type
/// (`(w[r-1] + w[r]) * 0.5`) and converted with truncation toward zero, saturating
/// at the `i32` limits.
#[inline(always)]
pub fn reduce_median<W: FixedWindow>(window: &W) -> i32 {
    let lanes = window.lanes();
    let centre = W::RADIUS;
    ((lanes[centre - 1] + lanes[centre]) * <W::Lane as Lane>::HALF).to_sample()
}
