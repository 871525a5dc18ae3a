use median_sortnet::FixedWindow;

/// Copy the window centred on `center` into `window`.
///
/// `window[j] = samples[center - RADIUS + j]` for every lane `j`, converted to the
/// window's lane type. Every lane is overwritten.
///
/// # Panics
/// Panics unless `RADIUS <= center` and `center + RADIUS <= samples.len()`.
#[inline(always)]
pub fn extract_window<W: FixedWindow>(samples: &[i32], center: usize, window: &mut W) {
    window.fill_from(&samples[center - W::RADIUS..]);
}
