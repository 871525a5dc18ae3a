//! # Median DSP
//!
//! Sliding-window median filter for mono 32-bit integer PCM.
//!
//! Every interior sample is replaced by the median of the `size` samples around
//! it; the `radius = size / 2` samples at each end are copied unchanged. Two
//! window shapes exist: 8 samples worked in `f64` and 16 samples worked in `f32`.
//!
//! Each position runs the same three steps:
//!
//! 1. [`extract_window`] - copy the neighbourhood into an aligned scratch window
//! 2. sort - one of the [`median_sortnet`] backends, chosen once per pass
//! 3. [`reduce_median`] - average the two central lanes and truncate to `i32`
//!
//! # Example
//!
//! ```
//! use median_dsp::{median_filter, FilterConfig, WindowSize};
//!
//! let input: Vec<i32> = (1..=12).collect();
//! let config = FilterConfig::new(WindowSize::Eight);
//! let output = median_filter(&input, &config).unwrap();
//!
//! assert_eq!(output[4], 4);
//! assert_eq!(&output[..4], &input[..4]);
//! assert_eq!(&output[8..], &input[8..]);
//! ```

mod config;
mod error;
mod extract;
mod filter;
mod reduce;

pub use config::{FilterConfig, WindowSize};
pub use error::{FilterError, Result};
pub use extract::extract_window;
pub use filter::{
    filter_into, filter_into_parallel, filter_position, interior_len, median_filter,
    median_filter_timed, FilterReport, PARALLEL_POSITION_THRESHOLD,
};
pub use reduce::reduce_median;

pub use median_sortnet::{BackendType, SortStrategy};
pub use median_timing::Elapsed;
