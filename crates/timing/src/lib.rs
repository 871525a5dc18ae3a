#![no_std]

//! # Median Timing
//!
//! No-std timing for the median filter sweep.
//!
//! - [`MonotonicClock`] - Source of monotonic nanosecond timestamps
//! - [`SweepTimer`] - Measures one start/stop interval against a clock
//! - [`Elapsed`] - A measured interval and its seconds / milliseconds / nanoseconds breakdown
//! - [`ManualClock`] - Deterministic clock for tests
//! - `StdClock` - `std::time::Instant` clock (`std` feature)
//!
//! Timing is an observer: nothing here influences what the filter computes.
//!
//! # Example
//!
//! ```
//! use median_timing::{ManualClock, SweepTimer};
//!
//! let clock = ManualClock::with_step(0, 1_250_000_000);
//! let timer = SweepTimer::start(&clock);
//! let elapsed = timer.stop();
//! assert_eq!(elapsed.seconds(), 1);
//! assert_eq!(elapsed.millis(), 250);
//! ```

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod sweep;

pub use clock::{ManualClock, MonotonicClock};
pub use sweep::{Elapsed, SweepTimer};

#[cfg(feature = "std")]
pub use clock::StdClock;

/// Nanoseconds per second
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Nanoseconds per millisecond
pub const NANOS_PER_MILLI: u64 = 1_000_000;
