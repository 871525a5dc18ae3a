//! Monotonic clock sources.

use core::cell::Cell;

/// A source of monotonically non-decreasing nanosecond timestamps.
///
/// The epoch is arbitrary; only differences between two readings are meaningful.
pub trait MonotonicClock {
    /// Current reading in nanoseconds.
    fn now_ns(&self) -> u64;
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    #[inline]
    fn now_ns(&self) -> u64 {
        (**self).now_ns()
    }
}

/// Wall clock backed by [`std::time::Instant`].
///
/// Readings are nanoseconds since the clock was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for StdClock {
    #[inline]
    fn now_ns(&self) -> u64 {
        // u64 nanoseconds cover ~584 years of uptime
        u64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Clock that only moves when told to.
///
/// Every reading returns the current value and then advances it by `step`, so a
/// start/stop pair measures exactly `step` nanoseconds.
///
/// # Example
///
/// ```
/// use median_timing::{ManualClock, MonotonicClock};
///
/// let clock = ManualClock::new(100);
/// assert_eq!(clock.now_ns(), 100);
/// clock.advance(50);
/// assert_eq!(clock.now_ns(), 150);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<u64>,
    step: u64,
}

impl ManualClock {
    /// Frozen clock reading `start`.
    pub const fn new(start: u64) -> Self {
        Self::with_step(start, 0)
    }

    /// Clock reading `start` that advances `step` after each reading.
    pub const fn with_step(start: u64, step: u64) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }

    /// Move the clock forward. Saturates at `u64::MAX`.
    pub fn advance(&self, nanos: u64) {
        self.now.set(self.now.get().saturating_add(nanos));
    }
}

impl MonotonicClock for ManualClock {
    fn now_ns(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now.saturating_add(self.step));
        now
    }
}
