//! Start/stop measurement of a single sweep.

use crate::clock::MonotonicClock;
use crate::{NANOS_PER_MILLI, NANOS_PER_SEC};
use core::fmt;

/// A running measurement.
///
/// Created by [`SweepTimer::start`] and consumed by [`SweepTimer::stop`], so an
/// interval can only be read once it is closed.
#[derive(Debug)]
pub struct SweepTimer<C: MonotonicClock> {
    clock: C,
    started_at: u64,
}

impl<C: MonotonicClock> SweepTimer<C> {
    /// Take the start reading.
    #[inline]
    pub fn start(clock: C) -> Self {
        let started_at = clock.now_ns();
        Self { clock, started_at }
    }

    /// Take the stop reading and return the interval.
    ///
    /// A clock that reads earlier than the start yields a zero interval.
    #[inline]
    pub fn stop(self) -> Elapsed {
        let stopped_at = self.clock.now_ns();
        Elapsed::from_nanos(stopped_at.saturating_sub(self.started_at))
    }
}

/// A measured interval in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Elapsed {
    nanos_total: u64,
}

impl Elapsed {
    /// Wrap a nanosecond count.
    #[inline]
    pub const fn from_nanos(nanos_total: u64) -> Self {
        Self { nanos_total }
    }

    /// Total nanoseconds.
    #[inline]
    pub const fn as_nanos(&self) -> u64 {
        self.nanos_total
    }

    /// Whole seconds.
    #[inline]
    pub const fn seconds(&self) -> u64 {
        self.nanos_total / NANOS_PER_SEC
    }

    /// Whole milliseconds past the last whole second.
    #[inline]
    pub const fn millis(&self) -> u64 {
        (self.nanos_total % NANOS_PER_SEC) / NANOS_PER_MILLI
    }

    /// Nanoseconds past the last whole millisecond.
    #[inline]
    pub const fn sub_millis_nanos(&self) -> u64 {
        (self.nanos_total % NANOS_PER_SEC) % NANOS_PER_MILLI
    }
}

/// Two lines: the raw total, then the breakdown.
///
/// ```text
/// 1234567890 ns total
/// 1 sec, 234 ms, 567890 ns
/// ```
impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ns total", self.nanos_total)?;
        write!(
            f,
            "{} sec, {} ms, {} ns",
            self.seconds(),
            self.millis(),
            self.sub_millis_nanos()
        )
    }
}
