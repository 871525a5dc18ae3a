//! Pass configuration.

use crate::error::FilterError;
use median_sortnet::SortStrategy;
use std::fmt;
use std::str::FromStr;

/// Supported window sizes.
///
/// Each size is bound to its own lane type: `Eight` works in `f64`, `Sixteen`
/// in `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowSize {
    /// Eight samples, `f64` lanes
    #[default]
    Eight,
    /// Sixteen samples, `f32` lanes
    Sixteen,
}

impl WindowSize {
    /// Samples per window.
    pub const fn size(self) -> usize {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// Samples on each side of the centre.
    pub const fn radius(self) -> usize {
        self.size() / 2
    }
}

impl TryFrom<u32> for WindowSize {
    type Error = FilterError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            other => Err(FilterError::InvalidWindowSize {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for WindowSize {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FilterError::InvalidWindowSize {
            value: s.to_string(),
        };
        let value: u32 = s.trim().parse().map_err(|_| invalid())?;
        Self::try_from(value).map_err(|_| invalid())
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size())
    }
}

/// Settings for one filter pass.
///
/// # Example
///
/// ```
/// use median_dsp::{FilterConfig, SortStrategy, WindowSize};
///
/// let config = FilterConfig::new(WindowSize::Sixteen)
///     .with_strategy(SortStrategy::Comparison)
///     .with_workers(4);
/// assert_eq!(config.window().radius(), 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    window: WindowSize,
    strategy: SortStrategy,
    workers: usize,
}

impl FilterConfig {
    /// Configuration for `window` with the automatic sorter on one worker.
    pub const fn new(window: WindowSize) -> Self {
        Self {
            window,
            strategy: SortStrategy::Auto,
            workers: 1,
        }
    }

    /// Set the sort strategy.
    pub const fn with_strategy(mut self, strategy: SortStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the number of workers. Checked by [`FilterConfig::validate`].
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Window size.
    pub const fn window(&self) -> WindowSize {
        self.window
    }

    /// Requested sort strategy.
    pub const fn strategy(&self) -> SortStrategy {
        self.strategy
    }

    /// Worker count.
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Reject settings no pass can run with.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.workers == 0 {
            return Err(FilterError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new(WindowSize::default())
    }
}
