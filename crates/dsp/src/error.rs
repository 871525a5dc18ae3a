//! Filter errors.

use std::collections::TryReserveError;

/// Result alias for filter operations.
pub type Result<T, E = FilterError> = std::result::Result<T, E>;

/// Every way a filter pass can fail.
///
/// All failures happen before any output is handed back; there is no partial
/// result.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// Window size outside {8, 16}.
    #[error("the window size may only be 8 or 16 (got {value})")]
    InvalidWindowSize {
        /// The rejected value as given.
        value: String,
    },

    /// Fewer samples than one window.
    #[error("the input holds {actual} samples but a window needs {required}")]
    TooFewSamples {
        /// Window size.
        required: usize,
        /// Input length.
        actual: usize,
    },

    /// The output buffer could not be allocated.
    #[error("not enough memory for an output buffer of {samples} samples")]
    Allocation {
        /// Requested length.
        samples: usize,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },

    /// The requested sort backend cannot run on this build or CPU.
    #[error(transparent)]
    UnavailableBackend(#[from] median_sortnet::UnavailableBackend),

    /// Worker count of zero.
    #[error("the worker count must be at least 1 (got {0})")]
    InvalidWorkerCount(usize),

    /// The worker pool could not be started.
    #[error("failed to start the worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
