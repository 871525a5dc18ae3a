//! Filter driver
//!
//! The driver walks every interior position `i` in `radius..len - radius`, runs
//! extract → sort → reduce and stores the result in `output[i]`. The `radius`
//! samples at either end are copied unchanged.
//!
//! ```text
//! input:   [ e e e e | i i i i ... i i i i | e e e e ]   (window 8, radius 4)
//!            copied    filtered               copied
//! ```
//!
//! Positions are independent, so the interior can be split across rayon workers,
//! each holding its own scratch window.

use crate::config::{FilterConfig, WindowSize};
use crate::error::{FilterError, Result};
use crate::extract::extract_window;
use crate::reduce::reduce_median;
use median_sortnet::{
    BackendType, BackendVisitor, FixedWindow, SortBackend, SortContext, Window16, Window8,
};
use median_timing::{Elapsed, MonotonicClock, SweepTimer};
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::debug;

/// Minimum interior length before a multi-worker configuration splits the sweep.
///
/// Below this the pool start-up costs more than the sorting it spreads out.
pub const PARALLEL_POSITION_THRESHOLD: usize = 1 << 16;

/// Chunks handed out per worker, for load balancing.
const CHUNKS_PER_WORKER: usize = 8;

/// Outcome of a timed pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterReport {
    /// Filtered samples, same length as the input.
    pub output: Vec<i32>,
    /// Duration of the sweep only (allocation and setup excluded).
    pub elapsed: Elapsed,
    /// Backend that sorted the windows.
    pub backend: BackendType,
    /// Window size used.
    pub window: WindowSize,
    /// Number of positions that were filtered rather than copied.
    pub computed: usize,
}

/// Number of interior positions for `len` samples and `radius`.
///
/// Zero when the input is too short to hold a window on both sides.
#[inline]
pub const fn interior_len(len: usize, radius: usize) -> usize {
    len.saturating_sub(2 * radius)
}

/// Filter one interior position.
///
/// # Panics
/// Panics unless `W::RADIUS <= center` and `center + W::RADIUS <= input.len()`.
#[inline(always)]
pub fn filter_position<W: FixedWindow, B: SortBackend>(
    input: &[i32],
    center: usize,
    window: &mut W,
) -> i32 {
    extract_window(input, center, window);
    window.sort_with::<B>();
    reduce_median(window)
}

/// Single-threaded sweep of `input` into `output`.
///
/// Returns the number of filtered positions.
///
/// # Errors
/// [`FilterError::TooFewSamples`] if `input` is shorter than one window; `output`
/// is left untouched.
///
/// # Panics
/// Panics if `output.len() != input.len()`.
pub fn filter_into<W: FixedWindow, B: SortBackend>(input: &[i32], output: &mut [i32]) -> Result<usize> {
    let radius = check_lengths::<W>(input, output)?;
    let end = input.len() - radius;

    copy_edges(input, output, radius);

    let mut window = W::default();
    for (center, slot) in (radius..end).zip(&mut output[radius..end]) {
        *slot = filter_position::<W, B>(input, center, &mut window);
    }

    Ok(end - radius)
}

/// Multi-threaded sweep of `input` into `output` on a pool of `workers` threads.
///
/// Output is identical to [`filter_into`]. Each rayon job owns its own scratch
/// window.
///
/// # Errors
/// [`FilterError::TooFewSamples`], [`FilterError::InvalidWorkerCount`] for zero
/// workers, or [`FilterError::WorkerPool`] if the pool cannot start.
///
/// # Panics
/// Panics if `output.len() != input.len()`.
pub fn filter_into_parallel<W: FixedWindow, B: SortBackend>(
    input: &[i32],
    output: &mut [i32],
    workers: usize,
) -> Result<usize> {
    if workers == 0 {
        return Err(FilterError::InvalidWorkerCount(workers));
    }
    check_lengths::<W>(input, output)?;
    let pool = worker_pool(workers)?;
    filter_on_pool::<W, B>(input, output, &pool)
}

/// Sweep on an existing pool, one scratch window per rayon job.
fn filter_on_pool<W: FixedWindow, B: SortBackend>(
    input: &[i32],
    output: &mut [i32],
    pool: &ThreadPool,
) -> Result<usize> {
    let radius = check_lengths::<W>(input, output)?;
    let end = input.len() - radius;
    let computed = end - radius;

    copy_edges(input, output, radius);

    let chunk_len = computed
        .div_ceil(pool.current_num_threads() * CHUNKS_PER_WORKER)
        .max(1);
    pool.install(|| {
        output[radius..end]
            .par_chunks_mut(chunk_len)
            .enumerate()
            .for_each_init(W::default, |window, (chunk_index, chunk)| {
                let first = radius + chunk_index * chunk_len;
                for (offset, slot) in chunk.iter_mut().enumerate() {
                    *slot = filter_position::<W, B>(input, first + offset, window);
                }
            });
    });

    Ok(computed)
}

/// Filter `input` with the settings in `config`.
///
/// # Example
///
/// ```
/// use median_dsp::{median_filter, FilterConfig, FilterError, WindowSize};
///
/// let too_short = [1, 2, 3];
/// let err = median_filter(&too_short, &FilterConfig::new(WindowSize::Eight)).unwrap_err();
/// assert!(matches!(err, FilterError::TooFewSamples { required: 8, actual: 3 }));
/// ```
pub fn median_filter(input: &[i32], config: &FilterConfig) -> Result<Vec<i32>> {
    let Plan {
        context,
        mut output,
        pool,
    } = prepare(input, config)?;
    sweep(&context, input, &mut output, pool.as_ref(), config.window())?;
    Ok(output)
}

/// Filter `input` and measure the sweep against `clock`.
///
/// The clock brackets only the sweep. Validation, output allocation and worker
/// pool start-up all happen before it starts, and it has no influence on the
/// samples.
pub fn median_filter_timed<C: MonotonicClock>(
    input: &[i32],
    config: &FilterConfig,
    clock: C,
) -> Result<FilterReport> {
    let Plan {
        context,
        mut output,
        pool,
    } = prepare(input, config)?;

    let timer = SweepTimer::start(clock);
    let computed = sweep(&context, input, &mut output, pool.as_ref(), config.window())?;
    let elapsed = timer.stop();

    debug!(
        nanos = elapsed.as_nanos(),
        computed,
        "median filter sweep finished"
    );

    Ok(FilterReport {
        output,
        elapsed,
        backend: context.backend_type(),
        window: config.window(),
        computed,
    })
}

/// Everything a sweep needs, set up ahead of the timed region.
struct Plan {
    context: SortContext,
    output: Vec<i32>,
    /// Present only when the sweep will be split across workers.
    pool: Option<ThreadPool>,
}

/// Validate, resolve the backend, allocate the output and start the workers.
fn prepare(input: &[i32], config: &FilterConfig) -> Result<Plan> {
    config.validate()?;

    let required = config.window().size();
    if input.len() < required {
        return Err(FilterError::TooFewSamples {
            required,
            actual: input.len(),
        });
    }

    let context = SortContext::new(config.strategy())?;

    let mut output = Vec::new();
    output
        .try_reserve_exact(input.len())
        .map_err(|source| FilterError::Allocation {
            samples: input.len(),
            source,
        })?;
    output.resize(input.len(), 0);

    let interior = interior_len(input.len(), config.window().radius());
    let pool = if config.workers() > 1 && interior >= PARALLEL_POSITION_THRESHOLD {
        Some(worker_pool(config.workers())?)
    } else {
        None
    };

    Ok(Plan {
        context,
        output,
        pool,
    })
}

fn worker_pool(workers: usize) -> Result<ThreadPool> {
    Ok(rayon::ThreadPoolBuilder::new().num_threads(workers).build()?)
}

fn sweep(
    context: &SortContext,
    input: &[i32],
    output: &mut [i32],
    pool: Option<&ThreadPool>,
    window: WindowSize,
) -> Result<usize> {
    debug!(
        backend = context.backend_name(),
        window = window.size(),
        samples = input.len(),
        interior = interior_len(input.len(), window.radius()),
        workers = pool.map_or(1, ThreadPool::current_num_threads),
        "starting median filter sweep"
    );

    context.dispatch(Sweep {
        input,
        output,
        window,
        pool,
    })
}

/// One sweep, waiting for a backend.
struct Sweep<'a> {
    input: &'a [i32],
    output: &'a mut [i32],
    window: WindowSize,
    pool: Option<&'a ThreadPool>,
}

impl Sweep<'_> {
    fn run<W: FixedWindow, B: SortBackend>(self) -> Result<usize> {
        match self.pool {
            Some(pool) => filter_on_pool::<W, B>(self.input, self.output, pool),
            None => filter_into::<W, B>(self.input, self.output),
        }
    }
}

impl BackendVisitor for Sweep<'_> {
    type Output = Result<usize>;

    fn visit<B: SortBackend>(self) -> Self::Output {
        match self.window {
            WindowSize::Eight => self.run::<Window8, B>(),
            WindowSize::Sixteen => self.run::<Window16, B>(),
        }
    }
}

fn check_lengths<W: FixedWindow>(input: &[i32], output: &[i32]) -> Result<usize> {
    assert_eq!(
        input.len(),
        output.len(),
        "output buffer must match the input length"
    );
    if input.len() < W::SIZE {
        return Err(FilterError::TooFewSamples {
            required: W::SIZE,
            actual: input.len(),
        });
    }
    Ok(W::RADIUS)
}

fn copy_edges(input: &[i32], output: &mut [i32], radius: usize) {
    let tail = input.len() - radius;
    output[..radius].copy_from_slice(&input[..radius]);
    output[tail..].copy_from_slice(&input[tail..]);
}
