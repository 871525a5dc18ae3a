//! The filter command: read, filter, report, write.

use anyhow::Result;
use clap::Args;
use median_dsp::{median_filter_timed, FilterConfig, FilterError, SortStrategy, WindowSize};
use median_timing::StdClock;
use pcm_wav::{read_wav, write_wav};
use std::path::PathBuf;
use tracing::info;

/// Arguments for a filter run.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Path to the input `.wav` file (mono, 32-bit integer PCM)
    pub input: PathBuf,

    /// Path to the output `.wav` file
    pub output: PathBuf,

    /// Window sample size, 8 or 16
    #[arg(value_parser = parse_window)]
    pub window: WindowSize,

    /// Window sort implementation
    #[arg(short, long, default_value = "auto")]
    pub sort: SortStrategy,

    /// Worker threads for long inputs
    #[arg(short, long, default_value = "1")]
    pub workers: usize,

    /// Do not print the timing report
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_window(value: &str) -> Result<WindowSize, String> {
    value.parse::<WindowSize>().map_err(|e| e.to_string())
}

/// Execute a filter run.
pub fn execute(args: FilterArgs) -> Result<()> {
    let config = FilterConfig::new(args.window)
        .with_strategy(args.sort)
        .with_workers(args.workers);

    let wav = read_wav(&args.input)?;

    let report = median_filter_timed(&wav.samples, &config, StdClock::new()).map_err(|err| {
        let context = match err {
            FilterError::TooFewSamples { .. } => "The input `.wav` file is too small",
            _ => "Failed to filter the input samples",
        };
        anyhow::Error::new(err).context(context)
    })?;

    info!(
        backend = report.backend.name(),
        window = report.window.size(),
        computed = report.computed,
        "filtered {}",
        args.input.display()
    );

    write_wav(&args.output, &wav.with_samples(report.output))?;

    if !args.quiet {
        println!("{}", report.elapsed);
    }

    Ok(())
}
