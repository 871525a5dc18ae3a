//! # median
//!
//! Applies a sliding-window median filter to a mono 32-bit PCM `.wav` file and
//! reports how long the filter sweep took.
//!
//! ```text
//! median <input.wav> <output.wav> <8|16> [--sort auto|comparison|network|avx512] [--workers N]
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `MEDIAN_LOG` (for example
//! `MEDIAN_LOG=debug`) to see backend selection and sweep details.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::filter::FilterArgs;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "MEDIAN_LOG";

/// Median-filter a mono 32-bit PCM WAV file
#[derive(Parser)]
#[command(name = "median")]
#[command(about = "Median-filter a mono 32-bit PCM WAV file with a window of 8 or 16 samples")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    filter: FilterArgs,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    commands::filter::execute(cli.filter)
}
