//! File writer.

use crate::header::{WavHeader, BYTES_PER_SAMPLE, HEADER_LEN};
use crate::types::WavFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write `wav` to `path`, header first.
///
/// The header is written exactly as stored; it is not recomputed from the
/// samples.
pub fn write_wav(path: &Path, wav: &WavFile) -> Result<()> {
    let bytes = encode_wav(wav);
    fs::write(path, &bytes)
        .with_context(|| format!("Failed to write the output `.wav` file {}", path.display()))?;

    debug!(path = %path.display(), bytes = bytes.len(), "wrote wav file");
    Ok(())
}

/// Encode to an in-memory file image.
pub fn encode_wav(wav: &WavFile) -> Vec<u8> {
    encode(&wav.header, &wav.samples)
}

/// Build a canonical mono 32-bit file image from samples.
///
/// Mostly useful for fixtures and tests.
pub fn build_pcm32_mono(sample_rate: u32, samples: &[i32]) -> Vec<u8> {
    encode(&WavHeader::pcm32_mono(sample_rate, samples.len()), samples)
}

fn encode(header: &WavHeader, samples: &[i32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + samples.len() * BYTES_PER_SAMPLE);
    out.extend_from_slice(&header.to_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}
