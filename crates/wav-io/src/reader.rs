//! File reader.

use crate::header::{BYTES_PER_SAMPLE, HEADER_LEN};
use crate::types::WavFile;
use crate::validation::validate_wav;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and validate a WAV file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file fails any check in [`crate::validation`] (the error downcasts to
///   [`crate::ValidationError`])
pub fn read_wav(path: &Path) -> Result<WavFile> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read the input `.wav` file {}", path.display()))?;

    let wav = read_wav_from_bytes(&data)
        .with_context(|| format!("Invalid input `.wav` file {}", path.display()))?;

    debug!(
        path = %path.display(),
        samples = wav.samples.len(),
        sample_rate = wav.header.sample_rate,
        "read wav file"
    );
    Ok(wav)
}

/// Decode a complete file image.
///
/// This is useful for testing or when the file is already in memory.
pub fn read_wav_from_bytes(data: &[u8]) -> Result<WavFile> {
    let header = validate_wav(data)?;

    let samples = data[HEADER_LEN..]
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Ok(WavFile { header, samples })
}
