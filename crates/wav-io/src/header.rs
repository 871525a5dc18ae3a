//! The fixed 44-byte header.

use crate::validation::{ValidationError, ValidationErrorCode};

/// Size of the canonical header in bytes.
pub const HEADER_LEN: usize = 44;

/// Bytes per 32-bit sample.
pub const BYTES_PER_SAMPLE: usize = 4;

/// Largest sample count whose RIFF chunk size still fits in 32 bits.
pub const MAX_SAMPLES: usize = (u32::MAX as usize - (HEADER_LEN - 8)) / BYTES_PER_SAMPLE;

/// Largest sample rate whose byte rate still fits in 32 bits.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / BYTES_PER_SAMPLE as u32;

/// `RIFF` chunk identifier.
pub const RIFF_MAGIC: [u8; 4] = *b"RIFF";
/// `WAVE` form type.
pub const WAVE_MAGIC: [u8; 4] = *b"WAVE";
/// `fmt ` chunk identifier.
pub const FMT_MAGIC: [u8; 4] = *b"fmt ";
/// `data` chunk identifier.
pub const DATA_MAGIC: [u8; 4] = *b"data";

/// Integer PCM format tag.
pub const PCM_FORMAT: u16 = 1;

/// Canonical WAV header, field for field.
///
/// Parsing only decodes; [`crate::validate_wav`] decides whether the values are
/// acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Should be `RIFF`.
    pub riff_magic: [u8; 4],
    /// Total file size minus 8.
    pub riff_size: u32,
    /// Should be `WAVE`.
    pub wave_magic: [u8; 4],
    /// Should be `fmt `.
    pub fmt_magic: [u8; 4],
    /// Size of the fmt chunk body.
    pub fmt_size: u32,
    /// Sample format, 1 for integer PCM.
    pub format_tag: u16,
    /// Channel count.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// `sample_rate * block_align`.
    pub bytes_per_second: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Should be `data`.
    pub data_magic: [u8; 4],
    /// Size of the sample data in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `sample_count` mono 32-bit PCM samples.
    ///
    /// # Panics
    /// Panics if `sample_count` exceeds [`MAX_SAMPLES`] or `sample_rate` exceeds
    /// [`MAX_SAMPLE_RATE`], since the 32-bit size fields could not hold them.
    pub fn pcm32_mono(sample_rate: u32, sample_count: usize) -> Self {
        assert!(
            sample_count <= MAX_SAMPLES,
            "{sample_count} samples do not fit the 32-bit RIFF size fields"
        );
        assert!(
            sample_rate <= MAX_SAMPLE_RATE,
            "a sample rate of {sample_rate} Hz overflows the byte rate field"
        );
        // Both bounds above keep these products within u32
        let data_size = (sample_count * BYTES_PER_SAMPLE) as u32;
        Self {
            riff_magic: RIFF_MAGIC,
            riff_size: data_size + (HEADER_LEN as u32 - 8),
            wave_magic: WAVE_MAGIC,
            fmt_magic: FMT_MAGIC,
            fmt_size: 16,
            format_tag: PCM_FORMAT,
            channels: 1,
            sample_rate,
            bytes_per_second: sample_rate * BYTES_PER_SAMPLE as u32,
            block_align: BYTES_PER_SAMPLE as u16,
            bits_per_sample: 32,
            data_magic: DATA_MAGIC,
            data_size,
        }
    }

    /// Decode the first [`HEADER_LEN`] bytes.
    ///
    /// # Errors
    /// `E001` if fewer than [`HEADER_LEN`] bytes are given.
    pub fn parse(bytes: &[u8]) -> Result<Self, ValidationError> {
        let Some(raw) = bytes.get(..HEADER_LEN) else {
            return Err(ValidationError::new(
                ValidationErrorCode::FileTooSmall,
                format!("{} bytes is shorter than the {HEADER_LEN}-byte header", bytes.len()),
            ));
        };

        let tag = |at: usize| [raw[at], raw[at + 1], raw[at + 2], raw[at + 3]];
        let u32_at = |at: usize| u32::from_le_bytes(tag(at));
        let u16_at = |at: usize| u16::from_le_bytes([raw[at], raw[at + 1]]);

        Ok(Self {
            riff_magic: tag(0),
            riff_size: u32_at(4),
            wave_magic: tag(8),
            fmt_magic: tag(12),
            fmt_size: u32_at(16),
            format_tag: u16_at(20),
            channels: u16_at(22),
            sample_rate: u32_at(24),
            bytes_per_second: u32_at(28),
            block_align: u16_at(32),
            bits_per_sample: u16_at(34),
            data_magic: tag(36),
            data_size: u32_at(40),
        })
    }

    /// Encode back to the on-disk layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&self.riff_magic);
        out[4..8].copy_from_slice(&self.riff_size.to_le_bytes());
        out[8..12].copy_from_slice(&self.wave_magic);
        out[12..16].copy_from_slice(&self.fmt_magic);
        out[16..20].copy_from_slice(&self.fmt_size.to_le_bytes());
        out[20..22].copy_from_slice(&self.format_tag.to_le_bytes());
        out[22..24].copy_from_slice(&self.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.bytes_per_second.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(&self.data_magic);
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    /// Number of 32-bit samples announced by `data_size`.
    pub fn sample_count(&self) -> usize {
        self.data_size as usize / BYTES_PER_SAMPLE
    }
}
