//! # pcm-wav
//!
//! Reading and writing of canonical mono 32-bit integer PCM WAV files.
//!
//! ## Format Overview
//!
//! Only the canonical layout is accepted: a fixed 44-byte header followed
//! directly by the sample data, with no extra chunks.
//!
//! ```text
//! offset  size  field
//! ┌──────┬─────┬──────────────────────────────┐
//! │   0  │  4  │ "RIFF"                       │
//! │   4  │  4  │ file size - 8                │
//! │   8  │  4  │ "WAVE"                       │
//! │  12  │  4  │ "fmt "                       │
//! │  16  │  4  │ fmt chunk size (16)          │
//! │  20  │  2  │ format tag (1 = PCM)         │
//! │  22  │  2  │ channels (1)                 │
//! │  24  │  4  │ sample rate                  │
//! │  28  │  4  │ bytes per second             │
//! │  32  │  2  │ block align                  │
//! │  34  │  2  │ bits per sample (32)         │
//! │  36  │  4  │ "data"                       │
//! │  40  │  4  │ data size (file size - 44)   │
//! │  44  │  …  │ little-endian i32 samples    │
//! └──────┴─────┴──────────────────────────────┘
//! ```
//!
//! The header read from an input file is carried through unmodified to the
//! output, so a filtered file differs from its source only in sample data.
//!
//! ## Example
//!
//! ```rust
//! use pcm_wav::{build_pcm32_mono, read_wav_from_bytes};
//!
//! let bytes = build_pcm32_mono(48_000, &[1, -2, 3]);
//! let wav = read_wav_from_bytes(&bytes).unwrap();
//! assert_eq!(wav.samples, vec![1, -2, 3]);
//! assert_eq!(wav.header.sample_rate, 48_000);
//! ```

pub mod header;
pub mod reader;
pub mod types;
pub mod validation;
pub mod writer;

// Re-export main types for convenience
pub use header::{WavHeader, HEADER_LEN, MAX_SAMPLES, MAX_SAMPLE_RATE};
pub use reader::{read_wav, read_wav_from_bytes};
pub use types::WavFile;
pub use validation::{validate_wav, ValidationError, ValidationErrorCode};
pub use writer::{build_pcm32_mono, encode_wav, write_wav};
