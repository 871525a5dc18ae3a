//! Validation of canonical mono 32-bit PCM files.
//!
//! # Error Codes
//!
//! All validation errors include an error code for programmatic handling. Checks
//! run in the order listed and the first failure is reported:
//!
//! | Code | Description |
//! |------|-------------|
//! | E001 | File no larger than the 44-byte header |
//! | E002 | Data length not a multiple of 4 bytes |
//! | E003 | Missing `RIFF` magic |
//! | E004 | Missing `WAVE` magic |
//! | E005 | Missing `fmt ` magic |
//! | E006 | Missing `data` magic |
//! | E007 | Format tag is not PCM |
//! | E008 | Not mono |
//! | E009 | Bit depth is not 32 |
//! | E010 | `data` size does not match the file size |

use crate::header::{
    WavHeader, BYTES_PER_SAMPLE, DATA_MAGIC, FMT_MAGIC, HEADER_LEN, PCM_FORMAT, RIFF_MAGIC,
    WAVE_MAGIC,
};
use std::fmt;

/// Error codes for validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorCode {
    /// E001: File is 44 bytes or smaller
    FileTooSmall,
    /// E002: Data length is not a whole number of 32-bit samples
    MisalignedData,
    /// E003: Bytes 0..4 are not `RIFF`
    MissingRiffMagic,
    /// E004: Bytes 8..12 are not `WAVE`
    MissingWaveMagic,
    /// E005: Bytes 12..16 are not `fmt `
    MissingFmtMagic,
    /// E006: Bytes 36..40 are not `data`
    MissingDataMagic,
    /// E007: Format tag is not 1
    NotPcm,
    /// E008: Channel count is not 1
    NotMono,
    /// E009: Bits per sample is not 32
    UnsupportedBitDepth,
    /// E010: `data` size field disagrees with the file length
    DataSizeMismatch,
}

impl ValidationErrorCode {
    /// Get the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileTooSmall => "E001",
            Self::MisalignedData => "E002",
            Self::MissingRiffMagic => "E003",
            Self::MissingWaveMagic => "E004",
            Self::MissingFmtMagic => "E005",
            Self::MissingDataMagic => "E006",
            Self::NotPcm => "E007",
            Self::NotMono => "E008",
            Self::UnsupportedBitDepth => "E009",
            Self::DataSizeMismatch => "E010",
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::FileTooSmall => {
                "The file must contain a 44-byte header followed by at least one sample."
            }
            Self::MisalignedData => {
                "Sample data must be a whole number of 4-byte samples; the file may be truncated."
            }
            Self::MissingRiffMagic => "The file must start with `RIFF`; it is not a WAV file.",
            Self::MissingWaveMagic => "Bytes 8..12 must read `WAVE`; it is not a WAV file.",
            Self::MissingFmtMagic => {
                "The `fmt ` chunk must directly follow the RIFF header. Re-export without extra chunks."
            }
            Self::MissingDataMagic => {
                "The `data` chunk must start at byte 36. Re-export without metadata chunks (LIST, fact, ...)."
            }
            Self::NotPcm => "Re-export as integer PCM (format tag 1), not float or compressed audio.",
            Self::NotMono => "Mix down or split the audio to a single channel.",
            Self::UnsupportedBitDepth => "Re-export with a bit depth of 32 (signed integer samples).",
            Self::DataSizeMismatch => {
                "The `data` size field must equal the file size minus 44 bytes; the file may be truncated or padded."
            }
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code for programmatic handling.
    pub code: ValidationErrorCode,
    /// The error message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error with a code.
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        self.code.guidance()
    }

    /// Format the error with guidance.
    pub fn detailed_message(&self) -> String {
        format!(
            "[{}]: {}\n  Guidance: {}",
            self.code.code(),
            self.message,
            self.guidance()
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a complete file image and return its header.
pub fn validate_wav(bytes: &[u8]) -> Result<WavHeader, ValidationError> {
    use ValidationErrorCode as Code;

    if bytes.len() <= HEADER_LEN {
        return Err(ValidationError::new(
            Code::FileTooSmall,
            format!("the input `.wav` file is too small ({} bytes)", bytes.len()),
        ));
    }

    let data_len = bytes.len() - HEADER_LEN;
    if data_len % BYTES_PER_SAMPLE != 0 {
        return Err(ValidationError::new(
            Code::MisalignedData,
            format!("{data_len} data bytes is not valid for a bit depth of 32"),
        ));
    }

    let header = WavHeader::parse(bytes)?;

    let magic = |found: [u8; 4], expected: [u8; 4], code: Code| {
        if found == expected {
            Ok(())
        } else {
            Err(ValidationError::new(
                code,
                format!(
                    "expected `{}` magic, found {:?}",
                    String::from_utf8_lossy(&expected),
                    String::from_utf8_lossy(&found)
                ),
            ))
        }
    };
    magic(header.riff_magic, RIFF_MAGIC, Code::MissingRiffMagic)?;
    magic(header.wave_magic, WAVE_MAGIC, Code::MissingWaveMagic)?;
    magic(header.fmt_magic, FMT_MAGIC, Code::MissingFmtMagic)?;
    magic(header.data_magic, DATA_MAGIC, Code::MissingDataMagic)?;

    if header.format_tag != PCM_FORMAT {
        return Err(ValidationError::new(
            Code::NotPcm,
            format!("format tag {} is not PCM", header.format_tag),
        ));
    }
    if header.channels != 1 {
        return Err(ValidationError::new(
            Code::NotMono,
            format!("{} channels, expected mono", header.channels),
        ));
    }
    if header.bits_per_sample != 32 {
        return Err(ValidationError::new(
            Code::UnsupportedBitDepth,
            format!("{} bits per sample, expected 32", header.bits_per_sample),
        ));
    }
    if header.data_size as usize != data_len {
        return Err(ValidationError::new(
            Code::DataSizeMismatch,
            format!(
                "data size field is {} but the file holds {data_len} data bytes",
                header.data_size
            ),
        ));
    }

    Ok(header)
}
