//! In-memory file representation.

use crate::header::WavHeader;

/// A decoded file: its header and its samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    /// Header exactly as read.
    pub header: WavHeader,
    /// Samples in file order.
    pub samples: Vec<i32>,
}

impl WavFile {
    /// A fresh mono 32-bit file.
    pub fn pcm32_mono(sample_rate: u32, samples: Vec<i32>) -> Self {
        Self {
            header: WavHeader::pcm32_mono(sample_rate, samples.len()),
            samples,
        }
    }

    /// Same header, new samples.
    ///
    /// # Panics
    /// Panics if the sample count changes, since the passed-through header would
    /// no longer describe the data.
    pub fn with_samples(&self, samples: Vec<i32>) -> Self {
        assert_eq!(
            samples.len(),
            self.samples.len(),
            "replacement samples must keep the header's sample count"
        );
        Self {
            header: self.header,
            samples,
        }
    }
}
