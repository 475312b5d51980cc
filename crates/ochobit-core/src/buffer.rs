//! Interleaved integer sample buffers.

use crate::error::PipelineError;

/// A fully materialized PCM buffer plus its container metadata.
///
/// Samples are interleaved across channels in frame order. The buffer is
/// owned by one conversion call for its whole lifetime; the pipeline never
/// shares or caches it across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    /// Amplitude values, interleaved by channel.
    pub samples: Vec<i32>,
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Container sample width in bytes (1 = 8-bit, 2 = 16-bit).
    pub sample_width: u16,
}

impl SampleBuffer {
    /// Create a buffer from interleaved samples and metadata.
    pub fn new(samples: Vec<i32>, channels: u16, sample_rate: u32, sample_width: u16) -> Self {
        Self {
            samples,
            channels,
            sample_rate,
            sample_width,
        }
    }

    /// Total sample count across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f64 / f64::from(self.sample_rate)
        }
    }

    /// Check the invariants every pipeline call relies on.
    ///
    /// Rejects zero channels, empty buffers, and lengths that do not split
    /// into whole interleaved frames. Runs before any stage mutates data.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.channels == 0 {
            return Err(PipelineError::UnsupportedChannelLayout {
                channels: self.channels,
            });
        }
        if self.samples.is_empty() {
            return Err(PipelineError::EmptyBuffer);
        }
        if self.samples.len() % self.channels as usize != 0 {
            return Err(PipelineError::FrameAlignment {
                len: self.samples.len(),
                channels: self.channels,
            });
        }
        Ok(())
    }
}
