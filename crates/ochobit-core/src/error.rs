//! Error types for the degradation pipeline.

use thiserror::Error;

/// Errors reported by parameter resolution and pipeline execution.
///
/// Every error is raised before the caller's buffer is touched: a conversion
/// either returns a complete output buffer or fails with no partial result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    /// A numeric option is outside its valid range.
    ///
    /// Out-of-range overrides are rejected rather than clamped, so the
    /// caller never gets audio produced from silently adjusted settings.
    #[error("invalid parameter '{param}': value {value} out of range [{min}, {max}]")]
    InvalidParameter {
        /// Name of the offending parameter.
        param: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// The input buffer contains no samples.
    ///
    /// Zero-length input is an error, not a no-op: the tremolo envelope and
    /// the output metadata both divide by the buffer length.
    #[error("input buffer is empty")]
    EmptyBuffer,

    /// The channel count is zero.
    #[error("unsupported channel layout: {channels} channels")]
    UnsupportedChannelLayout {
        /// The rejected channel count.
        channels: u16,
    },

    /// Buffer length is not a whole number of interleaved frames.
    #[error("buffer length {len} is not a multiple of {channels} channels")]
    FrameAlignment {
        /// Sample count of the buffer.
        len: usize,
        /// Channel count the buffer claims.
        channels: u16,
    },

    /// A mode name did not match any built-in preset.
    #[error("unknown mode: {0} (expected simple, enhanced, or chiptune)")]
    UnknownMode(String),
}

impl PipelineError {
    /// Create an [`PipelineError::InvalidParameter`] for a named range check.
    pub fn out_of_range(param: &'static str, value: f64, min: f64, max: f64) -> Self {
        PipelineError::InvalidParameter {
            param,
            value,
            min,
            max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display_names_param_and_range() {
        let err = PipelineError::out_of_range("quantize_factor", 1.5, 0.0, 1.0);
        let msg = err.to_string();
        assert!(msg.contains("quantize_factor"), "got: {msg}");
        assert!(msg.contains("[0, 1]"), "got: {msg}");
        assert!(msg.contains("1.5"), "got: {msg}");
    }

    #[test]
    fn empty_buffer_display() {
        assert_eq!(PipelineError::EmptyBuffer.to_string(), "input buffer is empty");
    }

    #[test]
    fn frame_alignment_display() {
        let err = PipelineError::FrameAlignment {
            len: 5,
            channels: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('2'), "got: {msg}");
    }

    #[test]
    fn unknown_mode_display() {
        let msg = PipelineError::UnknownMode("vaporwave".to_string()).to_string();
        assert!(msg.contains("vaporwave"), "got: {msg}");
    }
}
