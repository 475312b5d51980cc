//! Audio I/O layer for the ochobit pipeline.
//!
//! The core crate only transforms in-memory buffers; this crate is the
//! external collaborator it assumes:
//!
//! - **WAV container I/O**: [`read_wav`] and [`write_wav`] move integer PCM
//!   between files and [`SampleBuffer`]s, channels preserved.
//! - **Sample-rate conformance**: [`resample`] conforms a buffer to the
//!   target rate the preset composer requests.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ochobit_io::{read_wav, resample, write_wav};
//!
//! let input = read_wav("song.wav")?;
//! let conformed = resample(&input, 11025)?;
//! // ... run the pipeline over `conformed` ...
//! write_wav("song-chiptune.wav", &output)?;
//! ```

mod resample;
mod wav;

pub use resample::resample;
pub use wav::{WavFormat, WavInfo, read_wav, read_wav_info, write_wav};

use ochobit_core::PipelineError;

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The container format cannot be produced or consumed.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// A resample target of zero Hz.
    #[error("Target sample rate must be positive")]
    ZeroSampleRate,

    /// The buffer violates a pipeline invariant.
    #[error("Invalid buffer: {0}")]
    Pipeline(#[from] PipelineError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
