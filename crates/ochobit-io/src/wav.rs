//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use ochobit_core::SampleBuffer;
use std::path::Path;

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
///
/// Opens the file, reads the header, and returns a [`WavInfo`] struct with
/// format details and duration. Much faster than [`read_wav`] for files
/// where only metadata is needed.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len()); // total across all channels
    let num_frames = total_samples / u64::from(spec.channels);
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// Read a WAV file into an interleaved integer [`SampleBuffer`].
///
/// Channels are preserved as-is; the pipeline applies the same transform
/// per interleaved sample, so no mixdown happens here. Float WAVs are
/// materialized to the 16-bit integer range so the core always sees
/// integer PCM.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    let (samples, sample_width): (Vec<i32>, u16) = match spec.sample_format {
        SampleFormat::Int => {
            let width = spec.bits_per_sample.div_ceil(8);
            let samples = reader
                .into_samples::<i32>()
                .collect::<std::result::Result<Vec<_>, _>>()?;
            (samples, width)
        }
        SampleFormat::Float => {
            let samples = reader
                .into_samples::<f32>()
                .map(|s| s.map(|v| (f64::from(v) * 32767.0).clamp(-32767.0, 32767.0) as i32))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            (samples, 2)
        }
    };

    tracing::debug!(
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        samples = samples.len(),
        "read wav"
    );

    Ok(SampleBuffer::new(
        samples,
        spec.channels,
        spec.sample_rate,
        sample_width,
    ))
}

/// Write an integer [`SampleBuffer`] to a WAV file.
///
/// The container bit depth follows the buffer's `sample_width` (1 byte =
/// 8-bit, 2 bytes = 16-bit); wider buffers are rejected since the pipeline
/// never produces them. Values outside the container range are clamped
/// during the narrowing cast.
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.channels,
        sample_rate: buffer.sample_rate,
        bits_per_sample: buffer.sample_width * 8,
        sample_format: SampleFormat::Int,
    };

    tracing::debug!(
        channels = buffer.channels,
        sample_rate = buffer.sample_rate,
        bits = spec.bits_per_sample,
        samples = buffer.len(),
        "write wav"
    );

    let mut writer = WavWriter::create(path, spec)?;
    match buffer.sample_width {
        1 => {
            for &sample in &buffer.samples {
                writer.write_sample(sample.clamp(-128, 127) as i8)?;
            }
        }
        2 => {
            for &sample in &buffer.samples {
                writer.write_sample(sample.clamp(-32768, 32767) as i16)?;
            }
        }
        other => {
            return Err(Error::UnsupportedFormat(format!(
                "{other}-byte container width"
            )));
        }
    }
    writer.finalize()?;
    Ok(())
}
