//! Sample-rate conformance by linear interpolation.

use crate::{Error, Result};
use ochobit_core::SampleBuffer;

/// Conform a buffer to a target sample rate.
///
/// The preset composer only records the target rate; this function does the
/// actual conversion, interpolating linearly between neighboring frames of
/// each channel. Time-domain interpolation is all the retro pipeline needs —
/// aliasing from the missing lowpass is part of the sound being imitated.
///
/// Returns a clone when the rate already matches. Errors on a zero target
/// rate or a buffer that violates the interleaving invariants.
pub fn resample(input: &SampleBuffer, target_rate: u32) -> Result<SampleBuffer> {
    if target_rate == 0 {
        return Err(Error::ZeroSampleRate);
    }
    input.validate()?;

    if input.sample_rate == target_rate {
        return Ok(input.clone());
    }

    let channels = input.channels as usize;
    let frames_in = input.frames();
    let frames_out =
        ((frames_in as u64 * u64::from(target_rate)) / u64::from(input.sample_rate)).max(1) as usize;

    tracing::debug!(
        from = input.sample_rate,
        to = target_rate,
        frames_in,
        frames_out,
        "resample"
    );

    let ratio = f64::from(input.sample_rate) / f64::from(target_rate);
    let mut samples = Vec::with_capacity(frames_out * channels);

    for frame in 0..frames_out {
        let pos = frame as f64 * ratio;
        let i0 = (pos as usize).min(frames_in - 1);
        let i1 = (i0 + 1).min(frames_in - 1);
        let frac = pos - i0 as f64;

        for ch in 0..channels {
            let a = f64::from(input.samples[i0 * channels + ch]);
            let b = f64::from(input.samples[i1 * channels + ch]);
            samples.push((a + (b - a) * frac).round() as i32);
        }
    }

    Ok(SampleBuffer::new(
        samples,
        input.channels,
        target_rate,
        input.sample_width,
    ))
}
