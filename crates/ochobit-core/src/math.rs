//! Math helpers shared by the pipeline stages.
//!
//! All routines go through `libm` so the stage code has a single, portable
//! source of transcendental functions.

use libm::{exp, floor, pow, round};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use ochobit_core::math::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-9);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.001);
/// ```
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f64 = core::f64::consts::LN_10 / 20.0;
    exp(db * FACTOR)
}

/// Signum with a zero at zero.
///
/// `f64::signum` maps `+0.0` to `1.0`, which would turn silence into a full
/// scale pulse in the shaper stages. The pipeline needs sign(0) = 0 so every
/// stage preserves exact zeros.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Floor division snapped back to the step grid.
///
/// Rounds toward negative infinity, matching two's-complement integer
/// division on the amplitude grid: `-300` with step `256` lands on `-512`,
/// not `-256`.
#[inline]
pub fn floor_to_step(x: f64, step: f64) -> f64 {
    floor(x / step) * step
}

/// Maximum representable magnitude for a signed depth of `bits`.
///
/// `2^(bits-1) - 1`; e.g. 127 for 8 bits, 32767 for 16 bits.
#[inline]
pub fn max_val(bits: u16) -> f64 {
    pow(2.0, f64::from(bits) - 1.0) - 1.0
}

/// Quantizer step count for a bit depth and quantize factor.
///
/// `max(2, round(2^bits * (1 - factor)))`. A factor of 0 keeps the full
/// `2^bits` grid; a factor near 1 bottoms out at 2 steps.
#[inline]
pub fn quantize_steps(bits: u16, factor: f64) -> f64 {
    let steps = round(pow(2.0, f64::from(bits)) * (1.0 - factor));
    if steps < 2.0 { 2.0 } else { steps }
}
