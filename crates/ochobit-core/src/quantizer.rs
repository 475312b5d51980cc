//! Amplitude quantizer: step-rounding bit-depth reduction.
//!
//! Snapping every sample down onto a coarse amplitude grid is the classic
//! "bit crush": fewer effective levels, more broadband quantization noise.
//! The step count is either derived from a bit depth and a strength factor
//! or fixed outright (the chiptune preset always uses 16 steps).

use crate::math::{floor_to_step, quantize_steps};
use crate::stage::Stage;

/// Step-rounding quantizer stage.
///
/// Replaces every sample `s` with `floor(s / steps) * steps`, flooring
/// toward negative infinity so the grid is uniform across zero. Applying
/// the stage twice with the same step size is a no-op the second time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantizer {
    steps: f64,
}

impl Quantizer {
    /// Derive the step size from a bit depth and quantize factor.
    ///
    /// `steps = max(2, round(2^bits * (1 - factor)))`: factor 0 keeps the
    /// full grid of the bit depth, factor near 1 bottoms out at two steps.
    pub fn from_factor(bit_depth: u16, factor: f64) -> Self {
        Self {
            steps: quantize_steps(bit_depth, factor),
        }
    }

    /// Use a fixed step size, bypassing the factor arithmetic.
    pub fn with_steps(steps: u32) -> Self {
        Self {
            steps: f64::from(steps.max(2)),
        }
    }

    /// The effective step size.
    pub fn steps(&self) -> f64 {
        self.steps
    }
}

impl Stage for Quantizer {
    fn name(&self) -> &'static str {
        "quantize"
    }

    fn process(&mut self, samples: &mut [f64]) {
        for s in samples.iter_mut() {
            *s = floor_to_step(*s, self.steps);
        }
    }
}
