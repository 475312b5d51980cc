//! Square and pulse waveshaping stages.
//!
//! Both stages push the waveform toward the flat-topped shapes of early
//! sound chips. The square shaper applies a strong compressive power curve
//! (exponent 0.3) that drives small signals toward full scale and blends it
//! with the dry signal by a configurable mix. The pulse shaper is the
//! chiptune sub-variant: a fixed-height pulse at 80% of full scale, blended
//! with fixed 0.2/0.8 weights.

use crate::math::sign;
use crate::stage::Stage;
use libm::{fabs, pow};

/// Shaping exponent for the square curve.
///
/// `|x|^0.3` is a strong compressive map on [0, 1]: 0.1 becomes ~0.5,
/// 0.5 becomes ~0.81, so mid-level material sits near the rails.
const SQUARE_EXPONENT: f64 = 0.3;

/// Pulse height as a fraction of full scale.
const PULSE_LEVEL: f64 = 0.8;

/// Dry weight of the pulse blend.
const PULSE_DRY: f64 = 0.2;

/// Wet weight of the pulse blend.
const PULSE_WET: f64 = 0.8;

/// Sign-preserving power-curve shaper with a configurable blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareShaper {
    max_val: f64,
    mix: f64,
}

impl SquareShaper {
    /// Create a shaper for the given full-scale value and mix in [0, 1].
    ///
    /// `max_val` must be positive; parameter resolution guarantees a bit
    /// depth of at least two for any preset that builds this stage.
    pub fn new(max_val: f64, mix: f64) -> Self {
        debug_assert!(max_val > 0.0, "square shaper needs a nonzero full scale");
        Self { max_val, mix }
    }
}

impl Stage for SquareShaper {
    fn name(&self) -> &'static str {
        "square"
    }

    fn process(&mut self, samples: &mut [f64]) {
        for s in samples.iter_mut() {
            let normalized = *s / self.max_val;
            let shaped = sign(normalized) * pow(fabs(normalized), SQUARE_EXPONENT) * self.max_val;
            *s = *s * (1.0 - self.mix) + shaped * self.mix;
        }
    }
}

/// Fixed-weight pulse shaper used by the chiptune preset.
///
/// Every nonzero sample contributes a pulse of `±0.8 * max_val`; the output
/// is `0.2 * dry + 0.8 * pulse`. Exact zeros stay zero (sign(0) = 0), so
/// silence never turns into a DC pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseShaper {
    max_val: f64,
}

impl PulseShaper {
    /// Create a pulse shaper for the given full-scale value.
    pub fn new(max_val: f64) -> Self {
        Self { max_val }
    }
}

impl Stage for PulseShaper {
    fn name(&self) -> &'static str {
        "pulse"
    }

    fn process(&mut self, samples: &mut [f64]) {
        for s in samples.iter_mut() {
            let pulse = sign(*s) * self.max_val * PULSE_LEVEL;
            *s = *s * PULSE_DRY + pulse * PULSE_WET;
        }
    }
}
