//! Distortion stage: bounded multiplicative noise.

use crate::rng::NoiseLcg;
use crate::stage::Stage;

/// Half-width of the per-sample noise window.
///
/// Each sample is scaled by `1 + amount * u` with `u` uniform in
/// `[-0.1, 0.1)`, so even at full amount the gain wobble stays within 10%.
const NOISE_SPAN: f64 = 0.1;

/// Per-sample multiplicative noise injector.
///
/// The noise source is an explicitly seeded [`NoiseLcg`] owned by the stage,
/// so conversions are reproducible for equal seeds and concurrent pipelines
/// never share generator state.
#[derive(Debug, Clone)]
pub struct Distortion {
    amount: f64,
    rng: NoiseLcg,
}

impl Distortion {
    /// Create a distortion stage with the given amount in [0, 1] and seed.
    pub fn new(amount: f64, seed: u64) -> Self {
        Self {
            amount,
            rng: NoiseLcg::new(seed),
        }
    }

    /// Configured amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Stage for Distortion {
    fn name(&self) -> &'static str {
        "distortion"
    }

    fn process(&mut self, samples: &mut [f64]) {
        for s in samples.iter_mut() {
            let u = self.rng.next_bipolar() * NOISE_SPAN;
            *s *= 1.0 + self.amount * u;
        }
    }
}
