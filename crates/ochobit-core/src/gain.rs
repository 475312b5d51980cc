//! Fixed gain stage.

use crate::math::db_to_linear;
use crate::stage::Stage;

/// Constant gain applied to every sample.
///
/// The enhanced preset uses a +3 dB boost to compensate for the level lost
/// to quantization, placed before the clipper so the clipper remains the
/// single stage that enforces the output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gain {
    linear: f64,
}

impl Gain {
    /// Create a gain stage from a decibel value.
    pub fn from_db(db: f64) -> Self {
        Self {
            linear: db_to_linear(db),
        }
    }

    /// Linear gain factor.
    pub fn linear(&self) -> f64 {
        self.linear
    }
}

impl Stage for Gain {
    fn name(&self) -> &'static str {
        "gain"
    }

    fn process(&mut self, samples: &mut [f64]) {
        for s in samples.iter_mut() {
            *s *= self.linear;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_db_is_about_1_41() {
        let gain = Gain::from_db(3.0);
        assert!((gain.linear() - 1.4125).abs() < 1e-3);
    }

    #[test]
    fn zero_db_is_identity() {
        let mut gain = Gain::from_db(0.0);
        let original = vec![1.0, -2.0, 3.5];
        let mut buf = original.clone();
        gain.process(&mut buf);
        assert_eq!(buf, original);
    }

    #[test]
    fn boost_scales_all_samples() {
        let mut gain = Gain::from_db(6.0206);
        let mut buf = vec![100.0, -50.0];
        gain.process(&mut buf);
        assert!((buf[0] - 200.0).abs() < 0.1);
        assert!((buf[1] + 100.0).abs() < 0.1);
    }
}
