//! Tremolo/arpeggio stage: periodic amplitude envelope.

use crate::stage::Stage;
use libm::sin;

/// Envelope cycles spread across the buffer.
///
/// The rate is buffer-relative, not time-relative: resampling the input to
/// a different length changes the perceived modulation speed.
const ENVELOPE_CYCLES: f64 = 8.0;

/// Sinusoidal amplitude modulator approximating rapid arpeggios.
///
/// Scales sample `i` of an N-sample buffer by
/// `1 + sin(2π * 8 * i / N) * depth`. The envelope spans the flat
/// interleaved buffer, so all channels share one sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tremolo {
    depth: f64,
}

impl Tremolo {
    /// Create a tremolo with the given depth in [0, 1].
    pub fn new(depth: f64) -> Self {
        Self { depth }
    }

    /// Configured depth.
    pub fn depth(&self) -> f64 {
        self.depth
    }
}

impl Stage for Tremolo {
    fn name(&self) -> &'static str {
        "tremolo"
    }

    fn process(&mut self, samples: &mut [f64]) {
        let len = samples.len() as f64;
        let step = core::f64::consts::TAU * ENVELOPE_CYCLES / len;
        for (i, s) in samples.iter_mut().enumerate() {
            let envelope = sin(step * i as f64) * self.depth;
            *s *= 1.0 + envelope;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_depth_is_identity() {
        let mut stage = Tremolo::new(0.0);
        let original: Vec<f64> = (0..1000).map(|i| f64::from(i) - 500.0).collect();
        let mut buf = original.clone();
        stage.process(&mut buf);
        assert_eq!(buf, original);
    }

    #[test]
    fn first_sample_unchanged() {
        // sin(0) = 0, so the envelope always starts at unity gain.
        let mut stage = Tremolo::new(1.0);
        let mut buf = vec![123.0, 456.0, 789.0, 1011.0];
        stage.process(&mut buf);
        assert_eq!(buf[0], 123.0);
    }

    #[test]
    fn gain_stays_within_depth_band() {
        let mut stage = Tremolo::new(0.2);
        let mut buf = vec![1000.0; 4096];
        stage.process(&mut buf);
        for &s in &buf {
            assert!((800.0 - 1e-9..=1200.0 + 1e-9).contains(&s), "got {s}");
        }
    }

    #[test]
    fn envelope_modulates_both_directions() {
        let mut stage = Tremolo::new(0.5);
        let mut buf = vec![1000.0; 1024];
        stage.process(&mut buf);
        assert!(buf.iter().any(|&s| s > 1400.0), "missing boost half-cycle");
        assert!(buf.iter().any(|&s| s < 600.0), "missing cut half-cycle");
    }

    #[test]
    fn silence_is_preserved() {
        let mut stage = Tremolo::new(1.0);
        let mut buf = vec![0.0; 512];
        stage.process(&mut buf);
        assert!(buf.iter().all(|&s| s == 0.0));
    }
}
