//! Preset composer: stage selection and ordering per mode.

use crate::distortion::Distortion;
use crate::gain::Gain;
use crate::math::max_val;
use crate::params::{EffectParameters, Mode};
use crate::quantizer::Quantizer;
use crate::shaper::{PulseShaper, SquareShaper};
use crate::stage::Stage;
use crate::tremolo::Tremolo;

/// Fixed quantizer step count of the chiptune preset.
const CHIPTUNE_STEPS: u32 = 16;

/// Gain boost of the enhanced preset, compensating quantization loss.
const ENHANCED_BOOST_DB: f64 = 3.0;

/// Assemble the stage list for resolved parameters.
///
/// Stage order is fixed per mode; zero-amount stages are left out entirely,
/// which is what makes zero intensities exact no-ops. The clipper is not in
/// the list — it always runs last and is owned by the pipeline.
///
/// - **simple**: no stages (rate and container-width reduction only).
/// - **enhanced**: quantize -> square shape -> distort -> +3 dB gain.
/// - **chiptune**: 16-step quantize -> pulse shape -> tremolo.
pub fn stages_for(params: &EffectParameters, seed: u64) -> Vec<Box<dyn Stage>> {
    let full_scale = max_val(params.bit_depth);
    let mut stages: Vec<Box<dyn Stage>> = Vec::new();

    match params.mode {
        Mode::Simple => {}
        Mode::Enhanced => {
            if params.quantize_factor > 0.0 {
                stages.push(Box::new(Quantizer::from_factor(
                    params.bit_depth,
                    params.quantize_factor,
                )));
            }
            if params.square_wave_effect > 0.0 {
                stages.push(Box::new(SquareShaper::new(
                    full_scale,
                    params.square_wave_effect,
                )));
            }
            if params.distortion > 0.0 {
                stages.push(Box::new(Distortion::new(params.distortion, seed)));
            }
            stages.push(Box::new(Gain::from_db(ENHANCED_BOOST_DB)));
        }
        Mode::Chiptune => {
            stages.push(Box::new(Quantizer::with_steps(CHIPTUNE_STEPS)));
            stages.push(Box::new(PulseShaper::new(full_scale)));
            if params.arpeggio_effect > 0.0 {
                stages.push(Box::new(Tremolo::new(params.arpeggio_effect)));
            }
        }
    }

    stages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Overrides;

    fn names(stages: &[Box<dyn Stage>]) -> Vec<&'static str> {
        stages.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn simple_has_no_stages() {
        let params = EffectParameters::resolve(Mode::Simple, &Overrides::default()).unwrap();
        assert!(stages_for(&params, 0).is_empty());
    }

    #[test]
    fn enhanced_default_order() {
        let params = EffectParameters::resolve(Mode::Enhanced, &Overrides::default()).unwrap();
        assert_eq!(
            names(&stages_for(&params, 0)),
            vec!["quantize", "square", "distortion", "gain"]
        );
    }

    #[test]
    fn enhanced_drops_zero_amount_stages() {
        let overrides = Overrides {
            quantize_factor: Some(0.0),
            square_wave_effect: Some(0.0),
            distortion: Some(0.0),
            ..Overrides::default()
        };
        let params = EffectParameters::resolve(Mode::Enhanced, &overrides).unwrap();
        assert_eq!(names(&stages_for(&params, 0)), vec!["gain"]);
    }

    #[test]
    fn chiptune_default_order() {
        let params = EffectParameters::resolve(Mode::Chiptune, &Overrides::default()).unwrap();
        assert_eq!(
            names(&stages_for(&params, 0)),
            vec!["quantize", "pulse", "tremolo"]
        );
    }

    #[test]
    fn chiptune_quantizer_ignores_bit_depth() {
        // The fixed 16-step grid is independent of the configured depth.
        let overrides = Overrides {
            bit_depth: Some(12),
            arpeggio_effect: Some(0.0),
            ..Overrides::default()
        };
        let params = EffectParameters::resolve(Mode::Chiptune, &overrides).unwrap();
        let stages = stages_for(&params, 0);
        assert_eq!(names(&stages), vec!["quantize", "pulse"]);
    }
}
