//! Conversion modes and the validated parameter record.

use crate::error::PipelineError;
use core::fmt;
use core::str::FromStr;

/// Hard ceiling on bit depth.
///
/// `2^(depth-1) - 1` must survive the f64 stage path exactly and narrow back
/// into `i32`; depths past 26 would lose grid points silently, so they are
/// rejected instead.
pub const MAX_BIT_DEPTH: u16 = 26;

/// Built-in conversion presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Sample-rate and container-width reduction only.
    Simple,
    /// Quantize, square-shape, distort, and boost by 3 dB.
    #[default]
    Enhanced,
    /// Hard 16-step quantize, pulse shaping, and tremolo; always lands in a
    /// 16-bit container.
    Chiptune,
}

impl Mode {
    /// All built-in modes, in documentation order.
    pub const ALL: [Mode; 3] = [Mode::Simple, Mode::Enhanced, Mode::Chiptune];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Enhanced => "enhanced",
            Mode::Chiptune => "chiptune",
        }
    }

    /// Suffix appended to an input file stem when no output name is given.
    pub fn output_suffix(self) -> &'static str {
        match self {
            Mode::Simple => "-simple-8bit",
            Mode::Enhanced => "-enhanced-8bit",
            Mode::Chiptune => "-chiptune",
        }
    }

    /// Default target sample rate for the mode.
    pub fn default_sample_rate(self) -> u32 {
        match self {
            Mode::Simple | Mode::Enhanced => 8000,
            Mode::Chiptune => 11025,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Mode::Simple),
            "enhanced" => Ok(Mode::Enhanced),
            "chiptune" => Ok(Mode::Chiptune),
            other => Err(PipelineError::UnknownMode(other.to_string())),
        }
    }
}

/// Caller-supplied overrides for the numeric options of a mode.
///
/// Every field is optional; unset fields fall back to the mode defaults
/// during [`EffectParameters::resolve`]. Deserializable so preset files can
/// carry a partial set of overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Overrides {
    /// Target sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Target bit depth.
    pub bit_depth: Option<u16>,
    /// Quantization strength in [0, 1].
    pub quantize_factor: Option<f64>,
    /// Square-wave blend amount in [0, 1].
    pub square_wave_effect: Option<f64>,
    /// Distortion amount in [0, 1].
    pub distortion: Option<f64>,
    /// Tremolo/arpeggio depth in [0, 1].
    pub arpeggio_effect: Option<f64>,
}

impl Overrides {
    /// Combine two override sets, preferring `self` where both are set.
    pub fn or(self, fallback: Overrides) -> Overrides {
        Overrides {
            sample_rate: self.sample_rate.or(fallback.sample_rate),
            bit_depth: self.bit_depth.or(fallback.bit_depth),
            quantize_factor: self.quantize_factor.or(fallback.quantize_factor),
            square_wave_effect: self.square_wave_effect.or(fallback.square_wave_effect),
            distortion: self.distortion.or(fallback.distortion),
            arpeggio_effect: self.arpeggio_effect.or(fallback.arpeggio_effect),
        }
    }
}

/// Fully resolved, validated settings for one conversion.
///
/// Built only through [`EffectParameters::resolve`], which applies the mode
/// defaults and fails fast on any out-of-range override. Once constructed,
/// every field is known to be in range, so the stages never re-check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectParameters {
    /// The preset the parameters were resolved against.
    pub mode: Mode,
    /// Target sample rate in Hz (the resampler adapter conforms to this).
    pub sample_rate: u32,
    /// Target bit depth.
    pub bit_depth: u16,
    /// Quantization strength (enhanced mode).
    pub quantize_factor: f64,
    /// Square-wave blend amount (enhanced mode).
    pub square_wave_effect: f64,
    /// Distortion amount (enhanced mode).
    pub distortion: f64,
    /// Tremolo depth (chiptune mode).
    pub arpeggio_effect: f64,
}

fn check_unit(param: &'static str, value: f64) -> Result<f64, PipelineError> {
    if (0.0..=1.0).contains(&value) && value.is_finite() {
        Ok(value)
    } else {
        Err(PipelineError::out_of_range(param, value, 0.0, 1.0))
    }
}

impl EffectParameters {
    /// Resolve a mode's defaults against caller overrides.
    ///
    /// Unset overrides take the mode defaults; set overrides are range
    /// checked and rejected with the parameter name when out of range.
    pub fn resolve(mode: Mode, overrides: &Overrides) -> Result<Self, PipelineError> {
        let sample_rate = overrides.sample_rate.unwrap_or(mode.default_sample_rate());
        if sample_rate == 0 {
            return Err(PipelineError::out_of_range(
                "sample_rate",
                0.0,
                1.0,
                f64::from(u32::MAX),
            ));
        }

        let bit_depth = overrides.bit_depth.unwrap_or(8);
        // The square shaper normalizes by 2^(b-1)-1, which is zero at one
        // bit, so enhanced mode needs at least two bits of headroom.
        let min_depth = if mode == Mode::Enhanced { 2 } else { 1 };
        if bit_depth < min_depth || bit_depth > MAX_BIT_DEPTH {
            return Err(PipelineError::out_of_range(
                "bit_depth",
                f64::from(bit_depth),
                f64::from(min_depth),
                f64::from(MAX_BIT_DEPTH),
            ));
        }

        let quantize_factor = match overrides.quantize_factor {
            Some(v) => check_unit("quantize_factor", v)?,
            None => match mode {
                Mode::Enhanced => 0.8,
                Mode::Simple | Mode::Chiptune => 0.0,
            },
        };
        let square_wave_effect = match overrides.square_wave_effect {
            Some(v) => check_unit("square_wave_effect", v)?,
            None => match mode {
                Mode::Enhanced => 0.3,
                Mode::Simple | Mode::Chiptune => 0.0,
            },
        };
        let distortion = match overrides.distortion {
            Some(v) => check_unit("distortion", v)?,
            None => match mode {
                Mode::Enhanced => 0.2,
                Mode::Simple | Mode::Chiptune => 0.0,
            },
        };
        let arpeggio_effect = match overrides.arpeggio_effect {
            Some(v) => check_unit("arpeggio_effect", v)?,
            None => match mode {
                Mode::Chiptune => 0.2,
                Mode::Simple | Mode::Enhanced => 0.0,
            },
        };

        Ok(Self {
            mode,
            sample_rate,
            bit_depth,
            quantize_factor,
            square_wave_effect,
            distortion,
            arpeggio_effect,
        })
    }

    /// Output container width in bytes for the resolved mode.
    ///
    /// Chiptune always widens to a 16-bit container regardless of the
    /// requested bit depth; simple and enhanced derive the width from the
    /// bit depth, with enhanced never going past two bytes.
    pub fn output_width(&self) -> u16 {
        match self.mode {
            Mode::Simple => (self.bit_depth / 8).max(1),
            Mode::Enhanced => (self.bit_depth / 4).clamp(1, 2),
            Mode::Chiptune => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!("CHIPTUNE".parse::<Mode>().unwrap(), Mode::Chiptune);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(matches!(
            "lofi".parse::<Mode>(),
            Err(PipelineError::UnknownMode(_))
        ));
    }

    #[test]
    fn enhanced_defaults() {
        let p = EffectParameters::resolve(Mode::Enhanced, &Overrides::default()).unwrap();
        assert_eq!(p.sample_rate, 8000);
        assert_eq!(p.bit_depth, 8);
        assert_eq!(p.quantize_factor, 0.8);
        assert_eq!(p.square_wave_effect, 0.3);
        assert_eq!(p.distortion, 0.2);
        assert_eq!(p.arpeggio_effect, 0.0);
    }

    #[test]
    fn chiptune_defaults() {
        let p = EffectParameters::resolve(Mode::Chiptune, &Overrides::default()).unwrap();
        assert_eq!(p.sample_rate, 11025);
        assert_eq!(p.arpeggio_effect, 0.2);
        assert_eq!(p.output_width(), 2);
    }

    #[test]
    fn overrides_replace_defaults() {
        let overrides = Overrides {
            sample_rate: Some(6000),
            bit_depth: Some(6),
            quantize_factor: Some(0.9),
            square_wave_effect: Some(0.5),
            distortion: Some(0.3),
            ..Overrides::default()
        };
        let p = EffectParameters::resolve(Mode::Enhanced, &overrides).unwrap();
        assert_eq!(p.sample_rate, 6000);
        assert_eq!(p.bit_depth, 6);
        assert_eq!(p.quantize_factor, 0.9);
    }

    #[test]
    fn out_of_range_intensity_fails_fast() {
        let overrides = Overrides {
            quantize_factor: Some(1.2),
            ..Overrides::default()
        };
        let err = EffectParameters::resolve(Mode::Enhanced, &overrides).unwrap_err();
        assert_eq!(
            err,
            PipelineError::out_of_range("quantize_factor", 1.2, 0.0, 1.0)
        );
    }

    #[test]
    fn negative_intensity_fails_fast() {
        let overrides = Overrides {
            distortion: Some(-0.1),
            ..Overrides::default()
        };
        assert!(matches!(
            EffectParameters::resolve(Mode::Enhanced, &overrides),
            Err(PipelineError::InvalidParameter {
                param: "distortion",
                ..
            })
        ));
    }

    #[test]
    fn zero_sample_rate_rejected() {
        let overrides = Overrides {
            sample_rate: Some(0),
            ..Overrides::default()
        };
        assert!(matches!(
            EffectParameters::resolve(Mode::Simple, &overrides),
            Err(PipelineError::InvalidParameter {
                param: "sample_rate",
                ..
            })
        ));
    }

    #[test]
    fn one_bit_depth_rejected_for_enhanced_only() {
        let overrides = Overrides {
            bit_depth: Some(1),
            ..Overrides::default()
        };
        assert!(EffectParameters::resolve(Mode::Enhanced, &overrides).is_err());
        assert!(EffectParameters::resolve(Mode::Simple, &overrides).is_ok());
    }

    #[test]
    fn oversized_bit_depth_rejected() {
        let overrides = Overrides {
            bit_depth: Some(32),
            ..Overrides::default()
        };
        assert!(EffectParameters::resolve(Mode::Simple, &overrides).is_err());
    }

    #[test]
    fn output_width_by_mode() {
        let simple = EffectParameters::resolve(Mode::Simple, &Overrides::default()).unwrap();
        assert_eq!(simple.output_width(), 1);

        let wide = EffectParameters::resolve(
            Mode::Simple,
            &Overrides {
                bit_depth: Some(16),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert_eq!(wide.output_width(), 2);

        let enhanced = EffectParameters::resolve(Mode::Enhanced, &Overrides::default()).unwrap();
        assert_eq!(enhanced.output_width(), 2);

        // Chiptune widens to 16-bit even when 8-bit depth is requested.
        let chip = EffectParameters::resolve(
            Mode::Chiptune,
            &Overrides {
                bit_depth: Some(8),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert_eq!(chip.output_width(), 2);
    }

    #[test]
    fn overrides_or_prefers_first() {
        let a = Overrides {
            sample_rate: Some(6000),
            ..Overrides::default()
        };
        let b = Overrides {
            sample_rate: Some(12000),
            bit_depth: Some(16),
            ..Overrides::default()
        };
        let merged = a.or(b);
        assert_eq!(merged.sample_rate, Some(6000));
        assert_eq!(merged.bit_depth, Some(16));
    }
}
