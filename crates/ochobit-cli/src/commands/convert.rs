//! File conversion command.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use ochobit_core::{EffectParameters, Mode, Overrides, Pipeline, SampleBuffer};
use ochobit_io::{read_wav, resample, write_wav};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Args)]
pub struct ConvertArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (defaults to the input name plus a mode suffix)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Conversion mode (simple, enhanced, chiptune)
    #[arg(short, long, conflicts_with = "all")]
    mode: Option<Mode>,

    /// Emit all three mode variants in one run
    #[arg(long, conflicts_with = "output")]
    all: bool,

    /// Target sample rate in Hz
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Target bit depth
    #[arg(long)]
    bit_depth: Option<u16>,

    /// Quantization strength (0-1)
    #[arg(long)]
    quantize_factor: Option<f64>,

    /// Square-wave blend amount (0-1)
    #[arg(long)]
    square_wave_effect: Option<f64>,

    /// Distortion amount (0-1)
    #[arg(long)]
    distortion: Option<f64>,

    /// Tremolo/arpeggio depth (0-1)
    #[arg(long)]
    arpeggio_effect: Option<f64>,

    /// Seed for the distortion noise source (defaults to system time)
    #[arg(long)]
    seed: Option<u64>,

    /// Preset file (TOML) with a mode and parameter overrides
    #[arg(short, long)]
    preset: Option<PathBuf>,
}

/// Preset file format.
#[derive(Debug, serde::Deserialize)]
struct PresetFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    mode: Option<Mode>,
    #[serde(default)]
    params: Overrides,
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let input = read_wav(&args.input)?;
    println!(
        "  {} samples, {} channel(s), {} Hz, {:.2}s",
        input.len(),
        input.channels,
        input.sample_rate,
        input.duration_secs()
    );

    let flag_overrides = Overrides {
        sample_rate: args.sample_rate,
        bit_depth: args.bit_depth,
        quantize_factor: args.quantize_factor,
        square_wave_effect: args.square_wave_effect,
        distortion: args.distortion,
        arpeggio_effect: args.arpeggio_effect,
    };

    let (overrides, preset_mode) = match &args.preset {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let preset: PresetFile = toml::from_str(&content)?;
            if let Some(name) = &preset.name {
                println!("Loading preset: {name}");
            }
            // Command-line flags win over the preset file.
            (flag_overrides.or(preset.params), preset.mode)
        }
        None => (flag_overrides, None),
    };

    let modes: Vec<Mode> = if args.all {
        Mode::ALL.to_vec()
    } else {
        vec![args.mode.or(preset_mode).unwrap_or_default()]
    };

    let seed = args.seed.unwrap_or_else(seed_from_time);
    tracing::debug!(seed, "distortion noise seed");

    let pb = ProgressBar::new(modes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    for mode in modes {
        pb.set_message(mode.name());
        let params = EffectParameters::resolve(mode, &overrides)?;

        let conformed = resample(&input, params.sample_rate)?;
        let output = Pipeline::for_params(&params, seed).run(&conformed)?;

        let path = match &args.output {
            Some(path) => path.clone(),
            None => derived_output_path(&args.input, mode),
        };
        write_wav(&path, &output)?;
        pb.inc(1);

        print_stats(&input, &output);
        println!("  {mode} -> {}", path.display());
    }

    pb.finish_with_message("done");
    Ok(())
}

/// Default output path: the input stem plus the mode suffix, as WAV.
fn derived_output_path(input: &Path, mode: Mode) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{stem}{}.wav", mode.output_suffix()))
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn print_stats(input: &SampleBuffer, output: &SampleBuffer) {
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(input)),
        linear_to_db(peak(input))
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(output)),
        linear_to_db(peak(output))
    );
}

/// Full-scale magnitude of a buffer's container width.
fn full_scale(buffer: &SampleBuffer) -> f64 {
    ((1i64 << (buffer.sample_width * 8 - 1)) - 1) as f64
}

fn rms(buffer: &SampleBuffer) -> f64 {
    if buffer.is_empty() {
        return 0.0;
    }
    let scale = full_scale(buffer);
    let sum: f64 = buffer
        .samples
        .iter()
        .map(|&s| {
            let v = f64::from(s) / scale;
            v * v
        })
        .sum();
    (sum / buffer.len() as f64).sqrt()
}

fn peak(buffer: &SampleBuffer) -> f64 {
    let scale = full_scale(buffer);
    buffer
        .samples
        .iter()
        .map(|&s| f64::from(s).abs() / scale)
        .fold(0.0, f64::max)
}

fn linear_to_db(linear: f64) -> f64 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_names_follow_mode_suffix() {
        let path = derived_output_path(Path::new("/tmp/song.wav"), Mode::Chiptune);
        assert_eq!(path, Path::new("/tmp/song-chiptune.wav"));

        let path = derived_output_path(Path::new("song.mp3"), Mode::Simple);
        assert_eq!(path, Path::new("song-simple-8bit.wav"));
    }

    #[test]
    fn preset_file_parses_partial_overrides() {
        let toml = r#"
            name = "crunchy"
            mode = "enhanced"

            [params]
            sample_rate = 6000
            quantize_factor = 0.9
        "#;
        let preset: PresetFile = toml::from_str(toml).unwrap();
        assert_eq!(preset.name.as_deref(), Some("crunchy"));
        assert_eq!(preset.mode, Some(Mode::Enhanced));
        assert_eq!(preset.params.sample_rate, Some(6000));
        assert_eq!(preset.params.quantize_factor, Some(0.9));
        assert_eq!(preset.params.bit_depth, None);
    }

    #[test]
    fn preset_file_rejects_unknown_params() {
        let toml = r#"
            [params]
            reverb = 0.5
        "#;
        assert!(toml::from_str::<PresetFile>(toml).is_err());
    }

    #[test]
    fn stats_of_silence_bottom_out() {
        let buffer = SampleBuffer::new(vec![0; 100], 1, 8000, 2);
        assert_eq!(linear_to_db(rms(&buffer)), -120.0);
        assert_eq!(linear_to_db(peak(&buffer)), -120.0);
    }

    #[test]
    fn full_scale_peak_is_zero_db() {
        let buffer = SampleBuffer::new(vec![32767, -32767], 1, 8000, 2);
        assert!(linear_to_db(peak(&buffer)).abs() < 1e-6);
    }

    #[test]
    fn end_to_end_conversion_writes_all_variants() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("tone.wav");
        let samples: Vec<i32> = (0..44100)
            .map(|i| {
                let t = f64::from(i) / 44100.0;
                ((2.0 * std::f64::consts::PI * 220.0 * t).sin() * 12_000.0) as i32
            })
            .collect();
        let buffer = SampleBuffer::new(samples, 1, 44100, 2);
        write_wav(&input_path, &buffer).unwrap();

        let args = ConvertArgs {
            input: input_path.clone(),
            output: None,
            mode: None,
            all: true,
            sample_rate: None,
            bit_depth: None,
            quantize_factor: None,
            square_wave_effect: None,
            distortion: None,
            arpeggio_effect: None,
            seed: Some(7),
            preset: None,
        };
        run(args).unwrap();

        for suffix in ["-simple-8bit", "-enhanced-8bit", "-chiptune"] {
            let path = dir.path().join(format!("tone{suffix}.wav"));
            assert!(path.exists(), "missing {}", path.display());
        }
    }
}
