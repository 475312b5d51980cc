//! List conversion modes and their parameters.

use clap::Args;
use ochobit_core::Mode;

/// List available modes.
#[derive(Args)]
pub struct ModesArgs {
    /// Show only the mode names
    #[arg(long)]
    pub names: bool,
}

/// Information about one conversion mode.
struct ModeInfo {
    mode: Mode,
    description: &'static str,
    parameters: &'static [ParameterInfo],
}

/// Information about a mode parameter.
struct ParameterInfo {
    name: &'static str,
    description: &'static str,
    default: &'static str,
    range: &'static str,
}

const SAMPLE_RATE_PARAM: ParameterInfo = ParameterInfo {
    name: "sample_rate",
    description: "Target sample rate in Hz",
    default: "8000",
    range: "1+",
};

const BIT_DEPTH_PARAM: ParameterInfo = ParameterInfo {
    name: "bit_depth",
    description: "Target bit depth",
    default: "8",
    range: "1-26",
};

fn available_modes() -> Vec<ModeInfo> {
    vec![
        ModeInfo {
            mode: Mode::Simple,
            description: "Sample-rate and container-width reduction only",
            parameters: &[SAMPLE_RATE_PARAM, BIT_DEPTH_PARAM],
        },
        ModeInfo {
            mode: Mode::Enhanced,
            description: "Quantize, square-shape, distort, and boost 3 dB",
            parameters: &[
                SAMPLE_RATE_PARAM,
                ParameterInfo {
                    name: "bit_depth",
                    description: "Target bit depth",
                    default: "8",
                    range: "2-26",
                },
                ParameterInfo {
                    name: "quantize_factor",
                    description: "Quantization strength",
                    default: "0.8",
                    range: "0-1",
                },
                ParameterInfo {
                    name: "square_wave_effect",
                    description: "Square-wave blend amount",
                    default: "0.3",
                    range: "0-1",
                },
                ParameterInfo {
                    name: "distortion",
                    description: "Distortion amount",
                    default: "0.2",
                    range: "0-1",
                },
            ],
        },
        ModeInfo {
            mode: Mode::Chiptune,
            description: "Hard 16-step quantize, pulse shape, tremolo; 16-bit output",
            parameters: &[
                ParameterInfo {
                    name: "sample_rate",
                    description: "Target sample rate in Hz",
                    default: "11025",
                    range: "1+",
                },
                BIT_DEPTH_PARAM,
                ParameterInfo {
                    name: "arpeggio_effect",
                    description: "Tremolo/arpeggio depth",
                    default: "0.2",
                    range: "0-1",
                },
            ],
        },
    ]
}

/// Run the modes command.
pub fn run(args: ModesArgs) -> anyhow::Result<()> {
    for info in available_modes() {
        if args.names {
            println!("{}", info.mode);
            continue;
        }

        println!("{} - {}", info.mode, info.description);
        for param in info.parameters {
            println!(
                "  {:<20} {} (default: {}, range: {})",
                param.name, param.description, param.default, param.range
            );
        }
        println!();
    }
    Ok(())
}
