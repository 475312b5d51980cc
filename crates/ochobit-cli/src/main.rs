//! Ochobit CLI - degrade recordings into 8-bit/chiptune-style WAVs.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ochobit")]
#[command(author, version, about = "Retro-ify recordings into 8-bit/chiptune WAVs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a WAV file through a degradation preset
    Convert(commands::convert::ConvertArgs),

    /// Display WAV file metadata
    Info(commands::info::InfoArgs),

    /// List conversion modes and their parameters
    Modes(commands::modes::ModesArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Modes(args) => commands::modes::run(args),
    }
}
