//! mesim CLI: practice discriminants of quadratic equations in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mesim_core::ExerciseKind;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mesim", version, about = "Quadratic-equation discriminant trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work through a session of exercises, answering on stdin
    Practice {
        /// Number of exercises (default: from config, else 5)
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Do not record this session in the stats file
        #[arg(long)]
        no_save: bool,

        /// Write a JSON session report to this path
        #[arg(long)]
        export: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a batch of exercises
    Generate {
        /// Number of exercises (default: from config, else 5)
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,

        /// Only this kind of exercise: negative, zero, positive
        #[arg(long)]
        kind: Option<ExerciseKind>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Include Δ and the solutions in text output
        #[arg(long)]
        answers: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show accumulated statistics
    Stats {
        /// Reset the stats file to zero
        #[arg(long)]
        reset: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter mesim.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mesim=info".parse().expect("static log directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Practice {
            count,
            seed,
            no_save,
            export,
            config,
        } => commands::practice::execute(count, seed, no_save, export, config),
        Commands::Generate {
            count,
            seed,
            kind,
            format,
            answers,
            config,
        } => commands::generate::execute(count, seed, kind, format, answers, config),
        Commands::Stats { reset, config } => commands::stats::execute(reset, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
