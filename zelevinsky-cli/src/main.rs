//! zelevinsky - standard forms of multisegments
//!
//! Command-line interface for the standard-form search, the union/intersection closure and the
//! Kazhdan-Lusztig expansion of a multisegment.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Standard forms (λ, w, μ) of Zelevinsky multisegments.
///
/// Multisegments are read leniently from text: every `[a,b]`, `[a, b]` or `[a b]` is a segment.
#[derive(Parser)]
#[command(name = "zelevinsky")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (TOML)
    #[arg(short, long, global = true, env = "ZELEVINSKY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every standard-form record of a multisegment
    StandardForm {
        /// Multisegment, e.g. "[1,2] [2,2] [3,3]"
        multisegment: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Reject segments whose start exceeds their end
        #[arg(long)]
        strict: bool,
    },

    /// List the union/intersection closure of a multisegment
    Closure {
        /// Multisegment, e.g. "[1,2] [2,3]"
        multisegment: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Expand I(m) over the closure with the external Kazhdan-Lusztig calculator
    Expand {
        /// Multisegment; prompted for on stdin when omitted
        multisegment: Option<String>,

        /// Path of the calculator, overriding the config file
        #[arg(long, env = "ZELEVINSKY_KL_PROGRAM")]
        kl_program: Option<PathBuf>,

        /// Reject segments whose start exceeds their end
        #[arg(long)]
        strict: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::StandardForm {
            multisegment,
            format,
            strict,
        } => commands::standard_form::run(&multisegment, format, strict),

        Commands::Closure {
            multisegment,
            format,
        } => commands::closure::run(&multisegment, format),

        Commands::Expand {
            multisegment,
            kl_program,
            strict,
        } => commands::expand::run(multisegment, cli.config, kl_program, strict),
    }
}
