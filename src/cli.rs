use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Lunara dual-moon almanac generator.
#[derive(Parser)]
#[command(
    name = "lunara",
    version,
    about = "Dual-moon almanac and tide forecast generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a year and write its export artifacts.
    Generate(GenerateArgs),
    /// Print the tide forecast and shipping windows for one month.
    Tides(TidesArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Year to generate (1..=9999).
    #[arg(short, long)]
    pub year: i32,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lunara.toml")]
    pub config: PathBuf,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Export format: json, csv, or both.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `tides` subcommand.
#[derive(clap::Args)]
pub struct TidesArgs {
    /// Year to generate (1..=9999).
    #[arg(short, long)]
    pub year: i32,

    /// Month to forecast (1..=13).
    #[arg(short, long)]
    pub month: u8,

    /// Harbor id whose tide offset to apply (see [[harbors]] in config).
    #[arg(long)]
    pub harbor: Option<String>,

    /// Maximum number of severe-tide days to print.
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "lunara.toml")]
    pub config: PathBuf,
}
