mod cli;
mod config;
mod convert;
mod export_cmd;
mod logging;
mod tides_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => export_cmd::run(args),
        Command::Tides(args) => tides_cmd::run(args),
    }
}
