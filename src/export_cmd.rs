//! Generate command: build a year and write its export artifacts.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use lunara_calendar::generate;
use lunara_export::{to_csv, to_json};

use crate::cli::GenerateArgs;
use crate::config;
use crate::convert;

/// Run the generate-and-export pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate", year = args.year).entered();

    let cfg = config::load(&args.config)?;
    let output_dir = args.output_dir.unwrap_or(cfg.export.output_dir);
    let format = convert::parse_format(args.format.as_deref().unwrap_or(&cfg.export.format))?;

    let almanac = generate(args.year)
        .with_context(|| format!("failed to generate year {}", args.year))?;
    info!(
        year = almanac.year(),
        extra_month_season = %almanac.extra_month_season(),
        n_days = almanac.days().len(),
        "almanac generated"
    );

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    if format.writes_json() {
        let path = output_dir.join(format!("world-year-{}.json", almanac.year()));
        let json = to_json(almanac.year(), almanac.days())?;
        fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote JSON export");
    }

    if format.writes_csv() {
        let path = output_dir.join(format!("world-year-{}.csv", almanac.year()));
        let csv = to_csv(almanac.days());
        fs::write(&path, csv)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote CSV export");
    }

    Ok(())
}
