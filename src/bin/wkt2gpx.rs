use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::Context;
use clap::Parser;
use tracing::Level;
use wkt_gpx::algorithm::reproject::transformer_for;
use wkt_gpx::cli::Wkt2GpxArgs;
use wkt_gpx::io::track::process_lines;

fn main() -> anyhow::Result<()> {
    let args = Wkt2GpxArgs::parse();

    // Initialize logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let transformer = transformer_for(&args.source_crs, &args.target_crs)?;

    let input = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let output = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    tracing::info!(input = %args.input.display(), output = %args.output.display(), "converting records");
    let summary = process_lines(
        BufReader::new(input),
        BufWriter::new(output),
        transformer.as_ref(),
    )?;

    if summary.failed > 0 {
        tracing::warn!(failed = summary.failed, "some records could not be converted");
    }

    Ok(())
}
