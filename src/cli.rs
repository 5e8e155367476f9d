//! Command line arguments for the `wkt2gpx` binary.

use std::path::PathBuf;

use clap::Parser;

/// Convert `id|activities|wkt` records into `activities|gpx` lines
#[derive(Debug, Parser)]
#[command(name = "wkt2gpx", author, version)]
pub struct Wkt2GpxArgs {
    /// Record file to read
    #[arg(default_value = "gps.txt")]
    pub input: PathBuf,

    /// File to write converted records to
    #[arg(short, long, default_value = "gps_out.txt")]
    pub output: PathBuf,

    /// Reference system of the input coordinates
    #[arg(long, default_value = "EPSG:3857")]
    pub source_crs: String,

    /// Reference system written to the GPX track
    #[arg(long, default_value = "EPSG:4326")]
    pub target_crs: String,

    /// Enable verbose logging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
