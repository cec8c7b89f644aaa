use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Evaluates intersections, distances and clearance violations between pairs of segments
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON batch of segment pairs to evaluate
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder receiving `report_<input stem>.json` (and `.svg`), created if missing
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    /// Probe configuration (default clearance, endpoint handling, threading, drawing options)
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Verbosity of the log written to stdout
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Also draw the queries to an SVG file
    #[arg(long)]
    pub svg: bool,
}
