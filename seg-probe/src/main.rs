use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use seg_probe::config::ProbeConfig;
use seg_probe::io;
use seg_probe::io::cli::Cli;
use seg_probe::io::svg_export::batch_to_svg;
use seg_probe::probe;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ProbeConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed ProbeConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let batch = io::read_query_batch(&args.input_file)?;
    info!("[MAIN] loaded {} queries from {:?}", batch.queries.len(), args.input_file);

    let report = probe::run(&batch, config);

    let report_path = args.output_folder.join(format!("report_{input_file_stem}.json"));
    io::write_json(&report, &report_path)?;

    if args.svg {
        let svg_path = args.output_folder.join(format!("report_{input_file_stem}.svg"));
        let document = batch_to_svg(&batch, &report.results, config.svg_draw_options);
        io::write_svg(&document, &svg_path)?;
    }

    Ok(())
}
