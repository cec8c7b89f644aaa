use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::ProbeConfig;
use crate::io::ext_repr::ExtQueryBatch;

pub mod cli;
pub mod ext_repr;
pub mod report;
pub mod svg_export;
pub mod svg_util;

pub fn read_query_batch(path: &Path) -> Result<ExtQueryBatch> {
    let file = File::open(path).with_context(|| format!("could not open query file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("could not parse query file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<ProbeConfig> {
    let file = File::open(path).with_context(|| format!("could not open config file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not create report file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), json)
        .with_context(|| format!("could not write report file: {}", path.display()))?;

    info!("report written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = (duration.as_secs() % 60) as f64 + duration.subsec_nanos() as f64 / 1e9;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>6.3}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<31}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("logger initialized, level: {level_filter}");
    Ok(())
}
