use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cutplan::instructions::SheetInstructions;
use cutplan::io::ext_repr::ExtCutRequest;
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_request(path: &Path) -> Result<ExtCutRequest> {
    let file = File::open(path)
        .with_context(|| format!("could not open request file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse request file: {}", path.display()))
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("could not write output file: {}", path.display()))?;
    info!("solution written to {}", path.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg: {}", path.display()))?;
    info!("svg written to {}", path.display());
    Ok(())
}

/// Writes the operator instruction blocks as plain text, one section per
/// sheet in sheet order.
pub fn write_instructions(blocks: &[SheetInstructions], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create instructions file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for block in blocks {
        writeln!(writer, "=== SHEET {} ===", block.sheet_index + 1)?;
        writeln!(writer, "Setup:")?;
        for (i, step) in block.setup.iter().enumerate() {
            writeln!(writer, "  {}. {step}", i + 1)?;
        }
        writeln!(writer, "Cut list:")?;
        for line in &block.cut_list {
            writeln!(writer, "  - {line}")?;
        }
        writeln!(writer, "Safety:")?;
        for note in &block.safety_notes {
            writeln!(writer, "  - {note}")?;
        }
        writeln!(writer, "QC checkpoints:")?;
        for check in &block.qc_checkpoints {
            writeln!(writer, "  - {check}")?;
        }
        writeln!(writer)?;
    }
    info!("instructions written to {}", path.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!("[{}] [{:0>2}:{:0>2}:{:0>2}]", record.level(), hours, min, sec);

            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!(
        "time: {}",
        humantime::format_rfc3339_seconds(std::time::SystemTime::now())
    );
    Ok(())
}
