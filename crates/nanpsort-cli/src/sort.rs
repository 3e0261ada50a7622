use crate::error::InputError;
use anyhow::{Context as _, Result};
use nanpsort_config::{AppConfig, OutputFormat};
use nanpsort_core::{sort_records, Record, SortReport};
use serde::Serialize;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RecordDto<'a> {
    name: &'a str,
    number: &'a str,
    display: String,
}

impl<'a> From<&'a Record> for RecordDto<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            name: &record.name,
            number: record.number.as_str(),
            display: record.number.to_display_string(),
        }
    }
}

pub fn sort_file(ctx: &Context<'_>, path: &Path) -> Result<()> {
    let report = read_numbers(ctx, path)?;
    match ctx.config.output_format(ctx.json) {
        OutputFormat::Json => {
            let items: Vec<RecordDto<'_>> = report.records.iter().map(RecordDto::from).collect();
            print_json(&items)
        }
        OutputFormat::Text => print_lines(&report.records),
    }
}

/// Reads `path` and returns its valid records sorted by number.
pub fn read_numbers(ctx: &Context<'_>, path: &Path) -> Result<SortReport> {
    let data = read_input(path)?;
    let policy = ctx.config.malformed_lines;
    debug!(path = %path.display(), ?policy, "reading numbers");

    let report =
        sort_records(&data, policy).with_context(|| format!("sort {}", path.display()))?;

    for warning in &report.warnings {
        debug!("{warning}");
    }
    debug!(
        kept = report.records.len(),
        dropped = report.dropped,
        skipped = report.skipped,
        "numbers sorted"
    );
    Ok(report)
}

fn read_input(path: &Path) -> Result<String> {
    if path.is_dir() {
        return Err(InputError::Directory(path.to_path_buf()).into());
    }
    match fs::read_to_string(path) {
        Ok(data) => Ok(data),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(InputError::Missing(path.to_path_buf()).into())
        }
        Err(err) => Err(err).with_context(|| format!("read {}", path.display())),
    }
}

fn print_lines(records: &[Record]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for record in records {
        writeln!(stdout, "{}", record.to_output_line())?;
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
