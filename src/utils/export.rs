//! File export in TXT, CSV and JSON

use crate::consts::dashboard_consts::EXPORT_DATE_PATTERN;
use crate::utils::format::format_date;
use chrono::{Datelike, Timelike};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// `<prefix>_<YYYY-MM-DD_HH-mm-ss>.<ext>`
pub fn timestamped_filename<D: Datelike + Timelike>(
    prefix: &str,
    format: ExportFormat,
    at: &D,
) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        format_date(at, EXPORT_DATE_PATTERN),
        format.extension()
    )
}

/// Writes one line per entry.
/// Writes one line per entry. Nothing is written for an empty list.
pub fn export_txt(lines: &[String], dir: &Path, filename: &str) -> Result<PathBuf, ExportError> {
    if lines.is_empty() {
        return Err(ExportError::Empty);
    }
    write_file(dir, filename, &lines.join("\n"))
}

pub fn export_csv<T: Serialize>(
    rows: &[T],
    dir: &Path,
    filename: &str,
) -> Result<PathBuf, ExportError> {
    let csv = to_csv(rows)?;
    write_file(dir, filename, &csv)
}

pub fn export_json<T: Serialize>(
    rows: &[T],
    dir: &Path,
    filename: &str,
) -> Result<PathBuf, ExportError> {
    let json = serde_json::to_string_pretty(rows)?;
    write_file(dir, filename, &json)
}

/// Renders records as CSV, taking the header row from the first record's fields.
///
/// Returns an empty string for no records.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, ExportError> {
    let values = rows
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    let Some(Value::Object(first)) = values.first() else {
        return Ok(String::new());
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut lines = Vec::with_capacity(values.len() + 1);
    lines.push(headers.join(","));
    for value in &values {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| csv_cell(value.get(h).unwrap_or(&Value::Null)))
            .collect();
        lines.push(cells.join(","));
    }
    Ok(lines.join("\n"))
}

fn csv_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) if s.contains(',') || s.contains('"') || s.contains('\n') => {
            format!("\"{}\"", s.replace('"', "\"\""))
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn write_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, content)?;
    Ok(path)
}
