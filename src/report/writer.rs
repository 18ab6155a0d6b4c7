use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::constants::CSV_HEADER;

use super::RankedModel;
use super::error::ReportError;

/// Which model name goes in the CSV `Model Name` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameColumn {
    /// Hub identifier, e.g. `roberta-base`.
    #[default]
    Identifier,
    /// Display name, e.g. `RoBERTa`.
    DisplayName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ReportError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Writes the `Model Name,Rank` table, one row per model in the given order.
pub fn write_csv<W: Write>(
    mut writer: W,
    rows: &[RankedModel],
    names: NameColumn,
) -> Result<(), ReportError> {
    writeln!(writer, "{},{}", CSV_HEADER[0], CSV_HEADER[1])?;
    for row in rows {
        let name = match names {
            NameColumn::Identifier => &row.model_id,
            NameColumn::DisplayName => &row.display_name,
        };
        writeln!(writer, "{},{}", csv_field(name), row.rank)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, rows: &[RankedModel]) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes `rows` to `path`, creating parent directories as needed.
pub fn save_report(
    path: &Path,
    rows: &[RankedModel],
    format: ReportFormat,
    names: NameColumn,
) -> Result<(), ReportError> {
    let wrap = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    let writer = BufWriter::new(File::create(path).map_err(wrap)?);

    match format {
        ReportFormat::Csv => write_csv(writer, rows, names)?,
        ReportFormat::Json => write_json(writer, rows)?,
    }

    info!(path = %path.display(), %format, rows = rows.len(), "Ranking saved");
    Ok(())
}

/// RFC 4180 quoting for fields that contain separators, quotes or line breaks.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
