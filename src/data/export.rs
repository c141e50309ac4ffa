use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};

use super::model::Table;
use crate::error::ExportError;

/// File name offered by the save dialog.
pub const DEFAULT_EXPORT_NAME: &str = "probed_data.csv";

/// Write a table to `path`, choosing JSON for `.json` and CSV otherwise.
/// Returns the number of data rows written.
pub fn export_to_path(table: &Table, path: &Path) -> Result<usize, ExportError> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        export_json(table, file, path)
    } else {
        export_csv(table, file, path)
    }
}

/// Write the table as CSV: header row, then one record per row.
pub fn export_csv<W: Write>(table: &Table, writer: W, path: &Path) -> Result<usize, ExportError> {
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: PathBuf::from(path),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.columns()).map_err(csv_err)?;
    for row in table.rows() {
        csv_writer
            .write_record(row.iter().map(|v| v.to_field()))
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: PathBuf::from(path),
        source: e,
    })?;
    Ok(table.len())
}

/// Write the table as a records-oriented JSON array, readable by the loader.
pub fn export_json<W: Write>(table: &Table, writer: W, path: &Path) -> Result<usize, ExportError> {
    let records: Vec<Map<String, JsonValue>> = table
        .rows()
        .iter()
        .map(|row| {
            table
                .columns()
                .iter()
                .zip(row)
                .map(|(col, v)| Ok((col.clone(), serde_json::to_value(v)?)))
                .collect::<Result<_, serde_json::Error>>()
        })
        .collect::<Result<_, _>>()
        .map_err(|e| ExportError::Json {
            path: PathBuf::from(path),
            source: e,
        })?;

    serde_json::to_writer_pretty(writer, &records).map_err(|e| ExportError::Json {
        path: PathBuf::from(path),
        source: e,
    })?;
    Ok(records.len())
}
