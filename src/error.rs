use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Errors raised by probe selection (resolver, probe set, slider selector).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbeError {
    #[error("table has no rows")]
    EmptyTable,

    #[error("row index {index} is out of range for a table with {row_count} rows")]
    OutOfRange { index: usize, row_count: usize },

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("column '{0}' has no numeric values")]
    NonNumericColumn(String),
}

/// Errors raised while assembling a [`Table`](crate::data::model::Table).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("row {row} has {found} values but the table has {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column '{0}' appears more than once")]
    DuplicateColumn(String),
}

/// Errors raised while writing probed rows to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("writing CSV to '{}'", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("writing JSON to '{}'", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
