//! Error types for measurement loading and detection setup.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::columns::ColumnRole;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("column '{}' not found in {table} table", .role.keyword())]
    MissingColumn { role: ColumnRole, table: String },

    #[error("unknown band preset: {0}")]
    UnknownBand(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {label}: {source}")]
    Csv {
        label: String,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, DetectError>;
