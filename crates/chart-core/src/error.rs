// File: crates/chart-core/src/error.rs
// Summary: Error type shared by normalization, geometry and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The series has no points; callers render the empty-state placeholder.
    #[error("series is empty")]
    Empty,

    /// No record carried any recognized label or value field.
    #[error("invalid data format: {0}")]
    InvalidData(String),

    #[error("failed to read {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
