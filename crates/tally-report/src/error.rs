use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to echo report to console: {0}")]
    Console(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
