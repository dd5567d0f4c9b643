use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocFileError {
    #[error("file does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata: {path}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LocFileError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
