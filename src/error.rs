// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] linecount_engine::EngineError),

    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest '{path}': {message}")]
    ManifestParse { path: PathBuf, message: String },

    #[error("Unsupported manifest format '{0}' (expected .yaml, .yml or .json)")]
    ManifestFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, AppError>;
