// crates/engine/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 (byte offset {offset})")]
    InvalidEncoding { path: PathBuf, offset: u64 },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<crate::config::ConfigBuilderError> for EngineError {
    fn from(err: crate::config::ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
