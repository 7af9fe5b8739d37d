// crates/engine/src/config.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension used when none is configured: the host project's source language.
pub const DEFAULT_EXTENSION: &str = "java";

#[must_use]
pub fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

/// How a file name is tested against a configured extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Plain suffix test: `Xjava` matches `java`.
    #[default]
    Suffix,
    /// The extension must follow a `.` in the file name.
    Dotted,
}

/// A resource entry handed over by the host pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resource {
    pub directory: PathBuf,
}

impl From<PathBuf> for Resource {
    fn from(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl From<&str> for Resource {
    fn from(directory: &str) -> Self {
        Self {
            directory: PathBuf::from(directory),
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    pub source_directory: PathBuf,
    #[builder(default)]
    pub resources: Vec<Resource>,
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,
    /// Traverse the source directory in addition to the resources.
    #[builder(default = "true")]
    pub count_source: bool,
    #[builder(default)]
    pub match_mode: MatchMode,
    #[builder(default = "true")]
    pub follow_links: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(extensions) = &self.extensions {
            if extensions.is_empty() {
                return Err("at least one extension must be configured".to_string());
            }
            if extensions.iter().any(String::is_empty) {
                return Err("extensions must not be empty strings".to_string());
            }
        }
        Ok(())
    }
}
