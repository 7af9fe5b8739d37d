// crates/engine/src/classify.rs
use std::path::Path;

use crate::config::MatchMode;

/// Attributes file names to the first configured extension they end with.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    extensions: &'a [String],
    mode: MatchMode,
}

impl<'a> Classifier<'a> {
    #[must_use]
    pub const fn new(extensions: &'a [String], mode: MatchMode) -> Self {
        Self { extensions, mode }
    }

    /// First extension whose suffix test passes for `file_name`.
    #[must_use]
    pub fn classify(&self, file_name: &str) -> Option<&'a str> {
        self.extensions
            .iter()
            .find(|ext| matches(file_name, ext, self.mode))
            .map(String::as_str)
    }

    /// Classify by the final path component. Paths without one never match.
    #[must_use]
    pub fn classify_path(&self, path: &Path) -> Option<&'a str> {
        let name = path.file_name()?.to_string_lossy();
        self.classify(&name)
    }
}

fn matches(file_name: &str, ext: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Suffix => file_name.ends_with(ext),
        MatchMode::Dotted if ext.starts_with('.') => file_name.ends_with(ext),
        MatchMode::Dotted => file_name
            .strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.')),
    }
}
