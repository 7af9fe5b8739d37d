// crates/engine/src/stats.rs
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Per-extension file and line totals accumulated over a run.
///
/// Keys appear only once a file has been attributed to them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    files: HashMap<String, usize>,
    lines: HashMap<String, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute one file with `lines` physical lines to `ext`.
    pub fn record(&mut self, ext: &str, lines: usize) {
        *self.files.entry_ref(ext).or_insert(0) += 1;
        *self.lines.entry_ref(ext).or_insert(0) += lines;
    }

    /// Fold another partial tally into this one by summation.
    pub fn merge(&mut self, other: Self) {
        for (ext, count) in other.files {
            *self.files.entry(ext).or_insert(0) += count;
        }
        for (ext, count) in other.lines {
            *self.lines.entry(ext).or_insert(0) += count;
        }
    }

    #[must_use]
    pub fn files(&self, ext: &str) -> Option<usize> {
        self.files.get(ext).copied()
    }

    #[must_use]
    pub fn lines(&self, ext: &str) -> Option<usize> {
        self.lines.get(ext).copied()
    }

    #[must_use]
    pub const fn file_counts(&self) -> &HashMap<String, usize> {
        &self.files
    }

    #[must_use]
    pub const fn line_counts(&self) -> &HashMap<String, usize> {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn total_files(&self) -> usize {
        self.files.values().sum()
    }

    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.lines.values().sum()
    }
}
