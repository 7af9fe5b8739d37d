// crates/engine/src/report.rs
//! Report model and the logging sink it is written to.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use crate::stats::Tally;

/// Destination for report lines.
pub trait LogSink: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards report lines to `tracing` under the `linecount` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "linecount", "{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "linecount", "{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
}

/// Keeps every line in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((level, message.to_string()));
        }
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }
}

/// One row of the per-extension summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRow {
    pub extension: String,
    pub files: usize,
    pub lines: usize,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub source_directory: PathBuf,
    pub roots: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub tally: Tally,
    pub warnings: usize,
}

impl Report {
    /// Rows for extensions that matched at least one file, in configured order.
    #[must_use]
    pub fn rows(&self) -> Vec<ExtensionRow> {
        let mut seen = hashbrown::HashSet::new();
        self.extensions
            .iter()
            .filter(|ext| seen.insert(ext.as_str()))
            .filter_map(|ext| {
                Some(ExtensionRow {
                    extension: ext.clone(),
                    files: self.tally.files(ext)?,
                    lines: self.tally.lines(ext).unwrap_or(0),
                })
            })
            .collect()
    }
}

pub const FILE_COUNT_HEADER: &str =
    "------------------------------ file counts ------------------------------";
pub const LINE_COUNT_HEADER: &str =
    "------------------------------ line counts ------------------------------";

/// Write the extension list, then file counts, then line counts.
pub fn emit_summary(report: &Report, sink: &dyn LogSink) {
    sink.info(&format!("extensions: [{}]", report.extensions.join(", ")));

    let rows = report.rows();
    sink.info(FILE_COUNT_HEADER);
    for row in &rows {
        sink.info(&format!("{}: {}", row.extension, row.files));
    }
    sink.info(LINE_COUNT_HEADER);
    for row in &rows {
        sink.info(&format!("{}: {}", row.extension, row.lines));
    }
}
