// crates/engine/src/lib.rs
//! Per-extension file and line tallies over a set of source/resource roots.
//!
//! A run is a single linear pass: the configured roots are deduplicated,
//! walked one after another, every regular file is attributed to the first
//! configured extension it ends with, and its physical lines are added to
//! that extension's total. The summary is written to a [`LogSink`].
//!
//! Per-file and per-directory failures never abort a run; they are reported
//! as warnings and the affected file contributes zero lines.

pub mod classify;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod report;
pub mod roots;
pub mod stats;

use std::path::{Path, PathBuf};

pub use crate::classify::Classifier;
pub use crate::config::{Config, ConfigBuilder, MatchMode, Resource};
pub use crate::error::{EngineError, Result};
pub use crate::report::{LogSink, MemorySink, Report, TracingSink};
pub use crate::stats::Tally;

/// Walks the configured roots and reports the tally to a sink.
pub struct Counter<'a> {
    config: &'a Config,
    sink: &'a dyn LogSink,
}

impl<'a> Counter<'a> {
    #[must_use]
    pub fn new(config: &'a Config, sink: &'a dyn LogSink) -> Self {
        Self { config, sink }
    }

    /// Run the whole pipeline and return what was reported.
    #[must_use]
    pub fn run(&self) -> Report {
        let config = self.config;
        self.sink.info(&format!(
            "source directory: {}",
            absolute(&config.source_directory).display()
        ));

        let roots = roots::roots_for(config);
        let classifier = Classifier::new(&config.extensions, config.match_mode);

        let mut tally = Tally::new();
        let mut warnings = 0;
        for root in &roots {
            self.sink
                .info(&format!("root directory: {}", absolute(root).display()));
            let (partial, root_warnings) = self.count_root(root, &classifier);
            tally.merge(partial);
            warnings += root_warnings;
        }

        let report = Report {
            source_directory: config.source_directory.clone(),
            roots,
            extensions: config.extensions.clone(),
            tally,
            warnings,
        };
        report::emit_summary(&report, self.sink);
        report
    }

    fn count_root(&self, root: &Path, classifier: &Classifier<'_>) -> (Tally, usize) {
        let mut tally = Tally::new();
        let mut read_failures = 0;

        let walk_warnings =
            filesystem::walk_root(root, self.config.follow_links, self.sink, |path| {
                let Some(ext) = classifier.classify_path(path) else {
                    return;
                };
                let lines = match processor::count_lines(path) {
                    Ok(lines) => lines,
                    Err(err) => {
                        self.sink.warn(&err.to_string());
                        read_failures += 1;
                        0
                    }
                };
                tracing::debug!(path = %path.display(), ext, lines, "counted");
                tally.record(ext, lines);
            });

        (tally, walk_warnings + read_failures)
    }
}

/// Convenience wrapper around [`Counter::run`].
#[must_use]
pub fn run(config: &Config, sink: &dyn LogSink) -> Report {
    Counter::new(config, sink).run()
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
