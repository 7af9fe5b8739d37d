// src/presentation.rs
use crate::options::OutputFormat;
use linecount_engine::Report;
use linecount_engine::report::ExtensionRow;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Top-level JSON output structure.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub version: &'static str,
    pub source_directory: PathBuf,
    pub roots: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub rows: Vec<ExtensionRow>,
    pub summary: JsonSummary,
    pub warnings: usize,
}

#[derive(Debug, Serialize)]
pub struct JsonSummary {
    pub files: usize,
    pub lines: usize,
}

impl From<&Report> for JsonOutput {
    fn from(report: &Report) -> Self {
        Self {
            version: crate::VERSION,
            source_directory: report.source_directory.clone(),
            roots: report.roots.clone(),
            extensions: report.extensions.clone(),
            rows: report.rows(),
            summary: JsonSummary {
                files: report.tally.total_files(),
                lines: report.tally.total_lines(),
            },
            warnings: report.warnings,
        }
    }
}

/// Write the report in `format`. The `log` format has already been written
/// to the logging sink and produces nothing here.
///
/// # Errors
/// Propagates write and serialization failures.
pub fn write_report<W: Write>(
    report: &Report,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Log => Ok(()),
        OutputFormat::Table => write_table(report, out),
        OutputFormat::Json => write_json(report, out),
    }
}

fn write_table<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "    FILES           LINES      EXTENSION")?;
    writeln!(out, "----------------------------------------------")?;
    for row in report.rows() {
        writeln!(out, "{:>9}{:>16}      {}", row.files, row.lines, row.extension)?;
    }
    writeln!(out, "---")?;
    writeln!(
        out,
        "{:>9}{:>16}      TOTAL",
        report.tally.total_files(),
        report.tally.total_lines()
    )?;
    if report.warnings > 0 {
        writeln!(out)?;
        writeln!(out, "[linecount] {} warning(s), see log", report.warnings)?;
    }
    Ok(())
}

fn write_json<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonOutput::from(report))?;
    writeln!(out)
}
