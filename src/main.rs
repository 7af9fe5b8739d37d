use anyhow::Context;
use clap::Parser;
use linecount::args::Args;
use linecount::{config, logging, presentation};
use linecount_engine::TracingSink;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init_tracing(args.verbose) {
        eprintln!("Logging Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = config::build_config(args).context("cannot start line count")?;
    let report = linecount_engine::run(&config, &TracingSink);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    presentation::write_report(&report, args.format, &mut out).context("cannot write report")?;
    out.flush().context("cannot write report")?;
    Ok(())
}
