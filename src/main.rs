//! Reads one JSON request from stdin and writes one JSON response to stdout.
//!
//! Logs go to stderr; set `RUST_LOG` to adjust verbosity (default `warn`).

use std::io::{self, Read, Write};
use std::process::ExitCode;

use pdf_toolkit::{Processor, Response, Result, ToolkitConfig};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let processor = Processor::new(ToolkitConfig::default())?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let output = processor.process_json(&input, &mut rand::thread_rng());

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "request could not be processed");
            println!("{}", Response::failure(e.to_string()).to_json());
            ExitCode::FAILURE
        }
    }
}
