use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use triad_viewer::cli::Cli;
use triad_viewer::RunError;

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("triad_viewer=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.execute(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Analyzer(failure)) => {
            eprintln!("Error: {}", failure.diagnostic());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
