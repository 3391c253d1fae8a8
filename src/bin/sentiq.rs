//! sentiq: sentiment classification for the command line.
//!
//! This is a thin shell that delegates to library functions.
//! All logic lives in `sentiq::cli` for testability.

use clap::Parser;
use sentiq::cli::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    // Logs go to stderr; stdout carries only the verdict.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
