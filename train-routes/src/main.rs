use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use train_routes::cli::{self, Args};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the answer
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match cli::run(args, &mut input, &mut output) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "route query failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
