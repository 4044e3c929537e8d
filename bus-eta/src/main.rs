use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bus_eta::cli::{Cli, run};

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&cli, &mut stdout, chrono::Utc::now()).await {
        eprintln!("Failed to write output: {e}");
    }
}
