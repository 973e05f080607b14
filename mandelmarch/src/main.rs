//! # Mandelmarch
//!
//! Entry point for the `mandelmarch` binary.

use anyhow::Result;
use clap::Parser;
use mandelmarch::{app, cli::Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let summary = app::run(&cli)?;
    if let Some(saved) = summary.saved {
        println!("{}", saved.image.display());
    }
    Ok(())
}
