use cardgallery::cli::args::Args;
// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("cardgallery={}", filter)
                    .parse::<tracing_subscriber::filter::Directive>()
                    .context("Invalid log directive")?),
        )
        .init();

    cardgallery::run(args)
}
