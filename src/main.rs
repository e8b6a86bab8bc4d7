//! CLI entry point for the collage layout engine

use clap::Parser;
use mosaicist::io::cli::{Cli, LayoutProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> mosaicist::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut processor = LayoutProcessor::new(cli);
    processor.process().map(|_| ())
}
