use anyhow::Result;
use clap::Parser;
use dirtree::cli::Cli;
use dirtree::core::telemetry::logging::init_logging;
use dirtree::services::tree::render_tree;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_tree(&mut out, &cli.path, cli.include_files())?;
    out.flush()?;
    Ok(())
}
