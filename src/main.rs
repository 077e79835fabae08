//! CLI entry point for puzzle tile edge analysis

use clap::Parser;
use jigtile::io::cli::{Cli, FileProcessor};

fn main() -> jigtile::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
