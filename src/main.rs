//! CLI entry point for the word search puzzle generator

use clap::Parser;
use wordseek::io::cli::{Cli, FileProcessor};
use wordseek::io::logging::init_logging;

fn main() -> wordseek::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
