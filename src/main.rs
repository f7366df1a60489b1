//! CLI entry point for the sprite-sheet generator

use clap::Parser;
use sheetsmith::io::cli::{Cli, Generator};
use sheetsmith::io::logging::init_logging;
use tracing::error;

fn main() -> sheetsmith::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let result = Generator::new(cli).and_then(|generator| generator.process());
    if let Err(ref err) = result {
        error!("{err}");
    }
    result.map(|_| ())
}
