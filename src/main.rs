//! CLI entry point for growing and surveying a random tile board

use carcassonne::io::cli::{Cli, run};
use clap::Parser;

// Allow print for the summary, the program's only output
#[allow(clippy::print_stdout)]
fn main() -> carcassonne::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let summary = run(&cli)?;
    print!("{summary}");
    Ok(())
}
