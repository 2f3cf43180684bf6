//! CLI argument definitions.

use clap::Parser;

/// envaudit - Check a scientific Python environment for expected libraries.
///
/// Prints a warning for every library that is missing or older than
/// expected. Always exits successfully.
#[derive(Debug, Parser)]
#[command(name = "envaudit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
