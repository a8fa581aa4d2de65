//! CLI argument definitions using clap

use clap::Parser;

/// Print a fixed window of the Electron renderer bundle with 1-based line numbers
#[derive(Parser, Debug)]
#[command(name = "linedump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (-d: info, -dd: debug, -ddd: trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,
}
