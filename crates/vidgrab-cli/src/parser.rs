//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Download videos with a locally provisioned yt-dlp.
///
/// On first use the required tools are downloaded into the tools
/// directory; later runs reuse them.
#[derive(Parser)]
#[command(name = "vidgrab")]
#[command(about = "Fetch videos with automatically provisioned tools")]
#[command(version)]
pub struct Cli {
    /// Directory the tools are downloaded into [default: ./bin]
    #[arg(long = "bin-dir", global = true)]
    pub bin_dir: Option<String>,

    /// JSON manifest replacing the built-in tool list [env: VIDGRAB_MANIFEST]
    #[arg(long = "manifest", global = true)]
    pub manifest: Option<PathBuf>,

    /// Give up on a single tool download after this many seconds
    #[arg(
        long = "fetch-timeout",
        global = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub fetch_timeout: Option<u64>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
