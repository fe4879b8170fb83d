//! Available subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Download any missing tools and exit
    Setup,

    /// Download one video (tools are provisioned first if needed)
    Download {
        /// Video page URL passed to yt-dlp
        url: String,
    },

    /// Read URLs from stdin, one per line, and download each in turn
    Interactive,

    /// Show the tools directory and which tools are present
    Paths,
}
