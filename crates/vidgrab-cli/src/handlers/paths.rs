//! Paths command handler.
//!
//! Displays the resolved tools directory and the state of every tool.
//! Useful when a download fails because a tool is in an unexpected place.

use vidgrab_core::{BIN_DIR_ENV, MANIFEST_ENV};

use crate::bootstrap::{CliConfig, CliContext};
use crate::presentation::tool_rows;

/// Print resolved paths in `key = value` form followed by one row per tool.
pub fn execute(config: &CliConfig, ctx: &CliContext) {
    println!("bin_dir = {}", ctx.bin_dir().display());
    match &config.settings.manifest_path {
        Some(path) => println!("manifest = {}", path.display()),
        None => println!("manifest = (built-in)"),
    }
    match config.settings.fetch_timeout_secs {
        Some(secs) => println!("fetch_timeout = {secs}s"),
        None => println!("fetch_timeout = (none)"),
    }
    println!();
    for row in tool_rows(ctx.manifest(), ctx.bin_dir()) {
        println!("{row}");
    }
    println!();
    println!("Override with --bin-dir/{BIN_DIR_ENV} and --manifest/{MANIFEST_ENV}.");
}
