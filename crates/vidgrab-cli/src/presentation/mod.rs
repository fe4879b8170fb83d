//! Terminal rendering of coordinator state.
//!
//! Keep this module format-only; state transitions live in the coordinator.

mod terminal;

pub use terminal::TerminalSurface;

use std::path::Path;

use vidgrab_core::{ToolEntry, ToolManifest};

/// One line per tool: `name  role  present|missing  source`.
pub fn tool_rows(manifest: &ToolManifest, bin_dir: &Path) -> Vec<String> {
    let width = manifest.iter().map(|t| t.name.len()).max().unwrap_or(0);
    manifest
        .iter()
        .map(|tool| format_tool_row(tool, bin_dir, width))
        .collect()
}

fn format_tool_row(tool: &ToolEntry, bin_dir: &Path, width: usize) -> String {
    let state = if tool.target_path(bin_dir).exists() {
        "present"
    } else {
        "missing"
    };
    format!(
        "{:<width$}  {:<9}  {:<7}  {}",
        tool.name, tool.role, state, tool.source_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_mark_present_and_missing_tools() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("node.exe"), b"").unwrap();

        let rows = tool_rows(&ToolManifest::default_tools(), dir.path());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("ffmpeg.exe"));
        assert!(rows[0].contains("missing"));
        assert!(rows[1].contains("present"));
        assert!(rows[2].contains("primary"));
    }
}
