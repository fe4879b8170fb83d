//! Command-line builder for the primary download tool.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use vidgrab_core::ToolInvocation;

/// Builder for a primary-tool invocation.
///
/// Flags are emitted in the order they were added; the URL, when set, is
/// always the final positional argument.
///
/// # Example
///
/// ```rust,ignore
/// let invocation = DownloadCommandBuilder::new("bin/yt-dlp.exe")
///     .arg_with_value("--ffmpeg-location", "bin/ffmpeg.exe")
///     .url("https://example.com/video")
///     .build();
/// ```
pub struct DownloadCommandBuilder {
    binary_path: PathBuf,
    additional_args: Vec<(String, OsString)>,
    url: Option<String>,
}

impl DownloadCommandBuilder {
    pub fn new(binary_path: impl Into<PathBuf>) -> Self {
        Self {
            binary_path: binary_path.into(),
            additional_args: Vec::new(),
            url: None,
        }
    }

    /// Add a flag followed by its value.
    pub fn arg_with_value(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.additional_args.push((key.into(), value.into()));
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn build(self) -> ToolInvocation {
        let mut args = Vec::with_capacity(self.additional_args.len() * 2 + 1);
        for (key, value) in self.additional_args {
            args.push(OsString::from(key));
            args.push(value);
        }
        if let Some(url) = self.url {
            args.push(OsString::from(url));
        }

        ToolInvocation {
            program: self.binary_path,
            args,
        }
    }
}

/// `<runtime_id>:<runtime_path>`, as accepted by the runtime selection flag.
pub fn runtime_arg(runtime_id: &str, runtime_path: &Path) -> OsString {
    let mut arg = OsString::from(runtime_id);
    arg.push(":");
    arg.push(runtime_path.as_os_str());
    arg
}
