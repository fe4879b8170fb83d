//! Tool manifest: the fixed set of external binaries vidgrab depends on.
//!
//! A manifest is an ordered list of tools. Each tool has a logical name,
//! which is also its file name inside the tools directory, a remote source
//! URL, and a role that tells the execution supervisor where its path goes
//! on the command line.
//!
//! Iteration order is declaration order. The provisioner relies on this to
//! fetch missing tools deterministically, one at a time.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Base URL of the mirror hosting the default tool binaries.
pub const DEFAULT_MIRROR_BASE: &str = "https://github.com/Pinkdicated/Mirror/raw/refs/heads/main";

/// What a tool is used for when building the download command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolRole {
    /// The downloader itself; its path is the program being executed.
    Primary,
    /// Media post-processor passed via the auxiliary location flag.
    Auxiliary,
    /// Script runtime passed via the runtime selection flag.
    Runtime,
}

impl ToolRole {
    const ALL: [Self; 3] = [Self::Primary, Self::Auxiliary, Self::Runtime];
}

impl std::fmt::Display for ToolRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Auxiliary => write!(f, "auxiliary"),
            Self::Runtime => write!(f, "runtime"),
        }
    }
}

/// A single required tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Logical name, used verbatim as the local file name.
    pub name: String,
    /// Remote location fetched with a plain HTTP(S) GET.
    pub source_url: String,
    /// Where this tool's path goes on the command line.
    pub role: ToolRole,
}

impl ToolEntry {
    pub fn new(name: impl Into<String>, source_url: impl Into<String>, role: ToolRole) -> Self {
        Self {
            name: name.into(),
            source_url: source_url.into(),
            role,
        }
    }

    /// Local target path of this tool inside `bin_dir`.
    pub fn target_path(&self, bin_dir: &Path) -> PathBuf {
        bin_dir.join(&self.name)
    }
}

/// Errors raised while building or loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Tool name cannot be empty")]
    EmptyName,

    /// Names double as file names, so they must stay inside the tools directory.
    #[error("Tool name '{0}' must be a plain file name")]
    InvalidName(String),

    #[error("Tool '{0}' is listed more than once")]
    DuplicateTool(String),

    #[error("Tool '{name}' has an invalid source URL '{url}': {reason}")]
    InvalidSource {
        name: String,
        url: String,
        reason: String,
    },

    #[error("Manifest must contain exactly one {role} tool, found {count}")]
    RoleCount { role: ToolRole, count: usize },

    #[error("Failed to read manifest {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validated, immutable list of required tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolManifest {
    tools: Vec<ToolEntry>,
}

impl ToolManifest {
    /// Build a manifest, checking names, sources and role coverage.
    pub fn new(tools: Vec<ToolEntry>) -> Result<Self, ManifestError> {
        let mut seen = HashSet::new();
        for tool in &tools {
            validate_name(&tool.name)?;
            if !seen.insert(tool.name.as_str()) {
                return Err(ManifestError::DuplicateTool(tool.name.clone()));
            }
            validate_source(tool)?;
        }

        for role in ToolRole::ALL {
            let count = tools.iter().filter(|t| t.role == role).count();
            if count != 1 {
                return Err(ManifestError::RoleCount { role, count });
            }
        }

        Ok(Self { tools })
    }

    /// ffmpeg, node and yt-dlp from the default mirror, in download order.
    pub fn default_tools() -> Self {
        let mirror = |name: &str| format!("{DEFAULT_MIRROR_BASE}/{name}");
        Self {
            tools: vec![
                ToolEntry::new("ffmpeg.exe", mirror("ffmpeg.exe"), ToolRole::Auxiliary),
                ToolEntry::new("node.exe", mirror("node.exe"), ToolRole::Runtime),
                ToolEntry::new("yt-dlp.exe", mirror("yt-dlp.exe"), ToolRole::Primary),
            ],
        }
    }

    /// Parse a manifest from a JSON array of tool entries.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let tools: Vec<ToolEntry> = serde_json::from_str(json)?;
        Self::new(tools)
    }

    /// Load a manifest from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    /// Tools in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolEntry> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// The tool holding `role`. Construction guarantees exactly one exists.
    fn by_role(&self, role: ToolRole) -> &ToolEntry {
        self.tools
            .iter()
            .find(|t| t.role == role)
            .unwrap_or_else(|| unreachable!("manifest validated to contain a {role} tool"))
    }

    /// Resolve every role to its local path under `bin_dir`.
    pub fn resolve(&self, bin_dir: &Path) -> ResolvedTools {
        ResolvedTools {
            primary: self.by_role(ToolRole::Primary).target_path(bin_dir),
            auxiliary: self.by_role(ToolRole::Auxiliary).target_path(bin_dir),
            runtime: self.by_role(ToolRole::Runtime).target_path(bin_dir),
        }
    }
}

impl<'a> IntoIterator for &'a ToolManifest {
    type Item = &'a ToolEntry;
    type IntoIter = std::slice::Iter<'a, ToolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}

/// Local paths of the provisioned tools, keyed by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTools {
    pub primary: PathBuf,
    pub auxiliary: PathBuf,
    pub runtime: PathBuf,
}

fn validate_name(name: &str) -> Result<(), ManifestError> {
    if name.trim().is_empty() {
        return Err(ManifestError::EmptyName);
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(ManifestError::InvalidName(name.to_string())),
    }
}

fn validate_source(tool: &ToolEntry) -> Result<(), ManifestError> {
    let invalid = |reason: String| ManifestError::InvalidSource {
        name: tool.name.clone(),
        url: tool.source_url.clone(),
        reason,
    };

    let url = Url::parse(&tool.source_url).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
