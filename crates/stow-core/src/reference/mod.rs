//! Reference classification.
//!
//! Decides how a free-form reference to a registry item is fetched:
//! - Remote URLs (`https://ui.example.com/r/button.json`) go to the network
//! - Local item files (`./button.json`, `~/shared/button.json`) are read from disk
//! - Anything else is a registry item name resolved through the registry index
//!
//! A URL is never a local file, even when it ends in the item extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

/// Extension of serialized registry item files.
pub const LOCAL_ITEM_EXTENSION: &str = ".json";

/// URL schemes fetched over the network.
pub const NETWORK_SCHEMES: &[&str] = &["http", "https"];

/// How a reference should be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    /// Absolute http(s) URL
    Url,
    /// Registry item file on the local filesystem
    LocalFile,
    /// Bare registry item name
    ItemName,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::LocalFile => "local-file",
            Self::ItemName => "item-name",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a reference is an absolute URL with a network scheme.
///
/// Malformed input is simply not a URL.
pub fn is_url(reference: &str) -> bool {
    match Url::parse(reference) {
        Ok(url) => {
            NETWORK_SCHEMES.contains(&url.scheme())
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Check whether a reference points at a local registry item file.
pub fn is_local_file(reference: &str) -> bool {
    if reference.is_empty() || is_url(reference) {
        return false;
    }

    // Directories never name an item file.
    if reference.ends_with(['/', '\\']) {
        return false;
    }

    let file_name = reference.rsplit(['/', '\\']).next().unwrap_or(reference);
    file_name.ends_with(LOCAL_ITEM_EXTENSION)
}

/// Classify a reference into the fetch strategy it requires.
pub fn classify_reference(reference: &str) -> ReferenceKind {
    let kind = if is_url(reference) {
        ReferenceKind::Url
    } else if is_local_file(reference) {
        ReferenceKind::LocalFile
    } else {
        ReferenceKind::ItemName
    };
    trace!(reference, %kind, "Classified reference");
    kind
}

/// Resolve a local reference to a filesystem path.
///
/// - `file:///path` decodes to the path it names
/// - `~/path` expands against the home directory
/// - `/absolute/path` is kept as is
/// - `./relative` and `relative` join onto `project_root`
pub fn resolve_local_path(reference: &str, project_root: &Path) -> anyhow::Result<PathBuf> {
    if let Ok(url) = Url::parse(reference)
        && url.scheme() == "file"
    {
        return url
            .to_file_path()
            .map_err(|()| anyhow::anyhow!("file URL does not name a local path: {}", reference));
    }

    if let Some(rest) = reference.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        return Ok(home.join(rest));
    }

    let path = Path::new(reference);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let stripped = reference.strip_prefix("./").unwrap_or(reference);
    Ok(project_root.join(stripped))
}
