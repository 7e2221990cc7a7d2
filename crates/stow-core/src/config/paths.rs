//! Config path resolution helpers.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::parser::parse_stow_toml;
use super::schema::StowConfig;

pub const CONFIG_FILE_NAME: &str = "stow.toml";

/// Default global config path: `<config dir>/stow/stow.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stow").join(CONFIG_FILE_NAME))
}

/// Project config path: `<project root>/stow.toml`.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load the global layer, then merge the project layer over it.
///
/// Missing files are skipped; malformed files are errors.
pub fn load_layered(global: Option<&Path>, project_root: &Path) -> anyhow::Result<StowConfig> {
    let mut config = StowConfig::default();

    let project = project_config_path(project_root);
    for path in global.into_iter().chain([project.as_path()]) {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, skipping");
            continue;
        }
        debug!(path = %path.display(), "Loading config file");
        config.merge(parse_stow_toml(path)?);
    }

    Ok(config)
}
