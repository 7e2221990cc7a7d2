//! Configuration loading
//!
//! Two optional layers, merged in order:
//! - Global: ~/.config/stow/stow.toml
//! - Project: ./stow.toml

pub mod parser;
pub mod paths;
pub mod schema;

pub use parser::{parse_stow_toml, parse_stow_toml_str, to_toml};
pub use paths::{global_config_path, load_layered, project_config_path};
pub use schema::{SpecifierSettings, StowConfig};
