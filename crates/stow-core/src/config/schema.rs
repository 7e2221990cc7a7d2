//! Configuration schema for stow.toml
//!
//! Lets a project extend the fixed exclusion sets used when mapping import
//! specifiers to dependencies.

use serde::{Deserialize, Serialize};

use crate::specifier::SpecifierClassifier;

/// Root configuration structure for stow.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StowConfig {
    /// Specifier classification settings
    #[serde(default)]
    pub specifier: SpecifierSettings,
}

/// `[specifier]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecifierSettings {
    /// Extra packages assumed present in every target project
    #[serde(default)]
    pub core_packages: Vec<String>,

    /// Extra schemes (without `:`) that never map to a dependency
    #[serde(default)]
    pub schemes: Vec<String>,
}

impl StowConfig {
    /// Merge another StowConfig into this one
    pub fn merge(&mut self, other: StowConfig) {
        self.specifier.merge(other.specifier);
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.specifier.validate()
    }

    /// Build the specifier classifier described by this configuration.
    pub fn specifier_classifier(&self) -> SpecifierClassifier {
        SpecifierClassifier::new()
            .with_core_packages(self.specifier.core_packages.iter().cloned())
            .with_schemes(self.specifier.schemes.iter().cloned())
    }
}

impl SpecifierSettings {
    /// Merge another table into this one, keeping entries unique
    pub fn merge(&mut self, other: SpecifierSettings) {
        for package in other.core_packages {
            if !self.core_packages.contains(&package) {
                self.core_packages.push(package);
            }
        }
        for scheme in other.schemes {
            if !self.schemes.contains(&scheme) {
                self.schemes.push(scheme);
            }
        }
    }

    /// Validate the table
    pub fn validate(&self) -> anyhow::Result<()> {
        for package in &self.core_packages {
            if package.trim().is_empty() {
                anyhow::bail!("specifier.core_packages entries must not be empty");
            }
            if package.ends_with('/') {
                anyhow::bail!(
                    "specifier.core_packages entry '{}' must not end with '/'",
                    package
                );
            }
        }

        for scheme in &self.schemes {
            if scheme.trim().is_empty() {
                anyhow::bail!("specifier.schemes entries must not be empty");
            }
            if scheme.contains(':') {
                anyhow::bail!(
                    "specifier.schemes entry '{}' must not contain ':' (use '{}')",
                    scheme,
                    scheme.trim_end_matches(':')
                );
            }
        }

        Ok(())
    }
}
