//! Install routing for registry items.
//!
//! Universal items take the direct route: every file is copied verbatim to
//! its target. Everything else goes through the per-kind pipeline, which
//! lives outside this crate.

use serde::Serialize;
use tracing::debug;

use super::schema::RegistryItem;

/// One file copy on the direct route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectCopy {
    /// Path of the file within the item
    pub source: String,
    /// Destination, exactly as declared by the item
    pub target: String,
}

/// How an item should be installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "files", rename_all = "kebab-case")]
pub enum InstallRoute {
    /// Copy each file to its target, in declaration order
    Direct(Vec<DirectCopy>),
    /// Hand the item to the per-kind installation pipeline
    Pipeline,
}

impl InstallRoute {
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Direct(_))
    }

    pub fn copies(&self) -> &[DirectCopy] {
        match self {
            Self::Direct(copies) => copies,
            Self::Pipeline => &[],
        }
    }
}

/// Choose the install route for an item.
pub fn plan_install(item: &RegistryItem) -> InstallRoute {
    if !item.is_universal() {
        debug!(item = %item.name, "Routing registry item through install pipeline");
        return InstallRoute::Pipeline;
    }

    let copies: Vec<DirectCopy> = item
        .files
        .iter()
        .filter_map(|file| {
            file.explicit_target().map(|target| DirectCopy {
                source: file.path.clone(),
                target: target.to_string(),
            })
        })
        .collect();

    debug!(item = %item.name, files = copies.len(), "Installing registry item directly");
    InstallRoute::Direct(copies)
}
