//! Stow Core Library
//!
//! Classification layer for a component-registry client: which package an
//! import specifier requires, whether a reference is a URL or a local item
//! file, and whether a registry item can be copied straight to its targets.

pub mod config;
pub mod error;
pub mod reference;
pub mod registry;
pub mod specifier;

pub use error::StowError;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{SpecifierSettings, StowConfig};

    // Specifiers
    pub use crate::specifier::{
        SpecifierClassifier, collect_dependencies, dependency_from_specifier,
    };

    // References
    pub use crate::reference::{ReferenceKind, classify_reference, is_local_file, is_url};

    // Registry
    pub use crate::registry::{
        DirectCopy, InstallRoute, RegistryFile, RegistryItem, RegistryItemType,
        is_universal_registry_item, plan_install,
    };
}
