//! Registry items and install routing
//!
//! Defines the registry item data model, detects items that can be copied
//! straight to their targets, and picks the install route for an item.

pub mod install;
pub mod schema;
pub mod universal;

pub use install::{DirectCopy, InstallRoute, plan_install};
pub use schema::{RegistryFile, RegistryItem, RegistryItemType};
pub use universal::is_universal_registry_item;
