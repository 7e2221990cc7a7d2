//! Error types for the fallible parts of stow.
//!
//! The classifiers themselves never fail; these cover parsing registry items
//! and rejecting references that cannot be read locally.

use thiserror::Error;

/// Errors from loading registry items.
#[derive(Debug, Error)]
pub enum StowError {
    /// The registry item JSON was malformed or did not match the schema.
    #[error("Invalid registry item: {0}")]
    InvalidItem(#[from] serde_json::Error),

    /// A remote reference was given where a local file is required.
    #[error("Remote registry items are not fetched by stow: {0}")]
    RemoteReference(String),

    /// A bare item name was given where a local file is required.
    #[error("'{0}' is a registry item name, not a local item file")]
    NotALocalFile(String),
}
