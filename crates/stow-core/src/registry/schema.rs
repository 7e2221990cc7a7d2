//! Registry item schema
//!
//! Defines the JSON shape of items served by a component registry

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StowError;

/// Kinds of registry items and registry files.
///
/// Tags serialize as `registry:<kind>`; the bare kind is accepted on input.
/// Unrecognized tags are kept verbatim so they survive re-serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistryItemType {
    /// Plain file placed at an explicit target
    File,
    Component,
    Hook,
    Lib,
    Ui,
    Page,
    Block,
    Theme,
    Style,
    Item,
    Example,
    Internal,
    /// Any tag this client does not know about, as written
    Unknown(String),
}

impl RegistryItemType {
    /// Check if this is the plain file kind.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    /// Parse a tag, with or without the `registry:` prefix.
    pub fn from_tag(tag: &str) -> Self {
        match tag.strip_prefix("registry:").unwrap_or(tag) {
            "file" => Self::File,
            "component" => Self::Component,
            "hook" => Self::Hook,
            "lib" | "library" => Self::Lib,
            "ui" => Self::Ui,
            "page" => Self::Page,
            "block" => Self::Block,
            "theme" => Self::Theme,
            "style" => Self::Style,
            "item" => Self::Item,
            "example" => Self::Example,
            "internal" => Self::Internal,
            _ => Self::Unknown(tag.to_string()),
        }
    }

    /// The serialized tag.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::File => "registry:file",
            Self::Component => "registry:component",
            Self::Hook => "registry:hook",
            Self::Lib => "registry:lib",
            Self::Ui => "registry:ui",
            Self::Page => "registry:page",
            Self::Block => "registry:block",
            Self::Theme => "registry:theme",
            Self::Style => "registry:style",
            Self::Item => "registry:item",
            Self::Example => "registry:example",
            Self::Internal => "registry:internal",
            Self::Unknown(tag) => tag.as_str(),
        }
    }
}

impl Serialize for RegistryItemType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for RegistryItemType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// A single file inside a registry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Path of the file within the item
    pub path: String,

    /// File kind
    #[serde(rename = "type")]
    pub r#type: RegistryItemType,

    /// Explicit destination, overriding the kind's default location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Inline file content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl RegistryFile {
    /// Create a file entry without target or content.
    pub fn new(path: impl Into<String>, r#type: RegistryItemType) -> Self {
        Self {
            path: path.into(),
            r#type,
            target: None,
            content: None,
        }
    }

    /// Set the explicit target path.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the inline content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The target, if present and non-empty.
    ///
    /// Only a missing or empty target is absent; `" "` and `"0"` are present.
    pub fn explicit_target(&self) -> Option<&str> {
        match self.target.as_deref() {
            Some(target) if !target.is_empty() => Some(target),
            Some(_) | None => None,
        }
    }
}

/// A named bundle of files served by a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    /// Item name
    #[serde(default)]
    pub name: String,

    /// Top-level item kind
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<RegistryItemType>,

    /// Item description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Files in declaration order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<RegistryFile>,

    /// Package dependencies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,

    /// Package dev dependencies
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dev_dependencies: Vec<String>,

    /// Other registry items this item depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_dependencies: Vec<String>,

    /// Fields this client does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RegistryFile>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<RegistryFile>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RegistryItem {
    /// Create an empty item with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the top-level kind.
    pub fn with_type(mut self, r#type: RegistryItemType) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Append a file.
    pub fn with_file(mut self, file: RegistryFile) -> Self {
        self.files.push(file);
        self
    }

    /// Parse an item from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self, StowError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse an item from JSON bytes.
    pub fn from_json_slice(content: &[u8]) -> Result<Self, StowError> {
        Ok(serde_json::from_slice(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_item() {
        let json = r#"{
            "$schema": "https://ui.example.com/schema/registry-item.json",
            "name": "button",
            "type": "registry:ui",
            "dependencies": ["@radix-ui/react-slot"],
            "registryDependencies": ["utils"],
            "files": [
                {
                    "path": "ui/button.tsx",
                    "type": "registry:ui",
                    "content": "export function Button() {}"
                }
            ]
        }"#;

        let item = RegistryItem::from_json_str(json).unwrap();
        assert_eq!(item.name, "button");
        assert_eq!(item.r#type, Some(RegistryItemType::Ui));
        assert_eq!(item.dependencies, vec!["@radix-ui/react-slot"]);
        assert_eq!(item.registry_dependencies, vec!["utils"]);
        assert_eq!(item.files.len(), 1);
        assert_eq!(item.files[0].target, None);
        assert!(item.extra.contains_key("$schema"));
    }

    #[test]
    fn parse_bare_kind_aliases() {
        let json = r#"{"name": "env", "files": [{"path": "a", "type": "file", "target": "~/.env"}]}"#;
        let item = RegistryItem::from_json_str(json).unwrap();
        assert!(item.files[0].r#type.is_file());
    }

    #[test]
    fn parse_unknown_kind() {
        let json = r#"{"name": "x", "files": [{"path": "a", "type": "registry:font"}]}"#;
        let item = RegistryItem::from_json_str(json).unwrap();
        assert_eq!(
            item.files[0].r#type,
            RegistryItemType::Unknown("registry:font".to_string())
        );
        assert!(!item.files[0].r#type.is_file());
    }

    #[test]
    fn unknown_kind_survives_serialization() {
        let json = r#"{"name": "x", "type": "custom", "files": [{"path": "a", "type": "registry:font"}]}"#;
        let item = RegistryItem::from_json_str(json).unwrap();

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "custom");
        assert_eq!(value["files"][0]["type"], "registry:font");
        assert_eq!(RegistryItem::from_json_str(&value.to_string()).unwrap(), item);
    }

    #[test]
    fn known_kinds_serialize_with_prefix() {
        let file = RegistryFile::new("a", RegistryItemType::from_tag("library"));
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["type"], "registry:lib");
    }

    #[test]
    fn content_and_target_are_serialized() {
        let file = RegistryFile::new("env", RegistryItemType::File)
            .with_target("~/.env")
            .with_content("API_URL=http://localhost");
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "path": "env",
                "type": "registry:file",
                "target": "~/.env",
                "content": "API_URL=http://localhost",
            })
        );

        let bare = serde_json::to_value(RegistryFile::new("a", RegistryItemType::Ui)).unwrap();
        assert!(bare.get("target").is_none());
        assert!(bare.get("content").is_none());
    }

    #[test]
    fn missing_and_null_files_are_empty() {
        let item = RegistryItem::from_json_str(r#"{"name": "x"}"#).unwrap();
        assert!(item.files.is_empty());

        let item = RegistryItem::from_json_str(r#"{"name": "x", "files": null}"#).unwrap();
        assert!(item.files.is_empty());
    }

    #[test]
    fn null_target_is_absent() {
        let json = r#"{"name": "x", "files": [{"path": "a", "type": "registry:file", "target": null}]}"#;
        let item = RegistryItem::from_json_str(json).unwrap();
        assert_eq!(item.files[0].target, None);
    }

    #[test]
    fn explicit_target_truthiness() {
        let file = RegistryFile::new("a", RegistryItemType::File);
        assert_eq!(file.explicit_target(), None);
        assert_eq!(file.clone().with_target("").explicit_target(), None);
        assert_eq!(file.clone().with_target(" ").explicit_target(), Some(" "));
        assert_eq!(file.with_target("0").explicit_target(), Some("0"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = RegistryItem::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, StowError::InvalidItem(_)));
    }

    #[test]
    fn file_type_is_required() {
        let json = r#"{"name": "x", "files": [{"path": "a"}]}"#;
        assert!(RegistryItem::from_json_str(json).is_err());
    }
}
