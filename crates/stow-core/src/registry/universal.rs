//! Universal registry item detection.
//!
//! A universal item is one whose files can each be copied verbatim to an
//! explicit target, skipping the per-kind installation pipeline. Targets are
//! not validated here; path safety is the writer's job.

use tracing::debug;

use super::schema::{RegistryFile, RegistryItem};

/// Check whether an item can be installed by copying files to their targets.
///
/// Fails closed: a missing item, an item without files, any file that is not
/// the plain file kind, or any file without a non-empty target all yield
/// `false`. The item's own top-level kind is not consulted.
pub fn is_universal_registry_item(item: Option<&RegistryItem>) -> bool {
    let Some(item) = item else {
        return false;
    };
    if item.files.is_empty() {
        return false;
    }

    match item.files.iter().position(|file| !is_relocatable(file)) {
        Some(index) => {
            debug!(item = %item.name, index, "Registry item is not universal");
            false
        }
        None => true,
    }
}

fn is_relocatable(file: &RegistryFile) -> bool {
    file.r#type.is_file() && file.explicit_target().is_some()
}

impl RegistryItem {
    /// Check whether this item is universal.
    ///
    /// See [`is_universal_registry_item`].
    pub fn is_universal(&self) -> bool {
        is_universal_registry_item(Some(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryItemType;

    fn file(target: Option<&str>) -> RegistryFile {
        let file = RegistryFile::new("files/config.json", RegistryItemType::File);
        match target {
            Some(target) => file.with_target(target),
            None => file,
        }
    }

    fn item(files: Vec<RegistryFile>) -> RegistryItem {
        files
            .into_iter()
            .fold(RegistryItem::new("item"), RegistryItem::with_file)
    }

    #[test]
    fn missing_item_is_not_universal() {
        assert!(!is_universal_registry_item(None));
    }

    #[test]
    fn item_without_files_is_not_universal() {
        assert!(!item(vec![]).is_universal());
    }

    #[test]
    fn all_files_with_targets_is_universal() {
        let item = item(vec![file(Some("src/a.ts")), file(Some("~/.config/b.json"))]);
        assert!(item.is_universal());
    }

    #[test]
    fn one_empty_target_is_not_universal() {
        let item = item(vec![file(Some("src/a.ts")), file(Some(""))]);
        assert!(!item.is_universal());
    }

    #[test]
    fn missing_target_is_not_universal() {
        assert!(!item(vec![file(None)]).is_universal());
    }

    #[test]
    fn edge_truthy_targets_count_as_present() {
        assert!(item(vec![file(Some(" "))]).is_universal());
        assert!(item(vec![file(Some("0"))]).is_universal());
    }

    #[test]
    fn non_file_kind_is_not_universal() {
        let component = RegistryFile::new("ui/button.tsx", RegistryItemType::Component)
            .with_target("src/b.tsx");
        assert!(!item(vec![component]).is_universal());

        let mixed = item(vec![
            file(Some("src/a.ts")),
            RegistryFile::new("hooks/use-x.ts", RegistryItemType::Hook).with_target("src/x.ts"),
        ]);
        assert!(!mixed.is_universal());
    }

    #[test]
    fn traversal_targets_are_not_validated() {
        let item = item(vec![file(Some("../../etc/passwd")), file(Some("/tmp/x"))]);
        assert!(item.is_universal());
    }

    #[test]
    fn top_level_type_is_ignored() {
        let universal = item(vec![file(Some("src/a.ts"))]);
        for r#type in [
            RegistryItemType::Component,
            RegistryItemType::Style,
            RegistryItemType::Unknown("registry:font".to_string()),
        ] {
            assert!(universal.clone().with_type(r#type).is_universal());
        }
    }
}
