//! Import specifier classification.
//!
//! Maps a module specifier as written in an import statement to the package
//! that must be declared as a dependency, or `None` when nothing needs
//! installing:
//! - Scheme specifiers (`node:fs`, `jsr:@std/path`, `npm:lodash`)
//! - Core/runtime packages and their sub-paths (`react`, `react-dom/client`, `next/navigation`)
//! - Scoped packages keep scope and name (`@scope/name/dist` -> `@scope/name`)
//! - Everything else keeps the first segment (`lodash/merge` -> `lodash`)

use std::collections::BTreeSet;

use tracing::debug;

/// Schemes that resolve through the runtime rather than the package manager.
pub const SCHEME_PREFIXES: &[&str] = &["node", "jsr", "npm"];

/// Packages assumed present in every target project.
pub const CORE_PACKAGES: &[&str] = &["react", "react-dom", "next"];

/// Return the dependency required by `specifier`, or `None` if it needs none.
///
/// Uses the fixed [`SCHEME_PREFIXES`] and [`CORE_PACKAGES`] sets. The result
/// borrows from the input and may be empty or whitespace (`"/"` gives `""`,
/// `" "` gives `" "`); callers treat those as "no dependency".
pub fn dependency_from_specifier(specifier: &str) -> Option<&str> {
    if is_excluded(
        specifier,
        SCHEME_PREFIXES.iter().copied(),
        CORE_PACKAGES.iter().copied(),
    ) {
        return None;
    }
    Some(package_name(specifier))
}

/// Specifier classifier with extendable exclusion sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecifierClassifier {
    schemes: BTreeSet<String>,
    core_packages: BTreeSet<String>,
}

impl Default for SpecifierClassifier {
    fn default() -> Self {
        Self {
            schemes: SCHEME_PREFIXES.iter().map(|s| s.to_string()).collect(),
            core_packages: CORE_PACKAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SpecifierClassifier {
    /// Create a classifier with the fixed exclusion sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add packages that are always present in the target environment.
    pub fn with_core_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core_packages.extend(packages.into_iter().map(Into::into));
        self
    }

    /// Add schemes (without the trailing `:`) that never map to a dependency.
    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes.extend(schemes.into_iter().map(Into::into));
        self
    }

    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }

    pub fn core_packages(&self) -> impl Iterator<Item = &str> {
        self.core_packages.iter().map(String::as_str)
    }

    /// Classify a specifier against this classifier's sets.
    ///
    /// With the default sets this is identical to [`dependency_from_specifier`].
    pub fn classify<'s>(&self, specifier: &'s str) -> Option<&'s str> {
        if is_excluded(specifier, self.schemes(), self.core_packages()) {
            return None;
        }
        Some(package_name(specifier))
    }
}

/// Collect the dependencies required by a set of specifiers.
///
/// Excluded specifiers are skipped, as are empty and whitespace-only names.
/// The result is sorted and de-duplicated.
pub fn collect_dependencies<'s, I>(
    classifier: &SpecifierClassifier,
    specifiers: I,
) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut dependencies = BTreeSet::new();
    for specifier in specifiers {
        match classifier.classify(specifier) {
            Some(name) if !name.trim().is_empty() => {
                dependencies.insert(name.to_string());
            }
            Some(_) => debug!(specifier, "Skipping specifier with empty package name"),
            None => debug!(specifier, "Specifier needs no dependency"),
        }
    }
    dependencies
}

fn is_excluded<'a>(
    specifier: &str,
    mut schemes: impl Iterator<Item = &'a str>,
    mut core_packages: impl Iterator<Item = &'a str>,
) -> bool {
    if let Some((scheme, _)) = specifier.split_once(':')
        && schemes.any(|known| known == scheme)
    {
        return true;
    }

    core_packages.any(|package| {
        specifier
            .strip_prefix(package)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}

/// Slice the package name off the front of a specifier.
fn package_name(specifier: &str) -> &str {
    let segments = if specifier.starts_with('@') { 2 } else { 1 };
    match specifier.match_indices('/').nth(segments - 1) {
        Some((idx, _)) => &specifier[..idx],
        None => specifier,
    }
}
