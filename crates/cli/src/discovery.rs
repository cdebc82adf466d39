// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture discovery and test item registration.

use crate::fixture::{Case, FixtureError, FixtureFile};
use crate::item::TestItem;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default fixture extension
pub const DEFAULT_EXTENSION: &str = "docopt";
/// Default fixture file name prefix
pub const DEFAULT_PREFIX: &str = "test";

/// Errors that can occur while looking for fixtures
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid fixture pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to walk fixture directory: {0}")]
    Walk(#[from] glob::GlobError),
}

/// Which files count as fixtures
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixturePattern {
    /// File extension, without the dot
    pub extension: String,
    /// Required start of the file name
    pub prefix: String,
}

impl Default for FixturePattern {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl FixturePattern {
    pub fn new(extension: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            prefix: prefix.into(),
        }
    }

    fn glob_in(&self, dir: &Path) -> String {
        format!(
            "{}/**/{}*.{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            glob::Pattern::escape(&self.prefix),
            glob::Pattern::escape(&self.extension)
        )
    }
}

/// Whether `path` names a fixture file under `pattern`: the extension is
/// equal and the file name starts with the prefix.
pub fn is_fixture(path: &Path, pattern: &FixturePattern) -> bool {
    let extension_matches = path
        .extension()
        .is_some_and(|ext| ext.to_string_lossy() == pattern.extension);
    let prefix_matches = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with(&pattern.prefix));
    extension_matches && prefix_matches
}

/// Expand `paths` into fixture files.
///
/// Directories are searched recursively and their matches sorted. Files are
/// taken as given, whatever their name. Each file appears once, at its first
/// position.
pub fn discover(
    paths: &[PathBuf],
    pattern: &FixturePattern,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut found = Vec::new();
            for entry in glob::glob(&pattern.glob_in(path))? {
                let entry = entry?;
                if entry.is_file() && is_fixture(&entry, pattern) {
                    found.push(entry);
                }
            }
            found.sort();
            tracing::debug!(dir = %path.display(), count = found.len(), "discovered fixtures");
            for file in found {
                if seen.insert(file.clone()) {
                    files.push(file);
                }
            }
        } else if path.is_file() {
            if seen.insert(path.clone()) {
                files.push(path.clone());
            }
        } else {
            return Err(DiscoveryError::NotFound(path.clone()));
        }
    }

    Ok(files)
}

/// Build one item per case of `file`, in file order.
///
/// `factory` receives the fixture, the item name, the section's usage text
/// and the case. Names are `<base name>(<n>)` with `n` counting from 1 over
/// the whole file.
pub fn collect_with<T, F>(file: &FixtureFile, mut factory: F) -> Result<Vec<T>, FixtureError>
where
    F: FnMut(&FixtureFile, String, &str, Case) -> T,
{
    let sections = file.sections()?;
    let base_name = file.base_name();
    let mut items = Vec::new();
    let mut index = 1;

    for section in sections {
        for case in section.cases {
            let name = format!("{}({})", base_name, index);
            items.push(factory(file, name, &section.doc, case));
            index += 1;
        }
    }

    tracing::debug!(fixture = %file.path().display(), items = items.len(), "collected usecases");
    Ok(items)
}

/// Build the test items of `file`
pub fn collect(file: &FixtureFile) -> Result<Vec<TestItem>, FixtureError> {
    collect_with(file, |parent, name, doc, case| {
        TestItem::from_parent(parent, name, doc, case)
    })
}

/// Read and collect the fixture at `path`
pub fn collect_path(path: &Path) -> Result<Vec<TestItem>, FixtureError> {
    collect(&FixtureFile::read(path)?)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
