// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration loaded from TOML.
//!
//! ```toml
//! testee = ["python3", "testee.py"]
//! paths = ["testcases"]
//! extension = "docopt"
//! prefix = "test"
//! capture = "usecases.jsonl"
//! ```

use crate::discovery::{FixturePattern, DEFAULT_EXTENSION, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("no testee given: pass --testee, set DOCOPT_TESTEE, or add `testee` to the config file")]
    MissingTestee,
}

/// Top-level harness configuration
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Command line of the implementation under test
    #[serde(default)]
    pub testee: Option<Vec<String>>,

    /// Fixture files or directories (default: current directory)
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Fixture file extension
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Required fixture file name prefix
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// JSONL file receiving one record per executed usecase
    #[serde(default)]
    pub capture: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            testee: None,
            paths: Vec::new(),
            extension: default_extension(),
            prefix: default_prefix(),
            capture: None,
        }
    }
}

impl HarnessConfig {
    /// Load a configuration file.
    ///
    /// Relative `paths` and `capture` entries are resolved against the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: HarnessConfig = toml::from_str(&content)?;

        let base = path.parent().unwrap_or(Path::new(""));
        config.paths = config.paths.iter().map(|p| base.join(p)).collect();
        config.capture = config.capture.map(|p| base.join(p));

        config.validate()?;
        tracing::debug!(config = %path.display(), "loaded harness config");
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.testee.as_ref().is_some_and(|t| t.is_empty()) {
            return Err(ConfigError::Validation(
                "testee command line cannot be empty".to_string(),
            ));
        }
        if self.extension.is_empty() {
            return Err(ConfigError::Validation(
                "fixture extension cannot be empty".to_string(),
            ));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::Validation(format!(
                "fixture extension must not start with a dot: {}",
                self.extension
            )));
        }
        Ok(())
    }

    /// Fixture matching rule
    pub fn pattern(&self) -> FixturePattern {
        FixturePattern::new(self.extension.clone(), self.prefix.clone())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
