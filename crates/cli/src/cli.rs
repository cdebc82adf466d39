// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface and its merge with the config file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ConfigError, HarnessConfig};
use crate::discovery::FixturePattern;
use crate::testee::CommandTestee;

/// Docopt usecase runner
#[derive(Parser, Debug)]
#[command(
    name = "docopt-usecases",
    version,
    about = "Run docopt usecase fixtures against a docopt implementation"
)]
pub struct Cli {
    /// Fixture files or directories to search (default: .)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Command line of the implementation under test, split on whitespace
    #[arg(long, env = "DOCOPT_TESTEE", value_name = "COMMAND")]
    pub testee: Option<String>,

    /// TOML harness configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write one JSONL record per executed usecase
    #[arg(long, env = "DOCOPT_USECASES_CAPTURE", value_name = "FILE")]
    pub capture: Option<PathBuf>,

    /// Fixture file extension
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// Required fixture file name prefix
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// List collected usecases without running them
    #[arg(long)]
    pub collect_only: bool,

    /// Only print failures and the summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Effective settings after merging flags over the config file
#[derive(Debug)]
pub struct Settings {
    pub testee: Option<CommandTestee>,
    pub paths: Vec<PathBuf>,
    pub pattern: FixturePattern,
    pub capture: Option<PathBuf>,
    pub collect_only: bool,
    pub quiet: bool,
}

impl Cli {
    /// Load `--config` (if any) and merge it under the flags
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        self.resolve_with(config)
    }

    /// Merge the flags over `config`. Flags win.
    pub fn resolve_with(&self, mut config: HarnessConfig) -> Result<Settings, ConfigError> {
        if let Some(testee) = &self.testee {
            config.testee = Some(testee.split_whitespace().map(String::from).collect());
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if self.capture.is_some() {
            config.capture = self.capture.clone();
        }
        if !self.paths.is_empty() {
            config.paths = self.paths.clone();
        }
        config.validate()?;

        let testee = config
            .testee
            .as_deref()
            .and_then(CommandTestee::from_command_line);
        if testee.is_none() && !self.collect_only {
            return Err(ConfigError::MissingTestee);
        }

        let paths = if config.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            config.paths.clone()
        };

        Ok(Settings {
            testee,
            paths,
            pattern: config.pattern(),
            capture: config.capture,
            collect_only: self.collect_only,
            quiet: self.quiet,
        })
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
