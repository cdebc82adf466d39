// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture parser for docopt usecase files.
//!
//! A fixture holds one or more sections. Each section is a usage message
//! followed by shell-prompt examples and their expected JSON results:
//!
//! ```text
//! r"""Usage: prog [-v]
//!
//! """
//! $ prog -v
//! {"-v": true}
//!
//! $ prog -x
//! "user-error"
//! ```
//!
//! `#` starts a comment anywhere in the file, including inside usage text.
//! The delimiters `r"""` and `"""` must not occur inside usage text or JSON,
//! and `$` must not occur inside an example body except as the prompt.

use crate::outcome::Outcome;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Static regex for matching `#` comments through end of line
static COMMENT_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?m)#.*$").ok());

const RAW_QUOTE: &str = "r\"\"\"";
const TRIPLE_QUOTE: &str = "\"\"\"";
const PROMPT: char = '$';

/// Errors that can occur while reading or parsing a fixture
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("section {section}, case {case} (`{invocation}`): invalid expected result: {source}")]
    InvalidExpectation {
        section: usize,
        case: usize,
        invocation: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw content of one fixture file
#[derive(Clone, Debug)]
pub struct FixtureFile {
    path: PathBuf,
    content: String,
}

impl FixtureFile {
    /// Read a fixture from disk
    pub fn read(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_source(path, content))
    }

    /// Wrap already-loaded fixture text
    pub fn from_source(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// File name without directories or extension, used to name usecases
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Parse the content into sections
    pub fn sections(&self) -> Result<Vec<Section>, FixtureError> {
        parse(&self.content)
    }
}

/// One usage message with its examples
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Always empty in the file format; usecases are named per file instead
    pub name: String,
    /// Usage message handed verbatim to the implementation
    pub doc: String,
    pub cases: Vec<Case>,
}

/// One example invocation and its expected result
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    /// First token of the invocation line
    pub prog: String,
    /// Remainder of the invocation line, not re-tokenized
    pub argv: String,
    pub expected: Outcome,
}

impl Case {
    /// Command line as shown in reports (`prog argv`)
    pub fn command_line(&self) -> String {
        format!("{} {}", self.prog, self.argv)
    }
}

/// Parse fixture text into sections.
///
/// Text before the first `r"""` becomes a section without examples, unless
/// it is blank. A dangling `"""` at either end of the document is ignored.
/// Examples whose expected result is not valid JSON fail the whole fixture.
#[tracing::instrument(skip_all, fields(source_len = raw.len()))]
pub fn parse(raw: &str) -> Result<Vec<Section>, FixtureError> {
    let stripped = strip_comments(raw);
    let mut text = stripped.trim();
    if let Some(rest) = text.strip_prefix(TRIPLE_QUOTE) {
        text = rest;
    }
    // A closing `"""` after the last example belongs to no section.
    if let Some(rest) = text.strip_suffix(TRIPLE_QUOTE) {
        text = rest;
    }

    let mut fragments = text.split(RAW_QUOTE);
    let mut sections = Vec::new();

    if let Some(leading) = fragments.next() {
        if !leading.trim().is_empty() {
            let (doc, _) = split_doc(leading);
            sections.push(Section {
                name: String::new(),
                doc: doc.to_string(),
                cases: Vec::new(),
            });
        }
    }

    for source in fragments {
        let (doc, body) = split_doc(source);
        let cases = parse_cases(body, sections.len() + 1)?;
        sections.push(Section {
            name: String::new(),
            doc: doc.to_string(),
            cases,
        });
    }

    tracing::debug!(
        sections = sections.len(),
        cases = sections.iter().map(|s| s.cases.len()).sum::<usize>(),
        "parsed fixture"
    );
    Ok(sections)
}

/// Remove `#` through end of line, on every line
fn strip_comments(raw: &str) -> String {
    match COMMENT_REGEX.as_ref() {
        Some(re) => re.replace_all(raw, "").into_owned(),
        None => raw.to_string(),
    }
}

/// Split a section source at its closing `"""`
fn split_doc(source: &str) -> (&str, &str) {
    source.split_once(TRIPLE_QUOTE).unwrap_or((source, ""))
}

fn parse_cases(body: &str, section: usize) -> Result<Vec<Case>, FixtureError> {
    body.split(PROMPT)
        .skip(1)
        .enumerate()
        .map(|(i, source)| parse_case(source, section, i + 1))
        .collect()
}

fn parse_case(source: &str, section: usize, case: usize) -> Result<Case, FixtureError> {
    let source = source.trim();
    let (invocation, blob) = source.split_once('\n').unwrap_or((source, ""));
    let invocation = invocation.trim();

    let value: serde_json::Value =
        serde_json::from_str(blob).map_err(|source| FixtureError::InvalidExpectation {
            section,
            case,
            invocation: invocation.to_string(),
            source,
        })?;

    let (prog, argv) = invocation.split_once(' ').unwrap_or((invocation, ""));
    Ok(Case {
        prog: prog.to_string(),
        argv: argv.to_string(),
        expected: Outcome::from_json(value),
    })
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
