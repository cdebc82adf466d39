// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test items: one runnable, reportable usecase per fixture example.

use crate::compare::diff_values;
use crate::fixture::{Case, FixtureFile};
use crate::outcome::Outcome;
use crate::runner::{check_case, CaseFailure, ParserError, UsageParser};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a test item did not pass
#[derive(Debug, Error)]
pub enum ItemFailure {
    /// The implementation produced a different result
    #[error("{name}: result {actual} does not match expected {expected}")]
    Mismatch {
        name: String,
        actual: Outcome,
        expected: Outcome,
    },

    /// The implementation failed with something other than a usage error
    #[error("{name}: implementation failed: {source}")]
    Library {
        name: String,
        #[source]
        source: ParserError,
    },
}

impl ItemFailure {
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ItemFailure::Mismatch { .. })
    }
}

/// One usecase registered with the harness
#[derive(Clone, Debug)]
pub struct TestItem {
    name: String,
    path: PathBuf,
    doc: String,
    case: Case,
}

impl TestItem {
    /// Create an item for `case` of the fixture `parent`
    pub fn from_parent(
        parent: &FixtureFile,
        name: impl Into<String>,
        doc: impl Into<String>,
        case: Case,
    ) -> Self {
        Self {
            name: name.into(),
            path: parent.path().to_path_buf(),
            doc: doc.into(),
            case,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn case(&self) -> &Case {
        &self.case
    }

    /// Fixture path, line and label of this item
    pub fn location(&self) -> (&Path, usize, String) {
        (&self.path, 0, format!("usecase: {}", self.name))
    }

    /// Run the usecase against `parser`
    pub fn execute<P: UsageParser + ?Sized>(&self, parser: &P) -> Result<(), ItemFailure> {
        check_case(parser, &self.doc, &self.case).map_err(|failure| match failure {
            CaseFailure::Mismatch { actual, expected } => ItemFailure::Mismatch {
                name: self.name.clone(),
                actual,
                expected,
            },
            CaseFailure::Library(source) => ItemFailure::Library {
                name: self.name.clone(),
                source,
            },
        })
    }

    /// Render a failure of this item for a human to diff by eye
    pub fn repr_failure(&self, failure: &ItemFailure) -> String {
        let mut lines = Vec::new();
        match failure {
            ItemFailure::Mismatch {
                actual, expected, ..
            } => {
                lines.push("usecase execution failed:".to_string());
                lines.push(self.doc.trim_end().to_string());
                lines.push(format!("$ {}", self.case.command_line()));
                lines.push(format!("result> {}", actual));
                lines.push(format!("expect> {}", expected));
                if let (Outcome::Parsed(exp), Outcome::Parsed(act)) = (expected, actual) {
                    lines.extend(diff_values(exp, act).into_iter().map(|d| format!("diff> {}", d)));
                }
            }
            ItemFailure::Library { source, .. } => {
                lines.push("usecase raised an error:".to_string());
                lines.push(self.doc.trim_end().to_string());
                lines.push(format!("$ {}", self.case.command_line()));
                lines.push(format!("error> {}", source));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
