// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case execution against a docopt implementation.

use crate::fixture::Case;
use crate::outcome::Outcome;
use serde_json::Value;
use thiserror::Error;

/// Errors raised by an implementation under test
#[derive(Debug, Error)]
pub enum ParserError {
    /// The invocation does not match the usage message. This is the
    /// documented rejection signal and becomes [`Outcome::UserError`].
    #[error("usage error: {0}")]
    Usage(String),

    /// Anything else the implementation failed with
    #[error("{0}")]
    Internal(String),
}

/// Invocation contract of a docopt implementation.
///
/// `doc` is the usage message and `argv` the raw argument string; splitting
/// `argv` into arguments is up to the implementation. A successful parse
/// returns a JSON mapping of option and argument names to values.
pub trait UsageParser {
    fn parse(&self, doc: &str, argv: &str) -> Result<Value, ParserError>;
}

impl<F> UsageParser for F
where
    F: Fn(&str, &str) -> Result<Value, ParserError>,
{
    fn parse(&self, doc: &str, argv: &str) -> Result<Value, ParserError> {
        self(doc, argv)
    }
}

/// Why a case did not pass
#[derive(Debug, Error)]
pub enum CaseFailure {
    #[error("result {actual} does not match expected {expected}")]
    Mismatch { actual: Outcome, expected: Outcome },

    #[error("implementation failed: {0}")]
    Library(ParserError),
}

/// Run one case, canonicalizing a usage error to [`Outcome::UserError`].
///
/// Errors other than [`ParserError::Usage`] are returned unchanged.
pub fn run_case<P: UsageParser + ?Sized>(
    parser: &P,
    doc: &str,
    case: &Case,
) -> Result<Outcome, ParserError> {
    match parser.parse(doc, &case.argv) {
        Ok(value) => Ok(Outcome::Parsed(value)),
        Err(ParserError::Usage(message)) => {
            tracing::trace!(argv = %case.argv, %message, "usage error");
            Ok(Outcome::UserError)
        }
        Err(err) => Err(err),
    }
}

/// Run one case and compare the result with its expectation.
pub fn check_case<P: UsageParser + ?Sized>(
    parser: &P,
    doc: &str,
    case: &Case,
) -> Result<(), CaseFailure> {
    let actual = run_case(parser, doc, case).map_err(CaseFailure::Library)?;
    if actual == case.expected {
        Ok(())
    } else {
        Err(CaseFailure::Mismatch {
            actual,
            expected: case.expected.clone(),
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
