// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expected and actual results of a usecase.
//!
//! Fixtures write the expected result as JSON. The JSON string `"user-error"`
//! is reserved: it means the implementation must reject the invocation. The
//! sentinel is recognized only after decoding, so it is a tagged variant here
//! and never a bare string. A fixture that wants to expect the literal string
//! `"user-error"` as a parsed result cannot express it.

use serde_json::Value;
use std::fmt;

/// Reserved literal for an expected (or observed) usage error
pub const USER_ERROR: &str = "user-error";

/// Result of parsing one invocation
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The implementation returned a structured result
    Parsed(Value),
    /// The implementation rejected the invocation
    UserError,
}

impl Outcome {
    /// Classify a decoded JSON value, recognizing the usage-error sentinel.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(ref s) if s == USER_ERROR => Outcome::UserError,
            other => Outcome::Parsed(other),
        }
    }

    /// JSON form, with `UserError` rendered as the sentinel string.
    pub fn to_json(&self) -> Value {
        match self {
            Outcome::Parsed(value) => value.clone(),
            Outcome::UserError => Value::String(USER_ERROR.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    /// Compact JSON, as written in report lines
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
