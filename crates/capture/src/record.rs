// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured case data types.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One executed usecase
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CapturedCase {
    /// Sequence number
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since capture started
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Display name of the usecase, e.g. `testcases(12)`
    pub name: String,

    /// Invoked command line (`prog argv`)
    pub command: String,

    /// Verdict
    pub outcome: CapturedOutcome,
}

/// Verdict of one usecase
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CapturedOutcome {
    Passed,
    Mismatch {
        actual: serde_json::Value,
        expected: serde_json::Value,
    },
    Error {
        message: String,
    },
}

impl CapturedOutcome {
    /// Whether the usecase passed
    pub fn is_passed(&self) -> bool {
        matches!(self, CapturedOutcome::Passed)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
