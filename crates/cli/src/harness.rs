// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential usecase harness: collects fixtures, runs items and reports.

use crate::discovery::collect_path;
use crate::fixture::FixtureError;
use crate::item::{ItemFailure, TestItem};
use crate::output::{write_banner, write_status, Status};
use crate::runner::UsageParser;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use usecases_capture::{CaptureLog, CapturedOutcome};

/// A fixture that could not be collected
#[derive(Debug)]
pub struct CollectionError {
    pub path: PathBuf,
    pub error: FixtureError,
}

/// Items from every collectable fixture, plus the failures
#[derive(Debug, Default)]
pub struct Collected {
    pub items: Vec<TestItem>,
    pub errors: Vec<CollectionError>,
}

/// Collect every fixture in `files`, in order.
///
/// A fixture that fails to read or parse contributes no items. Collection
/// carries on with the next file.
pub fn collect_files(files: &[PathBuf]) -> Collected {
    let mut collected = Collected::default();
    for path in files {
        match collect_path(path) {
            Ok(items) => collected.items.extend(items),
            Err(error) => {
                tracing::warn!(fixture = %path.display(), %error, "fixture collection failed");
                collected.errors.push(CollectionError {
                    path: path.clone(),
                    error,
                });
            }
        }
    }
    collected
}

/// Counts of a finished run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub collection_errors: usize,
}

impl RunSummary {
    /// True when every item passed and every fixture collected
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0 && self.collection_errors == 0
    }

    /// Process exit code for this run
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} errors",
            self.passed, self.failed, self.errors
        )?;
        if self.collection_errors > 0 {
            write!(f, ", {} collection errors", self.collection_errors)?;
        }
        Ok(())
    }
}

/// Runs collected items one at a time and writes a report
#[derive(Default)]
pub struct Harness {
    capture: Option<CaptureLog>,
    quiet: bool,
    color: bool,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every executed item into `log`
    pub fn with_capture(mut self, log: CaptureLog) -> Self {
        self.capture = Some(log);
        self
    }

    /// Suppress `PASSED` lines
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Color status lines
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Execute every item of `collected` against `parser`.
    ///
    /// Collection errors are reported first. Status lines follow in item
    /// order, then a failure report per failing item, then the summary.
    /// A failed write to the report or to the capture log aborts the run.
    pub fn run<P, W>(
        &self,
        parser: &P,
        collected: &Collected,
        out: &mut W,
    ) -> io::Result<RunSummary>
    where
        P: UsageParser + ?Sized,
        W: Write,
    {
        let mut summary = RunSummary {
            total: collected.items.len(),
            collection_errors: collected.errors.len(),
            ..Default::default()
        };

        for failure in &collected.errors {
            writeln!(
                out,
                "ERROR collecting {}: {}",
                failure.path.display(),
                failure.error
            )?;
        }

        let mut failures = Vec::new();
        for item in &collected.items {
            let result = item.execute(parser);
            let status = match &result {
                Ok(()) => Status::Passed,
                Err(f) if f.is_mismatch() => Status::Failed,
                Err(_) => Status::Error,
            };
            match status {
                Status::Passed => summary.passed += 1,
                Status::Failed => summary.failed += 1,
                Status::Error => summary.errors += 1,
            }
            tracing::debug!(item = item.name(), %status, "usecase finished");

            if let Some(log) = &self.capture {
                log.record(
                    item.name(),
                    item.case().command_line(),
                    captured_outcome(&result),
                )
                .map_err(|e| {
                    io::Error::new(e.kind(), format!("failed to write capture record: {e}"))
                })?;
            }
            if !(self.quiet && status == Status::Passed) {
                write_status(out, status, item.name(), self.color)?;
            }
            if let Err(failure) = result {
                failures.push((item, failure));
            }
        }

        if !failures.is_empty() {
            writeln!(out)?;
            write_banner(out, "FAILURES")?;
            for (item, failure) in &failures {
                let (path, line, label) = item.location();
                writeln!(out, "___ {} ___", item.name())?;
                writeln!(out, "{}:{}: {}", path.display(), line, label)?;
                writeln!(out, "{}", item.repr_failure(failure))?;
                writeln!(out)?;
            }
        }

        writeln!(out, "{}", summary)?;
        Ok(summary)
    }

    /// Write the location of every collected item without running anything
    pub fn list<W: Write>(&self, collected: &Collected, out: &mut W) -> io::Result<RunSummary> {
        for failure in &collected.errors {
            writeln!(
                out,
                "ERROR collecting {}: {}",
                failure.path.display(),
                failure.error
            )?;
        }
        for item in &collected.items {
            let (path, line, label) = item.location();
            writeln!(out, "{}:{}: {}", path.display(), line, label)?;
        }
        writeln!(out, "{} usecases collected", collected.items.len())?;

        Ok(RunSummary {
            total: collected.items.len(),
            collection_errors: collected.errors.len(),
            ..Default::default()
        })
    }
}

fn captured_outcome(result: &Result<(), ItemFailure>) -> CapturedOutcome {
    match result {
        Ok(()) => CapturedOutcome::Passed,
        Err(ItemFailure::Mismatch {
            actual, expected, ..
        }) => CapturedOutcome::Mismatch {
            actual: actual.to_json(),
            expected: expected.to_json(),
        },
        Err(failure @ ItemFailure::Library { .. }) => CapturedOutcome::Error {
            message: failure.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "harness_tests.rs"]
mod tests;
