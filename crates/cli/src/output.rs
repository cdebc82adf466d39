// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic and status output helpers.
//!
//! Provides ANSI color support with automatic terminal detection.

use std::fmt;
use std::io::{self, IsTerminal, Write};

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_error(&mut io::stderr(), msg, is_tty);
}

/// Write an error message to a writer with explicit terminal flag.
fn write_error<W: Write>(writer: &mut W, msg: impl fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Error: {}", msg);
    }
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_warning(&mut io::stderr(), msg, is_tty);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[33mWarning: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(writer, "Warning: {}", msg);
    }
}

/// Verdict of a single usecase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
    Error,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Passed => "PASSED",
            Status::Failed => "FAILED",
            Status::Error => "ERROR",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Status::Passed => "\x1b[32m",
            Status::Failed => "\x1b[31m",
            Status::Error => "\x1b[35m",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Write a `STATUS name` line, colored when `is_terminal` is set.
pub fn write_status<W: Write>(
    writer: &mut W,
    status: Status,
    name: &str,
    is_terminal: bool,
) -> io::Result<()> {
    if is_terminal {
        writeln!(writer, "{}{}\x1b[0m {}", status.color(), status, name)
    } else {
        writeln!(writer, "{} {}", status, name)
    }
}

/// Write a section banner such as `==== FAILURES ====`.
pub fn write_banner<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    writeln!(writer, "==== {} ====", title)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
