// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External docopt implementations driven over a process boundary.
//!
//! The testee is started once per usecase with the usecase's arguments
//! (split on whitespace) appended to its command line. The usage message is
//! written to its stdin. It answers on stdout with either the parsed result
//! as JSON or `"user-error"` when it rejects the invocation.

use crate::outcome::USER_ERROR;
use crate::runner::{ParserError, UsageParser};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A docopt implementation run as a child process
#[derive(Clone, Debug)]
pub struct CommandTestee {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandTestee {
    /// Create a testee for `program` with no fixed arguments
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Create a testee from a command line such as `python3 testee.py`.
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command_line<S: AsRef<str>>(words: &[S]) -> Option<Self> {
        let (program, args) = words.split_first()?;
        Some(
            Self::new(program.as_ref())
                .with_args(args.iter().map(|a| a.as_ref().to_string())),
        )
    }

    /// Append fixed arguments passed before the usecase arguments
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn spawn_error(&self, e: std::io::Error) -> ParserError {
        ParserError::Internal(format!(
            "failed to run testee {}: {}",
            self.program.display(),
            e
        ))
    }
}

impl UsageParser for CommandTestee {
    fn parse(&self, doc: &str, argv: &str) -> Result<Value, ParserError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(argv.split_whitespace())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Feed stdin while stdout and stderr are drained.
        let stdin = child.stdin.take();
        let (output, fed) = std::thread::scope(|scope| {
            let feeder = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(doc.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            (output, feeder.join())
        });

        let output = output.map_err(|e| self.spawn_error(e))?;
        match fed {
            Ok(Ok(())) => {}
            // A testee may exit before reading its input.
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(self.spawn_error(e)),
            Err(_) => {
                return Err(ParserError::Internal(
                    "stdin writer thread panicked".to_string(),
                ))
            }
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(ParserError::Internal(format!(
                "testee exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_answer(stdout.trim())
    }
}

/// Interpret a testee's stdout
fn parse_answer(answer: &str) -> Result<Value, ParserError> {
    if answer == USER_ERROR {
        return Err(ParserError::Usage(answer.to_string()));
    }
    match serde_json::from_str::<Value>(answer) {
        Ok(Value::String(s)) if s == USER_ERROR => Err(ParserError::Usage(s)),
        Ok(value) => Ok(value),
        Err(e) => Err(ParserError::Internal(format!(
            "testee printed invalid JSON ({}): {}",
            e, answer
        ))),
    }
}

#[cfg(test)]
#[path = "testee_tests.rs"]
mod tests;
