// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Docopt usecase runner
//!
//! Turns docopt usecase fixture files into a conformance suite. A fixture
//! holds usage messages, each followed by example invocations and the JSON
//! result a correct docopt implementation must produce, or `"user-error"`
//! when it must reject the invocation.
//!
//! ```text
//! r"""Usage: prog [-v]
//!
//! """
//! $ prog -v
//! {"-v": true}
//!
//! $ prog --bogus
//! "user-error"
//! ```
//!
//! Implementations plug in through [`runner::UsageParser`]. The bundled
//! binary drives one as an external process (see [`testee`]).

pub mod cli;
pub mod compare;
pub mod config;
pub mod discovery;
pub mod fixture;
pub mod harness;
pub mod item;
pub mod outcome;
pub mod output;
pub mod runner;
pub mod testee;

/// Re-exported capture types from the docopt-usecases-capture crate.
pub mod capture {
    pub use usecases_capture::{CaptureLog, CapturedCase, CapturedOutcome};
}

pub use discovery::{collect, collect_with, discover, FixturePattern};
pub use fixture::{parse, Case, FixtureError, FixtureFile, Section};
pub use item::{ItemFailure, TestItem};
pub use outcome::{Outcome, USER_ERROR};
pub use runner::{check_case, run_case, CaseFailure, ParserError, UsageParser};
