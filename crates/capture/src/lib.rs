// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Case capture for usecase runs.
//!
//! Every executed usecase can be appended, together with its verdict, to a
//! JSONL file for later inspection.

mod duration_serde;
mod log;
mod record;

pub use log::CaptureLog;
pub use record::{CapturedCase, CapturedOutcome};
