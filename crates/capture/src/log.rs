// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL capture sink.

use crate::record::{CapturedCase, CapturedOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Instant, SystemTime};

struct Sink {
    seq: u64,
    writer: Box<dyn Write + Send>,
}

/// Writes one JSON line per executed usecase
pub struct CaptureLog {
    start: Instant,
    sink: Mutex<Sink>,
}

impl CaptureLog {
    /// Capture into a new file at `path`, truncating any existing one
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }

    /// Capture into an arbitrary writer
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            start: Instant::now(),
            sink: Mutex::new(Sink {
                seq: 0,
                writer: Box::new(writer),
            }),
        }
    }

    /// Append a record and flush it.
    ///
    /// The sequence number only advances when the line was written.
    pub fn record(
        &self,
        name: impl Into<String>,
        command: impl Into<String>,
        outcome: CapturedOutcome,
    ) -> io::Result<()> {
        let mut sink = self.sink.lock();
        let case = CapturedCase {
            seq: sink.seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            name: name.into(),
            command: command.into(),
            outcome,
        };

        serde_json::to_writer(&mut sink.writer, &case)?;
        sink.writer.write_all(b"\n")?;
        sink.writer.flush()?;
        sink.seq += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
