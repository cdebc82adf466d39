// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Docopt usecase runner binary entry point.

use std::io::{self, IsTerminal};

use clap::Parser;

use docopt_usecases::cli::{Cli, Settings};
use docopt_usecases::discovery::discover;
use docopt_usecases::harness::{collect_files, Harness};
use docopt_usecases::output::{print_error, print_warning};
use usecases_capture::CaptureLog;

/// Exit code for harness usage and configuration errors
const EXIT_USAGE: i32 = 2;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            print_error(e);
            std::process::exit(EXIT_USAGE);
        }
    };

    std::process::exit(run(settings));
}

fn run(settings: Settings) -> i32 {
    let files = match discover(&settings.paths, &settings.pattern) {
        Ok(files) => files,
        Err(e) => {
            print_error(e);
            return EXIT_USAGE;
        }
    };
    if files.is_empty() {
        print_warning(format_args!(
            "no fixtures matching {}*.{} found",
            settings.pattern.prefix, settings.pattern.extension
        ));
    }

    let collected = collect_files(&files);
    let mut stdout = io::stdout().lock();

    let mut harness = Harness::new()
        .quiet(settings.quiet)
        .color(io::stdout().is_terminal());

    let result = if settings.collect_only {
        harness.list(&collected, &mut stdout)
    } else {
        let Some(testee) = settings.testee else {
            print_error("no testee given");
            return EXIT_USAGE;
        };
        tracing::debug!(
            program = %testee.program().display(),
            args = ?testee.args(),
            "using testee"
        );
        if let Some(path) = &settings.capture {
            match CaptureLog::with_file(path) {
                Ok(log) => harness = harness.with_capture(log),
                Err(e) => {
                    print_error(format_args!(
                        "failed to create capture file {}: {}",
                        path.display(),
                        e
                    ));
                    return EXIT_USAGE;
                }
            }
        }
        harness.run(&testee, &collected, &mut stdout)
    };

    match result {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            print_error(format_args!("run aborted: {}", e));
            1
        }
    }
}
