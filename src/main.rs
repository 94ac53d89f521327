// SPDX-License-Identifier: MIT
//
// terracotta: accessibility report for the built-in theme variants.
//
// Wires the crates together:
//
//   tc-color → hex parsing, compositing, sRGB transfer curve
//   tc-theme → contrast / overlay / hue checks, reports, built-in palettes
//
// Every variant's checks are evaluated and printed to stdout as PASS/FAIL
// lines. Diagnostics go to stderr through `tracing`, filtered by RUST_LOG
// (default: warn). The process exits nonzero if any check in any variant
// fails, or if a variant cannot be evaluated at all.

use std::io::{self, Write};
use std::process::ExitCode;

use tc_theme::builtin;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    install_tracing();

    let run = builtin::validate_all();

    let mut stdout = io::stdout().lock();
    for report in &run.reports {
        if let Err(e) = write!(stdout, "{report}") {
            eprintln!("terracotta: failed to write report: {e}");
            return ExitCode::FAILURE;
        }
    }

    for failure in &run.errors {
        tracing::error!(
            variant = %failure.variant,
            role = failure.error.role(),
            error = %failure.error,
            "variant could not be evaluated"
        );
    }

    if run.failed() {
        tracing::warn!(
            failed_reports = run.reports.iter().filter(|r| r.failed()).count(),
            errors = run.errors.len(),
            "theme validation failed"
        );
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
