//! Report formatting and printing utilities.
//!
//! Separate from the generation engine so apigen can be used as a library.

use std::{
    collections::BTreeSet,
    io::{self, Write},
};

use colored::Colorize;

use crate::core::{FlushFailure, GenerateSummary};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the outcome of a generation run.
///
/// Diagnostics (unknown components, failed writes) go to stderr; the listing
/// of components without prop sources and the summary go to stdout.
pub fn print(summary: &GenerateSummary) {
    let mut stderr = io::stderr().lock();
    print_unknown_components_to(&summary.unknown_components, &mut stderr);
    print_flush_failures_to(&summary.flush.failures, &mut stderr);
    drop(stderr);

    let mut stdout = io::stdout().lock();
    print_missing_sources_to(&summary.merge.components_without_prop_source, &mut stdout);
    print_summary_to(summary, &mut stdout);
}

pub fn print_unknown_components_to<W: Write>(names: &[String], writer: &mut W) {
    for name in names {
        let _ = writeln!(
            writer,
            "{} unknown component \"{}\" in {}",
            "warning:".bold().yellow(),
            name,
            "--components".cyan()
        );
    }
}

/// One line per locale file that could not be written.
pub fn print_flush_failures_to<W: Write>(failures: &[FlushFailure], writer: &mut W) {
    for failure in failures {
        let _ = writeln!(
            writer,
            "{} failed to write {}: {}",
            "error:".bold().red(),
            failure.path.display(),
            failure.error
        );
    }
}

pub fn print_missing_sources_to<W: Write>(names: &BTreeSet<String>, writer: &mut W) {
    if names.is_empty() {
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} component(s) have props without a source:",
        "note:".bold().cyan(),
        names.len()
    );
    for name in names {
        let _ = writeln!(writer, "  - {}", name);
    }
}

pub fn print_summary_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let components = format!(
        "{} {}",
        summary.components_processed,
        if summary.components_processed == 1 {
            "component"
        } else {
            "components"
        }
    );
    let placeholders = summary.merge.placeholders_inserted;
    let failed = summary.flush.failures.len();

    if failed == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Processed {}, wrote {} locale file(s), added {} placeholder(s)",
                components, summary.flush.written, placeholders
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} Processed {}, wrote {} locale file(s), added {} placeholder(s), {}",
            FAILURE_MARK.red(),
            components,
            summary.flush.written,
            placeholders,
            format!("{} failed", failed).red()
        );
    }
}
