//! Command-line interface layer.

use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;

pub mod args;
mod exit_status;
pub mod report;
mod run;

/// Run generation and print its report.
///
/// Per-file write failures are reported but still count as success; any
/// other failure is returned as an error.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let summary = run::run(&args)?;
    report::print(&summary);

    Ok(ExitStatus::Success)
}
