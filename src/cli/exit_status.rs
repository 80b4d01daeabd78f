use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): generation completed (per-file write failures included)
/// - `Error` (2): generation aborted (config, manifest, template or extraction failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Generation completed.
    Success,
    /// Generation aborted by an unhandled failure.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
