use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and made the requested changes
/// - `Failure` (1): Command completed but applied nothing (all files skipped)
/// - `Error` (2): Command failed due to internal error (parse error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and made the requested changes.
    Success,
    /// Command completed but applied nothing (all files skipped).
    Failure,
    /// Command failed due to internal error (parse error, config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
