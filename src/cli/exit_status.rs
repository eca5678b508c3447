use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for batch
/// rewrite tools.
///
/// - `Success` (0): every discovered catalog was rewritten
/// - `Failure` (1): a per-file fetch/parse/write step failed
/// - `Error` (2): bad invocation; no file was modified
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every discovered catalog was rewritten.
    Success,
    /// A per-file fetch/parse/write step failed.
    Failure,
    /// Bad invocation; no file was modified.
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
