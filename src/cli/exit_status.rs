use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): report written, or usage printed
/// - `Failure` (1): the report could not be written
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report written, or usage printed.
    Success,
    /// The report could not be written.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
