use std::process::ExitCode;

/// Exit status of a `d18n` invocation.
///
/// - `Success` (0): the command did everything it was asked to
/// - `Failure` (1): the command ran but the unit is not in the expected state
///   (compile failed, translations still missing, `init` target already present)
/// - `Error` (2): the command could not run (invalid config, I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
