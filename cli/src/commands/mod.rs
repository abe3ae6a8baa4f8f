//! Command implementations

pub mod config;
pub mod download;
pub mod editor;
pub mod install;
pub mod probe;
pub mod run;
pub mod version;

use std::process::{ExitCode, ExitStatus};

/// Map a child's exit status onto this process's exit code.
///
/// Codes outside `1..=255` (and signal deaths) collapse to 1.
#[must_use]
pub fn exit_code_for(status: ExitStatus) -> ExitCode {
    if status.success() {
        return ExitCode::SUCCESS;
    }
    status
        .code()
        .and_then(|c| u8::try_from(c).ok())
        .filter(|c| *c != 0)
        .map_or(ExitCode::FAILURE, ExitCode::from)
}
