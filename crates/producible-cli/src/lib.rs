//! Producible CLI library.
//!
//! Exposes the commands, manifest loading and output formatting of the
//! `producible` binary so they can be tested without spawning a process.

#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unnecessary_wraps)]

pub mod commands;
pub mod formatters;
pub mod manifest;
pub mod writer;

use producible_core::Error;
use producible_core::cli::ExitCode;

/// Maps a failed command to its exit code.
///
/// Unreadable or malformed input is `INVALID_INPUT`, filesystem failures are
/// `IO_ERROR`. Anything else counts as a failed run.
///
/// # Examples
///
/// ```
/// use producible_cli::exit_code_for;
/// use producible_core::Error;
/// use producible_core::cli::ExitCode;
///
/// let err = anyhow::Error::new(Error::ConfigError { message: "bad".into() });
/// assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
/// ```
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<Error>() {
        Some(Error::ConfigError { .. } | Error::InvalidArgument(_)) => ExitCode::INVALID_INPUT,
        Some(Error::IoError { .. }) => ExitCode::IO_ERROR,
        _ => ExitCode::DIAGNOSTICS,
    }
}
