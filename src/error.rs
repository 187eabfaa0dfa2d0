//! Unified application error type.
//!
//! Every stage (enumerate, open, loop) returns `AppResult` so the binary's
//! entry point is the single place that turns a failure into a diagnostic
//! and a non-zero exit. Nothing is retried and nothing is swallowed.

use crate::hex::ParseError;
use crate::port::PortError;
use thiserror::Error;

/// A specialized `Result` type for the whole tool.
pub type AppResult<T> = Result<T, AppError>;

/// Any failure the tool can hit after argument parsing.
#[derive(Debug, Error)]
pub enum AppError {
    /// Enumerating, opening, or writing to a serial device failed.
    #[error("serial port error: {0}")]
    Port(#[from] PortError),

    /// A typed line was not a valid hex byte.
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    /// Reading standard input or writing status text failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
