//! Port-specific error types.
//!
//! Errors raised while enumerating, opening, or writing to a serial device,
//! kept separate from the application-level error type.

use thiserror::Error;

/// Errors that can occur during serial port operations.
#[derive(Debug, Error)]
pub enum PortError {
    /// The named serial device was not found on the system.
    #[error("serial device not found: {0}")]
    NotFound(String),

    /// An I/O error occurred while writing to the device.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The host rejected the framing configuration.
    #[error("configuration rejected: {0}")]
    Config(String),

    /// A serialport-specific error occurred.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
}

impl PortError {
    /// Create a `NotFound` error from a device name.
    pub fn not_found(device: impl Into<String>) -> Self {
        Self::NotFound(device.into())
    }

    /// Create a `Config` error from a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
