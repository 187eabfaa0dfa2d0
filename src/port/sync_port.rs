//! Real serial port implementation.
//!
//! Wraps the `serialport` crate behind the `ByteSink` trait so the transmit
//! loop can also run against in-memory sinks in tests.

use super::error::PortError;
use super::traits::{ByteSink, Framing};
use std::io::Write;

/// An open serial connection backed by `serialport::SerialPort`.
///
/// Opened once with a fixed framing configuration and never reconfigured;
/// the host handle is released on drop.
pub struct SyncSerialPort {
    /// The underlying serial port implementation.
    port: Box<dyn serialport::SerialPort>,
    /// The device name/path for identification.
    name: String,
}

impl SyncSerialPort {
    /// Open a serial device with the given framing.
    ///
    /// # Arguments
    /// * `device` - The system path to the serial device (e.g., "/dev/ttyUSB0" or "COM3")
    /// * `framing` - Framing parameters for the connection
    ///
    /// No timeout is configured; writes block until the host accepts the data.
    pub fn open(device: &str, framing: &Framing) -> Result<Self, PortError> {
        let port = serialport::new(device, framing.baud_rate)
            .data_bits(framing.data_bits.into())
            .parity(framing.parity.into())
            .stop_bits(framing.stop_bits.into())
            .flow_control(framing.flow_control.into())
            .open()
            .map_err(|e| match e.kind() {
                serialport::ErrorKind::NoDevice => PortError::not_found(device),
                serialport::ErrorKind::InvalidInput => PortError::config(e.to_string()),
                _ => PortError::Serial(e),
            })?;

        Ok(Self {
            port,
            name: device.to_string(),
        })
    }
}

impl ByteSink for SyncSerialPort {
    fn write_byte(&mut self, byte: u8) -> Result<(), PortError> {
        self.port.write_all(&[byte]).map_err(PortError::Io)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for SyncSerialPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncSerialPort")
            .field("name", &self.name)
            .field("baud_rate", &self.port.baud_rate())
            .finish()
    }
}
