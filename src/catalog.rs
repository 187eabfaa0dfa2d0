//! Device catalog: enumeration of the host's serial ports.
//!
//! The `DeviceCatalog` trait abstracts over "ask the host what serial
//! devices exist" so the listing path can be tested against a fake catalog.

use crate::port::PortError;
use serialport::{SerialPortInfo, SerialPortType};
use std::fmt;

/// One discoverable serial device: its name plus any host-supplied
/// description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDescriptor {
    /// Device name/path, e.g. `COM3` or `/dev/ttyUSB0`.
    pub name: String,
    /// Human-readable description, when the host provides one.
    pub description: Option<String>,
}

impl PortDescriptor {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
        }
    }
}

impl fmt::Display for PortDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{} - {}", self.name, desc),
            None => write!(f, "{}", self.name),
        }
    }
}

impl From<SerialPortInfo> for PortDescriptor {
    fn from(info: SerialPortInfo) -> Self {
        let description = match info.port_type {
            SerialPortType::UsbPort(usb) => usb
                .product
                .or(usb.manufacturer)
                .or_else(|| Some("USB Serial Port".to_string())),
            SerialPortType::BluetoothPort => Some("Bluetooth Serial Port".to_string()),
            SerialPortType::PciPort => Some("PCI Serial Port".to_string()),
            SerialPortType::Unknown => None,
        };

        Self {
            name: info.port_name,
            description,
        }
    }
}

/// Trait for querying the host for available serial devices.
///
/// Order is whatever the host API returns; no sorting is imposed.
pub trait DeviceCatalog {
    /// Enumerate the currently available serial devices.
    fn enumerate(&self) -> Result<Vec<PortDescriptor>, PortError>;
}

/// The real catalog, backed by `serialport::available_ports`.
#[derive(Debug, Default)]
pub struct SystemCatalog;

impl DeviceCatalog for SystemCatalog {
    fn enumerate(&self) -> Result<Vec<PortDescriptor>, PortError> {
        let ports = serialport::available_ports()?;
        Ok(ports.into_iter().map(PortDescriptor::from).collect())
    }
}
