//! serialtest library
//!
//! Core functionality for the `serialtest` binary: an interactive tool that
//! lists the host's serial devices or opens one with fixed framing and
//! transmits single bytes typed as hex.
//!
//! # Modules
//!
//! - `app`: invocation configuration, listing path, and the transmit loop
//! - `catalog`: device-catalog trait and the host-backed implementation
//! - `error`: unified error handling
//! - `hex`: hex byte parsing
//! - `port`: port abstraction layer (framing types, byte sink, mock)

pub mod app;
pub mod catalog;
pub mod error;
pub mod hex;
pub mod port;

// Re-export commonly used types for convenience
pub use app::{list_ports, run, session_framing, transmit_loop, Invocation, DEFAULT_DEVICE};
pub use catalog::{DeviceCatalog, PortDescriptor, SystemCatalog};
pub use error::{AppError, AppResult};
pub use hex::{parse_hex_byte, ParseError};
pub use port::{
    ByteSink, DataBits, FlowControl, Framing, MockSink, Parity, PortError, StopBits,
    SyncSerialPort,
};
