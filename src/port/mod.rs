//! Port abstraction layer for serial transmission.
//!
//! Provides the framing configuration types, the `ByteSink` trait, and both
//! the real `serialport`-backed implementation and a mock for tests.

pub mod error;
pub mod mock;
pub mod sync_port;
pub mod traits;

pub use error::PortError;
pub use mock::MockSink;
pub use sync_port::SyncSerialPort;
pub use traits::{ByteSink, DataBits, FlowControl, Framing, Parity, StopBits};
