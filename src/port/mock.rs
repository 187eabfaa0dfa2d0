//! Mock byte sink for testing.
//!
//! Records every byte written and can be told to fail, so the transmit loop
//! can be exercised without real hardware.

use super::error::PortError;
use super::traits::ByteSink;
use std::sync::{Arc, Mutex};

/// Inner state of the mock sink, protected by a mutex for interior mutability.
#[derive(Debug, Default)]
struct MockSinkState {
    /// Every byte written, in order.
    written: Vec<u8>,
    /// Whether the next write should fail.
    should_fail: bool,
}

/// Mock byte sink implementation for testing.
///
/// Clones share the same state, so a test can hand one handle to the
/// transmit loop and inspect the write log through another.
///
/// # Example
/// ```
/// use serialtest::port::{ByteSink, MockSink};
///
/// let mut sink = MockSink::new("MOCK0");
/// sink.write_byte(0x1F).unwrap();
/// assert_eq!(sink.written(), vec![0x1F]);
/// ```
#[derive(Clone)]
pub struct MockSink {
    /// The device name/identifier.
    name: String,
    /// Shared state for inspection across clones.
    state: Arc<Mutex<MockSinkState>>,
}

impl MockSink {
    /// Create a new mock sink with the given device name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: Arc::new(Mutex::new(MockSinkState::default())),
        }
    }

    /// Make the next write fail with an I/O error.
    pub fn fail_next_write(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.should_fail = true;
    }

    /// Get a copy of every byte written so far, in order.
    pub fn written(&self) -> Vec<u8> {
        let state = self.state.lock().unwrap();
        state.written.clone()
    }
}

impl ByteSink for MockSink {
    fn write_byte(&mut self, byte: u8) -> Result<(), PortError> {
        let mut state = self.state.lock().unwrap();

        if state.should_fail {
            state.should_fail = false;
            return Err(PortError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "device rejected the write",
            )));
        }

        state.written.push(byte);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for MockSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSink")
            .field("name", &self.name)
            .field("written", &self.written().len())
            .finish()
    }
}
