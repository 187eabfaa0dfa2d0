//! End-to-end session tests for the serialtest library.
//!
//! Drives the transmit loop and the listing path through the public API
//! with in-memory input, a mock sink, and a fake catalog, covering:
//! - byte transmission for valid hex input, in order
//! - the `quit` exit word
//! - fail-fast behavior on parse errors, write errors, and early EOF
//! - listing output shape

use pretty_assertions::assert_eq;
use serialtest::{
    list_ports, transmit_loop, AppError, DeviceCatalog, MockSink, ParseError, PortDescriptor,
    PortError,
};

/// Catalog that reports a fixed set of devices, standing in for the host.
struct FixedCatalog(Vec<PortDescriptor>);

impl DeviceCatalog for FixedCatalog {
    fn enumerate(&self) -> Result<Vec<PortDescriptor>, PortError> {
        Ok(self.0.clone())
    }
}

// ============================================================================
// Transmit session tests
// ============================================================================

#[test]
fn test_single_byte_then_quit() {
    let mut sink = MockSink::new("COM3");
    let input = "1F\nquit\n".as_bytes();

    transmit_loop(input, &mut sink).expect("session should end cleanly on quit");

    assert_eq!(sink.written(), vec![0x1F]);
}

#[test]
fn test_bytes_are_written_in_input_order() {
    let mut sink = MockSink::new("COM3");
    let input = "00\na5\nFF\n7\nquit\n".as_bytes();

    transmit_loop(input, &mut sink).unwrap();

    assert_eq!(sink.written(), vec![0x00, 0xA5, 0xFF, 0x07]);
}

#[test]
fn test_quit_with_no_prior_bytes() {
    let mut sink = MockSink::new("COM3");

    transmit_loop("quit\n".as_bytes(), &mut sink).unwrap();

    assert_eq!(sink.written(), Vec::<u8>::new());
}

#[test]
fn test_windows_line_endings_accepted() {
    let mut sink = MockSink::new("COM3");
    let input = "1F\r\nquit\r\n".as_bytes();

    transmit_loop(input, &mut sink).unwrap();

    assert_eq!(sink.written(), vec![0x1F]);
}

// ============================================================================
// Failure behavior: one bad entry ends the session
// ============================================================================

#[test]
fn test_non_hex_input_fails_without_writing() {
    let mut sink = MockSink::new("COM7");
    let input = "zz\n".as_bytes();

    let result = transmit_loop(input, &mut sink);

    assert!(matches!(
        result,
        Err(AppError::Parse(ParseError::InvalidDigit(_)))
    ));
    assert_eq!(sink.written(), Vec::<u8>::new());
}

#[test]
fn test_parse_error_stops_session_after_earlier_writes() {
    let mut sink = MockSink::new("COM7");
    let input = "1F\nzz\nAA\nquit\n".as_bytes();

    let result = transmit_loop(input, &mut sink);

    // The line after the bad one is never reached.
    assert!(matches!(result, Err(AppError::Parse(_))));
    assert_eq!(sink.written(), vec![0x1F]);
}

#[test]
fn test_value_over_one_byte_is_rejected() {
    let mut sink = MockSink::new("COM7");
    let input = "100\nquit\n".as_bytes();

    let result = transmit_loop(input, &mut sink);

    assert!(matches!(
        result,
        Err(AppError::Parse(ParseError::OutOfRange(_)))
    ));
    assert_eq!(sink.written(), Vec::<u8>::new());
}

#[test]
fn test_empty_line_is_rejected() {
    let mut sink = MockSink::new("COM7");
    let input = "\nquit\n".as_bytes();

    let result = transmit_loop(input, &mut sink);

    assert!(matches!(result, Err(AppError::Parse(ParseError::Empty))));
}

#[test]
fn test_write_failure_ends_session() {
    let mut sink = MockSink::new("COM7");
    sink.fail_next_write();
    let input = "42\nquit\n".as_bytes();

    let result = transmit_loop(input, &mut sink);

    assert!(matches!(result, Err(AppError::Port(PortError::Io(_)))));
    assert_eq!(sink.written(), Vec::<u8>::new());
}

#[test]
fn test_input_ending_before_quit_is_an_error() {
    let mut sink = MockSink::new("COM7");
    let input = "1F\n".as_bytes();

    let result = transmit_loop(input, &mut sink);

    // The byte before the EOF still went out.
    assert!(matches!(result, Err(AppError::Io(_))));
    assert_eq!(sink.written(), vec![0x1F]);
}

// ============================================================================
// Listing tests
// ============================================================================

#[test]
fn test_listing_two_devices() {
    let catalog = FixedCatalog(vec![
        PortDescriptor::new("COM3", Some("USB Serial Port".to_string())),
        PortDescriptor::new("COM5", Some("USB Serial Port".to_string())),
    ]);

    let mut out = Vec::new();
    list_ports(&catalog, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Serial ports found:",
            "COM3 - USB Serial Port",
            "COM5 - USB Serial Port",
        ]
    );
}

#[test]
fn test_listing_preserves_catalog_order() {
    let catalog = FixedCatalog(vec![
        PortDescriptor::new("COM9", None),
        PortDescriptor::new("COM2", None),
    ]);

    let mut out = Vec::new();
    list_ports(&catalog, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Serial ports found:\nCOM9\nCOM2\n"
    );
}
