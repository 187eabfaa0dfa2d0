//! Top-level flow: invocation configuration, port listing, and the
//! interactive transmit loop.
//!
//! The listing path and the loop are generic over the `DeviceCatalog` and
//! `ByteSink` capabilities plus caller-supplied reader/writer handles, so
//! both can run against in-memory fakes in tests. `run` wires them to the
//! real host: stdin, stdout, `SystemCatalog`, and `SyncSerialPort`.

use crate::catalog::{DeviceCatalog, SystemCatalog};
use crate::error::AppResult;
use crate::hex::parse_hex_byte;
use crate::port::{ByteSink, DataBits, FlowControl, Framing, Parity, StopBits, SyncSerialPort};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Device used when `--serial` is not given.
pub const DEFAULT_DEVICE: &str = "COM7";

/// Input line that ends the session instead of being parsed as data.
const QUIT: &str = "quit";

/// What one process run should do, resolved from the command line.
///
/// The two paths are mutually exclusive: a run either lists devices and
/// exits, or it transmits bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// List available devices and exit instead of transmitting.
    pub list: bool,
    /// Explicit device name; `None` means "use the default".
    pub device: Option<String>,
}

impl Invocation {
    /// Resolve the effective device name.
    ///
    /// The default is a parameter rather than baked in, so callers (and
    /// tests) can supply their own.
    pub fn device_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.device.as_deref().unwrap_or(default)
    }
}

/// The fixed framing every transmit session uses: 125000 baud, 8 data bits,
/// even parity, one stop bit, no flow control.
pub fn session_framing() -> Framing {
    Framing {
        baud_rate: 125_000,
        data_bits: DataBits::Eight,
        parity: Parity::Even,
        stop_bits: StopBits::One,
        flow_control: FlowControl::None,
    }
}

/// Print every device the catalog reports, one line each, after a fixed
/// header. Zero devices prints only the header.
pub fn list_ports<W: Write>(catalog: &impl DeviceCatalog, mut out: W) -> AppResult<()> {
    writeln!(out, "Serial ports found:")?;

    let ports = catalog.enumerate()?;
    debug!(count = ports.len(), "enumerated serial devices");
    for port in ports {
        writeln!(out, "{}", port)?;
    }

    Ok(())
}

/// Read lines, parse each as a hex byte, and write it to the sink.
///
/// Returns `Ok(())` only when the user types `quit` (exact match, case
/// sensitive). Any parse or write failure ends the session immediately;
/// there is no skip-and-continue. Input ending before `quit` is an error.
pub fn transmit_loop<R: BufRead, S: ByteSink>(input: R, sink: &mut S) -> AppResult<()> {
    for line in input.lines() {
        let line = line?;

        if line == QUIT {
            debug!(device = sink.name(), "quit requested, ending session");
            return Ok(());
        }

        let byte = parse_hex_byte(&line)?;
        sink.write_byte(byte)?;
        debug!(byte, "transmitted one byte");
    }

    Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended before quit").into())
}

/// Run one invocation against the real host.
pub fn run(invocation: &Invocation) -> AppResult<()> {
    if invocation.list {
        return list_ports(&SystemCatalog, io::stdout().lock());
    }

    println!("Serial port test.");

    let device = invocation.device_or(DEFAULT_DEVICE);
    let framing = session_framing();
    let mut port = SyncSerialPort::open(device, &framing)?;
    info!(device, baud = framing.baud_rate, "serial device opened");

    println!("Enter hex bytes.");
    println!("Type quit to exit.");

    transmit_loop(io::stdin().lock(), &mut port)
}
