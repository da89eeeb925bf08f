//! Serial link to the host.
//!
//! The session protocol wants plain blocking reads: a read returns only once
//! all requested bytes have arrived, however long that takes. `serialport`
//! reads are timeout-based, so [`SerialLink`] retries timed-out reads
//! indefinitely and the protocol layer never sees a timeout.

use std::io::{self, Read, Write};

use serialport::SerialPort;

use crate::constants::SERIAL_READ_TIMEOUT;
use crate::error::Result;

/// Blocking serial link for the streaming session protocol.
///
/// Dropping the link closes the port; the driver loop re-opens it for each
/// session.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Open `path` at the given baud rate, 8N1.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(SERIAL_READ_TIMEOUT)
            .open()?;
        log::info!("Opened {path} at {baud_rate} baud");
        Ok(Self { port })
    }
}

impl Read for SerialLink {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.port.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
                other => return other,
            }
        }
    }
}

impl Write for SerialLink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.port.write(buf)
    }

    /// Blocks until all written bytes have been physically transmitted.
    fn flush(&mut self) -> io::Result<()> {
        self.port.flush()
    }
}
