//! # Serial TTY Transport
//!
//! This module provides communication with the printer over an asynchronous
//! serial line: a USB-serial adapter (`/dev/ttyUSB0`), an on-board UART
//! (`/dev/serial0`, `/dev/ttyAMA0`) or any other port wired to the printer's
//! RX/TX lines.
//!
//! ## Wiring
//!
//! ```text
//!  host TX ──────────► printer RX
//!  host RX ◄────────── printer TX   (only needed for status replies)
//!  GND ─────────────── GND
//! ```
//!
//! ## Port Settings
//!
//! The port is opened through the `serialport` crate in raw 8N1 mode with no
//! flow control, so 0x11/0x13 are ordinary parameter bytes and binary data
//! is transmitted without modification. Any baud rate the driver accepts
//! can be requested.
//!
//! Every write is followed by a flush, so a command has left the host when
//! the write returns. Reads give up after [`READ_TIMEOUT`] of silence.

use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use super::ByteTransport;
use crate::error::PrinterError;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// How long a read waits for the printer before giving up
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// # Serial Printer Transport
///
/// Owns an open serial port configured for the printer. The port is closed
/// when the transport is dropped.
///
/// ## Example
///
/// ```no_run
/// use thermal_serial::transport::{ByteTransport, SerialTransport};
/// use thermal_serial::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", 19200)?;
/// transport.write_bytes(&commands::init())?;
///
/// # Ok::<(), thermal_serial::PrinterError>(())
/// ```
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    device: String,
}

impl SerialTransport {
    /// Open a serial device and configure it for the printer.
    ///
    /// ## Parameters
    ///
    /// - `device`: Path to the port bound to the printer's RX/TX lines
    /// - `baud`: Line speed
    ///
    /// ## Errors
    ///
    /// Returns [`PrinterError::Transport`] if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout group)
    /// - The driver refuses the baud rate or line settings
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, PrinterError> {
        let device = device.as_ref().to_string_lossy().into_owned();

        let port = serialport::new(device.as_str(), baud)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|e| PrinterError::Transport(format!("Failed to open {}: {}", device, e)))?;

        info!("opened {} at {} baud", device, baud);

        Ok(Self { port, device })
    }
}

impl ByteTransport for SerialTransport {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PrinterError> {
        if bytes.is_empty() {
            return Ok(());
        }

        self.port
            .write_all(bytes)
            .map_err(|e| PrinterError::Transport(format!("Write failed: {}", e)))?;
        self.port
            .flush()
            .map_err(|e| PrinterError::Transport(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}

impl Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.port.read(buf)
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        debug!("closing {}", self.device);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn open_error(device: &str, baud: u32) -> String {
        match SerialTransport::open(device, baud) {
            Err(PrinterError::Transport(msg)) => msg,
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("opened a device that does not exist"),
        }
    }

    #[test]
    fn test_default_device() {
        assert_eq!(DEFAULT_DEVICE, "/dev/ttyUSB0");
    }

    #[test]
    fn test_open_missing_device() {
        let msg = open_error("/dev/thermal-serial-missing", 19200);
        assert!(msg.contains("/dev/thermal-serial-missing"));
    }

    #[test]
    fn test_high_baud_rates_reach_the_device() {
        // Only the missing device can fail here, never the speed
        for baud in [230_400, 460_800, 921_600] {
            let msg = open_error("/dev/thermal-serial-missing", baud);
            assert!(msg.starts_with("Failed to open /dev/thermal-serial-missing"));
        }
    }

    // Note: Writing requires a real port; run the CLI against hardware for that.
}
