//! # Printer Transport Layer
//!
//! This module provides the byte channels commands are written to.
//!
//! ## Available Transports
//!
//! - [`serial`]: Serial TTY (USB-serial adapter, on-board UART) at a fixed baud rate
//! - [`MemoryTransport`]: Records bytes in memory, for tests and dry runs
//!
//! Every transport is write-only from the driver's point of view: there is
//! no acknowledgment and no flow control. A transport that can also read
//! (like [`SerialTransport`]) exposes that through `std::io::Read` for callers
//! that want the raw status reply.

pub mod serial;

pub use serial::SerialTransport;

use crate::error::PrinterError;

/// A half-duplex byte channel to the printer.
pub trait ByteTransport {
    /// Write bytes in order. Returns once they are handed to the device.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PrinterError>;

    /// Write a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), PrinterError> {
        self.write_bytes(&[byte])
    }
}

impl<T: ByteTransport + ?Sized> ByteTransport for &mut T {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PrinterError> {
        (**self).write_bytes(bytes)
    }
}

impl<T: ByteTransport + ?Sized> ByteTransport for Box<T> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PrinterError> {
        (**self).write_bytes(bytes)
    }
}

/// # In-Memory Transport
///
/// Appends every written byte to a buffer. Never fails.
///
/// ## Example
///
/// ```
/// use thermal_serial::transport::{ByteTransport, MemoryTransport};
///
/// let mut transport = MemoryTransport::new();
/// transport.write_bytes(&[0x1B, 0x40])?;
/// transport.write_byte(0x0A)?;
/// assert_eq!(transport.bytes(), &[0x1B, 0x40, 0x0A]);
/// # Ok::<(), thermal_serial::PrinterError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTransport {
    buffer: Vec<u8>,
    writes: usize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of `write_bytes` calls that carried at least one byte.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Drain the recorded bytes, leaving the transport empty.
    pub fn take(&mut self) -> Vec<u8> {
        self.writes = 0;
        std::mem::take(&mut self.buffer)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl ByteTransport for MemoryTransport {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), PrinterError> {
        if !bytes.is_empty() {
            self.buffer.extend_from_slice(bytes);
            self.writes += 1;
        }
        Ok(())
    }
}

/// Render bytes as space-separated uppercase hex, e.g. `1B 40 0A`.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_transport_records_in_order() {
        let mut transport = MemoryTransport::new();
        transport.write_bytes(&[1, 2]).unwrap();
        transport.write_byte(3).unwrap();
        assert_eq!(transport.bytes(), &[1, 2, 3]);
        assert_eq!(transport.writes(), 2);
    }

    #[test]
    fn test_memory_transport_ignores_empty_writes() {
        let mut transport = MemoryTransport::new();
        transport.write_bytes(&[]).unwrap();
        assert!(transport.bytes().is_empty());
        assert_eq!(transport.writes(), 0);
    }

    #[test]
    fn test_memory_transport_take() {
        let mut transport = MemoryTransport::new();
        transport.write_bytes(&[0xAA]).unwrap();
        assert_eq!(transport.take(), vec![0xAA]);
        assert!(transport.bytes().is_empty());
        assert_eq!(transport.writes(), 0);
    }

    fn send_line_feed<T: ByteTransport>(mut transport: T) {
        transport.write_byte(0x0A).unwrap();
    }

    #[test]
    fn test_transport_through_mut_ref() {
        let mut inner = MemoryTransport::new();
        send_line_feed(&mut inner);
        assert_eq!(inner.bytes(), &[0x0A]);
    }

    #[test]
    fn test_boxed_transport() {
        let mut boxed: Box<dyn ByteTransport> = Box::new(MemoryTransport::new());
        boxed.write_byte(0xFF).unwrap();
    }

    #[test]
    fn test_hex_dump() {
        assert_eq!(hex_dump(&[0x1B, 0x40, 0x0A]), "1B 40 0A");
        assert_eq!(hex_dump(&[]), "");
    }
}
