//! # Printer Session
//!
//! [`ThermalPrinter`] owns the transport to one printer and exposes every
//! command in [`protocol`](crate::protocol) as a method that writes straight
//! through. Nothing is buffered or queued.
//!
//! ## Outcomes
//!
//! Every command method returns `Result<Outcome, PrinterError>`:
//!
//! - `Ok(Outcome::Sent)`: the bytes were written
//! - `Ok(Outcome::Rejected)`: a parameter was out of range and nothing was
//!   written
//! - `Err(_)`: the transport failed
//!
//! Rejection is never an error, so ignoring the outcome reproduces the
//! printer's fire-and-forget contract exactly.
//!
//! ## Device State
//!
//! The printer's online/offline and sleep/awake modes are not tracked. The
//! caller is responsible for issuing commands that make sense for the mode
//! the printer is in: wake a sleeping printer before anything else, and
//! bring an offline printer back online before printing.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware specifications
//! - [`delay`]: Blocking delay providers for the post-wake pause

pub mod config;
pub mod delay;

pub use config::PrinterConfig;
pub use delay::{Delay, RecordingDelay, ThreadDelay};

use std::path::Path;
use std::time::Duration;

use log::{debug, info, trace};

use crate::error::PrinterError;
use crate::protocol::{
    commands,
    text::{self, AlignMode},
};
use crate::transport::{ByteTransport, SerialTransport};

/// Settling time after the wake byte before the board accepts commands.
///
/// The board documents at least 50ms.
pub const WAKE_DELAY: Duration = Duration::from_millis(100);

/// Result of a command that passed or failed parameter validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Bytes were written to the transport
    Sent,
    /// A parameter was out of range; nothing was written
    Rejected,
}

impl Outcome {
    pub fn is_sent(self) -> bool {
        self == Outcome::Sent
    }
}

/// # Thermal Printer Session
///
/// Exclusive owner of a [`ByteTransport`] for the lifetime of a printer
/// connection. Dropping the session, or calling [`close`](Self::close),
/// releases the transport.
///
/// ## Example
///
/// ```
/// use thermal_serial::printer::{Outcome, RecordingDelay, ThermalPrinter};
/// use thermal_serial::protocol::text::AlignMode;
/// use thermal_serial::transport::MemoryTransport;
///
/// let mut printer = ThermalPrinter::with_delay(MemoryTransport::new(), RecordingDelay::new());
/// printer.wake()?;
/// printer.set_alignment(AlignMode::Middle)?;
/// printer.write_str("HELLO")?;
/// printer.line_feed()?;
/// assert_eq!(printer.set_underline(7)?, Outcome::Rejected);
///
/// let transport = printer.close();
/// assert_eq!(&transport.bytes()[..4], &[0xFF, 0x1B, 0x61, 0x01]);
/// # Ok::<(), thermal_serial::PrinterError>(())
/// ```
pub struct ThermalPrinter<T: ByteTransport, D: Delay = ThreadDelay> {
    transport: T,
    delay: D,
}

impl ThermalPrinter<SerialTransport> {
    /// Open a serial device at `baud` and start a session on it.
    ///
    /// ```no_run
    /// use thermal_serial::printer::ThermalPrinter;
    ///
    /// let mut printer = ThermalPrinter::open("/dev/ttyUSB0", 19200)?;
    /// printer.wake()?;
    /// printer.print_test_page()?;
    /// # Ok::<(), thermal_serial::PrinterError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, PrinterError> {
        Ok(Self::new(SerialTransport::open(device, baud)?))
    }
}

impl<T: ByteTransport> ThermalPrinter<T> {
    /// Start a session on an already opened transport.
    pub fn new(transport: T) -> Self {
        Self::with_delay(transport, ThreadDelay)
    }
}

impl<T: ByteTransport, D: Delay> ThermalPrinter<T, D> {
    /// Start a session with a custom delay provider.
    pub fn with_delay(transport: T, delay: D) -> Self {
        Self { transport, delay }
    }

    /// End the session and hand the transport back.
    pub fn close(self) -> T {
        info!("closing printer session");
        self.transport
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutable access, e.g. to read a status reply from the device.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    // ========== Emission ==========

    fn send(&mut self, bytes: &[u8]) -> Result<Outcome, PrinterError> {
        trace!("send {:02X?}", bytes);
        self.transport.write_bytes(bytes)?;
        Ok(Outcome::Sent)
    }

    fn send_checked(
        &mut self,
        command: &str,
        bytes: Option<Vec<u8>>,
    ) -> Result<Outcome, PrinterError> {
        match bytes {
            Some(bytes) => self.send(&bytes),
            None => {
                debug!("{}: parameter out of range, nothing sent", command);
                Ok(Outcome::Rejected)
            }
        }
    }

    // ========== Configuration ==========

    /// Heating dots, heating time and heating interval.
    /// Rejected when `heat_time < 3`.
    pub fn set_heating_profile(
        &mut self,
        max_dots: u8,
        heat_time: u8,
        interval: u8,
    ) -> Result<Outcome, PrinterError> {
        self.send_checked(
            "set_heating_profile",
            commands::heating_profile(max_dots, heat_time, interval),
        )
    }

    /// Heating preset for fine print.
    pub fn fine_print_profile(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&commands::fine_print_profile())
    }

    /// Density byte; see [`commands::density_byte`].
    pub fn set_density(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send(&commands::density(n))
    }

    /// Sleep `seconds` after printing finishes. Rejected for 0.
    pub fn sleep_after(&mut self, seconds: u8) -> Result<Outcome, PrinterError> {
        self.send_checked("sleep_after", commands::sleep_after(seconds))
    }

    /// Send the wake byte, then block for [`WAKE_DELAY`] so the next command
    /// is not lost while the board powers up.
    pub fn wake(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&commands::wake())?;
        self.delay.delay(WAKE_DELAY);
        Ok(Outcome::Sent)
    }

    // ========== Layout ==========

    pub fn default_line_spacing(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&text::default_line_spacing())
    }

    /// Line spacing in dots.
    pub fn set_line_spacing(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send(&text::line_spacing(n))
    }

    pub fn set_alignment(&mut self, mode: AlignMode) -> Result<Outcome, PrinterError> {
        self.send(&text::align(mode))
    }

    /// Alignment from a raw code; rejected unless 0, 1 or 2.
    pub fn set_alignment_code(&mut self, code: u8) -> Result<Outcome, PrinterError> {
        self.send_checked("set_alignment", text::align_code(code))
    }

    /// Left margin in characters, 0-47.
    pub fn set_left_margin(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send_checked("set_left_margin", text::left_margin(n))
    }

    // ========== Character Style ==========

    /// Print mode bitmask; see [`text::StyleFlags`].
    pub fn set_style_flags(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send(&text::style_flags(n))
    }

    /// Enlarge byte; see [`text::enlarge_byte`].
    pub fn set_enlarge_mode(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send(&text::enlarge(n))
    }

    pub fn set_double_width(&mut self, on: bool) -> Result<Outcome, PrinterError> {
        self.send(&text::double_width(on))
    }

    pub fn set_bold(&mut self, on: bool) -> Result<Outcome, PrinterError> {
        self.send(&text::bold(on))
    }

    /// 0 none, 1 thin, 2 thick. Anything else is rejected.
    pub fn set_underline(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send_checked("set_underline", text::underline(n))
    }

    pub fn set_updown(&mut self, on: bool) -> Result<Outcome, PrinterError> {
        self.send(&text::updown(on))
    }

    pub fn set_reverse(&mut self, on: bool) -> Result<Outcome, PrinterError> {
        self.send(&text::reverse(on))
    }

    /// National character set 0-13; see [`text::CharacterSet`].
    pub fn set_character_set(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send_checked("set_character_set", text::character_set(n))
    }

    /// 0 for PC437, 1 for PC850.
    pub fn set_code_table(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send_checked("set_code_table", text::code_table(n))
    }

    // ========== Print / Control ==========

    pub fn tab(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&commands::tab())
    }

    pub fn set_online(&mut self, on: bool) -> Result<Outcome, PrinterError> {
        self.send(&commands::online(on))
    }

    pub fn online(&mut self) -> Result<Outcome, PrinterError> {
        self.set_online(true)
    }

    pub fn offline(&mut self) -> Result<Outcome, PrinterError> {
        self.set_online(false)
    }

    pub fn line_feed(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&commands::line_feed())
    }

    pub fn line_feeds(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send(&commands::line_feeds(n))
    }

    pub fn dot_feed(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send(&commands::dot_feed(n))
    }

    /// Restore factory defaults: clears the buffer, deletes user-defined
    /// characters and resets every setting above.
    pub fn reset(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&commands::init())
    }

    /// Ask the printer to report paper, voltage and temperature. The reply
    /// is left unread on the transport.
    pub fn request_status(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&commands::request_status())
    }

    /// Auto Status Back mode; rejected unless 4, 32 or 36.
    pub fn set_auto_status_back(&mut self, n: u8) -> Result<Outcome, PrinterError> {
        self.send_checked("set_auto_status_back", commands::auto_status_back(n))
    }

    pub fn print_test_page(&mut self) -> Result<Outcome, PrinterError> {
        self.send(&commands::test_page())
    }

    /// Raw character data, passed through unescaped. Bytes that collide with
    /// control prefixes will be interpreted as commands.
    pub fn write_text(&mut self, bytes: &[u8]) -> Result<Outcome, PrinterError> {
        self.send(bytes)
    }

    pub fn write_str(&mut self, s: &str) -> Result<Outcome, PrinterError> {
        self.write_text(s.as_bytes())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MemoryTransport;

    type TestPrinter = ThermalPrinter<MemoryTransport, RecordingDelay>;

    fn printer() -> TestPrinter {
        ThermalPrinter::with_delay(MemoryTransport::new(), RecordingDelay::new())
    }

    #[test]
    fn test_wake_sends_one_byte_and_waits() {
        let mut p = printer();
        assert_eq!(p.wake().unwrap(), Outcome::Sent);
        assert_eq!(p.transport().bytes(), &[0xFF]);
        assert_eq!(p.delay().calls(), &[WAKE_DELAY]);
        assert_eq!(WAKE_DELAY, Duration::from_millis(100));
    }

    #[test]
    fn test_only_wake_delays() {
        let mut p = printer();
        p.reset().unwrap();
        p.set_bold(true).unwrap();
        p.line_feeds(2).unwrap();
        assert!(p.delay().calls().is_empty());
    }

    #[test]
    fn test_rejected_commands_write_nothing() {
        let mut p = printer();
        assert_eq!(p.set_heating_profile(7, 2, 2).unwrap(), Outcome::Rejected);
        assert_eq!(p.sleep_after(0).unwrap(), Outcome::Rejected);
        assert_eq!(p.set_alignment_code(3).unwrap(), Outcome::Rejected);
        assert_eq!(p.set_left_margin(48).unwrap(), Outcome::Rejected);
        assert_eq!(p.set_underline(3).unwrap(), Outcome::Rejected);
        assert_eq!(p.set_character_set(14).unwrap(), Outcome::Rejected);
        assert_eq!(p.set_code_table(2).unwrap(), Outcome::Rejected);
        assert_eq!(p.set_auto_status_back(5).unwrap(), Outcome::Rejected);
        assert!(p.transport().bytes().is_empty());
        assert_eq!(p.transport().writes(), 0);
    }

    #[test]
    fn test_each_command_is_one_write() {
        let mut p = printer();
        p.set_heating_profile(7, 80, 2).unwrap();
        p.set_alignment(AlignMode::Right).unwrap();
        assert_eq!(p.transport().writes(), 2);
        assert_eq!(
            p.transport().bytes(),
            &[0x1B, 0x37, 7, 80, 2, 0x1B, 0x61, 2]
        );
    }

    #[test]
    fn test_online_offline_helpers() {
        let mut p = printer();
        p.offline().unwrap();
        p.online().unwrap();
        assert_eq!(
            p.transport().bytes(),
            &[0x1B, 0x3D, 0x00, 0x1B, 0x3D, 0x01]
        );
    }

    #[test]
    fn test_write_str_passes_through() {
        let mut p = printer();
        p.write_str("A\tB").unwrap();
        assert_eq!(p.transport().bytes(), b"A\tB");
    }

    #[test]
    fn test_outcome_is_sent() {
        assert!(Outcome::Sent.is_sent());
        assert!(!Outcome::Rejected.is_sent());
    }

    #[test]
    fn test_close_returns_transport() {
        let mut p = printer();
        p.tab().unwrap();
        let transport = p.close();
        assert_eq!(transport.into_bytes(), vec![0x09]);
    }
}
