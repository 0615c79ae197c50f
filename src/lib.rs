//! # thermal-serial - Serial Thermal Printer Driver
//!
//! thermal-serial translates print and configuration operations into the
//! exact byte sequences understood by CSN-A2 class serial thermal receipt
//! printers and sends them over a serial line. It provides:
//!
//! - **Protocol implementation**: Pure command builders with parameter validation
//! - **Session**: An owning printer handle that enforces the post-wake delay
//! - **Transport**: Serial TTY and in-memory byte channels
//! - **Jobs**: JSON command scripts
//!
//! ## Quick Start
//!
//! ```no_run
//! use thermal_serial::{
//!     printer::ThermalPrinter,
//!     protocol::text::AlignMode,
//! };
//!
//! // Open connection to printer
//! let mut printer = ThermalPrinter::open("/dev/ttyUSB0", 19200)?;
//!
//! // Wake it up; this blocks until the printer is ready
//! printer.wake()?;
//!
//! printer.set_alignment(AlignMode::Middle)?;
//! printer.set_bold(true)?;
//! printer.write_str("RECEIPT")?;
//! printer.line_feed()?;
//! printer.set_bold(false)?;
//! printer.line_feeds(3)?;
//!
//! # Ok::<(), thermal_serial::error::PrinterError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Command builders |
//! | [`printer`] | Session, printer configurations, delays |
//! | [`transport`] | Communication backends |
//! | [`job`] | JSON job scripts |
//! | [`error`] | Error types |
//!
//! ## Invalid Parameters
//!
//! Commands with out-of-range parameters are dropped: nothing is written
//! and the method returns [`Outcome::Rejected`]. Only transport failures are
//! errors.

pub mod error;
pub mod job;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use error::PrinterError;
pub use printer::{Outcome, PrinterConfig, ThermalPrinter};
pub use transport::{ByteTransport, MemoryTransport, SerialTransport};
