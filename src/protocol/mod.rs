//! # Printer Protocol Implementation
//!
//! This module provides low-level command builders for the control protocol
//! spoken by CSN-A2 class serial thermal printers.
//!
//! Builders are pure functions: they return the exact bytes of one command
//! and never touch a transport. Builders for commands with a restricted
//! parameter range return `Option<Vec<u8>>`, `None` meaning "send nothing".
//!
//! ## Module Structure
//!
//! - [`commands`]: Configuration, feeding, status and control
//! - [`text`]: Line layout and character styles
//!
//! ## Usage Example
//!
//! ```
//! use thermal_serial::protocol::{commands, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::align(text::AlignMode::Middle));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT");
//! data.extend(commands::line_feed());
//! data.extend(text::bold(false));
//! data.extend(commands::line_feeds(3));
//!
//! assert_eq!(&data[..2], &[0x1B, 0x40]);
//! ```

pub mod commands;
pub mod text;
