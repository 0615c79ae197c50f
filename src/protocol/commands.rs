//! # Printer Control Commands
//!
//! This module implements the configuration and print-control half of the
//! command set understood by CSN-A2 class serial thermal printers.
//!
//! ## Protocol Overview
//!
//! Every command is a raw byte sequence with no framing, checksum, or length
//! prefix:
//!
//! - Single byte: `LF`, `HT`, the wake byte `0xFF`
//! - Two bytes: `ESC @`, `DC2 T`
//! - Prefix with parameters: `ESC 7 n1 n2 n3`, `ESC d n`
//!
//! Prefix bytes are sent first, then parameter bytes left to right.
//!
//! ## Validation
//!
//! Commands whose parameters have a restricted range return `Option<Vec<u8>>`.
//! `None` means the input was out of range and nothing must be sent; the
//! caller drops the whole command rather than clamping.

// ============================================================================
// CONTROL BYTES
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most commands begin with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for enlarge mode, reverse printing and Auto Status Back.
pub const GS: u8 = 0x1D;

/// DC2 (Device Control 2) - Vendor command prefix
///
/// Used for print density and the self-test page.
pub const DC2: u8 = 0x12;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// HT (Horizontal Tab) - Advance to next tab position
pub const HT: u8 = 0x09;

/// Wake byte. A sleeping control board wakes on any byte; this is the
/// one the printer documents.
pub const WAKE: u8 = 0xFF;

/// Lowest heating time the print head accepts (units of 10µs).
pub const MIN_HEAT_TIME: u8 = 3;

/// Auto Status Back modes the printer accepts.
pub const ASB_MODES: [u8; 3] = [4, 32, 36];

// ============================================================================
// CONFIGURATION COMMANDS
// ============================================================================

/// # Set Heating Profile (ESC 7 n1 n2 n3)
///
/// Configures the print head's heating parameters.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 7 n1 n2 n3 |
/// | Hex     | 1B 37 n1 n2 n3 |
/// | Decimal | 27 55 n1 n2 n3 |
///
/// ## Parameters
///
/// - `max_dots` (0-255): max heating dots in units of 8 dots, the printer
///   heats `8 * (max_dots + 1)` dots at once. Default 7 (64 dots).
///   More dots draws more peak current but prints faster.
/// - `heat_time` (3-255): heating time in units of 10µs. Default 80 (800µs).
///   Longer is darker but slower; too short may print blank paper.
/// - `interval` (0-255): heating interval in units of 10µs. Default 2 (20µs).
///   Longer is clearer but slower.
///
/// Returns `None` when `heat_time < 3`.
///
/// ## Example
///
/// ```
/// use thermal_serial::protocol::commands;
///
/// assert_eq!(commands::heating_profile(7, 80, 2), Some(vec![0x1B, 0x37, 7, 80, 2]));
/// assert_eq!(commands::heating_profile(7, 2, 2), None);
/// ```
pub fn heating_profile(max_dots: u8, heat_time: u8, interval: u8) -> Option<Vec<u8>> {
    (heat_time >= MIN_HEAT_TIME).then(|| vec![ESC, b'7', max_dots, heat_time, interval])
}

/// Heating preset tuned for fine print: `heating_profile(0x64, 0x64, 0x0A)`.
#[inline]
pub fn fine_print_profile() -> Vec<u8> {
    vec![ESC, b'7', 0x64, 0x64, 0x0A]
}

/// # Set Print Density (DC2 # n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | DC2 # n |
/// | Hex     | 12 23 n |
///
/// - Bits 0-4: density level, density is 50% + 5% * level
/// - Bits 5-7: break time, in units of 250µs
///
/// Use [`density_byte`] to compose `n`.
#[inline]
pub fn density(n: u8) -> Vec<u8> {
    vec![DC2, b'#', n]
}

/// Pack a density level (0-31) and break time (0-7) into the density byte.
///
/// Out-of-range inputs are masked to their bit field.
///
/// ```
/// use thermal_serial::protocol::commands::density_byte;
///
/// assert_eq!(density_byte(15, 2), 0b010_01111);
/// ```
#[inline]
pub const fn density_byte(level: u8, break_time: u8) -> u8 {
    ((break_time & 0x07) << 5) | (level & 0x1F)
}

/// # Sleep After (ESC 8 n)
///
/// Sets how many seconds the control board waits after printing before it
/// enters sleep mode.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 8 n |
/// | Hex     | 1B 38 n |
///
/// `seconds == 0` means "never sleep" on the device, which this driver does
/// not encode: it returns `None`.
pub fn sleep_after(seconds: u8) -> Option<Vec<u8>> {
    (seconds > 0).then(|| vec![ESC, b'8', seconds])
}

/// # Wake
///
/// A single `0xFF`. The board needs a settling delay after this byte before
/// it will accept further commands; the session enforces it.
#[inline]
pub fn wake() -> Vec<u8> {
    vec![WAKE]
}

// ============================================================================
// PRINT / CONTROL COMMANDS
// ============================================================================

/// Horizontal tab (HT)
#[inline]
pub fn tab() -> Vec<u8> {
    vec![HT]
}

/// # Set Online / Offline (ESC = n)
///
/// | Format | Bytes |
/// |--------|-------|
/// | Online | 1B 3D 01 |
/// | Offline | 1B 3D 00 |
///
/// An offline printer ignores everything except this command.
pub fn online(on: bool) -> Vec<u8> {
    vec![ESC, b'=', on as u8]
}

/// Print the line buffer and feed one line (LF)
#[inline]
pub fn line_feed() -> Vec<u8> {
    vec![LF]
}

/// # Feed Lines (ESC d n)
///
/// Prints the line buffer and feeds `n` lines.
///
/// ```
/// use thermal_serial::protocol::commands;
///
/// assert_eq!(commands::line_feeds(3), vec![0x1B, 0x64, 3]);
/// ```
#[inline]
pub fn line_feeds(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Feed Dot Rows (ESC J n)
///
/// Feeds paper by `n` dot rows (one row is 0.125mm at 203 DPI).
#[inline]
pub fn dot_feed(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// # Initialize Printer (ESC @)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - User-defined characters are deleted
/// - Every parameter set by this module and [`text`](super::text) returns
///   to its default
/// - Printer returns to standard mode
///
/// ```
/// use thermal_serial::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Transmit Status To Host (ESC v 0)
///
/// The printer answers with an ASCII report `P<paper>V<voltage>T<degree>`,
/// e.g. `P1V72T30` (paper ready, 7.2V, 30°C). The reply is not read or
/// parsed here.
#[inline]
pub fn request_status() -> Vec<u8> {
    vec![ESC, b'v', 0]
}

/// # Auto Status Back (GS a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS a n |
/// | Hex     | 1D 61 n |
///
/// Only the mode codes in [`ASB_MODES`] (4, 32, 36) are accepted.
///
/// ```
/// use thermal_serial::protocol::commands;
///
/// assert_eq!(commands::auto_status_back(4), Some(vec![0x1D, 0x61, 0x04]));
/// assert_eq!(commands::auto_status_back(5), None);
/// ```
pub fn auto_status_back(n: u8) -> Option<Vec<u8>> {
    ASB_MODES.contains(&n).then(|| vec![GS, b'a', n])
}

/// Print the built-in self-test page (DC2 T)
#[inline]
pub fn test_page() -> Vec<u8> {
    vec![DC2, b'T']
}

// ============================================================================
// TESTS
// ============================================================================
