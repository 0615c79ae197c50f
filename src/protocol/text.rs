//! # Layout and Character Style Commands
//!
//! This module implements line layout and text styling commands.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Mode flags | ESC ! n | Several styles at once (see [`StyleFlags`]) |
//! | Enlarge | GS ! n | Width/height scale |
//! | Double Width | ESC SO / ESC DC4 | 2x horizontal size |
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | None, thin or thick line |
//! | Upside Down | ESC { n | 180° rotation |
//! | Reverse | GS B n | White on black |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Middle aligned            |  MIDDLE TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

use super::commands::{ESC, GS};

/// Widest left margin the printer accepts, in characters.
pub const MAX_LEFT_MARGIN: u8 = 47;

// ============================================================================
// LINE SPACING
// ============================================================================

/// Reset line spacing to the device default of 32 dots (ESC 2)
#[inline]
pub fn default_line_spacing() -> Vec<u8> {
    vec![ESC, b'2']
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the spacing between lines to `n` dots (0-255).
///
/// ```
/// use thermal_serial::protocol::text;
///
/// assert_eq!(text::line_spacing(40), vec![0x1B, 0x33, 40]);
/// ```
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

// ============================================================================
// ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignMode {
    #[default]
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl TryFrom<u8> for AlignMode {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AlignMode::Left),
            1 => Ok(AlignMode::Middle),
            2 => Ok(AlignMode::Right),
            other => Err(other),
        }
    }
}

/// # Set Alignment (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// - `n = 0`: Left (default)
/// - `n = 1`: Middle
/// - `n = 2`: Right
///
/// Takes effect at the start of the next line.
///
/// ```
/// use thermal_serial::protocol::text::{align, AlignMode};
///
/// assert_eq!(align(AlignMode::Middle), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(mode: AlignMode) -> Vec<u8> {
    vec![ESC, b'a', mode as u8]
}

/// Alignment from a raw protocol code. `None` for anything but 0, 1 or 2.
pub fn align_code(code: u8) -> Option<Vec<u8>> {
    AlignMode::try_from(code).ok().map(align)
}

/// # Set Left Margin (ESC B n)
///
/// Leaves `n` characters of blank space at the left of every line.
/// Only 0-47 is accepted.
pub fn left_margin(n: u8) -> Option<Vec<u8>> {
    (n <= MAX_LEFT_MARGIN).then(|| vec![ESC, b'B', n])
}

// ============================================================================
// PRINT MODE FLAGS
// ============================================================================

/// Bit flags for the print mode command (ESC ! n).
///
/// ```
/// use thermal_serial::protocol::text::StyleFlags;
///
/// let flags = StyleFlags::EMPHASIZED | StyleFlags::DOUBLE_HEIGHT;
/// assert_eq!(flags.bits(), 0x18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleFlags(u8);

impl StyleFlags {
    pub const NONE: Self = Self(0);
    pub const REVERSE: Self = Self(0x02);
    pub const UPDOWN: Self = Self(0x04);
    pub const EMPHASIZED: Self = Self(0x08);
    pub const DOUBLE_HEIGHT: Self = Self(0x10);
    pub const DOUBLE_WIDTH: Self = Self(0x20);
    pub const DELETE_LINE: Self = Self(0x40);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for StyleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for StyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// # Select Print Mode (ESC ! n)
///
/// Sets several styles at once from a bitmask; see [`StyleFlags`] for the
/// bit layout. Every value 0-255 is sent as-is.
#[inline]
pub fn style_flags(n: u8) -> Vec<u8> {
    vec![ESC, b'!', n]
}

/// # Enlarge Mode (GS ! n)
///
/// - Bits 0-3: height scale
/// - Bits 4-7: width scale
///
/// Use [`enlarge_byte`] to compose `n`.
#[inline]
pub fn enlarge(n: u8) -> Vec<u8> {
    vec![GS, b'!', n]
}

/// Pack width and height scales (0-15 each) into the enlarge byte.
///
/// ```
/// use thermal_serial::protocol::text::enlarge_byte;
///
/// assert_eq!(enlarge_byte(1, 2), 0x12);
/// ```
#[inline]
pub const fn enlarge_byte(width: u8, height: u8) -> u8 {
    ((width & 0x0F) << 4) | (height & 0x0F)
}

// ============================================================================
// CHARACTER STYLES
// ============================================================================

/// Double width on (ESC SO) or off (ESC DC4).
pub fn double_width(on: bool) -> Vec<u8> {
    if on { vec![ESC, 0x0E] } else { vec![ESC, 0x14] }
}

/// # Bold (ESC E n)
///
/// ```
/// use thermal_serial::protocol::text;
///
/// let mut data = Vec::new();
/// data.extend(text::bold(true));
/// data.extend(b"IMPORTANT");
/// data.extend(text::bold(false));
/// assert_eq!(&data[..3], &[0x1B, 0x45, 0x01]);
/// ```
pub fn bold(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

/// Underline weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    None = 0,
    Thin = 1,
    Thick = 2,
}

/// # Underline (ESC - n)
///
/// `n` is 0 (none), 1 (thin) or 2 (thick); anything else returns `None`.
pub fn underline(n: u8) -> Option<Vec<u8>> {
    (n <= Underline::Thick as u8).then(|| vec![ESC, b'-', n])
}

/// Upside-down printing (ESC { n)
pub fn updown(on: bool) -> Vec<u8> {
    vec![ESC, b'{', on as u8]
}

/// White-on-black printing (GS B n)
pub fn reverse(on: bool) -> Vec<u8> {
    vec![GS, b'B', on as u8]
}

// ============================================================================
// CHARACTER TABLES
// ============================================================================

/// International character sets selectable with ESC R n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterSet {
    #[default]
    Usa = 0,
    France = 1,
    Germany = 2,
    Uk = 3,
    Denmark1 = 4,
    Sweden = 5,
    Italy = 6,
    Spain1 = 7,
    Japan = 8,
    Norway = 9,
    Denmark2 = 10,
    Spain2 = 11,
    LatinAmerica = 12,
    Korea = 13,
}

/// Select an international character set (ESC R n), `n` in 0-13.
pub fn character_set(n: u8) -> Option<Vec<u8>> {
    (n <= CharacterSet::Korea as u8).then(|| vec![ESC, b'R', n])
}

/// Character code tables selectable with ESC t n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTable {
    #[default]
    Pc437 = 0,
    Pc850 = 1,
}

/// Select a character code table (ESC t n): 0 = PC437, 1 = PC850.
pub fn code_table(n: u8) -> Option<Vec<u8>> {
    (n <= CodeTable::Pc850 as u8).then(|| vec![ESC, b't', n])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spacing() {
        assert_eq!(default_line_spacing(), vec![0x1B, 0x32]);
        assert_eq!(line_spacing(0), vec![0x1B, 0x33, 0]);
        assert_eq!(line_spacing(255), vec![0x1B, 0x33, 255]);
    }

    #[test]
    fn test_align_values() {
        assert_eq!(align(AlignMode::Left), vec![0x1B, 0x61, 0]);
        assert_eq!(align(AlignMode::Middle), vec![0x1B, 0x61, 1]);
        assert_eq!(align(AlignMode::Right), vec![0x1B, 0x61, 2]);
    }

    #[test]
    fn test_align_code_rejects_unknown() {
        assert_eq!(align_code(2), Some(vec![0x1B, 0x61, 2]));
        assert_eq!(align_code(3), None);
        assert_eq!(AlignMode::try_from(200), Err(200));
    }

    #[test]
    fn test_left_margin_bounds() {
        assert_eq!(left_margin(0), Some(vec![0x1B, 0x42, 0]));
        assert_eq!(left_margin(47), Some(vec![0x1B, 0x42, 47]));
        assert_eq!(left_margin(48), None);
    }

    #[test]
    fn test_style_flags_compose() {
        let mut flags = StyleFlags::REVERSE | StyleFlags::UPDOWN;
        flags |= StyleFlags::DELETE_LINE;
        assert_eq!(flags.bits(), 0x46);
        assert!(flags.contains(StyleFlags::UPDOWN));
        assert!(!flags.contains(StyleFlags::EMPHASIZED));
        assert_eq!(style_flags(flags.bits()), vec![0x1B, 0x21, 0x46]);
    }

    #[test]
    fn test_enlarge() {
        assert_eq!(enlarge_byte(0, 0), 0x00);
        assert_eq!(enlarge_byte(15, 15), 0xFF);
        assert_eq!(enlarge(enlarge_byte(1, 1)), vec![0x1D, 0x21, 0x11]);
    }

    #[test]
    fn test_double_width_sequences_are_distinct() {
        assert_eq!(double_width(true), vec![0x1B, 0x0E]);
        assert_eq!(double_width(false), vec![0x1B, 0x14]);
    }

    #[test]
    fn test_bool_styles() {
        assert_eq!(bold(true), vec![0x1B, 0x45, 1]);
        assert_eq!(bold(false), vec![0x1B, 0x45, 0]);
        assert_eq!(updown(true), vec![0x1B, 0x7B, 1]);
        assert_eq!(updown(false), vec![0x1B, 0x7B, 0]);
        assert_eq!(reverse(true), vec![0x1D, 0x42, 1]);
        assert_eq!(reverse(false), vec![0x1D, 0x42, 0]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline(Underline::None as u8), Some(vec![0x1B, 0x2D, 0]));
        assert_eq!(underline(Underline::Thick as u8), Some(vec![0x1B, 0x2D, 2]));
        assert_eq!(underline(3), None);
    }

    #[test]
    fn test_character_set_bounds() {
        assert_eq!(character_set(0), Some(vec![0x1B, 0x52, 0]));
        assert_eq!(
            character_set(CharacterSet::Korea as u8),
            Some(vec![0x1B, 0x52, 13])
        );
        assert_eq!(character_set(14), None);
    }

    #[test]
    fn test_code_table() {
        assert_eq!(code_table(0), Some(vec![0x1B, 0x74, 0]));
        assert_eq!(code_table(1), Some(vec![0x1B, 0x74, 1]));
        assert_eq!(code_table(2), None);
    }
}
