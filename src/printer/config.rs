//! # Printer Configuration
//!
//! This module defines hardware specifications for supported thermal printers.
//!
//! ## Supported Printers
//!
//! | Model | Baud | Width (dots) | Resolution |
//! |-------|------|--------------|------------|
//! | CSN-A2 | 19200 | 384 | 203 DPI |
//!
//! ## Usage
//!
//! ```
//! use thermal_serial::printer::PrinterConfig;
//!
//! let config = PrinterConfig::CSN_A2;
//! println!("{} at {} baud", config.name, config.baud_rate);
//! ```

/// # Printer Configuration
///
/// Defines the hardware characteristics of a serial thermal printer.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
///
/// For CSN-A2:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   5mm feed    = 5 * 8 = 40 dot rows
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Factory line speed
    pub baud_rate: u32,

    /// Maximum print width in dots
    pub width_dots: u16,

    /// Resolution in dots per inch
    pub dpi: u16,
}

impl PrinterConfig {
    /// # CSN-A2 Configuration
    ///
    /// 58mm paper panel-mount printer with a TTL serial interface, sold
    /// under many names ("mini thermal printer").
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 58mm |
    /// | Print width | 48mm (384 dots) |
    /// | Resolution | 203 DPI |
    /// | Interface | TTL serial, 19200 8N1 |
    pub const CSN_A2: Self = Self {
        name: "CSN-A2",
        baud_rate: 19200,
        width_dots: 384,
        dpi: 203,
    };

    /// Calculate dots per millimeter
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Convert millimeters to dot rows for a dot feed, clamped to one command (0-255).
    ///
    /// ```
    /// use thermal_serial::printer::PrinterConfig;
    ///
    /// assert_eq!(PrinterConfig::CSN_A2.mm_to_feed_dots(5.0), 40);
    /// assert_eq!(PrinterConfig::CSN_A2.mm_to_feed_dots(500.0), 255);
    /// ```
    #[inline]
    pub fn mm_to_feed_dots(&self, mm: f32) -> u8 {
        (mm * self.dots_per_mm()).round().clamp(0.0, 255.0) as u8
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::CSN_A2
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csn_a2_defaults() {
        let config = PrinterConfig::CSN_A2;
        assert_eq!(config.baud_rate, 19200);
        assert_eq!(config.width_dots, 384);
    }

    #[test]
    fn test_mm_to_feed_dots_clamps() {
        let config = PrinterConfig::CSN_A2;
        assert_eq!(config.mm_to_feed_dots(0.0), 0);
        assert_eq!(config.mm_to_feed_dots(-3.0), 0);
        assert_eq!(config.mm_to_feed_dots(1000.0), 255);
    }

    #[test]
    fn test_default_is_csn_a2() {
        assert_eq!(PrinterConfig::default().name, PrinterConfig::CSN_A2.name);
    }
}
