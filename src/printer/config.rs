//! # Printer Configuration
//!
//! This module defines hardware profiles for supported thermal printers.
//!
//! ## Supported Printers
//!
//! | Model | Paper | Columns (Font A) | Width (dots) | Default baud |
//! |-------|-------|------------------|--------------|--------------|
//! | EM5820 | 58mm | 32 | 384 | 9600 |
//!
//! ## Usage
//!
//! ```
//! use em5820::printer::PrinterConfig;
//!
//! let config = PrinterConfig::EM5820;
//! assert_eq!(config.columns, 32);
//! ```

use crate::protocol::text::CodePage;

/// # Printer Configuration
///
/// Hardware characteristics plus the configuration values written to the
/// device during [`Printer::initialize`](crate::printer::Printer::initialize).
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Characters per line in the default font
    pub columns: usize,

    /// Maximum print width in dots
    pub width_dots: u16,

    /// Serial line speed
    pub baud: u32,

    /// Code page selected at initialization. The inverted banner needs
    /// [`CodePage::Pc437`] for its full-block glyph.
    pub code_page: CodePage,

    /// Thermal head heat. Nominal range 0-9; EM5820 firmware accepts up
    /// to 15 (darker).
    pub heat: u8,

    /// Feed motor speed (0-9)
    pub speed: u8,
}

impl PrinterConfig {
    /// # EM5820 Configuration
    ///
    /// 58mm paper ESC/POS module, TTL serial at 9600 baud.
    ///
    /// Heat is set near the top of the range: the receipt box runs the
    /// printer dark and slow for legibility on cheap paper.
    pub const EM5820: Self = Self {
        name: "EM5820",
        columns: 32,
        width_dots: 384,
        baud: 9600,
        code_page: CodePage::Pc437,
        heat: 15,
        speed: 3,
    };
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::EM5820
    }
}
