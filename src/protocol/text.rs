//! # EM5820 Text Styling Commands
//!
//! This module implements text formatting commands for the EM5820.
//!
//! ## Text Styling Overview
//!
//! The EM5820 supports several effects that can be combined:
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Bold | ESC E n | Emphasized text |
//! | Underline | ESC - n | Underlined text (thin/thick) |
//! | Inverse | GS B n | White on black |
//! | Char size | GS ! n | 1x-8x width/height scaling |
//! | Upside down | ESC { n | 180° glyph rotation |
//!
//! ## Upside-Down Printing
//!
//! `ESC { 1` rotates each printed line 180°, so a receipt read with the
//! printer mounted "backwards" appears upright. Rotation applies per
//! line; the *line order* is not reversed by the hardware, which is why
//! the layout engine ([`crate::layout`]) emits wrapped lines in reverse.

use super::commands::{ESC, GS};

// ============================================================================
// CODE PAGES
// ============================================================================

/// Code pages selectable via `ESC # # SLAN n` / `ESC t n`
///
/// Only [`CodePage::Pc437`] maps byte 0xDB to the full-block glyph the
/// inverted banner relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodePage {
    /// PC437 (US, Western Europe). Required for the full-block glyph.
    #[default]
    Pc437 = 0,
    Katakana = 1,
    Pc850 = 2,
    Pc860 = 3,
    Pc863 = 4,
    Pc865 = 5,
    WestEurope = 6,
    Greek = 7,
    Hebrew = 8,
    EastEurope = 9,
    Iran = 10,
    Wpc1252 = 11,
}

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC a n)
///
/// Sets the alignment for subsequent text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
/// | Decimal | 27 97 n |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use em5820::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Available fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// Font A: 12×24 dots, 32 columns on 58mm paper
    #[default]
    A = 0,
    /// Font B: 9×17 dots, compact
    B = 1,
}

/// # Select Font (ESC M n)
///
/// Selects the character font for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC M n |
/// | Hex     | 1B 4D n |
///
/// ## Example
///
/// ```
/// use em5820::protocol::text::{font, Font};
///
/// assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
/// ```
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// TEXT EMPHASIS (BOLD)
// ============================================================================

/// # Set Bold/Emphasis (ESC E n)
///
/// Turns emphasized (double-strike) printing on or off.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC E n |
/// | Hex     | 1B 45 n |
/// | Decimal | 27 69 n |
///
/// ## Example
///
/// ```
/// use em5820::protocol::text::bold;
///
/// assert_eq!(bold(true), vec![0x1B, 0x45, 1]);
/// assert_eq!(bold(false), vec![0x1B, 0x45, 0]);
/// ```
#[inline]
pub fn bold(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline thickness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Underline {
    #[default]
    Off = 0,
    Thin = 1,
    Thick = 2,
}

/// # Set Underline Mode (ESC - n)
///
/// Enables or disables underline for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
/// | Decimal | 27 45 n |
///
/// ## Parameters
///
/// - `n = 0`: Underline OFF
/// - `n = 1`: Underline ON (1 dot thick)
/// - `n = 2`: Underline ON (2 dots thick)
#[inline]
pub fn underline(mode: Underline) -> Vec<u8> {
    vec![ESC, b'-', mode as u8]
}

// ============================================================================
// INVERSE VIDEO
// ============================================================================

/// # Set Inverse Video (GS B n)
///
/// Prints subsequent text white-on-black.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS B n |
/// | Hex     | 1D 42 n |
/// | Decimal | 29 66 n |
///
/// ## Note
///
/// The EM5820 does not render an inverse *space* as a filled block; the
/// banner builder in [`crate::layout`] substitutes the PC437 full-block
/// glyph (0xDB) for word gaps instead.
///
/// ## Example
///
/// ```
/// use em5820::protocol::text::inverse;
///
/// assert_eq!(inverse(true), vec![0x1D, 0x42, 1]);
/// ```
#[inline]
pub fn inverse(on: bool) -> Vec<u8> {
    vec![GS, b'B', on as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (GS ! n)
///
/// Scales subsequent characters. Width multiplier lives in the high
/// nibble, height multiplier in the low nibble.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS ! n |
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Parameters
///
/// - `width`: 0-7 (multiplier minus one); masked to 3 bits
/// - `height`: 0-7 (multiplier minus one); masked to 3 bits
///
/// `n = ((width & 7) << 4) | (height & 7)`
///
/// ## Example
///
/// ```
/// use em5820::protocol::text::char_size;
///
/// // Double width, double height
/// assert_eq!(char_size(1, 1), vec![0x1D, 0x21, 0x11]);
/// // Out-of-range values are masked, not rejected
/// assert_eq!(char_size(9, 9), vec![0x1D, 0x21, 0x11]);
/// ```
#[inline]
pub fn char_size(width: u8, height: u8) -> Vec<u8> {
    vec![GS, b'!', ((width & 0x07) << 4) | (height & 0x07)]
}

// ============================================================================
// ORIENTATION
// ============================================================================

/// # Set Upside-Down Orientation (ESC { n)
///
/// Rotates every subsequently printed line by 180°.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC { n |
/// | Hex     | 1B 7B n |
/// | Decimal | 27 123 n |
///
/// ## Parameters
///
/// - `n = 0`: normal
/// - `n = 1`: 180° rotated
///
/// ## Semantics
///
/// Rotation is per line; the paper still feeds the same direction. For
/// multi-line text to read top-to-bottom after the physical flip, lines
/// must be emitted bottom-up; see
/// [`Printer::print_wrapped_upside_down`](crate::printer::Printer::print_wrapped_upside_down).
#[inline]
pub fn upside_down(on: bool) -> Vec<u8> {
    vec![ESC, b'{', on as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align() {
        assert_eq!(align(Alignment::Left), vec![0x1B, 0x61, 0]);
        assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 1]);
        assert_eq!(align(Alignment::Right), vec![0x1B, 0x61, 2]);
    }

    #[test]
    fn test_font() {
        assert_eq!(font(Font::A), vec![0x1B, 0x4D, 0]);
        assert_eq!(font(Font::B), vec![0x1B, 0x4D, 1]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(bold(true), vec![0x1B, 0x45, 1]);
        assert_eq!(bold(false), vec![0x1B, 0x45, 0]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(underline(Underline::Off), vec![0x1B, 0x2D, 0]);
        assert_eq!(underline(Underline::Thin), vec![0x1B, 0x2D, 1]);
        assert_eq!(underline(Underline::Thick), vec![0x1B, 0x2D, 2]);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(true), vec![0x1D, 0x42, 1]);
        assert_eq!(inverse(false), vec![0x1D, 0x42, 0]);
    }

    #[test]
    fn test_char_size_packing() {
        assert_eq!(char_size(0, 0), vec![0x1D, 0x21, 0x00]);
        assert_eq!(char_size(7, 7), vec![0x1D, 0x21, 0x77]);
        assert_eq!(char_size(2, 5), vec![0x1D, 0x21, 0x25]);
    }

    #[test]
    fn test_char_size_masks_overflow() {
        // 8 & 7 == 0, 15 & 7 == 7
        assert_eq!(char_size(8, 15), vec![0x1D, 0x21, 0x07]);
    }

    #[test]
    fn test_upside_down() {
        assert_eq!(upside_down(true), vec![0x1B, 0x7B, 1]);
        assert_eq!(upside_down(false), vec![0x1B, 0x7B, 0]);
    }

    #[test]
    fn test_code_page_values() {
        assert_eq!(CodePage::Pc437 as u8, 0);
        assert_eq!(CodePage::Katakana as u8, 1);
        assert_eq!(CodePage::Wpc1252 as u8, 11);
    }
}
