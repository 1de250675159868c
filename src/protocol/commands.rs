//! # EM5820 Basic Commands
//!
//! This module implements the core command set of the EM5820 thermal
//! receipt printer, an inexpensive 58mm ESC/POS-style module usually
//! driven over a TTL serial link.
//!
//! ## Protocol Overview
//!
//! The EM5820 speaks an ESC/POS-like protocol: a control byte (or byte
//! pair) followed by fixed-position parameter bytes. Three command
//! families appear in this driver:
//!
//! - Standard ESC/POS commands: `ESC @`, `ESC d n`, `ESC t n`, ...
//! - `GS`-prefixed commands: inverse video, character size, raster data
//! - Vendor configuration commands: `ESC # # <TAG> n`, where `<TAG>` is a
//!   four-letter ASCII mnemonic (`STDP` = set dot power, `STSP` = set
//!   speed, `SLAN` = select language/code page)
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Parameter Handling
//!
//! Scalar parameters are passed through (or bit-masked) exactly as the
//! hardware expects; the builders perform no range validation. Callers
//! must stay inside the documented ranges; out-of-range values are
//! masked or interpreted by the firmware, never rejected here.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most EM5820 commands begin with ESC (0x1B). This byte signals the
/// start of a control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefixes inverse video, character size, raster and symbol commands.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Call at the start
/// of a session before configuring heat, speed, and orientation.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use em5820::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// VENDOR CONFIGURATION (ESC # # TAG n)
// ============================================================================

/// # Set Print Heat (ESC # # STDP h)
///
/// Configures the thermal head's dot power. Higher values burn darker
/// (and slower); the setting persists until changed or power-off.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC # # S T D P h |
/// | Hex     | 1B 23 23 53 54 44 50 h |
///
/// ## Parameters
///
/// - `h`: heat level, nominally 0 (light) to 9 (dark). EM5820 firmware
///   accepts values up to 15.
///
/// ## Example
///
/// ```
/// use em5820::protocol::commands;
///
/// let cmd = commands::heat(9);
/// assert_eq!(cmd, vec![0x1B, 0x23, 0x23, 0x53, 0x54, 0x44, 0x50, 9]);
/// ```
#[inline]
pub fn heat(h: u8) -> Vec<u8> {
    vec![ESC, b'#', b'#', b'S', b'T', b'D', b'P', h]
}

/// # Set Print Speed (ESC # # STSP s)
///
/// Configures the paper feed motor speed.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC # # S T S P s |
/// | Hex     | 1B 23 23 53 54 53 50 s |
///
/// ## Parameters
///
/// - `s`: speed, 0 (slow) to 9 (fast)
#[inline]
pub fn speed(s: u8) -> Vec<u8> {
    vec![ESC, b'#', b'#', b'S', b'T', b'S', b'P', s]
}

/// # Select Code Page (ESC # # SLAN n)
///
/// Selects the glyph mapping for byte values 0x80-0xFF. The vendor
/// `SLAN` command is the one the EM5820 actually honors for persistent
/// configuration; the standard `ESC t` form ([`select_char_table`]) only
/// affects the current session.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC # # S L A N n |
/// | Hex     | 1B 23 23 53 4C 41 4E n |
///
/// ## Parameters
///
/// See [`CodePage`](crate::protocol::text::CodePage) for the values of
/// `n`. Code page 0 (PC437) is required for the inverted banner's
/// full-block glyph (0xDB).
#[inline]
pub fn code_page(n: u8) -> Vec<u8> {
    vec![ESC, b'#', b'#', b'S', b'L', b'A', b'N', n]
}

/// # Select Character Code Table (ESC t n)
///
/// The standard ESC/POS code-table select. Used by the code-page test
/// print to step through tables without touching the persistent `SLAN`
/// setting.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC t n |
/// | Hex     | 1B 74 n |
#[inline]
pub fn select_char_table(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Feed n Lines (ESC d n)
///
/// Prints any pending data in the line buffer, then advances the paper
/// by `n` text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC d n |
/// | Hex     | 1B 64 n |
/// | Decimal | 27 100 n |
///
/// ## Example
///
/// ```
/// use em5820::protocol::commands;
///
/// assert_eq!(commands::feed(5), vec![0x1B, 0x64, 5]);
/// ```
#[inline]
pub fn feed(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// The EM5820 uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use em5820::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(384), [0x80, 0x01]); // 384 = 0x0180
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
