//! # Error Types
//!
//! This module defines error types used throughout the em5820 library.
//!
//! Every write to the printer surfaces a [`Em5820Error`]; malformed
//! payloads (bitmap size, QR length) are rejected before any bytes
//! reach the wire.

use thiserror::Error;

/// Main error type for em5820 operations
#[derive(Debug, Error)]
pub enum Em5820Error {
    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Bitmap payload length does not match the declared dimensions
    #[error(
        "Bitmap payload length mismatch: {width}x{height} needs {expected} bytes, got {actual}"
    )]
    BitmapSize {
        width: u16,
        height: u16,
        expected: usize,
        actual: usize,
    },

    /// QR data exceeds the 16-bit length field
    #[error("QR data too long: {0} bytes (max 65532)")]
    QrTooLong(usize),

    /// Baud rate with no corresponding termios speed constant
    #[error("Unsupported baud rate: {0}")]
    UnsupportedBaud(u32),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
