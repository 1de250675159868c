//! # Printer Transport Layer
//!
//! This module provides the byte-output channel the driver writes to.
//!
//! ## Available Transports
//!
//! - [`serial`]: raw serial TTY (USB-UART adapter or on-board UART)
//! - `Vec<u8>`: in-memory capture, used as the mock channel in tests
//!
//! The [`Transport`] trait is the only seam between "compute the
//! command bytes" and "perform the blocking write"; every failure is
//! surfaced as an [`Em5820Error`].

use crate::error::Em5820Error;

pub mod serial;

pub use serial::SerialTransport;

/// A synchronous, exclusively-owned byte channel to the printer.
///
/// Writes block until the underlying channel accepts all bytes. There is
/// no cancellation or retry; a stalled channel stalls the caller.
pub trait Transport {
    /// Write all of `data` to the channel.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Em5820Error>;
}

/// In-memory transport capturing every byte written.
///
/// ## Example
///
/// ```
/// use em5820::transport::Transport;
///
/// let mut captured: Vec<u8> = Vec::new();
/// captured.write_all(&[0x1B, 0x40]).unwrap();
/// assert_eq!(captured, vec![0x1B, 0x40]);
/// ```
impl Transport for Vec<u8> {
    fn write_all(&mut self, data: &[u8]) -> Result<(), Em5820Error> {
        self.extend_from_slice(data);
        Ok(())
    }
}
