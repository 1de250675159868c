//! # EM5820 QR Code Commands
//!
//! QR codes print in two phases against firmware-side symbol state:
//! first the data is *stored* in the printer's symbol buffer, then a
//! separate command renders the stored symbol. The host keeps no state
//! between the phases.
//!
//! Both phases use the ESC/POS `GS ( k` symbol command with function
//! codes from the "model 2 QR" group (`cn = 49`).
//!
//! ## Phase 1: Store (GS ( k pL pH 49 80 48 d1...dk)
//!
//! | Field | Bytes |
//! |-------|-------|
//! | Prefix | 1D 28 6B |
//! | Payload length | (len+3) as little-endian u16 |
//! | Sub-header | 31 50 30 |
//! | Data | d1...dk |
//!
//! The `+3` covers the three sub-header bytes, so the largest storable
//! payload is `0xFFFF - 3` = 65532 bytes ([`MAX_DATA_LEN`]).
//!
//! ## Phase 2: Print (GS ( k 3 0 49 81 48)
//!
//! | Field | Bytes |
//! |-------|-------|
//! | Prefix | 1D 28 6B |
//! | Payload length | 03 00 |
//! | Sub-header | 31 51 30 |

use super::commands::{GS, u16_le};
use crate::error::Em5820Error;

/// Largest QR payload representable in the 16-bit length field
/// (`0xFFFF - 3` sub-header bytes).
pub const MAX_DATA_LEN: usize = 65532;

/// # Store QR Symbol Data (GS ( k ... 49 80 48)
///
/// Builds the phase-1 command that loads `data` into the printer's
/// symbol buffer. Nothing is printed until [`print_stored`] is sent.
///
/// ## Errors
///
/// Returns [`Em5820Error::QrTooLong`] if `data` exceeds
/// [`MAX_DATA_LEN`] bytes.
///
/// ## Example
///
/// ```
/// use em5820::protocol::qr;
///
/// let cmd = qr::store(b"HELLO").unwrap();
/// // len+3 = 8, little-endian
/// assert_eq!(&cmd[..8], &[0x1D, 0x28, 0x6B, 0x08, 0x00, 0x31, 0x50, 0x30]);
/// assert_eq!(&cmd[8..], b"HELLO");
/// ```
pub fn store(data: &[u8]) -> Result<Vec<u8>, Em5820Error> {
    if data.len() > MAX_DATA_LEN {
        return Err(Em5820Error::QrTooLong(data.len()));
    }

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.extend_from_slice(&[GS, b'(', b'k']);
    cmd.extend_from_slice(&u16_le((data.len() + 3) as u16));
    cmd.extend_from_slice(&[0x31, 0x50, 0x30]);
    cmd.extend_from_slice(data);
    Ok(cmd)
}

/// # Print the Stored QR Symbol (GS ( k 3 0 49 81 48)
///
/// Renders whatever [`store`] last loaded into the symbol buffer.
#[inline]
pub fn print_stored() -> Vec<u8> {
    vec![GS, b'(', b'k', 0x03, 0x00, 0x31, 0x51, 0x30]
}

/// Build the complete store-then-print sequence for `data`.
///
/// ## Example
///
/// ```
/// use em5820::protocol::qr;
///
/// let cmd = qr::generate(b"https://example.com").unwrap();
/// assert!(cmd.ends_with(&[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]));
/// ```
pub fn generate(data: &[u8]) -> Result<Vec<u8>, Em5820Error> {
    let mut cmd = store(data)?;
    cmd.extend_from_slice(&print_stored());
    Ok(cmd)
}
