//! # EM5820 Raster Graphics Command
//!
//! This module implements the `GS v 0` raster bit image command.
//!
//! ## Protocol Details
//!
//! | Format  | Bytes |
//! |---------|-------|
//! | ASCII   | GS v 0 m xL xH yL yH d1...dk |
//! | Hex     | 1D 76 30 m xL xH yL yH d1...dk |
//!
//! ## Parameters
//!
//! - `m`: print mode (0 = normal; this driver only uses normal)
//! - `xL, xH`: width, little-endian u16
//! - `yL, yH`: height, little-endian u16
//! - `d1...dk`: exactly `width * height` density bytes, copied verbatim
//!
//! ## Payload Validation
//!
//! The printer consumes exactly `width * height` bytes after the
//! header, so the payload length is validated up front: a mismatch is
//! an [`Em5820Error::BitmapSize`], and nothing reaches the wire.

use super::commands::{GS, u16_le};
use crate::error::Em5820Error;

/// # Build a Raster Bitmap Command (GS v 0)
///
/// Encodes `data` as a normal-mode raster image of the given dimensions.
///
/// ## Errors
///
/// Returns [`Em5820Error::BitmapSize`] if `data.len()` is not exactly
/// `width as usize * height as usize`.
///
/// ## Example
///
/// ```
/// use em5820::protocol::graphics;
///
/// let cmd = graphics::raster(2, 2, &[0xFF, 0x00, 0xFF, 0x00]).unwrap();
/// // 8-byte header: GS v 0 m xL xH yL yH
/// assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0x00, 2, 0, 2, 0]);
/// // Payload copied verbatim
/// assert_eq!(&cmd[8..], &[0xFF, 0x00, 0xFF, 0x00]);
/// ```
pub fn raster(width: u16, height: u16, data: &[u8]) -> Result<Vec<u8>, Em5820Error> {
    let expected = width as usize * height as usize;
    if data.len() != expected {
        return Err(Em5820Error::BitmapSize {
            width,
            height,
            expected,
            actual: data.len(),
        });
    }

    let mut cmd = Vec::with_capacity(8 + data.len());
    cmd.extend_from_slice(&[GS, b'v', b'0', 0]);
    cmd.extend_from_slice(&u16_le(width));
    cmd.extend_from_slice(&u16_le(height));
    cmd.extend_from_slice(data);
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_header() {
        let cmd = raster(2, 2, &[0xFF, 0x00, 0xFF, 0x00]).unwrap();
        assert_eq!(&cmd[..8], &[0x1D, 0x76, 0x30, 0x00, 0x02, 0x00, 0x02, 0x00]);
    }

    #[test]
    fn test_raster_payload_verbatim() {
        let data = [0xFF, 0x00, 0xFF, 0x00];
        let cmd = raster(2, 2, &data).unwrap();
        assert_eq!(&cmd[8..], &data);
        assert_eq!(cmd.len(), 8 + 4);
    }

    #[test]
    fn test_raster_wide_dimensions_le() {
        let data = vec![0xAA; 300 * 2];
        let cmd = raster(300, 2, &data).unwrap();
        // 300 = 0x012C
        assert_eq!(&cmd[4..8], &[0x2C, 0x01, 0x02, 0x00]);
    }

    #[test]
    fn test_raster_length_mismatch() {
        let err = raster(2, 2, &[0xFF]).unwrap_err();
        match err {
            Em5820Error::BitmapSize {
                width,
                height,
                expected,
                actual,
            } => {
                assert_eq!((width, height), (2, 2));
                assert_eq!(expected, 4);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_raster_empty() {
        // 0x0 bitmap is degenerate but well-formed
        let cmd = raster(0, 0, &[]).unwrap();
        assert_eq!(cmd, vec![0x1D, 0x76, 0x30, 0x00, 0, 0, 0, 0]);
    }
}
