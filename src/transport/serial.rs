//! # Serial TTY Transport
//!
//! This module provides communication with the EM5820 over a serial
//! line (TTL UART behind a USB adapter, or an on-board UART exposed as
//! a TTY device).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary command data passes
//! through unmodified:
//!
//! - **No input processing**: disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **No echo**: disable ECHO, ECHONL
//! - **Non-canonical mode**: disable ICANON (no line buffering)
//!
//! XON/XOFF flow control is disabled because 0x11 (DC1) and 0x13 (DC3)
//! can appear in raster and QR payloads.
//!
//! ## Pacing
//!
//! The EM5820 has a small receive buffer and no hardware flow control.
//! Large writes are chunked with a short delay between chunks, which
//! also covers the settle time the firmware wants between configuration
//! commands.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::Em5820Error;
use crate::transport::Transport;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Default baud rate of the EM5820
pub const DEFAULT_BAUD: u32 = 9600;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 256;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 50;

/// # Serial Printer Transport
///
/// Manages an exclusive connection to the printer over a raw TTY.
///
/// ## Example
///
/// ```no_run
/// use em5820::transport::SerialTransport;
/// use em5820::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
/// # use em5820::transport::Transport;
/// transport.write_all(&commands::init())?;
/// # Ok::<(), em5820::Em5820Error>(())
/// ```
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open a serial connection to the printer.
    ///
    /// ## Parameters
    ///
    /// - `device`: path to the TTY device (e.g., "/dev/ttyUSB0")
    /// - `baud`: line speed; the EM5820 ships at 9600
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout group)
    /// - The baud rate has no termios constant
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, Em5820Error> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            Em5820Error::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd(), baud)?;

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Open with the default device path and baud rate.
    pub fn open_default() -> Result<Self, Em5820Error> {
        Self::open(DEFAULT_DEVICE, DEFAULT_BAUD)
    }

    /// Set the chunk size for large writes.
    ///
    /// Larger chunks are faster but can overflow the printer's receive
    /// buffer. Default is 256 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size;
    }

    /// Set the delay between chunks.
    ///
    /// Longer delays give the printer more time to burn and feed.
    /// Default is 50ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Transport for SerialTransport {
    /// Write data to the printer.
    ///
    /// Small writes are sent directly. Large writes are chunked with a
    /// pacing delay to avoid overrunning the printer's receive buffer.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Em5820Error> {
        if data.is_empty() {
            return Ok(());
        }

        if data.len() <= self.chunk_size {
            self.file
                .write_all(data)
                .map_err(|e| Em5820Error::Transport(format!("Write failed: {}", e)))?;
        } else {
            for chunk in data.chunks(self.chunk_size) {
                self.file
                    .write_all(chunk)
                    .map_err(|e| Em5820Error::Transport(format!("Write failed: {}", e)))?;

                if !self.chunk_delay.is_zero() {
                    thread::sleep(self.chunk_delay);
                }
            }
        }

        self.file
            .flush()
            .map_err(|e| Em5820Error::Transport(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}

/// Map a numeric baud rate to its termios speed constant.
fn baud_to_speed(baud: u32) -> Result<libc::speed_t, Em5820Error> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        _ => return Err(Em5820Error::UnsupportedBaud(baud)),
    };
    Ok(speed)
}

/// Configure a file descriptor for raw TTY mode at the given baud rate.
///
/// Disables all input/output processing so binary command data passes
/// through unmodified.
fn configure_tty_raw(fd: i32, baud: u32) -> Result<(), Em5820Error> {
    use std::mem::MaybeUninit;

    let speed = baud_to_speed(baud)?;

    // Get current terminal attributes
    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(Em5820Error::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: disable all processing.
    // IXON/IXOFF/IXANY: no XON/XOFF flow control (0x11/0x13 appear in
    // raster payloads)
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: disable post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: disable echo, canonical mode, signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8-bit characters, no parity
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    unsafe {
        libc::cfsetispeed(&mut termios, speed);
        libc::cfsetospeed(&mut termios, speed);
    }

    // Apply settings immediately
    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(Em5820Error::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baud_mapping() {
        assert!(baud_to_speed(9600).is_ok());
        assert!(baud_to_speed(115200).is_ok());
        assert!(matches!(
            baud_to_speed(31337),
            Err(Em5820Error::UnsupportedBaud(31337))
        ));
    }
}
