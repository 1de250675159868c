//! # EM5820 Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS-like
//! protocol spoken by the EM5820 thermal receipt printer.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic commands (init, feed, heat, speed, code page)
//! - [`text`]: Text styling (alignment, font, bold, underline, inverse,
//!   character size, upside-down orientation)
//! - [`graphics`]: Raster bitmap command
//! - [`qr`]: Two-phase QR symbol commands
//! - [`cp437`]: Unicode → PC437 single-byte encoding
//!
//! ## Usage Example
//!
//! ```
//! use em5820::protocol::{commands, text};
//!
//! // Build a configuration sequence by hand
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(commands::heat(9));
//! data.extend(text::upside_down(true));
//! data.extend(text::bold(true));
//! data.extend(b"RECEIPT");
//! data.push(commands::LF);
//! data.extend(text::bold(false));
//!
//! // Send `data` to the printer via a transport...
//! ```
//!
//! Every builder is a pure function returning the exact byte sequence;
//! nothing here touches the serial channel. The stateful write path
//! lives in [`crate::printer`].

pub mod commands;
pub mod cp437;
pub mod graphics;
pub mod qr;
pub mod text;
