//! # em5820 - EM5820 Thermal Receipt Printer Driver
//!
//! em5820 is a Rust driver for the EM5820 58mm thermal printer over a
//! serial link. It grew out of a "life receipt" box: the printer is
//! mounted upside-down, short messages arrive from a web form, and each
//! one prints with an inverted timestamp banner on top. The driver
//! provides:
//!
//! - **Protocol implementation**: ESC/POS-style command builders,
//!   including the EM5820's vendor configuration commands
//! - **Layout**: word-wrap with reversed line emission for the
//!   upside-down mount, and the block-delimited inverted banner
//! - **Graphics**: raster bitmaps and firmware-rendered QR codes
//! - **Transport**: raw serial TTY communication with pacing
//!
//! ## Quick Start
//!
//! ```no_run
//! use em5820::{
//!     printer::{Printer, PrinterConfig},
//!     receipt::Receipt,
//!     timestamp,
//!     transport::SerialTransport,
//! };
//!
//! // Open the serial link and run the power-on sequence
//! let transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
//! let mut printer = Printer::new(transport);
//! printer.initialize(&PrinterConfig::EM5820)?;
//!
//! // Print one receipt: wrapped body, then the banner header
//! let receipt = Receipt::new("took the long way home today", timestamp::current());
//! receipt.print(&mut printer)?;
//!
//! # Ok::<(), em5820::Em5820Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Command builders (pure, byte-exact) |
//! | [`layout`] | Word-wrap and inverted-banner layout |
//! | [`printer`] | Stateful device session and configuration |
//! | [`transport`] | Serial channel (plus `Vec<u8>` mock) |
//! | [`receipt`] | Receipt assembly and the print mailbox |
//! | [`timestamp`] | Banner date formatting and parsing |
//! | [`error`] | Error types |
//!
//! ## Orientation Semantics
//!
//! `ESC { 1` rotates each printed line 180° but does not reverse line
//! order; the layout engine emits wrapped lines bottom-up so the torn
//! off, flipped strip reads top-to-bottom with the banner on top. The
//! caller contract per receipt is therefore: body first, banner last.

pub mod error;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod timestamp;
pub mod transport;

// Re-exports for convenience
pub use error::Em5820Error;
pub use printer::{Printer, PrinterConfig};
pub use transport::SerialTransport;
