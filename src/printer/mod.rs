//! # Printer Device Session
//!
//! [`Printer`] owns the byte channel for its whole lifetime and pairs it
//! with a mirror of the device's configured state. Every operation
//! computes its command bytes through [`crate::protocol`], performs one
//! blocking write, and only then updates the state mirror, so after an
//! error the mirror still reflects what the device last acknowledged
//! accepting.
//!
//! Setters are idempotent and order-independent, with one exception:
//! upside-down orientation changes the meaning of line order for the
//! layout operations (see [`Printer::print_wrapped_upside_down`]).
//!
//! ## Example
//!
//! ```no_run
//! use em5820::printer::{Printer, PrinterConfig};
//! use em5820::transport::SerialTransport;
//!
//! let transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
//! let mut printer = Printer::new(transport);
//! printer.initialize(&PrinterConfig::EM5820)?;
//!
//! printer.print_wrapped_upside_down("took the long way home today")?;
//! printer.print_inverted("Sat, 06 Jun 2025")?;
//! printer.feed(5)?;
//! # Ok::<(), em5820::Em5820Error>(())
//! ```

mod config;

pub use config::PrinterConfig;

use std::thread;
use std::time::Duration;

use crate::error::Em5820Error;
use crate::layout;
use crate::protocol::text::{Alignment, CodePage, Font, Underline};
use crate::protocol::{commands, cp437, graphics, qr, text};
use crate::transport::Transport;

/// Settle time between configuration commands during initialization.
/// The EM5820 firmware drops commands that arrive while it is still
/// applying the previous one.
const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Pause between pages of the code-page test print, so each page
/// finishes burning before the table switches.
const CODE_PAGE_TEST_DELAY: Duration = Duration::from_secs(2);

/// Mirror of the device's configured state.
///
/// Updated after each successful setter write; purely informational on
/// the host side (the device itself is the source of truth).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterState {
    pub heat: u8,
    pub speed: u8,
    pub code_page: CodePage,
    pub upside_down: bool,
    pub align: Alignment,
    pub bold: bool,
    pub underline: Underline,
    pub inverse: bool,
    /// Width/height multipliers as last written (masked to 3 bits)
    pub char_size: (u8, u8),
    pub font: Font,
}

impl Default for PrinterState {
    fn default() -> Self {
        Self {
            heat: 0,
            speed: 0,
            code_page: CodePage::Pc437,
            upside_down: false,
            align: Alignment::Left,
            bold: false,
            underline: Underline::Off,
            inverse: false,
            char_size: (0, 0),
            font: Font::A,
        }
    }
}

/// A live printer session over a [`Transport`].
pub struct Printer<T: Transport> {
    transport: T,
    state: PrinterState,
    columns: usize,
}

impl<T: Transport> Printer<T> {
    /// Create a session over an already-open transport.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: PrinterState::default(),
            columns: layout::MAX_CHARS_PER_LINE,
        }
    }

    /// The host-side mirror of the device state.
    pub fn state(&self) -> &PrinterState {
        &self.state
    }

    /// The wrap width used by [`print_wrapped_upside_down`](Self::print_wrapped_upside_down).
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Borrow the underlying transport (used by tests to inspect the
    /// captured byte stream).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Tear down the session and recover the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Write raw bytes to the channel, bypassing the state mirror.
    pub fn write_raw(&mut self, data: &[u8]) -> Result<(), Em5820Error> {
        self.transport.write_all(data)
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Run the power-on sequence: reset, advance past the tear bar, then
    /// apply the profile's code page, heat, speed, and upside-down
    /// orientation.
    ///
    /// Sleeps briefly between commands; the firmware drops
    /// configuration commands sent back-to-back.
    pub fn initialize(&mut self, config: &PrinterConfig) -> Result<(), Em5820Error> {
        self.columns = config.columns;

        self.init()?;
        thread::sleep(SETTLE_DELAY);
        self.feed(2)?;
        thread::sleep(SETTLE_DELAY);
        self.set_code_page(config.code_page)?;
        thread::sleep(SETTLE_DELAY);
        self.set_heat(config.heat)?;
        thread::sleep(SETTLE_DELAY);
        self.set_speed(config.speed)?;
        thread::sleep(SETTLE_DELAY);
        // Mounted upside-down in the receipt box; every line from here
        // on is rotated 180°.
        self.set_upside_down(true)
    }

    /// Reset the printer to power-on defaults (ESC @).
    pub fn init(&mut self) -> Result<(), Em5820Error> {
        self.transport.write_all(&commands::init())?;
        // Heat/speed/code page are vendor settings and survive ESC @;
        // the styling state does not.
        let preserved = self.state;
        self.state = PrinterState {
            heat: preserved.heat,
            speed: preserved.speed,
            code_page: preserved.code_page,
            ..PrinterState::default()
        };
        Ok(())
    }

    /// Set thermal head heat (0 light - 9 dark; firmware accepts up to 15).
    pub fn set_heat(&mut self, heat: u8) -> Result<(), Em5820Error> {
        self.transport.write_all(&commands::heat(heat))?;
        self.state.heat = heat;
        Ok(())
    }

    /// Set feed motor speed (0 slow - 9 fast).
    pub fn set_speed(&mut self, speed: u8) -> Result<(), Em5820Error> {
        self.transport.write_all(&commands::speed(speed))?;
        self.state.speed = speed;
        Ok(())
    }

    /// Select the glyph code page.
    pub fn set_code_page(&mut self, page: CodePage) -> Result<(), Em5820Error> {
        self.transport.write_all(&commands::code_page(page as u8))?;
        self.state.code_page = page;
        Ok(())
    }

    /// Rotate subsequent lines 180° (or back).
    ///
    /// This changes the semantics of line ordering: with rotation on,
    /// multi-line text must be emitted bottom-up to read correctly after
    /// the physical flip.
    pub fn set_upside_down(&mut self, on: bool) -> Result<(), Em5820Error> {
        self.transport.write_all(&text::upside_down(on))?;
        self.state.upside_down = on;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Styling
    // ------------------------------------------------------------------

    /// Set text alignment for subsequent lines.
    pub fn set_align(&mut self, alignment: Alignment) -> Result<(), Em5820Error> {
        self.transport.write_all(&text::align(alignment))?;
        self.state.align = alignment;
        Ok(())
    }

    /// Enable or disable emphasized printing.
    pub fn set_bold(&mut self, on: bool) -> Result<(), Em5820Error> {
        self.transport.write_all(&text::bold(on))?;
        self.state.bold = on;
        Ok(())
    }

    /// Set underline mode.
    pub fn set_underline(&mut self, mode: Underline) -> Result<(), Em5820Error> {
        self.transport.write_all(&text::underline(mode))?;
        self.state.underline = mode;
        Ok(())
    }

    /// Enable or disable white-on-black printing.
    pub fn set_inverse(&mut self, on: bool) -> Result<(), Em5820Error> {
        self.transport.write_all(&text::inverse(on))?;
        self.state.inverse = on;
        Ok(())
    }

    /// Set character width/height multipliers (each 0-7, masked).
    pub fn set_char_size(&mut self, width: u8, height: u8) -> Result<(), Em5820Error> {
        self.transport.write_all(&text::char_size(width, height))?;
        self.state.char_size = (width & 0x07, height & 0x07);
        Ok(())
    }

    /// Select the character font.
    pub fn set_font(&mut self, font: Font) -> Result<(), Em5820Error> {
        self.transport.write_all(&text::font(font))?;
        self.state.font = font;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    /// Print the line buffer and advance `n` lines.
    pub fn feed(&mut self, n: u8) -> Result<(), Em5820Error> {
        self.transport.write_all(&commands::feed(n))
    }

    /// Write a single raw byte (a code-page glyph or control byte).
    pub fn write_byte(&mut self, byte: u8) -> Result<(), Em5820Error> {
        self.transport.write_all(&[byte])
    }

    /// Print text without a trailing line feed (PC437-encoded).
    pub fn print(&mut self, text: &str) -> Result<(), Em5820Error> {
        self.transport.write_all(&cp437::encode(text))
    }

    /// Print text followed by a line feed (PC437-encoded).
    pub fn println(&mut self, text: &str) -> Result<(), Em5820Error> {
        let mut bytes = cp437::encode(text);
        bytes.push(commands::LF);
        self.transport.write_all(&bytes)
    }

    /// Word-wrap `text` to the configured column width and print the
    /// lines in reverse order.
    ///
    /// With the printer mounted upside-down (`ESC { 1`), each line is
    /// rotated but the paper still feeds the same way; emitting the
    /// last line first is what makes the flipped strip read
    /// top-to-bottom. See [`crate::layout::wrap`] for the break rules.
    pub fn print_wrapped_upside_down(&mut self, text: &str) -> Result<(), Em5820Error> {
        let lines = layout::wrap(text, self.columns);
        for line in lines.iter().rev() {
            self.println(line)?;
        }
        Ok(())
    }

    /// Print `text` as an inverted banner: white-on-black with word gaps
    /// drawn as full-block glyphs. Intended for short headers such as
    /// the receipt timestamp. Needs PC437 selected.
    pub fn print_inverted(&mut self, text: &str) -> Result<(), Em5820Error> {
        self.transport.write_all(&layout::inverted_banner(text))?;
        // The banner toggles inverse video internally and ends with it off.
        self.state.inverse = false;
        Ok(())
    }

    /// Print a raster bitmap of `width` x `height` density bytes.
    ///
    /// ## Errors
    ///
    /// [`Em5820Error::BitmapSize`] if `data` is not exactly
    /// `width * height` bytes; nothing is written in that case.
    pub fn print_bitmap(
        &mut self,
        width: u16,
        height: u16,
        data: &[u8],
    ) -> Result<(), Em5820Error> {
        let cmd = graphics::raster(width, height, data)?;
        self.transport.write_all(&cmd)
    }

    /// Store and print a QR code rendered by the printer firmware.
    ///
    /// ## Errors
    ///
    /// [`Em5820Error::QrTooLong`] if `data` exceeds
    /// [`qr::MAX_DATA_LEN`] bytes; nothing is written in that case.
    pub fn print_qr_code(&mut self, data: &[u8]) -> Result<(), Em5820Error> {
        let cmd = qr::generate(data)?;
        self.transport.write_all(&cmd)
    }

    /// Print a diagnostic page for each of the first ten code tables:
    /// the table number, then all 256 glyphs, 32 per line.
    ///
    /// Uses the session-scoped `ESC t` select so the persistent `SLAN`
    /// setting is untouched; pauses between pages while the printer
    /// burns the previous one.
    pub fn print_code_pages(&mut self) -> Result<(), Em5820Error> {
        self.init()?;

        for n in 0..10u8 {
            self.transport.write_all(&commands::select_char_table(n))?;
            self.println(&format!("Code page {}", n))?;

            let mut glyphs = Vec::with_capacity(256 + 8);
            for c in 0..=255u8 {
                glyphs.push(c);
                if (c as usize + 1) % 32 == 0 {
                    glyphs.push(commands::LF);
                }
            }
            self.transport.write_all(&glyphs)?;

            self.feed(2)?;
            thread::sleep(CODE_PAGE_TEST_DELAY);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock() -> Printer<Vec<u8>> {
        Printer::new(Vec::new())
    }

    #[test]
    fn setters_emit_bytes_and_track_state() {
        let mut p = mock();
        p.set_heat(9).unwrap();
        p.set_speed(3).unwrap();
        p.set_bold(true).unwrap();
        p.set_underline(Underline::Thick).unwrap();
        p.set_char_size(9, 2).unwrap();

        assert_eq!(p.state().heat, 9);
        assert_eq!(p.state().speed, 3);
        assert!(p.state().bold);
        assert_eq!(p.state().underline, Underline::Thick);
        // Stored masked, as written to the wire
        assert_eq!(p.state().char_size, (1, 2));

        let mut expected = Vec::new();
        expected.extend(commands::heat(9));
        expected.extend(commands::speed(3));
        expected.extend(text::bold(true));
        expected.extend(text::underline(Underline::Thick));
        expected.extend(text::char_size(9, 2));
        assert_eq!(p.transport(), &expected);
    }

    #[test]
    fn init_resets_styling_but_keeps_vendor_settings() {
        let mut p = mock();
        p.set_heat(7).unwrap();
        p.set_bold(true).unwrap();
        p.set_upside_down(true).unwrap();

        p.init().unwrap();
        assert_eq!(p.state().heat, 7);
        assert!(!p.state().bold);
        assert!(!p.state().upside_down);
    }

    #[test]
    fn println_appends_line_feed() {
        let mut p = mock();
        p.println("hi").unwrap();
        assert_eq!(p.transport(), &b"hi\n".to_vec());
    }

    #[test]
    fn wrapped_upside_down_emits_lines_in_reverse() {
        let mut p = mock();
        // Wraps at the space after "six" (rightmost space <= 32)
        p.print_wrapped_upside_down("one two three four five six seven eight")
            .unwrap();

        let expected = b"seven eight\none two three four five six\n".to_vec();
        assert_eq!(p.transport(), &expected);
    }

    #[test]
    fn short_text_prints_as_single_line() {
        let mut p = mock();
        p.print_wrapped_upside_down("hello world").unwrap();
        assert_eq!(p.transport(), &b"hello world\n".to_vec());
    }

    #[test]
    fn inverted_banner_matches_layout_builder() {
        let mut p = mock();
        p.set_inverse(true).unwrap();
        p.print_inverted("AB CD").unwrap();

        let mut expected = text::inverse(true);
        expected.extend(layout::inverted_banner("AB CD"));
        assert_eq!(p.transport(), &expected);
        // The banner always exits with inverse video off
        assert!(!p.state().inverse);
    }

    #[test]
    fn bitmap_mismatch_writes_nothing() {
        let mut p = mock();
        assert!(p.print_bitmap(2, 2, &[0xFF]).is_err());
        assert!(p.transport().is_empty());
    }

    #[test]
    fn qr_print_emits_store_then_trigger() {
        let mut p = mock();
        p.print_qr_code(b"HELLO").unwrap();
        assert_eq!(p.transport(), &qr::generate(b"HELLO").unwrap());
    }

    #[test]
    fn initialize_writes_power_on_sequence() {
        let mut p = mock();
        p.initialize(&PrinterConfig::EM5820).unwrap();

        let mut expected = Vec::new();
        expected.extend(commands::init());
        expected.extend(commands::feed(2));
        expected.extend(commands::code_page(CodePage::Pc437 as u8));
        expected.extend(commands::heat(15));
        expected.extend(commands::speed(3));
        expected.extend(text::upside_down(true));
        assert_eq!(p.transport(), &expected);

        assert!(p.state().upside_down);
        assert_eq!(p.state().heat, 15);
        assert_eq!(p.columns(), 32);
    }
}
