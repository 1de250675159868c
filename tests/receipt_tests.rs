//! # Receipt Pipeline Tests
//!
//! End-to-end assembly tests: a full print cycle (power-on sequence,
//! wrapped upside-down body, inverted banner, feed) is run against the
//! in-memory mock transport and compared byte-for-byte against the wire
//! format the EM5820 expects.

use em5820::layout;
use em5820::printer::{Printer, PrinterConfig};
use em5820::protocol::{commands, qr, text};
use em5820::receipt::Receipt;
use pretty_assertions::assert_eq;

/// The power-on sequence for the default EM5820 profile, byte-exact.
fn power_on_bytes() -> Vec<u8> {
    vec![
        0x1B, 0x40, // init
        0x1B, 0x64, 2, // feed 2
        0x1B, 0x23, 0x23, 0x53, 0x4C, 0x41, 0x4E, 0, // code page PC437
        0x1B, 0x23, 0x23, 0x53, 0x54, 0x44, 0x50, 15, // heat
        0x1B, 0x23, 0x23, 0x53, 0x54, 0x53, 0x50, 3, // speed
        0x1B, 0x7B, 1, // upside-down on
    ]
}

#[test]
fn full_print_cycle_wire_format() {
    let mut printer = Printer::new(Vec::new());
    printer.initialize(&PrinterConfig::EM5820).unwrap();

    let receipt = Receipt::new(
        "went to the lake and did absolutely nothing all afternoon",
        "Sat, 07 Jun 2025",
    );
    receipt.print(&mut printer).unwrap();

    let mut expected = power_on_bytes();
    // Body wraps at the rightmost space <= 32 and prints bottom-up
    expected.extend(b"absolutely nothing all afternoon\n");
    expected.extend(b"went to the lake and did\n");
    expected.extend(layout::inverted_banner("Sat, 07 Jun 2025"));
    expected.extend(commands::feed(5));

    assert_eq!(printer.transport(), &expected);
}

#[test]
fn qr_receipt_appends_symbol_commands() {
    let mut printer = Printer::new(Vec::new());
    printer.print_qr_code(b"https://example.com").unwrap();

    let expected = qr::generate(b"https://example.com").unwrap();
    assert_eq!(printer.transport(), &expected);
}

#[test]
fn banner_is_last_before_the_feed() {
    let mut printer = Printer::new(Vec::new());
    Receipt::new("hello", "AB CD").print(&mut printer).unwrap();

    let bytes = printer.transport();
    let feed = commands::feed(5);
    assert!(bytes.ends_with(&feed));

    let banner = layout::inverted_banner("AB CD");
    let before_feed = &bytes[..bytes.len() - feed.len()];
    assert!(before_feed.ends_with(&banner));
}

#[test]
fn styling_survives_round_trip_through_session() {
    let mut printer = Printer::new(Vec::new());
    printer.set_bold(true).unwrap();
    printer.set_align(text::Alignment::Center).unwrap();
    printer.println("CENTERED").unwrap();
    printer.set_bold(false).unwrap();

    let mut expected = Vec::new();
    expected.extend(text::bold(true));
    expected.extend(text::align(text::Alignment::Center));
    expected.extend(b"CENTERED\n");
    expected.extend(text::bold(false));
    assert_eq!(printer.transport(), &expected);
}
