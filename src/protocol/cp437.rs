//! # Code Page 437 Encoding
//!
//! Converts Unicode strings to PC437 single-byte encoding. The EM5820
//! must have code page 0 selected (`ESC # # SLAN 0`) for these bytes to
//! render correctly.
//!
//! ASCII (U+0000–U+007F) passes through unchanged. A practical subset of
//! the upper half is mapped: the box/block glyphs the banner uses and
//! the Western European accents likely to arrive from a web form.
//! Anything unmapped becomes `?` with a warning on stderr.

/// The PC437 byte that renders as a solid filled rectangle.
///
/// Used by the inverted banner to simulate filled inverse-video word
/// gaps, which the EM5820 cannot render natively.
pub const FULL_BLOCK: u8 = 0xDB;

/// Encode a Unicode string as PC437 bytes.
///
/// - ASCII (U+0000–U+007F): passed through as-is
/// - Mapped upper-half characters: single PC437 byte
/// - Unmapped characters: replaced with `?`, warning printed to stderr
///
/// ## Example
///
/// ```
/// use em5820::protocol::cp437;
///
/// assert_eq!(cp437::encode("cafe"), b"cafe");
/// assert_eq!(cp437::encode("café"), vec![b'c', b'a', b'f', 0x82]);
/// assert_eq!(cp437::encode("█"), vec![0xDB]);
/// ```
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else if let Some(byte) = unicode_to_cp437(ch) {
            out.push(byte);
        } else {
            eprintln!(
                "cp437: unmapped character '{}' (U+{:04X}), replacing with '?'",
                ch, ch as u32
            );
            out.push(b'?');
        }
    }
    out
}

/// Map a Unicode code point to its PC437 byte value (0x80–0xFF).
///
/// Covers accented Latin letters, currency signs, and the shade/block
/// elements. Returns `None` for anything else.
fn unicode_to_cp437(ch: char) -> Option<u8> {
    let byte = match ch {
        // Accented Latin (the set a European web form is likely to send)
        'Ç' => 0x80,
        'ü' => 0x81,
        'é' => 0x82,
        'â' => 0x83,
        'ä' => 0x84,
        'à' => 0x85,
        'å' => 0x86,
        'ç' => 0x87,
        'ê' => 0x88,
        'ë' => 0x89,
        'è' => 0x8A,
        'ï' => 0x8B,
        'î' => 0x8C,
        'ì' => 0x8D,
        'Ä' => 0x8E,
        'Å' => 0x8F,
        'É' => 0x90,
        'æ' => 0x91,
        'Æ' => 0x92,
        'ô' => 0x93,
        'ö' => 0x94,
        'ò' => 0x95,
        'û' => 0x96,
        'ù' => 0x97,
        'ÿ' => 0x98,
        'Ö' => 0x99,
        'Ü' => 0x9A,
        'á' => 0xA0,
        'í' => 0xA1,
        'ó' => 0xA2,
        'ú' => 0xA3,
        'ñ' => 0xA4,
        'Ñ' => 0xA5,

        // Currency and punctuation
        '¢' => 0x9B,
        '£' => 0x9C,
        '¥' => 0x9D,
        '¿' => 0xA8,
        '¡' => 0xAD,
        '«' => 0xAE,
        '»' => 0xAF,
        '°' => 0xF8,
        '·' => 0xFA,

        // Shade and block elements
        '░' => 0xB0,
        '▒' => 0xB1,
        '▓' => 0xB2,
        '█' => 0xDB,
        '▄' => 0xDC,
        '▌' => 0xDD,
        '▐' => 0xDE,
        '▀' => 0xDF,

        _ => return None,
    };
    Some(byte)
}
