//! # Receipt Text Layout
//!
//! The EM5820 is mounted upside-down in the receipt box: `ESC { 1`
//! rotates each glyph line 180°, but the paper still feeds the same way,
//! so multi-line text must be emitted bottom-up to read top-to-bottom
//! once the strip is flipped. This module holds the pure layout logic:
//!
//! - [`wrap`]: greedy word-wrap against a fixed column width
//! - [`inverted_banner`]: the white-on-black header byte sequence
//!
//! Both are pure functions; the write path is
//! [`Printer`](crate::printer::Printer), which emits wrapped lines in
//! reverse order.

use crate::protocol::cp437::{self, FULL_BLOCK};
use crate::protocol::text;

/// Column width of the EM5820 in the default font (58mm paper, Font A).
pub const MAX_CHARS_PER_LINE: usize = 32;

/// Greedy word-wrap of `text` into lines of at most `width` characters.
///
/// Lines are returned in reading order; the upside-down print path emits
/// them reversed. The line list grows as needed; there is no fixed cap
/// on the number of lines.
///
/// ## Algorithm
///
/// Per iteration on the remaining text:
///
/// 1. If it fits in `width` characters, it becomes the final line.
/// 2. Otherwise break at the rightmost space at index ≤ `width`
///    (maximizing characters per line). The space itself is dropped.
/// 3. If no space exists in that range, force a mid-word break at
///    exactly `width` characters.
/// 4. The remainder is trimmed of leading/trailing whitespace and
///    wrapped again.
///
/// Widths are counted in `char`s: the printer expects single-byte
/// code-page text, but counting chars keeps multi-byte input from
/// splitting inside a UTF-8 sequence.
///
/// ## Example
///
/// ```
/// use em5820::layout::wrap;
///
/// let lines = wrap("alpha beta gamma", 11);
/// assert_eq!(lines, vec!["alpha beta", "gamma"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    debug_assert!(width > 0, "wrap width must be at least one column");

    let chars: Vec<char> = text.chars().collect();
    let mut rest = chars.as_slice();
    let mut lines = Vec::new();

    while !rest.is_empty() {
        if rest.len() <= width {
            lines.push(rest.iter().collect());
            break;
        }

        // Rightmost space in the inclusive range 0..=width; forced
        // mid-word break at `width` when none exists.
        let break_at = rest[..=width]
            .iter()
            .rposition(|&c| c == ' ')
            .unwrap_or(width);

        lines.push(rest[..break_at].iter().collect());
        rest = trim_ends(&rest[break_at..]);
    }

    lines
}

/// Strip leading and trailing whitespace from a char slice.
fn trim_ends(mut s: &[char]) -> &[char] {
    while s.first().is_some_and(|c| c.is_whitespace()) {
        s = &s[1..];
    }
    while s.last().is_some_and(|c| c.is_whitespace()) {
        s = &s[..s.len() - 1];
    }
    s
}

/// Build the inverted "highlight block" banner for a short header line.
///
/// The EM5820 renders an inverse-video space as blank paper, which would
/// punch white holes in the banner. Word gaps are therefore drawn as
/// non-inverted full-block glyphs (0xDB under PC437), producing a
/// continuous dark bar with visible separators:
///
/// ```text
/// █▟Sat,▟06▟Jun▟2025▟█      (▟ = inverse text, █ = block glyph)
/// ```
///
/// Emitted sequence: block, inverse-on, then per character (a space
/// becomes inverse-off/block/inverse-on, anything else is sent under
/// inverse video), then inverse-off and a final block. No trailing line
/// feed; the caller feeds paper afterwards.
///
/// Requires PC437 (code page 0); under any other code page 0xDB renders
/// as whatever that page maps it to.
pub fn inverted_banner(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 16);
    out.push(FULL_BLOCK);
    out.extend(text::inverse(true));

    for &b in &cp437::encode(text) {
        if b == b' ' {
            out.extend(text::inverse(false));
            out.push(FULL_BLOCK);
            out.extend(text::inverse(true));
        } else {
            out.push(b);
        }
    }

    out.extend(text::inverse(false));
    out.push(FULL_BLOCK);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const W: usize = MAX_CHARS_PER_LINE;

    #[test]
    fn short_text_is_a_single_line() {
        assert_eq!(wrap("hello", W), vec!["hello"]);
        // Exactly at the limit still fits on one line
        let exact: String = "x".repeat(W);
        assert_eq!(wrap(&exact, W), vec![exact.clone()]);
    }

    #[test]
    fn empty_text_produces_no_lines() {
        assert!(wrap("", W).is_empty());
    }

    #[test]
    fn breaks_at_rightmost_space_within_width() {
        // Spaces at indices 5 and 10; 10 is the rightmost within 11
        assert_eq!(wrap("alpha beta gamma", 11), vec!["alpha beta", "gamma"]);
    }

    #[test]
    fn never_breaks_mid_word_when_a_space_fits() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", W);
        assert_eq!(lines, vec!["the quick brown fox jumps over", "the lazy dog"]);
    }

    #[test]
    fn forces_break_at_width_without_spaces() {
        let long: String = "x".repeat(40);
        let lines = wrap(&long, W);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "x".repeat(W));
        assert_eq!(lines[1], "x".repeat(8));
    }

    #[test]
    fn space_exactly_at_width_is_used() {
        // "aaaa bb" with width 4: index 4 is the space
        assert_eq!(wrap("aaaa bb", 4), vec!["aaaa", "bb"]);
    }

    #[test]
    fn concatenation_reconstructs_text_modulo_break_whitespace() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let lines = wrap(text, 13);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn no_line_cap() {
        let text = "word ".repeat(700);
        let lines = wrap(text.trim_end(), W);
        assert!(lines.len() > 100);
        assert!(lines.iter().all(|l| l.chars().count() <= W));
    }

    #[test]
    fn multibyte_input_counts_chars_not_bytes() {
        let text = "é".repeat(40);
        let lines = wrap(&text, W);
        assert_eq!(lines[0].chars().count(), W);
        assert_eq!(lines[1].chars().count(), 8);
    }

    #[test]
    fn banner_delimits_words_with_blocks() {
        let inv_on = [0x1D, 0x42, 1];
        let inv_off = [0x1D, 0x42, 0];

        let mut expected = vec![FULL_BLOCK];
        expected.extend(inv_on);
        expected.extend(b"AB");
        expected.extend(inv_off);
        expected.push(FULL_BLOCK);
        expected.extend(inv_on);
        expected.extend(b"CD");
        expected.extend(inv_off);
        expected.push(FULL_BLOCK);

        assert_eq!(inverted_banner("AB CD"), expected);
    }

    #[test]
    fn banner_of_empty_text_is_block_pair() {
        let bytes = inverted_banner("");
        assert_eq!(
            bytes,
            vec![FULL_BLOCK, 0x1D, 0x42, 1, 0x1D, 0x42, 0, FULL_BLOCK]
        );
    }

    #[test]
    fn banner_leaves_inverse_disabled() {
        let bytes = inverted_banner("Sat, 06 Jun 2025");
        // Last inverse toggle in the stream must be "off"
        let last_toggle = bytes
            .windows(2)
            .rposition(|w| w == [0x1D, 0x42])
            .map(|i| bytes[i + 2]);
        assert_eq!(last_toggle, Some(0));
        assert_eq!(*bytes.last().unwrap(), FULL_BLOCK);
    }
}
