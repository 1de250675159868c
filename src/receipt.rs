//! # Receipts and the Print Mailbox
//!
//! A [`Receipt`] is one submitted message plus its timestamp header.
//! Printing follows a fixed physical order dictated by the upside-down
//! mount: the wrapped body goes out first and the banner header last,
//! because whatever prints last sits on top once the strip is torn off
//! and flipped.
//!
//! [`Mailbox`] is the hand-off between whatever accepts submissions and
//! the loop that prints them: a single slot with an explicit post/take
//! contract. One producer deposits, one consumer drains.

use crate::error::Em5820Error;
use crate::printer::Printer;
use crate::transport::Transport;

/// One submitted receipt: free-form message plus a preformatted
/// timestamp header (see [`crate::timestamp`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub message: String,
    pub timestamp: String,
}

impl Receipt {
    pub fn new(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }

    /// A receipt stamped with the current date.
    pub fn with_current_timestamp(message: impl Into<String>) -> Self {
        Self::new(message, crate::timestamp::current())
    }

    /// Print this receipt and advance past the tear-off point.
    ///
    /// Emission order is load-bearing: body first (bottom of the flipped
    /// strip), banner header second (top), then a 5-line feed.
    pub fn print<T: Transport>(&self, printer: &mut Printer<T>) -> Result<(), Em5820Error> {
        printer.print_wrapped_upside_down(&self.message)?;
        printer.print_inverted(&self.timestamp)?;
        printer.feed(5)
    }
}

/// Single-slot mailbox between the submission side and the print loop.
///
/// Contract: one producer [`post`](Mailbox::post)s, one consumer
/// [`take`](Mailbox::take)s-and-clears. Posting over an unprinted
/// receipt displaces it and hands it back to the producer, which can
/// decide whether that is a drop or a retry.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Option<Receipt>,
}

impl Mailbox {
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Deposit a receipt, returning the one it displaced (if any).
    pub fn post(&mut self, receipt: Receipt) -> Option<Receipt> {
        self.slot.replace(receipt)
    }

    /// Remove and return the pending receipt, leaving the slot empty.
    pub fn take(&mut self) -> Option<Receipt> {
        self.slot.take()
    }

    /// Whether a receipt is waiting to be printed.
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::protocol::commands;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_body_then_banner_then_feed() {
        let mut printer = Printer::new(Vec::new());
        let receipt = Receipt::new("took the long way home", "Sat, 07 Jun 2025");
        receipt.print(&mut printer).unwrap();

        let mut expected = Vec::new();
        expected.extend(b"took the long way home");
        expected.push(commands::LF);
        expected.extend(layout::inverted_banner("Sat, 07 Jun 2025"));
        expected.extend(commands::feed(5));
        assert_eq!(printer.transport(), &expected);
    }

    #[test]
    fn body_lines_are_reversed_before_the_banner() {
        let mut printer = Printer::new(Vec::new());
        let receipt = Receipt::new(
            "one two three four five six seven eight",
            "Sat, 07 Jun 2025",
        );
        receipt.print(&mut printer).unwrap();

        let bytes = printer.transport();
        let body_end = bytes
            .windows(2)
            .position(|w| w == [0x1D, 0x42])
            .unwrap();
        // Banner's opening full block sits right before the first
        // inverse toggle
        let body = &bytes[..body_end - 1];
        assert_eq!(body, b"seven eight\none two three four five six\n");
    }

    #[test]
    fn mailbox_take_clears_the_slot() {
        let mut mailbox = Mailbox::new();
        assert!(!mailbox.is_pending());
        assert!(mailbox.take().is_none());

        mailbox.post(Receipt::new("a", "t"));
        assert!(mailbox.is_pending());
        assert_eq!(mailbox.take().unwrap().message, "a");
        assert!(!mailbox.is_pending());
    }

    #[test]
    fn mailbox_post_displaces_unprinted_receipt() {
        let mut mailbox = Mailbox::new();
        assert!(mailbox.post(Receipt::new("first", "t")).is_none());
        let displaced = mailbox.post(Receipt::new("second", "t")).unwrap();
        assert_eq!(displaced.message, "first");
        assert_eq!(mailbox.take().unwrap().message, "second");
    }
}
