//! # Receipt Timestamps
//!
//! Formats the banner header line, e.g. `Sat, 07 Jun 2025`, and parses
//! the optional custom date a submitter can attach to a receipt
//! (`YYYY-MM-DD` or `DD/MM/YYYY`). The weekday in the banner comes from
//! the calendar, for custom dates as well as today's.

use chrono::{Datelike, Local, NaiveDate};

/// Accepted year range for custom dates; anything outside falls back to
/// the current date.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2100;

/// Today's date formatted for the banner.
pub fn current() -> String {
    format_date(Local::now().date_naive())
}

/// Format a date as `Ddd, DD Mon YYYY` (e.g. `Sat, 07 Jun 2025`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

/// Parse a custom date in `YYYY-MM-DD` or `DD/MM/YYYY` form.
///
/// Returns `None` for unparseable input or years outside 1900-2100.
pub fn parse_custom(input: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d/%m/%Y"))
        .ok()?;

    YEAR_RANGE.contains(&date.year()).then_some(date)
}

/// Format a custom date, falling back to the current date when the
/// input is invalid (matching the submit handler's contract: a bad date
/// never fails a receipt, it just gets today's stamp).
pub fn custom_or_current(input: &str) -> String {
    match parse_custom(input) {
        Some(date) => format_date(date),
        None => current(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_with_weekday() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
        assert_eq!(format_date(date), "Sat, 07 Jun 2025");
    }

    #[test]
    fn weekday_is_computed_not_defaulted() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        assert_eq!(format_date(date), "Fri, 06 Jun 2025");
    }

    #[test]
    fn parses_iso_format() {
        assert_eq!(
            parse_custom("2025-06-07"),
            NaiveDate::from_ymd_opt(2025, 6, 7)
        );
    }

    #[test]
    fn parses_slash_format() {
        assert_eq!(
            parse_custom("07/06/2025"),
            NaiveDate::from_ymd_opt(2025, 6, 7)
        );
    }

    #[test]
    fn rejects_garbage_and_out_of_range_years() {
        assert_eq!(parse_custom("yesterday"), None);
        assert_eq!(parse_custom("2025-13-40"), None);
        assert_eq!(parse_custom("1850-01-01"), None);
        assert_eq!(parse_custom("2101-01-01"), None);
    }

    #[test]
    fn invalid_custom_date_falls_back_to_today() {
        assert_eq!(custom_or_current("not a date"), current());
        assert_eq!(custom_or_current("2025-06-07"), "Sat, 07 Jun 2025");
    }
}
