// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar dates as written in hday documents.
//!
//! The format only knows one shape, `YYYY/MM/DD`, fixed-width and zero-padded,
//! so the lexicographic order of the text equals the chronological order of
//! the dates.

use jiff::civil::Date;

/// Errors produced when a date string cannot be turned into a calendar date.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The text does not have the `YYYY/MM/DD` shape.
    #[error("'{0}' is not a YYYY/MM/DD date")]
    Shape(String),

    /// The shape is right but the day does not exist, e.g. `2025/02/30`.
    #[error("'{0}' is not a valid calendar date")]
    Calendar(String),
}

/// Splits `s` into year, month and day if it matches `DDDD<sep>DD<sep>DD`.
fn split_fixed(s: &str, sep: u8) -> Option<(i16, i8, i8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes.get(4) != Some(&sep) || bytes.get(7) != Some(&sep) {
        return None;
    }

    let digits = |range: std::ops::Range<usize>| {
        let part = s.get(range)?;
        if part.bytes().all(|b| b.is_ascii_digit()) {
            Some(part)
        } else {
            None
        }
    };

    let year = digits(0..4)?.parse().ok()?;
    let month = digits(5..7)?.parse().ok()?;
    let day = digits(8..10)?.parse().ok()?;
    Some((year, month, day))
}

/// Returns true if `s` is a `YYYY/MM/DD` date naming a real calendar day.
///
/// Anything that is not exactly four digits, a slash, two digits, a slash and
/// two digits is rejected before looking at the values. Overflowing days such
/// as `2025/04/31` or `2023/02/29` are rejected as well.
///
/// ```
/// # use hdaycal_format::is_valid_date;
/// assert!(is_valid_date("2024/02/29"));
/// assert!(!is_valid_date("2023/02/29"));
/// assert!(!is_valid_date("2025-12-18"));
/// ```
#[must_use]
pub fn is_valid_date(s: &str) -> bool {
    parse_hday_date(s).is_ok()
}

/// Parses a `YYYY/MM/DD` date.
///
/// ## Errors
///
/// Returns [`DateError::Shape`] when the text has the wrong shape and
/// [`DateError::Calendar`] when the day does not exist.
pub fn parse_hday_date(s: &str) -> Result<Date, DateError> {
    let (year, month, day) = split_fixed(s, b'/').ok_or_else(|| DateError::Shape(s.to_owned()))?;
    Date::new(year, month, day).map_err(|_| DateError::Calendar(s.to_owned()))
}

/// Formats a date as `YYYY/MM/DD`.
#[must_use]
pub fn format_hday_date(date: Date) -> String {
    format!(
        "{:04}/{:02}/{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Converts a `YYYY-MM-DD` date, as returned by public holiday services, to
/// the `YYYY/MM/DD` form. Returns `None` if the input is not a valid date.
#[must_use]
pub fn iso_to_hday_date(s: &str) -> Option<String> {
    let (year, month, day) = split_fixed(s, b'-')?;
    Date::new(year, month, day).ok().map(format_hday_date)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn accepts_leap_day_in_leap_year() {
        assert!(is_valid_date("2024/02/29"));
        assert!(is_valid_date("2000/02/29"));
    }

    #[test]
    fn rejects_overflowing_days() {
        assert!(!is_valid_date("2023/02/29"));
        assert!(!is_valid_date("1900/02/29"));
        assert!(!is_valid_date("2025/04/31"));
        assert!(!is_valid_date("2025/12/32"));
        assert!(!is_valid_date("2025/13/01"));
        assert!(!is_valid_date("2025/00/10"));
        assert!(!is_valid_date("2025/01/00"));
    }

    #[test]
    fn rejects_wrong_shapes() {
        for s in [
            "2025-12-18",
            "2025/1/05",
            "25/01/05",
            "2025/01/5",
            "2025/01/05/",
            "2025/01",
            "",
            "abcd/ef/gh",
            " 2025/01/05",
            "+202/01/05",
        ] {
            assert!(!is_valid_date(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn distinguishes_shape_from_calendar_errors() {
        assert_eq!(
            parse_hday_date("2025.01.01"),
            Err(DateError::Shape("2025.01.01".to_string()))
        );
        assert_eq!(
            parse_hday_date("2025/02/30"),
            Err(DateError::Calendar("2025/02/30".to_string()))
        );
    }

    #[test]
    fn parses_and_formats_dates() {
        let d = parse_hday_date("2025/03/07").unwrap();
        assert_eq!(d, date(2025, 3, 7));
        assert_eq!(format_hday_date(d), "2025/03/07");
        assert_eq!(format_hday_date(date(987, 1, 2)), "0987/01/02");
    }

    #[test]
    fn converts_iso_dates() {
        assert_eq!(iso_to_hday_date("2025-12-25"), Some("2025/12/25".to_string()));
        assert_eq!(iso_to_hday_date("2025/12/25"), None);
        assert_eq!(iso_to_hday_date("2025-02-30"), None);
    }
}
