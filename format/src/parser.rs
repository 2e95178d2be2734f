// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line parser for hday documents.
//!
//! Grammar, one event per line:
//!
//! ```txt
//! range   = [prefix] date ["-" date] [title]
//! weekly  = [prefix] "d" weekday [suffix] [title]
//! date    = 4DIGIT "/" 2DIGIT "/" 2DIGIT
//! weekday = "1" .. "7"        ; ISO, 1 is Monday
//! title   = *WSP "#" *WSP text
//! ```
//!
//! `suffix` is the placement of flag letters used by older writers (`d1b`).
//! Lines that match neither rule are kept as unknown events.

use std::fmt;
use std::sync::OnceLock;

use jiff::civil::Weekday;
use regex::{Captures, Regex};

use crate::date::parse_hday_date;
use crate::event::{Event, EventKind};
use crate::flag::{Flags, decode_prefix};

/// Output of [`parse_with_warnings`].
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    /// Parsed events, one per non-blank line, in document order.
    pub events: Vec<Event>,

    /// Problems found while parsing. None of them lose data.
    pub warnings: Vec<ParseWarning>,
}

/// A recoverable problem on one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Line number, starting from 1 and counting blank lines.
    pub line: usize,

    /// What was wrong.
    pub kind: ParseWarningKind,
}

/// Kinds of [`ParseWarning`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarningKind {
    /// A prefix letter that is not in the flag table. The letter is dropped.
    UnknownFlag(char),

    /// A range line naming a day that does not exist. The line is kept as
    /// an unknown event.
    InvalidDate(String),

    /// The line matched no rule and is kept as an unknown event.
    UnrecognizedLine,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ParseWarningKind::UnknownFlag(c) => write!(f, "unknown flag letter '{c}' ignored"),
            ParseWarningKind::InvalidDate(d) => write!(f, "invalid date '{d}', line kept as is"),
            ParseWarningKind::UnrecognizedLine => f.write_str("unrecognized line kept as is"),
        }
    }
}

/// Parses a whole document into events.
///
/// Never fails: unrecognized lines become [`EventKind::Unknown`] events and
/// unknown flag letters are dropped, both with a logged warning.
///
/// ```
/// # use hdaycal_format::{EventKind, parse};
/// let events = parse("2024/12/23-2025/01/05 # Christmas\nbd1 # Monday trips\n???");
/// assert_eq!(events.len(), 3);
/// assert!(matches!(events[0].kind, EventKind::Range { .. }));
/// assert!(matches!(events[1].kind, EventKind::Weekly { .. }));
/// assert!(events[2].is_unknown());
/// ```
#[must_use]
pub fn parse(text: &str) -> Vec<Event> {
    parse_with_warnings(text).events
}

/// Parses a whole document, also returning the warnings.
#[must_use]
pub fn parse_with_warnings(text: &str) -> Parsed {
    let mut parsed = Parsed::default();
    for (index, line) in split_lines(text).enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = parse_line(line, index + 1, &mut parsed.warnings);
        parsed.events.push(event);
    }
    parsed
}

/// Splits a document into lines.
///
/// Unlike [`str::lines`], a lone `\r` also ends a line, so no line handed to
/// the parser can carry a carriage return into a title.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());
    std::iter::from_fn(move || {
        let s = rest?;
        let Some(i) = s.find(['\r', '\n']) else {
            rest = None;
            return Some(s);
        };
        let (line, tail) = s.split_at(i);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.get(1..))
            .filter(|t| !t.is_empty());
        Some(line)
    })
}

/// Parses one trimmed, non-blank line.
fn parse_line(line: &str, lineno: usize, warnings: &mut Vec<ParseWarning>) -> Event {
    if let Some(caps) = range_regex().captures(line) {
        match range_kind(&caps) {
            Ok(kind) => return build(line, lineno, kind, &caps, warnings),
            Err(date) => {
                tracing::warn!(lineno, line, %date, "invalid date, keeping line as is");
                warnings.push(ParseWarning {
                    line: lineno,
                    kind: ParseWarningKind::InvalidDate(date),
                });
                return Event::unknown(line);
            }
        }
    }

    if let Some(caps) = weekly_regex().captures(line) {
        let weekday = caps
            .name("weekday")
            .and_then(|m| m.as_str().parse::<i8>().ok())
            .and_then(|n| Weekday::from_monday_one_offset(n).ok());
        if let Some(weekday) = weekday {
            return build(line, lineno, EventKind::Weekly { weekday }, &caps, warnings);
        }
    }

    tracing::warn!(lineno, line, "unrecognized line, keeping it as is");
    warnings.push(ParseWarning {
        line: lineno,
        kind: ParseWarningKind::UnrecognizedLine,
    });
    Event::unknown(line)
}

/// Reads the dates of a range line. Returns the offending text on failure.
fn range_kind(caps: &Captures<'_>) -> Result<EventKind, String> {
    let date = |name: &str| caps.name(name).map(|m| m.as_str());
    let parse = |s: &str| parse_hday_date(s).map_err(|_| s.to_owned());

    let start = parse(date("start").unwrap_or_default())?;
    let end = match date("end") {
        Some(end) => parse(end)?,
        None => start,
    };
    Ok(EventKind::Range { start, end })
}

fn build(
    line: &str,
    lineno: usize,
    kind: EventKind,
    caps: &Captures<'_>,
    warnings: &mut Vec<ParseWarning>,
) -> Event {
    let letters = ["prefix", "suffix"]
        .iter()
        .filter_map(|name| caps.name(name))
        .map(|m| m.as_str())
        .collect::<String>();

    let (flags, unknown) = decode_prefix(&letters);
    warnings.extend(unknown.into_iter().map(|c| ParseWarning {
        line: lineno,
        kind: ParseWarningKind::UnknownFlag(c),
    }));

    let title = caps
        .name("title")
        .map(|m| m.as_str().trim().to_owned())
        .unwrap_or_default();

    Event {
        kind,
        title,
        flags: Flags::normalized(&flags),
        raw: Some(line.to_owned()),
    }
}

fn range_regex() -> &'static Regex {
    const RE: &str = r"^(?P<prefix>[A-Za-z]*)(?P<start>[0-9]{4}/[0-9]{2}/[0-9]{2})(?:-(?P<end>[0-9]{4}/[0-9]{2}/[0-9]{2}))?(?:\s*#\s*(?P<title>.*))?$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).expect("range pattern is valid"))
}

fn weekly_regex() -> &'static Regex {
    const RE: &str = r"^(?P<prefix>[A-Za-z]*)[dD](?P<weekday>[1-7])(?P<suffix>[A-Za-z]*)(?:\s*#\s*(?P<title>.*))?$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(RE).expect("weekly pattern is valid"))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::flag::Flag;

    #[test]
    fn splits_on_every_line_ending() {
        let lines: Vec<_> = split_lines("a\nb\r\nc\rd\n\ne\n").collect();
        assert_eq!(lines, ["a", "b", "c", "d", "", "e"]);
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\r").collect::<Vec<_>>(), [""]);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let parsed = parse_with_warnings("2025/01/01 # a\rb");
        assert_eq!(parsed.events.len(), 2);
        assert_eq!(parsed.events[0].title, "a");
        assert!(parsed.events[1].is_unknown());
        assert_eq!(parsed.warnings[0].line, 2);
    }

    #[test]
    fn parses_single_day_range() {
        let events = parse("2025/05/01");
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(
            event.kind,
            EventKind::Range {
                start: date(2025, 5, 1),
                end: date(2025, 5, 1)
            }
        );
        assert_eq!(event.flags.as_slice(), [Flag::Holiday]);
        assert_eq!(event.title, "");
        assert_eq!(event.raw.as_deref(), Some("2025/05/01"));
    }

    #[test]
    fn parses_range_with_prefix_and_title() {
        let events = parse("  ab2025/03/10-2025/03/14   #   Fair in Paris  ");
        let event = &events[0];
        assert_eq!(event.start(), Some(date(2025, 3, 10)));
        assert_eq!(event.end(), Some(date(2025, 3, 14)));
        assert_eq!(event.flags.as_slice(), [Flag::HalfAm, Flag::Business]);
        assert_eq!(event.title, "Fair in Paris");
        assert_eq!(
            event.raw.as_deref(),
            Some("ab2025/03/10-2025/03/14   #   Fair in Paris")
        );
    }

    #[test]
    fn title_may_contain_hashes() {
        let events = parse("2025/03/10#a # b");
        assert_eq!(events[0].title, "a # b");
    }

    #[test]
    fn parses_weekly_with_prefix() {
        let events = parse("bd1 # Monday trips");
        let event = &events[0];
        assert_eq!(event.weekday(), Some(Weekday::Monday));
        assert_eq!(event.flags.as_slice(), [Flag::Business]);
        assert_eq!(event.title, "Monday trips");
    }

    #[test]
    fn parses_weekly_with_legacy_suffix() {
        let events = parse("d5pb");
        let event = &events[0];
        assert_eq!(event.weekday(), Some(Weekday::Friday));
        assert_eq!(event.flags.as_slice(), [Flag::HalfPm, Flag::Business]);
    }

    #[test]
    fn weekday_digits_are_iso() {
        assert_eq!(parse("d7")[0].weekday(), Some(Weekday::Sunday));
        assert!(parse("d0")[0].is_unknown());
        assert!(parse("d8")[0].is_unknown());
    }

    #[test]
    fn invalid_dates_become_unknown() {
        let parsed = parse_with_warnings("2025/02/30-2025/03/02 # oops");
        assert!(parsed.events[0].is_unknown());
        assert_eq!(
            parsed.warnings,
            [ParseWarning {
                line: 1,
                kind: ParseWarningKind::InvalidDate("2025/02/30".to_string())
            }]
        );
    }

    #[test]
    fn unknown_letters_are_reported_with_line_numbers() {
        let parsed = parse_with_warnings("\n\nxb2025/01/01\n");
        assert_eq!(parsed.events[0].flags.as_slice(), [Flag::Business]);
        assert_eq!(
            parsed.warnings,
            [ParseWarning {
                line: 3,
                kind: ParseWarningKind::UnknownFlag('x')
            }]
        );
    }

    #[test]
    fn garbage_is_preserved() {
        let parsed = parse_with_warnings("hello world\n2025/01/01");
        assert_eq!(parsed.events.len(), 2);
        let garbage = &parsed.events[0];
        assert!(garbage.is_unknown());
        assert_eq!(garbage.raw.as_deref(), Some("hello world"));
        assert_eq!(garbage.flags.as_slice(), [Flag::Holiday]);
        assert_eq!(parsed.warnings[0].kind, ParseWarningKind::UnrecognizedLine);
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let lf = parse("2025/01/01\n\n   \nd2\n");
        let crlf = parse("2025/01/01\r\n\r\n   \r\nd2\r\n");
        assert_eq!(lf, crlf);
        assert_eq!(lf.len(), 2);
    }

    #[test]
    fn trailing_text_without_hash_is_unknown() {
        assert!(parse("2025/01/01 holiday")[0].is_unknown());
        assert!(parse("2025/01/01-")[0].is_unknown());
    }

    #[test]
    fn warning_display() {
        let warning = ParseWarning {
            line: 4,
            kind: ParseWarningKind::UnknownFlag('q'),
        };
        assert_eq!(warning.to_string(), "line 4: unknown flag letter 'q' ignored");
    }
}
