// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Formatter writing events back to hday text.
//!
//! Output is canonical: flag letters follow the letter table order, a range
//! whose end equals its start is written as a single date and titles are
//! separated by `" # "`. Unknown events are written back verbatim.
//!
//! # Example
//!
//! ```
//! use hdaycal_format::{parse, to_text};
//!
//! let events = parse("ba2025/01/10-2025/01/12#Trip\nd1");
//! assert_eq!(to_text(&events)?, "ab2025/01/10-2025/01/12 # Trip\nd1");
//! # Ok::<(), hdaycal_format::FormatError>(())
//! ```

use std::io::{self, Write};

use crate::date::format_hday_date;
use crate::event::{Event, EventKind};

/// Errors raised while formatting events.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// An unknown event has no source text to write back. Events coming from
    /// the parser always have it, so this points at a construction bug.
    #[error("cannot serialize an unknown event without its raw text")]
    MissingRaw,

    /// Writing to the output failed.
    #[error("failed to write hday text: {0}")]
    Io(#[from] io::Error),
}

/// Builds the text line for one event.
///
/// ## Errors
///
/// Returns [`FormatError::MissingRaw`] for an unknown event without `raw`.
pub fn to_line(event: &Event) -> Result<String, FormatError> {
    let token = match event.kind {
        EventKind::Range { start, end } if start == end => format_hday_date(start),
        EventKind::Range { start, end } => {
            format!("{}-{}", format_hday_date(start), format_hday_date(end))
        }
        EventKind::Weekly { weekday } => format!("d{}", weekday.to_monday_one_offset()),
        EventKind::Unknown => return event.raw.clone().ok_or(FormatError::MissingRaw),
    };

    let mut line = event.flags.prefix();
    line.push_str(&token);

    let title = single_line(&event.title);
    if !title.is_empty() {
        line.push_str(" # ");
        line.push_str(&title);
    }
    Ok(line)
}

/// Formats a list of events as a document, lines joined by `\n`.
///
/// ## Errors
///
/// Fails on the first event that cannot be formatted, see [`to_line`].
pub fn to_text(events: &[Event]) -> Result<String, FormatError> {
    FormatOptions::default().write_to_string(events)
}

/// Line ending used between events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,

    /// `\r\n`, for files edited on Windows shares.
    CrLf,
}

impl LineEnding {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Formatting options for documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatOptions {
    /// Separator between lines.
    pub line_ending: LineEnding,

    /// Whether to terminate the last line.
    pub trailing_newline: bool,
}

impl FormatOptions {
    /// Set the line ending.
    #[must_use]
    pub const fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Set whether the last line is terminated.
    #[must_use]
    pub const fn trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Write the events to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if an event cannot be formatted or writing fails.
    pub fn write(&self, events: &[Event], w: &mut impl Write) -> Result<(), FormatError> {
        let sep = self.line_ending.as_str();
        for (i, event) in events.iter().enumerate() {
            if i > 0 {
                w.write_all(sep.as_bytes())?;
            }
            w.write_all(to_line(event)?.as_bytes())?;
        }
        if self.trailing_newline && !events.is_empty() {
            w.write_all(sep.as_bytes())?;
        }
        Ok(())
    }

    /// Write the events to a `String`.
    ///
    /// # Errors
    /// Returns an error if an event cannot be formatted.
    pub fn write_to_string(&self, events: &[Event]) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.write(events, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| FormatError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Titles live on a single line; line breaks become spaces.
fn single_line(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
        .collect()
}
