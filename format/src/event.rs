// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Events of an hday document.

use jiff::civil::{Date, Weekday};

use crate::flag::{Flag, Flags};

/// One line of an hday document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "repr::EventRepr", into = "repr::EventRepr")
)]
pub struct Event {
    /// What the event is bound to.
    pub kind: EventKind,

    /// Free text after `#`, may be empty.
    pub title: String,

    /// Flags of the event. Parsed events always carry normalized flags.
    pub flags: Flags,

    /// The source text this event was parsed from or last written as.
    pub raw: Option<String>,
}

/// The three kinds of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Every day from `start` to `end`, both inclusive.
    Range {
        /// First day.
        start: Date,
        /// Last day.
        end: Date,
    },

    /// Every week on `weekday`, without bounds.
    Weekly {
        /// The day of the week.
        weekday: Weekday,
    },

    /// A line that matched neither grammar. Only `raw` is meaningful.
    Unknown,
}

impl Event {
    /// A range event from `start` to `end` with the default flags.
    #[must_use]
    pub fn range(start: Date, end: Date) -> Self {
        Self::with_kind(EventKind::Range { start, end })
    }

    /// A range event covering a single day.
    #[must_use]
    pub fn single_day(date: Date) -> Self {
        Self::range(date, date)
    }

    /// A weekly event with the default flags.
    #[must_use]
    pub fn weekly(weekday: Weekday) -> Self {
        Self::with_kind(EventKind::Weekly { weekday })
    }

    /// An unrecognized line kept verbatim.
    #[must_use]
    pub fn unknown(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::with_kind(EventKind::Unknown)
        }
    }

    fn with_kind(kind: EventKind) -> Self {
        Self {
            kind,
            title: String::new(),
            flags: [Flag::Holiday].into_iter().collect(),
            raw: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the flags with their normalized form.
    #[must_use]
    pub fn with_flags(mut self, flags: impl IntoIterator<Item = Flag>) -> Self {
        let flags: Flags = flags.into_iter().collect();
        self.flags = flags.normalized();
        self
    }

    /// Sets the source text.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// First day of a range event.
    #[must_use]
    pub const fn start(&self) -> Option<Date> {
        match self.kind {
            EventKind::Range { start, .. } => Some(start),
            _ => None,
        }
    }

    /// Last day of a range event.
    #[must_use]
    pub const fn end(&self) -> Option<Date> {
        match self.kind {
            EventKind::Range { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Weekday of a weekly event.
    #[must_use]
    pub const fn weekday(&self) -> Option<Weekday> {
        match self.kind {
            EventKind::Weekly { weekday } => Some(weekday),
            _ => None,
        }
    }

    /// Whether this event is an unrecognized line.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self.kind, EventKind::Unknown)
    }

    /// Compares kind, dates, weekday, title and the set of flags, ignoring
    /// `raw` and the order of flags.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        let same_flags = self.flags.len() == other.flags.len()
            && self.flags.iter().all(|f| other.flags.contains(f));
        self.kind == other.kind && self.title == other.title && same_flags
    }
}

#[cfg(feature = "serde")]
mod repr {
    //! JSON shape of an event: `{ "type": "range", "start": "2025/01/10", ... }`.

    use jiff::civil::Weekday;

    use super::{Event, EventKind};
    use crate::date::{DateError, format_hday_date, parse_hday_date};
    use crate::flag::Flags;

    #[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum KindTag {
        Range,
        Weekly,
        Unknown,
    }

    #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
    pub struct EventRepr {
        #[serde(rename = "type")]
        kind: KindTag,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        weekday: Option<i8>,

        #[serde(default)]
        flags: Flags,

        #[serde(default)]
        title: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    pub enum EventReprError {
        #[error("range event without a start date")]
        MissingStart,

        #[error("weekly event without a weekday")]
        MissingWeekday,

        #[error("weekday {0} is outside 1 (Monday) ..= 7 (Sunday)")]
        InvalidWeekday(i8),

        #[error(transparent)]
        Date(#[from] DateError),
    }

    impl TryFrom<EventRepr> for Event {
        type Error = EventReprError;

        fn try_from(value: EventRepr) -> Result<Self, Self::Error> {
            let kind = match value.kind {
                KindTag::Range => {
                    let start = value.start.ok_or(EventReprError::MissingStart)?;
                    let start = parse_hday_date(&start)?;
                    let end = match value.end {
                        Some(end) => parse_hday_date(&end)?,
                        None => start,
                    };
                    EventKind::Range { start, end }
                }
                KindTag::Weekly => {
                    let n = value.weekday.ok_or(EventReprError::MissingWeekday)?;
                    let weekday = Weekday::from_monday_one_offset(n)
                        .map_err(|_| EventReprError::InvalidWeekday(n))?;
                    EventKind::Weekly { weekday }
                }
                KindTag::Unknown => EventKind::Unknown,
            };

            Ok(Self {
                kind,
                title: value.title,
                flags: value.flags.normalized(),
                raw: value.raw,
            })
        }
    }

    impl From<Event> for EventRepr {
        fn from(value: Event) -> Self {
            let (kind, start, end, weekday) = match value.kind {
                EventKind::Range { start, end } => (
                    KindTag::Range,
                    Some(format_hday_date(start)),
                    Some(format_hday_date(end)),
                    None,
                ),
                EventKind::Weekly { weekday } => (
                    KindTag::Weekly,
                    None,
                    None,
                    Some(weekday.to_monday_one_offset()),
                ),
                EventKind::Unknown => (KindTag::Unknown, None, None, None),
            };

            Self {
                kind,
                start,
                end,
                weekday,
                flags: value.flags,
                title: value.title,
                raw: value.raw,
            }
        }
    }
}
