// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use hdaycal_format::{
    DateError, Event, EventKind, Flag, FlagFamily, HalfDay, TypeFlag, collapse_type_flags,
    format_hday_date, parse_hday_date,
};
use jiff::civil::Weekday;

/// When a drafted event takes place, as entered by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftWhen {
    /// A date range. An empty `end` means a single day.
    Range {
        /// First day, `YYYY/MM/DD`.
        start: String,
        /// Last day, `YYYY/MM/DD` or empty.
        end: String,
    },

    /// A weekday, 1 (Monday) to 7 (Sunday).
    Weekly {
        /// ISO weekday number.
        weekday: i8,
    },
}

/// Draft for an event, used for creating and editing events.
///
/// A draft holds exactly one category. The implicit holiday is the
/// [`TypeFlag::Holiday`] category and never appears among the flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Dates or weekday.
    pub when: DraftWhen,

    /// The title, may be empty.
    pub title: String,

    /// The single category of the event.
    pub category: TypeFlag,

    /// Full or half day.
    pub half_day: HalfDay,

    /// Location flags.
    pub locations: Vec<Flag>,
}

/// Validation failures of an [`EventDraft`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// A date is malformed or does not exist.
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// The range ends before it starts.
    #[error("the range ends ({end}) before it starts ({start})")]
    InvertedRange {
        /// Start as entered.
        start: String,
        /// End as entered.
        end: String,
    },

    /// The weekday is not between 1 and 7.
    #[error("weekday {0} is outside 1 (Monday) ..= 7 (Sunday)")]
    InvalidWeekday(i8),

    /// A flag in `locations` is not a location flag.
    #[error("'{0}' is not a location flag")]
    NotALocation(Flag),

    /// Unknown lines have no fields to edit.
    #[error("unrecognized lines cannot be edited, only deleted")]
    NotEditable,
}

impl EventDraft {
    /// An empty single-day holiday draft on `start`.
    #[must_use]
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            when: DraftWhen::Range {
                start: start.into(),
                end: String::new(),
            },
            title: String::new(),
            category: TypeFlag::default(),
            half_day: HalfDay::default(),
            locations: Vec::new(),
        }
    }

    /// Loads an event into a draft for editing.
    ///
    /// If the event carries several type flags, only the one with the
    /// highest priority survives.
    ///
    /// ## Errors
    ///
    /// Returns [`DraftError::NotEditable`] for unknown lines.
    pub fn from_event(event: &Event) -> Result<Self, DraftError> {
        let when = match event.kind {
            EventKind::Range { start, end } => DraftWhen::Range {
                start: format_hday_date(start),
                end: format_hday_date(end),
            },
            EventKind::Weekly { weekday } => DraftWhen::Weekly {
                weekday: weekday.to_monday_one_offset(),
            },
            EventKind::Unknown => return Err(DraftError::NotEditable),
        };

        let flags = collapse_type_flags(event.flags.as_slice());
        let category = flags
            .iter()
            .find_map(|f| f.type_flag())
            .unwrap_or_default();
        let locations = flags
            .iter()
            .copied()
            .filter(|f| f.family() == FlagFamily::Location)
            .collect();

        Ok(Self {
            when,
            title: event.title.clone(),
            category,
            half_day: event.flags.half_day(),
            locations,
        })
    }

    /// Validates the draft and builds the event.
    ///
    /// ## Errors
    ///
    /// Fails on malformed or impossible dates, inverted ranges, weekdays
    /// outside 1..=7 and non-location flags in `locations`.
    pub fn build(&self) -> Result<Event, DraftError> {
        let event = match &self.when {
            DraftWhen::Range { start, end } => {
                let first = parse_hday_date(start.trim())?;
                let last = match end.trim() {
                    "" => first,
                    end => parse_hday_date(end)?,
                };
                if last < first {
                    return Err(DraftError::InvertedRange {
                        start: start.clone(),
                        end: end.clone(),
                    });
                }
                Event::range(first, last)
            }
            DraftWhen::Weekly { weekday } => {
                let day = Weekday::from_monday_one_offset(*weekday)
                    .map_err(|_| DraftError::InvalidWeekday(*weekday))?;
                Event::weekly(day)
            }
        };

        if let Some(flag) = self
            .locations
            .iter()
            .find(|f| f.family() != FlagFamily::Location)
        {
            return Err(DraftError::NotALocation(*flag));
        }

        let flags: Vec<Flag> = self
            .half_day
            .flag()
            .into_iter()
            .chain(Some(self.category.flag()))
            .chain(self.locations.iter().copied())
            .collect();

        Ok(event
            .with_title(self.title.trim())
            .with_flags(collapse_type_flags(&flags)))
    }
}

#[cfg(test)]
mod tests {
    use hdaycal_format::{parse, to_line};
    use jiff::civil::date;

    use super::*;

    #[test]
    fn builds_single_day_holiday() {
        let event = EventDraft::new("2025/07/14").build().unwrap();
        assert_eq!(event.start(), Some(date(2025, 7, 14)));
        assert_eq!(event.end(), Some(date(2025, 7, 14)));
        assert_eq!(event.flags.as_slice(), [Flag::Holiday]);
        assert_eq!(to_line(&event).unwrap(), "2025/07/14");
    }

    #[test]
    fn builds_flagged_range() {
        let draft = EventDraft {
            when: DraftWhen::Range {
                start: "2025/09/01".to_string(),
                end: "2025/09/05".to_string(),
            },
            title: "  Conference ".to_string(),
            category: TypeFlag::Business,
            half_day: HalfDay::Afternoon,
            locations: vec![Flag::CanFly],
        };
        let event = draft.build().unwrap();
        assert_eq!(
            to_line(&event).unwrap(),
            "pbf2025/09/01-2025/09/05 # Conference"
        );
    }

    #[test]
    fn rejects_inverted_ranges() {
        let draft = EventDraft {
            when: DraftWhen::Range {
                start: "2025/09/05".to_string(),
                end: "2025/09/01".to_string(),
            },
            ..EventDraft::new("")
        };
        assert!(matches!(
            draft.build(),
            Err(DraftError::InvertedRange { .. })
        ));
    }

    #[test]
    fn rejects_invalid_input() {
        let draft = EventDraft::new("2025/02/30");
        assert!(matches!(
            draft.build(),
            Err(DraftError::InvalidDate(DateError::Calendar(_)))
        ));

        let draft = EventDraft {
            when: DraftWhen::Weekly { weekday: 0 },
            ..EventDraft::new("")
        };
        assert_eq!(draft.build(), Err(DraftError::InvalidWeekday(0)));

        let draft = EventDraft {
            locations: vec![Flag::Ill],
            ..EventDraft::new("2025/01/01")
        };
        assert_eq!(draft.build(), Err(DraftError::NotALocation(Flag::Ill)));
    }

    #[test]
    fn editing_collapses_type_flags() {
        let events = parse("uib2025/04/01 # Mixed");
        let draft = EventDraft::from_event(&events[0]).unwrap();
        assert_eq!(draft.category, TypeFlag::Business);

        let rebuilt = draft.build().unwrap();
        assert_eq!(to_line(&rebuilt).unwrap(), "b2025/04/01 # Mixed");
    }

    #[test]
    fn editing_strips_implicit_holiday() {
        let events = parse("anw2025/04/01-2025/04/02");
        let draft = EventDraft::from_event(&events[0]).unwrap();
        assert_eq!(draft.category, TypeFlag::Holiday);
        assert_eq!(draft.half_day, HalfDay::Morning);
        assert_eq!(draft.locations, [Flag::NoFly, Flag::Onsite]);

        let rebuilt = draft.build().unwrap();
        assert!(rebuilt.same_content(&events[0]));
    }

    #[test]
    fn edits_weekly_events() {
        let events = parse("kd2");
        let mut draft = EventDraft::from_event(&events[0]).unwrap();
        assert_eq!(draft.when, DraftWhen::Weekly { weekday: 2 });

        draft.when = DraftWhen::Weekly { weekday: 4 };
        draft.half_day = HalfDay::Full;
        assert_eq!(to_line(&draft.build().unwrap()).unwrap(), "kd4");
    }

    #[test]
    fn unknown_lines_are_not_editable() {
        let events = parse("what is this");
        assert_eq!(
            EventDraft::from_event(&events[0]),
            Err(DraftError::NotEditable)
        );
    }
}
