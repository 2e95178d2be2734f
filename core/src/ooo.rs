// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Proposals from out-of-office calendar entries.

use hdaycal_format::{Event, Flag, HalfDay, parse_hday_date};

const HOLIDAY_KEYWORDS: &[&str] = &["vakantie", "vacation", "holiday"];
const COURSE_KEYWORDS: &[&str] = &["cursus", "training", "course"];

/// Title used for private entries.
pub const PRIVATE_TITLE: &str = "Private";

/// An out-of-office entry from a calendar service.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct OutOfOffice {
    /// Subject line of the entry.
    #[serde(default)]
    pub subject: String,

    /// First day, `YYYY/MM/DD`.
    pub start: String,

    /// Last day, `YYYY/MM/DD`, inclusive.
    pub end: String,

    /// Part of the day for entries that do not last the whole day.
    #[serde(default)]
    pub half_day: HalfDay,

    /// Private entries do not reveal their subject.
    #[serde(default)]
    pub private: bool,
}

impl OutOfOffice {
    /// The flag the subject maps to.
    #[must_use]
    pub fn flag(&self) -> Flag {
        let subject = self.subject.to_lowercase();
        let has = |keywords: &[&str]| keywords.iter().any(|k| subject.contains(k));
        if has(HOLIDAY_KEYWORDS) {
            Flag::Holiday
        } else if has(COURSE_KEYWORDS) {
            Flag::Course
        } else {
            Flag::Business
        }
    }

    fn to_event(&self) -> Option<Event> {
        let (Ok(start), Ok(end)) = (
            parse_hday_date(self.start.trim()),
            parse_hday_date(self.end.trim()),
        ) else {
            tracing::warn!(
                start = %self.start,
                end = %self.end,
                "skipping entry with invalid dates"
            );
            return None;
        };
        if end < start {
            tracing::warn!(
                start = %self.start,
                end = %self.end,
                "skipping entry that ends before it starts"
            );
            return None;
        }

        let title = if self.private {
            PRIVATE_TITLE
        } else {
            self.subject.trim()
        };
        Some(
            Event::range(start, end)
                .with_title(title)
                .with_flags(self.half_day.flag().into_iter().chain([self.flag()])),
        )
    }
}

/// Turns out-of-office entries into proposed range events.
///
/// Entries with invalid dates, or ending before they start, are skipped with
/// a warning.
#[must_use]
pub fn propose_events(entries: &[OutOfOffice]) -> Vec<Event> {
    entries.iter().filter_map(OutOfOffice::to_event).collect()
}

/// Like [`propose_events`], but leaves out proposals already present in
/// `existing`.
#[must_use]
pub fn propose_new_events(entries: &[OutOfOffice], existing: &[Event]) -> Vec<Event> {
    propose_events(entries)
        .into_iter()
        .filter(|p| !existing.iter().any(|e| e.same_content(p)))
        .collect()
}
