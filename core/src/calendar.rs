// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use hdaycal_format::{Event, EventKind};
use jiff::civil::Date;

/// Errors from building calendar views.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year and month do not name a calendar month.
    #[error("invalid month {year}/{month}")]
    InvalidMonth {
        /// Requested year.
        year: i16,
        /// Requested month.
        month: i8,
    },
}

/// Whether `event` takes place on `date`.
///
/// Ranges match inclusively, weekly events match on the weekday, unknown
/// lines never match.
#[must_use]
pub fn occurs_on(event: &Event, date: Date) -> bool {
    match event.kind {
        EventKind::Range { start, end } => start <= date && date <= end,
        EventKind::Weekly { weekday } => date.weekday() == weekday,
        EventKind::Unknown => false,
    }
}

/// The events taking place on `date`, in input order.
#[must_use]
pub fn events_on(events: &[Event], date: Date) -> Vec<&Event> {
    events.iter().filter(|e| occurs_on(e, date)).collect()
}

/// One day of a [`month_view`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEvents {
    /// The day.
    pub date: Date,

    /// Positions of the events taking place that day, in input order.
    pub events: Vec<usize>,
}

/// Evaluates every day of a month against the events.
///
/// ## Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `year`/`month` is not a month.
pub fn month_view(events: &[Event], year: i16, month: i8) -> Result<Vec<DayEvents>, CalendarError> {
    let first = Date::new(year, month, 1).map_err(|_| CalendarError::InvalidMonth { year, month })?;

    let days = (1..=first.days_in_month())
        .filter_map(|day| Date::new(year, month, day).ok())
        .map(|date| DayEvents {
            date,
            events: events
                .iter()
                .enumerate()
                .filter(|(_, e)| occurs_on(e, date))
                .map(|(i, _)| i)
                .collect(),
        })
        .collect();
    Ok(days)
}
