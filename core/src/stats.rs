// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use hdaycal_format::{Event, EventKind, TypeFlag};
use jiff::Span;
use jiff::civil::{Date, Weekday};

/// Errors from computing statistics.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// The year is outside the supported calendar range.
    #[error("year {0} is out of range")]
    InvalidYear(i16),
}

/// Days taken per category within one year.
///
/// Every category is present, unused ones with `0.0`. Iteration follows the
/// category priority order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct YearStats {
    /// The year the numbers belong to.
    pub year: i16,

    /// Days per category, in half-day steps.
    pub days: BTreeMap<TypeFlag, f64>,
}

impl YearStats {
    fn empty(year: i16) -> Self {
        Self {
            year,
            days: TypeFlag::all().map(|t| (t, 0.0)).collect(),
        }
    }

    /// Days counted toward `category`.
    #[must_use]
    pub fn get(&self, category: TypeFlag) -> f64 {
        self.days.get(&category).copied().unwrap_or_default()
    }

    /// Days over all categories.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.days.values().sum()
    }

    /// Categories and their days in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeFlag, f64)> + '_ {
        self.days.iter().map(|(t, d)| (*t, *d))
    }
}

/// Sums up the days each category takes within `year`.
///
/// Ranges are clipped to the year, weekly events count each matching day of
/// the year, and a single half-day flag halves the count. Each event counts
/// toward its primary category only. Unknown lines are ignored.
///
/// ## Errors
///
/// Returns [`StatsError::InvalidYear`] if the year cannot be represented.
pub fn year_stats(events: &[Event], year: i16) -> Result<YearStats, StatsError> {
    let bounds = YearBounds::new(year)?;
    let mut stats = YearStats::empty(year);
    for event in events {
        let days = bounds.days_of(event);
        if days > 0.0 {
            *stats.days.entry(event.flags.primary_type()).or_default() += days;
        }
    }
    tracing::debug!(year, total = stats.total(), "computed year statistics");
    Ok(stats)
}

/// Days `event` takes within `year`, already weighted for half days.
///
/// ## Errors
///
/// Returns [`StatsError::InvalidYear`] if the year cannot be represented.
pub fn event_days_in_year(event: &Event, year: i16) -> Result<f64, StatsError> {
    Ok(YearBounds::new(year)?.days_of(event))
}

#[derive(Debug, Clone, Copy)]
struct YearBounds {
    first: Date,
    last: Date,
}

impl YearBounds {
    fn new(year: i16) -> Result<Self, StatsError> {
        let first = Date::new(year, 1, 1).map_err(|_| StatsError::InvalidYear(year))?;
        let last = Date::new(year, 12, 31).map_err(|_| StatsError::InvalidYear(year))?;
        Ok(Self { first, last })
    }

    fn days_of(self, event: &Event) -> f64 {
        let count = match event.kind {
            EventKind::Range { start, end } => self.range_days(start, end),
            EventKind::Weekly { weekday } => self.weekly_days(weekday),
            EventKind::Unknown => 0,
        };
        f64::from(count) * event.flags.half_day().factor()
    }

    fn range_days(self, start: Date, end: Date) -> i32 {
        let start = start.max(self.first);
        let end = end.min(self.last);
        if end < start {
            return 0;
        }
        days_between(start, end) + 1
    }

    fn weekly_days(self, weekday: Weekday) -> i32 {
        let offset = (weekday.to_monday_zero_offset() - self.first.weekday().to_monday_zero_offset())
            .rem_euclid(7);
        let Ok(first) = self.first.checked_add(Span::new().days(offset)) else {
            return 0;
        };
        if first > self.last {
            return 0;
        }
        days_between(first, self.last) / 7 + 1
    }
}

fn days_between(a: Date, b: Date) -> i32 {
    a.until(b).map_or(0, |span| span.get_days())
}

#[cfg(test)]
mod tests {
    use hdaycal_format::Flag;
    use jiff::civil::date;

    use super::*;

    #[test]
    fn reports_all_categories() {
        let stats = year_stats(&[], 2025).unwrap();
        assert_eq!(stats.days.len(), 8);
        assert!(stats.iter().all(|(_, d)| d == 0.0));
        assert_eq!(stats.iter().next().map(|(t, _)| t), Some(TypeFlag::Business));
    }

    #[test]
    fn clips_ranges_to_the_year() {
        let event = Event::range(date(2024, 12, 20), date(2025, 1, 10));
        let stats = year_stats(std::slice::from_ref(&event), 2025).unwrap();
        assert_eq!(stats.get(TypeFlag::Holiday), 10.0);

        let stats = year_stats(&[event], 2024).unwrap();
        assert_eq!(stats.get(TypeFlag::Holiday), 12.0);
    }

    #[test]
    fn ignores_ranges_outside_the_year() {
        let events = [
            Event::range(date(2023, 5, 1), date(2023, 5, 3)),
            Event::range(date(2025, 5, 3), date(2025, 5, 1)),
        ];
        let stats = year_stats(&events, 2025).unwrap();
        assert_eq!(stats.total(), 0.0);
    }

    #[test]
    fn halves_single_half_day_flags() {
        let events = [
            Event::single_day(date(2025, 3, 3)).with_flags([Flag::HalfAm]),
            Event::single_day(date(2025, 3, 4)).with_flags([Flag::HalfPm, Flag::Ill]),
            Event::single_day(date(2025, 3, 5)).with_flags([Flag::HalfAm, Flag::HalfPm]),
        ];
        let stats = year_stats(&events, 2025).unwrap();
        assert_eq!(stats.get(TypeFlag::Holiday), 1.5);
        assert_eq!(stats.get(TypeFlag::Ill), 0.5);
    }

    #[test]
    fn counts_weekdays_in_the_year() {
        // 2025 starts on a Wednesday and has 53 Wednesdays
        let stats = year_stats(&[Event::weekly(Weekday::Wednesday)], 2025).unwrap();
        assert_eq!(stats.get(TypeFlag::Holiday), 53.0);

        let stats = year_stats(&[Event::weekly(Weekday::Tuesday)], 2025).unwrap();
        assert_eq!(stats.get(TypeFlag::Holiday), 52.0);

        // 2024 is a leap year starting on a Monday: 53 Mondays and Tuesdays
        let stats = year_stats(&[Event::weekly(Weekday::Tuesday)], 2024).unwrap();
        assert_eq!(stats.get(TypeFlag::Holiday), 53.0);
    }

    #[test]
    fn weekly_half_days() {
        let event = Event::weekly(Weekday::Friday).with_flags([Flag::HalfPm, Flag::Other]);
        let stats = year_stats(&[event], 2025).unwrap();
        assert_eq!(stats.get(TypeFlag::Other), 26.0);
    }

    #[test]
    fn counts_toward_primary_type_only() {
        let event =
            Event::range(date(2025, 6, 2), date(2025, 6, 3)).with_flags([Flag::Other, Flag::Course]);
        let stats = year_stats(&[event], 2025).unwrap();
        assert_eq!(stats.get(TypeFlag::Course), 2.0);
        assert_eq!(stats.get(TypeFlag::Other), 0.0);
        assert_eq!(stats.total(), 2.0);
    }

    #[test]
    fn ignores_unknown_lines() {
        let stats = year_stats(&[Event::unknown("2025/01/01")], 2025).unwrap();
        assert_eq!(stats.total(), 0.0);
    }

    #[test]
    fn rejects_unrepresentable_years() {
        assert_eq!(
            year_stats(&[], i16::MAX),
            Err(StatsError::InvalidYear(i16::MAX))
        );
    }

    #[test]
    fn single_event_contribution() {
        let event = Event::range(date(2025, 12, 30), date(2026, 1, 2)).with_flags([Flag::HalfAm]);
        assert_eq!(event_days_in_year(&event, 2025).unwrap(), 1.0);
        assert_eq!(event_days_in_year(&event, 2026).unwrap(), 1.0);
    }
}
