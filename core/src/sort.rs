// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use hdaycal_format::{Event, EventKind};

/// Returns the events in display order, leaving the input untouched.
///
/// Range events come first by start date, then weekly events by weekday
/// (Monday first), then unknown lines. Events with equal keys keep their
/// relative input order.
#[must_use]
pub fn sort_events(events: &[Event]) -> Vec<Event> {
    sort_indices(events)
        .into_iter()
        .filter_map(|i| events.get(i).cloned())
        .collect()
}

/// Returns the positions of `events` in display order, see [`sort_events`].
#[must_use]
pub fn sort_indices(events: &[Event]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..events.len()).collect();
    // `sort_by` is stable, which keeps input order among equal keys
    indices.sort_by(|&a, &b| match (events.get(a), events.get(b)) {
        (Some(a), Some(b)) => compare(a, b),
        _ => Ordering::Equal,
    });
    indices
}

/// Total display order between two events.
#[must_use]
pub fn compare(a: &Event, b: &Event) -> Ordering {
    match (&a.kind, &b.kind) {
        (EventKind::Range { start: x, .. }, EventKind::Range { start: y, .. }) => x.cmp(y),
        (EventKind::Weekly { weekday: x }, EventKind::Weekly { weekday: y }) => x
            .to_monday_one_offset()
            .cmp(&y.to_monday_one_offset()),
        _ => bucket(a).cmp(&bucket(b)),
    }
}

const fn bucket(event: &Event) -> u8 {
    match event.kind {
        EventKind::Range { .. } => 0,
        EventKind::Weekly { .. } => 1,
        EventKind::Unknown => 2,
    }
}
