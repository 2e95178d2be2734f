// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests for the hday parser and formatter.
//!
//! These tests verify that parsing, formatting and parsing again produces
//! equivalent events.

use hdaycal_format::{Event, Flag, parse, to_text};

fn assert_equivalent(a: &[Event], b: &[Event]) {
    assert_eq!(a.len(), b.len(), "event count differs");
    for (x, y) in a.iter().zip(b) {
        assert!(x.same_content(y), "{x:?} != {y:?}");
    }
}

#[test]
fn round_trip_mixed_document() {
    let original = "\
2024/12/23-2025/01/05 # Christmas
ab2025/03/10 # Dentist
sw2025/04/01-2025/04/03
bd1 # Monday trips
d5pk
this line is not understood
hd7#Family
";

    // Parse original
    let events1 = parse(original);

    // Format to string
    let formatted = to_text(&events1).unwrap();

    // Parse formatted version
    let events2 = parse(&formatted);

    assert_equivalent(&events1, &events2);

    // The canonical text is a fixed point
    assert_eq!(to_text(&events2).unwrap(), formatted);
}

#[test]
fn round_trip_canonicalizes_letter_order() {
    let events = parse("fnwb2025/06/01");
    let formatted = to_text(&events).unwrap();
    assert_eq!(formatted, "bwnf2025/06/01");
    assert_equivalent(&events, &parse(&formatted));
}

#[test]
fn round_trip_keeps_multiple_type_flags() {
    let events = parse("bsu2025/06/01");
    assert_eq!(
        events[0].flags.as_slice(),
        [Flag::Business, Flag::Course, Flag::Other]
    );
    let formatted = to_text(&events).unwrap();
    assert_eq!(formatted, "bsu2025/06/01");
}

#[test]
fn round_trip_preserves_unknown_lines_byte_for_byte() {
    let garbage = "## not an event ## 2025/13/45";
    let original = format!("{garbage}\n2025/02/03-2025/02/07 # Ski");

    let events = parse(&original);
    assert_eq!(events.len(), 2);

    let formatted = to_text(&events).unwrap();
    let lines: Vec<&str> = formatted.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], garbage);
    assert_eq!(lines[1], "2025/02/03-2025/02/07 # Ski");
}

#[test]
fn round_trip_legacy_weekly_suffix() {
    let events = parse("d1b # Mondays");
    let formatted = to_text(&events).unwrap();
    assert_eq!(formatted, "bd1 # Mondays");
    assert_equivalent(&events, &parse(&formatted));
}

#[test]
fn round_trip_drops_unknown_letters() {
    let events = parse("xyb2025/01/01");
    let formatted = to_text(&events).unwrap();
    assert_eq!(formatted, "b2025/01/01");
}

#[test]
fn round_trip_carriage_return_in_title() {
    let events = parse("2025/01/01 # a\rb\r\nd2 # c\rd");
    let formatted = to_text(&events).unwrap();
    assert_equivalent(&events, &parse(&formatted));
    assert_eq!(to_text(&parse(&formatted)).unwrap(), formatted);
}
