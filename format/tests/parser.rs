// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use hdaycal_format::{
    EventKind, Flag, ParseWarningKind, collapse_type_flags, is_valid_date, normalize_event_flags,
    parse, parse_prefix_flags, parse_with_warnings,
};
use jiff::civil::{Weekday, date};

#[test]
fn date_validity_boundaries() {
    assert!(is_valid_date("2024/02/29"));
    assert!(is_valid_date("2025/12/31"));
    assert!(is_valid_date("2000/02/29"));

    for bad in [
        "2023/02/29",
        "1900/02/29",
        "2025/04/31",
        "2025/12/32",
        "2025/13/01",
        "2025/00/10",
        "2025-12-18",
        "2025/1/01",
        " 2025/01/01",
        "",
    ] {
        assert!(!is_valid_date(bad), "{bad} should be rejected");
    }
}

#[test]
fn out_of_range_weekdays_are_unknown() {
    let parsed = parse_with_warnings("d0\nd8\nd7");
    assert!(parsed.events[0].is_unknown());
    assert!(parsed.events[1].is_unknown());
    assert_eq!(
        parsed.events[2].kind,
        EventKind::Weekly {
            weekday: Weekday::Sunday
        }
    );
    let kinds: Vec<_> = parsed.warnings.iter().map(|w| (w.line, &w.kind)).collect();
    assert_eq!(
        kinds,
        [
            (1, &ParseWarningKind::UnrecognizedLine),
            (2, &ParseWarningKind::UnrecognizedLine)
        ]
    );
}

#[test]
fn crlf_matches_lf() {
    let lf = parse("b2025/01/10 # Trip\nd3\n");
    let crlf = parse("b2025/01/10 # Trip\r\nd3\r\n");
    assert_eq!(lf, crlf);
}

#[test]
fn letters_are_case_insensitive() {
    let events = parse("BA2025/06/02\nD1B");
    assert_eq!(events[0].start(), Some(date(2025, 6, 2)));
    assert!(events[0].flags.contains(Flag::Business));
    assert!(events[0].flags.contains(Flag::HalfAm));
    assert_eq!(events[1].weekday(), Some(Weekday::Monday));
    assert!(events[1].flags.contains(Flag::Business));
}

#[test]
fn normalization_is_idempotent() {
    let inputs: [&[Flag]; 5] = [
        &[],
        &[Flag::HalfAm],
        &[Flag::Business, Flag::Business, Flag::NoFly],
        &[Flag::Other, Flag::Ill, Flag::Holiday],
        &[Flag::Holiday, Flag::Holiday],
    ];
    for flags in inputs {
        let once = normalize_event_flags(flags);
        assert_eq!(normalize_event_flags(&once), once);

        let collapsed = collapse_type_flags(flags);
        assert_eq!(collapse_type_flags(&collapsed), collapsed);
    }
}

#[test]
fn prefix_flags_get_the_holiday_default() {
    assert_eq!(parse_prefix_flags("").as_slice(), [Flag::Holiday]);
    assert_eq!(parse_prefix_flags("wn").as_slice(), [Flag::Onsite, Flag::NoFly, Flag::Holiday]);
    assert_eq!(parse_prefix_flags("zb").as_slice(), [Flag::Business]);
}
