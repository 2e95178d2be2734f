// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Events from public holiday lookups.
//!
//! Lookup services list holidays with ISO `YYYY-MM-DD` dates. They become
//! range events with the default holiday type.

use hdaycal_format::{Event, iso_to_hday_date, parse_hday_date};

/// A public holiday as returned by holiday lookup services.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    /// First day, `YYYY-MM-DD`.
    pub start_date: String,

    /// Last day, `YYYY-MM-DD`. Missing means a single day.
    #[serde(default)]
    pub end_date: Option<String>,

    /// Name in the local language.
    #[serde(default)]
    pub local_name: String,
}

/// Errors from converting public holidays.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    /// The payload is not a list of holidays.
    #[error("invalid holiday list: {0}")]
    Json(#[from] serde_json::Error),

    /// A date is not `YYYY-MM-DD` or does not exist.
    #[error("invalid holiday date '{0}'")]
    InvalidDate(String),
}

impl PublicHoliday {
    /// Converts the holiday to a range event with the holiday default type.
    ///
    /// ## Errors
    ///
    /// Fails if a date is malformed or does not exist.
    pub fn to_event(&self) -> Result<Event, HolidayError> {
        let start = convert(&self.start_date)?;
        let end = match self.end_date.as_deref() {
            Some(end) if !end.trim().is_empty() => convert(end)?,
            _ => start,
        };
        Ok(Event::range(start, end.max(start)).with_title(self.local_name.trim()))
    }
}

/// Parses a JSON array of holidays.
///
/// ## Errors
///
/// Fails if the payload does not have the expected shape.
pub fn parse_public_holidays(json: &str) -> Result<Vec<PublicHoliday>, HolidayError> {
    Ok(serde_json::from_str(json)?)
}

/// Converts holidays to events, skipping those with bad dates.
#[must_use]
pub fn holidays_to_events(holidays: &[PublicHoliday]) -> Vec<Event> {
    holidays
        .iter()
        .filter_map(|h| match h.to_event() {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::warn!(name = %h.local_name, %err, "skipping public holiday");
                None
            }
        })
        .collect()
}

fn convert(iso: &str) -> Result<jiff::civil::Date, HolidayError> {
    iso_to_hday_date(iso.trim())
        .and_then(|date| parse_hday_date(&date).ok())
        .ok_or_else(|| HolidayError::InvalidDate(iso.to_owned()))
}

#[cfg(test)]
mod tests {
    use hdaycal_format::{Flag, to_line};
    use jiff::civil::date;

    use super::*;

    #[test]
    fn parses_lookup_payload() {
        let json = r#"[
            {"startDate": "2025-04-21", "endDate": "2025-04-21", "localName": "Tweede paasdag"},
            {"startDate": "2025-12-25", "localName": "Eerste Kerstdag"}
        ]"#;
        let holidays = parse_public_holidays(json).unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[1].end_date, None);

        let events = holidays_to_events(&holidays);
        assert_eq!(to_line(&events[0]).unwrap(), "2025/04/21 # Tweede paasdag");
        assert_eq!(events[1].start(), Some(date(2025, 12, 25)));
        assert_eq!(events[1].flags.as_slice(), [Flag::Holiday]);
    }

    #[test]
    fn multi_day_holidays() {
        let holiday = PublicHoliday {
            start_date: "2025-12-25".to_string(),
            end_date: Some("2025-12-26".to_string()),
            local_name: "Kerst".to_string(),
        };
        assert_eq!(
            to_line(&holiday.to_event().unwrap()).unwrap(),
            "2025/12/25-2025/12/26 # Kerst"
        );
    }

    #[test]
    fn skips_bad_dates() {
        let holidays = vec![
            PublicHoliday {
                start_date: "2025/12/25".to_string(),
                end_date: None,
                local_name: "wrong separator".to_string(),
            },
            PublicHoliday {
                start_date: "2025-02-30".to_string(),
                end_date: None,
                local_name: "no such day".to_string(),
            },
            PublicHoliday {
                start_date: "2025-01-01".to_string(),
                end_date: None,
                local_name: "Nieuwjaarsdag".to_string(),
            },
        ];
        assert!(matches!(
            holidays[0].to_event(),
            Err(HolidayError::InvalidDate(_))
        ));
        assert!(matches!(
            holidays[1].to_event(),
            Err(HolidayError::InvalidDate(_))
        ));

        let events = holidays_to_events(&holidays);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Nieuwjaarsdag");
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(matches!(
            parse_public_holidays(r#"{"startDate": "2025-01-01"}"#),
            Err(HolidayError::Json(_))
        ));
    }
}
