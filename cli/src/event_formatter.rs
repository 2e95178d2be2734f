// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use hdaycal_core::{Event, EventKind, Flags, TypeFlag};
use hdaycal_format::format_hday_date;

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn};

/// An event and its position in the document.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct EventRow<'a> {
    /// Zero-based position in the document, as used for editing.
    pub index: usize,

    /// The event.
    #[serde(flatten)]
    pub event: &'a Event,
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Index,
                EventColumn::When,
                EventColumn::Flags,
                EventColumn::Title,
            ],
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [EventRow<'a>]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [EventRow<'a>],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
            OutputFormat::Table => write!(f, "{}", Table::new(&self.formatter.columns, self.events)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Index,
    When,
    Flags,
    Title,
}

impl<'e> TableColumn<EventRow<'e>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Index => "#",
            Self::When => "When",
            Self::Flags => "Flags",
            Self::Title => "Title",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a EventRow<'e>) -> Cow<'a, str> {
        let event = data.event;
        match self {
            Self::Index => data.index.to_string().into(),
            Self::When => when(event).into(),
            Self::Flags => match event.kind {
                EventKind::Unknown => "".into(),
                _ => flags_cell(&event.flags).into(),
            },
            Self::Title => match event.kind {
                EventKind::Unknown => event.raw.as_deref().unwrap_or_default().into(),
                _ => event.title.as_str().into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Index => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &EventRow<'e>) -> Option<Color> {
        if !matches!(self, Self::When) {
            return None;
        }
        if data.event.is_unknown() {
            return Some(Color::Yellow);
        }
        type_color(data.event.flags.primary_type())
    }
}

/// Date range or weekday of an event.
pub fn when(event: &Event) -> String {
    match event.kind {
        EventKind::Range { start, end } if start == end => format_hday_date(start),
        EventKind::Range { start, end } => {
            format!("{} ~ {}", format_hday_date(start), format_hday_date(end))
        }
        EventKind::Weekly { weekday } => format!("every {weekday:?}"),
        EventKind::Unknown => "?".to_string(),
    }
}

/// Effective flags: half day, category and locations. Morning and afternoon
/// together are a full day and show no half-day flag.
fn flags_cell(flags: &Flags) -> String {
    let half = flags.half_day().flag();
    let category = flags.primary_type().flag();
    half.into_iter()
        .chain([category])
        .chain(flags.locations())
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn type_color(category: TypeFlag) -> Option<Color> {
    match category {
        TypeFlag::Holiday => Some(Color::Green),
        TypeFlag::Business => Some(Color::Blue),
        TypeFlag::Ill => Some(Color::Red),
        TypeFlag::Course | TypeFlag::In => Some(Color::Cyan),
        TypeFlag::Weekend | TypeFlag::Birthday | TypeFlag::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use hdaycal_core::Document;

    use super::*;

    fn rows(doc: &Document) -> Vec<EventRow<'_>> {
        doc.events
            .iter()
            .enumerate()
            .map(|(index, event)| EventRow { index, event })
            .collect()
    }

    #[test]
    fn formats_table() {
        colored::control::set_override(false);
        let doc = Document::parse("2025/01/10-2025/01/12 # Trip\nabd2 # Tuesday\n???");
        let rows = rows(&doc);
        let out = EventFormatter::new().format(&rows).to_string();
        assert_eq!(
            out,
            "\
0 2025/01/10 ~ 2025/01/12 holiday          Trip
1 every Tuesday           half_am,business Tuesday
2 ?                                        ???"
        );
    }

    #[test]
    fn full_day_shows_no_half_day_flag() {
        colored::control::set_override(false);
        let doc = Document::parse("ap2025/03/14 # Both halves\npw2025/03/15 # Site\nbi2025/03/16 # Trip");
        let rows = rows(&doc);
        let out = EventFormatter::new().format(&rows).to_string();
        assert!(!out.contains("half_am"));
        assert_eq!(
            out,
            "\
0 2025/03/14 holiday                Both halves
1 2025/03/15 half_pm,holiday,onsite Site
2 2025/03/16 business               Trip"
        );
    }

    #[test]
    fn formats_json() {
        let doc = Document::parse("bd1 # Mondays");
        let rows = rows(&doc);
        let out = EventFormatter::new()
            .with_output_format(OutputFormat::Json)
            .format(&rows)
            .to_string();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json[0]["index"], 0);
        assert_eq!(json[0]["type"], "weekly");
        assert_eq!(json[0]["weekday"], 1);
        assert_eq!(json[0]["flags"], serde_json::json!(["business"]));
        assert_eq!(json[0]["title"], "Mondays");
    }
}
