// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Color;
use hdaycal_core::{Config, DayEvents, Document, month_view};
use hdaycal_format::format_hday_date;

use crate::arg::{CalendarArgs, CommonArgs, today};
use crate::event_formatter::type_color;
use crate::io::read_document;
use crate::table::{Table, TableColumn};

#[derive(Debug, Clone)]
pub struct CmdMonth {
    pub file: Option<PathBuf>,
    pub year: Option<i16>,
    pub month: Option<i8>,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the days of a month that have events")
            .arg(CommonArgs::file())
            .arg(CalendarArgs::year())
            .arg(CalendarArgs::month())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: CommonArgs::get_file(matches),
            year: CalendarArgs::get_year(matches),
            month: CalendarArgs::get_month(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month...");
        let path = config.resolve_document(self.file.as_deref())?;
        let (doc, _) = read_document(&path)?;
        println!("{}", self.render(&doc)?);
        Ok(())
    }

    fn render(&self, doc: &Document) -> Result<String, Box<dyn Error>> {
        let today = today();
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or(today.month());

        let days: Vec<Day<'_>> = month_view(&doc.events, year, month)?
            .into_iter()
            .filter(|d| !d.events.is_empty())
            .map(|day| Day { doc, day })
            .collect();

        if days.is_empty() {
            return Ok(format!("No events in {year:04}/{month:02}"));
        }
        let columns = [DayColumn::Date, DayColumn::Weekday, DayColumn::Events];
        Ok(Table::new(&columns, &days).to_string())
    }
}

struct Day<'a> {
    doc: &'a Document,
    day: DayEvents,
}

impl Day<'_> {
    fn titles(&self) -> String {
        self.day
            .events
            .iter()
            .filter_map(|&i| self.doc.events.get(i))
            .map(|e| match e.title.as_str() {
                "" => e.flags.primary_type().to_string(),
                title => title.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Copy)]
enum DayColumn {
    Date,
    Weekday,
    Events,
}

impl<'d> TableColumn<Day<'d>> for DayColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Date => "Date",
            Self::Weekday => "Weekday",
            Self::Events => "Events",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Day<'d>) -> Cow<'a, str> {
        match self {
            Self::Date => format_hday_date(data.day.date).into(),
            Self::Weekday => format!("{:?}", data.day.date.weekday()).into(),
            Self::Events => data.titles().into(),
        }
    }

    fn color(&self, data: &Day<'d>) -> Option<Color> {
        let first = data.day.events.first().and_then(|&i| data.doc.events.get(i))?;
        match self {
            Self::Date => type_color(first.flags.primary_type()),
            _ => None,
        }
    }
}
