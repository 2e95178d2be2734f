// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Color;
use hdaycal_core::{Config, Document, TypeFlag, year_stats};

use crate::arg::{CalendarArgs, CommonArgs, OutputFormat, today};
use crate::event_formatter::type_color;
use crate::io::read_document;
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug, Clone)]
pub struct CmdStats {
    pub file: Option<PathBuf>,
    pub year: Option<i16>,
    pub output_format: OutputFormat,
}

impl CmdStats {
    pub const NAME: &str = "stats";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Sum up the days taken per category in a year")
            .arg(CommonArgs::file())
            .arg(CalendarArgs::year())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: CommonArgs::get_file(matches),
            year: CalendarArgs::get_year(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing statistics...");
        let path = config.resolve_document(self.file.as_deref())?;
        let (doc, _) = read_document(&path)?;
        println!("{}", self.render(&doc)?);
        Ok(())
    }

    fn render(&self, doc: &Document) -> Result<String, Box<dyn Error>> {
        let year = self.year.unwrap_or_else(|| today().year());
        let stats = year_stats(&doc.events, year)?;

        match self.output_format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&stats)?),
            OutputFormat::Table => {
                let mut rows: Vec<Row> = stats.iter().map(|(t, days)| Row(Some(t), days)).collect();
                rows.push(Row(None, stats.total()));
                let columns = [StatsColumn::Category, StatsColumn::Days];
                Ok(Table::new(&columns, &rows).with_header().to_string())
            }
        }
    }
}

/// A category and its days; `None` is the total.
struct Row(Option<TypeFlag>, f64);

#[derive(Debug, Clone, Copy)]
enum StatsColumn {
    Category,
    Days,
}

impl TableColumn<Row> for StatsColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Category => "Category",
            Self::Days => "Days",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a Row) -> Cow<'a, str> {
        match (self, data.0) {
            (Self::Category, Some(category)) => category.to_string().into(),
            (Self::Category, None) => "total".into(),
            (Self::Days, _) => data.1.to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Category => PaddingDirection::Left,
            Self::Days => PaddingDirection::Right,
        }
    }

    fn color(&self, data: &Row) -> Option<Color> {
        match (self, data.0) {
            (Self::Category, Some(category)) if data.1 > 0.0 => type_color(category),
            _ => None,
        }
    }
}
