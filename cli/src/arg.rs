// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use clap_num::number_range;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn file() -> Arg {
        arg!([FILE] "Path to the hday file, defaults to `core.hday_path` from the config")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_file(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("FILE").cloned()
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CalendarArgs;

impl CalendarArgs {
    pub fn year() -> Arg {
        fn from_1_to_9999(s: &str) -> Result<i16, String> {
            number_range(s, 1, 9999)
        }

        arg!(-y --year <YEAR> "Calendar year, defaults to the current year")
            .value_parser(from_1_to_9999)
    }

    pub fn get_year(matches: &ArgMatches) -> Option<i16> {
        matches.get_one("year").copied()
    }

    pub fn month() -> Arg {
        fn from_1_to_12(s: &str) -> Result<i8, String> {
            number_range(s, 1, 12)
        }

        arg!(-m --month <MONTH> "Month of the year (1-12), defaults to the current month")
            .value_parser(from_1_to_12)
    }

    pub fn get_month(matches: &ArgMatches) -> Option<i8> {
        matches.get_one("month").copied()
    }
}

/// Today in the system time zone.
pub fn today() -> jiff::civil::Date {
    jiff::Zoned::now().date()
}
