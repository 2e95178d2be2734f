// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use hdaycal_core::{Config, Document, sort_indices};

use crate::arg::{CommonArgs, OutputFormat};
use crate::event_formatter::{EventFormatter, EventRow};
use crate::io::read_document;

#[derive(Debug, Clone)]
pub struct CmdList {
    pub file: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the events of an hday file in display order")
            .arg(CommonArgs::file())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: CommonArgs::get_file(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let path = config.resolve_document(self.file.as_deref())?;
        let (doc, _) = read_document(&path)?;
        println!("{}", self.render(&doc));
        Ok(())
    }

    fn render(&self, doc: &Document) -> String {
        let rows: Vec<EventRow<'_>> = sort_indices(&doc.events)
            .into_iter()
            .filter_map(|index| {
                doc.events
                    .get(index)
                    .map(|event| EventRow { index, event })
            })
            .collect();

        EventFormatter::new()
            .with_output_format(self.output_format)
            .format(&rows)
            .to_string()
    }
}
