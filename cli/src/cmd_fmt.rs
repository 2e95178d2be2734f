// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use hdaycal_core::Config;

use crate::arg::CommonArgs;
use crate::io::{read_document, write_document};

#[derive(Debug, Clone)]
pub struct CmdFmt {
    pub file: Option<PathBuf>,
    pub write: bool,
}

impl CmdFmt {
    pub const NAME: &str = "fmt";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Rewrite an hday file in canonical form")
            .long_about(
                "\
Rewrite an hday file in canonical form: flag letters in table order, single days \
without an end date and titles separated by ' # '. Unrecognized lines are kept as they are.",
            )
            .arg(CommonArgs::file())
            .arg(arg!(-w --write "Write the result back to the file instead of printing it"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: CommonArgs::get_file(matches),
            write: matches.get_flag("write"),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "formatting hday file...");
        let path = config.resolve_document(self.file.as_deref())?;
        let (doc, warnings) = read_document(&path)?;
        for warning in &warnings {
            eprintln!("{} {}", "Warning:".yellow(), warning);
        }

        let text = doc.to_text(config.format_options())?;
        if !self.write {
            print!("{text}");
            return Ok(());
        }

        if text == doc.raw {
            tracing::debug!(path = %path.display(), "already formatted");
        } else {
            write_document(&path, &text)?;
            println!("Formatted {}", path.display());
        }
        Ok(())
    }
}
