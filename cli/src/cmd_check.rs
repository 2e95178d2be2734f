// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, io, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;
use hdaycal_core::{Config, Diagnostic, Severity, lint};

use crate::arg::CommonArgs;

#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub file: Option<PathBuf>,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check an hday file for unrecognized lines and impossible events")
            .arg(CommonArgs::file())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: CommonArgs::get_file(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking hday file...");
        let path = config.resolve_document(self.file.as_deref())?;
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read hday file at {}: {}", path.display(), e))?;

        let diagnostics = lint(&text);
        Self::report(&diagnostics, &mut io::stdout())?;

        let errors = diagnostics.iter().filter(|d| d.is_error()).count();
        if errors > 0 {
            return Err(format!("{errors} error(s) in {}", path.display()).into());
        }
        Ok(())
    }

    /// Writes one line per diagnostic, or a short note when there are none.
    pub fn report(diagnostics: &[Diagnostic], w: &mut impl io::Write) -> io::Result<()> {
        if diagnostics.is_empty() {
            return writeln!(w, "{}", "No problems found".green());
        }
        for diagnostic in diagnostics {
            let line = diagnostic.to_string();
            match diagnostic.severity {
                Severity::Error => writeln!(w, "{}", line.red())?,
                Severity::Warning => writeln!(w, "{}", line.yellow())?,
            }
        }
        Ok(())
    }
}
