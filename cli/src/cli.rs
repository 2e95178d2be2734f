// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use hdaycal_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_check::CmdCheck;
use crate::cmd_fmt::CmdFmt;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_list::CmdList;
use crate::cmd_month::CmdMonth;
use crate::cmd_stats::CmdStats;
use crate::config::parse_config;

/// Run the hdaycal command-line interface.
pub fn run() -> ExitCode {
    init_tracing();
    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` and defaulting to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Plan vacations and absences in plain-text hday files.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $HDAYCAL_CONFIG, then \
$XDG_CONFIG_HOME/hdaycal/config.toml on Linux and MacOS, %APPDATA%/hdaycal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdCheck::command())
            .subcommand(CmdFmt::command())
            .subcommand(CmdList::command())
            .subcommand(CmdMonth::command())
            .subcommand(CmdStats::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some((CmdCheck::NAME, matches)) => Commands::Check(CmdCheck::from(matches)),
            Some((CmdFmt::NAME, matches)) => Commands::Fmt(CmdFmt::from(matches)),
            Some((CmdList::NAME, matches)) => Commands::List(CmdList::from(matches)),
            Some((CmdMonth::NAME, matches)) => Commands::Month(CmdMonth::from(matches)),
            Some((CmdStats::NAME, matches)) => Commands::Stats(CmdStats::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                Commands::GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given, see --help".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Check a file for problems
    Check(CmdCheck),

    /// Rewrite a file in canonical form
    Fmt(CmdFmt),

    /// List events
    List(CmdList),

    /// Show the days of a month
    Month(CmdMonth),

    /// Yearly statistics
    Stats(CmdStats),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        if let Self::GenerateCompletion(a) = self {
            return a.run();
        }

        tracing::debug!("parsing configuration...");
        let config = parse_config(config)?;
        match self {
            Self::Check(a) => a.run(&config),
            Self::Fmt(a) => a.run(&config),
            Self::List(a) => a.run(&config),
            Self::Month(a) => a.run(&config),
            Self::Stats(a) => a.run(&config),
            Self::GenerateCompletion(a) => a.run(),
        }
    }
}
