// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::generate;

use crate::Cli;

#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = matches.get_one::<Shell>("shell").copied().unwrap_or(Shell::Bash);
        Self { shell }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        self.generate(&mut io::stdout());
        Ok(())
    }

    pub fn generate(self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match self.shell {
            Shell::Bash => generate(ClapShell::Bash, &mut cmd, name, buf),
            Shell::Elvish => generate(ClapShell::Elvish, &mut cmd, name, buf),
            Shell::Fish => generate(ClapShell::Fish, &mut cmd, name, buf),
            Shell::PowerShell => generate(ClapShell::PowerShell, &mut cmd, name, buf),
            Shell::Zsh => generate(ClapShell::Zsh, &mut cmd, name, buf),
            Shell::Nushell => generate(clap_complete_nushell::Nushell, &mut cmd, name, buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}
