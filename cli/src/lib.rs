// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for hday files.

mod arg;
mod cli;
mod cmd_check;
mod cmd_fmt;
mod cmd_generate_completion;
mod cmd_list;
mod cmd_month;
mod cmd_stats;
mod config;
mod event_formatter;
mod io;
mod table;

pub use crate::cli::{Cli, Commands, run};
