// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! hdaycal - plan vacations and absences in the plain-text hday format

use std::process::ExitCode;

fn main() -> ExitCode {
    hdaycal_cli::run()
}
