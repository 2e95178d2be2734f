// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse and write the line-oriented hday calendar format.
//!
//! An hday document holds one event per line, either a date range or a
//! weekly recurring day, each optionally prefixed with flag letters and
//! followed by a `# title`:
//!
//! ```txt
//! 2024/12/23-2025/01/05 # Christmas
//! ab2025/03/10 # Dentist in the morning, then a trip
//! bd1 # Every Monday on the road
//! ```
//!
//! Weekday digits follow ISO numbering: `1` is Monday and `7` is Sunday.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

pub mod date;
mod event;
pub mod flag;
pub mod formatter;
pub mod parser;

pub use crate::date::{
    DateError, format_hday_date, is_valid_date, iso_to_hday_date, parse_hday_date,
};
pub use crate::event::{Event, EventKind};
pub use crate::flag::{
    Flag, FlagFamily, Flags, HalfDay, TypeFlag, collapse_type_flags, normalize_event_flags,
    parse_prefix_flags,
};
pub use crate::formatter::{FormatError, FormatOptions, LineEnding, to_line, to_text};
pub use crate::parser::{
    ParseWarning, ParseWarningKind, Parsed, parse, parse_with_warnings, split_lines,
};
