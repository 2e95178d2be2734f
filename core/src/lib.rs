// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Working with hday documents: editing, ordering, calendar lookups and
//! yearly statistics.
//!
//! ```
//! use hdaycal_core::{Document, TypeFlag, year_stats};
//!
//! let doc = Document::parse("2024/12/23-2025/01/05 # Christmas\nbd1 # Monday trips");
//! let stats = year_stats(&doc.events, 2025)?;
//! assert_eq!(stats.get(TypeFlag::Holiday), 5.0);
//! assert_eq!(stats.get(TypeFlag::Business), 52.0);
//! # Ok::<(), hdaycal_core::StatsError>(())
//! ```

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
#![cfg_attr(test, allow(clippy::float_cmp, clippy::indexing_slicing))]

mod calendar;
mod config;
mod document;
mod draft;
pub mod holiday;
mod lint;
pub mod ooo;
mod sort;
mod stats;

pub use crate::calendar::{CalendarError, DayEvents, events_on, month_view, occurs_on};
pub use crate::config::{APP_NAME, Config, ConfigError, expand_path, get_config_dir};
pub use crate::document::{Document, DocumentError};
pub use crate::draft::{DraftError, DraftWhen, EventDraft};
pub use crate::lint::{Diagnostic, DiagnosticKind, Severity, lint};
pub use crate::sort::{compare, sort_events, sort_indices};
pub use crate::stats::{StatsError, YearStats, event_days_in_year, year_stats};

pub use hdaycal_format::{
    Event, EventKind, Flag, FlagFamily, Flags, FormatOptions, HalfDay, LineEnding, ParseWarning,
    TypeFlag,
};
