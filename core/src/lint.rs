// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use hdaycal_format::{
    EventKind, ParseWarningKind, TypeFlag, format_hday_date, parse_with_warnings, split_lines,
};

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The line is kept but something was dropped or is ambiguous.
    Warning,

    /// The line describes an impossible event.
    Error,
}

/// A finding on one line of a document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    /// Line number, starting from 1 and counting blank lines.
    pub line: usize,

    /// How serious the finding is.
    pub severity: Severity,

    /// What was found.
    pub kind: DiagnosticKind,
}

/// Kinds of [`Diagnostic`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The line matched no rule.
    UnrecognizedLine {
        /// The trimmed line.
        text: String,
    },

    /// A flag letter not in the table.
    UnknownFlag {
        /// The letter.
        letter: char,
    },

    /// A date that does not exist.
    InvalidDate {
        /// The date as written.
        date: String,
    },

    /// A range ending before it starts.
    InvertedRange {
        /// Start as written.
        start: String,
        /// End as written.
        end: String,
    },

    /// More than one type letter on the line; only the first listed counts.
    MultipleTypeFlags {
        /// The categories present, highest priority first.
        categories: Vec<TypeFlag>,
    },
}

impl Diagnostic {
    fn new(line: usize, kind: DiagnosticKind) -> Self {
        let severity = match kind {
            DiagnosticKind::InvertedRange { .. } => Severity::Error,
            _ => Severity::Warning,
        };
        Self {
            line,
            severity,
            kind,
        }
    }

    /// Whether this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "line {}: {severity}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::UnrecognizedLine { text } => write!(f, "unrecognized line '{text}'"),
            DiagnosticKind::UnknownFlag { letter } => write!(f, "unknown flag letter '{letter}'"),
            DiagnosticKind::InvalidDate { date } => write!(f, "'{date}' is not a calendar date"),
            DiagnosticKind::InvertedRange { start, end } => {
                write!(f, "range ends on {end} before it starts on {start}")
            }
            DiagnosticKind::MultipleTypeFlags { categories } => {
                let names: Vec<&str> = categories.iter().map(|t| t.flag().into()).collect();
                let primary = names.first().copied().unwrap_or_default();
                write!(f, "several types ({}), counted as {primary}", names.join(", "))
            }
        }
    }
}

/// Checks a document and returns its diagnostics ordered by line.
#[must_use]
pub fn lint(text: &str) -> Vec<Diagnostic> {
    let parsed = parse_with_warnings(text);

    let mut diagnostics: Vec<Diagnostic> = parsed
        .warnings
        .into_iter()
        .filter_map(|w| {
            let kind = match w.kind {
                ParseWarningKind::UnknownFlag(letter) => DiagnosticKind::UnknownFlag { letter },
                ParseWarningKind::InvalidDate(date) => DiagnosticKind::InvalidDate { date },
                ParseWarningKind::UnrecognizedLine => DiagnosticKind::UnrecognizedLine {
                    text: line_text(text, w.line),
                },
                _ => return None,
            };
            Some(Diagnostic::new(w.line, kind))
        })
        .collect();

    // Events are produced one per non-blank line, in order
    let lines = split_lines(text)
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, _)| i + 1);

    for (line, event) in lines.zip(&parsed.events) {
        if let EventKind::Range { start, end } = event.kind
            && end < start
        {
            let kind = DiagnosticKind::InvertedRange {
                start: format_hday_date(start),
                end: format_hday_date(end),
            };
            diagnostics.push(Diagnostic::new(line, kind));
        }

        let mut categories: Vec<TypeFlag> = event.flags.type_flags().collect();
        if categories.len() > 1 {
            categories.sort();
            diagnostics.push(Diagnostic::new(
                line,
                DiagnosticKind::MultipleTypeFlags { categories },
            ));
        }
    }

    diagnostics.sort_by_key(|d| d.line);
    tracing::debug!(count = diagnostics.len(), "linted hday document");
    diagnostics
}

fn line_text(text: &str, line: usize) -> String {
    split_lines(text)
        .nth(line.saturating_sub(1))
        .map(|l| l.trim().to_owned())
        .unwrap_or_default()
}
