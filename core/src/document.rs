// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use hdaycal_format::{Event, FormatError, FormatOptions, ParseWarning, parse_with_warnings, to_line};

/// An hday document: the last known text and the events parsed from it.
///
/// `raw` is authoritative until the first edit. Every edit returns a new
/// document whose `raw` is regenerated from `events`, so a caller holding the
/// previous value (for undo, say) keeps seeing it unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    /// Full text of the document.
    pub raw: String,

    /// Events in document order.
    pub events: Vec<Event>,
}

/// Errors from editing a [`Document`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// No event at the given position.
    #[error("no event at index {index}, the document has {len} events")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of events.
        len: usize,
    },

    /// The events cannot be written back as text.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Document {
    /// Parses `text` into a document, logging recoverable problems.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_with_warnings(text).0
    }

    /// Parses `text` and returns the warnings alongside the document.
    #[must_use]
    pub fn parse_with_warnings(text: &str) -> (Self, Vec<ParseWarning>) {
        let parsed = parse_with_warnings(text);
        tracing::debug!(
            events = parsed.events.len(),
            warnings = parsed.warnings.len(),
            "parsed hday document"
        );
        let doc = Self {
            raw: text.to_owned(),
            events: parsed.events,
        };
        (doc, parsed.warnings)
    }

    /// Builds a document from events, generating `raw` and refreshing each
    /// event's `raw` to its canonical line.
    ///
    /// ## Errors
    ///
    /// Fails if an event cannot be formatted, see [`to_line`].
    pub fn from_events(events: Vec<Event>) -> Result<Self, DocumentError> {
        let events = events
            .into_iter()
            .map(|event| {
                let line = to_line(&event)?;
                Ok(event.with_raw(line))
            })
            .collect::<Result<Vec<_>, FormatError>>()?;

        let raw = FormatOptions::default().write_to_string(&events)?;
        Ok(Self { raw, events })
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the document has no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns a new document with the event at `index` replaced.
    ///
    /// ## Errors
    ///
    /// Fails if `index` is out of range or formatting fails.
    pub fn replace_event(&self, index: usize, event: Event) -> Result<Self, DocumentError> {
        self.check_index(index)?;
        let events = self
            .events
            .iter()
            .enumerate()
            .map(|(i, e)| if i == index { event.clone() } else { e.clone() })
            .collect();
        Self::from_events(events)
    }

    /// Returns a new document with `event` appended.
    ///
    /// ## Errors
    ///
    /// Fails if formatting fails.
    pub fn push_event(&self, event: Event) -> Result<Self, DocumentError> {
        let mut events = self.events.clone();
        events.push(event);
        Self::from_events(events)
    }

    /// Returns a new document without the event at `index`.
    ///
    /// ## Errors
    ///
    /// Fails if `index` is out of range or formatting fails.
    pub fn remove_event(&self, index: usize) -> Result<Self, DocumentError> {
        self.check_index(index)?;
        let events = self
            .events
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, e)| e.clone())
            .collect();
        Self::from_events(events)
    }

    /// Returns the canonical text of the events.
    ///
    /// ## Errors
    ///
    /// Fails if an event cannot be formatted.
    pub fn to_text(&self, options: FormatOptions) -> Result<String, DocumentError> {
        Ok(options.write_to_string(&self.events)?)
    }

    fn check_index(&self, index: usize) -> Result<(), DocumentError> {
        if index < self.events.len() {
            Ok(())
        } else {
            Err(DocumentError::IndexOutOfRange {
                index,
                len: self.events.len(),
            })
        }
    }
}
