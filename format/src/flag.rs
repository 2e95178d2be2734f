// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event flags and the single-letter prefix codes that encode them.
//!
//! Flags fall into three families:
//!
//! - type flags, which say *why* the time is taken. At most one of them is
//!   active for an event, picked by [`TypeFlag`] priority, and an event
//!   without any counts as a holiday;
//! - half-day flags (`half_am`, `half_pm`), where having both is the same as
//!   having neither;
//! - location flags (`onsite`, `no_fly`, `can_fly`), which are display-only.

use std::fmt;

use strum::IntoEnumIterator;

/// Letter table shared by the parser and the formatter, in canonical output order.
const LETTER_TABLE: [(char, Flag); 12] = [
    ('a', Flag::HalfAm),
    ('p', Flag::HalfPm),
    ('b', Flag::Business),
    ('e', Flag::Weekend),
    ('h', Flag::Birthday),
    ('i', Flag::Ill),
    ('k', Flag::In),
    ('s', Flag::Course),
    ('u', Flag::Other),
    ('w', Flag::Onsite),
    ('n', Flag::NoFly),
    ('f', Flag::CanFly),
];

/// A single event flag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Flag {
    /// Morning off (`a`).
    HalfAm,

    /// Afternoon off (`p`).
    HalfPm,

    /// Business trip (`b`).
    Business,

    /// Weekend duty (`e`).
    Weekend,

    /// Birthday (`h`).
    Birthday,

    /// Sick leave (`i`).
    Ill,

    /// In the office (`k`).
    In,

    /// Course or training (`s`).
    Course,

    /// Any other absence (`u`).
    Other,

    /// On site at a customer (`w`).
    Onsite,

    /// Not allowed to fly (`n`).
    NoFly,

    /// Allowed to fly (`f`).
    CanFly,

    /// Implicit default type, never written as a letter.
    Holiday,
}

impl Flag {
    /// Looks up the flag for a prefix letter. Letters are matched
    /// case-insensitively.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        LETTER_TABLE
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, flag)| *flag)
    }

    /// The prefix letter of this flag, `None` for [`Flag::Holiday`].
    #[must_use]
    pub fn letter(self) -> Option<char> {
        LETTER_TABLE
            .iter()
            .find(|(_, flag)| *flag == self)
            .map(|(c, _)| *c)
    }

    /// The family this flag belongs to.
    #[must_use]
    pub const fn family(self) -> FlagFamily {
        match self {
            Self::HalfAm | Self::HalfPm => FlagFamily::HalfDay,
            Self::Onsite | Self::NoFly | Self::CanFly => FlagFamily::Location,
            Self::Business
            | Self::Weekend
            | Self::Birthday
            | Self::Ill
            | Self::In
            | Self::Course
            | Self::Other
            | Self::Holiday => FlagFamily::Type,
        }
    }

    /// The type category of this flag, if it is a type flag.
    #[must_use]
    pub const fn type_flag(self) -> Option<TypeFlag> {
        match self {
            Self::Business => Some(TypeFlag::Business),
            Self::Weekend => Some(TypeFlag::Weekend),
            Self::Birthday => Some(TypeFlag::Birthday),
            Self::Ill => Some(TypeFlag::Ill),
            Self::In => Some(TypeFlag::In),
            Self::Course => Some(TypeFlag::Course),
            Self::Other => Some(TypeFlag::Other),
            Self::Holiday => Some(TypeFlag::Holiday),
            Self::HalfAm | Self::HalfPm | Self::Onsite | Self::NoFly | Self::CanFly => None,
        }
    }
}

/// Flag families, see the module documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagFamily {
    /// Mutually exclusive category flags.
    Type,

    /// `half_am` and `half_pm`.
    HalfDay,

    /// Display-only location flags.
    Location,
}

/// The category an event counts toward.
///
/// Variants are declared in priority order, so `Ord` gives the priority:
/// a smaller value wins. [`TypeFlag::Holiday`] is the default when an event
/// has no type flag at all.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TypeFlag {
    /// Business trip.
    Business,

    /// Weekend duty.
    Weekend,

    /// Birthday.
    Birthday,

    /// Sick leave.
    Ill,

    /// Course or training.
    Course,

    /// In the office.
    In,

    /// Any other absence.
    Other,

    /// Plain holiday, the default.
    #[default]
    Holiday,
}

impl TypeFlag {
    /// All categories in priority order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// The flag representing this category.
    #[must_use]
    pub const fn flag(self) -> Flag {
        match self {
            Self::Business => Flag::Business,
            Self::Weekend => Flag::Weekend,
            Self::Birthday => Flag::Birthday,
            Self::Ill => Flag::Ill,
            Self::Course => Flag::Course,
            Self::In => Flag::In,
            Self::Other => Flag::Other,
            Self::Holiday => Flag::Holiday,
        }
    }
}

/// Duration of an event day, derived from the half-day flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HalfDay {
    /// The whole day, also when both half-day flags are set.
    #[default]
    Full,

    /// Only the morning.
    Morning,

    /// Only the afternoon.
    Afternoon,
}

impl HalfDay {
    /// How much of a day counts toward statistics.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::Morning | Self::Afternoon => 0.5,
        }
    }

    /// The flag that encodes this duration, `None` for a full day.
    #[must_use]
    pub const fn flag(self) -> Option<Flag> {
        match self {
            Self::Full => None,
            Self::Morning => Some(Flag::HalfAm),
            Self::Afternoon => Some(Flag::HalfPm),
        }
    }
}

/// An ordered list of flags without duplicates.
///
/// The order is the order in which flags were written; the formatter emits
/// them in table order regardless.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Flags(Vec<Flag>);

impl Flags {
    /// Creates an empty flag list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `flag` unless it is already present.
    pub fn insert(&mut self, flag: Flag) {
        if !self.0.contains(&flag) {
            self.0.push(flag);
        }
    }

    /// Whether `flag` is present.
    #[must_use]
    pub fn contains(&self, flag: Flag) -> bool {
        self.0.contains(&flag)
    }

    /// Iterates over the flags in stored order.
    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        self.0.iter().copied()
    }

    /// The flags as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Flag] {
        &self.0
    }

    /// Number of flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no flags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the normalized flags, see [`normalize_event_flags`].
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self(normalize_event_flags(&self.0))
    }

    /// Type categories present, in stored order. The implicit holiday is
    /// only included when it is stored.
    pub fn type_flags(&self) -> impl Iterator<Item = TypeFlag> + '_ {
        self.iter().filter_map(Flag::type_flag)
    }

    /// The active category: the highest-priority type flag present, or
    /// [`TypeFlag::Holiday`] when there is none.
    #[must_use]
    pub fn primary_type(&self) -> TypeFlag {
        self.type_flags().min().unwrap_or_default()
    }

    /// Half-day duration. Both `half_am` and `half_pm` cancel out.
    #[must_use]
    pub fn half_day(&self) -> HalfDay {
        match (self.contains(Flag::HalfAm), self.contains(Flag::HalfPm)) {
            (true, false) => HalfDay::Morning,
            (false, true) => HalfDay::Afternoon,
            _ => HalfDay::Full,
        }
    }

    /// Location flags present, in stored order.
    pub fn locations(&self) -> impl Iterator<Item = Flag> + '_ {
        self.iter().filter(|f| f.family() == FlagFamily::Location)
    }

    /// The prefix letters in canonical table order. Holiday is skipped.
    #[must_use]
    pub fn prefix(&self) -> String {
        LETTER_TABLE
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(c, _)| *c)
            .collect()
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<T: IntoIterator<Item = Flag>>(iter: T) -> Self {
        let mut flags = Self::new();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl From<Vec<Flag>> for Flags {
    fn from(value: Vec<Flag>) -> Self {
        value.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Flags {
    type Item = Flag;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Flag>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

/// Maps each prefix letter to its flag and normalizes the result.
///
/// Unknown letters are dropped with a warning; parsing never fails.
#[must_use]
pub fn parse_prefix_flags(prefix: &str) -> Flags {
    let (flags, _) = decode_prefix(prefix);
    flags.normalized()
}

/// Decodes prefix letters without normalizing, also returning the letters
/// that are not in the table.
pub(crate) fn decode_prefix(prefix: &str) -> (Flags, Vec<char>) {
    let mut flags = Flags::new();
    let mut unknown = Vec::new();
    for letter in prefix.chars() {
        match Flag::from_letter(letter) {
            Some(flag) => flags.insert(flag),
            None => {
                tracing::warn!(%letter, prefix, "ignoring unknown flag letter");
                unknown.push(letter);
            }
        }
    }
    (flags, unknown)
}

/// Returns a new flag list with duplicates removed and [`Flag::Holiday`]
/// appended when no type flag is present.
///
/// Multiple type flags are kept as they are. Collapsing them is the job of
/// the editing path, see [`collapse_type_flags`]. The function is
/// idempotent.
#[must_use]
pub fn normalize_event_flags(flags: &[Flag]) -> Vec<Flag> {
    let mut out: Flags = flags.iter().copied().collect();
    if out.type_flags().next().is_none() {
        out.insert(Flag::Holiday);
    }
    out.0
}

/// Keeps only the highest-priority type flag, drops an explicit holiday and
/// normalizes.
///
/// This is the rule applied when a user edits an event, where exactly one
/// category can be selected.
#[must_use]
pub fn collapse_type_flags(flags: &[Flag]) -> Vec<Flag> {
    let primary = flags
        .iter()
        .filter_map(|f| f.type_flag())
        .filter(|t| *t != TypeFlag::Holiday)
        .min();

    let kept: Vec<Flag> = flags
        .iter()
        .copied()
        .filter(|f| match f.type_flag() {
            Some(t) => Some(t) == primary,
            None => true,
        })
        .collect();
    normalize_event_flags(&kept)
}
