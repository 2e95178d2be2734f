// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// A plain text table, columns padded to their widest cell.
pub struct Table<'a, T, C: TableColumn<T>> {
    columns: &'a [C],
    data: &'a [T],
    separator: &'a str,
    header: bool,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            separator: " ",
            header: false,
        }
    }

    /// Print the column names above the rows.
    pub fn with_header(mut self) -> Self {
        self.header = true;
        self
    }

    fn widths(&self, rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths = vec![0; self.columns.len()];
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let names: Vec<Cow<'_, str>> = self.columns.iter().map(|col| col.name()).collect();

        let mut widths = self.widths(&rows);
        if self.header {
            for (width, name) in widths.iter_mut().zip(&names) {
                *width = (*width).max(name.width());
            }
        }
        let last = self.columns.len().saturating_sub(1);

        if self.header {
            for (j, (name, width)) in names.iter().zip(&widths).enumerate() {
                let cell = if j == last {
                    name.to_string()
                } else {
                    pad(name, *width, true)
                };
                write!(f, "{}", cell.bold())?;
                if j < last {
                    f.write_str(self.separator)?;
                }
            }
            if !rows.is_empty() {
                writeln!(f)?;
            }
        }

        for (i, (cells, row)) in rows.iter().zip(self.data).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, ((col, cell), width)) in self.columns.iter().zip(cells).zip(&widths).enumerate()
            {
                // Last column does not need padding if it's left-aligned
                let padded = match col.padding_direction() {
                    PaddingDirection::Left if j == last => cell.to_string(),
                    PaddingDirection::Left => pad(cell, *width, true),
                    PaddingDirection::Right => pad(cell, *width, false),
                };
                match col.color(row) {
                    Some(color) => write!(f, "{}", padded.color(color))?,
                    None => f.write_str(&padded)?,
                }
                if j < last {
                    f.write_str(self.separator)?;
                }
            }
        }
        Ok(())
    }
}

/// Pads by display width, so wide characters in titles line up.
fn pad(cell: &str, width: usize, left_aligned: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if left_aligned {
        format!("{cell}{fill}")
    } else {
        format!("{fill}{cell}")
    }
}
