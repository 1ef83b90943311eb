//! Conditional highlight of expired rows.
//!
//! The rule is a plain value (range + predicate + style) derived from the
//! table as written. It is rebuilt on every cycle and written together with
//! the whole file, so a range from an older, longer table never survives.

use crate::errors::AppResult;
use crate::models::{Column, EXPIRED, Record, Table};
use crate::store;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// What gets painted when a row is expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightScope {
    /// Only the `Tempo restante` cell.
    #[default]
    Cell,
    /// Every written column of the row.
    Row,
}

/// Zero-based, inclusive cell rectangle (row 0 is the header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl CellRange {
    /// Spreadsheet notation, e.g. `D2:D10`.
    pub fn to_a1(&self) -> String {
        format!(
            "{}{}:{}{}",
            column_letters(self.first_col),
            self.first_row + 1,
            column_letters(self.last_col),
            self.last_row + 1
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// The cell itself equals the value.
    CellEquals(&'static str),
    /// The given column of the cell's row equals the value.
    RowFieldEquals { column: Column, value: &'static str },
}

/// Fill and font colours as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertStyle {
    pub fill: u32,
    pub font: u32,
}

pub const ALERT: AlertStyle = AlertStyle {
    fill: 0xFF0000,
    font: 0xFFFFFF,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRule {
    pub range: CellRange,
    pub predicate: Predicate,
    pub style: AlertStyle,
}

impl HighlightRule {
    /// Excel formula relative to the top-left cell of `range`.
    pub fn formula(&self) -> String {
        let row = self.range.first_row + 1;
        match &self.predicate {
            Predicate::CellEquals(v) => {
                format!("={}{}=\"{}\"", column_letters(self.range.first_col), row, v)
            }
            Predicate::RowFieldEquals { column, value } => {
                format!(
                    "=${}{}=\"{}\"",
                    column_letters(column.index() as u16),
                    row,
                    value
                )
            }
        }
    }

    /// Whether the rule paints (part of) this record.
    pub fn matches(&self, record: &Record) -> bool {
        match &self.predicate {
            Predicate::CellEquals(v) => record.remaining == *v,
            Predicate::RowFieldEquals { column, value } => match column {
                Column::Item => record.item == *value,
                Column::Operator => record.operator == *value,
                Column::Deadline => record.deadline.as_deref() == Some(*value),
                Column::Remaining => record.remaining == *value,
                Column::Exceeded => record.exceeded == *value,
            },
        }
    }
}

/// Rule covering exactly the data rows of `table`; `None` when there are none.
pub fn build_rule(table: &Table, scope: HighlightScope) -> Option<HighlightRule> {
    if table.is_empty() {
        return None;
    }

    let last_row = table.len() as u32;
    let remaining = Column::Remaining.index() as u16;

    let (range, predicate) = match scope {
        HighlightScope::Cell => (
            CellRange {
                first_row: 1,
                first_col: remaining,
                last_row,
                last_col: remaining,
            },
            Predicate::CellEquals(EXPIRED),
        ),
        HighlightScope::Row => (
            CellRange {
                first_row: 1,
                first_col: 0,
                last_row,
                last_col: (table.width() - 1) as u16,
            },
            Predicate::RowFieldEquals {
                column: Column::Remaining,
                value: EXPIRED,
            },
        ),
    };

    Some(HighlightRule {
        range,
        predicate,
        style: ALERT,
    })
}

/// Rewrite the store at `location` with `table` and a freshly built rule.
pub fn apply_highlight(
    location: &Path,
    table: &Table,
    scope: HighlightScope,
) -> AppResult<Option<HighlightRule>> {
    let rule = build_rule(table, scope);

    if !store::StoreFormat::from_path(location)?.supports_highlight() {
        debug!(path = %location.display(), "format cannot carry styling, rule not attached");
        return Ok(rule);
    }

    if let Some(r) = &rule {
        debug!(range = %r.range.to_a1(), formula = %r.formula(), "attaching highlight");
    }
    // always a full rewrite, so no rule from an older table survives
    store::write_table(location, table, rule.as_ref())?;

    Ok(rule)
}

/// Zero-based column index → letters (`0` → `A`, `26` → `AA`).
pub fn column_letters(mut col: u16) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (col % 26) as u8);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
