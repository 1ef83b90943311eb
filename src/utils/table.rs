//! Table rendering utilities for CLI outputs.

use crate::utils::colors::paint;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct TextTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Adds a row and widens columns to fit it.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    /// Renders the table; `color_of` may pick an ANSI color per cell value.
    /// Padding is computed on the plain text so escapes don't skew widths.
    pub fn render_with<F>(&self, color_of: F) -> String
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let mut out = String::new();

        // Header
        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&c.header, c.width))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let v = row.get(i).map(String::as_str).unwrap_or("");
                    let padded = pad_right(v, col.width);
                    match color_of(v) {
                        Some(c) if !v.is_empty() => {
                            format!("{}{}", paint(v, c), " ".repeat(padded.len() - v.len()))
                        }
                        _ => padded,
                    }
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }
}

fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}
