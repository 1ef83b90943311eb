// src/store/xlsx.rs

use super::excel_date::{iso_to_text, serial_to_text};
use super::read_error;
use crate::core::highlight::HighlightRule;
use crate::errors::AppResult;
use crate::models::Table;
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{
    Color, ConditionalFormatFormula, Format, FormatBorder, FormatPattern, Workbook,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Monitoramento";

/// First worksheet as text cells (header included), plus the 1-based sheet
/// line of the header. calamine's range starts at the first non-empty cell.
pub(super) fn read_grid(path: &Path) -> AppResult<(Vec<Vec<String>>, usize)> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| read_error(path, e))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(r) => r.map_err(|e| read_error(path, e))?,
        None => return Ok((Vec::new(), 1)),
    };

    let header_line = range.start().map_or(1, |(row, _)| row as usize + 1);
    let grid = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Ok((grid, header_line))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // ids typed as numbers come back as 1.0
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::DateTime(dt) => {
            serial_to_text(dt.as_f64()).unwrap_or_else(|| dt.as_f64().to_string())
        }
        Data::DateTimeIso(s) => iso_to_text(s).unwrap_or_else(|| s.clone()),
        other => other.to_string(),
    }
}

/// Workbook bytes: styled header, text cells, optional conditional format.
pub(super) fn to_bytes(table: &Table, rule: Option<&HighlightRule>) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_cause)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = table.headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_cause)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_cause)?;

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    // ---------------------------
    // Righe
    // ---------------------------
    for (row_index, record) in table.records.iter().enumerate() {
        let row = (row_index + 1) as u32;

        for (col, value) in table.row_cells(record).iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(row, col as u16, value)
                .map_err(to_cause)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_cause)?;
    }

    // ---------------------------
    // Evidenziazione scaduti
    // ---------------------------
    if let Some(rule) = rule {
        let alert = Format::new()
            .set_background_color(Color::RGB(rule.style.fill))
            .set_font_color(Color::RGB(rule.style.font));

        let conditional = ConditionalFormatFormula::new()
            .set_rule(rule.formula().as_str())
            .set_format(&alert);

        let r = rule.range;
        worksheet
            .add_conditional_format(r.first_row, r.first_col, r.last_row, r.last_col, &conditional)
            .map_err(to_cause)?;
    }

    workbook.save_to_buffer().map_err(to_cause)
}

fn to_cause<E: std::fmt::Display>(e: E) -> String {
    e.to_string()
}
