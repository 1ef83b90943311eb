//! Terminal presentation of an annotated table and of a cycle report.

use crate::core::CycleReport;
use crate::models::{EXPIRED, Table, WITHIN_TIME};
use crate::ui::messages::{header, info, row_error, warning};
use crate::utils::colors::{GREEN, GREY, WHITE_ON_RED};
use crate::utils::table::{Column, TextTable};

/// Table text with expired cells painted like the spreadsheet rule.
pub fn render_table(table: &Table, color: bool) -> String {
    let headers = table.headers();
    let mut out = TextTable::new(headers.iter().map(|h| Column::new(h)).collect());

    for r in &table.records {
        out.add_row(table.row_cells(r));
    }

    if color {
        out.render_with(colorize)
    } else {
        out.render_with(|_| None)
    }
}

fn colorize(value: &str) -> Option<&'static str> {
    match value {
        EXPIRED => Some(WHITE_ON_RED),
        WITHIN_TIME => Some(GREEN),
        "" => Some(GREY),
        _ => None,
    }
}

/// Notices, row errors, the table and a one-line summary.
pub fn print_report(report: &CycleReport) {
    let a = &report.annotation;

    for n in &a.notices {
        warning(n);
    }
    for e in a.row_errors() {
        row_error(e);
    }

    header(format!(
        "Updated at {}",
        report.now.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    print!("{}", render_table(&a.table, true));
    println!();

    let s = a.summary();
    info(format!(
        "{} rows: {} within time, {} expired, {} without deadline, {} invalid",
        s.total(),
        s.within_time,
        s.expired,
        s.unscheduled,
        s.invalid
    ));

    if let Some(rule) = &report.highlight {
        info(format!("Highlight rule on {}: {}", rule.range.to_a1(), rule.formula()));
    }
}
