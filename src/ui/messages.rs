use crate::errors::AppError;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// A bad value inside the table: the file is fine, one row is not.
pub fn row_error<T: fmt::Display>(msg: T) {
    error(format!("Bad value in your data. {msg}"));
}

/// The table file itself could not be processed.
pub fn fatal(err: &AppError) {
    error(format!("The file could not be processed. {err}"));
    if let Some(hint) = fatal_hint(err) {
        info(hint);
    }
}

/// Only read/schema failures point at the table layout.
fn fatal_hint(err: &AppError) -> Option<&'static str> {
    match err {
        AppError::StoreRead { .. } | AppError::MissingColumn { .. } => {
            Some("Check that the file has the columns: Item, Operador, Termino")
        }
        _ => None,
    }
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}====================== {}\n{}",
        FG_BLUE, BOLD, msg, RESET
    );
}
