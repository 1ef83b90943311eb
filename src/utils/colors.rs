/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Same look as the spreadsheet alert style (red fill, white text).
pub const WHITE_ON_RED: &str = "\x1b[41;97;1m";

/// Wraps `value` in `color` … `RESET`.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
