//! Table persistence: the monitored spreadsheet is read whole and written
//! whole. The file format follows the extension.

mod csv_table;
mod excel_date;
pub(crate) mod fs_utils;
mod xlsx;

use crate::core::highlight::HighlightRule;
use crate::errors::{AppError, AppResult};
use crate::models::{Column, Record, Table};
use std::path::Path;
use tracing::debug;

pub use fs_utils::ensure_writable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Xlsx,
    Csv,
}

impl StoreFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => Ok(StoreFormat::Xlsx),
            "csv" => Ok(StoreFormat::Csv),
            _ => Err(AppError::UnsupportedStore(path.display().to_string())),
        }
    }

    /// Only spreadsheet files can carry conditional formatting.
    pub fn supports_highlight(&self) -> bool {
        matches!(self, StoreFormat::Xlsx)
    }
}

/// A table as found on disk, before any schema repair.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    /// Fixed columns the file did not have.
    pub missing: Vec<Column>,
    /// False when the file had no header row at all.
    pub has_header: bool,
    /// Sheet line (1-based) the header was found on.
    pub header_line: usize,
}

pub fn exists(path: &Path) -> bool {
    path.is_file()
}

pub fn read_table(path: &Path) -> AppResult<LoadedTable> {
    let (grid, header_line) = match StoreFormat::from_path(path)? {
        StoreFormat::Xlsx => xlsx::read_grid(path)?,
        StoreFormat::Csv => (csv_table::read_grid(path)?, 1),
    };
    debug!(path = %path.display(), lines = grid.len(), header_line, "table read");
    Ok(LoadedTable {
        header_line,
        ..grid_to_table(grid)
    })
}

/// Overwrite `path` with `table` (and the highlight rule when the format
/// supports it). The file is replaced atomically.
pub fn write_table(path: &Path, table: &Table, rule: Option<&HighlightRule>) -> AppResult<()> {
    let bytes = match StoreFormat::from_path(path)? {
        StoreFormat::Xlsx => xlsx::to_bytes(table, rule),
        StoreFormat::Csv => csv_table::to_bytes(table),
    }
    .map_err(|cause| AppError::StoreWrite {
        path: path.display().to_string(),
        cause,
    })?;

    fs_utils::replace_file(path, &bytes).map_err(|e| AppError::StoreWrite {
        path: path.display().to_string(),
        cause: e.to_string(),
    })?;

    debug!(path = %path.display(), rows = table.len(), "table written");
    Ok(())
}

/// Create `path` holding only the fixed header row.
pub fn initialize(path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| AppError::StoreWrite {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;
    }
    write_table(path, &Table::default(), None)
}

pub(crate) fn read_error<E: std::fmt::Display>(path: &Path, e: E) -> AppError {
    AppError::StoreRead {
        path: path.display().to_string(),
        cause: e.to_string(),
    }
}

/// Header line + data lines → records. Fixed columns are located by header
/// name; other named columns are kept as extras.
pub(crate) fn grid_to_table(grid: Vec<Vec<String>>) -> LoadedTable {
    let mut lines = grid.into_iter();

    let Some(header) = lines.next() else {
        return LoadedTable {
            table: Table::default(),
            missing: Column::ALL.to_vec(),
            has_header: false,
            header_line: 1,
        };
    };

    let mut fixed: [Option<usize>; 5] = [None; 5];
    let mut extras: Vec<(usize, String)> = Vec::new();

    for (i, h) in header.iter().enumerate() {
        match Column::from_header(h) {
            Some(c) if fixed[c.index()].is_none() => fixed[c.index()] = Some(i),
            _ if !h.trim().is_empty() => extras.push((i, h.trim().to_string())),
            _ => {}
        }
    }

    fn cell(line: &[String], pos: Option<usize>) -> String {
        pos.and_then(|p| line.get(p)).cloned().unwrap_or_default()
    }

    let records = lines
        .map(|line| {
            let deadline = cell(&line, fixed[Column::Deadline.index()]);
            Record {
                item: cell(&line, fixed[Column::Item.index()]),
                operator: cell(&line, fixed[Column::Operator.index()]),
                deadline: (!deadline.trim().is_empty()).then_some(deadline),
                remaining: cell(&line, fixed[Column::Remaining.index()]),
                exceeded: cell(&line, fixed[Column::Exceeded.index()]),
                extra: extras
                    .iter()
                    .map(|(p, _)| line.get(*p).cloned().unwrap_or_default())
                    .collect(),
            }
        })
        .collect();

    let missing = Column::ALL
        .into_iter()
        .filter(|c| fixed[c.index()].is_none())
        .collect();

    LoadedTable {
        table: Table {
            records,
            extra_headers: extras.into_iter().map(|(_, h)| h).collect(),
        },
        missing,
        has_header: true,
        header_line: 1,
    }
}
