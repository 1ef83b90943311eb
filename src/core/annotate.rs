//! Table annotation: schema check, then one status per row, then a full
//! rewrite of the store.

use crate::core::cycle::CycleConfig;
use crate::core::deadline::{self, ParseError};
use crate::core::status::{Status, classify};
use crate::errors::{AppError, AppResult};
use crate::models::{Column, Record, Table};
use crate::store::{self, LoadedTable};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Non-fatal events of a pass, shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The store did not exist and was created empty.
    StoreInitialized(PathBuf),
    /// Fixed columns were missing and have been added blank.
    ColumnsAdded(Vec<&'static str>),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::StoreInitialized(p) => {
                write!(f, "File {} created with the default columns.", p.display())
            }
            Notice::ColumnsAdded(cols) => write!(f, "Added missing columns: {}", cols.join(", ")),
        }
    }
}

/// A bad deadline value. `row` is the spreadsheet line (header = 1).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid format at row {row}: {raw} ({source})")]
pub struct RowError {
    pub row: usize,
    pub raw: String,
    #[source]
    pub source: ParseError,
}

pub type RowOutcome = Result<Status, RowError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub within_time: usize,
    pub expired: usize,
    pub unscheduled: usize,
    pub invalid: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.within_time + self.expired + self.unscheduled + self.invalid
    }
}

#[derive(Debug, Clone)]
pub struct Annotation {
    pub table: Table,
    /// One entry per record, same order.
    pub outcomes: Vec<RowOutcome>,
    pub notices: Vec<Notice>,
}

impl Annotation {
    pub fn row_errors(&self) -> impl Iterator<Item = &RowError> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err())
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary::default();
        for o in &self.outcomes {
            match o {
                Ok(Status::Pending { .. }) => s.within_time += 1,
                Ok(Status::Expired { .. }) => s.expired += 1,
                Ok(Status::Unscheduled) => s.unscheduled += 1,
                Err(_) => s.invalid += 1,
            }
        }
        s
    }
}

/// Spreadsheet line of a zero-based data row under a header on `header_line`.
pub fn sheet_line(header_line: usize, index: usize) -> usize {
    header_line + 1 + index
}

/// Load, repair, annotate and persist the table at `cfg.table_location`.
///
/// Store failures abort the pass; bad rows are only recorded in
/// `Annotation::outcomes` and keep their previous derived values.
pub fn annotate(cfg: &CycleConfig) -> AppResult<Annotation> {
    let path = cfg.table_location.as_path();
    let mut notices = Vec::new();

    if !store::exists(path) {
        store::initialize(path)?;
        notices.push(Notice::StoreInitialized(path.to_path_buf()));
    }

    let loaded = store::read_table(path)?;
    if let Some(n) = check_schema(&loaded, path)? {
        notices.push(n);
    }

    let mut table = loaded.table;
    let outcomes = annotate_rows_below(&mut table, loaded.header_line, cfg.now, cfg.timezone);

    store::write_table(path, &table, None)?;

    Ok(Annotation {
        table,
        outcomes,
        notices,
    })
}

/// Missing derived/identity columns are repaired (they are blank in every
/// loaded record already); a file with rows but no deadline column is not.
fn check_schema(loaded: &LoadedTable, path: &Path) -> AppResult<Option<Notice>> {
    if loaded.has_header && loaded.missing.contains(&Column::Deadline) {
        return Err(AppError::MissingColumn {
            path: path.display().to_string(),
            column: Column::Deadline.header(),
        });
    }

    if loaded.missing.is_empty() {
        return Ok(None);
    }

    Ok(Some(Notice::ColumnsAdded(
        loaded.missing.iter().map(|c| c.header()).collect(),
    )))
}

/// Annotate every record in place, in source order, against one `now`.
pub fn annotate_rows(table: &mut Table, now: DateTime<Utc>, tz: Tz) -> Vec<RowOutcome> {
    annotate_rows_below(table, 1, now, tz)
}

fn annotate_rows_below(
    table: &mut Table,
    header_line: usize,
    now: DateTime<Utc>,
    tz: Tz,
) -> Vec<RowOutcome> {
    let reference_date = now.with_timezone(&tz).date_naive();

    table
        .records
        .iter_mut()
        .enumerate()
        .map(|(i, r)| annotate_record(r, sheet_line(header_line, i), reference_date, now, tz))
        .collect()
}

fn annotate_record(
    record: &mut Record,
    line: usize,
    reference_date: NaiveDate,
    now: DateTime<Utc>,
    tz: Tz,
) -> RowOutcome {
    let Some(raw) = record.deadline_text() else {
        record.clear_derived();
        return Ok(Status::Unscheduled);
    };

    let deadline = match deadline::parse(raw, reference_date, tz) {
        Ok(d) => d,
        Err(source) => {
            let err = RowError {
                row: line,
                raw: raw.to_string(),
                source,
            };
            warn!(row = err.row, raw = %err.raw, "unparsable deadline");
            return Err(err);
        }
    };

    let status = classify(deadline.with_timezone(&Utc), now);
    debug!(row = line, ?status, "row classified");

    let (remaining, exceeded) = status.derived_fields();
    record.set_derived(remaining, exceeded);
    Ok(status)
}
