use super::read_error;
use crate::errors::AppResult;
use crate::models::Table;
use csv::{ReaderBuilder, Writer};
use std::path::Path;

/// Every line of the file as plain cells (header included). Ragged lines
/// are accepted.
pub(super) fn read_grid(path: &Path) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| read_error(path, e))?;

    let mut grid = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(|e| read_error(path, e))?;
        grid.push(rec.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

pub(super) fn to_bytes(table: &Table) -> Result<Vec<u8>, String> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(table.headers()).map_err(|e| e.to_string())?;
    for r in &table.records {
        wtr.write_record(table.row_cells(r))
            .map_err(|e| e.to_string())?;
    }

    wtr.into_inner().map_err(|e| e.to_string())
}
