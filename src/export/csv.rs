//! CSV serialization of the export grid

use std::path::Path;

use crate::utils::{CeaError, CeaResult};

use super::grid::TableGrid;

/// Write the grid as CSV: a `Species` header row followed by one record
/// per species. Empty cells stay empty.
pub fn write_csv(grid: &TableGrid, path: &Path) -> CeaResult<()> {
    let display = path.display().to_string();
    let mut writer = csv::Writer::from_path(path).map_err(|e| CeaError::export(&display, e))?;

    let mut header = Vec::with_capacity(grid.width() + 1);
    header.push("Species");
    header.extend(grid.columns.iter().map(String::as_str));
    writer
        .write_record(&header)
        .map_err(|e| CeaError::export(&display, e))?;

    for row in &grid.rows {
        let mut record = Vec::with_capacity(grid.width() + 1);
        record.push(row.species.as_str());
        record.extend(row.cells.iter().map(String::as_str));
        writer
            .write_record(&record)
            .map_err(|e| CeaError::export(&display, e))?;
    }

    writer.flush().map_err(|e| CeaError::export(&display, e))
}
