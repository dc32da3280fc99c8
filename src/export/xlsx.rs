//! XLSX serialization of the export grid

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::utils::{CeaError, CeaResult};

use super::grid::TableGrid;

const SHEET_NAME: &str = "Mole Fractions";

/// Checked conversion from a 0-based grid column to a sheet column one
/// to its right (column 0 holds the species names). Grids wider than a
/// worksheet are rejected rather than truncated.
fn sheet_col(col: usize, path: &str) -> CeaResult<u16> {
    u16::try_from(col + 1).map_err(|_| {
        CeaError::export(
            path,
            format!("grid column {} exceeds the XLSX column limit", col + 1),
        )
    })
}

fn fill_sheet(workbook: &mut Workbook, grid: &TableGrid, path: &str) -> CeaResult<()> {
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| CeaError::export(path, e))?;

    worksheet
        .write_string_with_format(0, 0, "Species", &header_format)
        .map_err(|e| CeaError::export(path, e))?;
    for (col, label) in grid.columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, sheet_col(col, path)?, label, &header_format)
            .map_err(|e| CeaError::export(path, e))?;
    }

    for (r, row) in grid.rows.iter().enumerate() {
        let sheet_row = u32::try_from(r + 1).map_err(|_| {
            CeaError::export(path, format!("grid row {} exceeds the XLSX row limit", r + 1))
        })?;
        worksheet
            .write_string(sheet_row, 0, &row.species)
            .map_err(|e| CeaError::export(path, e))?;
        for (col, cell) in row.cells.iter().enumerate() {
            if !cell.is_empty() {
                worksheet
                    .write_string(sheet_row, sheet_col(col, path)?, cell)
                    .map_err(|e| CeaError::export(path, e))?;
            }
        }
    }

    Ok(())
}

/// Write the grid as a single-sheet workbook named for mole fractions.
pub fn write_xlsx(grid: &TableGrid, path: &Path) -> CeaResult<()> {
    let display = path.display().to_string();
    let mut workbook = Workbook::new();
    fill_sheet(&mut workbook, grid, &display)?;
    workbook
        .save(path)
        .map_err(|e| CeaError::export(&display, e))?;
    Ok(())
}
