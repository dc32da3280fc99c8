//! Table layout and serialization
//!
//! Lays the aggregated mapping out as a padded species × column grid
//! (`grid`) and serializes it as CSV (`csv`) or XLSX (`xlsx`).

pub mod csv;
pub mod grid;
pub mod xlsx;

pub use grid::{build_grid, GridRow, TableGrid};

use std::path::{Path, PathBuf};

use crate::core::AggregatedTable;
use crate::utils::CeaResult;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Resolve the output path `<base>.<ext>` for a format.
///
/// The extension is appended, never substituted, so a base name
/// containing dots stays intact.
pub fn output_path(base: impl AsRef<Path>, format: ExportFormat) -> PathBuf {
    let mut name = base.as_ref().as_os_str().to_os_string();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Lay out the table and serialize it to `<base>.<ext>`.
///
/// Returns the path written. An empty table still produces a valid
/// header-only file.
pub fn export_table(
    table: &AggregatedTable,
    base: impl AsRef<Path>,
    format: ExportFormat,
) -> CeaResult<PathBuf> {
    let path = output_path(base, format);
    let grid = build_grid(table);
    match format {
        ExportFormat::Csv => csv::write_csv(&grid, &path)?,
        ExportFormat::Xlsx => xlsx::write_xlsx(&grid, &path)?,
    }
    Ok(path)
}
