//! # ceatab
//!
//! Extracts the MOLE FRACTIONS tables from NASA-CEA (Chemical Equilibrium
//! with Applications) plain-text combustion output and consolidates them
//! into one species × instance table for CSV or XLSX export.
//!
//! ## How it works
//!
//! CEA prints a heading above each mole-fraction table and ends it with a
//! `*` sentinel. The pipeline tokenizes the report, locates every heading,
//! extracts each table's tokens, splits them into species rows with a
//! lexical classifier (mole fractions start with `0`, species names don't),
//! and merges same-named rows across tables in document order.
//!
//! ## Usage
//!
//! ```rust
//! use ceatab::parse_report;
//!
//! let output = parse_report("MOLE FRACTIONS CH4 0.123 O2 0.456 N2 0.789 *");
//! assert_eq!(output.table.concatenated("O2"), Some(vec!["0.456"]));
//! ```
//!
//! Different CEA runs may report different species subsets. The
//! aggregated table keeps each block's contribution separate so the
//! exporter can align values to their source block, padding the gaps with
//! empty cells; [`crate::core::AggregatedTable::concatenated`] gives the
//! unpadded flattened sequence.

/// Parsing pipeline: tokenize, locate, extract, split, aggregate
pub mod core;

/// Grid layout and CSV/XLSX serialization
pub mod export;

/// Errors, results, warnings
pub mod utils;

// Re-export the main pipeline surface
pub use core::{aggregate, parse_report, AggregatedTable, ParseOutput, Row};

// Re-export the export surface
pub use export::{export_table, output_path, ExportFormat, TableGrid};

// Re-export error types
pub use utils::{CeaError, CeaResult, ParseWarning};

/// Read a CEA report from disk and run the parse pipeline.
///
/// An unreadable path is a hard [`CeaError::DocumentUnavailable`] failure,
/// never a silent empty document.
pub fn parse_report_file(path: impl AsRef<std::path::Path>) -> CeaResult<ParseOutput> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| CeaError::document_unavailable(path.display().to_string(), e))?;
    Ok(parse_report(&text))
}
