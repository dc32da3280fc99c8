//! Core parsing pipeline
//!
//! The pipeline runs in one pass over the tokenized report:
//! - `tokenize`: whitespace tokenization
//! - `locate`: marker scan for table headings
//! - `extract`: block extraction up to the `*` sentinel
//! - `rows`: row splitting via the leading-`0` classifier
//! - `aggregate`: cross-block merge into the species table

pub mod aggregate;
pub mod extract;
pub mod locate;
pub mod rows;
pub mod tokenize;

pub use aggregate::{aggregate, AggregatedTable};
pub use extract::{extract_block, BLOCK_SENTINEL};
pub use locate::{data_start, locate_markers, MARKER};
pub use rows::{is_value_token, split_rows, Row};
pub use tokenize::tokenize;

use crate::utils::ParseWarning;

/// The aggregated table plus any warnings collected while parsing
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub table: AggregatedTable,
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutput {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the full parse/aggregate pipeline over report text.
///
/// Pure function of the input: the same text always yields the same
/// table. A document with no markers yields an empty table.
pub fn parse_report(text: &str) -> ParseOutput {
    let tokens = tokenize(text);
    let starts = locate_markers(&tokens);

    let mut blocks = Vec::with_capacity(starts.len());
    let mut warnings = Vec::new();
    for (block_index, &start) in starts.iter().enumerate() {
        let block = extract_block(&tokens, data_start(start));
        let (rows, mut block_warnings) = split_rows(&block, block_index);
        warnings.append(&mut block_warnings);
        blocks.push(rows);
    }

    ParseOutput {
        table: aggregate(&blocks),
        warnings,
    }
}
