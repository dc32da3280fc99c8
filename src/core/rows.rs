//! Row splitting within a block
//!
//! CEA prints each table row as a species name followed by one mole
//! fraction per run instance column. After whitespace tokenization those
//! rows are flat, so they are rebuilt with a lexical classifier: mole
//! fractions are always below 1 and printed with a leading `0`, while
//! species names never start with that digit.

use crate::utils::ParseWarning;

/// One species row of a block: the name and its value tokens, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub species: String,
    pub values: Vec<String>,
}

impl Row {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            values: Vec::new(),
        }
    }
}

/// Classify a token as a mole-fraction value rather than a species name.
///
/// Contract: a token is a value iff it begins with the character `'0'`.
/// This is a heuristic coupled to CEA's output convention that mole
/// fractions are printed as `0.xxxxx` and species names never start with
/// a zero. A pathological name beginning with `'0'` is therefore
/// misclassified as a value and absorbed by the preceding row; this is a
/// documented limitation, not an error.
pub fn is_value_token(token: &str) -> bool {
    token.starts_with('0')
}

/// Partition one block's flat token sequence into rows.
///
/// A name token closes the open row (if any) and opens a new one; value
/// tokens append to the open row. The final open row is emitted at block
/// end, including rows with zero values. Value tokens appearing before
/// any name token have no row to belong to; they are dropped and reported
/// as a warning carrying `block_index`.
pub fn split_rows(block: &[&str], block_index: usize) -> (Vec<Row>, Vec<ParseWarning>) {
    let mut rows = Vec::new();
    let mut warnings = Vec::new();
    let mut current: Option<Row> = None;
    let mut dropped = 0usize;

    for &token in block {
        if token.is_empty() {
            continue;
        }
        if is_value_token(token) {
            match current.as_mut() {
                Some(row) => row.values.push(token.to_string()),
                None => dropped += 1,
            }
        } else {
            if let Some(row) = current.take() {
                rows.push(row);
            }
            current = Some(Row::new(token));
        }
    }
    if let Some(row) = current.take() {
        rows.push(row);
    }

    if dropped > 0 {
        warnings.push(ParseWarning::in_block(
            format!(
                "dropped {} leading value token(s) with no preceding species name",
                dropped
            ),
            block_index,
        ));
    }

    (rows, warnings)
}
