//! Aggregation of rows across blocks
//!
//! Same-named species rows from different blocks are merged into one
//! record per species. The record keeps each block's contribution
//! separate so the exporter can align columns to source blocks, while
//! [`AggregatedTable::concatenated`] exposes the flattened
//! (block order, within-block row order) sequence.

use indexmap::IndexMap;

use super::rows::Row;

/// Species → per-block value contributions, in order of first appearance.
///
/// Every entry holds exactly `block_count` contribution slots; a block
/// the species is absent from contributes an empty slot. Absence is never
/// turned into an invented value: the concatenated sequence for such a
/// species is simply shorter, and only the export grid pads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedTable {
    entries: IndexMap<String, Vec<Vec<String>>>,
    block_count: usize,
}

impl AggregatedTable {
    pub fn new(block_count: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            block_count,
        }
    }

    /// Number of blocks located in the document, including blocks no
    /// species survived from.
    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Number of distinct species seen across all blocks.
    pub fn species_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append one row's values to the species' slot for `block_index`,
    /// creating the entry (all slots empty) on first sight.
    ///
    /// # Panics
    ///
    /// Panics if `block_index >= block_count`: every entry holds exactly
    /// `block_count` slots, fixed at construction.
    pub fn insert_row(&mut self, block_index: usize, row: &Row) {
        assert!(
            block_index < self.block_count,
            "block index {} out of range for a {}-block table",
            block_index,
            self.block_count
        );
        let slots = self
            .entries
            .entry(row.species.clone())
            .or_insert_with(|| vec![Vec::new(); self.block_count]);
        slots[block_index].extend(row.values.iter().cloned());
    }

    /// Species names in order of first appearance.
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Per-block contributions for a species (`block_count` slots).
    pub fn contributions(&self, species: &str) -> Option<&[Vec<String>]> {
        self.entries.get(species).map(Vec::as_slice)
    }

    /// The species' values flattened in (block order, within-block row
    /// order), with no padding for blocks it is absent from.
    pub fn concatenated(&self, species: &str) -> Option<Vec<&str>> {
        self.entries.get(species).map(|slots| {
            slots
                .iter()
                .flatten()
                .map(String::as_str)
                .collect()
        })
    }

    /// Iterate (species, per-block contributions) in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Vec<String>])> {
        self.entries
            .iter()
            .map(|(name, slots)| (name.as_str(), slots.as_slice()))
    }
}

/// Merge the blocks' row sets, in block order then within-block row
/// order, into one [`AggregatedTable`].
pub fn aggregate(blocks: &[Vec<Row>]) -> AggregatedTable {
    let mut table = AggregatedTable::new(blocks.len());
    for (block_index, rows) in blocks.iter().enumerate() {
        for row in rows {
            table.insert_row(block_index, row);
        }
    }
    table
}
