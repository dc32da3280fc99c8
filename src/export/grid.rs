//! Grid layout for the aggregated table
//!
//! Columns are aligned to source blocks: each block gets as many columns
//! as its widest species contribution, and a species' cells for a block
//! it is absent from (or short in) are padded with empty cells. This
//! keeps a value in the column of the block that produced it instead of
//! silently left-aligning shorter rows.

use crate::core::AggregatedTable;

/// One labelled row of the export grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub species: String,
    pub cells: Vec<String>,
}

/// The 2-D species × column grid handed to the serializers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    /// Header labels for the data columns (1-based position numbers)
    pub columns: Vec<String>,
    /// Species rows in table insertion order, all the same width
    pub rows: Vec<GridRow>,
}

impl TableGrid {
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Number of columns each block occupies in the grid.
fn block_widths(table: &AggregatedTable) -> Vec<usize> {
    let mut widths = vec![0usize; table.block_count()];
    for (_, slots) in table.iter() {
        for (block, values) in slots.iter().enumerate() {
            widths[block] = widths[block].max(values.len());
        }
    }
    widths
}

/// Lay the aggregated table out as a padded grid.
pub fn build_grid(table: &AggregatedTable) -> TableGrid {
    let widths = block_widths(table);
    let total: usize = widths.iter().sum();

    let columns = (1..=total).map(|c| c.to_string()).collect();

    let rows = table
        .iter()
        .map(|(species, slots)| {
            let mut cells = Vec::with_capacity(total);
            for (block, values) in slots.iter().enumerate() {
                cells.extend(values.iter().cloned());
                cells.extend(std::iter::repeat(String::new()).take(widths[block] - values.len()));
            }
            GridRow {
                species: species.to_string(),
                cells,
            }
        })
        .collect();

    TableGrid { columns, rows }
}
