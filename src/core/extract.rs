//! Block extraction between the marker and the `*` sentinel

/// The token that terminates each mole-fraction table in CEA output.
pub const BLOCK_SENTINEL: &str = "*";

/// Collect the tokens of one block, starting at `data_start` and stopping
/// (exclusive) at the first [`BLOCK_SENTINEL`] token.
///
/// If no sentinel occurs before the end of the token sequence, the block
/// extends to the end. A `data_start` at or past the end yields an empty
/// block.
pub fn extract_block<'t>(tokens: &[&'t str], data_start: usize) -> Vec<&'t str> {
    tokens
        .iter()
        .skip(data_start)
        .take_while(|&&tok| tok != BLOCK_SENTINEL)
        .copied()
        .collect()
}
