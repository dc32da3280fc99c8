//! Marker scan for MOLE FRACTIONS table headings

/// The literal heading CEA prints above each mole-fraction table.
///
/// The third token, `CH4`, is both the last heading token and the first
/// species name of the table, so block data starts *at* it (see
/// [`data_start`]).
pub const MARKER: [&str; 3] = ["MOLE", "FRACTIONS", "CH4"];

/// Find every index `i` such that `tokens[i..i + 3]` equals [`MARKER`].
///
/// Scans left to right; overlapping matches are allowed in principle,
/// though the marker cannot overlap itself. Zero matches is a valid
/// outcome, not an error.
pub fn locate_markers(tokens: &[&str]) -> Vec<usize> {
    if tokens.len() < MARKER.len() {
        return Vec::new();
    }
    (0..=tokens.len() - MARKER.len())
        .filter(|&i| tokens[i..i + MARKER.len()] == MARKER)
        .collect()
}

/// Map a marker match start to the index where block data begins.
///
/// Data starts two tokens past the match start, i.e. at the marker's `CH4`
/// token, which doubles as the first species name of the block.
pub fn data_start(match_start: usize) -> usize {
    match_start + 2
}
