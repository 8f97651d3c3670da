//! Canonical text form of a grid
//!
//! The text form is a JSON array of color strings, one grid row per line:
//!
//! ```text
//! [
//! "#000000","",
//! "","#ff0000"
//! ]
//! ```
//!
//! Cells of a row are joined by `,` without spaces, rows are joined by `,\n`
//! and the whole thing is wrapped in `[\n` … `\n]`. Files exported in this
//! shape load back unchanged, and [`decode`] additionally accepts the nested
//! array-of-rows form.

use serde::Deserialize;

use crate::{EngineError, Grid, Result};

/// Shapes accepted by [`decode`].
#[derive(Deserialize)]
#[serde(untagged)]
enum GridText {
    Flat(Vec<String>),
    Rows(Vec<Vec<String>>),
}

/// Renders `grid` in the canonical text form.
///
/// Never fails. Cells are written as JSON string literals, so tokens that
/// contain quotes or backslashes still survive a [`decode`] round trip.
pub fn encode(grid: &Grid, side_length: usize) -> String {
    let rows: Vec<String> = grid
        .rows(side_length)
        .map(|row| row.iter().map(|cell| quote(cell)).collect::<Vec<_>>().join(","))
        .collect();
    format!("[\n{}\n]", rows.join(",\n"))
}

/// Parses text produced by [`encode`] (or a nested array of rows) into a flat grid.
///
/// The resulting length is not checked against any grid size here.
///
/// # Errors
///
/// Returns [`EngineError::MalformedText`] for invalid JSON or for JSON that is
/// not an array of strings / an array of arrays of strings.
pub fn decode(text: &str) -> Result<Grid> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(EngineError::malformed_text)?;
    let parsed = GridText::deserialize(value).map_err(|_| EngineError::malformed_text("expected an array of color strings or an array of rows"))?;

    let cells = match parsed {
        GridText::Flat(cells) => cells,
        GridText::Rows(rows) => rows.into_iter().flatten().collect(),
    };
    Ok(Grid::from_cells(cells))
}

/// Replaces every non-overlapping occurrence of `pattern` in `text` with `replacement`.
///
/// `pattern` is matched literally; characters like `.`, `*` or `(` have no
/// special meaning. Matches are found left to right and a replacement is never
/// rescanned. An empty `pattern` matches nothing and returns `text` unchanged.
pub fn replace_pattern(text: &str, pattern: &str, replacement: &str) -> String {
    if pattern.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for (start, matched) in text.match_indices(pattern) {
        result.push_str(&text[last_end..start]);
        result.push_str(replacement);
        last_end = start + matched.len();
    }
    result.push_str(&text[last_end..]);
    result
}

/// Number of non-overlapping occurrences of `pattern` in `text` (0 for an empty pattern).
pub fn count_matches(text: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    text.matches(pattern).count()
}

fn quote(cell: &str) -> String {
    // Serializing a str cannot fail.
    serde_json::to_string(cell).unwrap_or_else(|_| format!("\"{cell}\""))
}
