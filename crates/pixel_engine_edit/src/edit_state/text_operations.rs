//! Text view of the grid
//!
//! The canonical text is always derived from the current grid. Text coming
//! back in (typed, loaded, or rewritten by find/replace) is decoded and
//! size-checked first; only a valid grid reaches the history.

use pixel_engine::{text_codec, Result};

use crate::undo_stack::GridOperationType;

use super::GridEditState;

impl GridEditState {
    /// Canonical text of the current grid
    pub fn text(&self) -> String {
        text_codec::encode(self.grid(), self.side_length)
    }

    /// Replace the grid with the one described by `text`
    ///
    /// # Errors
    ///
    /// [`pixel_engine::EngineError::MalformedText`] if `text` does not decode,
    /// [`pixel_engine::EngineError::DimensionMismatch`] if it decodes to the
    /// wrong number of cells. In both cases grid and history are unchanged.
    pub fn apply_text(&mut self, text: &str) -> Result<()> {
        self.apply_text_as(text, GridOperationType::ImportText)
    }

    /// Literal find/replace on the grid text, applied as a new grid
    ///
    /// An empty `pattern` leaves the text as is, which still records an
    /// (identical) entry like any other explicit import. Returns the number
    /// of replaced occurrences.
    ///
    /// # Errors
    ///
    /// See [`GridEditState::apply_text`]; a replacement that breaks the text
    /// is rejected without touching the grid.
    pub fn replace_in_text(&mut self, pattern: &str, replacement: &str) -> Result<usize> {
        let text = self.text();
        let count = text_codec::count_matches(&text, pattern);
        let replaced = text_codec::replace_pattern(&text, pattern, replacement);
        self.apply_text_as(&replaced, GridOperationType::ReplacePattern)?;
        Ok(count)
    }

    pub(crate) fn apply_text_as(&mut self, text: &str, operation_type: GridOperationType) -> Result<()> {
        let grid = text_codec::decode(text).inspect_err(|err| log::warn!("Rejected grid text: {err}"))?;
        self.replace_all_with(grid, operation_type)
            .inspect_err(|err| log::warn!("Rejected grid text: {err}"))
    }
}
