//! Snapshot history for grid editing
//!
//! Every entry is a complete grid. The entry under the cursor is the current
//! grid, entries before it can be undone to, entries after it redone to.
//! Pushing a new entry discards everything after the cursor, so the history
//! is a straight line and never a tree.

use pixel_engine::Grid;
use serde::{Deserialize, Serialize};

/// Trait for types that support undo/redo operations
pub trait GridUndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Step back one entry. Returns `false` (and changes nothing) at the start of the history.
    fn undo(&mut self) -> bool;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Step forward one entry. Returns `false` (and changes nothing) at the end of the history.
    fn redo(&mut self) -> bool;
}

/// What produced a history entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridOperationType {
    /// The grid the session started with
    Initial,
    /// A single cell painted with a color
    Paint,
    /// A single cell erased
    Erase,
    /// Grid text edited or loaded
    ImportText,
    /// Find/replace on the grid text
    ReplacePattern,
    /// Grid sampled from an image
    ImportImage,
    /// Whole grid supplied by the caller
    ReplaceAll,
}

impl GridOperationType {
    pub fn description(self) -> &'static str {
        match self {
            GridOperationType::Initial => "Initial grid",
            GridOperationType::Paint => "Paint",
            GridOperationType::Erase => "Erase",
            GridOperationType::ImportText => "Edit text",
            GridOperationType::ReplacePattern => "Replace",
            GridOperationType::ImportImage => "Import image",
            GridOperationType::ReplaceAll => "Replace grid",
        }
    }
}

/// One immutable history entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub grid: Grid,
    pub operation_type: GridOperationType,
}

impl GridSnapshot {
    pub fn new(grid: Grid, operation_type: GridOperationType) -> Self {
        Self { grid, operation_type }
    }

    pub fn description(&self) -> &'static str {
        self.operation_type.description()
    }
}

/// Linear snapshot history with a cursor
///
/// Never empty: entry 0 is the initial grid and `step` always points at a
/// valid entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridUndoStack {
    entries: Vec<GridSnapshot>,
    step: usize,
    /// Step that was current at the last save, `None` if that entry is gone
    saved_step: Option<usize>,
}

impl GridUndoStack {
    /// Create a history holding only `initial`. The initial state counts as saved.
    pub fn new(initial: Grid) -> Self {
        Self {
            entries: vec![GridSnapshot::new(initial, GridOperationType::Initial)],
            step: 0,
            saved_step: Some(0),
        }
    }

    /// The grid at the cursor
    pub fn current(&self) -> &Grid {
        &self.entries[self.step].grid
    }

    /// The entry at the cursor
    pub fn current_snapshot(&self) -> &GridSnapshot {
        &self.entries[self.step]
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of entries, including the initial one
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GridSnapshot] {
        &self.entries
    }

    /// Number of steps that can be undone
    pub fn undo_len(&self) -> usize {
        self.step
    }

    /// Number of steps that can be redone
    pub fn redo_len(&self) -> usize {
        self.entries.len() - 1 - self.step
    }

    pub fn can_undo(&self) -> bool {
        self.step >= 1
    }

    pub fn can_redo(&self) -> bool {
        self.step + 1 < self.entries.len()
    }

    /// Append a snapshot after the cursor, dropping any redo entries.
    pub fn push(&mut self, snapshot: GridSnapshot) {
        let dropped = self.redo_len();
        self.entries.truncate(self.step + 1);
        if self.saved_step.is_some_and(|saved| saved > self.step) {
            self.saved_step = None;
        }
        self.entries.push(snapshot);
        self.step = self.entries.len() - 1;
        log::debug!(
            "history: pushed '{}' at step {} ({} redo entries dropped)",
            self.entries[self.step].description(),
            self.step,
            dropped
        );
    }

    /// Move the cursor back. Returns the new current grid, or `None` at the start.
    pub fn undo(&mut self) -> Option<&Grid> {
        if !self.can_undo() {
            return None;
        }
        self.step -= 1;
        Some(self.current())
    }

    /// Move the cursor forward. Returns the new current grid, or `None` at the end.
    pub fn redo(&mut self) -> Option<&Grid> {
        if !self.can_redo() {
            return None;
        }
        self.step += 1;
        Some(self.current())
    }

    /// Description of the entry an undo would revert
    pub fn undo_description(&self) -> Option<String> {
        self.can_undo().then(|| self.entries[self.step].description().to_string())
    }

    /// Description of the entry a redo would re-apply
    pub fn redo_description(&self) -> Option<String> {
        self.can_redo().then(|| self.entries[self.step + 1].description().to_string())
    }

    /// Remember the current step as the saved state
    pub fn mark_saved(&mut self) {
        self.saved_step = Some(self.step);
    }

    /// True when the cursor sits on the entry that was last saved
    pub fn is_at_save_point(&self) -> bool {
        self.saved_step == Some(self.step)
    }
}
