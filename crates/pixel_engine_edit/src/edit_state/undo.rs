//! Undo/Redo system for the grid editor
//!
//! All grid modifications end in `commit`, which appends a snapshot after the
//! history cursor. Validation happens before `commit` is reached, so a failed
//! operation never leaves a partial entry behind.

use pixel_engine::{EngineError, Grid, Result};

use crate::undo_stack::{GridOperationType, GridSnapshot, GridUndoStack, GridUndoState};

use super::GridEditState;

impl GridEditState {
    /// Record `new_grid` as the new current grid
    pub(crate) fn commit(&mut self, new_grid: Grid, operation_type: GridOperationType) {
        self.undo_stack.push(GridSnapshot::new(new_grid, operation_type));
    }

    /// Replace the whole grid, recorded as [`GridOperationType::ReplaceAll`]
    ///
    /// # Errors
    ///
    /// [`EngineError::DimensionMismatch`] if `new_grid` has the wrong number of cells.
    pub fn replace_all(&mut self, new_grid: Grid) -> Result<()> {
        self.replace_all_with(new_grid, GridOperationType::ReplaceAll)
    }

    /// Replace the whole grid and record it under `operation_type`
    ///
    /// Always adds a history entry, even when `new_grid` equals the current grid.
    ///
    /// # Errors
    ///
    /// [`EngineError::DimensionMismatch`] if `new_grid` has the wrong number of cells.
    pub fn replace_all_with(&mut self, new_grid: Grid, operation_type: GridOperationType) -> Result<()> {
        let expected = self.cell_count();
        if new_grid.len() != expected {
            return Err(EngineError::DimensionMismatch {
                expected,
                actual: new_grid.len(),
            });
        }
        self.commit(new_grid, operation_type);
        Ok(())
    }

    /// Number of history entries, including the initial grid
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Index of the current entry in the history
    pub fn history_step(&self) -> usize {
        self.undo_stack.step()
    }

    /// Get undo stack length
    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    /// Get redo stack length
    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    /// Mark as saved (marks save point in undo stack)
    pub fn mark_saved(&mut self) {
        self.undo_stack.mark_saved();
    }

    /// Get access to the undo stack for serialization
    pub fn undo_stack(&self) -> &GridUndoStack {
        &self.undo_stack
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GridUndoState Trait Implementation
// ═══════════════════════════════════════════════════════════════════════════

impl GridUndoState for GridEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> bool {
        let moved = self.undo_stack.undo().is_some();
        if moved {
            log::debug!("undo -> step {}", self.undo_stack.step());
        }
        moved
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> bool {
        let moved = self.undo_stack.redo().is_some();
        if moved {
            log::debug!("redo -> step {}", self.undo_stack.step());
        }
        moved
    }
}
