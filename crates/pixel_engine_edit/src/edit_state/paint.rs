//! Cell painting for the grid editor
//!
//! - `paint` - one cell, explicit color and mode
//! - `paint_active` - one cell with the active tool
//! - `pointer_down` / `pointer_move` / `pointer_up` / `pointer_leave` - strokes
//!
//! A stroke paints once on pointer-down and once for every newly entered cell
//! while the pointer stays down. Re-entering the cell painted last does not
//! paint again; releasing or leaving the drawing area ends the stroke.

use pixel_engine::{EngineError, Result, EMPTY_CELL};

use crate::undo_stack::GridOperationType;

use super::{EditMode, GridEditState, PaintOutcome};

impl GridEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Single Cell
    // ═══════════════════════════════════════════════════════════════════════

    /// Paint cell `index`
    ///
    /// - `Draw` sets the cell to `color`, `Erase` to the empty token. If the
    ///   cell already holds that value nothing is recorded.
    /// - `Eyedropper` never changes anything and returns the cell's color,
    ///   which may be the empty token.
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexOutOfRange`] if `index` is not a cell of the grid.
    pub fn paint(&mut self, index: usize, color: &str, mode: EditMode) -> Result<PaintOutcome> {
        let len = self.cell_count();
        let Some(current) = self.cell(index) else {
            return Err(EngineError::IndexOutOfRange { index, len });
        };

        let (target, operation_type) = match mode {
            EditMode::Eyedropper => return Ok(PaintOutcome::Picked(current.to_string())),
            EditMode::Erase => (EMPTY_CELL, GridOperationType::Erase),
            EditMode::Draw => (color, GridOperationType::Paint),
        };

        if current == target {
            return Ok(PaintOutcome::Unchanged);
        }

        let new_grid = self.grid().with_cell(index, target)?;
        self.commit(new_grid, operation_type);
        Ok(PaintOutcome::Changed)
    }

    /// Paint cell `index` with the active color and mode
    ///
    /// In eyedropper mode the picked color becomes the active color.
    pub fn paint_active(&mut self, index: usize) -> Result<PaintOutcome> {
        let color = self.active_color.clone();
        let outcome = self.paint(index, &color, self.mode)?;
        if let PaintOutcome::Picked(picked) = &outcome {
            self.active_color = picked.clone();
        }
        Ok(outcome)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Strokes
    // ═══════════════════════════════════════════════════════════════════════

    /// Whether a stroke is in progress
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Pointer pressed over cell `index`
    ///
    /// With the eyedropper this picks the color and does not start a stroke.
    pub fn pointer_down(&mut self, index: usize) -> Result<PaintOutcome> {
        if self.mode == EditMode::Eyedropper {
            self.end_stroke();
            return self.paint_active(index);
        }

        let outcome = self.paint_active(index)?;
        self.is_drawing = true;
        self.last_stroke_cell = Some(index);
        Ok(outcome)
    }

    /// Pointer moved over cell `index`
    ///
    /// Paints only while a stroke is running and only when `index` is not the
    /// cell painted last.
    pub fn pointer_move(&mut self, index: usize) -> Result<PaintOutcome> {
        if !self.is_drawing || self.last_stroke_cell == Some(index) {
            return Ok(PaintOutcome::Unchanged);
        }
        let outcome = self.paint_active(index)?;
        self.last_stroke_cell = Some(index);
        Ok(outcome)
    }

    /// Pointer released
    pub fn pointer_up(&mut self) {
        self.end_stroke();
    }

    /// Pointer left the drawing area
    pub fn pointer_leave(&mut self) {
        self.end_stroke();
    }

    fn end_stroke(&mut self) {
        self.is_drawing = false;
        self.last_stroke_cell = None;
    }
}
