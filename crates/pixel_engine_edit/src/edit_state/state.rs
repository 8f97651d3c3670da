//! Grid Edit State
//!
//! The state container for one pixel editing session. It owns the grid
//! history and the active tool (color + mode); front ends only read from it
//! and call its methods to change it.
//!
//! # Architecture Overview
//!
//! The current grid is not stored separately: it is always the history entry
//! under the cursor, so "current grid" and "history\[step\]" cannot drift apart.
//!
//! | Operation             | History entry?                       |
//! |-----------------------|--------------------------------------|
//! | paint (draw/erase)    | only if the cell actually changes    |
//! | paint (eyedropper)    | never                                |
//! | replace_all           | always, even for an identical grid   |
//! | apply_text / replace  | always, once the text decoded        |
//! | undo / redo           | never (moves the cursor)             |
//!
//! # Module Organization
//!
//! - `state.rs` - Struct definition, constructors, getters, basic setters
//! - `paint.rs` - Single cell painting and pointer strokes
//! - `text_operations.rs` - Grid text, text import, find/replace
//! - `file_operations.rs` - JSON save/load, image import, PNG export
//! - `undo.rs` - Commit and undo/redo

use std::path::PathBuf;

use pixel_engine::{EngineError, Grid, Result, EMPTY_CELL};

use crate::undo_stack::GridUndoStack;

use super::EditMode;

/// Side length used when nothing else is configured
pub const DEFAULT_SIDE_LENGTH: usize = 16;

/// Active color of a fresh session
pub const DEFAULT_COLOR: &str = "#000000";

// ═══════════════════════════════════════════════════════════════════════════
// Grid Edit State
// ═══════════════════════════════════════════════════════════════════════════

/// Main state container for pixel grid editing
pub struct GridEditState {
    /// Cells per row and per column, fixed for the session
    pub(crate) side_length: usize,

    /// Snapshot history; its current entry is the grid on screen
    pub(crate) undo_stack: GridUndoStack,

    // ═══════════════════════════════════════════════════════════════════════
    // Tool State
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) active_color: String,

    pub(crate) mode: EditMode,

    /// Pointer is down and painting
    pub(crate) is_drawing: bool,

    /// Last cell painted by the running stroke
    pub(crate) last_stroke_cell: Option<usize>,

    // ═══════════════════════════════════════════════════════════════════════
    // File State
    // ═══════════════════════════════════════════════════════════════════════
    pub(crate) file_path: Option<PathBuf>,
}

impl GridEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create an empty `side_length × side_length` grid
    pub fn new(side_length: usize) -> Result<Self> {
        Self::with_fill(side_length, EMPTY_CELL)
    }

    /// Create a grid with every cell set to `fill`
    pub fn with_fill(side_length: usize, fill: &str) -> Result<Self> {
        let grid = Grid::new(side_length, fill)?;
        Ok(Self::from_parts(side_length, grid))
    }

    /// Start a session from a caller supplied grid
    pub fn from_grid(side_length: usize, grid: Grid) -> Result<Self> {
        let expected = pixel_engine::cell_count(side_length)?;
        if grid.len() != expected {
            return Err(EngineError::DimensionMismatch {
                expected,
                actual: grid.len(),
            });
        }
        Ok(Self::from_parts(side_length, grid))
    }

    fn from_parts(side_length: usize, grid: Grid) -> Self {
        log::debug!("New {side_length}x{side_length} grid session");
        Self {
            side_length,
            undo_stack: GridUndoStack::new(grid),
            active_color: DEFAULT_COLOR.to_string(),
            mode: EditMode::Draw,
            is_drawing: false,
            last_stroke_cell: None,
            file_path: None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// The current grid
    pub fn grid(&self) -> &Grid {
        self.undo_stack.current()
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Number of cells, `side_length²`
    pub fn cell_count(&self) -> usize {
        self.grid().len()
    }

    /// Color token of cell `index`
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.grid().get(index)
    }

    /// Color token at (`col`, `row`)
    pub fn cell_at(&self, col: usize, row: usize) -> Option<&str> {
        if col >= self.side_length || row >= self.side_length {
            return None;
        }
        self.cell(row * self.side_length + col)
    }

    pub fn active_color(&self) -> &str {
        &self.active_color
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Whether the grid differs from the last saved (or initial) state
    pub fn is_dirty(&self) -> bool {
        !self.undo_stack.is_at_save_point()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Basic Setters (non-undoable, tool state)
    // ═══════════════════════════════════════════════════════════════════════

    /// Set the color used by `Draw`. The token is stored verbatim.
    pub fn set_active_color(&mut self, color: impl Into<String>) {
        self.active_color = color.into();
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    pub fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }
}
