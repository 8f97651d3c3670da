//! Model layer for pixel grid editing
//!
//! - [`GridEditState`] - the grid, its history and the active tool
//! - [`GridUndoStack`] - linear snapshot history with undo/redo
//! - [`EditMode`] - draw, erase or eyedropper
//!
//! Rendering is left to the front end: it reads [`GridEditState::grid`] and
//! forwards pointer events and commands.

mod edit_state;
pub use edit_state::*;

mod undo_stack;
pub use undo_stack::{GridOperationType, GridSnapshot, GridUndoStack, GridUndoState};

// Re-export the engine types used in this crate's API
pub use pixel_engine::{text_codec, EngineError, Grid, Result, Rgba, EMPTY_CELL};
