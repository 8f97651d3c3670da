//! Grid edit state module structure
//!
//! Split into multiple files matching the test structure:
//! - `state.rs` - Struct definition, constructors, getters, basic setters
//! - `paint.rs` - Cell painting and pointer strokes
//! - `text_operations.rs` - Grid text, text import, find/replace
//! - `file_operations.rs` - JSON save/load, image import, PNG export
//! - `undo.rs` - Commit and undo/redo

mod edit_mode;

// State struct and basic operations
mod state;

// Implementation split by category (matching test structure)
mod file_operations;
mod paint;
mod text_operations;
mod undo;

pub use edit_mode::{EditMode, PaintOutcome};
pub use state::{GridEditState, DEFAULT_COLOR, DEFAULT_SIDE_LENGTH};
