//! File import/export for the grid editor
//!
//! - JSON: the canonical grid text, written verbatim
//! - Images: resampled into the grid as one history entry
//! - PNG: the current grid rasterised, `pixel_size` pixels per cell

use std::path::Path;

use pixel_engine::{formats, Result};

use crate::undo_stack::GridOperationType;

use super::GridEditState;

impl GridEditState {
    /// Write the grid text to `path` and mark the state saved
    pub fn save_json(&mut self, path: &Path) -> Result<()> {
        std::fs::write(path, self.text())?;
        self.file_path = Some(path.to_path_buf());
        self.mark_saved();
        log::info!("Saved grid to {}", path.display());
        Ok(())
    }

    /// Load grid text from `path` as a new history entry
    ///
    /// The file has to describe a grid of this session's size.
    pub fn load_json(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path)?;
        self.apply_text(&text)?;
        self.file_path = Some(path.to_path_buf());
        log::info!("Loaded grid from {}", path.display());
        Ok(())
    }

    /// Sample the image at `path` into the grid as a new history entry
    pub fn import_image(&mut self, path: &Path) -> Result<()> {
        let cells = formats::import_image(path, self.side_length)?;
        self.replace_all_with(cells.into(), GridOperationType::ImportImage)
    }

    /// Export the current grid as PNG
    pub fn export_png(&self, path: &Path, pixel_size: u32) -> Result<()> {
        formats::save_png(self.grid(), self.side_length, pixel_size, path)
    }
}
