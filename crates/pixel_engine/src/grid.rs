use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// Color token of an unpainted (transparent) cell.
pub const EMPTY_CELL: &str = "";

/// A square pixel grid stored as a flat, row-major sequence of color tokens.
///
/// Cell `i` lives at row `i / side_length`, column `i % side_length`. A token is
/// either [`EMPTY_CELL`] or an opaque color string (`#rrggbb`, `rgb(...)`,
/// `rgba(...)`). The grid stores tokens verbatim and never interprets them;
/// see [`crate::Rgba`] for the consumers that do.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<String>,
}

impl Grid {
    /// Creates a `side_length × side_length` grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDimension`] for a zero side length or one
    /// whose square does not fit into `usize`.
    pub fn new(side_length: usize, fill: &str) -> Result<Self> {
        let len = cell_count(side_length)?;
        Ok(Self {
            cells: vec![fill.to_string(); len],
        })
    }

    /// Wraps an existing flat cell sequence. No dimension check is made here.
    pub fn from_cells(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.cells.iter()
    }

    /// Row-major rows of `side_length` cells. A zero side length yields one cell per row.
    pub fn rows(&self, side_length: usize) -> std::slice::Chunks<'_, String> {
        self.cells.chunks(side_length.max(1))
    }

    /// Returns a copy of this grid with cell `index` replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IndexOutOfRange`] if `index` is not a cell of this grid.
    pub fn with_cell(&self, index: usize, value: &str) -> Result<Self> {
        if index >= self.cells.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            });
        }
        let mut cells = self.cells.clone();
        cells[index] = value.to_string();
        Ok(Self { cells })
    }

    /// Number of painted (non empty) cells.
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn into_cells(self) -> Vec<String> {
        self.cells
    }
}

impl Index<usize> for Grid {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.cells[index]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl From<Vec<String>> for Grid {
    fn from(cells: Vec<String>) -> Self {
        Self::from_cells(cells)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Grid {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// Number of cells of a square grid, `side_length²`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDimension`] for zero or overflowing side lengths.
pub fn cell_count(side_length: usize) -> Result<usize> {
    if side_length == 0 {
        return Err(EngineError::InvalidDimension { side_length });
    }
    side_length.checked_mul(side_length).ok_or(EngineError::InvalidDimension { side_length })
}
