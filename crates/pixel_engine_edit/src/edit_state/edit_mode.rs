use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// How a paint at a cell is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Set the cell to the active color
    #[default]
    Draw,
    /// Set the cell to the empty token
    Erase,
    /// Read the cell color without changing the grid
    Eyedropper,
}

impl EditMode {
    pub const ALL: [EditMode; 3] = [EditMode::Draw, EditMode::Erase, EditMode::Eyedropper];

    pub fn name(self) -> &'static str {
        match self {
            EditMode::Draw => "draw",
            EditMode::Erase => "erase",
            EditMode::Eyedropper => "eyedropper",
        }
    }

    /// Whether a paint in this mode can change the grid
    pub fn mutates(self) -> bool {
        !matches!(self, EditMode::Eyedropper)
    }
}

impl Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draw" | "pen" => Ok(EditMode::Draw),
            "erase" | "eraser" => Ok(EditMode::Erase),
            "eyedropper" | "pick" => Ok(EditMode::Eyedropper),
            other => Err(format!("unknown edit mode '{other}' (expected draw, erase or eyedropper)")),
        }
    }
}

/// Result of a paint call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    /// The cell changed and a history entry was added
    Changed,
    /// The cell already had the target value; nothing was recorded
    Unchanged,
    /// Eyedropper: the color found at the cell. Nothing was recorded.
    Picked(String),
}

impl PaintOutcome {
    /// True if a history entry was created
    pub fn changed(&self) -> bool {
        matches!(self, PaintOutcome::Changed)
    }

    pub fn picked(&self) -> Option<&str> {
        match self {
            PaintOutcome::Picked(color) => Some(color),
            _ => None,
        }
    }
}
