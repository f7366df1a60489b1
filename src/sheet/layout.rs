//! Fixed sheet grid: facings, row assignment and cell addressing

use crate::io::configuration::{FRAME_HEIGHT, FRAME_WIDTH, SHEET_COLUMNS, SHEET_ROWS};
use std::fmt;

/// Row holding the gesture animations, always drawn facing front
pub const GESTURE_ROW: u32 = 3;

/// Stored viewing direction
///
/// Left is never stored; the renderer mirrors the right-facing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Facing the viewer
    Front,
    /// Facing away from the viewer
    Back,
    /// Facing screen right
    Right,
}

impl Facing {
    /// Directional facings in row order
    pub const ALL: [Self; 3] = [Self::Front, Self::Back, Self::Right];

    /// Sheet row holding this facing's idle and walk frames
    pub const fn row(self) -> u32 {
        match self {
            Self::Front => 0,
            Self::Back => 1,
            Self::Right => 2,
        }
    }

    /// Lowercase name as used in asset metadata
    pub const fn name(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Address of one frame cell in the sheet grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Grid row
    pub row: u32,
    /// Grid column
    pub col: u32,
}

impl Cell {
    /// Create a cell address
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies inside the sheet grid
    pub const fn in_grid(self) -> bool {
        self.row < SHEET_ROWS && self.col < SHEET_COLUMNS
    }

    /// Pixel coordinates of the cell's top-left corner
    pub const fn origin(self) -> (u32, u32) {
        (self.col * FRAME_WIDTH, self.row * FRAME_HEIGHT)
    }

    /// Row-major position among all grid cells
    pub const fn index(self) -> usize {
        (self.row * SHEET_COLUMNS + self.col) as usize
    }

    /// Every cell of the grid in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SHEET_ROWS).flat_map(|row| (0..SHEET_COLUMNS).map(move |col| Self::new(row, col)))
    }
}
