//! Sheet buffer and the assembler that fills it from a frame source
//!
//! The assembler owns the layout: which pose goes in which cell. Sources only
//! answer "what does this pose look like", so the photo and procedural
//! adapters share one layout implementation.

use crate::frame::raster;
use crate::frame::transform::Frame;
use crate::io::configuration::{FRAME_HEIGHT, FRAME_WIDTH, SHEET_HEIGHT, SHEET_WIDTH, WALK_COLUMNS};
use crate::io::error::{Result, SpriteError};
use crate::schedule::registry::ScheduleRegistry;
use crate::schedule::walk::walk_cycle;
use crate::sheet::layout::{Cell, Facing, GESTURE_ROW};
use bitvec::{bitvec, vec::BitVec};
use image::RgbaImage;
use tracing::debug;

/// How a pose is displaced from its base frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Walk-cycle step with a vertical bob
    Walk {
        /// Vertical offset, positive is down
        bob: i32,
    },
    /// Gesture frame with a free offset
    Gesture {
        /// Horizontal offset, positive is right
        dx: i32,
        /// Vertical offset, positive is down
        dy: i32,
    },
}

/// Everything a source needs to render one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pose {
    /// Direction the figure faces
    pub facing: Facing,
    /// Walk phase: 0 is idle, 1 to 4 are walk steps
    pub phase: u32,
    /// Displacement applied on top of the drawn pose
    pub motion: Motion,
}

impl Pose {
    /// Combined `(dx, dy)` displacement
    pub const fn offset(&self) -> (i32, i32) {
        match self.motion {
            Motion::Walk { bob } => (0, bob),
            Motion::Gesture { dx, dy } => (dx, dy),
        }
    }
}

/// Anything that can render a pose into a frame
pub trait FrameSource {
    /// Render the frame for one pose
    fn render(&self, pose: &Pose) -> Frame;
}

/// Fixed-size sprite sheet with a record of which cells were written
#[derive(Debug, Clone)]
pub struct Sheet {
    image: RgbaImage,
    written: BitVec,
}

impl Sheet {
    /// Fully transparent sheet with no cells written
    pub fn blank() -> Self {
        Self {
            image: raster::blank(SHEET_WIDTH, SHEET_HEIGHT),
            written: bitvec![0; Cell::all().count()],
        }
    }

    /// Copy a frame into a cell
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The cell lies outside the grid
    /// - The cell was already written
    pub fn place(&mut self, cell: Cell, frame: &Frame) -> Result<()> {
        if !cell.in_grid() {
            return Err(SpriteError::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
            });
        }
        if self.is_populated(cell) {
            return Err(SpriteError::CellConflict {
                row: cell.row,
                col: cell.col,
            });
        }

        let (x, y) = cell.origin();
        raster::place(&mut self.image, frame.as_image(), i64::from(x), i64::from(y));
        self.written.set(cell.index(), true);
        Ok(())
    }

    /// Pixel size as `(width, height)`
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Whether a frame was placed in the cell
    pub fn is_populated(&self, cell: Cell) -> bool {
        cell.in_grid() && self.written.get(cell.index()).as_deref() == Some(&true)
    }

    /// Columns written in a row, ascending
    pub fn populated_columns(&self, row: u32) -> Vec<u32> {
        Cell::all()
            .filter(|cell| cell.row == row && self.is_populated(*cell))
            .map(|cell| cell.col)
            .collect()
    }

    /// Number of cells written across the whole sheet
    pub fn populated_count(&self) -> usize {
        self.written.count_ones()
    }

    /// Copy one cell back out as a frame
    pub fn frame_at(&self, cell: Cell) -> Option<Frame> {
        if !cell.in_grid() {
            return None;
        }
        let (x, y) = cell.origin();
        let bounds = raster::Bounds {
            x,
            y,
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
        };
        Frame::from_image(raster::crop(&self.image, bounds)).ok()
    }

    /// Whether the cell holds no visible pixels
    pub fn is_cell_transparent(&self, cell: Cell) -> bool {
        self.frame_at(cell).is_none_or(|frame| frame.is_transparent())
    }

    /// Borrow the sheet pixels
    pub const fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take ownership of the sheet pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Lays out walk cycles and gestures and fills a sheet from a source
pub struct SheetAssembler<'a> {
    registry: &'a ScheduleRegistry,
}

impl<'a> SheetAssembler<'a> {
    /// Create an assembler over a validated registry
    pub const fn new(registry: &'a ScheduleRegistry) -> Self {
        Self { registry }
    }

    /// Every cell the assembler writes, paired with the pose rendered there
    ///
    /// Directional rows come first (idle then walk steps), followed by the
    /// gesture row in registry order, always facing front.
    pub fn poses(&self) -> Vec<(Cell, Pose)> {
        let walk_cells = Facing::ALL.len() * WALK_COLUMNS as usize;
        let mut poses = Vec::with_capacity(walk_cells + self.registry.frame_count());

        for facing in Facing::ALL {
            for (col, bob) in walk_cycle() {
                poses.push((
                    Cell::new(facing.row(), col),
                    Pose {
                        facing,
                        phase: col,
                        motion: Motion::Walk { bob },
                    },
                ));
            }
        }

        for (start, schedule) in self.registry.spans() {
            for (col, keyframe) in (start..).zip(schedule.keyframes()) {
                poses.push((
                    Cell::new(GESTURE_ROW, col),
                    Pose {
                        facing: Facing::Front,
                        phase: keyframe.phase,
                        motion: Motion::Gesture {
                            dx: keyframe.dx,
                            dy: keyframe.dy,
                        },
                    },
                ));
            }
        }

        poses
    }

    /// Render every pose from `source` into a fresh sheet
    ///
    /// # Errors
    ///
    /// Returns an error if the layout addresses a cell outside the grid or
    /// the same cell twice
    pub fn assemble<S: FrameSource + ?Sized>(&self, source: &S) -> Result<Sheet> {
        let mut sheet = Sheet::blank();
        for (cell, pose) in self.poses() {
            sheet.place(cell, &source.render(&pose))?;
        }
        debug!(cells = sheet.populated_count(), "assembled sheet");
        Ok(sheet)
    }
}
