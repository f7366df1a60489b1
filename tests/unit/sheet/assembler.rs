//! Tests for sheet cell bookkeeping and pose layout

#[cfg(test)]
mod tests {
    use image::Rgba;
    use sheetsmith::SpriteError;
    use sheetsmith::frame::Frame;
    use sheetsmith::io::configuration::{
        FRAME_HEIGHT, FRAME_WIDTH, GESTURE_FRAMES, SHEET_COLUMNS, SHEET_HEIGHT, SHEET_WIDTH,
        WALK_COLUMNS,
    };
    use sheetsmith::schedule::ScheduleRegistry;
    use sheetsmith::sheet::layout::GESTURE_ROW;
    use sheetsmith::sheet::{Cell, Facing, FrameSource, Motion, Pose, Sheet, SheetAssembler};
    use std::cell::RefCell;

    // Solid frame whose color encodes the pose, recording every request
    struct RecordingSource {
        seen: RefCell<Vec<Pose>>,
    }

    impl RecordingSource {
        fn new() -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl FrameSource for RecordingSource {
        fn render(&self, pose: &Pose) -> Frame {
            self.seen.borrow_mut().push(*pose);
            let (dx, dy) = pose.offset();
            let color = Rgba([
                pose.facing.row() as u8 * 60 + 10,
                (dx + 10) as u8,
                (dy + 10) as u8,
                255,
            ]);
            Frame::from_image(image::RgbaImage::from_pixel(
                FRAME_WIDTH,
                FRAME_HEIGHT,
                color,
            ))
            .expect("Frame sized buffer rejected")
        }
    }

    fn solid_frame() -> Frame {
        Frame::from_image(image::RgbaImage::from_pixel(
            FRAME_WIDTH,
            FRAME_HEIGHT,
            Rgba([1, 2, 3, 255]),
        ))
        .expect("Frame sized buffer rejected")
    }

    // Tests blank sheets have the fixed size and no written cells
    #[test]
    fn test_blank_sheet() {
        let sheet = Sheet::blank();
        assert_eq!(sheet.dimensions(), (SHEET_WIDTH, SHEET_HEIGHT));
        assert_eq!(sheet.populated_count(), 0);
        assert!(Cell::all().all(|cell| sheet.is_cell_transparent(cell)));
    }

    // Tests placing a frame writes exactly its cell
    #[test]
    fn test_place_writes_cell() {
        let mut sheet = Sheet::blank();
        let cell = Cell::new(2, 4);
        sheet.place(cell, &solid_frame()).expect("Place failed");

        assert!(sheet.is_populated(cell));
        assert_eq!(sheet.frame_at(cell), Some(solid_frame()));
        assert!(sheet.is_cell_transparent(Cell::new(2, 5)));
        assert_eq!(sheet.populated_columns(2), [4]);
    }

    // Tests a second write to the same cell is a conflict
    #[test]
    fn test_place_twice_conflicts() {
        let mut sheet = Sheet::blank();
        let cell = Cell::new(1, 1);
        sheet.place(cell, &solid_frame()).expect("Place failed");

        assert!(matches!(
            sheet.place(cell, &Frame::blank()),
            Err(SpriteError::CellConflict { row: 1, col: 1 })
        ));
        assert_eq!(sheet.frame_at(cell), Some(solid_frame()));
    }

    // Tests cells outside the grid are rejected
    #[test]
    fn test_place_out_of_bounds() {
        let mut sheet = Sheet::blank();
        assert!(matches!(
            sheet.place(Cell::new(4, 0), &solid_frame()),
            Err(SpriteError::CellOutOfBounds { row: 4, col: 0 })
        ));
        assert!(matches!(
            sheet.place(Cell::new(0, SHEET_COLUMNS), &solid_frame()),
            Err(SpriteError::CellOutOfBounds { .. })
        ));
        assert!(sheet.frame_at(Cell::new(4, 0)).is_none());
        assert_eq!(sheet.populated_count(), 0);
    }

    // Tests the layout covers walk rows then the full gesture row
    #[test]
    fn test_pose_layout() {
        let registry = ScheduleRegistry::canonical().expect("Canonical registry rejected");
        let poses = SheetAssembler::new(&registry).poses();

        assert_eq!(
            poses.len(),
            (3 * WALK_COLUMNS + GESTURE_FRAMES) as usize
        );

        for (cell, pose) in &poses {
            if cell.row == GESTURE_ROW {
                assert_eq!(pose.facing, Facing::Front);
                assert!(matches!(pose.motion, Motion::Gesture { .. }));
            } else {
                assert_eq!(cell.row, pose.facing.row());
                assert!(cell.col < WALK_COLUMNS);
                assert_eq!(pose.phase, cell.col);
                assert!(matches!(pose.motion, Motion::Walk { .. }));
            }
        }

        let idle = poses
            .iter()
            .find(|(cell, _)| *cell == Cell::new(1, 0))
            .expect("Back idle missing");
        assert_eq!(idle.1.offset(), (0, 0));
    }

    // Tests jump frames carry their keyframe offsets
    #[test]
    fn test_gesture_poses_follow_registry() {
        let registry = ScheduleRegistry::canonical().expect("Canonical registry rejected");
        let poses = SheetAssembler::new(&registry).poses();

        let jump: Vec<(i32, i32)> = poses
            .iter()
            .filter(|(cell, _)| cell.row == GESTURE_ROW && cell.col < 4)
            .map(|(_, pose)| pose.offset())
            .collect();
        assert_eq!(jump, [(0, 0), (0, -2), (0, -3), (0, -1)]);
    }

    // Tests assembly renders each pose once and fills only laid out cells
    #[test]
    fn test_assemble_populates_layout() {
        let registry = ScheduleRegistry::canonical().expect("Canonical registry rejected");
        let assembler = SheetAssembler::new(&registry);
        let source = RecordingSource::new();

        let sheet = assembler.assemble(&source).expect("Assembly failed");

        assert_eq!(source.seen.borrow().len(), assembler.poses().len());
        for row in 0..3 {
            assert_eq!(sheet.populated_columns(row), (0..WALK_COLUMNS).collect::<Vec<_>>());
            for col in WALK_COLUMNS..SHEET_COLUMNS {
                assert!(sheet.is_cell_transparent(Cell::new(row, col)));
            }
        }
        assert_eq!(
            sheet.populated_columns(GESTURE_ROW),
            (0..GESTURE_FRAMES).collect::<Vec<_>>()
        );
    }

    // Tests each cell holds the frame rendered for its pose
    #[test]
    fn test_assemble_places_rendered_frames() {
        let registry = ScheduleRegistry::canonical().expect("Canonical registry rejected");
        let assembler = SheetAssembler::new(&registry);
        let source = RecordingSource::new();
        let sheet = assembler.assemble(&source).expect("Assembly failed");

        for (cell, pose) in assembler.poses() {
            let expected = source.render(&pose);
            assert_eq!(sheet.frame_at(cell), Some(expected), "cell {cell:?}");
        }
    }

    // Tests assembly through a trait object
    #[test]
    fn test_assemble_dyn_source() {
        let registry = ScheduleRegistry::canonical().expect("Canonical registry rejected");
        let source: Box<dyn FrameSource> = Box::new(RecordingSource::new());
        let sheet = SheetAssembler::new(&registry)
            .assemble(source.as_ref())
            .expect("Assembly failed");
        assert_eq!(
            sheet.populated_count(),
            (3 * WALK_COLUMNS + GESTURE_FRAMES) as usize
        );
    }
}
