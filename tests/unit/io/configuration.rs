//! Tests for the sheet layout constants and configuration defaults

#[cfg(test)]
mod tests {
    use sheetsmith::io::configuration::{
        BACK_VIEW_BRIGHTNESS, DEFAULT_SKIN_PALETTE, FRAME_HEIGHT, FRAME_WIDTH, GESTURE_FRAMES,
        SHEET_COLUMNS, SHEET_HEIGHT, SHEET_ROWS, SHEET_WIDTH, SIDE_VIEW_WIDTH_RATIO, SKIN_PALETTES,
        WALK_COLUMNS,
    };

    // Tests the sheet is wide enough for the gesture row
    #[test]
    fn test_sheet_geometry() {
        assert_eq!((FRAME_WIDTH, FRAME_HEIGHT), (32, 48));
        assert_eq!(SHEET_COLUMNS, GESTURE_FRAMES.max(WALK_COLUMNS));
        assert_eq!(SHEET_ROWS, 4);
        assert_eq!((SHEET_WIDTH, SHEET_HEIGHT), (672, 192));
    }

    // Tests the default skin index points into the palette list
    #[test]
    fn test_default_skin_in_range() {
        assert!(DEFAULT_SKIN_PALETTE < SKIN_PALETTES.len());
    }

    // Tests the view tunable defaults pass their own validation ranges
    #[test]
    fn test_view_defaults_in_range() {
        assert!((0.0..=1.0).contains(&BACK_VIEW_BRIGHTNESS));
        assert!(SIDE_VIEW_WIDTH_RATIO > 0.0 && SIDE_VIEW_WIDTH_RATIO <= 1.0);
    }
}
