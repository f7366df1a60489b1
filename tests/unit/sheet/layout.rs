//! Tests for facings and cell addressing

#[cfg(test)]
mod tests {
    use sheetsmith::io::configuration::{SHEET_COLUMNS, SHEET_ROWS};
    use sheetsmith::sheet::layout::{Cell, Facing, GESTURE_ROW};

    // Tests facings occupy the first three rows in order
    #[test]
    fn test_facing_rows() {
        let rows: Vec<u32> = Facing::ALL.iter().map(|facing| facing.row()).collect();
        assert_eq!(rows, [0, 1, 2]);
        assert!(Facing::ALL.iter().all(|facing| facing.row() != GESTURE_ROW));
        assert_eq!(Facing::Right.to_string(), "right");
    }

    // Tests cell origins are frame multiples
    #[test]
    fn test_cell_origin() {
        assert_eq!(Cell::new(0, 0).origin(), (0, 0));
        assert_eq!(Cell::new(2, 3).origin(), (96, 96));
        assert_eq!(Cell::new(GESTURE_ROW, 20).origin(), (640, 144));
    }

    // Tests grid membership at the edges
    #[test]
    fn test_in_grid() {
        assert!(Cell::new(SHEET_ROWS - 1, SHEET_COLUMNS - 1).in_grid());
        assert!(!Cell::new(SHEET_ROWS, 0).in_grid());
        assert!(!Cell::new(0, SHEET_COLUMNS).in_grid());
    }

    // Tests every grid cell is enumerated once with matching indices
    #[test]
    fn test_all_cells_indexed() {
        let cells: Vec<Cell> = Cell::all().collect();
        assert_eq!(cells.len(), (SHEET_ROWS * SHEET_COLUMNS) as usize);
        for (position, cell) in cells.iter().enumerate() {
            assert_eq!(cell.index(), position);
        }
    }
}
