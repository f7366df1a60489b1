//! Tests for the walk cycle bob schedule

#[cfg(test)]
mod tests {
    use sheetsmith::io::configuration::WALK_COLUMNS;
    use sheetsmith::schedule::walk::{WALK_BOBS, walk_cycle};

    // Tests the cycle starts idle and returns to neutral
    #[test]
    fn test_walk_bobs() {
        assert_eq!(WALK_BOBS, [0, 1, 0, -1, 0]);
        assert_eq!(WALK_BOBS.iter().sum::<i32>(), 0);
    }

    // Tests the cycle pairs each column with its bob
    #[test]
    fn test_walk_cycle_bobs() {
        let cycle: Vec<(u32, i32)> = walk_cycle().collect();
        assert_eq!(cycle, [(0, 0), (1, 1), (2, 0), (3, -1), (4, 0)]);
    }

    // Tests the cycle visits every walk column once in order
    #[test]
    fn test_walk_cycle_columns() {
        let columns: Vec<u32> = walk_cycle().map(|(col, _)| col).collect();
        assert_eq!(columns, (0..WALK_COLUMNS).collect::<Vec<_>>());
    }
}
