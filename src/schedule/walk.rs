//! Walk cycle shared by the three directional rows

use crate::io::configuration::WALK_COLUMNS;

/// Vertical bob per walk column: idle, down, neutral, up, neutral
pub const WALK_BOBS: [i32; WALK_COLUMNS as usize] = [0, 1, 0, -1, 0];

/// Iterate `(column, bob)` pairs of the walk cycle in column order
pub fn walk_cycle() -> impl Iterator<Item = (u32, i32)> {
    (0..WALK_COLUMNS).zip(WALK_BOBS)
}
