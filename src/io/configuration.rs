//! Sheet layout constants and runtime configuration defaults

// Frame grid
/// Width of a single frame cell in pixels
pub const FRAME_WIDTH: u32 = 32;
/// Height of a single frame cell in pixels
pub const FRAME_HEIGHT: u32 = 48;

/// Idle column plus four walk-cycle columns per directional row
pub const WALK_COLUMNS: u32 = 5;
/// Total gesture frames laid out along the gesture row
pub const GESTURE_FRAMES: u32 = 21;

/// Number of rows in every sheet
pub const SHEET_ROWS: u32 = 4;
/// Number of columns in every sheet
pub const SHEET_COLUMNS: u32 = if WALK_COLUMNS > GESTURE_FRAMES {
    WALK_COLUMNS
} else {
    GESTURE_FRAMES
};

/// Sheet width in pixels (672)
pub const SHEET_WIDTH: u32 = SHEET_COLUMNS * FRAME_WIDTH;
/// Sheet height in pixels (192)
pub const SHEET_HEIGHT: u32 = SHEET_ROWS * FRAME_HEIGHT;

// Photo adapter
/// Margin kept around a photo cutout when fitting it into a frame
pub const FIT_PADDING: u32 = 1;

/// Brightness multiplier applied when deriving the back view
pub const BACK_VIEW_BRIGHTNESS: f32 = 0.35;
/// Red channel shift applied after darkening
pub const BACK_VIEW_RED_SHIFT: i16 = -20;
/// Green channel shift applied after darkening
pub const BACK_VIEW_GREEN_SHIFT: i16 = -10;
/// Blue channel shift applied after darkening
pub const BACK_VIEW_BLUE_SHIFT: i16 = 15;

/// Horizontal compression ratio used for the side view
pub const SIDE_VIEW_WIDTH_RATIO: f32 = 0.8;
/// Rightward nudge of the compressed side view in pixels
pub const SIDE_VIEW_X_NUDGE: i64 = 1;

// Procedural adapter
/// Reference skin tones for the drawn body layer
pub const SKIN_PALETTES: [[u8; 3]; 4] = [
    [0xFF, 0xF0, 0xDB],
    [0xFF, 0xDB, 0xAC],
    [0xD4, 0xA5, 0x74],
    [0xA6, 0x7C, 0x52],
];
/// Palette index used when none is requested
pub const DEFAULT_SKIN_PALETTE: usize = 1;

// Output settings
/// Asset root that layer paths are resolved against
pub const DEFAULT_ASSET_ROOT: &str = "assets/sprites/character";
/// Extension of every written sheet
pub const SHEET_EXTENSION: &str = "png";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
