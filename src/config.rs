use std::ops::Range;

pub struct Config;

impl Config {
    pub const LIVE_CHAR: char = 'O';
    pub const DEAD_CHAR: char = '.';

    /// Bounding boxes taller than this are not rendered as a whole.
    pub const MAX_RENDER_ROWS: i64 = 50;
    /// Bounding boxes wider than this are not rendered as a whole.
    pub const MAX_RENDER_COLUMNS: i64 = 100;
    /// Window used instead of a too tall bounding box.
    pub const CLAMPED_ROWS: Range<i64> = -25..26;
    /// Window used instead of a too wide bounding box.
    pub const CLAMPED_COLUMNS: Range<i64> = -50..51;

    /// Characters of the text pattern format that denote a dead cell.
    pub const DEAD_GLYPHS: [char; 2] = ['_', '.'];

    pub const RECORD_VERSION: u32 = 1;
}
