use std::time::Duration;

use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Number of tiles along each side of the board.
pub const TILE_COUNT: u16 = 20;

/// The fixed square board every session plays on.
pub const BOARD: GridSize = GridSize {
    width: TILE_COUNT,
    height: TILE_COUNT,
};

/// Edge length of one tile in canvas pixels.
pub const TILE_SIZE_PX: f64 = 20.0;

/// Edge length of the whole canvas in pixels.
pub const CANVAS_SIZE_PX: f64 = TILE_SIZE_PX * TILE_COUNT as f64;

/// Column the snake head starts on after every reset.
pub const START_X: i32 = 10;

/// Row the snake head starts on after every reset.
pub const START_Y: i32 = 10;

/// Simulation ticks per second.
pub const TICKS_PER_SECOND: u32 = 8;

/// Time between two simulation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

/// Sleep between two drawn frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Timeout for one input poll inside a frame.
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(1);

/// Each body segment is drawn at this fraction of the previous one.
pub const SEGMENT_SCALE: f64 = 0.9;

/// Rejection-sampling attempts before food placement scans for free cells.
pub const FOOD_SAMPLE_ATTEMPTS: usize = 256;

/// Colors applied to every drawn element.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub snake_body: Color,
    pub snake_stroke: Color,
    pub snake_pattern: Color,
    pub eye: Color,
    pub pupil: Color,
    pub food: Color,
    /// Half-transparent white over the food color, pre-blended.
    pub food_highlight: Color,
    pub overlay_text: Color,
    pub hud_text: Color,
    pub hud_muted: Color,
}

/// The only palette: green snake on a brown field.
pub const PALETTE: Palette = Palette {
    background: Color::Rgb(0xA5, 0x2A, 0x2A),
    snake_body: Color::Rgb(0x4C, 0xAF, 0x50),
    snake_stroke: Color::Rgb(0x38, 0x8E, 0x3C),
    snake_pattern: Color::Rgb(0x81, 0xC7, 0x84),
    eye: Color::Rgb(0xFF, 0xFF, 0xFF),
    pupil: Color::Rgb(0x00, 0x00, 0x00),
    food: Color::Rgb(0xFF, 0x00, 0x00),
    food_highlight: Color::Rgb(0xFF, 0x80, 0x80),
    overlay_text: Color::White,
    hud_text: Color::White,
    hud_muted: Color::DarkGray,
};
