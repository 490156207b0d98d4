use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Board width in pixels.
pub const WIDTH: u16 = 600;

/// Board height in pixels.
pub const HEIGHT: u16 = 600;

/// Edge length of one grid cell in pixels.
pub const UNIT_SIZE: u16 = 25;

/// Maximum number of segments the board can hold.
pub const GAME_UNITS: usize =
    (WIDTH as usize * HEIGHT as usize) / (UNIT_SIZE as usize * UNIT_SIZE as usize);

/// Segment count of a freshly started snake.
pub const INITIAL_BODY_PARTS: usize = 6;

/// Fixed period between two game ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Board geometry passed through the game as a named type.
///
/// Positions are measured in pixels and always aligned to `unit_size`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Board {
    pub width: u16,
    pub height: u16,
    pub unit_size: u16,
}

impl Board {
    /// The fixed board every game is played on.
    pub const STANDARD: Self = Self {
        width: WIDTH,
        height: HEIGHT,
        unit_size: UNIT_SIZE,
    };

    /// Number of grid cells along the x axis.
    #[must_use]
    pub fn columns(self) -> u16 {
        self.width / self.unit_size
    }

    /// Number of grid cells along the y axis.
    #[must_use]
    pub fn rows(self) -> u16 {
        self.height / self.unit_size
    }

    /// Returns the total number of cells, which caps the snake length.
    #[must_use]
    pub fn game_units(self) -> usize {
        usize::from(self.columns()) * usize::from(self.rows())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Colors applied to every drawn element.
#[derive(Debug)]
pub struct Theme {
    pub food: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub score: Color,
    pub game_over_title: Color,
    pub game_over_text: Color,
}

/// Green snake and red apple on black.
pub const THEME_CLASSIC: Theme = Theme {
    food: Color::Red,
    snake_head: Color::Green,
    snake_body: Color::Rgb(45, 180, 0),
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    score: Color::White,
    game_over_title: Color::Red,
    game_over_text: Color::White,
};

/// Terminal columns drawn per grid cell so cells look square.
pub const CELL_COLUMNS: u16 = 2;

/// Glyph pair for one snake segment.
pub const GLYPH_SEGMENT: &str = "██";

/// Glyph pair for the apple.
pub const GLYPH_FOOD: &str = "()";

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};
