use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Points awarded for each food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Smallest terminal the game agrees to start in.
pub const MIN_TERMINAL_WIDTH: u16 = 40;
pub const MIN_TERMINAL_HEIGHT: u16 = 10;

/// Initial snake length at reset.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

pub const GLYPH_SNAKE_HEAD: &str = "@";
pub const GLYPH_SNAKE_BODY: &str = "#";
pub const GLYPH_FOOD: &str = "*";

/// Plain ASCII frame around the play area.
pub const BORDER_ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

pub const CONTROLS_HINT: &str = "Controls: Arrow keys/WASD=Move, P=Pause, Q=Quit";

/// Colors handed to the renderer at construction.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border: Color,
    pub score: Color,
    pub hint: Color,
    pub banner: Color,
}

/// Green snake, red food, yellow score on a dark terminal.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    border: Color::White,
    score: Color::Yellow,
    hint: Color::Gray,
    banner: Color::Yellow,
};

/// Terminal default colors only.
pub const THEME_MONOCHROME: Theme = Theme {
    name: "Monochrome",
    snake_head: Color::Reset,
    snake_body: Color::Reset,
    food: Color::Reset,
    border: Color::Reset,
    score: Color::Reset,
    hint: Color::Reset,
    banner: Color::Reset,
};

/// Session settings resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub theme: &'static Theme,
}

impl GameConfig {
    /// Builds a config, clamping the tick interval to `MIN_TICK_INTERVAL_MS`.
    #[must_use]
    pub fn new(tick_interval_ms: u64, seed: Option<u64>, monochrome: bool) -> Self {
        Self {
            tick_interval: Duration::from_millis(tick_interval_ms.max(MIN_TICK_INTERVAL_MS)),
            seed,
            theme: if monochrome {
                &THEME_MONOCHROME
            } else {
                &THEME_CLASSIC
            },
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL_MS, None, false)
    }
}
