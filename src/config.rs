use std::fs;
use std::path::Path;

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::{GridGeometry, GridSize};
use crate::snake::initial_head;

pub const DEFAULT_GRID_WIDTH: u16 = 20;
pub const DEFAULT_GRID_HEIGHT: u16 = 20;
pub const DEFAULT_CELL_SIZE_PX: u16 = 20;
/// Frames per grid step.
pub const DEFAULT_MOVE_DELAY_FRAMES: u32 = 8;
pub const DEFAULT_INITIAL_LENGTH: u16 = 3;
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Construction-time settings. Immutable once an engine is built from them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub cell_size_px: u16,
    pub move_delay_frames: u32,
    pub initial_length: u16,
    /// When false, eating scores and moves the fruit but the body keeps its
    /// length.
    pub grows_on_eat: bool,
    pub frame_interval_ms: u64,
    /// Fruit placement seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            move_delay_frames: DEFAULT_MOVE_DELAY_FRAMES,
            initial_length: DEFAULT_INITIAL_LENGTH,
            grows_on_eat: true,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default configuration on a custom grid.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Self::default()
        }
    }

    /// Reads a JSON config file; missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.bounds(), self.cell_size_px)
    }

    /// Checks every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.move_delay_frames == 0 {
            return Err(ConfigError::ZeroMoveDelay);
        }
        if self.cell_size_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }

        let head_x = self.grid_width / 2;
        if i32::from(self.initial_length) > initial_head(self.bounds()).x + 1 {
            return Err(ConfigError::InitialLengthTooLong {
                length: self.initial_length,
                head_x,
            });
        }

        Ok(())
    }
}

/// Colors for the terminal frontend.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub fruit: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
}

pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    fruit: Color::Red,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Red,
};

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

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FRUIT: &str = "●";
