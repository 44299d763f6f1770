//! Runtime configuration read from `BLOCKFALL_*` environment variables.

use std::env;

use crate::{BOARD_HEIGHT, BOARD_WIDTH, FADE_STEP, FAST_DROP_PERIOD_MS, GRAVITY_PERIOD_MS, TILE_WIDTH};

/// Smallest board edge that still fits the 4x4 shape layouts.
pub const MIN_BOARD_EDGE: usize = 4;

/// Largest terminal extent a board may need (border and hint line included).
pub const MAX_FRAME_EDGE: usize = u16::MAX as usize;

/// Game and frontend settings.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    /// Terminal columns per board tile
    pub tile_width: u16,
    pub gravity_ms: u64,
    pub fast_drop_ms: u64,
    pub fade_step: f32,
    /// RNG seed; `None` lets the host pick one
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: BOARD_WIDTH,
            rows: BOARD_HEIGHT,
            tile_width: TILE_WIDTH,
            gravity_ms: GRAVITY_PERIOD_MS,
            fast_drop_ms: FAST_DROP_PERIOD_MS,
            fade_step: FADE_STEP,
            seed: None,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_path = env::var("BLOCKFALL_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let log_level = env::var("BLOCKFALL_LOG_LEVEL")
            .ok()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_level);

        Self {
            columns: parse_var("BLOCKFALL_COLUMNS").unwrap_or(defaults.columns),
            rows: parse_var("BLOCKFALL_ROWS").unwrap_or(defaults.rows),
            tile_width: parse_var("BLOCKFALL_TILE_WIDTH").unwrap_or(defaults.tile_width),
            gravity_ms: parse_var("BLOCKFALL_GRAVITY_MS").unwrap_or(defaults.gravity_ms),
            fast_drop_ms: parse_var("BLOCKFALL_FAST_DROP_MS").unwrap_or(defaults.fast_drop_ms),
            fade_step: defaults.fade_step,
            seed: parse_var("BLOCKFALL_SEED"),
            log_path,
            log_level,
        }
    }

    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_BOARD_EDGE || self.rows < MIN_BOARD_EDGE {
            return Err(ConfigError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.tile_width == 0 {
            return Err(ConfigError::ZeroTileWidth);
        }
        let frame_width = self.columns.saturating_mul(self.tile_width as usize).saturating_add(2);
        if frame_width > MAX_FRAME_EDGE || self.rows.saturating_add(3) > MAX_FRAME_EDGE {
            return Err(ConfigError::BoardTooLarge {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.gravity_ms == 0 || self.fast_drop_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if !(self.fade_step > 0.0 && self.fade_step <= 1.0) {
            return Err(ConfigError::FadeStep(self.fade_step));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

/// Invalid configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("board {columns}x{rows} is too small (minimum {min}x{min})", min = MIN_BOARD_EDGE)]
    BoardTooSmall { columns: usize, rows: usize },
    #[error("board {columns}x{rows} does not fit in a terminal frame")]
    BoardTooLarge { columns: usize, rows: usize },
    #[error("tile width must be at least 1")]
    ZeroTileWidth,
    #[error("gravity and drop periods must be non-zero")]
    ZeroPeriod,
    #[error("fade step {0} is outside (0, 1]")]
    FadeStep(f32),
}
