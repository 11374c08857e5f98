//! Game tuning
//!
//! Defaults reproduce the classic layout. A JSON override can be embedded in
//! the page (`#game-config`) or passed as a file to the native binary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON could not be parsed
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config parsed but describes an unplayable game
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One entry of the block palette: a skin and the points it is worth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockVariant {
    /// Image path for the block skin
    pub skin: String,
    /// Points awarded when destroyed
    pub points: u32,
}

/// Data-driven game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Grid ===
    pub rows: usize,
    pub columns: usize,
    pub block_height: f32,
    pub offset_top: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_skin: String,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub max_spin: f32,

    /// Block variants, chosen uniformly per cell
    pub palette: Vec<BlockVariant>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BLOCK_ROWS,
            columns: BLOCK_COLUMNS,
            block_height: BLOCK_HEIGHT,
            offset_top: BLOCK_OFFSET_TOP,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_skin: "face1.jpg".to_string(),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            max_spin: MAX_SPIN,

            palette: (2..=6)
                .zip(1..=5)
                .map(|(face, points)| BlockVariant {
                    skin: format!("face{face}.jpg"),
                    points,
                })
                .collect(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject configs that cannot produce a playable grid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.columns
            )));
        }
        match self.rows.checked_mul(self.columns) {
            Some(cells) if cells <= MAX_GRID_CELLS => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "grid {}x{} exceeds {} cells",
                    self.rows, self.columns, MAX_GRID_CELLS
                )));
            }
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Invalid("palette is empty".to_string()));
        }
        if let Some(v) = self.palette.iter().find(|v| v.points == 0) {
            return Err(ConfigError::Invalid(format!(
                "block variant {} is worth no points",
                v.skin
            )));
        }
        let positive = [
            ("block_height", self.block_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.paddle_width > SURFACE_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "paddle_width {} exceeds surface width {}",
                self.paddle_width, SURFACE_WIDTH
            )));
        }
        Ok(())
    }

    /// Width of a single block so the columns span the whole surface
    pub fn block_width(&self) -> f32 {
        SURFACE_WIDTH / self.columns as f32
    }
}
