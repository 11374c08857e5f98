//! Face Breakout - a paddle, a ball and a wall of faces
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring)
//! - `game_loop`: Frame driver tying the simulation to a drawing surface
//! - `renderer`: 2D drawing surface abstraction and scene drawing
//! - `platform`: Browser input mapping
//! - `config`: Data-driven game tuning
//! - `ui`: Score panel and button labels

pub mod config;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use config::{BlockVariant, ConfigError, GameConfig};
pub use game_loop::tick;

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions (fixed)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Per-frame speed on each axis at spawn
    pub const BALL_SPEED: f32 = 4.0;
    /// Ball spawns 100px above the bottom edge, horizontally centred
    pub const BALL_SPAWN_X: f32 = SURFACE_WIDTH / 2.0;
    pub const BALL_SPAWN_Y: f32 = SURFACE_HEIGHT - 100.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 10.0;
    /// Paddle top edge sits 30px above the bottom
    pub const PADDLE_Y: f32 = SURFACE_HEIGHT - 30.0;

    /// Spin imparted by a paddle hit at the very edge is +/- MAX_SPIN / 2
    pub const MAX_SPIN: f32 = 10.0;

    /// Block grid defaults
    pub const BLOCK_ROWS: usize = 10;
    pub const BLOCK_COLUMNS: usize = 20;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const BLOCK_OFFSET_TOP: f32 = 40.0;
    /// Upper bound on `rows * columns` accepted from a config
    pub const MAX_GRID_CELLS: usize = 4096;

    /// HUD styling
    pub const HUD_COLOR: &str = "#0095dd";
    pub const HUD_FONT: &str = "24px Arial";
}
