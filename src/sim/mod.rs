//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, velocities in pixels per frame
//! - Randomness only through an injected RNG (grid construction)
//! - Stable iteration order (row-major grid)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    WallContact, ball_missed, ball_overlaps_rect, paddle_hit, resolve_collisions, spin_for_hit,
    wall_contact,
};
pub use state::{
    Ball, Block, BlockGrid, BlockStatus, GameEvent, GameState, GameStatus, Paddle, PaddleCommand,
};
pub use tick::{Frame, step};
