//! Per-frame simulation step
//!
//! Advances the game by exactly one frame. Velocities are per frame, so there
//! is no timestep parameter.

use super::collision::resolve_collisions;
use super::state::{GameState, GameStatus};

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Schedule another frame
    Continue,
    /// Stop scheduling; the game is over
    Halt,
}

/// Advance the simulation by one frame
///
/// Running: collisions, then ball movement, then paddle movement.
/// Paused: nothing changes, keep polling. Over: nothing changes, halt.
pub fn step(state: &mut GameState) -> Frame {
    match state.status {
        GameStatus::Over => return Frame::Halt,
        GameStatus::Paused => return Frame::Continue,
        GameStatus::Running => {}
    }

    resolve_collisions(state);
    state.ball.advance();
    state.paddle.advance();
    state.frame += 1;

    // The frame that loses the ball still completes; the next one halts
    Frame::Continue
}
