//! Idle/demo mode - the paddle plays itself
//!
//! Tracks the ball horizontally. The aim point drifts slowly across the
//! paddle so hits land off-centre and the ball picks up some spin.

use super::state::{GameState, PaddleCommand};

/// Pick a paddle direction that brings the aim point under the ball
pub fn steer(state: &GameState) -> PaddleCommand {
    let paddle = &state.paddle;

    // Oscillate within the middle 60% of the paddle
    let time_factor = state.frame as f32 * 0.01;
    let offset = (time_factor.sin() * 0.2 + (time_factor * 0.7).sin() * 0.1) * paddle.size.x;
    let aim = paddle.center_x() + offset;

    let error = state.ball.pos.x - aim;
    let dead_zone = paddle.speed / 2.0;

    if error < -dead_zone {
        PaddleCommand::Left
    } else if error > dead_zone {
        PaddleCommand::Right
    } else {
        PaddleCommand::Stop
    }
}
