//! One frame of the game loop: draw, then simulate
//!
//! The host calls [`tick`] from its frame callback and reschedules only while
//! it returns [`Frame::Continue`].

use crate::renderer::{Surface, render, render_game_over};
use crate::sim::{Frame, GameState, GameStatus, step};

/// Run one frame against a drawing surface
///
/// - Running: draw the scene, then step the simulation
/// - Paused: draw nothing, change nothing, keep going
/// - Over: draw the game-over banner and halt
pub fn tick<S: Surface + ?Sized>(state: &mut GameState, surface: &mut S) -> Frame {
    match state.status {
        GameStatus::Over => {
            render_game_over(state, surface);
            Frame::Halt
        }
        GameStatus::Paused => Frame::Continue,
        GameStatus::Running => {
            render(state, surface);
            step(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::{DrawCall, RecordingSurface};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn started() -> GameState {
        let mut state = GameState::new(GameConfig::default());
        state.start(&mut Pcg32::seed_from_u64(3));
        state
    }

    #[test]
    fn test_running_frame_draws_then_moves() {
        let mut state = started();
        let mut surface = RecordingSurface::new();

        assert_eq!(tick(&mut state, &mut surface), Frame::Continue);
        // Drawn at the pre-move position
        assert!(
            surface
                .calls
                .contains(&DrawCall::Translate(Vec2::new(400.0, 500.0)))
        );
        assert_eq!(state.ball.pos, Vec2::new(404.0, 496.0));
    }

    #[test]
    fn test_paused_frame_is_silent() {
        let mut state = started();
        state.toggle_pause();
        let mut surface = RecordingSurface::new();
        let ball = state.ball.clone();

        for _ in 0..20 {
            assert_eq!(tick(&mut state, &mut surface), Frame::Continue);
        }
        assert!(surface.calls.is_empty());
        assert_eq!(state.ball, ball);
    }

    #[test]
    fn test_lost_ball_halts_on_next_frame() {
        let mut state = started();
        state.paddle.pos.x = 0.0;
        state.ball.pos = Vec2::new(700.0, 590.0);
        state.ball.vel = Vec2::new(0.0, 4.0);
        let mut surface = RecordingSurface::new();

        assert_eq!(tick(&mut state, &mut surface), Frame::Continue);
        assert_eq!(state.status, GameStatus::Over);

        surface.reset();
        assert_eq!(tick(&mut state, &mut surface), Frame::Halt);
        assert!(surface.texts().any(|t| t == "GAME OVER"));
    }
}
