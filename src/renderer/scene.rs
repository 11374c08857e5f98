//! Scene drawing: ball, blocks, paddle and HUD

use glam::Vec2;

use super::surface::{Skin, Surface};
use crate::consts::*;
use crate::sim::{Ball, GameState};

const GAME_OVER_FONT: &str = "48px Arial";
const GAME_OVER_COLOR: &str = "#dd3300";

/// Draw one running frame (clears the surface first)
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear_rect(Vec2::ZERO, Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT));

    draw_ball(&state.ball, surface);

    for block in state.blocks.alive() {
        surface.draw_image(Skin::Block(block.variant), block.pos, block.size);
    }

    surface.fill_rect(state.paddle.pos, state.paddle.size, HUD_COLOR);

    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(SURFACE_WIDTH / 2.0, 30.0),
        HUD_FONT,
        HUD_COLOR,
    );
}

/// Ball skin rotated around its centre and masked to a circle
fn draw_ball<S: Surface + ?Sized>(ball: &Ball, surface: &mut S) {
    let r = ball.radius;
    surface.save();
    surface.translate(ball.pos);
    surface.rotate(ball.rotation.to_radians());
    surface.clip_circle(Vec2::ZERO, r);
    surface.draw_image(Skin::Ball, Vec2::splat(-r), Vec2::splat(r * 2.0));
    surface.restore();
}

/// Terminal banner drawn over the last frame
pub fn render_game_over<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let center = Vec2::new(SURFACE_WIDTH / 2.0, SURFACE_HEIGHT / 2.0);
    surface.fill_text(
        "GAME OVER",
        center,
        GAME_OVER_FONT,
        GAME_OVER_COLOR,
    );
    surface.fill_text(
        &format!("Final score: {}", state.score),
        center + Vec2::new(0.0, 40.0),
        HUD_FONT,
        HUD_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::recording::{DrawCall, RecordingSurface};
    use crate::sim::BlockStatus;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn started() -> GameState {
        let mut state = GameState::new(GameConfig::default());
        state.start(&mut Pcg32::seed_from_u64(11));
        state
    }

    #[test]
    fn test_render_order() {
        let state = started();
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        assert!(matches!(surface.calls[0], DrawCall::Clear { .. }));
        assert_eq!(surface.calls[1], DrawCall::Save);
        assert!(matches!(
            surface.calls.last(),
            Some(DrawCall::Text { text, .. }) if text == "Score: 0"
        ));

        let images: Vec<_> = surface.images().collect();
        assert_eq!(images.len(), 1 + 200);
        assert_eq!(images[0], (Skin::Ball, Vec2::splat(-15.0)));
    }

    #[test]
    fn test_destroyed_blocks_not_drawn() {
        let mut state = started();
        state.blocks.get_mut(0, 0).unwrap().status = BlockStatus::Destroyed;
        state.blocks.get_mut(3, 7).unwrap().status = BlockStatus::Destroyed;

        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);
        let blocks = surface
            .images()
            .filter(|(skin, _)| matches!(skin, Skin::Block(_)))
            .count();
        assert_eq!(blocks, 198);
    }

    #[test]
    fn test_ball_rotation_in_radians() {
        let mut state = started();
        state.ball.rotation = 180.0;
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);

        let rotation = surface.calls.iter().find_map(|c| match c {
            DrawCall::Rotate(r) => Some(*r),
            _ => None,
        });
        assert!((rotation.unwrap() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_game_over_banner() {
        let mut state = started();
        state.score = 17;
        let mut surface = RecordingSurface::new();
        render_game_over(&state, &mut surface);

        let texts: Vec<_> = surface.texts().collect();
        assert_eq!(texts, vec!["GAME OVER", "Final score: 17"]);
        assert!(!surface.calls.iter().any(|c| matches!(c, DrawCall::Clear { .. })));
    }

    #[test]
    fn test_text_anchored_on_centre_line() {
        let state = started();
        let mut surface = RecordingSurface::new();
        render(&state, &mut surface);
        render_game_over(&state, &mut surface);

        let anchors: Vec<_> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(
            anchors,
            vec![
                Vec2::new(400.0, 30.0),
                Vec2::new(400.0, 300.0),
                Vec2::new(400.0, 340.0),
            ]
        );
    }
}
