//! Collision detection and response
//!
//! Everything is an axis-aligned bounding-box test: the ball is treated as
//! the square that encloses it. Responses are single-axis sign flips.

use glam::Vec2;

use super::state::{Ball, BlockStatus, GameEvent, GameState, GameStatus, Paddle};
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Which surface edges the ball is touching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right edge
    pub side: bool,
    /// Top edge
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Strict overlap between the ball's bounding box and a rectangle
#[inline]
pub fn ball_overlaps_rect(ball: &Ball, pos: Vec2, size: Vec2) -> bool {
    ball.right() > pos.x
        && ball.left() < pos.x + size.x
        && ball.bottom() > pos.y
        && ball.top() < pos.y + size.y
}

/// Paddle hit test
///
/// The ball hits when its centre lies over the paddle's span and its bottom
/// edge has reached the paddle's top edge. Returns the normalized hit
/// position in `[0, 1]` (0 = left edge, 1 = right edge).
pub fn paddle_hit(ball: &Ball, paddle: &Paddle) -> Option<f32> {
    let left = paddle.pos.x;
    let right = paddle.pos.x + paddle.size.x;

    if ball.pos.x >= left && ball.pos.x <= right && ball.bottom() >= paddle.pos.y {
        Some((ball.pos.x - left) / paddle.size.x)
    } else {
        None
    }
}

/// Spin from a paddle hit: zero at the centre, `-max_spin / 2` at the left
/// edge, `+max_spin / 2` at the right
#[inline]
pub fn spin_for_hit(hit_pos: f32, max_spin: f32) -> f32 {
    max_spin * (hit_pos - 0.5)
}

/// Ball fell past the bottom of the surface
#[inline]
pub fn ball_missed(ball: &Ball) -> bool {
    ball.bottom() > SURFACE_HEIGHT
}

pub fn wall_contact(ball: &Ball) -> WallContact {
    WallContact {
        side: ball.right() > SURFACE_WIDTH || ball.left() < 0.0,
        top: ball.top() < 0.0,
    }
}

/// Run all collision checks for one frame, in order: blocks, paddle (or
/// miss), walls. Each check flips velocity independently of the others.
pub fn resolve_collisions(state: &mut GameState) {
    let GameState {
        ball,
        paddle,
        blocks,
        score,
        status,
        events,
        config,
        ..
    } = state;

    // Blocks
    for block in blocks.iter_mut() {
        if block.is_alive() && ball_overlaps_rect(ball, block.pos, block.size) {
            ball.vel.y = -ball.vel.y;
            block.status = BlockStatus::Destroyed;
            *score += u64::from(block.points);
            log::debug!(
                "Block ({}, {}) destroyed for {} points",
                block.row,
                block.column,
                block.points
            );
            events.push(GameEvent::BlockDestroyed {
                row: block.row,
                column: block.column,
                points: block.points,
            });
        }
    }

    // Paddle, or the ball is lost
    if let Some(hit_pos) = paddle_hit(ball, paddle) {
        ball.vel.y = -ball.vel.y;
        ball.rotation_speed = spin_for_hit(hit_pos, config.max_spin);
        log::debug!("Paddle hit at {:.2}, spin {:.2}", hit_pos, ball.rotation_speed);
        events.push(GameEvent::PaddleHit {
            spin: ball.rotation_speed,
        });
    } else if ball_missed(ball) && *status != GameStatus::Over {
        *status = GameStatus::Over;
        log::info!("Game over with score {}", score);
        events.push(GameEvent::GameOver { score: *score });
    }

    // Walls
    let contact = wall_contact(ball);
    if contact.side {
        ball.vel.x = -ball.vel.x;
    }
    if contact.top {
        ball.vel.y = -ball.vel.y;
    }
    if contact.any() {
        events.push(GameEvent::WallBounce);
    }
}
