//! A surface that records draw calls instead of drawing

use glam::Vec2;

use super::surface::{Skin, Surface};

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { pos: Vec2, size: Vec2 },
    Rect { pos: Vec2, size: Vec2, color: String },
    Text { text: String, pos: Vec2, font: String, color: String },
    Image { skin: Skin, pos: Vec2, size: Vec2 },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    ClipCircle { center: Vec2, radius: f32 },
}

/// Headless [`Surface`] for tests and the native demo
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.calls.clear();
    }

    pub fn images(&self) -> impl Iterator<Item = (Skin, Vec2)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Image { skin, pos, .. } => Some((*skin, *pos)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, pos: Vec2, size: Vec2) {
        self.calls.push(DrawCall::Clear { pos, size });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.calls.push(DrawCall::Rect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            font: font.to_string(),
            color: color.to_string(),
        });
    }

    fn draw_image(&mut self, skin: Skin, pos: Vec2, size: Vec2) {
        self.calls.push(DrawCall::Image { skin, pos, size });
    }

    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.calls.push(DrawCall::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.calls.push(DrawCall::Rotate(radians));
    }

    fn clip_circle(&mut self, center: Vec2, radius: f32) {
        self.calls.push(DrawCall::ClipCircle { center, radius });
    }
}
