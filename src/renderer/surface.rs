//! Drawing surface abstraction

use glam::Vec2;

/// Opaque handle to an image resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skin {
    Ball,
    /// Index into the block palette
    Block(usize),
}

/// Primitive 2D drawing operations
///
/// Transforms (`translate`, `rotate`) and clips accumulate until the matching
/// `restore`. Drawing an image that has not loaded is a silent no-op.
pub trait Surface {
    fn clear_rect(&mut self, pos: Vec2, size: Vec2);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    /// Draw `text` horizontally centred on `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
    fn draw_image(&mut self, skin: Skin, pos: Vec2, size: Vec2);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    /// Rotate by `radians` around the current origin
    fn rotate(&mut self, radians: f32);
    /// Clip subsequent drawing to a circle
    fn clip_circle(&mut self, center: Vec2, radius: f32);
}
