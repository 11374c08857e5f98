//! Canvas 2D implementation of [`Surface`]

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::surface::{Skin, Surface};
use crate::config::GameConfig;

/// Ball and block images, loaded asynchronously by the browser
pub struct SkinAtlas {
    ball: Option<HtmlImageElement>,
    blocks: Vec<Option<HtmlImageElement>>,
}

impl SkinAtlas {
    /// Start loading every skin named in the config
    pub fn load(config: &GameConfig) -> Self {
        Self {
            ball: load_image(&config.ball_skin),
            blocks: config.palette.iter().map(|v| load_image(&v.skin)).collect(),
        }
    }

    /// The image for a skin, if it exists and has finished loading
    fn get(&self, skin: Skin) -> Option<&HtmlImageElement> {
        let image = match skin {
            Skin::Ball => self.ball.as_ref(),
            Skin::Block(i) => self.blocks.get(i).and_then(Option::as_ref),
        }?;
        (image.complete() && image.natural_width() > 0).then_some(image)
    }
}

fn load_image(src: &str) -> Option<HtmlImageElement> {
    match HtmlImageElement::new() {
        Ok(image) => {
            image.set_src(src);
            Some(image)
        }
        Err(e) => {
            log::warn!("Failed to create image for {}: {:?}", src, e);
            None
        }
    }
}

/// Draws onto an HTML canvas through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    atlas: SkinAtlas,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, atlas: SkinAtlas) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx, atlas })
    }
}

fn warn_on_err(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("Canvas {} failed: {:?}", op, e);
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, pos: Vec2, size: Vec2) {
        self.ctx
            .clear_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align("center");
        warn_on_err(
            "fill_text",
            self.ctx.fill_text(text, pos.x as f64, pos.y as f64),
        );
    }

    fn draw_image(&mut self, skin: Skin, pos: Vec2, size: Vec2) {
        // Missing or still-loading skins are skipped
        if let Some(image) = self.atlas.get(skin) {
            warn_on_err(
                "draw_image",
                self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    pos.x as f64,
                    pos.y as f64,
                    size.x as f64,
                    size.y as f64,
                ),
            );
        }
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        warn_on_err(
            "translate",
            self.ctx.translate(offset.x as f64, offset.y as f64),
        );
    }

    fn rotate(&mut self, radians: f32) {
        warn_on_err("rotate", self.ctx.rotate(radians as f64));
    }

    fn clip_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        warn_on_err(
            "arc",
            self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            ),
        );
        self.ctx.close_path();
        self.ctx.clip();
    }
}
