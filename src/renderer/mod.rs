//! 2D rendering module
//!
//! The scene is drawn through the [`Surface`] trait. The browser build
//! implements it over a canvas 2D context; tests and the native demo use a
//! [`RecordingSurface`].

pub mod recording;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use recording::{DrawCall, RecordingSurface};
pub use scene::{render, render_game_over};
pub use surface::{Skin, Surface};

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, SkinAtlas};
