//! Platform abstraction layer
//!
//! Handles browser input: keyboard, on-screen buttons and touch drag.

pub mod input;

pub use input::{DirectionButton, InputAction};
