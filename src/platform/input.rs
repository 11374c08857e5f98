//! Browser input mapping
//!
//! Translates raw key names, button presses and touch coordinates into game
//! commands. The wasm entry point wires DOM listeners to these functions.

use crate::sim::PaddleCommand;

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Paddle(PaddleCommand),
    /// Toggle idle/demo mode
    ToggleAutopilot,
}

/// On-screen direction buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionButton {
    Left,
    Right,
}

/// Map a `keydown` key name
pub fn key_down(key: &str) -> Option<InputAction> {
    match key {
        "ArrowLeft" => Some(InputAction::Paddle(PaddleCommand::Left)),
        "ArrowRight" => Some(InputAction::Paddle(PaddleCommand::Right)),
        "i" | "I" => Some(InputAction::ToggleAutopilot),
        _ => None,
    }
}

/// `keyup` of any key stops the paddle
pub fn key_up() -> PaddleCommand {
    PaddleCommand::Stop
}

/// `touchstart` on a direction button
pub fn button_press(button: DirectionButton) -> PaddleCommand {
    match button {
        DirectionButton::Left => PaddleCommand::Left,
        DirectionButton::Right => PaddleCommand::Right,
    }
}

/// `touchend` on either direction button stops the paddle
pub fn button_release() -> PaddleCommand {
    PaddleCommand::Stop
}

/// Convert a touch's client x into surface coordinates
pub fn touch_x(client_x: f64, canvas_left: f64) -> f32 {
    (client_x - canvas_left) as f32
}
