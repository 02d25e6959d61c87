//! Duel Pong - two-player paddle and ball game on a resizable canvas
//!
//! Core modules:
//! - `sim`: Match state, serving, collisions and the per-frame tick
//! - `input`: Keyboard flags, touch slots and the listener contract
//! - `render`: Drawing surface contract and frame painting
//! - `game`: The frame step and listener cleanup exposed to hosts
//! - `platform`: Browser and headless collaborators

pub mod game;
pub mod input;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use input::{InputEvent, InputSource, Key, ListenerKind, TouchPoint};
pub use render::{Surface, TextAlign};
pub use settings::Settings;

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    use std::f32::consts::PI;

    /// Paddle dimensions
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_WIDTH: f32 = 15.0;
    /// Paddle travel per frame while a key is held
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Speed magnitude after every serve and paddle bounce (units/frame)
    pub const BALL_SPEED: f32 = 5.0;

    /// Serve angle is drawn from [-SERVE_MAX_ANGLE, SERVE_MAX_ANGLE)
    pub const SERVE_MAX_ANGLE: f32 = PI / 8.0;
    /// Bounce angle at the very tip of a paddle
    pub const BOUNCE_MAX_ANGLE: f32 = PI / 3.0;

    /// Paddle travel per unit of finger travel
    pub const TOUCH_SENSITIVITY: f32 = 1.5;

    /// Center divider dash pattern (on, off)
    pub const DIVIDER_DASH: [f32; 2] = [10.0, 10.0];
    /// Score text baseline from the top edge
    pub const SCORE_OFFSET_Y: f32 = 50.0;
    pub const SCORE_FONT: &str = "32px Arial";

    pub const BACKGROUND_COLOR: &str = "#000";
    pub const FOREGROUND_COLOR: &str = "#fff";
}
