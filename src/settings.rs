//! Game tuning
//!
//! Every constant the simulation and renderer read goes through [`Settings`],
//! so a host can override them with a JSON document.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning values for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Travel per frame while a key is held
    pub paddle_speed: f32,
    /// Multiplier applied to finger travel
    pub touch_sensitivity: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Speed magnitude set on serve and on every paddle bounce
    pub ball_speed: f32,
    /// Half-width of the serve angle range (radians)
    pub serve_max_angle: f32,
    /// Bounce angle when the ball strikes a paddle tip (radians)
    pub bounce_max_angle: f32,
    /// Suppress repeat bounces while the ball is still inside a paddle zone
    pub debounce_contact: bool,

    // === Look ===
    pub background_color: String,
    pub foreground_color: String,
    pub divider_dash: [f32; 2],
    pub score_font: String,
    pub score_offset_y: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            touch_sensitivity: TOUCH_SENSITIVITY,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            serve_max_angle: SERVE_MAX_ANGLE,
            bounce_max_angle: BOUNCE_MAX_ANGLE,
            debounce_contact: false,

            background_color: BACKGROUND_COLOR.to_string(),
            foreground_color: FOREGROUND_COLOR.to_string(),
            divider_dash: DIVIDER_DASH,
            score_font: SCORE_FONT.to_string(),
            score_offset_y: SCORE_OFFSET_Y,
        }
    }
}

impl Settings {
    /// Parse an override document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Lowest valid paddle position for a surface of `height`
    #[inline]
    pub fn paddle_limit(&self, height: f32) -> f32 {
        (height - self.paddle_height).max(0.0)
    }

    /// Clamp a paddle top edge into `[0, height - paddle_height]`
    #[inline]
    pub fn clamp_paddle(&self, y: f32, height: f32) -> f32 {
        y.clamp(0.0, self.paddle_limit(height))
    }
}
