//! Collision tests and bounce response
//!
//! Paddles sit flush against the left and right edges of the surface. A paddle
//! counts as hit when the ball's leading edge has crossed the paddle's inner
//! face and the ball's center lies strictly inside the paddle's vertical span.

use glam::Vec2;

use super::state::Side;
use crate::settings::Settings;

/// Whether the ball overlaps the top or bottom edge
#[inline]
pub fn hits_wall(ball_y: f32, radius: f32, height: f32) -> bool {
    ball_y - radius < 0.0 || ball_y + radius > height
}

/// Whether the ball's edge is past the inner face of a paddle
#[inline]
pub fn in_paddle_zone(side: Side, ball_x: f32, settings: &Settings, width: f32) -> bool {
    match side {
        Side::Left => ball_x - settings.ball_radius < settings.paddle_width,
        Side::Right => ball_x + settings.ball_radius > width - settings.paddle_width,
    }
}

/// Whether the ball is striking the paddle whose top edge is at `paddle_y`
pub fn hits_paddle(side: Side, ball: Vec2, paddle_y: f32, settings: &Settings, width: f32) -> bool {
    in_paddle_zone(side, ball.x, settings, width)
        && ball.y > paddle_y
        && ball.y < paddle_y + settings.paddle_height
}

/// Bounce angle for a ball striking a paddle at `ball_y`
///
/// Maps the offset from the paddle center, normalized to [-1, 1], linearly
/// onto [-bounce_max_angle, bounce_max_angle].
pub fn bounce_angle(ball_y: f32, paddle_y: f32, settings: &Settings) -> f32 {
    let half = settings.paddle_height / 2.0;
    let offset = (ball_y - (paddle_y + half)) / half;
    offset * settings.bounce_max_angle
}

/// Outgoing velocity after a paddle bounce
///
/// Always heads away from the paddle that was struck, whatever the incoming
/// direction was.
pub fn bounce_velocity(side: Side, angle: f32, speed: f32) -> Vec2 {
    let away = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    Vec2::new(away * speed * angle.cos(), speed * angle.sin())
}
