//! Frame painting
//!
//! The renderer only needs a handful of 2D canvas primitives, described by
//! [`Surface`]. Coordinates are surface units with the origin at the top left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::MatchState;

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// A 2D drawing target
pub trait Surface {
    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    /// Dash pattern for strokes; empty means solid
    fn set_line_dash(&mut self, dash: &[f32]);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Paint the whole frame
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &MatchState, settings: &Settings) {
    let (width, height) = (state.width, state.height);

    surface.set_fill_color(&settings.background_color);
    surface.fill_rect(0.0, 0.0, width, height);

    // Center divider
    surface.set_stroke_color(&settings.foreground_color);
    surface.set_line_dash(&settings.divider_dash);
    surface.stroke_line(Vec2::new(width / 2.0, 0.0), Vec2::new(width / 2.0, height));
    surface.set_line_dash(&[]);

    surface.set_fill_color(&settings.foreground_color);
    surface.fill_rect(
        0.0,
        state.left_paddle,
        settings.paddle_width,
        settings.paddle_height,
    );
    surface.fill_rect(
        width - settings.paddle_width,
        state.right_paddle,
        settings.paddle_width,
        settings.paddle_height,
    );

    surface.fill_circle(state.ball.pos, settings.ball_radius);

    surface.set_font(&settings.score_font);
    surface.set_text_align(TextAlign::Center);
    surface.fill_text(
        &state.score.left.to_string(),
        width / 4.0,
        settings.score_offset_y,
    );
    surface.fill_text(
        &state.score.right.to_string(),
        3.0 * width / 4.0,
        settings.score_offset_y,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::{DrawCommand, RecordingSurface};

    #[test]
    fn test_frame_layout() {
        let settings = Settings::default();
        let mut state = MatchState::new();
        state.layout(800.0, 600.0, &settings);
        state.ball.pos = Vec2::new(120.0, 80.0);
        state.score.left = 3;
        state.score.right = 11;

        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &state, &settings);

        assert_eq!(
            surface.rects(),
            vec![
                (0.0, 0.0, 800.0, 600.0),
                (0.0, 250.0, 15.0, 100.0),
                (785.0, 250.0, 15.0, 100.0),
            ]
        );
        assert!(surface.commands().contains(&DrawCommand::FillCircle {
            center: Vec2::new(120.0, 80.0),
            radius: 10.0,
        }));
        assert_eq!(
            surface.texts(),
            vec![("3".to_string(), 200.0, 50.0), ("11".to_string(), 600.0, 50.0)]
        );
    }

    #[test]
    fn test_divider_is_dashed_then_reset() {
        let settings = Settings::default();
        let mut state = MatchState::new();
        state.layout(640.0, 480.0, &settings);

        let mut surface = RecordingSurface::new();
        draw_frame(&mut surface, &state, &settings);

        let commands = surface.commands();
        let line = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .expect("divider drawn");
        assert_eq!(commands[line - 1], DrawCommand::LineDash(vec![10.0, 10.0]));
        assert_eq!(
            commands[line],
            DrawCommand::StrokeLine {
                from: Vec2::new(320.0, 0.0),
                to: Vec2::new(320.0, 480.0),
            }
        );
        assert_eq!(commands[line + 1], DrawCommand::LineDash(Vec::new()));
    }

    #[test]
    fn test_text_align_names() {
        assert_eq!(TextAlign::Center.as_str(), "center");
        assert_eq!(TextAlign::Left.as_str(), "left");
    }
}
