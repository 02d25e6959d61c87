//! Match state and core simulation types
//!
//! Everything the frame step reads or writes lives in [`MatchState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::input::{KeyFlags, TouchSlots};
use crate::settings::Settings;

/// Which half of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball bounced off a paddle
    PaddleHit(Side),
    /// Side scored a point and the ball was re-served
    Scored(Side),
}

/// The ball
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    /// Paddle the ball last bounced off while still inside its zone
    #[serde(default)]
    pub contact: Option<Side>,
}

impl Ball {
    /// Squared speed, handy for comparing against the serve speed
    #[inline]
    pub fn speed_squared(&self) -> f32 {
        self.vel.length_squared()
    }
}

/// Running score. Only ever increases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchState {
    /// Top edge of the left paddle
    pub left_paddle: f32,
    /// Top edge of the right paddle
    pub right_paddle: f32,
    pub ball: Ball,
    pub score: Score,
    /// Held keys
    pub keys: KeyFlags,
    /// Touches that own a paddle
    pub touches: TouchSlots,
    /// Surface size seen at the last initialization (zero before the first frame)
    pub width: f32,
    pub height: f32,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the surface differs from the one the match was laid out for
    pub fn needs_layout(&self, width: f32, height: f32) -> bool {
        self.width != width || self.height != height
    }

    pub fn paddle(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    /// Set a paddle's top edge, clamped inside the surface
    pub fn set_paddle(&mut self, side: Side, y: f32, settings: &Settings) {
        let y = settings.clamp_paddle(y, self.height);
        match side {
            Side::Left => self.left_paddle = y,
            Side::Right => self.right_paddle = y,
        }
    }

    /// Vertical center of a paddle
    pub fn paddle_center(&self, side: Side, settings: &Settings) -> f32 {
        self.paddle(side) + settings.paddle_height / 2.0
    }

    /// Adopt new surface dimensions and put both paddles at mid-height
    pub fn layout(&mut self, width: f32, height: f32, settings: &Settings) {
        self.width = width;
        self.height = height;
        let mid = height / 2.0 - settings.paddle_height / 2.0;
        self.left_paddle = mid;
        self.right_paddle = mid;
    }

    /// Center of the surface, where every serve starts
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_zeroed() {
        let state = MatchState::new();
        assert_eq!(state.width, 0.0);
        assert_eq!(state.height, 0.0);
        assert_eq!(state.score, Score::default());
        assert!(state.needs_layout(800.0, 600.0));
    }

    #[test]
    fn test_layout_centers_paddles() {
        let settings = Settings::default();
        let mut state = MatchState::new();
        state.layout(800.0, 600.0, &settings);
        assert_eq!(state.left_paddle, 250.0);
        assert_eq!(state.right_paddle, 250.0);
        assert_eq!(state.center(), Vec2::new(400.0, 300.0));
        assert!(!state.needs_layout(800.0, 600.0));
        assert!(state.needs_layout(800.0, 601.0));
    }

    #[test]
    fn test_set_paddle_clamps() {
        let settings = Settings::default();
        let mut state = MatchState::new();
        state.layout(800.0, 600.0, &settings);
        state.set_paddle(Side::Left, -40.0, &settings);
        state.set_paddle(Side::Right, 900.0, &settings);
        assert_eq!(state.left_paddle, 0.0);
        assert_eq!(state.right_paddle, 500.0);
    }

    #[test]
    fn test_score_award() {
        let mut score = Score::default();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
        assert_eq!(Side::Left.opponent(), Side::Right);
    }
}
