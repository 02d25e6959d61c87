//! Serving the ball
//!
//! Launch direction and angle come from a [`ServeSource`] so play can be
//! seeded or scripted.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::MatchState;
use crate::settings::Settings;

/// Launch parameters for one serve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    /// +1.0 launches toward the right paddle, -1.0 toward the left
    pub direction: f32,
    /// Angle off the horizontal (radians)
    pub angle: f32,
}

impl Launch {
    /// Horizontal launch toward the given direction
    pub fn straight(direction: f32) -> Self {
        Self {
            direction: direction.signum(),
            angle: 0.0,
        }
    }

    /// Velocity for a ball launched at `speed`
    pub fn velocity(&self, speed: f32) -> Vec2 {
        Vec2::new(
            speed * self.angle.cos() * self.direction,
            speed * self.angle.sin(),
        )
    }
}

/// Supplies serve launches
pub trait ServeSource {
    /// Next launch; `angle` must fall in `[-max_angle, max_angle)`
    fn next_launch(&mut self, max_angle: f32) -> Launch;
}

/// Seeded uniform serves: 50/50 direction, uniform angle
#[derive(Debug, Clone)]
pub struct RandomServe {
    seed: u64,
    rng: Pcg32,
}

impl RandomServe {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ServeSource for RandomServe {
    fn next_launch(&mut self, max_angle: f32) -> Launch {
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let angle = if max_angle > 0.0 {
            self.rng.random_range(-max_angle..max_angle)
        } else {
            0.0
        };
        Launch { direction, angle }
    }
}

/// Replays a fixed list of launches in a loop
#[derive(Debug, Clone)]
pub struct FixedServe {
    launches: Vec<Launch>,
    next: usize,
}

impl FixedServe {
    pub fn new(launches: Vec<Launch>) -> Self {
        assert!(!launches.is_empty(), "FixedServe needs at least one launch");
        Self { launches, next: 0 }
    }

    /// Always serve horizontally toward `direction`
    pub fn straight(direction: f32) -> Self {
        Self::new(vec![Launch::straight(direction)])
    }
}

impl ServeSource for FixedServe {
    fn next_launch(&mut self, max_angle: f32) -> Launch {
        let mut launch = self.launches[self.next];
        self.next = (self.next + 1) % self.launches.len();
        if max_angle > 0.0 {
            launch.angle = launch.angle.clamp(-max_angle, max_angle);
        } else {
            launch.angle = 0.0;
        }
        launch
    }
}

/// Put the ball at the center of the surface with a fresh launch
pub fn serve(state: &mut MatchState, source: &mut impl ServeSource, settings: &Settings) {
    let launch = source.next_launch(settings.serve_max_angle);
    state.ball.pos = state.center();
    state.ball.vel = launch.velocity(settings.ball_speed);
    state.ball.contact = None;
}
