//! The frame step hosts drive
//!
//! A [`Game`] owns the match, its tuning, the input source and the serve
//! source. Hosts call [`Game::step`] once per animation frame and
//! [`Game::cleanup`] when tearing the game down.

use crate::input::{InputEvent, InputSource, ListenerKind, apply_event};
use crate::render::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, MatchState, RandomServe, ServeSource, serve, tick};

pub struct Game<I: InputSource, R: ServeSource = RandomServe> {
    state: MatchState,
    settings: Settings,
    input: I,
    serves: R,
    /// Whether our listeners are currently added to `input`
    listening: bool,
}

impl<I: InputSource> Game<I, RandomServe> {
    /// Default tuning with seeded random serves
    pub fn new(input: I, seed: u64) -> Self {
        Self::with_parts(input, RandomServe::new(seed), Settings::default())
    }
}

impl<I: InputSource, R: ServeSource> Game<I, R> {
    pub fn with_parts(input: I, serves: R, settings: Settings) -> Self {
        Self {
            state: MatchState::new(),
            settings,
            input,
            serves,
            listening: false,
        }
    }

    /// Advance one frame and paint it
    ///
    /// Events queued since the previous frame are applied first. The first
    /// call, and any call with a different surface size, lays the court out
    /// again: paddles re-centered, ball re-served, scores kept.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S, width: f32, height: f32) {
        for event in self.input.drain_events() {
            apply_event(&mut self.state, &self.settings, &event);
        }

        if self.state.needs_layout(width, height) {
            self.init(width, height);
        }

        for event in tick(&mut self.state, &self.settings, &mut self.serves) {
            match event {
                GameEvent::Scored(side) => log::debug!(
                    "{:?} scores ({} - {})",
                    side,
                    self.state.score.left,
                    self.state.score.right
                ),
                GameEvent::PaddleHit(side) => log::trace!("{:?} paddle hit", side),
                GameEvent::WallBounce => log::trace!("Wall bounce"),
            }
        }

        draw_frame(surface, &self.state, &self.settings);
    }

    /// Apply an event directly, bypassing the input source queue
    pub fn handle_event(&mut self, event: &InputEvent) {
        apply_event(&mut self.state, &self.settings, event);
    }

    /// Remove every listener added during initialization
    ///
    /// Does nothing if none are added, so it is safe before the first frame
    /// and safe to call twice.
    pub fn cleanup(&mut self) {
        if !self.listening {
            return;
        }
        for kind in ListenerKind::ALL {
            self.input.remove_listener(kind);
        }
        self.listening = false;
        log::debug!("Input listeners removed");
    }

    fn init(&mut self, width: f32, height: f32) {
        log::info!("Laying out court at {}x{}", width, height);
        self.state.layout(width, height, &self.settings);
        serve(&mut self.state, &mut self.serves, &self.settings);
        self.attach_listeners();
    }

    fn attach_listeners(&mut self) {
        if self.listening {
            return;
        }
        for kind in ListenerKind::ALL {
            self.input.add_listener(kind);
        }
        self.listening = true;
        log::debug!("Input listeners added");
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable access for hosts and tests that set up positions directly
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, TouchPoint};
    use crate::platform::headless::{QueuedInput, RecordingSurface};
    use crate::sim::FixedServe;
    use glam::Vec2;

    fn game() -> Game<QueuedInput, FixedServe> {
        Game::with_parts(
            QueuedInput::new(),
            FixedServe::straight(1.0),
            Settings::default(),
        )
    }

    #[test]
    fn test_first_step_initializes() {
        let mut game = game();
        let mut surface = RecordingSurface::new();
        assert!(!game.is_listening());

        game.step(&mut surface, 800.0, 600.0);

        assert!(game.is_listening());
        assert_eq!(game.input().listener_count(), ListenerKind::ALL.len());
        assert_eq!(game.state().left_paddle, 250.0);
        assert_eq!(game.state().right_paddle, 250.0);
        // Served to the right, then moved one frame
        assert_eq!(game.state().ball.pos, Vec2::new(405.0, 300.0));
        assert!(!surface.commands().is_empty());
    }

    #[test]
    fn test_queued_events_apply_before_physics() {
        let mut game = game();
        let mut surface = RecordingSurface::new();
        game.step(&mut surface, 800.0, 600.0);

        assert!(game.input_mut().push(InputEvent::KeyDown(Key::ArrowUp)));
        game.step(&mut surface, 800.0, 600.0);
        assert_eq!(game.state().right_paddle, 242.0);

        assert!(game.input_mut().push(InputEvent::KeyUp(Key::ArrowUp)));
        game.step(&mut surface, 800.0, 600.0);
        assert_eq!(game.state().right_paddle, 242.0);
    }

    #[test]
    fn test_resize_keeps_score_and_listeners() {
        let mut game = game();
        let mut surface = RecordingSurface::new();
        game.step(&mut surface, 800.0, 600.0);
        game.state_mut().score.left = 4;

        game.step(&mut surface, 1024.0, 768.0);

        assert_eq!(game.state().score.left, 4);
        assert_eq!(game.state().left_paddle, 334.0);
        assert_eq!(game.state().ball.pos, Vec2::new(517.0, 384.0));
        assert_eq!(game.input().add_count(), ListenerKind::ALL.len());
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let mut game = game();
        game.cleanup();
        assert_eq!(game.input().remove_count(), 0);

        let mut surface = RecordingSurface::new();
        game.step(&mut surface, 800.0, 600.0);
        game.cleanup();
        game.cleanup();
        assert_eq!(game.input().remove_count(), ListenerKind::ALL.len());
        assert_eq!(game.input().listener_count(), 0);
        assert!(!game.is_listening());

        // Nobody hears events after teardown
        assert!(!game.input_mut().push(InputEvent::KeyDown(Key::W)));
    }

    #[test]
    fn test_handle_event_touch_drag() {
        let mut game = game();
        let mut surface = RecordingSurface::new();
        game.step(&mut surface, 800.0, 600.0);

        game.handle_event(&InputEvent::TouchStart(vec![TouchPoint::new(0, 10.0, 100.0)]));
        game.handle_event(&InputEvent::TouchMove(vec![TouchPoint::new(0, 10.0, 80.0)]));
        assert_eq!(game.state().left_paddle, 220.0);
    }
}
