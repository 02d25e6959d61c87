//! Property tests for paddle bounds, serve speed, and wall reflection

use duel_pong::platform::{QueuedInput, RecordingSurface};
use duel_pong::settings::Settings;
use duel_pong::sim::{FixedServe, MatchState, RandomServe, serve, tick};
use duel_pong::{Game, InputEvent, Key, TouchPoint};
use glam::Vec2;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Press(Key),
    Release(Key),
    Touch { id: i32, x: f32, y: f32 },
    Drag { id: i32, y: f32 },
    Lift { id: i32 },
    Frame,
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowUp),
        Just(Key::ArrowDown),
        Just(Key::W),
        Just(Key::S),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        key().prop_map(Action::Press),
        key().prop_map(Action::Release),
        (0..3i32, 0.0..800.0f32, -200.0..800.0f32)
            .prop_map(|(id, x, y)| Action::Touch { id, x, y }),
        (0..3i32, -2000.0..2000.0f32).prop_map(|(id, y)| Action::Drag { id, y }),
        (0..3i32).prop_map(|id| Action::Lift { id }),
        Just(Action::Frame),
    ]
}

proptest! {
    #[test]
    fn paddles_stay_on_surface(
        actions in prop::collection::vec(action(), 1..200),
        height in 150.0..900.0f32,
    ) {
        let mut game = Game::new(QueuedInput::new(), 11);
        let mut surface = RecordingSurface::new();
        game.step(&mut surface, 800.0, height);
        let limit = height - game.settings().paddle_height;

        for action in actions {
            let event = match action {
                Action::Press(key) => Some(InputEvent::KeyDown(key)),
                Action::Release(key) => Some(InputEvent::KeyUp(key)),
                Action::Touch { id, x, y } => Some(InputEvent::TouchStart(vec![TouchPoint::new(id, x, y)])),
                Action::Drag { id, y } => Some(InputEvent::TouchMove(vec![TouchPoint::new(id, 0.0, y)])),
                Action::Lift { id } => Some(InputEvent::TouchEnd(vec![TouchPoint::new(id, 0.0, 0.0)])),
                Action::Frame => None,
            };
            match event {
                Some(event) => game.handle_event(&event),
                None => {
                    surface.clear();
                    game.step(&mut surface, 800.0, height);
                }
            }
            let state = game.state();
            prop_assert!(state.left_paddle >= 0.0 && state.left_paddle <= limit);
            prop_assert!(state.right_paddle >= 0.0 && state.right_paddle <= limit);
        }
    }

    #[test]
    fn serve_speed_is_constant(seed in any::<u64>(), width in 100.0..2000.0f32, height in 100.0..2000.0f32) {
        let settings = Settings::default();
        let mut state = MatchState::new();
        state.layout(width, height, &settings);
        let mut serves = RandomServe::new(seed);
        serve(&mut state, &mut serves, &settings);

        let expected = settings.ball_speed * settings.ball_speed;
        prop_assert!((state.ball.speed_squared() - expected).abs() < 1e-3);
        prop_assert_eq!(state.ball.pos, Vec2::new(width / 2.0, height / 2.0));
        // Never served more than pi/8 off the horizontal
        let angle = (state.ball.vel.y / state.ball.vel.x.abs()).atan();
        prop_assert!(angle.abs() <= settings.serve_max_angle + 1e-4);
    }

    #[test]
    fn wall_reflection_keeps_magnitude(x in 100.0..700.0f32, vx in -5.0..5.0f32, vy in 0.5..5.0f32) {
        let settings = Settings::default();
        let mut state = MatchState::new();
        state.layout(800.0, 600.0, &settings);

        // Heading into the top wall
        state.ball.pos = Vec2::new(x, settings.ball_radius + vy / 2.0);
        state.ball.vel = Vec2::new(vx, -vy);
        tick(&mut state, &settings, &mut FixedServe::straight(1.0));
        prop_assert_eq!(state.ball.vel, Vec2::new(vx, vy));

        // Heading into the bottom wall
        state.ball.pos = Vec2::new(x, 600.0 - settings.ball_radius - vy / 2.0);
        state.ball.vel = Vec2::new(vx, vy);
        tick(&mut state, &settings, &mut FixedServe::straight(1.0));
        prop_assert_eq!(state.ball.vel, Vec2::new(vx, -vy));
    }

    #[test]
    fn scores_never_decrease(seed in any::<u64>(), frames in 1..2000usize) {
        let settings = Settings::default();
        let mut state = MatchState::new();
        state.layout(800.0, 600.0, &settings);
        let mut serves = RandomServe::new(seed);
        serve(&mut state, &mut serves, &settings);

        let mut last = state.score;
        for _ in 0..frames {
            tick(&mut state, &settings, &mut serves);
            prop_assert!(state.score.left >= last.left);
            prop_assert!(state.score.right >= last.right);
            prop_assert!(state.score.left + state.score.right <= last.left + last.right + 1);
            last = state.score;
        }
    }
}
