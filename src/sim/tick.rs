//! Per-frame simulation tick
//!
//! One call advances the match by exactly one animation frame. Distances are
//! in surface units and speeds in units per frame; there is no sub-stepping.

use super::collision::{bounce_angle, bounce_velocity, hits_paddle, hits_wall, in_paddle_zone};
use super::serve::{ServeSource, serve};
use super::state::{GameEvent, MatchState, Side};
use crate::settings::Settings;

/// Advance the match by one frame
///
/// Returns the events the frame produced, in order.
pub fn tick(
    state: &mut MatchState,
    settings: &Settings,
    serves: &mut impl ServeSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    move_paddles(state, settings);

    state.ball.pos += state.ball.vel;

    // No position correction: the ball may sit inside the wall for a frame
    if hits_wall(state.ball.pos.y, settings.ball_radius, state.height) {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    if settings.debounce_contact {
        if let Some(side) = state.ball.contact {
            if !in_paddle_zone(side, state.ball.pos.x, settings, state.width) {
                state.ball.contact = None;
            }
        }
    }

    for side in Side::BOTH {
        if settings.debounce_contact && state.ball.contact == Some(side) {
            continue;
        }
        let paddle_y = state.paddle(side);
        if hits_paddle(side, state.ball.pos, paddle_y, settings, state.width) {
            let angle = bounce_angle(state.ball.pos.y, paddle_y, settings);
            state.ball.vel = bounce_velocity(side, angle, settings.ball_speed);
            state.ball.contact = Some(side);
            events.push(GameEvent::PaddleHit(side));
        }
    }

    let scorer = if state.ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if state.ball.pos.x > state.width {
        Some(Side::Left)
    } else {
        None
    };
    if let Some(side) = scorer {
        state.score.award(side);
        serve(state, serves, settings);
        events.push(GameEvent::Scored(side));
    }

    events
}

/// Apply held keys to both paddles
fn move_paddles(state: &mut MatchState, settings: &Settings) {
    let limit = settings.paddle_limit(state.height);
    for side in Side::BOTH {
        let mut y = state.paddle(side);
        if state.keys.up(side) && y > 0.0 {
            y -= settings.paddle_speed;
        }
        if state.keys.down(side) && y < limit {
            y += settings.paddle_speed;
        }
        state.set_paddle(side, y, settings);
    }
}
