//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same settings, serve source and
//! key/touch history, a match plays out identically:
//! - One tick per animation frame
//! - Serve randomness comes from an injected source
//! - No rendering or platform dependencies

pub mod collision;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{bounce_angle, bounce_velocity, hits_paddle, hits_wall, in_paddle_zone};
pub use serve::{FixedServe, Launch, RandomServe, ServeSource, serve};
pub use state::{Ball, GameEvent, MatchState, Score, Side};
pub use tick::tick;
