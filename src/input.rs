//! Keyboard and touch input
//!
//! Hosts deliver [`InputEvent`]s between frames. Keys only toggle held flags;
//! touches claim a paddle per side and drag it by their vertical travel.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{MatchState, Side};

/// Keys the game listens to. Names are case-sensitive; nothing else is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Right paddle up
    ArrowUp,
    /// Right paddle down
    ArrowDown,
    /// Left paddle up
    W,
    /// Left paddle down
    S,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::W => "w",
            Key::S => "s",
        }
    }

    /// Paddle the key drives
    pub fn side(&self) -> Side {
        match self {
            Key::ArrowUp | Key::ArrowDown => Side::Right,
            Key::W | Key::S => Side::Left,
        }
    }
}

/// Held-key flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFlags {
    pub up: bool,
    pub down: bool,
    pub w: bool,
    pub s: bool,
}

impl KeyFlags {
    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ArrowUp => self.up = pressed,
            Key::ArrowDown => self.down = pressed,
            Key::W => self.w = pressed,
            Key::S => self.s = pressed,
        }
    }

    /// Whether the "move up" key for a paddle is held
    pub fn up(&self, side: Side) -> bool {
        match side {
            Side::Left => self.w,
            Side::Right => self.up,
        }
    }

    /// Whether the "move down" key for a paddle is held
    pub fn down(&self, side: Side) -> bool {
        match side {
            Side::Left => self.s,
            Side::Right => self.down,
        }
    }
}

/// One changed touch point, in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub identifier: i32,
    pub client_x: f32,
    pub client_y: f32,
}

impl TouchPoint {
    pub fn new(identifier: i32, client_x: f32, client_y: f32) -> Self {
        Self {
            identifier,
            client_x,
            client_y,
        }
    }
}

/// A touch that owns a paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSlot {
    pub identifier: i32,
    /// Vertical position at the last start/move, deltas are measured from here
    pub reference_y: f32,
}

/// At most one owning touch per paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchSlots {
    pub left: Option<TouchSlot>,
    pub right: Option<TouchSlot>,
}

impl TouchSlots {
    pub fn get(&self, side: Side) -> Option<TouchSlot> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<TouchSlot> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Side owned by the touch with this identifier
    pub fn owner(&self, identifier: i32) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| self.get(*side).is_some_and(|slot| slot.identifier == identifier))
    }
}

/// Listener registrations an [`InputSource`] manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    KeyDown,
    KeyUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl ListenerKind {
    pub const ALL: [ListenerKind; 5] = [
        ListenerKind::KeyDown,
        ListenerKind::KeyUp,
        ListenerKind::TouchStart,
        ListenerKind::TouchMove,
        ListenerKind::TouchEnd,
    ];

    /// DOM event type
    pub fn event_name(&self) -> &'static str {
        match self {
            ListenerKind::KeyDown => "keydown",
            ListenerKind::KeyUp => "keyup",
            ListenerKind::TouchStart => "touchstart",
            ListenerKind::TouchMove => "touchmove",
            ListenerKind::TouchEnd => "touchend",
        }
    }

    /// Touch listeners live on the drawing surface, keyboard ones on the document
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            ListenerKind::TouchStart | ListenerKind::TouchMove | ListenerKind::TouchEnd
        )
    }
}

/// An input event delivered by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    TouchStart(Vec<TouchPoint>),
    TouchMove(Vec<TouchPoint>),
    TouchEnd(Vec<TouchPoint>),
}

impl InputEvent {
    /// Listener that delivers this event
    pub fn listener_kind(&self) -> ListenerKind {
        match self {
            InputEvent::KeyDown(_) => ListenerKind::KeyDown,
            InputEvent::KeyUp(_) => ListenerKind::KeyUp,
            InputEvent::TouchStart(_) => ListenerKind::TouchStart,
            InputEvent::TouchMove(_) => ListenerKind::TouchMove,
            InputEvent::TouchEnd(_) => ListenerKind::TouchEnd,
        }
    }
}

/// Where input events come from
///
/// Implementations queue events from listeners that are currently added and
/// hand them over once per frame.
pub trait InputSource {
    /// Register a listener. Adding one that is already registered must not
    /// make it fire twice.
    fn add_listener(&mut self, kind: ListenerKind);

    /// Unregister a listener. Removing one that is not registered is a no-op.
    fn remove_listener(&mut self, kind: ListenerKind);

    /// Take every event queued since the last call, oldest first
    fn drain_events(&mut self) -> Vec<InputEvent>;
}

/// Apply one event to the match
pub fn apply_event(state: &mut MatchState, settings: &Settings, event: &InputEvent) {
    match event {
        InputEvent::KeyDown(key) => state.keys.set(*key, true),
        InputEvent::KeyUp(key) => state.keys.set(*key, false),
        InputEvent::TouchStart(points) => touch_start(state, points),
        InputEvent::TouchMove(points) => touch_move(state, settings, points),
        InputEvent::TouchEnd(points) => touch_end(state, points),
    }
}

/// Claim free paddle slots for new touches, by which half they land in
pub fn touch_start(state: &mut MatchState, points: &[TouchPoint]) {
    let mid = state.width / 2.0;
    for point in points {
        let side = if point.client_x < mid {
            Side::Left
        } else {
            Side::Right
        };
        let slot = state.touches.slot_mut(side);
        if slot.is_none() {
            *slot = Some(TouchSlot {
                identifier: point.identifier,
                reference_y: point.client_y,
            });
            log::debug!("Touch {} claimed {:?} paddle", point.identifier, side);
        }
    }
}

/// Drag owned paddles by the vertical travel since the last event
pub fn touch_move(state: &mut MatchState, settings: &Settings, points: &[TouchPoint]) {
    for point in points {
        let Some(side) = state.touches.owner(point.identifier) else {
            continue;
        };
        let Some(slot) = state.touches.slot_mut(side).as_mut() else {
            continue;
        };
        let delta = point.client_y - slot.reference_y;
        slot.reference_y = point.client_y;
        let y = state.paddle(side) + delta * settings.touch_sensitivity;
        state.set_paddle(side, y, settings);
    }
}

/// Release the slots of touches that ended
pub fn touch_end(state: &mut MatchState, points: &[TouchPoint]) {
    for point in points {
        if let Some(side) = state.touches.owner(point.identifier) {
            *state.touches.slot_mut(side) = None;
            log::debug!("Touch {} released {:?} paddle", point.identifier, side);
        }
    }
}
