//! In-memory collaborators
//!
//! [`QueuedInput`] stands in for a browser's event targets and
//! [`RecordingSurface`] captures draw calls instead of painting them.

use std::collections::{HashSet, VecDeque};

use glam::Vec2;

use crate::input::{InputEvent, InputSource, ListenerKind};
use crate::render::{Surface, TextAlign};

/// Input source fed by hand
///
/// Events pushed while their listener is not added are dropped, the same as a
/// DOM event with nobody listening.
#[derive(Debug, Default)]
pub struct QueuedInput {
    listeners: HashSet<ListenerKind>,
    pending: VecDeque<InputEvent>,
    adds: usize,
    removes: usize,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event; returns whether a listener picked it up
    pub fn push(&mut self, event: InputEvent) -> bool {
        if self.listeners.contains(&event.listener_kind()) {
            self.pending.push_back(event);
            true
        } else {
            false
        }
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.contains(&kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Registrations that actually took effect
    pub fn add_count(&self) -> usize {
        self.adds
    }

    /// Removals that actually took effect
    pub fn remove_count(&self) -> usize {
        self.removes
    }
}

impl InputSource for QueuedInput {
    fn add_listener(&mut self, kind: ListenerKind) {
        if self.listeners.insert(kind) {
            self.adds += 1;
        }
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        if self.listeners.remove(&kind) {
            self.removes += 1;
        }
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        self.pending.drain(..).collect()
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillColor(String),
    StrokeColor(String),
    LineDash(Vec<f32>),
    Font(String),
    TextAlign(TextAlign),
    FillRect { x: f32, y: f32, width: f32, height: f32 },
    FillCircle { center: Vec2, radius: f32 },
    StrokeLine { from: Vec2, to: Vec2 },
    FillText { text: String, x: f32, y: f32 },
}

/// Surface that keeps every call it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Filled rectangles as (x, y, width, height)
    pub fn rects(&self) -> Vec<(f32, f32, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { x, y, width, height } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    /// Text calls as (text, x, y)
    pub fn texts(&self) -> Vec<(String, f32, f32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, x, y } => Some((text.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillColor(color.to_string()));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeColor(color.to_string()));
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        self.commands.push(DrawCommand::LineDash(dash.to_vec()));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::FillCircle { center, radius });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
