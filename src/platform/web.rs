//! Browser collaborators
//!
//! Keyboard listeners go on the document, touch listeners on the canvas. Each
//! listener is a `Closure` kept alive for as long as it is registered; events
//! land in a queue the game drains at the start of every frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Event, EventTarget,
    HtmlCanvasElement, KeyboardEvent, TouchEvent, TouchList,
};

use crate::input::{InputEvent, InputSource, Key, ListenerKind, TouchPoint};
use crate::render::{Surface, TextAlign};

type EventQueue = Rc<RefCell<VecDeque<InputEvent>>>;

/// DOM-backed input source
pub struct DomInput {
    document: Document,
    canvas: HtmlCanvasElement,
    queue: EventQueue,
    handlers: Vec<(ListenerKind, Closure<dyn FnMut(Event)>)>,
}

impl DomInput {
    pub fn new(document: Document, canvas: HtmlCanvasElement) -> Self {
        Self {
            document,
            canvas,
            queue: Rc::new(RefCell::new(VecDeque::new())),
            handlers: Vec::new(),
        }
    }

    fn target(&self, kind: ListenerKind) -> &EventTarget {
        if kind.is_touch() {
            self.canvas.as_ref()
        } else {
            self.document.as_ref()
        }
    }
}

fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| {
            TouchPoint::new(
                touch.identifier(),
                touch.client_x() as f32,
                touch.client_y() as f32,
            )
        })
        .collect()
}

/// Translate a DOM event for the given listener
fn translate(kind: ListenerKind, event: &Event) -> Option<InputEvent> {
    if kind.is_touch() {
        // Keep the page from scrolling or zooming under the paddles
        event.prevent_default();
        let points = touch_points(&event.dyn_ref::<TouchEvent>()?.changed_touches());
        return Some(match kind {
            ListenerKind::TouchStart => InputEvent::TouchStart(points),
            ListenerKind::TouchMove => InputEvent::TouchMove(points),
            _ => InputEvent::TouchEnd(points),
        });
    }

    let key = Key::from_name(&event.dyn_ref::<KeyboardEvent>()?.key())?;
    Some(match kind {
        ListenerKind::KeyDown => InputEvent::KeyDown(key),
        _ => InputEvent::KeyUp(key),
    })
}

impl InputSource for DomInput {
    fn add_listener(&mut self, kind: ListenerKind) {
        if self.handlers.iter().any(|(k, _)| *k == kind) {
            return;
        }

        let queue = self.queue.clone();
        let handler = Closure::<dyn FnMut(_)>::new(move |event: Event| {
            if let Some(input) = translate(kind, &event) {
                queue.borrow_mut().push_back(input);
            }
        });

        let target = self.target(kind);
        let callback = handler.as_ref().unchecked_ref();
        let result = if kind.is_touch() {
            // Non-passive so prevent_default is honoured
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind.event_name(),
                callback,
                &options,
            )
        } else {
            target.add_event_listener_with_callback(kind.event_name(), callback)
        };

        match result {
            Ok(()) => self.handlers.push((kind, handler)),
            Err(err) => log::warn!("Failed to add {} listener: {:?}", kind.event_name(), err),
        }
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        let Some(index) = self.handlers.iter().position(|(k, _)| *k == kind) else {
            return;
        };
        let (_, handler) = self.handlers.remove(index);
        if let Err(err) = self
            .target(kind)
            .remove_event_listener_with_callback(kind.event_name(), handler.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", kind.event_name(), err);
        }
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }
}

/// `CanvasRenderingContext2d` surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the canvas' 2D context, if it has one
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_dash(&mut self, dash: &[f32]) {
        let segments: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d as f64)).collect();
        if let Err(err) = self.ctx.set_line_dash(&segments) {
            log::warn!("setLineDash failed: {:?}", err);
        }
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if let Err(err) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {:?}", err);
            return;
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(err) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", err);
        }
    }
}
