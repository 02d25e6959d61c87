//! Platform collaborators
//!
//! - `headless`: in-memory input queue and recording surface (tests, native demo)
//! - `web`: DOM listeners and a `CanvasRenderingContext2d` surface (wasm32 only)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{DrawCommand, QueuedInput, RecordingSurface};
#[cfg(target_arch = "wasm32")]
pub use web::{CanvasSurface, DomInput};
