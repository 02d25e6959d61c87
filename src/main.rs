//! Duel Pong entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use duel_pong::Game;
    use duel_pong::platform::{CanvasSurface, DomInput};
    use duel_pong::settings::Settings;
    use duel_pong::sim::RandomServe;

    /// Host-side pieces the game itself does not own
    struct Host {
        game: Game<DomInput>,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        running: bool,
    }

    impl Host {
        /// Match the canvas backing store to the window, then run one frame
        fn frame(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(self.canvas.width() as f64);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(self.canvas.height() as f64);
            if self.canvas.width() != width as u32 || self.canvas.height() != height as u32 {
                self.canvas.set_width(width as u32);
                self.canvas.set_height(height as u32);
            }
            self.game
                .step(&mut self.surface, width as f32, height as f32);
        }
    }

    /// Settings override from the canvas' `data-settings` attribute
    fn load_settings(canvas: &HtmlCanvasElement) -> Settings {
        match canvas.get_attribute("data-settings") {
            Some(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from data-settings");
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring bad data-settings: {}", err);
                    Settings::default()
                }
            },
            None => Settings::default(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duel Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let surface = CanvasSurface::new(&canvas).expect("no 2d context");
        let settings = load_settings(&canvas);
        let seed = js_sys::Date::now() as u64;
        let input = DomInput::new(document, canvas.clone());
        let game = Game::with_parts(input, RandomServe::new(seed), settings);

        log::info!("Game created with seed: {}", seed);

        let host = Rc::new(RefCell::new(Host {
            game,
            surface,
            canvas,
            running: true,
        }));

        setup_teardown(host.clone());
        request_animation_frame(host);

        log::info!("Duel Pong running!");
    }

    /// Stop the loop and release input listeners when the page goes away
    fn setup_teardown(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut h = host.borrow_mut();
            h.running = false;
            h.game.cleanup();
            log::info!("Game torn down");
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        {
            let mut h = host.borrow_mut();
            if !h.running {
                return;
            }
            h.frame();
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Duel Pong (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);
    demo::run(seed, 3600);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless match with scripted key presses
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use duel_pong::platform::{QueuedInput, RecordingSurface};
    use duel_pong::{Game, InputEvent, Key};

    pub fn run(seed: u64, frames: u32) {
        let mut game = Game::new(QueuedInput::new(), seed);
        let mut surface = RecordingSurface::new();

        for frame in 0..frames {
            // Both players sweep their paddles up and down. Listeners only
            // exist after the first frame, so the script starts on frame 1.
            match frame % 120 {
                1 => press(&mut game, Key::W, Key::ArrowDown),
                61 => press(&mut game, Key::S, Key::ArrowUp),
                _ => {}
            }

            // Resize halfway through to exercise re-layout
            let (width, height) = if frame < frames / 2 {
                (800.0, 600.0)
            } else {
                (1024.0, 768.0)
            };

            surface.clear();
            game.step(&mut surface, width, height);
        }

        let score = game.state().score;
        log::info!("Seed {} after {} frames: {} - {}", seed, frames, score.left, score.right);
        println!("Final score: {} - {}", score.left, score.right);

        game.cleanup();
    }

    /// Release every key, then hold one per paddle
    fn press(game: &mut Game<QueuedInput>, left: Key, right: Key) {
        let input = game.input_mut();
        for key in [Key::W, Key::S, Key::ArrowUp, Key::ArrowDown] {
            input.push(InputEvent::KeyUp(key));
        }
        input.push(InputEvent::KeyDown(left));
        input.push(InputEvent::KeyDown(right));
    }
}
