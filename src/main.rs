//! Face Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use face_breakout::consts::*;
    use face_breakout::platform::input::{self, DirectionButton, InputAction};
    use face_breakout::renderer::{CanvasSurface, SkinAtlas};
    use face_breakout::sim::{Frame, GameEvent, GameState, GameStatus, autopilot};
    use face_breakout::{GameConfig, tick, ui};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: Pcg32,
        surface: CanvasSurface,
        document: Document,
        /// A frame callback is currently scheduled
        loop_active: bool,
        /// Idle/demo mode - the paddle plays itself
        autopilot: bool,
    }

    impl Game {
        /// Reset everything and rebuild the score panel
        fn start(&mut self) {
            ui::render_score_panel(&self.document, &self.state.config);
            self.state.start(&mut self.rng);
            self.update_pause_button();
        }

        fn toggle_pause(&mut self) {
            self.state.toggle_pause();
            self.update_pause_button();
        }

        fn update_pause_button(&self) {
            if let Some(btn) = self.document.get_element_by_id("pauseButton") {
                btn.set_text_content(Some(ui::pause_button_label(self.state.status)));
            }
        }

        /// One animation frame
        fn frame(&mut self) -> Frame {
            if self.autopilot && self.state.is_running() {
                let command = autopilot::steer(&self.state);
                self.state.steer(command);
            }

            let frame = tick(&mut self.state, &mut self.surface);

            for event in self.state.drain_events() {
                if let GameEvent::GameOver { score } = event {
                    log::info!("Final score: {}", score);
                }
            }
            frame
        }
    }

    /// Read an optional JSON override from `<script id="game-config">`
    fn load_config(document: &Document) -> GameConfig {
        let Some(json) = document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
        else {
            log::info!("Using default config");
            return GameConfig::default();
        };

        match GameConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from page");
                config
            }
            Err(e) => {
                log::warn!("{} - using default config", e);
                GameConfig::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Face Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let config = load_config(&document);
        let surface = CanvasSurface::new(&canvas, SkinAtlas::load(&config))
            .expect("Failed to get 2d context");

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(config),
            rng: Pcg32::seed_from_u64(seed),
            surface,
            document: document.clone(),
            loop_active: false,
            autopilot: false,
        }));

        setup_buttons(&document, game.clone());
        setup_direction_buttons(&document, game.clone());
        setup_touch(&canvas, game.clone());
        setup_keyboard(&document, game);

        log::info!("Face Breakout ready - press Start");
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Start / restart
        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                g.start();
                // Restarting while the loop runs must not schedule a second loop
                if !g.loop_active {
                    g.loop_active = true;
                    drop(g);
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("#startButton not found");
        }

        // Pause / resume
        if let Some(btn) = document.get_element_by_id("pauseButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().toggle_pause();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("#pauseButton not found");
        }
    }

    fn setup_direction_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let buttons = [
            ("leftButton", DirectionButton::Left),
            ("rightButton", DirectionButton::Right),
        ];

        for (id, button) in buttons {
            let Some(el) = document.get_element_by_id(id) else {
                log::warn!("#{} not found", id);
                continue;
            };

            for event_name in ["touchstart", "mousedown"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    event.prevent_default();
                    game.borrow_mut().state.steer(input::button_press(button));
                });
                let _ = el
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }

            for event_name in ["touchend", "mouseup"] {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                    game.borrow_mut().state.steer(input::button_release());
                });
                let _ = el
                    .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_touch(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                let rect = canvas_clone.get_bounding_client_rect();
                let x = input::touch_x(touch.client_x() as f64, rect.left());
                game.borrow_mut().state.touch_at(x);
            }
        });
        let _ =
            canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match input::key_down(&event.key()) {
                    Some(InputAction::Paddle(command)) => g.state.steer(command),
                    Some(InputAction::ToggleAutopilot) => {
                        g.autopilot = !g.autopilot;
                        log::info!("Idle mode: {}", g.autopilot);
                    }
                    None => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: KeyboardEvent| {
            game.borrow_mut().state.steer(input::key_up());
        });
        let _ = document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window - cannot schedule frame");
            game.borrow_mut().loop_active = false;
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let frame = game.borrow_mut().frame();

        match frame {
            Frame::Continue => request_animation_frame(game),
            Frame::Halt => {
                let mut g = game.borrow_mut();
                g.loop_active = false;
                debug_assert_eq!(g.state.status, GameStatus::Over);
                log::info!("Game loop halted");
            }
        }
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
    log::info!("Face Breakout (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in the browser");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => face_breakout::GameConfig::load(&path).unwrap_or_else(|e| {
            log::warn!("{} - using default config", e);
            face_breakout::GameConfig::default()
        }),
        None => face_breakout::GameConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);

    run_headless_demo(config, seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play until the ball is lost or the frame budget runs out
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(config: face_breakout::GameConfig, seed: u64) {
    use face_breakout::renderer::RecordingSurface;
    use face_breakout::sim::{Frame, GameEvent, GameState, autopilot};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const MAX_FRAMES: u32 = 20_000;

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut state = GameState::new(config);
    let mut surface = RecordingSurface::new();
    state.start(&mut rng);

    let mut destroyed = 0usize;
    let mut paddle_hits = 0usize;
    for _ in 0..MAX_FRAMES {
        let command = autopilot::steer(&state);
        state.steer(command);

        surface.reset();
        let frame = face_breakout::tick(&mut state, &mut surface);

        for event in state.drain_events() {
            match event {
                GameEvent::BlockDestroyed { .. } => destroyed += 1,
                GameEvent::PaddleHit { .. } => paddle_hits += 1,
                _ => {}
            }
        }
        if frame == Frame::Halt || state.blocks.alive_count() == 0 {
            break;
        }
    }

    println!(
        "\nDemo finished after {} frames: score {}, {} blocks destroyed, {} paddle hits, {} blocks left ({:?})",
        state.frame,
        state.score,
        destroyed,
        paddle_hits,
        state.blocks.alive_count(),
        state.status
    );
}
