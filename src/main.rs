//! Dot Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dot_breaker::Settings;
    use dot_breaker::platform::{InputAdapter, SurfaceRect};
    use dot_breaker::renderer::{Palette, RenderState, scene_vertices};
    use dot_breaker::sim::{GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: InputAdapter,
        settings: Settings,
        canvas: HtmlCanvasElement,
        /// HUD needs a refresh (score changed, round cleared, new round)
        hud_dirty: bool,
    }

    impl Game {
        fn new(state: GameState, canvas: HtmlCanvasElement) -> Self {
            let mut settings = Settings::load();
            if let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) {
                settings.apply_query(&search);
            }
            Self {
                state,
                render_state: None,
                input: InputAdapter::new(),
                settings,
                canvas,
                hud_dirty: true,
            }
        }

        fn surface_rect(&self) -> SurfaceRect {
            let rect = self.canvas.get_bounding_client_rect();
            SurfaceRect {
                left: rect.left() as f32,
                width: rect.width() as f32,
            }
        }

        /// Advance one frame
        fn update(&mut self) {
            let input = self.input.next_input();
            let events = tick(&mut self.state, &input);
            if events.iter().any(|e| {
                matches!(e, GameEvent::DotCleared { .. } | GameEvent::RoundCleared)
            }) {
                self.hud_dirty = true;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let palette = Palette::for_settings(&self.settings);
            let segments = self.settings.quality.circle_segments();
            let corner_radius = self.state.tuning.paddle_corner_radius;
            let scene = self.state.scene();

            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene_vertices(&scene, &palette, corner_radius, segments);
                match render_state.render(&vertices, palette.background) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        render_state.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            if !self.hud_dirty {
                return;
            }
            self.hud_dirty = false;

            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("scoreValue") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("clearMessage") {
                let classes = el.class_list();
                let _ = if self.state.is_ended() {
                    classes.add_1("show")
                } else {
                    classes.remove_1("show")
                };
            }
        }

        /// Canvas was resized: match its backing size and start a new round
        fn resize(&mut self) {
            let size = fit_canvas(&self.canvas);
            match self.state.init_round(size as f32) {
                Ok(()) => {
                    if let Some(ref mut render_state) = self.render_state {
                        render_state.resize(size, size);
                        render_state.set_arena_size(size as f32);
                    }
                    self.hud_dirty = true;
                }
                Err(e) => log::warn!("Ignoring resize: {}", e),
            }
        }
    }

    /// Square the canvas backing store to its laid-out width
    fn fit_canvas(canvas: &HtmlCanvasElement) -> u32 {
        let size = canvas.offset_width().max(0) as u32;
        canvas.set_width(size);
        canvas.set_height(size);
        size
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Dot Breaker starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No #gameCanvas element");
                return;
            }
        };

        let size = fit_canvas(&canvas);
        let state = match GameState::new(size as f32) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot start game: {}", e);
                return;
            }
        };
        let game = Rc::new(RefCell::new(Game::new(state, canvas.clone())));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, size, size, size as f32).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        }

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Dot Breaker running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let rect = g.surface_rect();
                let arena_size = g.state.arena.size();
                g.input
                    .pointer_moved(event.client_x() as f32, rect, arena_size);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click (launch)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.request_launch();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let rect = g.surface_rect();
                    let arena_size = g.state.arena.size();
                    g.input
                        .pointer_moved(touch.client_x() as f32, rect, arena_size);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (position + launch)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                match event.touches().get(0) {
                    Some(touch) => {
                        let rect = g.surface_rect();
                        let arena_size = g.state.arena.size();
                        g.input
                            .touch_started(touch.client_x() as f32, rect, arena_size);
                    }
                    None => g.input.request_launch(),
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        g.input.request_launch();
                    }
                    "c" | "C" => {
                        g.settings.high_contrast = !g.settings.high_contrast;
                        g.settings.save();
                    }
                    "q" | "Q" => {
                        g.settings.quality = g.settings.quality.next();
                        log::info!("Quality: {}", g.settings.quality.as_str());
                        g.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation step per animation frame
    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Dot Breaker (native) starting...");
    log::info!("Native mode runs a headless autoplay session - run with `trunk serve` to play");

    let tuning = match std::env::args().nth(1) {
        Some(path) => load_tuning(&path)?,
        None => dot_breaker::Tuning::default(),
    };

    autoplay(tuning)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> anyhow::Result<dot_breaker::Tuning> {
    use anyhow::Context;

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read tuning file {path}"))?;
    let tuning = dot_breaker::Tuning::from_json(&json)
        .with_context(|| format!("invalid tuning file {path}"))?;
    log::info!("Loaded tuning from {}", path);
    Ok(tuning)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a bounded session with the paddle chasing the ball
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(tuning: dot_breaker::Tuning) -> anyhow::Result<()> {
    use dot_breaker::sim::{GameEvent, GameState, TickInput, tick};

    const ARENA_SIZE: f32 = 600.0;
    const MAX_TICKS: u64 = 60 * 60 * 10;

    let mut state = GameState::with_tuning(ARENA_SIZE, tuning)?;
    let mut balls_lost = 0u32;

    while state.time_ticks < MAX_TICKS && !state.is_ended() {
        // Sweep the contact point across the paddle face so the ball
        // doesn't settle into a vertical loop
        let phase = state.time_ticks as f32 * 0.013;
        let offset = phase.sin() * tuning.paddle_width * 0.4;
        let input = TickInput {
            target_x: state.ball.pos.x - offset,
            launch: true,
        };

        for event in tick(&mut state, &input) {
            if event == GameEvent::BallLost {
                balls_lost += 1;
            }
        }
    }

    log::info!(
        "Autoplay finished after {} ticks: score {}/{}, cleared={}, balls lost={}",
        state.time_ticks,
        state.score,
        state.dots.len(),
        state.is_ended(),
        balls_lost
    );
    println!(
        "score {} of {} ({}), {} balls lost",
        state.score,
        state.dots.len(),
        if state.is_ended() { "cleared" } else { "not cleared" },
        balls_lost
    );
    Ok(())
}
