//! Wallbreak entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use glam::Vec2;
    use wallbreak::audio::{AudioManager, SoundEffect};
    use wallbreak::consts::*;
    use wallbreak::graph::{GraphDemo, GraphInput};
    use wallbreak::renderer::{RenderState, scene};
    use wallbreak::sim::{FrameInput, GameEvent, GameState, advance};
    use wallbreak::{HighScores, Settings};

    /// Which screen the shell is driving
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum AppMode {
        Breakout,
        Graph,
    }

    /// Game instance holding all state
    struct Game {
        mode: AppMode,
        state: GameState,
        demo: GraphDemo,
        render_state: Option<RenderState>,
        last_time: f64,
        input: FrameInput,
        graph_input: GraphInput,
        audio: AudioManager,
        settings: Settings,
        highscores: HighScores,
        canvas_size: (f32, f32),
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(settings: Settings, highscores: HighScores, mode: AppMode) -> Self {
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);

            Self {
                mode,
                state: GameState::new(settings.debug_mode),
                demo: GraphDemo::default(),
                render_state: None,
                last_time: 0.0,
                input: FrameInput::default(),
                graph_input: GraphInput::default(),
                audio,
                settings,
                highscores,
                canvas_size: (SCREEN_WIDTH, SCREEN_HEIGHT),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Convert a mouse event position to the sim's logical 800x600 space
        fn pos_to_logical(&self, x: f32, y: f32) -> Vec2 {
            let (w, h) = self.canvas_size;
            Vec2::new(x / w * SCREEN_WIDTH, y / h * SCREEN_HEIGHT)
        }

        /// Advance the active screen by one frame
        fn update(&mut self, dt: f32, time: f64) {
            match self.mode {
                AppMode::Breakout => {
                    advance(&mut self.state, &self.input, dt);
                    let events = std::mem::take(&mut self.state.events);
                    for event in &events {
                        self.handle_event(*event);
                    }
                    // Clear one-shot inputs after processing
                    self.input.restart = false;
                    self.input.warp_to = None;
                }
                AppMode::Graph => {
                    self.demo.advance(&self.graph_input, dt);
                    self.graph_input.move_origin = None;
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Map a sim event to audio/leaderboard side effects
        fn handle_event(&mut self, event: GameEvent) {
            match event {
                GameEvent::WallBounce => self.audio.play(SoundEffect::WallHit),
                GameEvent::PaddleBounce => self.audio.play(SoundEffect::PaddleHit),
                GameEvent::BrickDestroyed { .. } => self.audio.play(SoundEffect::BrickBreak),
                GameEvent::LifeLost => {
                    // The dedicated game-over jingle covers the final loss
                    if self.state.alive() {
                        self.audio.play(SoundEffect::LifeLost);
                    }
                }
                GameEvent::RoundCleared => self.audio.play(SoundEffect::RoundClear),
                GameEvent::GameOver => {
                    self.audio.play(SoundEffect::GameOver);
                    let rank = self.highscores.add_score(
                        self.state.score,
                        self.state.rounds_cleared,
                        js_sys::Date::now(),
                    );
                    if let Some(rank) = rank {
                        log::info!("New high score, rank {}", rank);
                        self.highscores.save();
                    }
                }
                GameEvent::Restarted => {
                    log::info!("Game restarted");
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = match self.mode {
                AppMode::Breakout => scene::game_scene(&self.state),
                AppMode::Graph => scene::graph_scene(&self.demo, &self.graph_input),
            };

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Update score
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            // Update lives
            if let Some(el) = document.query_selector("#hud-lives .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.lives.to_string()));
            }

            // Update FPS (hidden entirely when the setting is off)
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    if let Some(val) = document.query_selector("#hud-fps .hud-value").ok().flatten()
                    {
                        val.set_text_content(Some(&self.fps.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Show/hide game over ("Press P to play again")
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.mode == AppMode::Breakout && !self.state.alive() {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                    if let Some(best_el) = document.get_element_by_id("best-score") {
                        let best = self.highscores.top_score().unwrap_or(0);
                        best_el.set_text_content(Some(&best.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // HUD only makes sense in breakout mode
            if let Some(el) = document.get_element_by_id("hud") {
                if self.mode == AppMode::Breakout {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Wallbreak starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // `#graph` in the URL starts in the graphing demo
        let mode = match window.location().hash() {
            Ok(hash) if hash == "#graph" => AppMode::Graph,
            _ => AppMode::Breakout,
        };

        let settings = Settings::load();
        let highscores = HighScores::load();
        if settings.debug_mode {
            log::info!("Debug mode: fast ball, autopilot paddle, pointer warp");
        }

        let game = Rc::new(RefCell::new(Game::new(settings, highscores, mode)));
        game.borrow_mut().canvas_size = (client_w as f32, client_h as f32);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_blur_mute(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Wallbreak running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key pressed: held movement/curve keys plus one-shot actions
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = true,
                    "ArrowRight" | "d" | "D" => g.input.right = true,
                    "p" | "P" => g.input.restart = true,
                    "g" | "G" => {
                        g.mode = match g.mode {
                            AppMode::Breakout => AppMode::Graph,
                            AppMode::Graph => AppMode::Breakout,
                        };
                        log::info!("Switched to {:?} mode", g.mode);
                    }
                    "1" => g.graph_input.show[0] = true,
                    "2" => g.graph_input.show[1] = true,
                    "3" => g.graph_input.show[2] = true,
                    "4" => g.graph_input.show[3] = true,
                    "5" => g.graph_input.show[4] = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key released: drop held flags
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = false,
                    "ArrowRight" | "d" | "D" => g.input.right = false,
                    "1" => g.graph_input.show[0] = false,
                    "2" => g.graph_input.show[1] = false,
                    "3" => g.graph_input.show[2] = false,
                    "4" => g.graph_input.show[3] = false,
                    "5" => g.graph_input.show[4] = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click: move the graph origin, or warp the ball in debug mode
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let w = canvas_clone.client_width() as f32;
                let h = canvas_clone.client_height() as f32;
                g.canvas_size = (w, h);
                let pos = g.pos_to_logical(event.offset_x() as f32, event.offset_y() as f32);

                match g.mode {
                    AppMode::Graph => g.graph_input.move_origin = Some(pos),
                    AppMode::Breakout => {
                        if g.settings.debug_mode {
                            g.input.warp_to = Some(pos);
                        }
                    }
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_blur_mute(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Mute when the window loses focus, if the setting asks for it
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().audio.set_muted(false);
            });
            let window = web_sys::window().unwrap();
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Wall-clock delta since the previous frame, passed straight to
            // the sim - no clamping, no fixed-timestep accumulation
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt, time);
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
fn main() {
    env_logger::init();
    log::info!("Wallbreak (native) starting...");
    log::info!("The game shell is browser-only - run with `trunk serve` for the web version");

    // Headless smoke run
    println!("\nRunning headless simulation...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use wallbreak::consts::{PADDLE_WIDTH, SCREEN_WIDTH};
    use wallbreak::sim::{FrameInput, GameState, advance};

    let mut state = GameState::new(true);
    let input = FrameInput::default();

    // Debug autopilot keeps the paddle under the ball, so a long run should
    // chew through bricks without losing a life
    for _ in 0..60 * 60 {
        advance(&mut state, &input, 1.0 / 60.0);
        assert!(state.paddle.pos.x >= 0.0 && state.paddle.pos.x <= SCREEN_WIDTH - PADDLE_WIDTH);
        assert_eq!(state.ball.vel.x.abs(), state.ball.speed.x);
        assert_eq!(state.ball.vel.y.abs(), state.ball.speed.y);
    }

    println!(
        "✓ 60s simulated: score {}, lives {}, rounds {}",
        state.score, state.lives, state.rounds_cleared
    );
}
