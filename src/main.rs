//! Dino Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use dino_run::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use dino_run::hud::Hud;
    use dino_run::platform::LocalStorage;
    use dino_run::renderer::{DrawList, RenderState};
    use dino_run::{Game, Settings, Tuning};

    /// HUD backed by the page's DOM elements
    struct DomHud {
        score: Option<Element>,
        best: Option<Element>,
        hint: Option<Element>,
        game_over: Option<Element>,
        fps: Option<Element>,
    }

    impl DomHud {
        fn new(document: &Document) -> Self {
            Self {
                score: document.get_element_by_id("score"),
                best: document.get_element_by_id("highScore"),
                hint: document.get_element_by_id("controlHint"),
                game_over: document.get_element_by_id("gameOver"),
                fps: document.get_element_by_id("fps"),
            }
        }
    }

    fn set_text(el: &Option<Element>, text: &str) {
        if let Some(el) = el {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(el: &Option<Element>, visible: bool) {
        if let Some(el) = el {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }

    impl Hud for DomHud {
        fn set_score(&mut self, text: &str) {
            set_text(&self.score, text);
        }

        fn set_best(&mut self, text: &str) {
            set_text(&self.best, text);
        }

        fn set_hint_visible(&mut self, visible: bool) {
            set_visible(&self.hint, visible);
        }

        fn set_game_over_visible(&mut self, visible: bool) {
            set_visible(&self.game_over, visible);
        }

        fn set_fps(&mut self, fps: Option<u32>) {
            match fps {
                Some(fps) => {
                    set_text(&self.fps, &format!("{} fps", fps));
                    set_visible(&self.fps, true);
                }
                None => set_visible(&self.fps, false),
            }
        }
    }

    /// Everything the animation frame and input closures share
    struct App {
        game: Game<LocalStorage, DomHud>,
        render_state: RenderState,
        draw_list: DrawList,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            let App {
                game,
                render_state,
                draw_list,
            } = self;

            draw_list.clear();
            let gate = game.frame(time, draw_list);
            if !gate.draw {
                return;
            }

            match render_state.render(draw_list) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn js_err(msg: &str) -> JsValue {
        JsValue::from_str(msg)
    }

    pub async fn run() -> Result<(), JsValue> {
        log::info!("Dino Run starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| js_err("no canvas"))?
            .dyn_into()?;

        // Backing store follows the device pixel ratio; drawing stays in canvas units
        let dpr = window.device_pixel_ratio();
        let width = (CANVAS_WIDTH as f64 * dpr) as u32;
        let height = (CANVAS_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| js_err(&format!("failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| js_err(&format!("no adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| js_err(&e.to_string()))?;

        let query = window.location().search().unwrap_or_default();
        let settings = Settings::from_query(&query);
        log::info!("Settings: {:?}", settings);
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            seed,
            Tuning::default(),
            settings,
            LocalStorage::new(),
            DomHud::new(&document),
        );

        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            draw_list: DrawList::new(),
        }));

        setup_input_handlers(&document, &canvas, app.clone())?;
        request_animation_frame(app);

        log::info!("Dino Run running!");
        Ok(())
    }

    fn setup_input_handlers(
        document: &Document,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_down(&event.code(), &event.key()) {
                    event.prevent_default();
                }
            });
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.key_up(&event.code(), &event.key()) {
                    event.prevent_default();
                }
            });
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.pointer_down();
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch (suppress the synthesized mouse events and scrolling)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().game.touch_start();
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, animation loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    if let Err(e) = wasm_game::run().await {
        log::error!("Dino Run failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dino Run (native) starting headless autopilot run...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Windowless run: the autopilot plays one game against a simulated 60 Hz display
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::str::FromStr;

    use dino_run::hud::HeadlessHud;
    use dino_run::platform::MemoryStore;
    use dino_run::renderer::DrawList;
    use dino_run::sim::GamePhase;
    use dino_run::{Game, QualityPreset, Settings, Tuning};

    const DISPLAY_HZ: f64 = 60.0;

    fn env_or<T: FromStr>(name: &str, default: T) -> T {
        match std::env::var(name) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unparsable {}={:?}", name, raw);
                default
            }),
            Err(_) => default,
        }
    }

    fn load_tuning() -> Tuning {
        let Ok(path) = std::env::var("DINO_TUNING") else {
            return Tuning::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loading tuning from {}", path);
                Tuning::from_json_or_default(&json)
            }
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path, e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        let seed: u64 = env_or("DINO_SEED", 42);
        let max_ticks: u64 = env_or("DINO_MAX_TICKS", 20_000);
        let quality: QualityPreset = env_or("DINO_QUALITY", QualityPreset::default());

        let mut game = Game::new(
            seed,
            load_tuning(),
            Settings::from_preset(quality),
            MemoryStore::new(),
            HeadlessHud::default(),
        );
        game.set_autopilot(true);
        game.pointer_down();

        let mut surface = DrawList::new();
        let mut draw_calls = 0usize;
        let mut frames = 0u64;
        // The first callback only paints, so one extra frame yields max_ticks steps
        while game.state().frame_count < max_ticks && game.phase() == GamePhase::Playing {
            surface.clear();
            let now = frames as f64 * 1000.0 / DISPLAY_HZ;
            let gate = game.frame(now, &mut surface);
            if gate.draw {
                draw_calls += surface.len();
            }
            frames += 1;
        }

        log::info!(
            "Run {} finished after {} ticks ({} draw calls): score {}, best {}",
            game.state().seed,
            game.state().frame_count,
            draw_calls,
            game.hud().score,
            game.hud().best
        );
        if game.phase() == GamePhase::Playing {
            log::info!("Tick limit reached, autopilot still running");
        }
    }
}
