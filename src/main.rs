//! Antigravity entry point
//!
//! Web: wires the page (canvas, scroll, taps, HUD) to the game loop.
//! Native: runs a headless self-playing session and prints the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent, TouchEvent};

    use antigravity::Game;
    use antigravity::platform::{LocalStore, NextFrame};
    use antigravity::renderer::CanvasSurface;
    use antigravity::sim::GameEvent;

    /// Fraction of the viewport height to scroll before game mode starts
    const SCROLL_THRESHOLD: f64 = 0.3;
    /// Host chrome that swallows taps
    const CHROME_SELECTOR: &str = "a, button, .overlay";
    const PAUSE_ICON: &str = r#"<i class="fa-solid fa-pause"></i>"#;
    const PLAY_ICON: &str = r#"<i class="fa-solid fa-play"></i>"#;

    /// Game plus the surface it draws on
    struct App {
        game: Game<LocalStore>,
        surface: CanvasSurface,
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn viewport() -> (f64, f64) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (w, h)
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let result = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
            if let Err(e) = result {
                log::warn!("Could not toggle #{}: {:?}", id, e);
            }
        }
    }

    fn set_pause_icon(document: &Document, paused: bool) {
        if let Some(btn) = document.get_element_by_id("pause-btn") {
            btn.set_inner_html(if paused { PLAY_ICON } else { PAUSE_ICON });
        }
    }

    /// Reflect game events in the HUD and overlays
    fn update_hud(events: &[GameEvent]) {
        let Some(document) = document() else {
            return;
        };
        for event in events {
            match *event {
                GameEvent::ScoreChanged(score) => {
                    set_text(&document, "current-score", &score.to_string());
                }
                GameEvent::NewBest(best) => {
                    set_text(&document, "best-score", &best.to_string());
                }
                GameEvent::GameOver { .. } => set_hidden(&document, "game-over", false),
                GameEvent::Activated | GameEvent::Deactivated => {
                    set_hidden(&document, "game-over", true);
                    set_hidden(&document, "paused", true);
                    set_pause_icon(&document, false);
                }
                GameEvent::Paused => {
                    set_hidden(&document, "paused", false);
                    set_pause_icon(&document, true);
                }
                GameEvent::Resumed => {
                    set_hidden(&document, "paused", true);
                    set_pause_icon(&document, false);
                }
            }
        }
    }

    /// Whether the pointer landed on host chrome rather than the field
    fn on_chrome(target: Option<web_sys::EventTarget>) -> bool {
        target
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(CHROME_SELECTOR).ok().flatten())
            .is_some()
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Antigravity starting...");

        let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("antigravity-canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let (w, h) = viewport();
        let surface = CanvasSurface::new(canvas)?;
        surface.resize(w as u32, h as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(LocalStore::new(), seed, w as f32, h as f32);
        set_text(&document, "best-score", &game.best_score().to_string());

        let app = Rc::new(RefCell::new(App { game, surface }));

        setup_resize(app.clone())?;
        setup_scroll(app.clone())?;
        setup_taps(app.clone())?;
        setup_buttons(app.clone(), &document)?;
        setup_auto_pause(app.clone(), &document)?;

        request_animation_frame(app);

        log::info!("Antigravity running!");
        Ok(())
    }

    fn setup_resize(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = viewport();
            let mut a = app.borrow_mut();
            a.surface.resize(w as u32, h as u32);
            a.game.resize(w as f32, h as f32);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_scroll(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = document() else {
                return;
            };
            let (_, h) = viewport();
            let scrolled = window.scroll_y().unwrap_or(0.0);

            let mut a = app.borrow_mut();
            if scrolled > h * SCROLL_THRESHOLD {
                a.game.enter_game_mode();
                set_hidden(&document, "hud", false);
            } else {
                a.game.exit_game_mode();
                set_hidden(&document, "hud", true);
            }
            let events = a.game.drain_events();
            drop(a);
            update_hud(&events);
        });
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn tap(app: &Rc<RefCell<App>>, x: f32, y: f32, on_field: bool) {
        let mut a = app.borrow_mut();
        a.game.tap(x, y, on_field);
        let events = a.game.drain_events();
        drop(a);
        update_hud(&events);
    }

    fn setup_taps(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Mouse
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let on_field = !on_chrome(event.target());
                tap(&app, event.client_x() as f32, event.client_y() as f32, on_field);
            });
            window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch (first finger only)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let on_field = !on_chrome(event.target());
                if let Some(touch) = event.touches().get(0) {
                    tap(&app, touch.client_x() as f32, touch.client_y() as f32, on_field);
                }
            });
            window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(app: Rc<RefCell<App>>, document: &Document) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                a.game.toggle_pause();
                let events = a.game.drain_events();
                drop(a);
                update_hud(&events);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.game.restart() {
                    log::info!("Game restarted");
                }
                let events = a.game.drain_events();
                drop(a);
                update_hud(&events);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>, document: &Document) -> Result<(), JsValue> {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() != web_sys::VisibilityState::Hidden {
                return;
            }
            let mut a = app.borrow_mut();
            if a.game.state().is_playing() {
                a.game.toggle_pause();
                log::info!("Auto-paused (tab hidden)");
            }
            let events = a.game.drain_events();
            drop(a);
            update_hud(&events);
        });
        document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let mut next = NextFrame::default();
        let events = {
            let mut guard = app.borrow_mut();
            let a = &mut *guard;
            a.game.frame(&mut a.surface, &mut next);
            a.game.drain_events()
        };
        update_hud(&events);

        if next.requested {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Antigravity failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Antigravity (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let mut args = std::env::args().skip(1);
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);
    let tuning_path = args.next();

    let outcome = headless::run(frames, tuning_path.as_deref());
    println!(
        "\nPlayed {} frames: score {}, best {}, mode {:?}",
        outcome.frames, outcome.score, outcome.best, outcome.mode
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Self-playing session used by the native binary
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use antigravity::Game;
    use antigravity::Tuning;
    use antigravity::platform::{MemoryStore, NextFrame};
    use antigravity::renderer::RecordingSurface;
    use antigravity::sim::{GameEvent, GameState, Mode, OrbKind};

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 720.0;
    /// Frames between autoplayer taps
    const TAP_EVERY: u64 = 12;

    pub struct Outcome {
        pub frames: u64,
        pub score: u32,
        pub best: u32,
        pub mode: Mode,
    }

    /// Highest on-screen orb that is safe to tap
    fn pick_target(state: &GameState) -> Option<(f32, f32)> {
        state
            .live_orbs()
            .filter(|o| o.kind != OrbKind::Hazard && o.pos.y < state.bounds.height)
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|o| (o.pos.x, o.pos.y))
    }

    pub fn run(frames: u64, tuning_path: Option<&str>) -> Outcome {
        let mut store = MemoryStore::new();
        if let Some(path) = tuning_path {
            match std::fs::read_to_string(path) {
                Ok(json) => store.insert(Tuning::STORAGE_KEY, &json),
                Err(e) => log::warn!("Could not read tuning file {}: {}", path, e),
            }
        }

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut game = Game::new(store, seed, WIDTH, HEIGHT);
        let mut surface = RecordingSurface::new(WIDTH, HEIGHT);
        game.enter_game_mode();

        let mut played = 0;
        for frame in 0..frames {
            let mut next = NextFrame::default();
            game.frame(&mut surface, &mut next);
            played = frame + 1;

            if frame % TAP_EVERY == 0 {
                if let Some((x, y)) = pick_target(game.state()) {
                    game.tap(x, y, true);
                }
            }

            for event in game.drain_events() {
                match event {
                    GameEvent::GameOver { score } => log::info!("Run over at {}", score),
                    GameEvent::NewBest(best) => log::info!("New best {}", best),
                    _ => {}
                }
            }

            if game.state().is_over() || !next.requested {
                break;
            }
        }

        game.stop();
        Outcome {
            frames: played,
            score: game.score(),
            best: game.best_score(),
            mode: game.mode(),
        }
    }
}
