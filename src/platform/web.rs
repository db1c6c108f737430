//! Browser bindings and the frame loop
//!
//! The host page constructs an [`ArcadeApp`] per mini-game, forwards pointer
//! and keyboard events as commands, and draws each frame from
//! `snapshot_json`. The engine never touches the canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::engine::Engine;
use crate::sim::config::ModeConfig;

/// Cancellable `requestAnimationFrame` loop
///
/// Owns the pending callback id; cancelling both unschedules the callback
/// and flags any in-flight one to bail before ticking.
struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    fn new() -> Self {
        Self {
            raf_id: Rc::new(Cell::new(None)),
            running: Rc::new(Cell::new(false)),
        }
    }

    fn start(&self, engine: Rc<RefCell<Engine>>) -> Result<(), JsValue> {
        if self.running.get() {
            return Ok(());
        }
        self.running.set(true);
        schedule(self.raf_id.clone(), self.running.clone(), engine)
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run one tick and re-arm the callback for the next frame
fn schedule(
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    engine: Rc<RefCell<Engine>>,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let closure = {
        let raf_id = raf_id.clone();
        let running = running.clone();
        Closure::once(move |_time: f64| {
            if !running.get() {
                return;
            }
            engine.borrow_mut().frame();
            if let Err(err) = schedule(raf_id, running, engine) {
                log::error!("Frame scheduling failed: {err:?}");
            }
        })
    };

    let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    raf_id.set(Some(id));
    closure.forget();
    Ok(())
}

/// Browser-facing engine wrapper driven by the host page
#[wasm_bindgen]
pub struct ArcadeApp {
    engine: Rc<RefCell<Engine>>,
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl ArcadeApp {
    /// Create an engine for `mode`: `"runner"` or `"puzzle"`
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str) -> Result<ArcadeApp, JsValue> {
        init_logging();

        let config = match mode {
            "runner" => ModeConfig::runner(),
            "puzzle" => ModeConfig::puzzle(),
            other => return Err(JsValue::from_str(&format!("unknown mode: {other}"))),
        };
        let seed = js_sys::Date::now() as u64;

        Ok(Self {
            engine: Rc::new(RefCell::new(Engine::new(config, seed))),
            frame_loop: FrameLoop::new(),
        })
    }

    /// Begin the playthrough and the frame loop
    pub fn start(&self) -> Result<(), JsValue> {
        self.engine.borrow_mut().start_game();
        self.frame_loop.start(self.engine.clone())
    }

    /// Tear down the frame loop. No tick runs after this returns.
    pub fn stop(&self) {
        self.frame_loop.cancel();
    }

    pub fn restart(&self) {
        self.engine.borrow_mut().restart();
    }

    pub fn jump(&self) {
        self.engine.borrow_mut().jump();
    }

    pub fn drag_start(&self, x: f32, y: f32) {
        self.engine.borrow_mut().drag_start(x, y);
    }

    pub fn drag_move(&self, x: f32, y: f32) {
        self.engine.borrow_mut().drag_move(x, y);
    }

    pub fn drag_release(&self) {
        self.engine.borrow_mut().drag_release();
    }

    /// Current frame as JSON for the canvas renderer
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.borrow().snapshot())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    });
}
