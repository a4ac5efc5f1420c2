//! Self-rescheduling frame loop.
//!
//! A `requestAnimationFrame` chain with an explicit run/stop control: the
//! shared token is checked between frames, and stopping lets the closure
//! drop itself on the next tick so the chain ends cleanly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::Engine;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameDriver {
    /// Token for the currently live chain. Each chain gets its own token:
    /// a callback from a stopped chain may still be queued when the next
    /// chain starts, and must never observe a rearmed token.
    running: Rc<Cell<bool>>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Flip the cancellation token; the loop honors it between frames.
    pub fn stop(&self) {
        self.running.set(false);
    }

    /// Install a fresh token for a new chain. Returns `None` while a chain
    /// is already live.
    fn arm(&mut self) -> Option<Rc<Cell<bool>>> {
        if self.running.get() {
            return None;
        }
        let token = Rc::new(Cell::new(true));
        self.running = token.clone();
        Some(token)
    }

    /// Begin the frame chain. A no-op while already running.
    pub fn start(&mut self, engine: Rc<RefCell<Engine>>) -> Result<(), JsValue> {
        let Some(running) = self.arm() else {
            return Ok(());
        };

        let slot: FrameCallback = Rc::new(RefCell::new(None));
        let chain = slot.clone();

        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                // Stopped between frames: drop the closure, ending the chain
                chain.borrow_mut().take();
                return;
            }
            engine.borrow_mut().tick();
            if let Some(callback) = chain.borrow().as_ref() {
                if request_frame(callback).is_err() {
                    running.set(false);
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(callback) = slot.borrow().as_ref() {
            request_frame(callback)?;
        }
        Ok(())
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window for requestAnimationFrame"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
