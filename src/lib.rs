use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

pub mod anim;
pub mod config;
pub mod driver;
pub mod render;
pub mod reveal;
pub mod rng;
pub mod scene;

use anim::{Animator, Phase, Transition};
use config::Config;
use driver::FrameDriver;
use render::{render_frame, Surface};
use reveal::TextReveal;
use rng::Lcg;
use scene::Scene;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The animation context the frame driver owns: surface, scene, state
/// machine, and the text-reveal subscriber.
pub struct Engine {
    config: Config,
    surface: Surface,
    scene: Scene,
    animator: Animator,
    reveal: TextReveal,
}

impl Engine {
    /// Size the surface, then generate the scene once from the resulting
    /// logical dimensions.
    pub fn new(canvas: HtmlCanvasElement, config: Config, seed: u32) -> Result<Self, JsValue> {
        let surface = Surface::new(canvas)?;
        let size = surface.size();
        let mut rng = Lcg::new(seed);
        let scene = Scene::generate(
            &config,
            size.logical_width as f32,
            size.logical_height as f32,
            &mut rng,
        );

        Ok(Self {
            config,
            surface,
            scene,
            animator: Animator::new(),
            reveal: TextReveal::new(&config),
        })
    }

    /// Run one frame. Errors cannot propagate through the animation-frame
    /// callback, so they are reported to the console instead.
    pub fn tick(&mut self) {
        if let Err(err) = self.frame() {
            web_sys::console::error_1(&err);
        }
    }

    fn frame(&mut self) -> Result<(), JsValue> {
        let transition = self.animator.advance(&mut self.scene, &self.config);
        render_frame(
            &self.surface,
            &self.scene,
            self.animator.phase,
            self.animator.frame,
            &self.config,
        );
        self.animator.end_frame();

        if transition == Some(Transition::Bloomed) {
            self.reveal.trigger()?;
        }
        Ok(())
    }

    /// Re-derive surface dimensions. The scene is not regenerated; its
    /// layout keeps the proportions it was generated with.
    pub fn resize(&mut self) -> Result<(), JsValue> {
        self.surface.resize()
    }

    pub fn phase(&self) -> Phase {
        self.animator.phase
    }

    pub fn frame_count(&self) -> u64 {
        self.animator.frame
    }
}

/// Engine handle exposed to JavaScript.
#[wasm_bindgen]
pub struct HeartBloomTree {
    engine: Rc<RefCell<Engine>>,
    driver: FrameDriver,
}

#[wasm_bindgen]
impl HeartBloomTree {
    /// Create the engine on a given canvas and subscribe the window resize
    /// listener for the life of the program.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<HeartBloomTree, JsValue> {
        let config = Config::default();
        let seed = js_sys::Date::now() as u32;
        let engine = Rc::new(RefCell::new(Engine::new(canvas, config, seed)?));
        subscribe_resize(engine.clone())?;

        Ok(Self {
            engine,
            driver: FrameDriver::new(),
        })
    }

    /// Look the canvas up by its fixed element id and build the engine.
    pub fn mount() -> Result<HeartBloomTree, JsValue> {
        let config = Config::default();
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(config.canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()?;
        Self::new(canvas)
    }

    /// Start the self-rescheduling frame loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.driver.start(self.engine.clone())
    }

    /// Stop the loop; honored between frames.
    pub fn stop(&self) {
        self.driver.stop();
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Single-step one frame without the loop running.
    pub fn tick(&self) {
        self.engine.borrow_mut().tick();
    }

    pub fn resize(&self) -> Result<(), JsValue> {
        self.engine.borrow_mut().resize()
    }

    /// Current phase name, for the host page
    pub fn phase(&self) -> String {
        format!("{:?}", self.engine.borrow().phase())
    }

    pub fn frame_count(&self) -> f64 {
        self.engine.borrow().frame_count() as f64
    }
}

fn subscribe_resize(engine: Rc<RefCell<Engine>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(move || {
        if let Err(err) = engine.borrow_mut().resize() {
            web_sys::console::error_1(&err);
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    // The resize subscription lives for the program's lifetime
    closure.forget();
    Ok(())
}
