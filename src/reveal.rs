//! One-shot staged text reveal.
//!
//! Subscribes to the bloom-completion transition: every element carrying
//! the line class becomes visible after an increasing delay, in document
//! order. The timers only touch DOM class state, never the frame loop.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::Config;

/// Reveal delay for each line: base delay for the first, a fixed step more
/// for every subsequent one.
pub fn stagger_delays(count: usize, base_ms: i32, step_ms: i32) -> Vec<i32> {
    (0..count).map(|i| base_ms + step_ms * i as i32).collect()
}

pub struct TextReveal {
    line_class: &'static str,
    visible_class: &'static str,
    base_ms: i32,
    step_ms: i32,
    fired: bool,
}

impl TextReveal {
    pub fn new(config: &Config) -> Self {
        Self {
            line_class: config.line_class,
            visible_class: config.visible_class,
            base_ms: config.reveal_base_ms,
            step_ms: config.reveal_step_ms,
            fired: false,
        }
    }

    /// Consume the one-shot trigger. Returns true only the first time.
    fn take_trigger(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    /// Schedule the reveal timers. At most once per instance, no matter how
    /// often it is invoked.
    pub fn trigger(&mut self) -> Result<(), JsValue> {
        if !self.take_trigger() {
            return Ok(());
        }

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let lines = document.query_selector_all(&format!(".{}", self.line_class))?;
        let delays = stagger_delays(lines.length() as usize, self.base_ms, self.step_ms);

        for (i, delay) in delays.into_iter().enumerate() {
            let Some(node) = lines.item(i as u32) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            let class_list = element.class_list();
            let visible_class = self.visible_class;
            let callback = Closure::once_into_js(move || {
                // Timer callbacks cannot propagate errors; report instead
                if let Err(err) = class_list.add_1(visible_class) {
                    web_sys::console::error_1(&err);
                }
            });
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay,
            )?;
        }
        Ok(())
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delays(4, 100, 800), vec![100, 900, 1700, 2500]);
        assert_eq!(stagger_delays(0, 100, 800), Vec::<i32>::new());
        assert_eq!(stagger_delays(1, 100, 800), vec![100]);
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut reveal = TextReveal::new(&Config::default());
        assert!(!reveal.has_fired());
        assert!(reveal.take_trigger());
        assert!(reveal.has_fired());
        assert!(!reveal.take_trigger());
        assert!(!reveal.take_trigger());
    }
}
