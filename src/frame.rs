use crate::constants::{PARALLAX_X_PROP, PARALLAX_Y_PROP};
use crate::core::motion::css_px;
use crate::core::ParallaxState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Publishes the parallax offset on the document root, at most once per
/// animation frame.
pub struct ParallaxFrame {
    state: Rc<RefCell<ParallaxState>>,
    tick: Closure<dyn FnMut()>,
}

fn publish(root: &web::HtmlElement, offset: Vec2) {
    let style = root.style();
    _ = style.set_property(PARALLAX_X_PROP, &css_px(offset.x));
    _ = style.set_property(PARALLAX_Y_PROP, &css_px(offset.y));
}

impl ParallaxFrame {
    pub fn new(root: web::HtmlElement) -> Self {
        let state = Rc::new(RefCell::new(ParallaxState::default()));
        let state_tick = state.clone();
        let tick = Closure::wrap(Box::new(move || {
            let offset = state_tick.borrow_mut().take();
            if let Some(offset) = offset {
                publish(&root, offset);
            }
        }) as Box<dyn FnMut()>);
        Self { state, tick }
    }

    /// Record the latest offset; request a frame only if none is pending.
    pub fn push(&self, window: &web::Window, offset: Vec2) {
        if !self.state.borrow_mut().record(offset) {
            return;
        }
        if let Err(e) = window.request_animation_frame(self.tick.as_ref().unchecked_ref()) {
            log::warn!("[parallax] requestAnimationFrame failed: {:?}", e);
            self.state.borrow_mut().cancel();
        }
    }
}
