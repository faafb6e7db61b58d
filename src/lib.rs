#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panels;
mod reveal;

/// Owns the page-session state and wires every behavior once.
struct InteractionController {
    window: web::Window,
    document: web::Document,
    sound: Rc<RefCell<audio::SoundBoard>>,
    reduced_motion: bool,
}

impl InteractionController {
    fn new(window: web::Window, document: web::Document) -> Self {
        Self {
            window,
            document,
            sound: Rc::new(RefCell::new(audio::SoundBoard::default())),
            reduced_motion: dom::prefers_reduced_motion(constants::REDUCED_MOTION_QUERY),
        }
    }

    fn wire(&self) {
        let doc = &self.document;
        let plan = core::MotionPlan::for_preference(self.reduced_motion);
        if self.reduced_motion {
            log::info!("[motion] reduced motion requested; reveal targets shown at once");
        }
        reveal::wire(doc, plan.observe_reveal);
        if plan.tilt {
            events::wire_tilt(doc);
        }
        if plan.parallax {
            events::wire_parallax(doc, self.window.clone());
        }
        audio::wire_toggle(doc, &self.sound);
        let buttons = events::wire_buttons(doc, &self.sound);
        let cards = events::wire_route_cards(doc, &self.sound);
        let spotlight = panels::wire_spotlight(doc, &self.sound);
        let contact = panels::wire_contact_bar(doc);
        log::info!(
            "interactions ready: buttons={} cards={} spotlight={} contact={}",
            buttons,
            cards,
            spotlight,
            contact
        );
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if core::defers_until_ready(&document.ready_state()) {
        let doc = document.clone();
        dom::add_listener_once(&document, "DOMContentLoaded", move || {
            run_once(window, doc)
        });
    } else {
        run_once(window, document);
    }
    Ok(())
}

fn run_once(window: web::Window, document: web::Document) {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    // The controller's state lives on in the listeners it installs.
    InteractionController::new(window, document).wire();
}
