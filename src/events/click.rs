use crate::audio::SoundBoard;
use crate::constants::{BUTTON_SELECTOR, RIPPLE_CLASS, ROUTE_CARD_SELECTOR};
use crate::core::motion::css_px;
use crate::core::ripple::RippleBox;
use crate::core::{is_placeholder_href, ripple_box};
use crate::dom::{self, js_err};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn spawn_ripple(document: &web::Document, button: &web::HtmlElement, b: RippleBox) -> anyhow::Result<()> {
    let ripple = document
        .create_element("span")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("span is not an HtmlElement: {:?}", e))?;
    ripple.set_class_name(RIPPLE_CLASS);
    let style = ripple.style();
    let side = css_px(b.size);
    style.set_property("width", &side).map_err(js_err)?;
    style.set_property("height", &side).map_err(js_err)?;
    style.set_property("left", &css_px(b.left)).map_err(js_err)?;
    style.set_property("top", &css_px(b.top)).map_err(js_err)?;
    button.append_child(&ripple).map_err(js_err)?;

    let done = ripple.clone();
    dom::add_listener_once(&ripple, "animationend", move || done.remove());
    Ok(())
}

/// Ripple + click tone on every `.btn`; placeholder links do not navigate.
pub fn wire_buttons(document: &web::Document, sound: &Rc<RefCell<SoundBoard>>) -> usize {
    let buttons = dom::query_all(document, BUTTON_SELECTOR);
    for btn in &buttons {
        let btn_click = btn.clone();
        let doc = document.clone();
        let sound = sound.clone();
        dom::add_listener(btn, "click", move |ev: web::MouseEvent| {
            if is_placeholder_href(btn_click.get_attribute("href").as_deref()) {
                ev.prevent_default();
            }
            let rect = btn_click.get_bounding_client_rect();
            let b = ripple_box(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            if let Err(e) = spawn_ripple(&doc, &btn_click, b) {
                log::error!("[click] ripple failed: {:?}", e);
            }
            sound.borrow().play_click();
        });
    }
    log::debug!("[click] {} buttons", buttons.len());
    buttons.len()
}

/// Whoosh when the pointer enters a route card.
pub fn wire_route_cards(document: &web::Document, sound: &Rc<RefCell<SoundBoard>>) -> usize {
    let cards = dom::query_all(document, ROUTE_CARD_SELECTOR);
    for card in &cards {
        let sound = sound.clone();
        dom::add_listener(card, "mouseenter", move |_: web::MouseEvent| {
            sound.borrow().play_whoosh();
        });
    }
    cards.len()
}
