use crate::constants::TILT_SELECTOR;
use crate::core::{parallax_offset, tilt_for_pointer};
use crate::dom;
use crate::frame::ParallaxFrame;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
fn rect_origin_size(el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    (
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

/// Tilt cards and buttons toward the pointer; flatten them on leave.
pub fn wire_tilt(document: &web::Document) -> usize {
    let targets = dom::query_all(document, TILT_SELECTOR);
    for el in &targets {
        let el_move = el.clone();
        dom::add_listener(el, "pointermove", move |ev: web::PointerEvent| {
            let (origin, size) = rect_origin_size(&el_move);
            let tilt = tilt_for_pointer(client_pos(&ev), origin, size);
            _ = el_move
                .style()
                .set_property("transform", &tilt.css_transform());
        });

        let el_leave = el.clone();
        dom::add_listener(el, "pointerleave", move |_: web::PointerEvent| {
            _ = el_leave.style().remove_property("transform");
        });
    }
    log::debug!("[tilt] {} targets", targets.len());
    targets.len()
}

/// Track the pointer page-wide and feed the parallax frame publisher.
pub fn wire_parallax(document: &web::Document, window: web::Window) {
    let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::warn!("[parallax] no root element");
        return;
    };
    let frame = ParallaxFrame::new(root);
    dom::add_listener(document, "pointermove", move |ev: web::PointerEvent| {
        let viewport = Vec2::new(
            window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
            window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
        );
        frame.push(&window, parallax_offset(client_pos(&ev), viewport));
    });
}
