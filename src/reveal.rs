use crate::constants::{REVEAL_CLASS, REVEAL_SELECTOR, VISIBLE_CLASS};
use crate::core::constants::REVEAL_THRESHOLD;
use crate::core::with_class_token;
use crate::dom::{self, js_err};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// Idempotent: an element already carrying the class is left untouched.
fn tag(el: &web::Element) {
    if let Some(class_name) = with_class_token(&el.class_name(), REVEAL_CLASS) {
        el.set_class_name(&class_name);
    }
}

fn show(el: &web::Element) {
    _ = el.class_list().add_1(VISIBLE_CLASS);
}

fn build_observer() -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                // Unobserving here is what keeps each element to one reveal.
                let target = entry.target();
                observer.unobserve(&target);
                show(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(js_err)?;
    callback.forget();
    Ok(observer)
}

/// Tag every reveal target and mark it visible when 20% of it scrolls into
/// view. Without an observer, or with `observe` off, targets show at once.
pub fn wire(document: &web::Document, observe: bool) -> usize {
    // query_all yields each matching element once, so each is observed once.
    let targets = dom::query_all(document, REVEAL_SELECTOR);

    let observer = if observe {
        match build_observer() {
            Ok(o) => Some(o),
            Err(e) => {
                log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
                None
            }
        }
    } else {
        None
    };

    for el in &targets {
        tag(el);
        match &observer {
            Some(observer) => observer.observe(el),
            None => show(el),
        }
    }
    log::info!(
        "[reveal] {} targets ({})",
        targets.len(),
        if observer.is_some() { "observed" } else { "shown" }
    );
    targets.len()
}
