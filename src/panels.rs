use crate::audio::SoundBoard;
use crate::constants::{
    ACTIVE_CLASS, CONTACT_BAR_ID, CONTACT_TOGGLE_ID, DIRECTOR_PANEL_SELECTOR,
    ENGINEER_PANEL_SELECTOR, OPEN_CLASS, SPOTLIGHT_TOGGLE_ID,
};
use crate::core::{aria_bool, ContactBar, Spotlight};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct SpotlightParts {
    toggle: web::HtmlElement,
    engineer: web::HtmlElement,
    director: web::HtmlElement,
}

impl SpotlightParts {
    fn apply(&self, state: Spotlight) {
        dom::set_class(&self.toggle, ACTIVE_CLASS, state.is_director());
        dom::set_attr(&self.toggle, "aria-pressed", aria_bool(state.is_director()));
        dom::set_class(&self.engineer, ACTIVE_CLASS, state.engineer_active());
        dom::set_class(&self.director, ACTIVE_CLASS, state.director_active());
    }
}

/// Engineer/director panel switch. Needs the toggle and both panels.
pub fn wire_spotlight(document: &web::Document, sound: &Rc<RefCell<SoundBoard>>) -> bool {
    let (Some(toggle), Some(engineer), Some(director)) = (
        dom::element_by_id(document, SPOTLIGHT_TOGGLE_ID),
        dom::query_one(document, ENGINEER_PANEL_SELECTOR),
        dom::query_one(document, DIRECTOR_PANEL_SELECTOR),
    ) else {
        log::debug!("[spotlight] toggle or panels missing; skipped");
        return false;
    };
    let parts = SpotlightParts {
        toggle: toggle.clone(),
        engineer,
        director,
    };
    let mut state = Spotlight::default();
    let sound = sound.clone();
    dom::add_listener(&toggle, "click", move |_: web::MouseEvent| {
        state = state.toggled();
        parts.apply(state);
        sound.borrow().play_click();
        log::info!("[spotlight] {}", state.as_str());
    });
    true
}

fn apply_contact(toggle: &web::Element, bar: &web::Element, state: ContactBar) {
    let view = state.view();
    dom::set_class(bar, OPEN_CLASS, view.open_class);
    dom::set_attr(toggle, "aria-expanded", view.aria_expanded);
    dom::set_attr(bar, "aria-hidden", view.aria_hidden);
    dom::set_label(toggle, view.label);
}

/// Collapsible contact bar. Starts closed; the bar's `open` class is the
/// source of truth for the next click.
pub fn wire_contact_bar(document: &web::Document) -> bool {
    let (Some(toggle), Some(bar)) = (
        dom::element_by_id(document, CONTACT_TOGGLE_ID),
        dom::element_by_id(document, CONTACT_BAR_ID),
    ) else {
        log::debug!("[contact] toggle or bar missing; skipped");
        return false;
    };
    apply_contact(&toggle, &bar, ContactBar::closed());

    let toggle_click = toggle.clone();
    dom::add_listener(&toggle, "click", move |_: web::MouseEvent| {
        let current = ContactBar {
            open: bar.class_list().contains(OPEN_CLASS),
        };
        let next = current.toggled();
        apply_contact(&toggle_click, &bar, next);
        log::info!("[contact] open={}", next.open);
    });
    true
}
