// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_limits_are_sane() {
    assert!(TILT_GAIN_DEG > 0.0);
    assert!(TILT_MAX_DEG > 0.0);
    // A pointer inside the box never reaches the clamp.
    assert!(TILT_GAIN_DEG <= TILT_MAX_DEG);
    assert!(TILT_PERSPECTIVE_PX > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_threshold_is_a_fraction() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_envelopes_decay_to_floor() {
    assert!(GAIN_FLOOR > 0.0);
    assert!(GAIN_FLOOR < CLICK_GAIN);
    assert!(GAIN_FLOOR < WHOOSH_GAIN);
    assert!(CLICK_DURATION_SEC > 0.0 && CLICK_DURATION_SEC < 1.0);
    assert!(WHOOSH_DURATION_SEC > 0.0 && WHOOSH_DURATION_SEC < 1.0);
    assert!(CLICK_FREQ_HZ > 20.0 && CLICK_FREQ_HZ < 20_000.0);
}

#[test]
fn selectors_cover_page_sections() {
    for s in ["header", ".paper", ".route-card", "footer", ".now-card"] {
        assert!(REVEAL_SELECTOR.contains(s), "missing {}", s);
    }
    assert!(TILT_SELECTOR.contains(BUTTON_SELECTOR));
    assert!(TILT_SELECTOR.contains(ROUTE_CARD_SELECTOR));
    assert!(PARALLAX_X_PROP.starts_with("--"));
    assert!(PARALLAX_Y_PROP.starts_with("--"));
}

#[test]
fn labels_are_distinct() {
    assert_ne!(SOUND_ON_LABEL, SOUND_OFF_LABEL);
    assert_ne!(CONTACT_OPEN_LABEL, CONTACT_CLOSED_LABEL);
}
