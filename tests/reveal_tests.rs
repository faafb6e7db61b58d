// Host-side tests for reveal tagging.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::with_class_token;

#[test]
fn tag_adds_class_once() {
    let tagged = with_class_token("paper", "reveal");
    assert_eq!(tagged.as_deref(), Some("paper reveal"));
    // Tagging the result again leaves it alone: no second `reveal`.
    assert_eq!(with_class_token("paper reveal", "reveal"), None);
}

#[test]
fn tag_on_empty_class_name() {
    assert_eq!(with_class_token("", "reveal").as_deref(), Some("reveal"));
    assert_eq!(with_class_token("   ", "reveal").as_deref(), Some("reveal"));
}

#[test]
fn pretagged_elements_are_left_untouched() {
    assert_eq!(with_class_token("reveal", "reveal"), None);
    assert_eq!(with_class_token("route-card  reveal visible", "reveal"), None);
    assert_eq!(with_class_token("\treveal\n", "reveal"), None);
}

#[test]
fn tag_matches_whole_class_names_only() {
    assert_eq!(
        with_class_token("revealed reveal-soon", "reveal").as_deref(),
        Some("revealed reveal-soon reveal")
    );
    assert_eq!(
        with_class_token("now-card ", "reveal").as_deref(),
        Some("now-card reveal")
    );
}

#[test]
fn every_untagged_element_gets_tagged() {
    // Elements are tagged independently; no element's markup can cause
    // another one to be skipped.
    let pages = ["", "paper", "line", "now-card", "paper"];
    for class_name in pages {
        let tagged = with_class_token(class_name, "reveal").expect("untagged element");
        assert_eq!(
            tagged.split_ascii_whitespace().filter(|c| *c == "reveal").count(),
            1
        );
    }
}

#[test]
fn empty_token_is_ignored() {
    assert_eq!(with_class_token("paper", ""), None);
}
