// Host-side tests for startup and motion-preference decisions.

#![allow(dead_code)]
mod page {
    include!("../src/core/page.rs");
}

use page::*;

#[test]
fn wiring_waits_only_while_loading() {
    assert!(defers_until_ready("loading"));
    assert!(!defers_until_ready("interactive"));
    assert!(!defers_until_ready("complete"));
}

#[test]
fn default_motion_wires_everything() {
    assert_eq!(
        MotionPlan::for_preference(false),
        MotionPlan {
            observe_reveal: true,
            tilt: true,
            parallax: true
        }
    );
}

#[test]
fn reduced_motion_only_skips_reveal_observation() {
    let plan = MotionPlan::for_preference(true);
    assert!(!plan.observe_reveal);
    assert!(plan.tilt);
    assert!(plan.parallax);
}
