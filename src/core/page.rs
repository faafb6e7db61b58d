/// Whether wiring must wait for `DOMContentLoaded`, given
/// `document.readyState`.
#[inline]
pub fn defers_until_ready(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Which motion effects to wire for the user's motion preference.
///
/// Reduced motion only changes how reveal targets appear; tilt and parallax
/// stay wired like on any other page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotionPlan {
    pub observe_reveal: bool,
    pub tilt: bool,
    pub parallax: bool,
}

impl MotionPlan {
    pub fn for_preference(reduced_motion: bool) -> Self {
        Self {
            observe_reveal: !reduced_motion,
            tilt: true,
            parallax: true,
        }
    }
}
