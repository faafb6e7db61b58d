pub mod constants;
pub mod motion;
pub mod page;
pub mod reveal;
pub mod ripple;
pub mod sound;
pub mod toggles;

pub use motion::{parallax_offset, tilt_for_pointer, ParallaxState};
pub use page::{defers_until_ready, MotionPlan};
pub use reveal::with_class_token;
pub use ripple::{is_placeholder_href, ripple_box};
pub use sound::SoundState;
pub use toggles::{aria_bool, ContactBar, Spotlight};
