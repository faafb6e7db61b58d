/// Effect tuning constants.
///
/// These express intended behavior (clamp limits, ranges, envelope times)
/// and keep magic numbers out of the event handlers.
// Tilt: degrees of rotation per unit of normalized pointer offset
pub const TILT_GAIN_DEG: f32 = 4.0;
pub const TILT_MAX_DEG: f32 = 6.0;
pub const TILT_PERSPECTIVE_PX: u32 = 900;

// Parallax: full-viewport sweep in px (offsets land in [-RANGE/2, RANGE/2])
pub const PARALLAX_RANGE_PX: f32 = 8.0;

// Reveal: fraction of an element that must be visible
pub const REVEAL_THRESHOLD: f64 = 0.2;

// Click tone
pub const CLICK_FREQ_HZ: f32 = 900.0;
pub const CLICK_GAIN: f32 = 0.08;
pub const CLICK_DURATION_SEC: f64 = 0.1;

// Whoosh
pub const WHOOSH_GAIN: f32 = 0.05;
pub const WHOOSH_DURATION_SEC: f64 = 0.25;

// Exponential ramps cannot reach zero; this is "silent"
pub const GAIN_FLOOR: f32 = 0.0001;

// Labels
pub const SOUND_ON_LABEL: &str = "Sound: On";
pub const SOUND_OFF_LABEL: &str = "Sound: Off";
pub const CONTACT_OPEN_LABEL: &str = "Close";
pub const CONTACT_CLOSED_LABEL: &str = "Reach me";
