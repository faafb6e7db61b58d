// Page hooks queried by the interaction controller.
//
// The markup and stylesheet are owned by the page; these names are the
// contract between them and this crate.

// Reveal-on-scroll
pub const REVEAL_SELECTOR: &str =
    "header, .paper, .route-card, .line, footer, .roadmap, .spotlight, .now-card";
pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "visible";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Pointer tilt
pub const TILT_SELECTOR: &str = ".route-card, .btn";

// Parallax custom properties on the document root
pub const PARALLAX_X_PROP: &str = "--parallax-x";
pub const PARALLAX_Y_PROP: &str = "--parallax-y";

// Buttons and cards
pub const BUTTON_SELECTOR: &str = ".btn";
pub const ROUTE_CARD_SELECTOR: &str = ".route-card";
pub const RIPPLE_CLASS: &str = "ripple";

// Sound toggle
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";

// Spotlight toggle
pub const SPOTLIGHT_TOGGLE_ID: &str = "spotlight-toggle";
pub const ENGINEER_PANEL_SELECTOR: &str = ".spotlight-panel.engineer";
pub const DIRECTOR_PANEL_SELECTOR: &str = ".spotlight-panel.director";
pub const ACTIVE_CLASS: &str = "active";

// Contact bar
pub const CONTACT_TOGGLE_ID: &str = "contact-toggle";
pub const CONTACT_BAR_ID: &str = "contact-bar";
pub const OPEN_CLASS: &str = "open";
