pub mod click;
pub mod pointer;

pub use click::{wire_buttons, wire_route_cards};
pub use pointer::{wire_parallax, wire_tilt};
