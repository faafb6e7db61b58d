use glam::Vec2;

/// True for links that go nowhere: no `href`, an empty one, or `#`.
#[inline]
pub fn is_placeholder_href(href: Option<&str>) -> bool {
    matches!(href, None | Some("") | Some("#"))
}

/// Square ripple box, in px relative to the button's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleBox {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

/// Ripple sized to the larger side of the button and centered on the click.
pub fn ripple_box(click: Vec2, origin: Vec2, size: Vec2) -> RippleBox {
    let side = size.x.max(size.y).max(0.0);
    let local = click - origin;
    RippleBox {
        size: side,
        left: local.x - side / 2.0,
        top: local.y - side / 2.0,
    }
}
