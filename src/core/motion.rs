// Pointer-driven motion: card tilt and background parallax.
//
// Everything here is plain math over client-space coordinates so the
// handlers in `events::pointer` stay thin and this file can be tested on
// the host.

use super::constants::{PARALLAX_RANGE_PX, TILT_GAIN_DEG, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};
use glam::Vec2;

/// 3D rotation (degrees) applied to a hovered element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    /// Inline `transform` value for this tilt.
    pub fn css_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y
        )
    }
}

// Folds -0.0 into 0.0 and non-finite values into 0.0
#[inline]
fn tidy(v: f32) -> f32 {
    if v.is_finite() {
        v + 0.0
    } else {
        0.0
    }
}

/// Pointer offset from the box center, normalized by the half-extents.
///
/// Inside the box both axes land in [-1, 1]; outside they grow past it and
/// the caller clamps. A degenerate axis (zero or negative extent) yields 0.
#[inline]
pub fn normalized_offset(pointer: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    let half = size * 0.5;
    let center = origin + half;
    let d = pointer - center;
    let axis = |d: f32, h: f32| if h > 0.0 { tidy(d / h) } else { 0.0 };
    Vec2::new(axis(d.x, half.x), axis(d.y, half.y))
}

/// Tilt for a pointer at `pointer` over a box at `origin` with `size`.
pub fn tilt_for_pointer(pointer: Vec2, origin: Vec2, size: Vec2) -> Tilt {
    let n = normalized_offset(pointer, origin, size);
    Tilt {
        rotate_x: tidy((-n.y * TILT_GAIN_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG)),
        rotate_y: tidy((n.x * TILT_GAIN_DEG).clamp(-TILT_MAX_DEG, TILT_MAX_DEG)),
    }
}

/// Parallax offset in px for a pointer at `client` in a `viewport`.
#[inline]
pub fn parallax_offset(client: Vec2, viewport: Vec2) -> Vec2 {
    let axis = |c: f32, v: f32| {
        if v > 0.0 {
            tidy((c / v - 0.5) * PARALLAX_RANGE_PX)
        } else {
            0.0
        }
    };
    Vec2::new(axis(client.x, viewport.x), axis(client.y, viewport.y))
}

#[inline]
pub fn css_px(v: f32) -> String {
    format!("{}px", v)
}

/// Coalesces pointer moves into at most one publish per animation frame.
///
/// `record` stores the latest offset and reports whether a frame has to be
/// requested; `take` is called from the frame callback and yields the last
/// recorded offset exactly once.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallaxState {
    offset: Vec2,
    pending: bool,
}

impl ParallaxState {
    pub fn record(&mut self, offset: Vec2) -> bool {
        self.offset = offset;
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn take(&mut self) -> Option<Vec2> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.offset)
    }

    /// Drop the pending flag when a frame request could not be made, so the
    /// next move tries again.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}
