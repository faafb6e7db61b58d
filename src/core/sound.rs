// Sound-cue bookkeeping and sample synthesis.
//
// `SoundState` is generic over the context handle so the lazy-init rules
// can be exercised without a browser; the web side plugs in
// `web_sys::AudioContext`.

use super::constants::{SOUND_OFF_LABEL, SOUND_ON_LABEL, WHOOSH_DURATION_SEC};
use rand::Rng;

#[inline]
pub fn sound_label(enabled: bool) -> &'static str {
    if enabled {
        SOUND_ON_LABEL
    } else {
        SOUND_OFF_LABEL
    }
}

/// Enabled flag plus a context that is created on first enable and then
/// kept for the rest of the page session.
#[derive(Debug)]
pub struct SoundState<C> {
    enabled: bool,
    ctx: Option<C>,
}

impl<C> Default for SoundState<C> {
    fn default() -> Self {
        Self {
            enabled: false,
            ctx: None,
        }
    }
}

impl<C> SoundState<C> {
    /// Flip the enabled flag. If no context exists yet, `create` is asked for
    /// one; it may decline (unsupported platform), in which case sound stays
    /// contextless and playback remains a no-op. Returns the new flag.
    pub fn toggle(&mut self, create: impl FnOnce() -> Option<C>) -> bool {
        self.enabled = !self.enabled;
        if self.ctx.is_none() {
            self.ctx = create();
        }
        self.enabled
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The context to play through, only while sound is enabled.
    pub fn playable(&self) -> Option<&C> {
        if self.enabled {
            self.ctx.as_ref()
        } else {
            None
        }
    }
}

/// Whoosh buffer length in samples for a context running at `sample_rate`.
#[inline]
pub fn whoosh_len(sample_rate: f32) -> usize {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        (sample_rate as f64 * WHOOSH_DURATION_SEC) as usize
    } else {
        0
    }
}

/// Quadratic fade-out applied to sample `i` of `n`.
#[inline]
pub fn whoosh_envelope(i: usize, n: usize) -> f32 {
    if n == 0 {
        return 0.0;
    }
    let t = 1.0 - i as f32 / n as f32;
    t * t
}

/// Fill `buf` with white noise shaped by `whoosh_envelope`.
pub fn fill_whoosh<R: Rng + ?Sized>(buf: &mut [f32], rng: &mut R) {
    let n = buf.len();
    for (i, s) in buf.iter_mut().enumerate() {
        let noise: f32 = rng.gen::<f32>() * 2.0 - 1.0;
        *s = noise * whoosh_envelope(i, n);
    }
}
