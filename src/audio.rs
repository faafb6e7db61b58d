use crate::constants::AUDIO_TOGGLE_ID;
use crate::core::constants::{
    CLICK_DURATION_SEC, CLICK_FREQ_HZ, CLICK_GAIN, GAIN_FLOOR, WHOOSH_DURATION_SEC, WHOOSH_GAIN,
};
use crate::core::sound::{fill_whoosh, sound_label, whoosh_len};
use crate::core::{aria_bool, SoundState};
use crate::dom::{self, js_err};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Page sound cues. Silent until the user turns sound on.
#[derive(Default)]
pub struct SoundBoard {
    state: SoundState<web::AudioContext>,
}

fn create_context() -> Option<web::AudioContext> {
    match web::AudioContext::new() {
        Ok(ctx) => {
            log::info!("[audio] context created ({} Hz)", ctx.sample_rate());
            Some(ctx)
        }
        Err(e) => {
            log::warn!("[audio] AudioContext unavailable: {:?}", e);
            None
        }
    }
}

// Gain that starts at `start` and decays exponentially to silence, routed to
// the destination
fn create_gain(
    ctx: &web::AudioContext,
    start: f32,
    duration_sec: f64,
) -> anyhow::Result<web::GainNode> {
    let gain = web::GainNode::new(ctx).map_err(js_err)?;
    let now = ctx.current_time();
    gain.gain().set_value_at_time(start, now).map_err(js_err)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(GAIN_FLOOR, now + duration_sec)
        .map_err(js_err)?;
    gain.connect_with_audio_node(&ctx.destination())
        .map_err(js_err)?;
    Ok(gain)
}

fn click_tone(ctx: &web::AudioContext) -> anyhow::Result<()> {
    let osc = web::OscillatorNode::new(ctx).map_err(js_err)?;
    osc.set_type(web::OscillatorType::Square);
    osc.frequency().set_value(CLICK_FREQ_HZ);
    let gain = create_gain(ctx, CLICK_GAIN, CLICK_DURATION_SEC)?;
    osc.connect_with_audio_node(&gain).map_err(js_err)?;
    osc.start().map_err(js_err)?;
    #[allow(deprecated)]
    osc.stop_with_when(ctx.current_time() + CLICK_DURATION_SEC)
        .map_err(js_err)?;
    Ok(())
}

fn whoosh(ctx: &web::AudioContext) -> anyhow::Result<()> {
    let sr = ctx.sample_rate();
    let len = whoosh_len(sr);
    if len == 0 {
        return Ok(());
    }
    let buffer = ctx.create_buffer(1, len as u32, sr).map_err(js_err)?;
    let mut samples = vec![0.0_f32; len];
    fill_whoosh(&mut samples, &mut rand::thread_rng());
    buffer.copy_to_channel(&mut samples, 0).map_err(js_err)?;

    let noise = ctx.create_buffer_source().map_err(js_err)?;
    noise.set_buffer(Some(&buffer));
    let gain = create_gain(ctx, WHOOSH_GAIN, WHOOSH_DURATION_SEC)?;
    noise.connect_with_audio_node(&gain).map_err(js_err)?;
    noise.start().map_err(js_err)?;
    #[allow(deprecated)]
    noise
        .stop_with_when(ctx.current_time() + WHOOSH_DURATION_SEC)
        .map_err(js_err)?;
    Ok(())
}

impl SoundBoard {
    pub fn enabled(&self) -> bool {
        self.state.enabled()
    }

    /// Flip sound on/off, creating the context on first use and waking it
    /// if the browser parked it.
    pub fn toggle(&mut self) -> bool {
        let enabled = self.state.toggle(create_context);
        if let Some(ctx) = self.state.playable() {
            if ctx.state() == web::AudioContextState::Suspended {
                resume(ctx);
            }
        }
        enabled
    }

    pub fn play_click(&self) {
        if let Some(ctx) = self.state.playable() {
            if let Err(e) = click_tone(ctx) {
                log::error!("[audio] click tone failed: {:?}", e);
            }
        }
    }

    pub fn play_whoosh(&self) {
        if let Some(ctx) = self.state.playable() {
            if let Err(e) = whoosh(ctx) {
                log::error!("[audio] whoosh failed: {:?}", e);
            }
        }
    }
}

fn resume(ctx: &web::AudioContext) {
    match ctx.resume() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] resume rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[audio] resume failed: {:?}", e),
    }
}

fn label_toggle(el: &web::Element, enabled: bool) {
    dom::set_label(el, sound_label(enabled));
    dom::set_attr(el, "aria-pressed", aria_bool(enabled));
}

/// Wire `#audio-toggle` to the shared sound board and show its initial label.
pub fn wire_toggle(document: &web::Document, sound: &Rc<RefCell<SoundBoard>>) {
    let Some(el) = dom::element_by_id(document, AUDIO_TOGGLE_ID) else {
        log::debug!("[audio] no #{} on page", AUDIO_TOGGLE_ID);
        return;
    };
    label_toggle(&el, sound.borrow().enabled());

    let sound = sound.clone();
    let el_click = el.clone();
    dom::add_listener(&el, "click", move |_: web::MouseEvent| {
        let enabled = sound.borrow_mut().toggle();
        label_toggle(&el_click, enabled);
        log::info!("[audio] enabled={}", enabled);
    });
}
