#![cfg(target_arch = "wasm32")]
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use starfield_core::{
    AmbientPolicy, CursorTrail as TrailEffect, FieldConfig, LiquidWaves as WaveEffect, Phase,
    SpeedFlags, Starfield, TrailConfig, TransitionConfig, WarpEffect, WaveConfig,
};
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod overlay;
mod render;
mod style;

use frame::{wiring, Mount, Timeout, Wiring};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web ready");
    Ok(())
}

#[inline]
fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

/// Mount `build` on `#canvas_id`, or log why the component stays inert.
fn mount<A: starfield_core::Animation + 'static>(
    component: &str,
    canvas_id: &str,
    build: impl FnOnce(&starfield_core::InputState) -> anyhow::Result<A>,
    wiring: Wiring,
    after_frame: Option<frame::AfterFrame>,
) -> Option<Mount<A>> {
    let mounted = dom::canvas_by_id(canvas_id)
        .and_then(|canvas| Mount::new(canvas, build, wiring, after_frame));
    match mounted {
        Ok(m) => Some(m),
        Err(e) => {
            log::warn!("[{}] #{} stays inert: {:#}", component, canvas_id, e);
            None
        }
    }
}

fn pointer_wiring(with_clicks: bool, with_scroll: bool) -> Wiring {
    wiring(move |canvas, input| {
        let mut listeners = events::wire_pointer(canvas, input)?;
        listeners.push(events::wire_resize(canvas, input)?);
        if with_clicks {
            listeners.push(events::wire_clicks(canvas, input)?);
        }
        if with_scroll {
            listeners.extend(events::wire_scroll_position(input)?);
        }
        Ok(listeners)
    })
}

/// Ambient starfield behind the page.
#[wasm_bindgen]
pub struct StarfieldBackground {
    mount: Option<Mount<Starfield>>,
}

#[wasm_bindgen]
impl StarfieldBackground {
    /// `policy` is `"scroll"` (default) or `"decay"`; anything else throws.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: &str,
        force_slow: bool,
        start_fast: bool,
        policy: Option<String>,
    ) -> Result<StarfieldBackground, JsValue> {
        let policy = AmbientPolicy::from_name(policy.as_deref().unwrap_or(""))
            .map_err(|e| to_js(e.into()))?;
        let flags = SpeedFlags {
            force_slow,
            start_fast,
        };
        let listen = wiring(move |canvas, input| {
            let mut listeners = events::wire_pointer(canvas, input)?;
            listeners.push(events::wire_resize(canvas, input)?);
            if policy.uses_travel() {
                listeners.extend(events::wire_scroll_travel(input)?);
            } else {
                listeners.extend(events::wire_scroll_position(input)?);
            }
            Ok(listeners)
        });
        let mount = mount(
            "starfield",
            canvas_id,
            |input| {
                Starfield::new(FieldConfig::ambient(), policy, flags, input, rand::random())
                    .map_err(anyhow::Error::from)
            },
            listen,
            None,
        );
        Ok(Self { mount })
    }

    pub fn activate(&mut self) -> Result<(), JsValue> {
        match self.mount.as_mut() {
            Some(m) => m.activate().map_err(to_js),
            None => Ok(()),
        }
    }

    pub fn deactivate(&mut self) {
        if let Some(m) = self.mount.as_mut() {
            m.deactivate();
        }
    }

    /// Feed a scroll position from a custom scroller; same path as `lenis-scroll`.
    #[wasm_bindgen(js_name = setScroll)]
    pub fn set_scroll(&self, y: f64) {
        if let Some(m) = self.mount.as_ref() {
            if !m.input().borrow_mut().scrolled_to(y as f32) {
                log::debug!("[starfield] ignoring non-finite scroll {}", y);
            }
        }
    }

    #[wasm_bindgen(js_name = setForceSlow)]
    pub fn set_force_slow(&self, force_slow: bool) {
        if let Some(m) = self.mount.as_ref() {
            m.with_animation(|s| s.set_force_slow(force_slow));
        }
    }
}

/// Hands the JS completion callback out exactly as often as the core fires it.
#[derive(Clone)]
struct CompletionRelay {
    fired: Rc<Cell<bool>>,
    callback: js_sys::Function,
}

impl CompletionRelay {
    fn arm(&self) -> impl FnOnce() + 'static {
        self.fired.set(false);
        let fired = self.fired.clone();
        move || fired.set(true)
    }

    fn flush(&self) {
        if self.fired.replace(false) {
            if let Err(e) = self.callback.call0(&JsValue::NULL) {
                log::error!("[warp] onComplete threw: {:?}", e);
            }
        }
    }
}

/// Full-screen warp used for page transitions.
#[wasm_bindgen]
pub struct WarpTransition {
    mount: Option<Mount<WarpEffect>>,
    relay: CompletionRelay,
    fallback: Rc<Cell<Option<Timeout>>>,
}

#[wasm_bindgen]
impl WarpTransition {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, on_complete: js_sys::Function) -> WarpTransition {
        let relay = CompletionRelay {
            fired: Rc::new(Cell::new(false)),
            callback: on_complete,
        };
        let fallback: Rc<Cell<Option<Timeout>>> = Rc::new(Cell::new(None));

        let relay_frame = relay.clone();
        let fallback_frame = fallback.clone();
        let canvas_frame = dom::canvas_by_id(canvas_id).ok();
        let after_frame: frame::AfterFrame = Box::new(move |running| {
            relay_frame.flush();
            if !running {
                fallback_frame.set(None);
                if let Some(canvas) = canvas_frame.as_ref() {
                    overlay::hide(canvas);
                }
            }
        });

        let mount = mount(
            "warp",
            canvas_id,
            |_input| {
                WarpEffect::new(FieldConfig::warp(), TransitionConfig::default(), rand::random())
                    .map_err(anyhow::Error::from)
            },
            wiring(|canvas, input| Ok(vec![events::wire_resize(canvas, input)?])),
            Some(after_frame),
        );
        if let Some(m) = mount.as_ref() {
            overlay::hide(m.canvas());
        }
        Self {
            mount,
            relay,
            fallback,
        }
    }

    /// Start a cycle; ignored unless idle. `onComplete` runs once per cycle.
    pub fn activate(&mut self) -> Result<(), JsValue> {
        let Some(m) = self.mount.as_mut() else {
            return Ok(());
        };
        let completion = self.relay.arm();
        let started = {
            let input = m.input().borrow();
            m.with_animation(|w| w.start(&input, completion))
                .unwrap_or(false)
        };
        if !started {
            log::debug!("[warp] activate ignored while a cycle runs");
            return Ok(());
        }
        let fallback_secs = m
            .with_animation(|w| w.sequencer().config().fallback_secs)
            .unwrap_or(TransitionConfig::default().fallback_secs);

        if overlay::is_hidden(m.canvas()) {
            overlay::show(m.canvas());
        }
        m.activate().map_err(to_js)?;

        // Frames can stop arriving (background tab); the timer completes regardless.
        let handle = m.handle();
        let relay = self.relay.clone();
        let timer = Timeout::new(Duration::from_secs_f32(fallback_secs), move || {
            if handle.with_animation(|w| w.force_complete()) == Some(true) {
                log::warn!("[warp] completion forced by host timer");
            }
            relay.flush();
        })
        .map_err(to_js)?;
        self.fallback.set(Some(timer));
        Ok(())
    }

    /// Tear down mid-cycle without running `onComplete`.
    pub fn deactivate(&mut self) {
        self.fallback.set(None);
        if let Some(m) = self.mount.as_mut() {
            m.deactivate();
            overlay::hide(m.canvas());
        }
        self.relay.fired.set(false);
    }

    /// Current phase name: `idle`, `accelerating`, `warping` or `fading`.
    pub fn phase(&self) -> String {
        self.mount
            .as_ref()
            .and_then(|m| m.with_animation(|w| w.phase()))
            .unwrap_or(Phase::Idle)
            .name()
            .to_owned()
    }
}

/// Glowing pointer trail with click ripples.
#[wasm_bindgen]
pub struct CursorTrail {
    mount: Option<Mount<TrailEffect>>,
}

#[wasm_bindgen]
impl CursorTrail {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, attach_to_scroll: bool) -> Result<CursorTrail, JsValue> {
        let config = TrailConfig {
            attach_to_scroll,
            ..TrailConfig::default()
        };
        config.validate().map_err(|e| to_js(e.into()))?;
        let mount = mount(
            "trail",
            canvas_id,
            move |_input| Ok(TrailEffect::new(config)),
            pointer_wiring(true, attach_to_scroll),
            None,
        );
        Ok(Self { mount })
    }

    pub fn activate(&mut self) -> Result<(), JsValue> {
        match self.mount.as_mut() {
            Some(m) => m.activate().map_err(to_js),
            None => Ok(()),
        }
    }

    pub fn deactivate(&mut self) {
        if let Some(m) = self.mount.as_mut() {
            m.deactivate();
        }
    }
}

/// Pointer-following sine waves.
#[wasm_bindgen]
pub struct LiquidWaves {
    mount: Option<Mount<WaveEffect>>,
}

#[wasm_bindgen]
impl LiquidWaves {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> LiquidWaves {
        let mount = mount(
            "waves",
            canvas_id,
            |_input| {
                let config = WaveConfig::default();
                config.validate()?;
                Ok(WaveEffect::new(config))
            },
            pointer_wiring(false, false),
            None,
        );
        Self { mount }
    }

    pub fn activate(&mut self) -> Result<(), JsValue> {
        match self.mount.as_mut() {
            Some(m) => m.activate().map_err(to_js),
            None => Ok(()),
        }
    }

    pub fn deactivate(&mut self) {
        if let Some(m) = self.mount.as_mut() {
            m.deactivate();
        }
    }
}
