#![cfg(target_arch = "wasm32")]
//! WASM facade over `morph-core` for a browser host.
//!
//! The host page owns the renderer and the hand-landmark detector. It calls
//! [`MorphApp::ingest`] from the detector callback and [`MorphApp::frame`]
//! from `requestAnimationFrame`, then uploads the returned arrays.

use anyhow::Context;
use instant::Instant;
use morph_core::{MorphConfig, RenderUniforms, SceneConfig, SceneDriver, PATTERNS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod events;
mod keymap;
mod landmarks;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("morph-web starting");
    Ok(())
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn build_scene(capacity: usize, pattern: String) -> anyhow::Result<SceneDriver> {
    let config = SceneConfig {
        morph: MorphConfig {
            capacity,
            initial_pattern: pattern,
            ..Default::default()
        },
        ..Default::default()
    };
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    SceneDriver::new(config, seed).context("creating particle scene")
}

#[wasm_bindgen]
pub struct MorphApp {
    scene: Rc<RefCell<SceneDriver>>,
    started: Instant,
    uniforms: RenderUniforms,
}

impl MorphApp {
    fn now_sec(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

#[wasm_bindgen]
impl MorphApp {
    #[wasm_bindgen(constructor)]
    pub fn new(capacity: usize, pattern: String) -> Result<MorphApp, JsValue> {
        let scene = build_scene(capacity, pattern).map_err(|e| js_err(format!("{e:#}")))?;
        Ok(MorphApp {
            scene: Rc::new(RefCell::new(scene)),
            started: Instant::now(),
            uniforms: RenderUniforms::default(),
        })
    }

    /// Listen for digit/arrow/colour shortcuts on the window.
    #[wasm_bindgen(js_name = attachKeyboard)]
    pub fn attach_keyboard(&self) {
        events::wire_global_keydown(self.scene.clone(), self.started);
    }

    #[wasm_bindgen(js_name = patternNames)]
    pub fn pattern_names() -> js_sys::Array {
        PATTERNS.iter().map(|p| JsValue::from_str(p.name)).collect()
    }

    #[wasm_bindgen(js_name = selectPattern)]
    pub fn select_pattern(&self, name: &str) -> Result<(), JsValue> {
        let now = self.now_sec();
        self.scene
            .borrow_mut()
            .select_pattern(name, now)
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = currentPattern)]
    pub fn current_pattern(&self) -> String {
        self.scene.borrow().morph().current_pattern().to_string()
    }

    /// Detector callback: `landmarks` holds `hand_count * 21 * 3` floats.
    /// Returns the pattern a swipe switched to, if any.
    pub fn ingest(&self, landmarks: &[f32], hand_count: usize) -> Option<String> {
        let hands = landmarks::parse_hands(landmarks, hand_count);
        let now = self.now_sec();
        self.scene
            .borrow_mut()
            .on_detection(&hands, now)
            .map(str::to_string)
    }

    /// Render-loop step. Returns blended positions as flat `x, y, z` floats;
    /// uniforms for the same frame are available from [`Self::uniforms`].
    pub fn frame(&mut self) -> Vec<f32> {
        let now = self.now_sec();
        let mut scene = self.scene.borrow_mut();
        let frame = scene.on_frame(now);
        self.uniforms = frame.uniforms;
        frame.position_floats().to_vec()
    }

    /// `[time, dispersion, pinch, zoom, rotation]` of the last frame.
    pub fn uniforms(&self) -> Vec<f32> {
        let u = &self.uniforms;
        vec![u.time, u.dispersion, u.pinch, u.zoom, u.rotation]
    }

    pub fn colors(&self) -> Vec<f32> {
        let scene = self.scene.borrow();
        let n = scene.morph().active_count();
        scene.morph().colors()[..n].iter().flatten().copied().collect()
    }

    pub fn seeds(&self) -> Vec<f32> {
        let scene = self.scene.borrow();
        let n = scene.morph().active_count();
        scene.morph().seeds()[..n]
            .iter()
            .flat_map(|s| s.to_array())
            .collect()
    }

    #[wasm_bindgen(js_name = baseColor)]
    pub fn base_color(&self) -> Vec<f32> {
        self.scene.borrow().morph().base_color().to_vec()
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, r: f32, g: f32, b: f32) {
        self.scene.borrow_mut().set_color_base([r, g, b]);
    }

    /// Display range only; never grows past the initial capacity.
    #[wasm_bindgen(js_name = setParticleCount)]
    pub fn set_particle_count(&self, count: usize) -> usize {
        self.scene.borrow_mut().set_active_count(count)
    }

    #[wasm_bindgen(js_name = gestureLabel)]
    pub fn gesture_label(&self) -> String {
        self.scene.borrow().gesture().label().as_str().to_string()
    }

    #[wasm_bindgen(js_name = handPresent)]
    pub fn hand_present(&self) -> bool {
        self.scene.borrow().gesture_state().hand_present
    }
}
