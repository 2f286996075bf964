//! Host-agnostic driver tying gestures and morphing together.
//!
//! The host calls [`SceneDriver::on_detection`] from its detector callback
//! and [`SceneDriver::on_frame`] once per display refresh. Both take
//! `&mut self`, so hosts that run detection on another thread need to put
//! the driver behind a mutex.

use crate::config::SceneConfig;
use crate::error::MorphError;
use crate::gesture::{GestureNormalizer, GestureState, Hand, Swipe};
use crate::morph::MorphController;
use crate::patterns::PATTERNS;
use crate::uniforms::{RenderFrame, RenderUniforms};
use glam::Vec3;

pub struct SceneDriver {
    morph: MorphController,
    gesture: GestureNormalizer,
    swipe_debounce_sec: f64,
    last_swipe_at: Option<f64>,
    frame_positions: Vec<Vec3>,
}

impl SceneDriver {
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, MorphError> {
        let morph = MorphController::new(&config.morph, seed)?;
        let gesture = GestureNormalizer::new(config.gesture)?;
        let frame_positions = Vec::with_capacity(morph.capacity());
        Ok(Self {
            morph,
            gesture,
            swipe_debounce_sec: config.swipe_debounce_sec,
            last_swipe_at: None,
            frame_positions,
        })
    }

    pub fn morph(&self) -> &MorphController {
        &self.morph
    }

    pub fn gesture(&self) -> &GestureNormalizer {
        &self.gesture
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.gesture.state()
    }

    /// Detector callback. Returns the pattern switched to, if a debounced
    /// swipe triggered one.
    pub fn on_detection(&mut self, hands: &[Hand], now_sec: f64) -> Option<&'static str> {
        self.gesture.ingest(hands);
        let swipe = self.gesture.swipe()?;
        if let Some(last) = self.last_swipe_at {
            if now_sec - last < self.swipe_debounce_sec {
                return None;
            }
        }
        self.last_swipe_at = Some(now_sec);
        log::info!("[scene] swipe {:?}", swipe);
        self.step_pattern(swipe, now_sec)
    }

    /// Move one catalog entry right (next) or left (previous), wrapping.
    pub fn step_pattern(&mut self, direction: Swipe, now_sec: f64) -> Option<&'static str> {
        let next = self.neighbour_pattern(direction);
        // catalog names are always registered
        self.morph.retarget(next, now_sec).ok()?;
        Some(next)
    }

    fn neighbour_pattern(&self, swipe: Swipe) -> &'static str {
        let count = PATTERNS.len();
        let current = self
            .morph
            .library()
            .position_of(self.morph.current_pattern())
            .unwrap_or(0);
        let next = match swipe {
            Swipe::Right => (current + 1) % count,
            Swipe::Left => (current + count - 1) % count,
        };
        PATTERNS[next].name
    }

    /// Render-loop step: smooth gestures, blend positions, build uniforms.
    pub fn on_frame(&mut self, now_sec: f64) -> RenderFrame<'_> {
        self.gesture.tick();
        self.morph.advance_into(now_sec, &mut self.frame_positions);
        let n = self.frame_positions.len();
        RenderFrame {
            positions: &self.frame_positions,
            seeds: &self.morph.seeds()[..n],
            colors: &self.morph.colors()[..n],
            base_color: self.morph.base_color(),
            uniforms: RenderUniforms::from_gesture(self.gesture.state(), now_sec),
        }
    }

    pub fn select_pattern(&mut self, name: &str, now_sec: f64) -> Result<(), MorphError> {
        self.morph.retarget(name, now_sec)
    }

    /// Keyboard shortcut: `1..=9` pick catalog entries 1-9, `0` the tenth.
    pub fn select_digit(&mut self, digit: u8, now_sec: f64) -> Option<&'static str> {
        let index = digit_to_pattern_index(digit)?;
        let name = PATTERNS.get(index)?.name;
        self.morph.retarget(name, now_sec).ok()?;
        Some(name)
    }

    pub fn set_color_base(&mut self, rgb: [f32; 3]) {
        self.morph.set_color_base(rgb);
    }

    pub fn set_active_count(&mut self, count: usize) -> usize {
        self.morph.set_active_count(count)
    }
}

#[inline]
pub fn digit_to_pattern_index(digit: u8) -> Option<usize> {
    match digit {
        1..=9 => Some(digit as usize - 1),
        0 => Some(9),
        _ => None,
    }
}
