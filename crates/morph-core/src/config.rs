//! Runtime configuration built from the tuning constants.
//!
//! Every struct has a `Default` that mirrors `constants.rs`; frontends
//! override individual fields (capacity from a CLI flag, for instance).

use crate::constants::*;
use crate::error::MorphError;

#[derive(Clone, Debug)]
pub struct MorphConfig {
    pub capacity: usize,
    pub duration_sec: f64,
    pub initial_pattern: String,
    pub base_color: [f32; 3],
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_PARTICLE_CAPACITY,
            duration_sec: MORPH_DURATION_SEC,
            initial_pattern: DEFAULT_PATTERN.to_string(),
            base_color: DEFAULT_BASE_COLOR,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GestureConfig {
    pub smoothing: f32,
    pub swipe_threshold: f32,
    pub idle_openness: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_FACTOR,
            swipe_threshold: SWIPE_THRESHOLD,
            idle_openness: IDLE_OPENNESS,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), MorphError> {
        if self.smoothing > 0.0 && self.smoothing <= 1.0 {
            Ok(())
        } else {
            Err(MorphError::InvalidSmoothing(self.smoothing))
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub morph: MorphConfig,
    pub gesture: GestureConfig,
    pub swipe_debounce_sec: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            morph: MorphConfig::default(),
            gesture: GestureConfig::default(),
            swipe_debounce_sec: SWIPE_DEBOUNCE_SEC,
        }
    }
}
