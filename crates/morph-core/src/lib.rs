//! Particle morphing core: pattern generators, the morph state machine and
//! hand-gesture normalization. Platform-agnostic; the web and native
//! frontends both drive it through [`SceneDriver`].

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod morph;
pub mod patterns;
pub mod scene;
pub mod uniforms;

pub use config::*;
pub use error::MorphError;
pub use gesture::{GestureLabel, GestureNormalizer, GestureState, Hand, HandPose, Hands, Swipe};
pub use morph::{ease_in_out_cubic, MorphController, MorphState};
pub use patterns::{Family, PatternDef, PatternLibrary, PATTERNS};
pub use scene::{digit_to_pattern_index, SceneDriver};
pub use uniforms::{RenderFrame, RenderUniforms};
