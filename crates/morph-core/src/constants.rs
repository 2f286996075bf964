// Shared morph/gesture tuning constants used by both web and native frontends.

// Particle buffer
pub const DEFAULT_PARTICLE_CAPACITY: usize = 20_000;
pub const DEFAULT_PATTERN: &str = "sphere";

// Morphing
pub const MORPH_DURATION_SEC: f64 = 2.0; // source -> target transition length

// Gesture smoothing
pub const SMOOTHING_FACTOR: f32 = 0.1; // per render frame, new = old + (target - old) * k
pub const IDLE_OPENNESS: f32 = 0.5; // openness target while no hand is visible
pub const IDLE_POSITION: [f32; 2] = [0.5, 0.5];

// Openness estimation
pub const FINGER_RATIO_EPSILON: f32 = 1e-3;
pub const THUMB_WEIGHT: f32 = 5.0;
pub const OPENNESS_RAW_MIN: f32 = 4.5; // empirical fist
pub const OPENNESS_RAW_MAX: f32 = 8.0; // empirical flat palm

// Pinch: distances >= 1 / PINCH_GAIN read as zero pinch
pub const PINCH_GAIN: f32 = 5.0;

// Swipes
pub const SWIPE_THRESHOLD: f32 = 0.15; // wrist-x travel in normalized image units
pub const SWIPE_DEBOUNCE_SEC: f64 = 0.5;

// Gesture label thresholds
pub const LABEL_PINCH_MIN: f32 = 0.7;
pub const LABEL_OPEN_MIN: f32 = 0.8;
pub const LABEL_CLOSED_MAX: f32 = 0.2;
pub const LABEL_ROTATION_MIN: f32 = 1.2; // radians

// Renderer uniforms
pub const DISPERSION_MULTIPLIER: f32 = 3.0;
pub const ZOOM_SCALE: f32 = 2.0;

// Per-particle colour jitter around the base colour (HSL)
pub const HUE_JITTER: f32 = 0.05;
pub const LIGHTNESS_JITTER: f32 = 0.1;

// Default base colour: cyan-ish
pub const DEFAULT_BASE_COLOR: [f32; 3] = [0.0, 0.8, 1.0];
