//! Hand-landmark normalization into smoothed control signals.
//!
//! Detection callbacks feed [`GestureNormalizer::ingest`] at the detector's
//! (slow, irregular) cadence and only move the *targets*; the render loop
//! calls [`GestureNormalizer::tick`] every frame to ease the smoothed values
//! toward them. Consumers read [`GestureState`] from the render loop.

use crate::config::GestureConfig;
use crate::constants::*;
use crate::error::MorphError;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub const LANDMARK_COUNT: usize = 21;

/// Landmark indices of the detector's fixed anatomical layout.
pub mod landmark {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_TIP: usize = 20;

    /// (tip, base) pairs of the four non-thumb fingers.
    pub const FINGERS: [(usize, usize); 4] = [
        (INDEX_TIP, INDEX_MCP),
        (MIDDLE_TIP, MIDDLE_MCP),
        (RING_TIP, RING_MCP),
        (PINKY_TIP, PINKY_MCP),
    ];
}

/// One detected hand: 21 normalized `(x, y, z)` points, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hand {
    pub landmarks: [Vec3; LANDMARK_COUNT],
}

/// Hands reported by one detection callback; rarely more than two.
pub type Hands = SmallVec<[Hand; 2]>;

impl Hand {
    /// `None` when fewer than [`LANDMARK_COUNT`] points were detected or
    /// any of them is non-finite.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let landmarks: [Vec3; LANDMARK_COUNT] = points.get(..LANDMARK_COUNT)?.try_into().ok()?;
        let hand = Self { landmarks };
        hand.is_finite().then_some(hand)
    }

    pub fn is_finite(&self) -> bool {
        self.landmarks.iter().all(|p| p.is_finite())
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.landmarks[index]
    }

    #[inline]
    pub fn wrist(&self) -> Vec3 {
        self.landmarks[landmark::WRIST]
    }

    /// Unclamped openness score: finger extension ratios plus a weighted
    /// thumb spread term.
    pub fn openness_raw(&self) -> f32 {
        let wrist = self.wrist();
        let fingers: f32 = landmark::FINGERS
            .iter()
            .map(|&(tip, base)| {
                self.point(tip).distance(wrist)
                    / (self.point(base).distance(wrist) + FINGER_RATIO_EPSILON)
            })
            .sum();
        let thumb = self
            .point(landmark::THUMB_TIP)
            .distance(self.point(landmark::INDEX_MCP));
        fingers + thumb * THUMB_WEIGHT
    }

    /// Openness rescaled from the empirical raw range onto `[0, 1]`.
    pub fn openness(&self) -> f32 {
        let raw = self.openness_raw();
        ((raw - OPENNESS_RAW_MIN) / (OPENNESS_RAW_MAX - OPENNESS_RAW_MIN)).clamp(0.0, 1.0)
    }

    /// `1 - 5 * |thumb_tip - index_tip|`, floored at 0.
    pub fn pinch(&self) -> f32 {
        let d = self
            .point(landmark::THUMB_TIP)
            .distance(self.point(landmark::INDEX_TIP));
        (1.0 - PINCH_GAIN * d).max(0.0)
    }

    /// Signed tilt of the palm (radians). An upright hand reads ~0; image y
    /// is flipped so positive angles lean toward +x.
    pub fn rotation(&self) -> f32 {
        let wrist = self.wrist();
        let mid = self.point(landmark::MIDDLE_MCP);
        let dx = mid.x - wrist.x;
        let dy = wrist.y - mid.y;
        dx.atan2(dy)
    }
}

/// A plausible hand built without a detector, for simulated input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPose {
    /// Wrist position in normalized image space.
    pub wrist: Vec2,
    /// 0 = fist, 1 = flat open palm.
    pub extension: f32,
    /// Palm tilt in radians, same convention as [`Hand::rotation`].
    pub tilt: f32,
    /// When set, the thumb tip sits this far from the index tip.
    pub pinch_gap: Option<f32>,
}

impl Default for HandPose {
    fn default() -> Self {
        Self {
            wrist: Vec2::new(0.5, 0.8),
            extension: 0.5,
            tilt: 0.0,
            pinch_gap: None,
        }
    }
}

// Finger base x offsets (index, middle, ring, pinky) and MCP height, in
// palm-local units with y pointing toward the fingers.
const POSE_FINGER_X: [f32; 4] = [-0.05, 0.0, 0.045, 0.085];
const POSE_MCP_Y: f32 = 0.2;

impl Hand {
    pub fn posed(pose: &HandPose) -> Self {
        let e = pose.extension.clamp(0.0, 1.0);
        let (sin, cos) = pose.tilt.sin_cos();
        let to_image = |local: Vec2| {
            let x = local.x * cos + local.y * sin;
            let y = -local.x * sin + local.y * cos;
            Vec3::new(pose.wrist.x + x, pose.wrist.y - y, 0.0)
        };

        let mut local = [Vec2::ZERO; LANDMARK_COUNT];
        for (k, &dx) in POSE_FINGER_X.iter().enumerate() {
            let mcp = Vec2::new(dx, POSE_MCP_Y);
            let tip = Vec2::new(dx * (1.0 + 0.5 * e), POSE_MCP_Y - 0.08 + 0.3 * e);
            let base = landmark::INDEX_MCP + 4 * k;
            local[base] = mcp;
            local[base + 1] = mcp.lerp(tip, 0.4);
            local[base + 2] = mcp.lerp(tip, 0.7);
            local[base + 3] = tip;
        }
        let thumb_tip = match pose.pinch_gap {
            Some(gap) => local[landmark::INDEX_TIP] + Vec2::new(gap.max(0.0), 0.0),
            None => Vec2::new(-0.02, 0.18).lerp(Vec2::new(-0.2, 0.1), e),
        };
        let thumb_mcp = Vec2::new(-0.08, 0.1);
        local[1] = Vec2::new(-0.04, 0.05);
        local[2] = thumb_mcp;
        local[3] = thumb_mcp.lerp(thumb_tip, 0.5);
        local[landmark::THUMB_TIP] = thumb_tip;

        Self {
            landmarks: local.map(to_image),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureLabel {
    Idle,
    Pinch,
    Open,
    Closed,
    Rotating,
    Zoom,
    Tracking,
}

impl GestureLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            GestureLabel::Idle => "no hand",
            GestureLabel::Pinch => "pinch",
            GestureLabel::Open => "open / expand",
            GestureLabel::Closed => "closed / contract",
            GestureLabel::Rotating => "rotating",
            GestureLabel::Zoom => "zoom",
            GestureLabel::Tracking => "tracking",
        }
    }
}

/// Smoothed control signals plus presence flags.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureState {
    pub openness: f32,
    pub pinch: f32,
    pub rotation: f32,
    pub position: Vec2,
    pub hands_distance: f32,
    pub hand_present: bool,
    pub two_hands_present: bool,
    /// Set only by the `ingest` call that detected the swipe.
    pub swipe: Option<Swipe>,
}

impl GestureState {
    fn idle(idle_openness: f32) -> Self {
        Self {
            openness: idle_openness,
            pinch: 0.0,
            rotation: 0.0,
            position: Vec2::from_array(IDLE_POSITION),
            hands_distance: 0.0,
            hand_present: false,
            two_hands_present: false,
            swipe: None,
        }
    }
}

/// Per-frame goals the smoothed values chase.
#[derive(Clone, Debug)]
struct Targets {
    openness: f32,
    pinch: f32,
    rotation: f32,
    position: Vec2,
    hands_distance: f32,
}

pub struct GestureNormalizer {
    config: GestureConfig,
    state: GestureState,
    targets: Targets,
    swipe_ref_x: Option<f32>,
}

impl GestureNormalizer {
    pub fn new(config: GestureConfig) -> Result<Self, MorphError> {
        config.validate()?;
        let state = GestureState::idle(config.idle_openness);
        let targets = Targets {
            openness: state.openness,
            pinch: state.pinch,
            rotation: state.rotation,
            position: state.position,
            hands_distance: state.hands_distance,
        };
        Ok(Self {
            config,
            state,
            targets,
            swipe_ref_x: None,
        })
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn swipe(&self) -> Option<Swipe> {
        self.state.swipe
    }

    /// Consume one detection callback's hands. Hands with non-finite
    /// landmarks count as absent.
    pub fn ingest(&mut self, hands: &[Hand]) {
        let mut usable = hands.iter().filter(|h| h.is_finite());
        let Some(primary) = usable.next() else {
            self.enter_no_hand();
            return;
        };
        let second = usable.next();
        if !self.state.hand_present {
            log::debug!("[gesture] hand detected");
        }
        self.state.hand_present = true;

        self.targets.openness = primary.openness();
        self.targets.rotation = primary.rotation();
        self.targets.pinch = primary.pinch();
        let wrist = primary.wrist();
        self.targets.position = Vec2::new(wrist.x, wrist.y);
        self.state.swipe = self.check_swipe(wrist.x);

        let two = second.is_some();
        if two != self.state.two_hands_present {
            log::debug!("[gesture] two hands: {}", two);
        }
        self.state.two_hands_present = two;
        if let Some(second) = second {
            self.targets.hands_distance = wrist.distance(second.wrist());
        }
    }

    fn enter_no_hand(&mut self) {
        if self.state.hand_present {
            log::debug!("[gesture] hand lost");
        }
        self.state.hand_present = false;
        self.state.two_hands_present = false;
        self.state.swipe = None;
        self.swipe_ref_x = None;
        self.targets.openness = self.config.idle_openness;
        self.targets.pinch = 0.0;
        self.targets.rotation = 0.0;
        self.targets.position = Vec2::from_array(IDLE_POSITION);
    }

    fn check_swipe(&mut self, x: f32) -> Option<Swipe> {
        let Some(reference) = self.swipe_ref_x else {
            self.swipe_ref_x = Some(x);
            return None;
        };
        let dx = x - reference;
        if dx.abs() > self.config.swipe_threshold {
            self.swipe_ref_x = Some(x);
            Some(if dx > 0.0 { Swipe::Right } else { Swipe::Left })
        } else {
            None
        }
    }

    /// Ease every smoothed value toward its target by the smoothing factor.
    pub fn tick(&mut self) {
        let k = self.config.smoothing;
        let s = &mut self.state;
        let t = &self.targets;
        s.openness += (t.openness - s.openness) * k;
        s.pinch += (t.pinch - s.pinch) * k;
        s.rotation += (t.rotation - s.rotation) * k;
        s.position += (t.position - s.position) * k;
        s.hands_distance += (t.hands_distance - s.hands_distance) * k;
    }

    /// Display label; the first matching rule wins.
    pub fn label(&self) -> GestureLabel {
        let s = &self.state;
        if !s.hand_present {
            GestureLabel::Idle
        } else if s.pinch > LABEL_PINCH_MIN {
            GestureLabel::Pinch
        } else if s.openness > LABEL_OPEN_MIN {
            GestureLabel::Open
        } else if s.openness < LABEL_CLOSED_MAX {
            GestureLabel::Closed
        } else if s.rotation.abs() > LABEL_ROTATION_MIN {
            GestureLabel::Rotating
        } else if s.two_hands_present {
            GestureLabel::Zoom
        } else {
            GestureLabel::Tracking
        }
    }
}
