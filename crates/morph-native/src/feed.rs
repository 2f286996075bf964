//! Scripted hand input standing in for a camera + landmark detector.
//!
//! The script loops every `CYCLE_SEC`: a hand sweeps across the frame
//! (triggering swipes), opens and closes, pinches, tilts, and a second hand
//! joins for a while to drive zoom. Gaps with no hand exercise the idle path.

use glam::Vec2;
use morph_core::{Hand, HandPose, Hands};
use std::f32::consts::TAU;

const CYCLE_SEC: f64 = 12.0;

pub fn hands_at(t_sec: f64) -> Hands {
    let phase = (t_sec % CYCLE_SEC) as f32;
    let mut hands = Hands::new();
    if phase >= 11.0 {
        // hand out of view
        return hands;
    }

    let sweep = if phase < 2.0 {
        0.25 + phase * 0.25 // left to right: one swipe
    } else if phase < 4.0 {
        0.75 - (phase - 2.0) * 0.25 // and back
    } else {
        0.5 + (phase * 0.7).sin() * 0.05
    };
    let breathe = 0.5 + 0.5 * (phase * TAU / 3.0).sin();
    let pinch_gap = (6.0..7.0).contains(&phase).then_some(0.02);
    let tilt = if (7.0..8.5).contains(&phase) { 1.3 } else { 0.0 };

    hands.push(Hand::posed(&HandPose {
        wrist: Vec2::new(sweep, 0.75),
        extension: breathe,
        tilt,
        pinch_gap,
    }));

    if (8.5..11.0).contains(&phase) {
        let spread = 0.15 + (phase - 8.5) * 0.12;
        hands.push(Hand::posed(&HandPose {
            wrist: Vec2::new((sweep + spread).min(0.95), 0.75),
            ..Default::default()
        }));
    }
    hands
}
