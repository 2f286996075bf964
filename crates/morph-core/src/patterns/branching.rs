//! Multi-arm shapes: `arm = index % arms`, `step = index / arms`.

use super::{jitter, signed_unit};
use glam::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::{PI, TAU};

#[inline]
fn arm_split(index: usize, total: usize, arms: usize) -> (usize, f32) {
    let arm = index % arms;
    let per_arm = total.div_ceil(arms).max(1);
    let along = (index / arms) as f32 / per_arm as f32;
    (arm, along)
}

pub fn galaxy(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    const ARMS: usize = 4;
    const RADIUS: f32 = 13.0;
    const SWEEP: f32 = 3.0 * PI;
    let (arm, along) = arm_split(index, total, ARMS);
    let r = along * RADIUS;
    let angle = arm as f32 * TAU / ARMS as f32 + along * SWEEP;
    // arms are tight near the core and fray toward the rim
    let spread = 0.4 + along * 1.8;
    let thickness = (1.0 - along) * 1.2 + 0.2;
    Vec3::new(
        r * angle.cos() + signed_unit(rng) * spread,
        signed_unit(rng) * thickness,
        r * angle.sin() + signed_unit(rng) * spread,
    )
}

pub fn snowflake(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    const ARMS: usize = 6;
    const LENGTH: f32 = 12.0;
    const BRANCH_EVERY: usize = 3;
    let (arm, along) = arm_split(index, total, ARMS);
    let angle = arm as f32 * TAU / ARMS as f32;
    let dir = Vec3::new(angle.cos(), angle.sin(), 0.0);
    let mut p = dir * along * LENGTH;
    if (index / ARMS) % BRANCH_EVERY == 0 && along > 0.2 {
        // side branch at +-60 degrees, shorter toward the tip
        let side = if (index / ARMS / BRANCH_EVERY) % 2 == 0 { 1.0 } else { -1.0 };
        let branch_angle = angle + side * PI / 3.0;
        let branch_len = rng.gen::<f32>() * (1.0 - along) * LENGTH * 0.35;
        p += Vec3::new(branch_angle.cos(), branch_angle.sin(), 0.0) * branch_len;
    }
    p + jitter(rng, 0.15)
}

pub fn lightning(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    const BOLTS: usize = 5;
    const HEIGHT: f32 = 22.0;
    const ZIGZAG: f32 = 1.8;
    let (bolt, along) = arm_split(index, total, BOLTS);
    let base_angle = bolt as f32 * TAU / BOLTS as f32;
    let fan = along * 6.0;
    let kink = (along * 30.0 + bolt as f32 * 1.7).sin() * ZIGZAG;
    Vec3::new(
        base_angle.cos() * fan + kink + signed_unit(rng) * 0.4,
        HEIGHT * 0.5 - along * HEIGHT,
        base_angle.sin() * fan + signed_unit(rng) * 0.4,
    )
}
