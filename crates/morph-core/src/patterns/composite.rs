//! Dense random core plus tilted rings.

use super::{jitter, random_in_ball};
use glam::{Quat, Vec3};
use rand::RngCore;
use std::f32::consts::{PI, TAU};

/// Point `k` of `count` on a flat ring, rotated about X then Y.
fn tilted_ring(k: usize, count: usize, radius: f32, tilt_x: f32, tilt_y: f32) -> Vec3 {
    let a = k as f32 / count.max(1) as f32 * TAU;
    let flat = Vec3::new(radius * a.cos(), 0.0, radius * a.sin());
    Quat::from_rotation_y(tilt_y) * Quat::from_rotation_x(tilt_x) * flat
}

/// Split `index` into the ring it belongs to and its slot within that ring.
fn ring_slot(index: usize, core: usize, total: usize, rings: usize) -> (usize, usize, usize) {
    let j = index - core;
    let ring = j % rings;
    let per_ring = (total - core).div_ceil(rings).max(1);
    (ring, j / rings, per_ring)
}

pub fn atom(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    const RINGS: usize = 3;
    const ORBIT_RADIUS: f32 = 10.0;
    let nucleus = total * 15 / 100;
    if index < nucleus {
        return random_in_ball(rng, 2.0);
    }
    let (ring, slot, per_ring) = ring_slot(index, nucleus, total, RINGS);
    let tilt = ring as f32 * PI / RINGS as f32;
    tilted_ring(slot, per_ring, ORBIT_RADIUS, tilt, tilt * 0.5)
        + jitter(rng, 0.2)
}

pub fn orbit(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    const RINGS: usize = 5;
    let core = total / 10;
    if index < core {
        return random_in_ball(rng, 2.5);
    }
    let (ring, slot, per_ring) = ring_slot(index, core, total, RINGS);
    let radius = 4.5 + ring as f32 * 2.2;
    let tilt_x = 0.25 * (ring as f32 - 2.0);
    let tilt_y = ring as f32 * 0.6;
    tilted_ring(slot, per_ring, radius, tilt_x, tilt_y)
}
