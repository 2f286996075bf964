//! Closed-form curves and surfaces sampled at `t = index / total`.
//!
//! A winding count multiplies `t` where a single pass would leave the curve
//! too sparse; `tube_offset` gives thin curves some volume.

use super::{progress, tube_offset, GOLDEN_ANGLE};
use glam::Vec3;
use rand::RngCore;
use std::f32::consts::{PI, TAU};

pub fn torus(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const MAJOR: f32 = 8.0;
    const MINOR: f32 = 3.0;
    const WRAPS: f32 = 60.0;
    let t = progress(index, total);
    let u = t * TAU;
    let v = t * TAU * WRAPS;
    let ring = MAJOR + MINOR * v.cos();
    Vec3::new(ring * u.cos(), MINOR * v.sin(), ring * u.sin())
}

pub fn spiral(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const TURNS: f32 = 6.0;
    const MAX_RADIUS: f32 = 12.0;
    const HEIGHT: f32 = 8.0;
    let t = progress(index, total);
    let a = t * TAU * TURNS;
    let r = t * MAX_RADIUS;
    Vec3::new(r * a.cos(), (t - 0.5) * HEIGHT, r * a.sin()) + tube_offset(index, 0.3)
}

pub fn trefoil(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const SCALE: f32 = 3.0;
    let s = progress(index, total) * TAU;
    let p = Vec3::new(
        s.sin() + 2.0 * (2.0 * s).sin(),
        s.cos() - 2.0 * (2.0 * s).cos(),
        -(3.0 * s).sin(),
    );
    p * SCALE + tube_offset(index, 0.6)
}

pub fn torus_knot(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const P: f32 = 3.0;
    const Q: f32 = 7.0;
    const SCALE: f32 = 3.5;
    let s = progress(index, total) * TAU;
    let r = (Q * s).cos() + 2.0;
    let p = Vec3::new(r * (P * s).cos(), r * (P * s).sin(), -(Q * s).sin());
    p * SCALE + tube_offset(index, 0.4)
}

pub fn helix(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const RADIUS: f32 = 5.0;
    const TURNS: f32 = 5.0;
    const HEIGHT: f32 = 20.0;
    let t = progress(index, total);
    let a = t * TAU * TURNS;
    Vec3::new(RADIUS * a.cos(), (t - 0.5) * HEIGHT, RADIUS * a.sin()) + tube_offset(index, 0.5)
}

pub fn dna(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const RADIUS: f32 = 4.0;
    const TURNS: f32 = 4.0;
    const HEIGHT: f32 = 22.0;
    const RUNG_EVERY: usize = 10;
    let t = progress(index, total);
    let a = t * TAU * TURNS;
    let y = (t - 0.5) * HEIGHT;
    let strand_a = Vec3::new(RADIUS * a.cos(), y, RADIUS * a.sin());
    let strand_b = Vec3::new(-RADIUS * a.cos(), y, -RADIUS * a.sin());
    if index % RUNG_EVERY == 0 {
        // base pair: a point somewhere along the rung between the strands
        let along = ((index / RUNG_EVERY) % RUNG_EVERY) as f32 / RUNG_EVERY as f32;
        strand_a.lerp(strand_b, along)
    } else if index % 2 == 0 {
        strand_a + tube_offset(index, 0.3)
    } else {
        strand_b + tube_offset(index, 0.3)
    }
}

pub fn heart(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const SCALE: f32 = 0.55;
    const LAYERS: usize = 10;
    let s = progress(index, total) * TAU;
    let x = 16.0 * s.sin().powi(3);
    let y = 13.0 * s.cos() - 5.0 * (2.0 * s).cos() - 2.0 * (3.0 * s).cos() - (4.0 * s).cos();
    // concentric outlines fill the heart; inner ones bulge in depth
    let layer = ((index % LAYERS) + 1) as f32 / LAYERS as f32;
    let depth = (index as f32 * GOLDEN_ANGLE).cos() * 3.0 * (1.0 - layer);
    Vec3::new(x * SCALE * layer, y * SCALE * layer, depth)
}

pub fn rose(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const PETALS: f32 = 5.0;
    const RADIUS: f32 = 11.0;
    let s = progress(index, total) * TAU;
    let r = RADIUS * (PETALS * s).cos();
    let z = (PETALS * s).sin() * 1.5;
    Vec3::new(r * s.cos(), r * s.sin(), z) + tube_offset(index, 0.35)
}

pub fn butterfly(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const SCALE: f32 = 2.5;
    let s = progress(index, total) * 12.0 * PI;
    let r = s.cos().exp() - 2.0 * (4.0 * s).cos() - (s / 12.0).sin().powi(5);
    let wing_depth = (index as f32 * GOLDEN_ANGLE).sin() * 0.8;
    Vec3::new(s.sin() * r * SCALE, s.cos() * r * SCALE, wing_depth)
}

pub fn infinity(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const RADIUS: f32 = 12.0;
    let s = progress(index, total) * TAU;
    let d = 1.0 + s.sin() * s.sin();
    let p = Vec3::new(RADIUS * s.cos() / d, RADIUS * s.sin() * s.cos() / d, 0.0);
    p + tube_offset(index, 0.8)
}

pub fn shell(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    const TURNS: f32 = 3.0;
    const GROWTH: f32 = 0.18;
    const SCALE: f32 = 0.3;
    let t = progress(index, total);
    let u = t * TAU * TURNS;
    let v = (index as f32 * GOLDEN_ANGLE) % TAU;
    let g = (GROWTH * u).exp();
    let tube = 1.0 + v.cos();
    Vec3::new(
        g * u.cos() * tube * SCALE,
        (g * v.sin() - u * 1.5) * SCALE + 4.0,
        g * u.sin() * tube * SCALE,
    )
}
