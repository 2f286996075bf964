//! Height bands with a level-dependent radius.

use super::{progress, signed_unit, GOLDEN_ANGLE};
use glam::Vec3;
use rand::{Rng, RngCore};

const HEIGHT: f32 = 18.0;
const BASE_RADIUS: f32 = 9.0;

#[inline]
fn band(index: usize, total: usize) -> (f32, f32) {
    let h = progress(index, total);
    let angle = index as f32 * GOLDEN_ANGLE;
    (h, angle)
}

pub fn cone(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let (h, a) = band(index, total);
    let r = (1.0 - h) * BASE_RADIUS;
    Vec3::new(r * a.cos(), (h - 0.5) * HEIGHT, r * a.sin())
}

pub fn pyramid(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let (h, a) = band(index, total);
    let half = (1.0 - h) * BASE_RADIUS;
    // walk the square cross-section perimeter: side 0..4, offset -1..1 along it
    let perimeter = (a / std::f32::consts::TAU).fract() * 4.0;
    let side = perimeter.floor() as u32;
    let along = perimeter.fract() * 2.0 - 1.0;
    let (x, z) = match side {
        0 => (half, along * half),
        1 => (-along * half, half),
        2 => (-half, -along * half),
        _ => (along * half, -half),
    };
    Vec3::new(x, (h - 0.5) * HEIGHT, z)
}

pub fn diamond(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let (h, a) = band(index, total);
    // widest at the girdle, tapering to both tips
    let level = 1.0 - (2.0 * h - 1.0).abs();
    let r = level * BASE_RADIUS;
    Vec3::new(r * a.cos(), (h - 0.5) * HEIGHT, r * a.sin())
}

pub fn tornado(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    let (h, a) = band(index, total);
    let r = 0.8 + h * h * BASE_RADIUS;
    let r = r * (0.85 + rng.gen::<f32>() * 0.3);
    let twist = a + h * 20.0;
    Vec3::new(r * twist.cos(), (h - 0.5) * HEIGHT, r * twist.sin())
        + Vec3::Y * signed_unit(rng) * 0.3
}

pub fn vortex(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let (t, a) = band(index, total);
    let r = t.sqrt() * BASE_RADIUS * 1.3;
    let swirl = a + r * 0.4;
    // funnel sinks toward the centre
    let y = -8.0 / (1.0 + r) + 2.0;
    Vec3::new(r * swirl.cos(), y, r * swirl.sin())
}
