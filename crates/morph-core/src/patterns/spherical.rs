use super::random_in_ball;
use glam::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

const SPHERE_RADIUS: f32 = 10.0;

/// Fibonacci-lattice angles for an even spherical covering.
#[inline]
fn lattice_angles(index: usize, total: usize) -> (f32, f32) {
    let n = total.max(1) as f32;
    let phi = (-1.0 + 2.0 * index as f32 / n).clamp(-1.0, 1.0).acos();
    let theta = (n * PI).sqrt() * phi;
    (phi, theta)
}

#[inline]
fn on_sphere(phi: f32, theta: f32, radius: f32) -> Vec3 {
    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

pub fn sphere(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let (phi, theta) = lattice_angles(index, total);
    on_sphere(phi, theta, SPHERE_RADIUS)
}

pub fn explosion(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    let (phi, theta) = lattice_angles(index, total);
    // shell fragments flung to random distances, with some debris inside
    let radius = SPHERE_RADIUS * (0.4 + rng.gen::<f32>() * 1.6);
    on_sphere(phi, theta, radius) + random_in_ball(rng, 1.5)
}
