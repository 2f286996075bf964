use glam::Vec3;
use rand::RngCore;

const FIELD_SIZE: f32 = 26.0;

/// Grid cell `(x, z)` in world units for particle `index`.
fn grid_cell(index: usize, total: usize) -> (f32, f32) {
    let side = ((total.max(1) as f32).sqrt().ceil() as usize).max(1);
    let gx = (index % side) as f32 / side as f32;
    let gz = (index / side) as f32 / side as f32;
    ((gx - 0.5) * FIELD_SIZE, (gz - 0.5) * FIELD_SIZE)
}

pub fn wave(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let (x, z) = grid_cell(index, total);
    let y = (x * 0.5).sin() * (z * 0.5).cos() * 2.5;
    Vec3::new(x, y, z)
}

pub fn ripple(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let (x, z) = grid_cell(index, total);
    let r = (x * x + z * z).sqrt();
    let y = (r * 1.2).sin() * 3.0 * (-r * 0.12).exp();
    Vec3::new(x, y, z)
}
