use glam::Vec3;
use rand::RngCore;

const CUBE_SIZE: f32 = 14.0;

/// Smallest `side` with `side^3 >= total`.
fn grid_side(total: usize) -> usize {
    let mut side = (total.max(1) as f64).cbrt().round().max(1.0) as usize;
    while side * side * side < total {
        side += 1;
    }
    side
}

pub fn cube(index: usize, total: usize, _rng: &mut dyn RngCore) -> Vec3 {
    let side = grid_side(total);
    let x = index % side;
    let y = (index / side) % side;
    let z = index / (side * side);
    let spacing = CUBE_SIZE / side as f32;
    let offset = (side as f32 - 1.0) * 0.5;
    Vec3::new(
        (x as f32 - offset) * spacing,
        (y as f32 - offset) * spacing,
        (z as f32 - offset) * spacing,
    )
}
