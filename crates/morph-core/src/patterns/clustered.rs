use super::signed_unit;
use glam::Vec3;
use rand::RngCore;

const CLOUD_CENTERS: [[f32; 3]; 5] = [
    [0.0, 2.0, 0.0],
    [-7.0, 0.0, 2.0],
    [7.0, 0.5, -1.0],
    [-3.0, 3.5, -4.0],
    [4.0, -1.0, 4.0],
];
const CLOUD_SPREAD: f32 = 5.0;

pub fn cloud(index: usize, total: usize, rng: &mut dyn RngCore) -> Vec3 {
    let per_cluster = total.div_ceil(CLOUD_CENTERS.len()).max(1);
    let cluster = (index / per_cluster).min(CLOUD_CENTERS.len() - 1);
    let center = Vec3::from_array(CLOUD_CENTERS[cluster]);
    // puffs are wider than tall
    center
        + Vec3::new(
            signed_unit(rng) * CLOUD_SPREAD,
            signed_unit(rng) * CLOUD_SPREAD * 0.5,
            signed_unit(rng) * CLOUD_SPREAD,
        )
}
