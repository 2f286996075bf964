// Conversion of the detector's flat landmark arrays into core hands.
// Kept free of web-sys so host tests can include it directly.

use glam::Vec3;
use morph_core::gesture::LANDMARK_COUNT;
use morph_core::{Hand, Hands};

pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

/// Parse `hand_count` hands packed as `[x, y, z] * 21` each.
///
/// Truncated or non-finite hands are dropped rather than reported as errors:
/// an unusable detection is treated the same as no hand at all.
pub fn parse_hands(flat: &[f32], hand_count: usize) -> Hands {
    flat.chunks_exact(FLOATS_PER_HAND)
        .take(hand_count)
        .filter_map(|chunk| {
            let points: Vec<Vec3> = chunk
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2]))
                .collect();
            Hand::from_points(&points)
        })
        .collect()
}
