// Host-side tests for HSL conversion and colour jitter.

use morph_core::color::{hsl_to_rgb, jittered, rgb_to_hsl};
use morph_core::constants::{HUE_JITTER, LIGHTNESS_JITTER};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
}

#[test]
fn primaries_convert_to_expected_hues() {
    assert!(close(rgb_to_hsl([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]));
    assert!(close(rgb_to_hsl([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 0.5]));
    assert!(close(rgb_to_hsl([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 0.5]));
    assert!(close(rgb_to_hsl([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]));
}

#[test]
fn hsl_round_trips_the_default_palette() {
    for rgb in [[0.0, 0.8, 1.0], [0.9, 0.3, 0.3], [0.3, 0.9, 0.4], [1.0, 1.0, 1.0]] {
        let back = hsl_to_rgb(rgb_to_hsl(rgb));
        assert!(close(rgb, back), "{rgb:?} -> {back:?}");
    }
}

#[test]
fn jitter_stays_within_bounds() {
    let base = [0.2, 0.6, 0.9];
    let [h0, s0, l0] = rgb_to_hsl(base);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..2000 {
        let c = jittered(base, &mut rng);
        assert!(c.iter().all(|v| (0.0..=1.0).contains(v)), "{c:?}");
        let [h, s, l] = rgb_to_hsl(c);
        let dh = (h - h0).abs().min(1.0 - (h - h0).abs());
        assert!(dh <= HUE_JITTER + 1e-3, "hue moved by {dh}");
        assert!((l - l0).abs() <= LIGHTNESS_JITTER + 1e-3, "lightness moved");
        assert!((s - s0).abs() < 1e-3, "saturation changed");
    }
}
