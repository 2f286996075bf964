//! RGB <-> HSL conversion and per-particle colour jitter.
//!
//! All channels are in `[0, 1]`; hue wraps.

use crate::constants::{HUE_JITTER, LIGHTNESS_JITTER};
use rand::{Rng, RngCore};

pub fn rgb_to_hsl(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) * 0.5;
    let d = max - min;
    if d <= f32::EPSILON {
        return [0.0, 0.0, l];
    }
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    [h / 6.0, s, l]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_rgb(hsl: [f32; 3]) -> [f32; 3] {
    let [h, s, l] = hsl;
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

/// Base colour nudged by a random hue/lightness offset.
pub fn jittered(base: [f32; 3], rng: &mut dyn RngCore) -> [f32; 3] {
    let [h, s, l] = rgb_to_hsl(base);
    let dh = rng.gen_range(-HUE_JITTER..=HUE_JITTER);
    let dl = rng.gen_range(-LIGHTNESS_JITTER..=LIGHTNESS_JITTER);
    hsl_to_rgb([(h + dh).rem_euclid(1.0), s, (l + dl).clamp(0.0, 1.0)])
}

/// Refill `out` with independently jittered variants of `base`.
pub fn fill_jittered(base: [f32; 3], out: &mut [[f32; 3]], rng: &mut dyn RngCore) {
    for c in out.iter_mut() {
        *c = jittered(base, rng);
    }
}
