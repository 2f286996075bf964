//! Fixed-capacity particle buffer that morphs between patterns.
//!
//! `retarget` is the only writer of the source/target pair; `advance` and
//! `position` only read them, so a render loop can call `advance` every
//! frame while pattern switches arrive from input handlers.

use crate::color;
use crate::config::MorphConfig;
use crate::error::MorphError;
use crate::patterns::PatternLibrary;
use glam::Vec3;
use rand::prelude::*;

/// Smooth start and stop; monotone with `ease(0.5) == 0.5`.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) * 0.5
    }
}

#[derive(Clone, Debug)]
pub struct MorphState {
    pub current_pattern: &'static str,
    /// Timestamp (seconds) of the last retarget; `None` until the first one.
    pub morph_start: Option<f64>,
    pub duration_sec: f64,
}

impl MorphState {
    /// Eased blend factor in `[0, 1]`, pinned at 1 once the morph completes.
    pub fn blend_factor(&self, now_sec: f64) -> f32 {
        let Some(start) = self.morph_start else {
            return 1.0;
        };
        if self.duration_sec.is_nan() || self.duration_sec <= 0.0 {
            return 1.0;
        }
        let progress = (now_sec - start) / self.duration_sec;
        if progress.is_nan() {
            return 1.0;
        }
        ease_in_out_cubic(progress.clamp(0.0, 1.0) as f32)
    }
}

pub struct MorphController {
    library: PatternLibrary,
    source: Vec<Vec3>,
    target: Vec<Vec3>,
    seeds: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    base_color: [f32; 3],
    active: usize,
    state: MorphState,
    rng: StdRng,
}

impl MorphController {
    pub fn new(config: &MorphConfig, seed: u64) -> Result<Self, MorphError> {
        if config.capacity == 0 {
            return Err(MorphError::ZeroCapacity);
        }
        if !config.duration_sec.is_finite() || config.duration_sec < 0.0 {
            return Err(MorphError::InvalidDuration(config.duration_sec));
        }
        let library = PatternLibrary::new();
        let def = library.get(&config.initial_pattern)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let n = config.capacity;

        let seeds = (0..n)
            .map(|_| Vec3::new(rng.gen(), rng.gen(), rng.gen()))
            .collect::<Vec<_>>();
        let mut target = vec![Vec3::ZERO; n];
        def.fill(&mut target, &mut rng);
        let source = target.clone();
        let base_color = clamp_rgb(config.base_color);
        let mut colors = vec![base_color; n];
        color::fill_jittered(base_color, &mut colors, &mut rng);

        log::info!("[morph] {} particles, initial pattern `{}`", n, def.name);
        Ok(Self {
            library,
            source,
            target,
            seeds,
            colors,
            base_color,
            active: n,
            state: MorphState {
                current_pattern: def.name,
                morph_start: None,
                duration_sec: config.duration_sec,
            },
            rng,
        })
    }

    /// Start morphing toward `name` from the shape currently being approached.
    ///
    /// Unknown names are rejected before any buffer is touched.
    pub fn retarget(&mut self, name: &str, now_sec: f64) -> Result<(), MorphError> {
        let def = self.library.get(name)?;
        self.source.copy_from_slice(&self.target);
        def.fill(&mut self.target, &mut self.rng);
        self.state.current_pattern = def.name;
        self.state.morph_start = Some(now_sec);
        log::info!(
            "[morph] -> `{}` ({} particles, {:.2}s)",
            def.name,
            self.target.len(),
            self.state.duration_sec
        );
        Ok(())
    }

    pub fn blend_factor(&self, now_sec: f64) -> f32 {
        self.state.blend_factor(now_sec)
    }

    pub fn is_morphing(&self, now_sec: f64) -> bool {
        self.blend_factor(now_sec) < 1.0
    }

    /// Blended position of particle `index`.
    pub fn position(&self, index: usize, now_sec: f64) -> Option<Vec3> {
        let k = self.blend_factor(now_sec);
        let (s, t) = (self.source.get(index)?, self.target.get(index)?);
        Some(s.lerp(*t, k))
    }

    /// Write blended positions of the active range into `out`.
    ///
    /// Returns the number of positions written.
    pub fn advance(&self, now_sec: f64, out: &mut [Vec3]) -> usize {
        let k = self.blend_factor(now_sec);
        let n = self.active.min(out.len());
        for ((o, s), t) in out[..n]
            .iter_mut()
            .zip(&self.source[..n])
            .zip(&self.target[..n])
        {
            *o = s.lerp(*t, k);
        }
        n
    }

    /// Like [`advance`](Self::advance) but sizes `out` to the active range.
    pub fn advance_into(&self, now_sec: f64, out: &mut Vec<Vec3>) {
        out.resize(self.active, Vec3::ZERO);
        self.advance(now_sec, out);
    }

    pub fn set_color_base(&mut self, rgb: [f32; 3]) {
        self.base_color = clamp_rgb(rgb);
        color::fill_jittered(self.base_color, &mut self.colors, &mut self.rng);
    }

    /// Set the rendered particle range. Buffers are never reallocated, so
    /// requests above capacity are clamped. Returns the effective count.
    pub fn set_active_count(&mut self, count: usize) -> usize {
        let capacity = self.capacity();
        if count > capacity {
            log::warn!(
                "[morph] requested {} particles, clamped to capacity {}",
                count,
                capacity
            );
        }
        self.active = count.min(capacity);
        self.active
    }

    pub fn capacity(&self) -> usize {
        self.target.len()
    }

    pub fn active_count(&self) -> usize {
        self.active
    }

    pub fn current_pattern(&self) -> &'static str {
        self.state.current_pattern
    }

    pub fn state(&self) -> &MorphState {
        &self.state
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn sources(&self) -> &[Vec3] {
        &self.source
    }

    pub fn targets(&self) -> &[Vec3] {
        &self.target
    }

    pub fn seeds(&self) -> &[Vec3] {
        &self.seeds
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn base_color(&self) -> [f32; 3] {
        self.base_color
    }
}

#[inline]
fn clamp_rgb(rgb: [f32; 3]) -> [f32; 3] {
    rgb.map(|c| c.clamp(0.0, 1.0))
}
