//! Catalog of named particle patterns.
//!
//! Each pattern is a plain function `(index, total, rng) -> Vec3`. Most are
//! fully deterministic and ignore the RNG; the organic shapes (clouds,
//! explosions, snowflakes, ...) draw bounded jitter from it, so two
//! regenerations of those may differ.
//!
//! Adding a pattern means adding one entry to [`PATTERNS`]; lookup, digit
//! shortcuts and swipe cycling all walk this table.

mod branching;
mod clustered;
mod composite;
mod curves;
mod field;
mod lattice;
mod radial;
mod spherical;

use crate::error::MorphError;
use fnv::FnvHashMap;
use glam::Vec3;
use rand::{Rng, RngCore};

/// Irrational angular step (radians) that spreads consecutive indices
/// around a circle without visible banding.
pub const GOLDEN_ANGLE: f32 = 2.39996;

pub type Generator = fn(usize, usize, &mut dyn RngCore) -> Vec3;

/// Shared generation technique of a group of patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Spherical,
    Lattice,
    Curve,
    Radial,
    Branching,
    Clustered,
    Field,
    Composite,
}

pub struct PatternDef {
    pub name: &'static str,
    pub family: Family,
    pub generate: Generator,
}

impl PatternDef {
    /// Regenerate a whole buffer; `out.len()` is used as `total`.
    pub fn fill(&self, out: &mut [Vec3], rng: &mut dyn RngCore) {
        let total = out.len();
        for (i, p) in out.iter_mut().enumerate() {
            *p = (self.generate)(i, total, rng);
        }
    }
}

#[rustfmt::skip]
pub static PATTERNS: &[PatternDef] = &[
    PatternDef { name: "sphere", family: Family::Spherical, generate: spherical::sphere },
    PatternDef { name: "cube", family: Family::Lattice, generate: lattice::cube },
    PatternDef { name: "torus", family: Family::Curve, generate: curves::torus },
    PatternDef { name: "spiral", family: Family::Curve, generate: curves::spiral },
    PatternDef { name: "galaxy", family: Family::Branching, generate: branching::galaxy },
    PatternDef { name: "heart", family: Family::Curve, generate: curves::heart },
    PatternDef { name: "dna", family: Family::Curve, generate: curves::dna },
    PatternDef { name: "wave", family: Family::Field, generate: field::wave },
    PatternDef { name: "atom", family: Family::Composite, generate: composite::atom },
    PatternDef { name: "explosion", family: Family::Spherical, generate: spherical::explosion },
    PatternDef { name: "trefoil", family: Family::Curve, generate: curves::trefoil },
    PatternDef { name: "torusKnot", family: Family::Curve, generate: curves::torus_knot },
    PatternDef { name: "helix", family: Family::Curve, generate: curves::helix },
    PatternDef { name: "rose", family: Family::Curve, generate: curves::rose },
    PatternDef { name: "butterfly", family: Family::Curve, generate: curves::butterfly },
    PatternDef { name: "infinity", family: Family::Curve, generate: curves::infinity },
    PatternDef { name: "shell", family: Family::Curve, generate: curves::shell },
    PatternDef { name: "cone", family: Family::Radial, generate: radial::cone },
    PatternDef { name: "pyramid", family: Family::Radial, generate: radial::pyramid },
    PatternDef { name: "diamond", family: Family::Radial, generate: radial::diamond },
    PatternDef { name: "tornado", family: Family::Radial, generate: radial::tornado },
    PatternDef { name: "vortex", family: Family::Radial, generate: radial::vortex },
    PatternDef { name: "snowflake", family: Family::Branching, generate: branching::snowflake },
    PatternDef { name: "lightning", family: Family::Branching, generate: branching::lightning },
    PatternDef { name: "cloud", family: Family::Clustered, generate: clustered::cloud },
    PatternDef { name: "ripple", family: Family::Field, generate: field::ripple },
    PatternDef { name: "orbit", family: Family::Composite, generate: composite::orbit },
];

/// Name-indexed view over [`PATTERNS`].
pub struct PatternLibrary {
    by_name: FnvHashMap<&'static str, usize>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLibrary {
    pub fn new() -> Self {
        let by_name = PATTERNS
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name, i))
            .collect();
        Self { by_name }
    }

    pub fn len(&self) -> usize {
        PATTERNS.len()
    }

    pub fn is_empty(&self) -> bool {
        PATTERNS.is_empty()
    }

    /// Pattern names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        PATTERNS.iter().map(|def| def.name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&'static PatternDef, MorphError> {
        self.by_name
            .get(name)
            .map(|&i| &PATTERNS[i])
            .ok_or_else(|| MorphError::UnknownPattern(name.to_string()))
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn by_index(&self, index: usize) -> Option<&'static PatternDef> {
        PATTERNS.get(index)
    }

    /// Position of particle `index` out of `total` for the named pattern.
    ///
    /// `total` must be non-zero.
    pub fn generate(
        &self,
        name: &str,
        index: usize,
        total: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec3, MorphError> {
        let def = self.get(name)?;
        Ok((def.generate)(index, total, rng))
    }

    pub fn fill(
        &self,
        name: &str,
        out: &mut [Vec3],
        rng: &mut dyn RngCore,
    ) -> Result<(), MorphError> {
        self.get(name)?.fill(out, rng);
        Ok(())
    }
}

// --- helpers shared by the generator families ---

#[inline]
fn progress(index: usize, total: usize) -> f32 {
    index as f32 / total.max(1) as f32
}

#[inline]
fn signed_unit(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>() * 2.0 - 1.0
}

#[inline]
fn jitter(rng: &mut dyn RngCore, amount: f32) -> Vec3 {
    Vec3::new(signed_unit(rng), signed_unit(rng), signed_unit(rng)) * amount
}

/// Uniform sample inside a ball of `radius`.
fn random_in_ball(rng: &mut dyn RngCore, radius: f32) -> Vec3 {
    let r = radius * rng.gen::<f32>().cbrt();
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    let phi = (signed_unit(rng)).clamp(-1.0, 1.0).acos();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Small deterministic offset around a curve so it reads as a tube.
#[inline]
fn tube_offset(index: usize, radius: f32) -> Vec3 {
    let a = index as f32 * GOLDEN_ANGLE;
    Vec3::new(a.cos(), a.sin(), (a * 0.5).cos()) * radius
}
