// Host-side integration tests for the pattern catalog.

use morph_core::{Family, MorphError, PatternLibrary, PATTERNS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn catalog_has_enough_unique_patterns() {
    assert!(PATTERNS.len() >= 25, "only {} patterns", PATTERNS.len());
    let names: HashSet<_> = PATTERNS.iter().map(|p| p.name).collect();
    assert_eq!(names.len(), PATTERNS.len(), "duplicate pattern names");
}

#[test]
fn every_family_is_represented() {
    let families: HashSet<Family> = PATTERNS.iter().map(|p| p.family).collect();
    for f in [
        Family::Spherical,
        Family::Lattice,
        Family::Curve,
        Family::Radial,
        Family::Branching,
        Family::Clustered,
        Family::Field,
        Family::Composite,
    ] {
        assert!(families.contains(&f), "no pattern in family {f:?}");
    }
}

#[test]
fn all_patterns_are_finite_for_all_sizes() {
    let lib = PatternLibrary::new();
    let mut rng = rng();
    for name in lib.names() {
        for total in [1usize, 2, 1000, 30_000] {
            for i in 0..total {
                let p = lib.generate(name, i, total, &mut rng).unwrap();
                assert!(
                    p.is_finite(),
                    "{name} produced {p:?} at index {i} of {total}"
                );
            }
        }
    }
}

#[test]
fn unknown_pattern_is_rejected() {
    let lib = PatternLibrary::new();
    let mut rng = rng();
    let err = lib.generate("hypercube", 0, 10, &mut rng).unwrap_err();
    assert_eq!(err, MorphError::UnknownPattern("hypercube".to_string()));
    assert!(!lib.contains("hypercube"));
    assert!(lib.contains("torusKnot"));
}

#[test]
fn deterministic_patterns_repeat_exactly() {
    let lib = PatternLibrary::new();
    for name in ["sphere", "cube", "torus", "heart", "wave", "ripple", "cone", "pyramid"] {
        let mut a = vec![glam::Vec3::ZERO; 500];
        let mut b = vec![glam::Vec3::ZERO; 500];
        lib.fill(name, &mut a, &mut StdRng::seed_from_u64(1)).unwrap();
        lib.fill(name, &mut b, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a, b, "{name} depends on the rng");
    }
}

#[test]
fn sphere_points_lie_on_the_sphere() {
    let lib = PatternLibrary::new();
    let mut rng = rng();
    let total = 2000;
    let first = lib.generate("sphere", 0, total, &mut rng).unwrap().length();
    for i in 0..total {
        let r = lib.generate("sphere", i, total, &mut rng).unwrap().length();
        assert!((r - first).abs() < 1e-3, "radius {r} at {i}, expected {first}");
    }
}

#[test]
fn cube_lattice_points_are_distinct() {
    let lib = PatternLibrary::new();
    let mut rng = rng();
    let total = 1000;
    let mut seen = HashSet::new();
    for i in 0..total {
        let p = lib.generate("cube", i, total, &mut rng).unwrap();
        let key = (
            (p.x * 100.0).round() as i32,
            (p.y * 100.0).round() as i32,
            (p.z * 100.0).round() as i32,
        );
        assert!(seen.insert(key), "cube index {i} collides at {p:?}");
    }
}

#[test]
fn cloud_points_stay_near_a_cluster() {
    let lib = PatternLibrary::new();
    let mut rng = rng();
    for i in 0..1000 {
        let p = lib.generate("cloud", i, 1000, &mut rng).unwrap();
        // centres are within 8 units of origin, jitter within 5 per axis
        assert!(p.length() < 20.0, "cloud point escaped: {p:?}");
    }
}

#[test]
fn atom_nucleus_is_dense() {
    let lib = PatternLibrary::new();
    let mut rng = rng();
    let total = 1000;
    for i in 0..total * 15 / 100 {
        let p = lib.generate("atom", i, total, &mut rng).unwrap();
        assert!(p.length() <= 2.0 + 1e-4, "nucleus point {i} at {p:?}");
    }
}

#[test]
fn lookup_by_index_and_position_agree() {
    let lib = PatternLibrary::new();
    for (i, name) in lib.names().enumerate() {
        assert_eq!(lib.position_of(name), Some(i));
        assert_eq!(lib.by_index(i).map(|d| d.name), Some(name));
    }
    assert!(lib.by_index(lib.len()).is_none());
}
