// Host-side integration tests for gesture normalization.

use glam::{Vec2, Vec3};
use morph_core::constants::IDLE_OPENNESS;
use morph_core::{
    GestureConfig, GestureLabel, GestureNormalizer, Hand, HandPose, MorphError, Swipe,
};

fn normalizer(smoothing: f32) -> GestureNormalizer {
    GestureNormalizer::new(GestureConfig {
        smoothing,
        ..Default::default()
    })
    .unwrap()
}

fn hand(x: f32, extension: f32) -> Hand {
    Hand::posed(&HandPose {
        wrist: Vec2::new(x, 0.8),
        extension,
        ..Default::default()
    })
}

fn settle(g: &mut GestureNormalizer, ticks: usize) {
    for _ in 0..ticks {
        g.tick();
    }
}

#[test]
fn no_hands_converges_to_idle_openness() {
    let mut g = normalizer(0.1);
    g.ingest(&[hand(0.5, 1.0)]);
    settle(&mut g, 200);
    assert!(g.state().openness > 0.9);

    g.ingest(&[]);
    assert!(!g.state().hand_present);
    // smoothed value is not snapped
    assert!(g.state().openness > 0.9);
    settle(&mut g, 500);
    assert!((g.state().openness - IDLE_OPENNESS).abs() < 1e-3);
    assert_eq!(g.label(), GestureLabel::Idle);
}

#[test]
fn smoothing_converges_for_any_factor() {
    for k in [0.01_f32, 0.05, 0.1, 0.5, 1.0] {
        let mut g = normalizer(k);
        g.ingest(&[hand(0.3, 0.0)]);
        settle(&mut g, 2000);
        let target = hand(0.3, 0.0).openness();
        let s = g.state();
        assert!((s.openness - target).abs() < 1e-3, "k={k}: {}", s.openness);
        assert!((s.position - Vec2::new(0.3, 0.8)).length() < 1e-3, "k={k}");
    }
}

#[test]
fn invalid_smoothing_is_rejected() {
    for k in [0.0_f32, -0.5, 1.5, f32::NAN] {
        let result = GestureNormalizer::new(GestureConfig {
            smoothing: k,
            ..Default::default()
        });
        assert!(matches!(result, Err(MorphError::InvalidSmoothing(_))), "k={k}");
    }
}

#[test]
fn open_palm_reads_open_and_fist_reads_closed() {
    let open = hand(0.5, 1.0);
    let fist = hand(0.5, 0.0);
    assert!(open.openness() > 0.8, "open = {}", open.openness());
    assert!(fist.openness() < 0.2, "fist = {}", fist.openness());
    assert!(open.openness_raw() > fist.openness_raw());
}

#[test]
fn pinch_is_monotonic_in_distance() {
    let mut prev = f32::INFINITY;
    for step in 0..=30 {
        let gap = step as f32 * 0.01;
        let h = Hand::posed(&HandPose {
            pinch_gap: Some(gap),
            ..Default::default()
        });
        let p = h.pinch();
        assert!((0.0..=1.0).contains(&p));
        assert!(p <= prev, "pinch rose from {prev} to {p} at gap {gap}");
        prev = p;
    }
    assert_eq!(prev, 0.0, "gaps beyond 0.2 give no pinch");
}

#[test]
fn rotation_follows_palm_tilt() {
    let upright = hand(0.5, 0.5);
    assert!(upright.rotation().abs() < 1e-5);
    for tilt in [-1.0_f32, -0.3, 0.4, 1.4] {
        let h = Hand::posed(&HandPose {
            tilt,
            ..Default::default()
        });
        assert!((h.rotation() - tilt).abs() < 1e-4, "tilt {tilt}");
    }
}

#[test]
fn small_wrist_moves_never_swipe() {
    let mut g = normalizer(0.1);
    g.ingest(&[hand(0.5, 0.5)]);
    for x in [0.55, 0.62, 0.64, 0.40, 0.36] {
        g.ingest(&[hand(x, 0.5)]);
        assert_eq!(g.swipe(), None, "swipe at x={x}");
    }
}

#[test]
fn large_wrist_moves_swipe_in_the_right_direction() {
    let mut g = normalizer(0.1);
    g.ingest(&[hand(0.3, 0.5)]);
    assert_eq!(g.swipe(), None, "first sample only seeds the reference");
    g.ingest(&[hand(0.5, 0.5)]);
    assert_eq!(g.swipe(), Some(Swipe::Right));
    // one-shot: holding still clears it
    g.ingest(&[hand(0.5, 0.5)]);
    assert_eq!(g.swipe(), None);
    g.ingest(&[hand(0.3, 0.5)]);
    assert_eq!(g.swipe(), Some(Swipe::Left));
}

#[test]
fn losing_the_hand_clears_swipe_and_reference() {
    let mut g = normalizer(0.1);
    g.ingest(&[hand(0.2, 0.5)]);
    g.ingest(&[hand(0.6, 0.5)]);
    assert_eq!(g.swipe(), Some(Swipe::Right));
    g.ingest(&[]);
    assert_eq!(g.swipe(), None);
    // re-entering on the far side does not count as a swipe
    g.ingest(&[hand(0.1, 0.5)]);
    assert_eq!(g.swipe(), None);
}

#[test]
fn two_hand_distance_holds_when_second_hand_leaves() {
    let mut g = normalizer(0.2);
    g.ingest(&[hand(0.2, 0.5), hand(0.8, 0.5)]);
    assert!(g.state().two_hands_present);
    settle(&mut g, 300);
    let d = g.state().hands_distance;
    assert!((d - 0.6).abs() < 1e-3, "distance {d}");

    g.ingest(&[hand(0.2, 0.5)]);
    assert!(!g.state().two_hands_present);
    settle(&mut g, 300);
    assert!((g.state().hands_distance - d).abs() < 1e-6);
}

#[test]
fn label_priority_order() {
    let mut g = normalizer(1.0);

    let pinching = Hand::posed(&HandPose {
        extension: 1.0,
        pinch_gap: Some(0.01),
        ..Default::default()
    });
    g.ingest(&[pinching]);
    g.tick();
    assert_eq!(g.label(), GestureLabel::Pinch);

    g.ingest(&[hand(0.5, 1.0)]);
    g.tick();
    assert_eq!(g.label(), GestureLabel::Open);

    g.ingest(&[hand(0.5, 0.0)]);
    g.tick();
    assert_eq!(g.label(), GestureLabel::Closed);

    let tilted = Hand::posed(&HandPose {
        tilt: 1.4,
        ..Default::default()
    });
    g.ingest(&[tilted]);
    g.tick();
    assert_eq!(g.label(), GestureLabel::Rotating);

    g.ingest(&[hand(0.5, 0.5), hand(0.9, 0.5)]);
    g.tick();
    assert_eq!(g.label(), GestureLabel::Zoom);

    g.ingest(&[hand(0.5, 0.5)]);
    g.tick();
    assert_eq!(g.label(), GestureLabel::Tracking);
    assert_eq!(g.label().as_str(), "tracking");
}

#[test]
fn incomplete_landmark_sets_are_not_hands() {
    let points = vec![Vec3::new(0.5, 0.5, 0.0); 20];
    assert!(Hand::from_points(&points).is_none());
    let points = vec![Vec3::new(0.5, 0.5, 0.0); 21];
    assert!(Hand::from_points(&points).is_some());
}

#[test]
fn non_finite_landmarks_are_rejected() {
    let mut points = hand(0.5, 0.5).landmarks.to_vec();
    points[8].x = f32::NAN;
    assert!(Hand::from_points(&points).is_none());
    points[8].x = 0.5;
    points[0].y = f32::INFINITY;
    assert!(Hand::from_points(&points).is_none());
}

#[test]
fn nan_hand_counts_as_absent_and_state_stays_finite() {
    let mut g = normalizer(0.1);
    let mut bad = hand(0.5, 0.5);
    bad.landmarks[8] = Vec3::new(f32::NAN, 0.3, 0.0);

    g.ingest(&[bad]);
    assert!(!g.state().hand_present);
    g.tick();
    g.ingest(&[]);
    settle(&mut g, 1000);
    let s = g.state();
    assert!(s.openness.is_finite() && s.pinch.is_finite() && s.rotation.is_finite());
    assert!((s.openness - IDLE_OPENNESS).abs() < 1e-3);

    // a bad second hand does not count toward two-hand zoom
    g.ingest(&[hand(0.4, 0.5), bad]);
    assert!(g.state().hand_present);
    assert!(!g.state().two_hands_present);
    settle(&mut g, 10);
    assert!(g.state().hands_distance.is_finite());
}
