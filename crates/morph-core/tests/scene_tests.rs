// Host-side integration tests for the scene driver (swipe debounce, digit
// shortcuts, per-frame renderer data).

use glam::Vec2;
use morph_core::constants::{DISPERSION_MULTIPLIER, ZOOM_SCALE};
use morph_core::{
    digit_to_pattern_index, GestureConfig, Hand, HandPose, MorphConfig, SceneConfig, SceneDriver,
    PATTERNS,
};

fn make_driver(capacity: usize) -> SceneDriver {
    let config = SceneConfig {
        morph: MorphConfig {
            capacity,
            ..Default::default()
        },
        gesture: GestureConfig {
            smoothing: 1.0,
            ..Default::default()
        },
        swipe_debounce_sec: 0.5,
    };
    SceneDriver::new(config, 9).unwrap()
}

fn hand_at(x: f32) -> Hand {
    Hand::posed(&HandPose {
        wrist: Vec2::new(x, 0.8),
        ..Default::default()
    })
}

#[test]
fn swipes_cycle_patterns_with_debounce() {
    let mut d = make_driver(64);
    assert_eq!(d.morph().current_pattern(), PATTERNS[0].name);

    assert_eq!(d.on_detection(&[hand_at(0.2)], 0.0), None);
    assert_eq!(d.on_detection(&[hand_at(0.5)], 0.1), Some(PATTERNS[1].name));
    // a second swipe inside the debounce window is ignored
    assert_eq!(d.on_detection(&[hand_at(0.8)], 0.3), None);
    assert_eq!(d.morph().current_pattern(), PATTERNS[1].name);
    // and allowed again once it has passed
    assert_eq!(d.on_detection(&[hand_at(0.5)], 0.7), Some(PATTERNS[0].name));
}

#[test]
fn left_swipe_wraps_to_the_last_pattern() {
    let mut d = make_driver(16);
    d.on_detection(&[hand_at(0.7)], 0.0);
    let last = PATTERNS[PATTERNS.len() - 1].name;
    assert_eq!(d.on_detection(&[hand_at(0.4)], 1.0), Some(last));
}

#[test]
fn digits_map_to_catalog_positions() {
    assert_eq!(digit_to_pattern_index(1), Some(0));
    assert_eq!(digit_to_pattern_index(9), Some(8));
    assert_eq!(digit_to_pattern_index(0), Some(9));
    assert_eq!(digit_to_pattern_index(10), None);

    let mut d = make_driver(16);
    assert_eq!(d.select_digit(2, 0.0), Some(PATTERNS[1].name));
    assert_eq!(d.morph().current_pattern(), PATTERNS[1].name);
    assert_eq!(d.select_digit(0, 0.0), Some(PATTERNS[9].name));
    assert_eq!(d.select_digit(42, 0.0), None);
    assert_eq!(d.morph().current_pattern(), PATTERNS[9].name);
}

#[test]
fn unknown_names_do_not_change_the_scene() {
    let mut d = make_driver(16);
    d.select_pattern("galaxy", 0.0).unwrap();
    assert!(d.select_pattern("nebula", 0.5).is_err());
    assert_eq!(d.morph().current_pattern(), "galaxy");
}

#[test]
fn frame_covers_the_active_range() {
    let mut d = make_driver(100);
    d.set_active_count(30);
    let frame = d.on_frame(0.0);
    assert_eq!(frame.len(), 30);
    assert_eq!(frame.colors.len(), 30);
    assert_eq!(frame.seeds.len(), 30);
    assert_eq!(frame.position_floats().len(), 90);
    assert_eq!(frame.color_floats().len(), 90);
}

#[test]
fn idle_uniforms_are_neutral() {
    let mut d = make_driver(10);
    let u = d.on_frame(1.5).uniforms;
    assert_eq!(u.dispersion, 0.0);
    assert_eq!(u.pinch, 0.0);
    assert_eq!(u.zoom, 1.0);
    assert_eq!(u.time, 1.5);
}

#[test]
fn uniforms_follow_gestures() {
    let mut d = make_driver(10);
    let open = Hand::posed(&HandPose {
        wrist: Vec2::new(0.3, 0.8),
        extension: 1.0,
        ..Default::default()
    });
    d.on_detection(&[open, hand_at(0.7)], 0.0);
    let u = d.on_frame(0.0).uniforms;
    assert!((u.dispersion - DISPERSION_MULTIPLIER).abs() < 1e-4);
    assert!((u.zoom - 0.4 * ZOOM_SCALE).abs() < 1e-4);
}

#[test]
fn colour_base_changes_every_particle_colour() {
    let mut d = make_driver(50);
    let before = d.morph().colors().to_vec();
    d.set_color_base([1.0, 0.1, 0.1]);
    assert_eq!(d.morph().base_color(), [1.0, 0.1, 0.1]);
    assert_ne!(d.morph().colors(), &before[..]);
}
