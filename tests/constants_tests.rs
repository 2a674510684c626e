// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn visible_band_is_a_proper_central_band() {
    // Both fractions inside the viewport, top edge limit below bottom edge limit
    assert!(VISIBLE_BAND_TOP_FRAC > 0.0 && VISIBLE_BAND_TOP_FRAC <= 1.0);
    assert!(VISIBLE_BAND_BOTTOM_FRAC >= 0.0 && VISIBLE_BAND_BOTTOM_FRAC < 1.0);
    assert!(VISIBLE_BAND_TOP_FRAC > VISIBLE_BAND_BOTTOM_FRAC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_blend_weights() {
    // Per-frame blend weights must be in (0, 1] or easing would diverge
    assert!(LERP_STEADY > 0.0 && LERP_STEADY <= 1.0);
    assert!(LERP_CATCH_UP > 0.0 && LERP_CATCH_UP <= 1.0);

    // Catching up after a section change should be faster than steady following
    assert!(LERP_CATCH_UP > LERP_STEADY);
    assert!(CATCH_UP_WINDOW_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_adjustment_only_shrinks() {
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert!(MOBILE_OFFSET_X_FACTOR > 0.0 && MOBILE_OFFSET_X_FACTOR <= 1.0);
    assert!(MOBILE_OFFSET_Y_FACTOR > 0.0 && MOBILE_OFFSET_Y_FACTOR <= 1.0);
    assert!(MOBILE_SCALE_FACTOR > 0.0 && MOBILE_SCALE_FACTOR <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_fits_in_the_camera_view() {
    assert!(SCENE_SPAN_X > 0.0 && SCENE_SPAN_Y > 0.0);

    // The full span at z = 0 should stay inside the vertical field of view
    let half_height_at_origin = CAMERA_Z * (CAMERA_FOVY_RAD * 0.5).tan();
    assert!(SCENE_SPAN_Y <= half_height_at_origin);

    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
    assert!(CAMERA_Z > CAMERA_ZNEAR && CAMERA_Z < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_spin_is_gentle() {
    assert!(IDLE_SPIN_Y_PER_SEC.abs() < std::f32::consts::TAU);
    assert!(IDLE_WOBBLE_AMP >= 0.0 && IDLE_WOBBLE_AMP < std::f32::consts::FRAC_PI_2);
    assert!(IDLE_WOBBLE_HZ > 0.0);
}

#[test]
fn colors_and_light_are_usable() {
    for color in DEFAULT_OBJECT_COLORS {
        assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
    }
    let len = LIGHT_DIR.iter().map(|c| c * c).sum::<f32>().sqrt();
    assert!(len > 0.0);
    assert!(MODEL_BASE_SIZE > 0.0);
}

#[test]
fn dom_hooks_are_data_attributes() {
    for attr in [SECTION_ATTR, TARGETS_ATTR, MODEL_BASE_ATTR, BREAKPOINT_ATTR, LOG_LEVEL_ATTR] {
        assert!(attr.starts_with("data-"), "{} is not a data attribute", attr);
    }
    assert!(!DEFAULT_CANVAS_ID.is_empty());
    assert!(DEFAULT_MODEL_BASE.starts_with('/'));
}
