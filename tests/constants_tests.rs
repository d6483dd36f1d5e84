// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so its page constants are included directly.

#![allow(dead_code)]
mod page {
    include!("../src/constants.rs");
}

use fx_core::constants::*;
use page::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_reaches_zero_exactly_at_fade_frames() {
    assert!((FADE_FRAMES as f32 * FADE_PER_FRAME - 1.0).abs() < 1e-6);
    assert!(FADE_PER_FRAME > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ranges_are_ordered() {
    assert!(RIPPLE_RING_SPEED_MIN < RIPPLE_RING_SPEED_MAX);
    assert!(RIPPLE_RING_MAX_RADIUS_MIN < RIPPLE_RING_MAX_RADIUS_MAX);
    assert!(RIPPLE_RING_WIDTH_MIN < RIPPLE_RING_WIDTH_MAX);
    assert!(RIPPLE_PARTICLE_SPEED_MIN < RIPPLE_PARTICLE_SPEED_MAX);
    assert!(STAR_SIZE_MIN < STAR_SIZE_MAX);
    assert!(WEB_SIZE_MIN < WEB_SIZE_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_reach_exceeds_pair_reach() {
    assert!(WEB_POINTER_DISTANCE > WEB_CONNECTION_DISTANCE);
    assert!(WEB_POINTER_OPACITY > WEB_PAIR_OPACITY);
    assert!(WEB_POINTER_LINE_WIDTH > WEB_PAIR_LINE_WIDTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlays_stack_ripple_over_stars_over_web() {
    assert!(RIPPLE_Z_INDEX > STAR_Z_INDEX);
    assert!(STAR_Z_INDEX > WEB_Z_INDEX);
    assert!(WEB_CANVAS_OPACITY > 0.0 && WEB_CANVAS_OPACITY <= 1.0);
}

#[test]
fn overlay_style_ignores_pointer_input() {
    let css = overlay_canvas_style(RIPPLE_Z_INDEX, None);
    assert!(css.contains("pointer-events: none"));
    assert!(css.contains("z-index: 9999"));
    assert!(!css.contains("opacity"));
    let css = overlay_canvas_style(WEB_Z_INDEX, Some(WEB_CANVAS_OPACITY));
    assert!(css.contains("opacity: 0.6"));
}

#[test]
fn distinct_canvas_ids() {
    assert_ne!(RIPPLE_CANVAS_ID, STAR_CANVAS_ID);
    assert_ne!(STAR_CANVAS_ID, WEB_CANVAS_ID);
    assert_ne!(RIPPLE_CANVAS_ID, WEB_CANVAS_ID);
}
