// Host-side tests for web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn feedback_element_ids_are_distinct_and_selector_safe() {
    assert_ne!(LOADING_OVERLAY_ID, TOAST_ID);
    for id in [LOADING_OVERLAY_ID, TOAST_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "{id} should be a bare id");
        assert!(!id.contains(char::is_whitespace), "{id} contains whitespace");
    }
}

#[test]
fn hidden_style_actually_hides() {
    assert!(HIDDEN_STYLE.contains("display:none"));
    assert!(!HIDDEN_CLASS.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_keeps_canvas_transparent() {
    // the model is composited over the camera preview
    assert!(RENDERER_ALPHA);
    assert!(DEFAULT_PIXEL_RATIO > 0.0);
}
