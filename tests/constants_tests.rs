// Host-side tests for page constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_band_is_sane() {
    assert!(MIN_STAR_OPACITY > 0.0);
    assert!(MIN_STAR_OPACITY < MAX_STAR_OPACITY);
    assert!(MAX_STAR_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn debounce_timing_is_within_the_quiet_window() {
    assert!((150.0..=200.0).contains(&RESIZE_DEBOUNCE_MS));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_options_are_valid() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
    assert_eq!(REVEAL_ROOT_MARGIN.split_whitespace().count(), 4);
    assert!(REVEAL_SELECTOR.starts_with('.'));
    assert!(HEADER_SELECTOR.starts_with('.'));
}

#[test]
fn header_shadow_starts_past_the_threshold() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(HEADER_SCROLL_THRESHOLD_PX));
    assert!(header_scrolled(HEADER_SCROLL_THRESHOLD_PX + 0.5));
    assert!(header_scrolled(2400.0));
}

#[test]
fn star_attributes_are_data_attributes() {
    assert!(STAR_PRESET_ATTR.starts_with("data-"));
    assert!(STAR_COUNT_ATTR.starts_with("data-"));
    assert!(!STARS_CANVAS_ID.starts_with('#'));
}
