// Page wiring and timing constants shared by the web front-end.
//
// Kept free of web-sys types so host-side tests can include this file.

// Star-field canvas
pub const STARS_CANVAS_ID: &str = "stars-canvas";
pub const STAR_PRESET_ATTR: &str = "data-star-preset";
pub const STAR_COUNT_ATTR: &str = "data-star-count";
pub const MAX_STAR_COUNT: usize = 2000; // upper bound for data-star-count

// Quiet period after the last resize event before stars are regenerated
pub const RESIZE_DEBOUNCE_MS: f64 = 150.0;

// Instantaneous star opacity is always kept inside this band
pub const MIN_STAR_OPACITY: f32 = 0.05;
pub const MAX_STAR_OPACITY: f32 = 1.0;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Header shadow
pub const HEADER_SELECTOR: &str = ".header";
pub const HEADER_SCROLLED_CLASS: &str = "scrolled";
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 10.0;

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_SHOWN_CLASS: &str = "show";
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

#[inline]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX
}
