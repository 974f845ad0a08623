pub mod resize;
pub mod scroll;

pub use resize::{wire_resize, ResizeListener};
pub use scroll::wire_header_shadow;
