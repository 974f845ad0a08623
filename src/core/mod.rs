pub mod animator;
pub mod config;
pub mod debounce;
pub mod particle;
pub mod twinkle;

pub use animator::*;
pub use config::*;
pub use particle::*;
