use crate::core::config::{ColorWeights, StarfieldConfig};
use glam::Vec2;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::f32::consts::TAU;

/// Drawing surface size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width as f32 && p.y < self.height as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarColor {
    White,
    Cyan,
    Violet,
}

impl StarColor {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            StarColor::White => [255, 255, 255],
            StarColor::Cyan => [125, 211, 252], // cyan-ish
            StarColor::Violet => [196, 181, 253], // violet-ish
        }
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        let [r, g, b] = self.rgb();
        Rgba { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// CSS `rgba()` string with alpha rounded to three decimals.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

/// One star. Regenerated wholesale on resize, never moved.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
    pub base_alpha: f32,
    pub twinkle_speed: f32,
    pub twinkle_phase: f32,
    pub color: StarColor,
}

struct ColorPicker(Option<WeightedIndex<f32>>);

impl ColorPicker {
    const ORDER: [StarColor; 3] = [StarColor::White, StarColor::Cyan, StarColor::Violet];

    fn new(weights: Option<&ColorWeights>) -> Self {
        // All-zero or negative weights are rejected by WeightedIndex; those fall back to white.
        let index = weights.and_then(|w| WeightedIndex::new([w.white, w.cyan, w.violet]).ok());
        Self(index)
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> StarColor {
        match &self.0 {
            Some(index) => Self::ORDER[index.sample(rng)],
            None => StarColor::White,
        }
    }
}

/// Produce exactly `count` stars spread uniformly over `bounds`.
pub fn generate_particles<R: Rng + ?Sized>(
    count: usize,
    bounds: Bounds,
    config: &StarfieldConfig,
    rng: &mut R,
) -> Vec<Particle> {
    let picker = ColorPicker::new(config.colors.as_ref());
    let w = bounds.width as f32;
    let h = bounds.height as f32;
    (0..count)
        .map(|_| {
            let position = Vec2::new(
                unit_to_extent(rng.gen::<f32>(), w),
                unit_to_extent(rng.gen::<f32>(), h),
            );
            Particle {
                position,
                radius: config.radius.sample(rng),
                base_alpha: config.alpha.sample(rng),
                twinkle_speed: config.twinkle_speed.sample(rng),
                twinkle_phase: rng.gen_range(0.0..TAU),
                color: picker.pick(rng),
            }
        })
        .collect()
}

// Maps [0,1) onto [0,extent); guards the f32 rounding that can land exactly on `extent`.
#[inline]
fn unit_to_extent(u: f32, extent: f32) -> f32 {
    let v = u * extent;
    if v >= extent && extent > 0.0 {
        f32::from_bits(extent.to_bits() - 1)
    } else {
        v
    }
}
