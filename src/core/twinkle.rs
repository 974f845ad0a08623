use crate::constants::{MAX_STAR_OPACITY, MIN_STAR_OPACITY};
use crate::core::config::{OpacityModel, TwinkleModel};
use crate::core::particle::Particle;

/// Instantaneous opacity of `particle` at animation time `time_ms`.
///
/// Always within `[MIN_STAR_OPACITY, MAX_STAR_OPACITY]`, for any time input.
pub fn frame_opacity(particle: &Particle, time_ms: f64, model: &TwinkleModel) -> f32 {
    // Phase math in f64: page uptime in milliseconds grows large quickly.
    let theta = time_ms * particle.twinkle_speed as f64 * model.time_scale as f64
        + particle.twinkle_phase as f64;
    let wave = theta.sin() as f32;
    let raw = match model.opacity {
        OpacityModel::Scaled { gain } => particle.base_alpha * (0.5 + 0.5 * wave) * gain,
        OpacityModel::Offset { amplitude } => particle.base_alpha + amplitude * wave,
    };
    clamp_opacity(raw)
}

#[inline]
pub fn clamp_opacity(raw: f32) -> f32 {
    if raw.is_nan() {
        return MIN_STAR_OPACITY;
    }
    raw.clamp(MIN_STAR_OPACITY, MAX_STAR_OPACITY)
}
