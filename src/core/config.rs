use crate::constants::{MAX_STAR_COUNT, RESIZE_DEBOUNCE_MS};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown star-field preset {0:?}")]
    UnknownPreset(String),
    #[error("invalid star count {0:?}")]
    InvalidCount(String),
    #[error("star count {0} exceeds the maximum of {max}", max = MAX_STAR_COUNT)]
    TooManyStars(usize),
    #[error("{field} range {min}..{max} is invalid")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

/// Half-open sampling range. A degenerate range (`min >= max`) always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min < self.max {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    fn check(&self, field: &'static str, lo: f32, hi: f32) -> Result<(), ConfigError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.min >= lo
            && self.max <= hi;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// How base opacity and the twinkle sinusoid combine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpacityModel {
    /// `alpha * (0.5 + 0.5 * sin) * gain`
    Scaled { gain: f32 },
    /// `alpha + amplitude * sin`
    Offset { amplitude: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwinkleModel {
    // Multiplies `time_ms * twinkle_speed` before the phase offset is added
    pub time_scale: f32,
    pub opacity: OpacityModel,
}

/// Relative weights for the categorical star color draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorWeights {
    pub white: f32,
    pub cyan: f32,
    pub violet: f32,
}

/// Soft halo drawn behind the larger stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowConfig {
    pub min_radius: f32,
    pub radius_scale: f32,
    pub alpha_scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Hexra,
    Nebula,
    Aurora,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Hexra, Preset::Nebula, Preset::Aurora];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Hexra => "hexra",
            Preset::Nebula => "nebula",
            Preset::Aurora => "aurora",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

/// Per-page star-field tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: Range,
    pub alpha: Range,
    pub twinkle_speed: Range,
    pub twinkle: TwinkleModel,
    /// `None` draws every star white.
    pub colors: Option<ColorWeights>,
    pub glow: Option<GlowConfig>,
    pub resize_debounce_ms: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl StarfieldConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Hexra => Self {
                count: 180,
                radius: Range::new(0.3, 1.7),
                alpha: Range::new(0.0, 1.0),
                twinkle_speed: Range::new(0.002, 0.007),
                twinkle: TwinkleModel {
                    time_scale: 0.5,
                    opacity: OpacityModel::Scaled { gain: 0.7 },
                },
                colors: None,
                glow: None,
                resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            },
            Preset::Nebula => Self {
                count: 220,
                radius: Range::new(0.2, 1.7),
                alpha: Range::new(0.1, 0.8),
                twinkle_speed: Range::new(0.0005, 0.002),
                twinkle: TwinkleModel {
                    time_scale: 1.0,
                    opacity: OpacityModel::Offset { amplitude: 0.35 },
                },
                colors: Some(ColorWeights {
                    white: 0.80,
                    cyan: 0.12,
                    violet: 0.08,
                }),
                glow: Some(GlowConfig {
                    min_radius: 1.2,
                    radius_scale: 3.5,
                    alpha_scale: 0.15,
                }),
                resize_debounce_ms: 200.0,
            },
            Preset::Aurora => Self {
                count: 140,
                radius: Range::new(0.25, 1.5),
                alpha: Range::new(0.2, 0.9),
                twinkle_speed: Range::new(0.001, 0.004),
                twinkle: TwinkleModel {
                    time_scale: 0.6,
                    opacity: OpacityModel::Offset { amplitude: 0.25 },
                },
                colors: Some(ColorWeights {
                    white: 0.60,
                    cyan: 0.25,
                    violet: 0.15,
                }),
                glow: Some(GlowConfig {
                    min_radius: 1.1,
                    radius_scale: 3.0,
                    alpha_scale: 0.12,
                }),
                resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            },
        }
    }

    /// Resolve a config from the canvas `data-star-preset` / `data-star-count`
    /// attribute values. Missing attributes keep the preset defaults.
    ///
    /// Each attribute falls back on its own: a bad count keeps a good preset
    /// and vice versa. The rejected values are returned for logging.
    pub fn from_attributes(preset: Option<&str>, count: Option<&str>) -> (Self, Vec<ConfigError>) {
        let mut errors: Vec<ConfigError> = Vec::new();
        let preset = match preset {
            Some(name) if !name.trim().is_empty() => name.parse::<Preset>().unwrap_or_else(|e| {
                errors.push(e);
                Preset::default()
            }),
            _ => Preset::default(),
        };
        let mut config = Self::preset(preset);
        if let Some(raw) = count {
            match raw.trim().parse::<usize>() {
                Ok(n) => {
                    let candidate = Self {
                        count: n,
                        ..config.clone()
                    };
                    match candidate.validate() {
                        Ok(()) => config = candidate,
                        Err(e) => errors.push(e),
                    }
                }
                Err(_) => errors.push(ConfigError::InvalidCount(raw.to_string())),
            }
        }
        (config, errors)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count > MAX_STAR_COUNT {
            return Err(ConfigError::TooManyStars(self.count));
        }
        self.radius.check("radius", 0.0, f32::MAX)?;
        self.alpha.check("alpha", 0.0, 1.0)?;
        self.twinkle_speed.check("twinkle_speed", 0.0, f32::MAX)?;
        Ok(())
    }
}
