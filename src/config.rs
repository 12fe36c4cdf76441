//! Tunables for the effects, optionally overridden by JSON embedded in the page.
use log::LevelFilter;
use serde::Deserialize;

use crate::error::FxResult;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub trail: TrailConfig,
    pub rain: RainConfig,
    pub surface: SurfaceConfig,
    pub field: FieldConfig,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            trail: TrailConfig::default(),
            rain: RainConfig::default(),
            surface: SurfaceConfig::default(),
            field: FieldConfig::default(),
        }
    }
}

impl FxConfig {
    pub fn from_json(text: &str) -> FxResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Unknown names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Most samples kept at once; never more than `trail::MAX_SAMPLES`.
    pub capacity: usize,
    /// Frames a sample lives.
    pub max_age: f32,
    pub trail_radius: f32,
    pub cursor_radius: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: 50,
            max_age: 40.0,
            trail_radius: 60.0,
            cursor_radius: 120.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    pub count: usize,
    /// Frames before a drop is recycled even if still on screen.
    pub max_age: f32,
    /// Fraction of the height where fading out begins.
    pub fade_start: f32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            count: 120,
            max_age: 6000.0,
            fade_start: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub columns: usize,
    pub rows: usize,
    pub separation: f32,
    pub point_size: f32,
    pub opacity: f32,
    pub max_pixel_ratio: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            columns: 200,
            rows: 100,
            separation: 3.0,
            point_size: 0.7,
            opacity: 0.12,
            max_pixel_ratio: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Final alpha multiplier of the line field.
    pub opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { opacity: 0.15 }
    }
}
