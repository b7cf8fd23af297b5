//! Render parameters and their JSON loader.
//!
//! All core fields are required in a parameter file; the tiling and seeding
//! fields are optional and fall back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading render parameters.
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed parameter file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for parameter loading.
pub type ParamsResult<T> = Result<T, ParamsError>;

pub const DEFAULT_TILE_SIZE: u32 = 32;
pub const DEFAULT_SAMPLES_PER_TILE: u32 = 4;

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

fn default_samples_per_tile() -> u32 {
    DEFAULT_SAMPLES_PER_TILE
}

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Camera rays traced per pixel
    pub samples_per_pixel: u32,
    /// Worker threads for tiled rendering
    pub max_cpus: u32,
    /// Maximum ray bounce depth (0 renders black)
    pub max_depth: u32,
    /// Stratified material samples along u at the first bounce
    pub first_bounce_u_samples: u32,
    /// Stratified material samples along v at the first bounce
    pub first_bounce_v_samples: u32,
    /// Skip light transport and show raw diffuse colours
    pub preview: bool,
    /// Seed for reproducible renders
    #[serde(default)]
    pub seed: Option<u64>,
    /// Tile width in pixels for tiled rendering
    #[serde(default = "default_tile_size")]
    pub tile_width: u32,
    /// Tile height in pixels for tiled rendering
    #[serde(default = "default_tile_size")]
    pub tile_height: u32,
    /// Samples per pixel rendered by one tile
    #[serde(default = "default_samples_per_tile")]
    pub samples_per_tile: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            samples_per_pixel: 40,
            max_cpus: 1,
            max_depth: 5,
            first_bounce_u_samples: 4,
            first_bounce_v_samples: 4,
            preview: false,
            seed: None,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            samples_per_tile: DEFAULT_SAMPLES_PER_TILE,
        }
    }
}

impl RenderConfig {
    /// Parse and validate parameters from a JSON document.
    pub fn from_json(json: &str) -> ParamsResult<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_depth = max_depth;
        self
    }

    /// Set the stratification grid used at the first bounce.
    pub fn with_first_bounce(mut self, u_samples: u32, v_samples: u32) -> Self {
        self.first_bounce_u_samples = u_samples;
        self.first_bounce_v_samples = v_samples;
        self
    }

    /// Set a fixed random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every count is usable before rendering starts.
    pub fn validate(&self) -> ParamsResult<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("samples_per_pixel", self.samples_per_pixel),
            ("max_cpus", self.max_cpus),
            ("first_bounce_u_samples", self.first_bounce_u_samples),
            ("first_bounce_v_samples", self.first_bounce_v_samples),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("samples_per_tile", self.samples_per_tile),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ParamsError::Invalid {
                    field,
                    reason: "must be a positive integer".to_string(),
                });
            }
        }

        if self.max_depth == 0 {
            log::warn!("max_depth is 0, every pixel will render black");
        }
        Ok(())
    }
}

/// Load render parameters from a JSON file.
pub fn load_params(path: impl AsRef<Path>) -> ParamsResult<RenderConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config = RenderConfig::from_json(&content)?;
    log::debug!("Loaded render parameters from {}: {:?}", path.display(), config);
    Ok(config)
}
