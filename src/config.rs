//! Experiment configuration.
//!
//! An experiment names one window and how many points to draw from it:
//!
//! ```toml
//! count = 1000
//! seed = 42
//!
//! [window]
//! shape = "ball"
//! center = [0.0, 0.0]
//! radius = 2.5
//! ```
//!
//! `seed` may be omitted for an entropy-seeded run, and overridden with the
//! `SPATIAL_WINDOWS_SEED` environment variable.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::{
    random::RandomSource, BallWindow, BoxWindow, ConfigError, Shape, UnitBallWindow,
    UnitBoxWindow, WindowError,
};

/// Environment variable overriding the configured seed
pub const SEED_ENV_VAR: &str = "SPATIAL_WINDOWS_SEED";

fn default_count() -> usize {
    1
}
fn default_radius() -> f64 {
    1.0
}

/// Description of a window, tagged by its `shape`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum WindowConfig {
    Box {
        bounds: Vec<Vec<f64>>,
    },
    UnitBox {
        center: Vec<f64>,
    },
    Ball {
        center: Vec<f64>,
        #[serde(default = "default_radius")]
        radius: f64,
    },
    UnitBall {
        center: Vec<f64>,
    },
}
impl WindowConfig {
    /// Validate and build the described window
    pub fn build(&self) -> Result<Shape, WindowError> {
        Ok(match self {
            WindowConfig::Box { bounds } => BoxWindow::from_table(bounds)?.into(),
            WindowConfig::UnitBox { center } => UnitBoxWindow::new(center.clone())?.into(),
            WindowConfig::Ball { center, radius } => {
                BallWindow::new(center.clone(), *radius)?.into()
            }
            WindowConfig::UnitBall { center } => UnitBallWindow::new(center.clone())?.into(),
        })
    }
}

/// A window plus the sampling parameters of one experiment
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperimentConfig {
    pub window: WindowConfig,
    /// Number of points to draw
    #[serde(default = "default_count")]
    pub count: usize,
    /// Seed of the generator, entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}
impl ExperimentConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ExperimentConfig = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.apply_env_overrides()?;
        info!(path = %path.display(), "loaded experiment config");
        Ok(config)
    }

    /// Replace the seed with `SPATIAL_WINDOWS_SEED` when it is set
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(SEED_ENV_VAR) {
            let seed = value.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{} must be an unsigned integer, got {:?}",
                    SEED_ENV_VAR, value
                ))
            })?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::Invalid("count must be at least 1".to_string()));
        }
        self.window.build()?;
        Ok(())
    }

    pub fn random_source(&self) -> RandomSource {
        self.seed.into()
    }
}
