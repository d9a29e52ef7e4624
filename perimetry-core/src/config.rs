// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constant;
use crate::cv::EdgeMode;
use crate::error::PerimetryError;

/// Settings for a conversion ratio experiment
///
/// Missing fields fall back to their defaults when deserialized, so a JSON
/// file only needs to name the settings it changes.
///
/// # Examples
///
/// ```
/// use perimetry_core::config::RatioConfig;
///
/// let config: RatioConfig = serde_json::from_str(r#"{"pixel_dimension": 64}"#).unwrap();
///
/// assert_eq!(config.pixel_dimension, 64);
/// assert_eq!(config.fourier_series_order, 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioConfig {
    pub fourier_series_order: usize,
    pub points_per_shape: usize,
    pub spikeyness_coefficient: f64,
    pub pixel_dimension: usize,
    pub samples: usize,
    pub seed: Option<u64>,
    pub edge_mode: EdgeMode,
}

impl Default for RatioConfig {
    fn default() -> Self {
        RatioConfig {
            fourier_series_order: constant::DEFAULT_FOURIER_ORDER,
            points_per_shape: constant::DEFAULT_POINTS_PER_SHAPE,
            spikeyness_coefficient: constant::DEFAULT_SPIKEYNESS,
            pixel_dimension: constant::DEFAULT_PIXEL_DIMENSION,
            samples: constant::DEFAULT_SAMPLES,
            seed: None,
            edge_mode: EdgeMode::Toroidal,
        }
    }
}

impl RatioConfig {
    /// Read a configuration from a JSON file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.json` configuration
    ///
    /// ```no_run
    /// use perimetry_core::config::RatioConfig;
    /// let config = RatioConfig::open("experiment.json");
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<RatioConfig, PerimetryError> {
        let contents = std::fs::read_to_string(&path).map_err(|err| {
            PerimetryError::ConfigReadError(format!("{}: {}", path.as_ref().display(), err))
        })?;

        let config: RatioConfig = serde_json::from_str(&contents)
            .map_err(|err| PerimetryError::ConfigReadError(err.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check that every setting describes a runnable experiment
    pub fn validate(&self) -> Result<(), PerimetryError> {
        if self.points_per_shape < 2 {
            return Err(PerimetryError::ShapeDimensionError(format!(
                "points_per_shape must be at least 2 (got {}).",
                self.points_per_shape
            )));
        }

        if self.pixel_dimension < 1 {
            return Err(PerimetryError::ShapeDimensionError(
                "pixel_dimension must be a positive integer.".to_string(),
            ));
        }

        if self.samples < 1 {
            return Err(PerimetryError::ParameterError(
                "samples must be a positive integer.".to_string(),
            ));
        }

        if !self.spikeyness_coefficient.is_finite() {
            return Err(PerimetryError::ParameterError(format!(
                "spikeyness_coefficient must be finite (got {}).",
                self.spikeyness_coefficient
            )));
        }

        Ok(())
    }
}
