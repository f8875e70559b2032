//! Configuration for extent projection.

use serde::{Deserialize, Serialize};

use crate::error::{GeoUtilError, Result};

/// Default inward tolerance applied to extents before clipping.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Tunables for `project_extents_with`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtentConfig {
    /// Amount each side of the extent is moved inward before clipping.
    pub tolerance: f64,

    /// Number of samples across the x-range when wrapping cylindrical extents.
    pub wrap_samples: usize,

    /// Lower end of the longitude wrap range.
    pub wrap_base: f64,

    /// Length of the longitude wrap range.
    pub wrap_period: f64,
}

impl Default for ExtentConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            wrap_samples: 10_000,
            wrap_base: -180.0,
            wrap_period: 360.0,
        }
    }
}

impl ExtentConfig {
    /// Default configuration with a different tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance >= 0.0) {
            return Err(GeoUtilError::Config(
                "tolerance must be >= 0".to_string(),
            ));
        }

        if self.wrap_samples < 2 {
            return Err(GeoUtilError::Config(
                "wrap_samples must be >= 2".to_string(),
            ));
        }

        if !(self.wrap_period > 0.0) || !self.wrap_base.is_finite() {
            return Err(GeoUtilError::Config(
                "wrap_period must be > 0 and wrap_base finite".to_string(),
            ));
        }

        Ok(())
    }
}
