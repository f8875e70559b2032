//! Error types shared by the geo crates.

use thiserror::Error;

use crate::crs::CrsParseError;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Primary error type for extent and CRS handling.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error(transparent)]
    Crs(#[from] CrsParseError),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },
}

impl GeoError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}
