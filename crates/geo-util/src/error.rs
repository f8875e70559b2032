//! Error types for the geometry helpers.

use thiserror::Error;

/// Errors that can occur while converting or projecting plot data.
#[derive(Error, Debug)]
pub enum GeoUtilError {
    /// The clipped or projected geometry has no area left, so it has no bounds.
    #[error("geometry is empty after clipping to {context}")]
    EmptyGeometry { context: String },

    /// An array interface whose buffer cannot be reshaped to its declared shape.
    #[error("array interface of {len} values cannot be reshaped to {shape:?} with x/y columns")]
    InvalidArrayInterface { len: usize, shape: (usize, usize) },

    /// The element has no dimension at this index.
    #[error("element has no dimension {0}")]
    MissingDimension(usize),

    /// Array sizes do not line up.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GeoUtilError {
    /// Create an EmptyGeometry error.
    pub fn empty_geometry(context: impl Into<String>) -> Self {
        Self::EmptyGeometry {
            context: context.into(),
        }
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(msg: impl Into<String>) -> Self {
        Self::ShapeMismatch(msg.into())
    }
}

/// Result type for geometry helper operations.
pub type Result<T> = std::result::Result<T, GeoUtilError>;
