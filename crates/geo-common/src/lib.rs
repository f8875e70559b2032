//! Common types shared by the projection and geometry helper crates.

pub mod bbox;
pub mod crs;
pub mod error;

pub use bbox::BoundingBox;
pub use crs::{CrsCode, CrsParseError};
pub use error::{GeoError, GeoResult};
