//! Coordinate reference system transformations.
//!
//! Implements map projections from scratch without external projection
//! libraries. Every projection exposes its valid limits, a boundary ring in
//! projected coordinates and a numerical threshold, and geometries can be
//! carried from one projection into another.

pub mod crs;
pub mod geographic;
pub mod lambert;
pub mod mercator;
pub mod transform;

pub use crs::{Crs, Projection};
pub use geographic::PlateCarree;
pub use lambert::LambertConformal;
pub use mercator::Mercator;
pub use transform::{densify_ring, normalize_longitude, project_geometry};
