//! Projection-aware helpers for geographic plot elements.
//!
//! This crate bridges array-based plot elements (paths, polygons and gridded
//! rasters) and `geo` geometries. Every helper is a stateless transformation:
//!
//! - [`wrap_lons`]: fold longitudes into a periodic range
//! - [`project_extents`]: bounding box of an extent clipped to a projection's
//!   valid domain and carried into another projection
//! - [`path_to_geom`] / [`polygon_to_geom`]: element arrays to multi-part geometries
//! - [`geom_to_array`]: geometries back to x / y coordinate arrays
//! - [`geo_mesh`]: coordinate and value grids, with the seam of global
//!   cylindrical data closed
//!
//! # Example
//!
//! ```
//! use geo_util::{project_extents, Crs, DEFAULT_TOLERANCE};
//!
//! let crs = Crs::default();
//! let bbox = project_extents((170.0, -10.0, -170.0, 10.0), &crs, &crs, DEFAULT_TOLERANCE)?;
//! assert!(bbox.min_x < bbox.max_x);
//! # Ok::<(), geo_util::GeoUtilError>(())
//! ```

pub mod config;
pub mod element;
pub mod error;
pub mod extents;
pub mod geom;
pub mod grid;
pub mod mesh;
pub mod wrap;

// Re-export commonly used types at crate root
pub use config::{ExtentConfig, DEFAULT_TOLERANCE};
pub use element::{
    CoordArray, DimensionValues, ElementKind, GriddedElement, Image, Path, Polygons, QuadMesh,
    Rgb,
};
pub use error::{GeoUtilError, Result};
pub use extents::{project_extents, project_extents_with};
pub use geom::{geom_to_array, path_to_geom, polygon_to_geom, ArrayInterface, GeomSource};
pub use grid::Grid;
pub use mesh::{geo_mesh, GeoMesh};
pub use wrap::{wrap_lon, wrap_lons};

pub use geo_common::BoundingBox;
pub use projection::{Crs, Projection};
