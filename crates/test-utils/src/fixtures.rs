//! Common test fixtures.
//!
//! Extents and grid layouts that come up again and again when testing
//! projection and mesh helpers.

/// Common extent definitions for testing, as `(xmin, ymin, xmax, ymax)`.
pub mod bbox {
    /// Global extent (-180 to 180, -90 to 90)
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (-130.0, 20.0, -60.0, 55.0);

    /// Europe
    pub const EUROPE: (f64, f64, f64, f64) = (-15.0, 35.0, 45.0, 72.0);

    /// Crosses the antimeridian (Pacific-centric, xmin > xmax)
    pub const PACIFIC: (f64, f64, f64, f64) = (160.0, -50.0, -140.0, 50.0);

    /// Lies entirely past the seam, east of +180
    pub const PAST_SEAM: (f64, f64, f64, f64) = (190.0, 0.0, 200.0, 10.0);

    /// Latitudes beyond the poles
    pub const BEYOND_POLES: (f64, f64, f64, f64) = (-10.0, -100.0, 10.0, 100.0);
}

/// Common grid layouts for testing.
pub mod grid {
    /// Global 1 degree grid
    pub const GLOBAL_1DEG: GridSpec = GridSpec {
        width: 360,
        height: 180,
        min_lon: -180.0,
        max_lon: 180.0,
        min_lat: -90.0,
        max_lat: 90.0,
    };

    /// Global grid on a 0..360 longitude convention
    pub const GLOBAL_0_360: GridSpec = GridSpec {
        width: 8,
        height: 4,
        min_lon: 0.0,
        max_lon: 360.0,
        min_lat: -90.0,
        max_lat: 90.0,
    };

    /// Simple 10x10 regional grid
    pub const SIMPLE_10X10: GridSpec = GridSpec {
        width: 10,
        height: 10,
        min_lon: -10.0,
        max_lon: 10.0,
        min_lat: -10.0,
        max_lat: 10.0,
    };

    /// Grid specification for testing.
    #[derive(Debug, Clone, Copy)]
    pub struct GridSpec {
        pub width: usize,
        pub height: usize,
        pub min_lon: f64,
        pub max_lon: f64,
        pub min_lat: f64,
        pub max_lat: f64,
    }

    impl GridSpec {
        /// Returns the total number of grid cells.
        pub fn size(&self) -> usize {
            self.width * self.height
        }

        /// Returns the resolution in degrees.
        pub fn resolution(&self) -> (f64, f64) {
            let dx = (self.max_lon - self.min_lon) / self.width as f64;
            let dy = (self.max_lat - self.min_lat) / self.height as f64;
            (dx, dy)
        }

        /// Returns the bounding box as (min_lon, min_lat, max_lon, max_lat).
        pub fn bbox(&self) -> (f64, f64, f64, f64) {
            (self.min_lon, self.min_lat, self.max_lon, self.max_lat)
        }

        /// Whether the grid spans the full 360 degrees of longitude.
        pub fn is_global(&self) -> bool {
            self.max_lon - self.min_lon == 360.0
        }
    }
}

/// Common CRS identifiers.
pub mod crs {
    /// WGS84 geographic
    pub const EPSG_4326: &str = "EPSG:4326";

    /// Web Mercator
    pub const EPSG_3857: &str = "EPSG:3857";

    /// World Mercator
    pub const EPSG_3395: &str = "EPSG:3395";

    /// Lon/lat order alias of EPSG:4326
    pub const CRS_84: &str = "CRS:84";

    /// CONUS Lambert Conformal Conic
    pub const LAMBERT: &str = "LambertConformal";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_spec_resolution() {
        assert_eq!(grid::GLOBAL_1DEG.resolution(), (1.0, 1.0));
        assert_eq!(grid::GLOBAL_0_360.resolution(), (45.0, 45.0));
    }

    #[test]
    fn test_grid_spec_is_global() {
        assert!(grid::GLOBAL_1DEG.is_global());
        assert!(grid::GLOBAL_0_360.is_global());
        assert!(!grid::SIMPLE_10X10.is_global());
    }

    #[test]
    fn test_pacific_crosses_antimeridian() {
        let (xmin, _, xmax, _) = bbox::PACIFIC;
        assert!(xmin > xmax);
    }
}
