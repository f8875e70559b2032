//! Spherical Mercator projection.
//!
//! Cylindrical and conformal. The poles map to infinity, so the valid domain
//! is cut at a minimum and maximum latitude.

use std::f64::consts::PI;

use geo::LineString;

use crate::crs::Projection;
use crate::transform::normalize_longitude;

/// Sphere radius used by Web Mercator (meters).
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitude at which Web Mercator becomes square.
const GOOGLE_MAX_LATITUDE: f64 = 85.0511287798066;

/// Mercator projection parameters (degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct Mercator {
    pub central_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

impl Mercator {
    pub fn new(central_longitude: f64, min_latitude: f64, max_latitude: f64) -> Self {
        Self {
            central_longitude,
            min_latitude,
            max_latitude,
        }
    }

    /// Web Mercator as used by tiled web maps (EPSG:3857).
    pub fn google() -> Self {
        Self::new(0.0, -GOOGLE_MAX_LATITUDE, GOOGLE_MAX_LATITUDE)
    }

    fn lat_to_y(lat_deg: f64) -> f64 {
        let lat = lat_deg.to_radians();
        EARTH_RADIUS * (PI / 4.0 + lat / 2.0).tan().ln()
    }

    fn y_to_lat(y: f64) -> f64 {
        (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees()
    }
}

impl Default for Mercator {
    /// World Mercator latitude limits.
    fn default() -> Self {
        Self::new(0.0, -80.0, 84.0)
    }
}

impl Projection for Mercator {
    fn x_limits(&self) -> (f64, f64) {
        (-PI * EARTH_RADIUS, PI * EARTH_RADIUS)
    }

    fn y_limits(&self) -> (f64, f64) {
        (
            Self::lat_to_y(self.min_latitude),
            Self::lat_to_y(self.max_latitude),
        )
    }

    fn boundary(&self) -> LineString<f64> {
        let (x0, x1) = self.x_limits();
        let (y0, y1) = self.y_limits();
        LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)])
    }

    fn threshold(&self) -> f64 {
        let (x0, x1) = self.x_limits();
        let (y0, y1) = self.y_limits();
        ((x1 - x0) / 720.0).min((y1 - y0) / 720.0)
    }

    fn is_cylindrical(&self) -> bool {
        true
    }

    fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || lat.abs() >= 90.0 || lat.is_nan() {
            return None;
        }
        let dlon = lon - self.central_longitude;
        let mut x = normalize_longitude(dlon);
        if x == -180.0 && dlon > 0.0 {
            x = 180.0;
        }
        Some((EARTH_RADIUS * x.to_radians(), Self::lat_to_y(lat)))
    }

    fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let lon = normalize_longitude((x / EARTH_RADIUS).to_degrees() + self.central_longitude);
        Some((lon, Self::y_to_lat(y)))
    }
}
