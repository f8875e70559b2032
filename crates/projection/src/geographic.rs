//! Equirectangular (Plate Carree) projection.
//!
//! Projected coordinates are degrees: x is longitude relative to the central
//! meridian, y is latitude.

use geo::LineString;

use crate::crs::Projection;
use crate::transform::normalize_longitude;

/// Plate Carree projection with a configurable central meridian.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateCarree {
    /// Central meridian in degrees
    pub central_longitude: f64,
}

impl PlateCarree {
    pub fn new(central_longitude: f64) -> Self {
        Self { central_longitude }
    }
}

impl Default for PlateCarree {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Projection for PlateCarree {
    fn x_limits(&self) -> (f64, f64) {
        (-180.0, 180.0)
    }

    fn y_limits(&self) -> (f64, f64) {
        (-90.0, 90.0)
    }

    fn boundary(&self) -> LineString<f64> {
        let (x0, x1) = self.x_limits();
        let (y0, y1) = self.y_limits();
        LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)])
    }

    fn threshold(&self) -> f64 {
        0.5
    }

    fn is_cylindrical(&self) -> bool {
        true
    }

    fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return None;
        }
        let mut x = normalize_longitude(lon - self.central_longitude);
        // Keep the eastern edge on +180 instead of folding it to -180
        if x == -180.0 && lon - self.central_longitude > 0.0 {
            x = 180.0;
        }
        Some((x, lat))
    }

    fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !(-90.0..=90.0).contains(&y) {
            return None;
        }
        Some((normalize_longitude(x + self.central_longitude), y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_greenwich() {
        let proj = PlateCarree::default();
        assert_eq!(proj.project(12.5, -33.0), Some((12.5, -33.0)));
        assert_eq!(proj.unproject(12.5, -33.0), Some((12.5, -33.0)));
    }

    #[test]
    fn test_pacific_centred() {
        let proj = PlateCarree::new(180.0);
        let (x, y) = proj.project(-170.0, 10.0).unwrap();
        assert!((x - 10.0).abs() < 1e-12, "x should be 10, got {}", x);
        assert_eq!(y, 10.0);

        let (lon, _) = proj.unproject(x, y).unwrap();
        assert!((lon - (-170.0)).abs() < 1e-12);
    }

    #[test]
    fn test_eastern_edge_stays_east() {
        let proj = PlateCarree::default();
        assert_eq!(proj.project(180.0, 0.0), Some((180.0, 0.0)));
        assert_eq!(proj.project(-180.0, 0.0), Some((-180.0, 0.0)));
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(PlateCarree::default().project(0.0, 91.0).is_none());
    }

    #[test]
    fn test_boundary_is_closed_rectangle() {
        let ring = PlateCarree::default().boundary();
        assert!(ring.is_closed());
        assert_eq!(ring.0.len(), 5);
    }
}
