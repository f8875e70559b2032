//! The projection capability and the closed set of supported CRS.

use geo::{LineString, MultiPolygon};
use geo_common::{CrsCode, GeoResult};

use crate::geographic::PlateCarree;
use crate::lambert::LambertConformal;
use crate::mercator::Mercator;
use crate::transform;

/// What the geometry helpers need from a coordinate reference system.
pub trait Projection {
    /// Valid range of the projected x axis.
    fn x_limits(&self) -> (f64, f64);

    /// Valid range of the projected y axis.
    fn y_limits(&self) -> (f64, f64);

    /// Closed ring enclosing the valid domain, in projected coordinates.
    fn boundary(&self) -> LineString<f64>;

    /// Numerical tolerance in projected units.
    ///
    /// Used to erode the boundary before intersecting and as the maximum
    /// segment length when densifying geometries for reprojection.
    fn threshold(&self) -> f64;

    /// Whether the x axis is longitude and wraps every 360 degrees.
    fn is_cylindrical(&self) -> bool;

    /// Geographic (lon, lat) in degrees to projected (x, y).
    ///
    /// Returns `None` when the point has no finite image.
    fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)>;

    /// Projected (x, y) back to geographic (lon, lat) in degrees.
    fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)>;
}

/// A coordinate reference system.
///
/// Two values compare equal only when they are the same projection with the
/// same parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Crs {
    PlateCarree(PlateCarree),
    Mercator(Mercator),
    LambertConformal(LambertConformal),
}

impl Crs {
    /// Build the default CRS for a well-known code.
    pub fn from_code(code: CrsCode) -> GeoResult<Self> {
        Ok(match code {
            CrsCode::Epsg4326 => Crs::PlateCarree(PlateCarree::default()),
            CrsCode::Epsg3857 => Crs::Mercator(Mercator::google()),
            CrsCode::Epsg3395 => Crs::Mercator(Mercator::default()),
            CrsCode::LambertConformal => Crs::LambertConformal(LambertConformal::conus()?),
        })
    }

    /// Parse a CRS identifier such as "EPSG:4326" or "LambertConformal".
    pub fn parse(s: &str) -> GeoResult<Self> {
        Self::from_code(s.parse::<CrsCode>()?)
    }

    /// Reproject `geometry`, given in `src` coordinates, into this CRS.
    pub fn project_geometry(&self, geometry: &MultiPolygon<f64>, src: &Crs) -> MultiPolygon<f64> {
        transform::project_geometry(geometry, src, self)
    }

    fn inner(&self) -> &dyn Projection {
        match self {
            Crs::PlateCarree(p) => p,
            Crs::Mercator(p) => p,
            Crs::LambertConformal(p) => p,
        }
    }
}

impl Default for Crs {
    fn default() -> Self {
        Crs::PlateCarree(PlateCarree::default())
    }
}

impl From<PlateCarree> for Crs {
    fn from(p: PlateCarree) -> Self {
        Crs::PlateCarree(p)
    }
}

impl From<Mercator> for Crs {
    fn from(p: Mercator) -> Self {
        Crs::Mercator(p)
    }
}

impl From<LambertConformal> for Crs {
    fn from(p: LambertConformal) -> Self {
        Crs::LambertConformal(p)
    }
}

impl Projection for Crs {
    fn x_limits(&self) -> (f64, f64) {
        self.inner().x_limits()
    }

    fn y_limits(&self) -> (f64, f64) {
        self.inner().y_limits()
    }

    fn boundary(&self) -> LineString<f64> {
        self.inner().boundary()
    }

    fn threshold(&self) -> f64 {
        self.inner().threshold()
    }

    fn is_cylindrical(&self) -> bool {
        self.inner().is_cylindrical()
    }

    fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        self.inner().project(lon, lat)
    }

    fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        self.inner().unproject(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_cylindrical_flags() {
        assert!(Crs::from_code(CrsCode::Epsg4326).unwrap().is_cylindrical());
        assert!(Crs::from_code(CrsCode::Epsg3857).unwrap().is_cylindrical());
        assert!(Crs::from_code(CrsCode::Epsg3395).unwrap().is_cylindrical());
        assert!(!Crs::from_code(CrsCode::LambertConformal)
            .unwrap()
            .is_cylindrical());
    }

    #[test]
    fn test_parse_unknown_code_fails() {
        assert!(Crs::parse("EPSG:99999").is_err());
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Crs::parse("EPSG:4326").unwrap(), Crs::default());
        assert_ne!(
            Crs::from(PlateCarree::new(180.0)),
            Crs::from(PlateCarree::new(0.0))
        );
        assert_ne!(Crs::parse("EPSG:3857").unwrap(), Crs::parse("EPSG:3395").unwrap());
    }
}
