//! Lambert Conformal Conic projection.
//!
//! Maps a cone tangent or secant to the Earth's surface onto a flat plane.
//! Commonly used for mid-latitude regional grids.
//!
//! The projection parameters include:
//! - Central longitude (lon0): the meridian that maps to x = 0
//! - Central latitude (lat0): the parallel that maps to y = 0
//! - Standard parallels: latin1 and latin2 (equal for a tangent cone)
//! - Cutoff: the latitude where the valid domain ends on the open side of the cone

use std::f64::consts::PI;

use geo::LineString;
use geo_common::{GeoError, GeoResult};

use crate::crs::Projection;
use crate::transform::normalize_longitude;

/// Spherical earth radius (meters).
const EARTH_RADIUS: f64 = 6371229.0;

/// Number of samples along the cutoff parallel when building the boundary.
const BOUNDARY_SAMPLES: usize = 181;

/// Lambert Conformal Conic projection parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LambertConformal {
    /// Central meridian in degrees
    pub central_longitude: f64,
    /// Latitude of origin in degrees
    pub central_latitude: f64,
    /// Standard parallels in degrees
    pub standard_parallels: (f64, f64),
    /// Latitude where the domain is cut on the side away from the apex
    pub cutoff: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the latitude of origin
    rho0: f64,
}

impl LambertConformal {
    /// Create a new Lambert Conformal projection.
    ///
    /// # Arguments
    /// * `central_longitude` - Central meridian (degrees)
    /// * `central_latitude` - Latitude of origin (degrees)
    /// * `standard_parallels` - First and second standard parallel (degrees)
    /// * `cutoff` - Latitude at which the boundary is cut (degrees)
    pub fn new(
        central_longitude: f64,
        central_latitude: f64,
        standard_parallels: (f64, f64),
        cutoff: f64,
    ) -> GeoResult<Self> {
        let latin1 = standard_parallels.0.to_radians();
        let latin2 = standard_parallels.1.to_radians();
        let lat0 = central_latitude.to_radians();

        // Compute cone constant n
        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((PI / 4.0 + latin2 / 2.0).tan() / (PI / 4.0 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };

        if !n.is_finite() || n.abs() < 1e-10 {
            return Err(GeoError::invalid_parameter(
                "standard_parallels",
                format!(
                    "({}, {}) do not define a cone",
                    standard_parallels.0, standard_parallels.1
                ),
            ));
        }

        let pole = if n > 0.0 { 90.0 } else { -90.0 };
        if cutoff.abs() >= 90.0 || (cutoff - pole).abs() < 1e-10 {
            return Err(GeoError::invalid_parameter(
                "cutoff",
                format!("{} leaves no valid domain", cutoff),
            ));
        }

        // Compute F constant
        let f = (latin1.cos() * (PI / 4.0 + latin1 / 2.0).tan().powf(n)) / n;

        // Compute rho at the latitude of origin
        let rho0 = EARTH_RADIUS * f / (PI / 4.0 + lat0 / 2.0).tan().powf(n);

        Ok(Self {
            central_longitude,
            central_latitude,
            standard_parallels,
            cutoff,
            n,
            f,
            rho0,
        })
    }

    /// CONUS-centred defaults: lon0 -96°, lat0 39°, parallels 33°/45°, cutoff -30°.
    pub fn conus() -> GeoResult<Self> {
        Self::new(-96.0, 39.0, (33.0, 45.0), -30.0)
    }

    /// Cone constant.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }

    fn rho(&self, lat: f64) -> f64 {
        EARTH_RADIUS * self.f / (PI / 4.0 + lat / 2.0).tan().powf(self.n)
    }

    /// Projected coordinates of (lon, lat) without domain checks.
    fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lat = lat_deg.to_radians();
        // Longitude difference in [-π, π)
        let dlon = normalize_longitude(lon_deg - self.central_longitude).to_radians();

        let rho = self.rho(lat);
        let theta = self.n * dlon;

        (rho * theta.sin(), self.rho0 - rho * theta.cos())
    }
}

impl Projection for LambertConformal {
    fn x_limits(&self) -> (f64, f64) {
        let ring = self.boundary();
        ring.coords()
            .fold((f64::MAX, f64::MIN), |(lo, hi), c| (lo.min(c.x), hi.max(c.x)))
    }

    fn y_limits(&self) -> (f64, f64) {
        let ring = self.boundary();
        ring.coords()
            .fold((f64::MAX, f64::MIN), |(lo, hi), c| (lo.min(c.y), hi.max(c.y)))
    }

    /// Fan between the apex (the pole the cone closes at) and the cutoff parallel.
    fn boundary(&self) -> LineString<f64> {
        let apex = (0.0, self.rho0);
        let mut coords = Vec::with_capacity(BOUNDARY_SAMPLES + 2);
        coords.push(apex);

        let lat = self.cutoff.to_radians();
        let rho = self.rho(lat);
        for i in 0..BOUNDARY_SAMPLES {
            let frac = i as f64 / (BOUNDARY_SAMPLES - 1) as f64;
            let dlon = (-180.0 + 360.0 * frac).to_radians();
            let theta = self.n * dlon;
            coords.push((rho * theta.sin(), self.rho0 - rho * theta.cos()));
        }

        coords.push(apex);
        LineString::from(coords)
    }

    fn threshold(&self) -> f64 {
        1e5
    }

    fn is_cylindrical(&self) -> bool {
        false
    }

    fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return None;
        }
        let (x, y) = self.forward(lon, lat);
        (x.is_finite() && y.is_finite()).then_some((x, y))
    }

    fn unproject(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let sign = self.n.signum();

        // Compute rho and theta from x, y
        let dy = self.rho0 - y;
        let rho = sign * (x * x + dy * dy).sqrt();
        let theta = (sign * x).atan2(sign * dy);

        let lat = if rho == 0.0 {
            sign * PI / 2.0
        } else {
            2.0 * (EARTH_RADIUS * self.f / rho).powf(1.0 / self.n).atan() - PI / 2.0
        };
        let lon = self.central_longitude + (theta / self.n).to_degrees();

        let lat = lat.to_degrees();
        lat.is_finite()
            .then_some((normalize_longitude(lon), lat))
    }
}
