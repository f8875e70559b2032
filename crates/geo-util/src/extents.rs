//! Projecting rectangular extents between coordinate systems.

use geo::{BooleanOps, BoundingRect, Buffer, LineString, MultiPolygon, Polygon};
use geo_common::BoundingBox;
use projection::{Crs, Projection};

use crate::config::ExtentConfig;
use crate::error::{GeoUtilError, Result};
use crate::wrap::{linspace, wrap_lons};

/// Bounding box of `extents` after clipping to the valid domain of
/// `src_proj` and, when the two CRS differ, reprojecting into `dest_proj`.
///
/// Every side of the clipped extent is first moved inward by `tol`.
pub fn project_extents(
    extents: impl Into<BoundingBox>,
    src_proj: &Crs,
    dest_proj: &Crs,
    tol: f64,
) -> Result<BoundingBox> {
    project_extents_with(
        extents,
        src_proj,
        dest_proj,
        &ExtentConfig::with_tolerance(tol),
    )
}

/// [`project_extents`] with every tunable taken from `config`.
pub fn project_extents_with(
    extents: impl Into<BoundingBox>,
    src_proj: &Crs,
    dest_proj: &Crs,
    config: &ExtentConfig,
) -> Result<BoundingBox> {
    config.validate()?;
    let requested = extents.into();

    // Limit latitudes
    let mut domain = requested.clamp_y(src_proj.y_limits());

    // Wrap longitudes
    if src_proj.is_cylindrical() {
        let samples = linspace(domain.min_x, domain.max_x, config.wrap_samples);
        let lons = wrap_lons(&samples, config.wrap_base, config.wrap_period);
        let (lo, hi) = lons
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        domain.min_x = lo;
        domain.max_x = hi;
    } else {
        domain = domain.clamp_x(src_proj.x_limits());
    }

    let domain = domain.shrink(config.tolerance);
    tracing::debug!(
        requested = ?requested,
        domain = ?domain,
        cylindrical = src_proj.is_cylindrical(),
        "Adjusted extent in source projection"
    );

    let domain_in_src = Polygon::new(LineString::from(domain.ring().to_vec()), vec![]);
    let boundary = Polygon::new(src_proj.boundary(), vec![]);

    let geom = if src_proj != dest_proj {
        // Erode the boundary so that no vertex sits exactly on the projection edge
        let eroded = boundary.buffer(-src_proj.threshold());
        let clipped = eroded.intersection(&domain_in_src);
        dest_proj.project_geometry(&clipped, src_proj)
    } else {
        boundary.intersection(&domain_in_src)
    };

    let bounds = bounds_of(&geom).ok_or_else(|| {
        GeoUtilError::empty_geometry(format!("{:?} in the source projection", domain))
    })?;

    tracing::debug!(
        bounds = ?bounds,
        reprojected = src_proj != dest_proj,
        "Projected extent"
    );

    Ok(bounds)
}

fn bounds_of(geom: &MultiPolygon<f64>) -> Option<BoundingBox> {
    let rect = geom.bounding_rect()?;
    Some(BoundingBox::new(
        rect.min().x,
        rect.min().y,
        rect.max().x,
        rect.max().y,
    ))
}
