//! Carrying geometries between projections.

use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};

use crate::crs::Projection;

/// Normalize a longitude in degrees to [-180, 180).
pub fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0);
    // rem_euclid can round up to the divisor itself
    if wrapped >= 360.0 {
        -180.0
    } else {
        wrapped - 180.0
    }
}

/// Insert vertices so that no segment of `ring` is longer than `max_segment`.
///
/// Non-positive or non-finite `max_segment` returns the ring unchanged.
pub fn densify_ring(ring: &LineString<f64>, max_segment: f64) -> LineString<f64> {
    if !(max_segment.is_finite() && max_segment > 0.0) || ring.0.len() < 2 {
        return ring.clone();
    }

    let mut coords = Vec::with_capacity(ring.0.len());
    for line in ring.lines() {
        let (a, b) = (line.start, line.end);
        coords.push(a);

        let length = (b.x - a.x).hypot(b.y - a.y);
        if length > max_segment {
            let pieces = (length / max_segment).ceil() as usize;
            for i in 1..pieces {
                let t = i as f64 / pieces as f64;
                coords.push(Coord {
                    x: a.x + (b.x - a.x) * t,
                    y: a.y + (b.y - a.y) * t,
                });
            }
        }
    }
    if let Some(last) = ring.0.last() {
        coords.push(*last);
    }

    LineString::new(coords)
}

/// Reproject a polygonal geometry from `src` coordinates into `dest` coordinates.
///
/// Rings are densified in source space at the source threshold before every
/// vertex is taken through geographic coordinates. Vertices with no image in
/// `dest` are dropped; rings that end up with fewer than four vertices are
/// dropped, and a polygon whose exterior is dropped disappears. The result is
/// clipped to the boundary of `dest`.
pub fn project_geometry<S, D>(geometry: &MultiPolygon<f64>, src: &S, dest: &D) -> MultiPolygon<f64>
where
    S: Projection + ?Sized,
    D: Projection + ?Sized,
{
    let max_segment = src.threshold();
    let mut dropped = 0usize;

    let mut project_ring = |ring: &LineString<f64>| -> Option<LineString<f64>> {
        let dense = densify_ring(ring, max_segment);
        let total = dense.0.len();
        let coords: Vec<Coord<f64>> = dense
            .coords()
            .filter_map(|c| {
                let (lon, lat) = src.unproject(c.x, c.y)?;
                let (x, y) = dest.project(lon, lat)?;
                Some(Coord { x, y })
            })
            .collect();
        dropped += total - coords.len();

        (coords.len() >= 4).then(|| LineString::new(coords))
    };

    let polygons: Vec<Polygon<f64>> = geometry
        .iter()
        .filter_map(|polygon| {
            let exterior = project_ring(polygon.exterior())?;
            let interiors = polygon
                .interiors()
                .iter()
                .filter_map(&mut project_ring)
                .collect();
            Some(Polygon::new(exterior, interiors))
        })
        .collect();

    let projected = MultiPolygon::new(polygons);
    let clipped = if projected.0.is_empty() {
        projected
    } else {
        projected.intersection(&Polygon::new(dest.boundary(), vec![]))
    };

    tracing::trace!(
        polygons_in = geometry.0.len(),
        polygons_out = clipped.0.len(),
        dropped_vertices = dropped,
        "Projected geometry"
    );

    clipped
}
