//! Mesh extraction from gridded elements.

use projection::Projection;

use crate::element::{ElementKind, GriddedElement};
use crate::error::Result;
use crate::grid::Grid;

/// Longitude span of a grid that covers the whole globe.
const FULL_WRAP: f64 = 360.0;

/// Coordinates and values of a gridded element, ready for mesh rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMesh {
    /// One x coordinate per column.
    pub xs: Vec<f64>,
    /// One y coordinate per row.
    pub ys: Vec<f64>,
    /// Values, depth-stacked when the element has several value dimensions.
    pub zs: Grid,
}

/// Get mesh data from a 2D element, closing the seam of global data.
///
/// When the element is on a cylindrical CRS and its x-range spans exactly
/// 360 degrees, the first column is repeated after the last one (shifted by
/// +360 in x) so the mesh wraps all the way around.
pub fn geo_mesh<E>(element: &E) -> Result<GeoMesh>
where
    E: GriddedElement + ?Sized,
{
    let kind = element.kind();
    let xs = element.dimension_values(0)?.into_coords()?;
    let ys = element.dimension_values(1)?.into_coords()?;
    let zs = match kind {
        ElementKind::GriddedMultiValue => {
            let bands = (2..2 + element.vdim_count())
                .map(|dim| element.dimension_values(dim)?.into_grid())
                .collect::<Result<Vec<_>>>()?;
            Grid::dstack(&bands)?
        }
        ElementKind::Generic3D => element.dimension_values(2)?.into_grid()?,
    };

    let (lon0, lon1) = element.range(0)?;
    let wraps = element.crs().is_cylindrical() && lon1 - lon0 == FULL_WRAP;

    tracing::debug!(
        kind = ?kind,
        shape = ?zs.shape(),
        x_range = ?(lon0, lon1),
        seam = wraps,
        "Extracted mesh"
    );

    if !wraps {
        return Ok(GeoMesh { xs, ys, zs });
    }

    let mut xs = xs;
    if let Some(&first) = xs.first() {
        xs.push(first + FULL_WRAP);
    }
    let zs = zs.with_first_column_appended();

    Ok(GeoMesh { xs, ys, zs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Image, QuadMesh, Rgb};
    use geo_common::BoundingBox;
    use projection::{Crs, LambertConformal, Mercator};

    fn values(rows: usize, cols: usize) -> Grid {
        Grid::new((0..rows * cols).map(|v| v as f64).collect(), rows, cols).unwrap()
    }

    #[test]
    fn test_global_image_gets_seam_column() {
        let image = Image::new(
            values(3, 4),
            BoundingBox::new(-180.0, -90.0, 180.0, 90.0),
            Crs::default(),
        )
        .unwrap();

        let mesh = geo_mesh(&image).unwrap();
        assert_eq!(mesh.xs, vec![-135.0, -45.0, 45.0, 135.0, 225.0]);
        assert_eq!(mesh.ys.len(), 3);
        assert_eq!(mesh.zs.shape(), (3, 5, 1));
        assert_eq!(mesh.zs.column(4, 0), mesh.zs.column(0, 0));
    }

    #[test]
    fn test_regional_image_unchanged() {
        let image = Image::new(
            values(3, 4),
            BoundingBox::new(-100.0, 20.0, 0.0, 60.0),
            Crs::default(),
        )
        .unwrap();

        let mesh = geo_mesh(&image).unwrap();
        assert_eq!(mesh.xs.len(), 4);
        assert_eq!(mesh.zs, values(3, 4));
    }

    #[test]
    fn test_non_cylindrical_crs_unchanged() {
        let image = Image::new(
            values(2, 2),
            BoundingBox::new(-180.0, -90.0, 180.0, 90.0),
            Crs::from(LambertConformal::conus().unwrap()),
        )
        .unwrap();

        let mesh = geo_mesh(&image).unwrap();
        assert_eq!(mesh.xs.len(), 2);
        assert_eq!(mesh.zs.shape(), (2, 2, 1));
    }

    #[test]
    fn test_mercator_counts_as_cylindrical() {
        let image = Image::new(
            values(2, 2),
            BoundingBox::new(0.0, -60.0, 360.0, 60.0),
            Crs::from(Mercator::default()),
        )
        .unwrap();

        let mesh = geo_mesh(&image).unwrap();
        assert_eq!(mesh.xs, vec![90.0, 270.0, 450.0]);
    }

    #[test]
    fn test_rgb_is_depth_stacked_and_wrapped() {
        let bands = vec![values(2, 3), values(2, 3), values(2, 3)];
        let rgb = Rgb::new(
            bands,
            BoundingBox::new(-180.0, -90.0, 180.0, 90.0),
            Crs::default(),
        )
        .unwrap();

        let mesh = geo_mesh(&rgb).unwrap();
        assert_eq!(mesh.zs.shape(), (2, 4, 3));
        for band in 0..3 {
            assert_eq!(mesh.zs.column(3, band), mesh.zs.column(0, band));
        }
    }

    #[test]
    fn test_quadmesh_range_from_centres() {
        // Centres never span the full 360 degrees, so no seam is added
        let mesh = QuadMesh::new(
            vec![-135.0, -45.0, 45.0, 135.0],
            vec![-45.0, 45.0],
            values(2, 4),
            Crs::default(),
        )
        .unwrap();

        let result = geo_mesh(&mesh).unwrap();
        assert_eq!(result.xs.len(), 4);
    }

    #[test]
    fn test_dyn_element() {
        let image = Image::new(
            values(1, 2),
            BoundingBox::new(-180.0, 0.0, 180.0, 1.0),
            Crs::default(),
        )
        .unwrap();
        let element: &dyn GriddedElement = &image;
        assert_eq!(geo_mesh(element).unwrap().xs.len(), 3);
    }
}
