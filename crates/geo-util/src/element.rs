//! Plot elements consumed by the conversion helpers.
//!
//! Paths and polygons carry a list of coordinate arrays. Gridded elements
//! carry per-axis coordinates plus one or more value grids, and expose them
//! through [`GriddedElement`].

use geo_common::BoundingBox;
use projection::Crs;

use crate::error::{GeoUtilError, Result};
use crate::grid::Grid;

/// An N×2 array of (x, y) pairs.
pub type CoordArray = Vec<[f64; 2]>;

/// A collection of open paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub data: Vec<CoordArray>,
    pub crs: Crs,
}

impl Path {
    pub fn new(data: Vec<CoordArray>, crs: Crs) -> Self {
        Self { data, crs }
    }
}

/// A collection of polygon rings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygons {
    pub data: Vec<CoordArray>,
    pub crs: Crs,
}

impl Polygons {
    pub fn new(data: Vec<CoordArray>, crs: Crs) -> Self {
        Self { data, crs }
    }
}

/// How an element lays out its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Two key dimensions followed by any number of value dimensions.
    GriddedMultiValue,
    /// Exactly x, y and one value dimension.
    Generic3D,
}

/// Values of one dimension, not expanded to the full grid.
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionValues {
    /// One coordinate per column (x) or row (y).
    Coords(Vec<f64>),
    /// A value grid.
    Grid(Grid),
}

impl DimensionValues {
    pub fn into_coords(self) -> Result<Vec<f64>> {
        match self {
            DimensionValues::Coords(coords) => Ok(coords),
            DimensionValues::Grid(_) => Err(GeoUtilError::shape_mismatch(
                "expected coordinates, found a value grid",
            )),
        }
    }

    pub fn into_grid(self) -> Result<Grid> {
        match self {
            DimensionValues::Grid(grid) => Ok(grid),
            DimensionValues::Coords(_) => Err(GeoUtilError::shape_mismatch(
                "expected a value grid, found coordinates",
            )),
        }
    }
}

/// A 2D element whose values sit on a rectilinear grid.
pub trait GriddedElement {
    fn kind(&self) -> ElementKind;

    fn crs(&self) -> &Crs;

    /// Number of value dimensions.
    fn vdim_count(&self) -> usize;

    /// Values of dimension `dim`: 0 is x, 1 is y, 2.. are value dimensions.
    fn dimension_values(&self, dim: usize) -> Result<DimensionValues>;

    /// `(min, max)` extent of dimension `dim`.
    fn range(&self, dim: usize) -> Result<(f64, f64)>;
}

/// Cell centres of `n` equal cells between `lo` and `hi`.
fn cell_centers(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let step = (hi - lo) / n as f64;
    (0..n).map(|i| lo + (i as f64 + 0.5) * step).collect()
}

fn value_range(grid: &Grid) -> (f64, f64) {
    grid.value_range().unwrap_or((f64::NAN, f64::NAN))
}

fn coord_range(coords: &[f64]) -> (f64, f64) {
    coords
        .iter()
        .fold((f64::NAN, f64::NAN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// A single-band raster covering `bounds`.
///
/// Row 0 is the top (max y) row, matching how rasters are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    values: Grid,
    bounds: BoundingBox,
    crs: Crs,
}

impl Image {
    pub fn new(values: Grid, bounds: BoundingBox, crs: Crs) -> Result<Self> {
        if values.depth() != 1 {
            return Err(GeoUtilError::shape_mismatch("an image holds a single band"));
        }
        Ok(Self {
            values,
            bounds,
            crs,
        })
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn xs(&self) -> Vec<f64> {
        cell_centers(self.bounds.min_x, self.bounds.max_x, self.values.cols())
    }

    fn ys(&self) -> Vec<f64> {
        cell_centers(self.bounds.max_y, self.bounds.min_y, self.values.rows())
    }
}

impl GriddedElement for Image {
    fn kind(&self) -> ElementKind {
        ElementKind::Generic3D
    }

    fn crs(&self) -> &Crs {
        &self.crs
    }

    fn vdim_count(&self) -> usize {
        1
    }

    fn dimension_values(&self, dim: usize) -> Result<DimensionValues> {
        match dim {
            0 => Ok(DimensionValues::Coords(self.xs())),
            1 => Ok(DimensionValues::Coords(self.ys())),
            2 => Ok(DimensionValues::Grid(self.values.clone())),
            _ => Err(GeoUtilError::MissingDimension(dim)),
        }
    }

    fn range(&self, dim: usize) -> Result<(f64, f64)> {
        match dim {
            0 => Ok((self.bounds.min_x, self.bounds.max_x)),
            1 => Ok((self.bounds.min_y, self.bounds.max_y)),
            2 => Ok(value_range(&self.values)),
            _ => Err(GeoUtilError::MissingDimension(dim)),
        }
    }
}

/// A multi-band raster, one grid per value dimension (e.g. R, G, B, A).
#[derive(Debug, Clone, PartialEq)]
pub struct Rgb {
    bands: Vec<Grid>,
    bounds: BoundingBox,
    crs: Crs,
}

impl Rgb {
    pub fn new(bands: Vec<Grid>, bounds: BoundingBox, crs: Crs) -> Result<Self> {
        let first = bands
            .first()
            .ok_or_else(|| GeoUtilError::shape_mismatch("an RGB element needs bands"))?;
        if bands
            .iter()
            .any(|b| b.shape() != (first.rows(), first.cols(), 1))
        {
            return Err(GeoUtilError::shape_mismatch(
                "RGB bands must be single-band grids of the same shape",
            ));
        }
        Ok(Self { bands, bounds, crs })
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

impl GriddedElement for Rgb {
    fn kind(&self) -> ElementKind {
        ElementKind::GriddedMultiValue
    }

    fn crs(&self) -> &Crs {
        &self.crs
    }

    fn vdim_count(&self) -> usize {
        self.bands.len()
    }

    fn dimension_values(&self, dim: usize) -> Result<DimensionValues> {
        let first = &self.bands[0];
        match dim {
            0 => Ok(DimensionValues::Coords(cell_centers(
                self.bounds.min_x,
                self.bounds.max_x,
                first.cols(),
            ))),
            1 => Ok(DimensionValues::Coords(cell_centers(
                self.bounds.max_y,
                self.bounds.min_y,
                first.rows(),
            ))),
            d => self
                .bands
                .get(d - 2)
                .cloned()
                .map(DimensionValues::Grid)
                .ok_or(GeoUtilError::MissingDimension(d)),
        }
    }

    fn range(&self, dim: usize) -> Result<(f64, f64)> {
        match dim {
            0 => Ok((self.bounds.min_x, self.bounds.max_x)),
            1 => Ok((self.bounds.min_y, self.bounds.max_y)),
            d => self
                .bands
                .get(d - 2)
                .map(value_range)
                .ok_or(GeoUtilError::MissingDimension(d)),
        }
    }
}

/// A rectilinear mesh with explicit cell-centre coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMesh {
    xs: Vec<f64>,
    ys: Vec<f64>,
    values: Grid,
    crs: Crs,
}

impl QuadMesh {
    /// `values` must have one row per entry of `ys` and one column per entry of `xs`.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, values: Grid, crs: Crs) -> Result<Self> {
        if values.shape() != (ys.len(), xs.len(), 1) {
            return Err(GeoUtilError::shape_mismatch(format!(
                "values of shape {:?} do not match {} xs and {} ys",
                values.shape(),
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self {
            xs,
            ys,
            values,
            crs,
        })
    }
}

impl GriddedElement for QuadMesh {
    fn kind(&self) -> ElementKind {
        ElementKind::Generic3D
    }

    fn crs(&self) -> &Crs {
        &self.crs
    }

    fn vdim_count(&self) -> usize {
        1
    }

    fn dimension_values(&self, dim: usize) -> Result<DimensionValues> {
        match dim {
            0 => Ok(DimensionValues::Coords(self.xs.clone())),
            1 => Ok(DimensionValues::Coords(self.ys.clone())),
            2 => Ok(DimensionValues::Grid(self.values.clone())),
            _ => Err(GeoUtilError::MissingDimension(dim)),
        }
    }

    fn range(&self, dim: usize) -> Result<(f64, f64)> {
        match dim {
            0 => Ok(coord_range(&self.xs)),
            1 => Ok(coord_range(&self.ys)),
            2 => Ok(value_range(&self.values)),
            _ => Err(GeoUtilError::MissingDimension(dim)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_image(rows: usize, cols: usize) -> Image {
        let values = Grid::new((0..rows * cols).map(|v| v as f64).collect(), rows, cols).unwrap();
        Image::new(
            values,
            BoundingBox::new(-180.0, -90.0, 180.0, 90.0),
            Crs::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_image_cell_centres() {
        let image = global_image(2, 4);
        let xs = image.dimension_values(0).unwrap().into_coords().unwrap();
        let ys = image.dimension_values(1).unwrap().into_coords().unwrap();
        assert_eq!(xs, vec![-135.0, -45.0, 45.0, 135.0]);
        assert_eq!(ys, vec![45.0, -45.0]);
    }

    #[test]
    fn test_image_range_uses_bounds() {
        let image = global_image(2, 4);
        assert_eq!(image.range(0).unwrap(), (-180.0, 180.0));
        assert_eq!(image.range(2).unwrap(), (0.0, 7.0));
        assert!(matches!(
            image.range(3),
            Err(GeoUtilError::MissingDimension(3))
        ));
    }

    #[test]
    fn test_rgb_dimensions() {
        let band = Grid::new(vec![0.5; 4], 2, 2).unwrap();
        let rgb = Rgb::new(
            vec![band.clone(), band.clone(), band],
            BoundingBox::new(0.0, 0.0, 2.0, 2.0),
            Crs::default(),
        )
        .unwrap();

        assert_eq!(rgb.kind(), ElementKind::GriddedMultiValue);
        assert_eq!(rgb.vdim_count(), 3);
        assert!(rgb.dimension_values(4).is_ok());
        assert!(rgb.dimension_values(5).is_err());
    }

    #[test]
    fn test_rgb_rejects_mismatched_bands() {
        let a = Grid::new(vec![0.0; 4], 2, 2).unwrap();
        let b = Grid::new(vec![0.0; 6], 2, 3).unwrap();
        assert!(Rgb::new(vec![a, b], BoundingBox::new(0.0, 0.0, 1.0, 1.0), Crs::default()).is_err());
        assert!(Rgb::new(vec![], BoundingBox::new(0.0, 0.0, 1.0, 1.0), Crs::default()).is_err());
    }

    #[test]
    fn test_quadmesh_shape_check() {
        let values = Grid::new(vec![0.0; 6], 2, 3).unwrap();
        assert!(QuadMesh::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0], values.clone(), Crs::default()).is_ok());
        assert!(QuadMesh::new(vec![0.0, 1.0], vec![0.0, 1.0, 2.0], values, Crs::default()).is_err());
    }

    #[test]
    fn test_dimension_values_type_mismatch() {
        assert!(DimensionValues::Coords(vec![1.0]).into_grid().is_err());
        let grid = Grid::new(vec![1.0], 1, 1).unwrap();
        assert!(DimensionValues::Grid(grid).into_coords().is_err());
    }
}
