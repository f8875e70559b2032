//! Conversions between plot element arrays and geometries.

use geo::{Coord, LineString, MultiLineString, MultiPolygon, Point, Polygon};

use crate::element::{Path, Polygons};
use crate::error::{GeoUtilError, Result};

/// Build one line string per path array, preserving order.
pub fn path_to_geom(path: &Path) -> MultiLineString<f64> {
    MultiLineString::new(
        path.data
            .iter()
            .map(|coords| LineString::from(coords.clone()))
            .collect(),
    )
}

/// Build one polygon per ring array, preserving order.
///
/// Rings are not validated; open rings are closed by the polygon constructor.
pub fn polygon_to_geom(polygons: &Polygons) -> MultiPolygon<f64> {
    MultiPolygon::new(
        polygons
            .data
            .iter()
            .map(|ring| Polygon::new(LineString::from(ring.clone()), vec![]))
            .collect(),
    )
}

/// A flat row-major coordinate buffer with its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayInterface {
    pub data: Vec<f64>,
    pub shape: (usize, usize),
}

impl ArrayInterface {
    pub fn new(data: Vec<f64>, shape: (usize, usize)) -> Self {
        Self { data, shape }
    }

    /// Reshape and split into the first two columns.
    pub fn columns(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        let (rows, cols) = self.shape;
        if cols < 2 || self.data.len() != rows * cols {
            return Err(GeoUtilError::InvalidArrayInterface {
                len: self.data.len(),
                shape: self.shape,
            });
        }
        Ok(self
            .data
            .chunks_exact(cols)
            .map(|row| (row[0], row[1]))
            .unzip())
    }
}

impl<'a> FromIterator<&'a Coord<f64>> for ArrayInterface {
    fn from_iter<I: IntoIterator<Item = &'a Coord<f64>>>(iter: I) -> Self {
        let data: Vec<f64> = iter.into_iter().flat_map(|c| [c.x, c.y]).collect();
        let rows = data.len() / 2;
        Self::new(data, (rows, 2))
    }
}

impl From<&LineString<f64>> for ArrayInterface {
    fn from(line: &LineString<f64>) -> Self {
        line.0.iter().collect()
    }
}

impl From<&Point<f64>> for ArrayInterface {
    fn from(point: &Point<f64>) -> Self {
        Self::new(vec![point.x(), point.y()], (1, 2))
    }
}

/// Where `geom_to_array` reads coordinates from.
#[derive(Debug, Clone, PartialEq)]
pub enum GeomSource {
    /// A polygon; its exterior ring is read.
    RingBacked(Polygon<f64>),
    /// Any other geometry, through its array interface.
    BufferBacked(ArrayInterface),
}

impl From<Polygon<f64>> for GeomSource {
    fn from(polygon: Polygon<f64>) -> Self {
        GeomSource::RingBacked(polygon)
    }
}

impl From<&Polygon<f64>> for GeomSource {
    fn from(polygon: &Polygon<f64>) -> Self {
        GeomSource::RingBacked(polygon.clone())
    }
}

impl From<LineString<f64>> for GeomSource {
    fn from(line: LineString<f64>) -> Self {
        GeomSource::BufferBacked(ArrayInterface::from(&line))
    }
}

impl From<&LineString<f64>> for GeomSource {
    fn from(line: &LineString<f64>) -> Self {
        GeomSource::BufferBacked(ArrayInterface::from(line))
    }
}

impl From<Point<f64>> for GeomSource {
    fn from(point: Point<f64>) -> Self {
        GeomSource::BufferBacked(ArrayInterface::from(&point))
    }
}

impl From<ArrayInterface> for GeomSource {
    fn from(array: ArrayInterface) -> Self {
        GeomSource::BufferBacked(array)
    }
}

impl GeomSource {
    /// x and y coordinate sequences.
    pub fn xy(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        match self {
            GeomSource::RingBacked(polygon) => Ok(polygon
                .exterior()
                .coords()
                .map(|c| (c.x, c.y))
                .unzip()),
            GeomSource::BufferBacked(array) => array.columns(),
        }
    }
}

/// Extract parallel x and y coordinate arrays, one pair per geometry.
pub fn geom_to_array<I>(geoms: I) -> Result<(Vec<Vec<f64>>, Vec<Vec<f64>>)>
where
    I: IntoIterator,
    I::Item: Into<GeomSource>,
{
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for geom in geoms {
        let (x, y) = geom.into().xy()?;
        xs.push(x);
        ys.push(y);
    }
    Ok((xs, ys))
}
