//! Dense value grids.

use crate::error::{GeoUtilError, Result};

/// A row-major grid of values, optionally stacked in depth.
///
/// Cell `(row, col, band)` lives at `(row * cols + col) * depth + band`, the
/// same layout a depth-stacked array has. Missing values are `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    depth: usize,
}

impl Grid {
    /// Create a single-band grid from row-major values.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Self> {
        Self::with_depth(data, rows, cols, 1)
    }

    /// Create a grid with `depth` values per cell.
    pub fn with_depth(data: Vec<f64>, rows: usize, cols: usize, depth: usize) -> Result<Self> {
        if depth == 0 || data.len() != rows * cols * depth {
            return Err(GeoUtilError::shape_mismatch(format!(
                "{} values do not fill a {}x{}x{} grid",
                data.len(),
                rows,
                cols,
                depth
            )));
        }
        Ok(Self {
            data,
            rows,
            cols,
            depth,
        })
    }

    /// Build a grid from nested rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return Err(GeoUtilError::shape_mismatch("rows have different lengths"));
        }
        Self::new(rows.concat(), rows.len(), cols)
    }

    /// Stack single-band grids of equal shape along a new depth axis.
    pub fn dstack(bands: &[Grid]) -> Result<Self> {
        let first = bands
            .first()
            .ok_or_else(|| GeoUtilError::shape_mismatch("nothing to stack"))?;
        let (rows, cols) = (first.rows, first.cols);
        if bands
            .iter()
            .any(|b| b.rows != rows || b.cols != cols || b.depth != 1)
        {
            return Err(GeoUtilError::shape_mismatch(
                "stacked bands must be single-band grids of the same shape",
            ));
        }

        let depth = bands.len();
        let mut data = Vec::with_capacity(rows * cols * depth);
        for cell in 0..rows * cols {
            data.extend(bands.iter().map(|b| b.data[cell]));
        }
        Self::with_depth(data, rows, cols, depth)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `(rows, cols, depth)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, self.depth)
    }

    /// Raw values in storage order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Value at a cell of a given band.
    pub fn get(&self, row: usize, col: usize, band: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols || band >= self.depth {
            return None;
        }
        self.data.get((row * self.cols + col) * self.depth + band).copied()
    }

    /// All values of one column for one band, top to bottom.
    pub fn column(&self, col: usize, band: usize) -> Vec<f64> {
        (0..self.rows)
            .filter_map(|row| self.get(row, col, band))
            .collect()
    }

    /// Smallest and largest non-NaN value across all bands.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// A new grid with the first column appended after the last one.
    pub fn with_first_column_appended(&self) -> Self {
        if self.cols == 0 {
            return self.clone();
        }
        let cols = self.cols + 1;
        let row_len = self.cols * self.depth;
        let mut data = Vec::with_capacity(self.rows * cols * self.depth);
        for row in self.data.chunks(row_len) {
            data.extend_from_slice(row);
            data.extend_from_slice(&row[..self.depth]);
        }
        Self {
            data,
            rows: self.rows,
            cols,
            depth: self.depth,
        }
    }
}
