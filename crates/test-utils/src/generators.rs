//! Test data generators for synthetic grids and geometries.
//!
//! These generators create predictable, verifiable patterns that can be used
//! across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Returns
///
/// A `Vec<f64>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a test grid with NaN (missing) values on a diagonal.
pub fn create_grid_with_nans(width: usize, height: usize) -> Vec<f64> {
    let mut data = create_test_grid(width, height);
    for i in 0..width.min(height) {
        data[i * width + i] = f64::NAN;
    }
    data
}

/// Cell centres of `n` equal longitude cells spanning -180 to 180.
pub fn global_lon_centers(n: usize) -> Vec<f64> {
    let step = 360.0 / n as f64;
    (0..n).map(|i| -180.0 + (i as f64 + 0.5) * step).collect()
}

/// Cell centres of `n` equal latitude cells from north to south.
pub fn lat_centers(n: usize) -> Vec<f64> {
    let step = 180.0 / n as f64;
    (0..n).map(|i| 90.0 - (i as f64 + 0.5) * step).collect()
}

/// Closed square ring with lower-left corner `(x, y)`.
pub fn square_ring(x: f64, y: f64, size: f64) -> Vec<[f64; 2]> {
    vec![
        [x, y],
        [x + size, y],
        [x + size, y + size],
        [x, y + size],
        [x, y],
    ]
}

/// Open zig-zag path of `n` vertices starting at `(x, y)`.
pub fn zigzag_path(x: f64, y: f64, n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| [x + i as f64, y + (i % 2) as f64])
        .collect()
}
