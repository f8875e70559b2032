//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

/// An extent in some coordinate reference system.
///
/// For geographic CRS the coordinates are degrees, for projected CRS they are
/// projection units (usually meters). The tuple form `(xmin, ymin, xmax, ymax)`
/// converts in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Clamp the y-range to `(lower, upper)`, leaving x untouched.
    pub fn clamp_y(&self, (lower, upper): (f64, f64)) -> Self {
        Self {
            min_y: self.min_y.max(lower),
            max_y: self.max_y.min(upper),
            ..*self
        }
    }

    /// Clamp the x-range to `(lower, upper)`, leaving y untouched.
    pub fn clamp_x(&self, (lower, upper): (f64, f64)) -> Self {
        Self {
            min_x: self.min_x.max(lower),
            max_x: self.max_x.min(upper),
            ..*self
        }
    }

    /// Move every side inward by `amount`.
    ///
    /// A negative amount grows the box. No check is made that the result is
    /// still well ordered.
    pub fn shrink(&self, amount: f64) -> Self {
        Self {
            min_x: self.min_x + amount,
            min_y: self.min_y + amount,
            max_x: self.max_x - amount,
            max_y: self.max_y - amount,
        }
    }

    /// The four corners as a closed ring, counter-clockwise from (min_x, min_y).
    pub fn ring(&self) -> [[f64; 2]; 5] {
        [
            [self.min_x, self.min_y],
            [self.max_x, self.min_y],
            [self.max_x, self.max_y],
            [self.min_x, self.max_y],
            [self.min_x, self.min_y],
        ]
    }

    /// The `(xmin, ymin, xmax, ymax)` tuple form.
    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<(f64, f64, f64, f64)> for BoundingBox {
    fn from((min_x, min_y, max_x, max_y): (f64, f64, f64, f64)) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([min_x, min_y, max_x, max_y]: [f64; 4]) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }
}

impl From<BoundingBox> for (f64, f64, f64, f64) {
    fn from(bbox: BoundingBox) -> Self {
        bbox.to_tuple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width() {
        assert_eq!(BoundingBox::new(-10.0, 0.0, 30.0, 5.0).width(), 40.0);
    }

    #[test]
    fn test_clamp_y_only_touches_latitudes() {
        let bbox = BoundingBox::new(-200.0, -100.0, 200.0, 100.0).clamp_y((-90.0, 90.0));
        assert_eq!(bbox, BoundingBox::new(-200.0, -90.0, 200.0, 90.0));
    }

    #[test]
    fn test_shrink() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0).shrink(1.0);
        assert_eq!(bbox.to_tuple(), (1.0, 1.0, 9.0, 9.0));
    }

    #[test]
    fn test_ring_is_closed() {
        let ring = BoundingBox::new(0.0, 0.0, 2.0, 1.0).ring();
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[2], [2.0, 1.0]);
    }
}
