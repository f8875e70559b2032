//! Longitude wrapping.

use num_traits::Float;

/// Wrap a single longitude into `[base, base + period)`.
pub fn wrap_lon<T: Float>(lon: T, base: T, period: T) -> T {
    let two = T::one() + T::one();
    let mut rem = (lon - base + period * two) % period;
    if rem < T::zero() {
        rem = rem + period;
    }
    // A tiny negative remainder can round up to the period itself
    if rem >= period {
        rem = T::zero();
    }
    rem + base
}

/// Wrap longitude values into the range between `base` and `base + period`.
///
/// The output has the same length and order as the input.
pub fn wrap_lons<T: Float>(lons: &[T], base: T, period: T) -> Vec<T> {
    lons.iter().map(|&lon| wrap_lon(lon, base, period)).collect()
}

/// `n` evenly spaced samples from `start` to `end`, both included.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}
