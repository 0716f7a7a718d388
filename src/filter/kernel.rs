use std::f64::consts::PI;

use crate::error::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A square convolution kernel with an odd side length of `2 * radius + 1`.
///
/// Weights are kept in single precision, the responses computed from them
/// in double precision.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    radius: usize,
    weights: Vec<f32>,
}

impl Kernel {
    pub(super) fn from_weights(radius: usize, weights: Vec<f32>) -> Self {
        let side_length = 2 * radius + 1;
        assert_eq!(
            weights.len(),
            side_length * side_length,
            "kernel of radius {} needs {} weights",
            radius,
            side_length * side_length
        );
        Self { radius, weights }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn side_length(&self) -> usize {
        2 * self.radius + 1
    }

    /// # Panics
    ///
    /// If `x` or `y` is outside of the kernel.
    pub fn weight(&self, x: usize, y: usize) -> f32 {
        let side_length = self.side_length();
        assert!(x < side_length && y < side_length, "tap outside of kernel");
        self.weights[y * side_length + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.weights.chunks(self.side_length())
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().map(|&weight| weight as f64).sum()
    }
}

/// Gaussian probability density with mean zero.
fn gaussian(x: f64, sigma: f64) -> f64 {
    (1.0 / (2.0 * PI * sigma * sigma).sqrt()) * (-(x * x) / (2.0 * sigma * sigma)).exp()
}

/// Builds a normalized, radially symmetric Gaussian kernel.
///
/// Every tap is weighted by the one dimensional Gaussian of its euclidean
/// distance to the center tap. The product of two one dimensional kernels
/// rounds differently in the last bits and does not reproduce NIST outputs.
pub fn build_kernel(radius: usize, sigma: f64) -> crate::Result<Kernel> {
    if radius == 0 {
        return Err(Error::InvalidFilterRadius(radius));
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::InvalidFilterSigma(sigma));
    }
    let side_length = 2 * radius + 1;
    let center = Point::new(radius as i64, radius as i64);
    let mut weights = Vec::with_capacity(side_length * side_length);
    for y in 0..side_length {
        for x in 0..side_length {
            let distance = Point::new(x as i64, y as i64).distance(&center) as f32;
            weights.push(gaussian(distance as f64, sigma) as f32);
        }
    }
    // column-major, like the accumulation in convolve
    let sum: f64 = (0..side_length)
        .flat_map(|x| (0..side_length).map(move |y| (x, y)))
        .map(|(x, y)| weights[y * side_length + x] as f64)
        .sum();
    for weight in weights.iter_mut() {
        *weight = (*weight as f64 / sum) as f32;
    }
    Ok(Kernel::from_weights(radius, weights))
}
