pub mod affine_1d;

/// 2D point type.
pub type Point = nalgebra::Point2<f64>;

/// Tolerance for floating-point comparisons in tests and validation.
pub const TOLERANCE: f64 = 1e-10;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(a, b)
}
