pub mod transform_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous transformation matrix for 2D points.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Tolerance used by tests and callers comparing projected coordinates.
pub const TOLERANCE: f64 = 1e-10;
