//! Shear and scale helpers shared by the projectors and the bounding-box
//! reduction.
//!
//! Skew angles are in degrees. The Y shear is always applied before the X
//! shear, so the X shear reads the already-sheared Y coordinate:
//!
//! ```text
//! y' = y + x * tan(skew_y)
//! x' = x + y' * tan(skew_x)
//! ```

use super::{Matrix3, Point2, Vector2};

/// Returns the shear factors `(tan(skew_x), tan(skew_y))` for angles in degrees.
#[must_use]
pub fn shear_factors(skew_x: f64, skew_y: f64) -> Vector2 {
    Vector2::new(skew_x.to_radians().tan(), skew_y.to_radians().tan())
}

/// Shears `v` by precomputed factors from [`shear_factors`].
#[must_use]
pub fn shear(v: Vector2, factors: Vector2) -> Vector2 {
    let y = v.y + v.x * factors.y;
    let x = v.x + y * factors.x;
    Vector2::new(x, y)
}

/// Shears `v` by `skew_y` then `skew_x` (degrees).
#[must_use]
pub fn apply_skew(v: Vector2, skew_x: f64, skew_y: f64) -> Vector2 {
    shear(v, shear_factors(skew_x, skew_y))
}

/// Returns the matrix equivalent of [`apply_skew`].
#[must_use]
pub fn skew_matrix(skew_x: f64, skew_y: f64) -> Matrix3 {
    let t = shear_factors(skew_x, skew_y);
    Matrix3::new(1.0 + t.x * t.y, t.x, 0.0, t.y, 1.0, 0.0, 0.0, 0.0, 1.0)
}

/// Returns a non-uniform scaling matrix.
#[must_use]
pub fn scale_matrix(scale_x: f64, scale_y: f64) -> Matrix3 {
    Matrix3::new_nonuniform_scaling(&Vector2::new(scale_x, scale_y))
}

/// Maps `p` through a homogeneous 2D transform.
#[must_use]
pub fn transform_point(m: &Matrix3, p: &Point2) -> Point2 {
    m.transform_point(p)
}
