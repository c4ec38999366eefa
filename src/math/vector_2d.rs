use super::Vector2;

/// Returns `v` scaled to unit length, or `v` unchanged when it has no length.
///
/// Coincident points produce zero-length sides; their projections collapse
/// onto the vertex.
#[must_use]
pub fn unit_or_zero(v: Vector2) -> Vector2 {
    let len = v.norm();
    if len > 0.0 {
        v / len
    } else {
        v
    }
}

/// Returns the unit normal of `v`, rotated a quarter turn counter-clockwise.
#[must_use]
pub fn orthonormal(v: Vector2) -> Vector2 {
    unit_or_zero(Vector2::new(-v.y, v.x))
}

/// Returns the unsigned angle between `a` and `b`, in `[0, π]`.
///
/// Zero vectors yield `0`.
#[must_use]
pub fn angle_between(a: Vector2, b: Vector2) -> f64 {
    a.perp(&b).abs().atan2(a.dot(&b))
}
