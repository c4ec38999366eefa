use crate::math::transform_2d::{shear, shear_factors};
use crate::math::vector_2d::orthonormal;
use crate::math::{Point2, Vector2};

use super::options::ProjectionOptions;

/// Math shared by the cap and join projectors.
///
/// Derived once per projection run from a [`ProjectionOptions`] snapshot and
/// copied into every vertex projector.
#[derive(Debug, Clone, Copy)]
pub struct BaseProjector {
    options: ProjectionOptions,
    scale: Vector2,
    stroke_uniform_scalar: Vector2,
    magnitude: f64,
    shear: Vector2,
}

impl BaseProjector {
    /// Creates the shared projection state for `options`.
    #[must_use]
    pub fn new(options: &ProjectionOptions) -> Self {
        let stroke_uniform_scalar = if options.stroke_uniform {
            Vector2::new(1.0 / options.scale_x, 1.0 / options.scale_y)
        } else {
            Vector2::new(1.0, 1.0)
        };
        Self {
            options: *options,
            scale: Vector2::new(options.scale_x, options.scale_y),
            stroke_uniform_scalar,
            magnitude: options.half_width(),
            shear: shear_factors(options.skew_x, options.skew_y),
        }
    }

    #[must_use]
    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    /// Half the stroke width.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// `(1/scale_x, 1/scale_y)` for uniform strokes, `(1, 1)` otherwise.
    #[must_use]
    pub fn stroke_uniform_scalar(&self) -> Vector2 {
        self.stroke_uniform_scalar
    }

    /// Shear factors `(tan(skew_x), tan(skew_y))`.
    #[must_use]
    pub fn shear_factors(&self) -> Vector2 {
        self.shear
    }

    /// Returns the side vector `to - from`.
    ///
    /// For uniform strokes the vector is scaled into rendered space, so the
    /// normal is taken against the direction the segment visually has.
    #[must_use]
    pub fn side_vector(&self, from: &Point2, to: &Point2) -> Vector2 {
        let v = to - from;
        if self.options.stroke_uniform {
            v.component_mul(&self.scale)
        } else {
            v
        }
    }

    /// Projects `from` orthogonally to the segment `from → to` by half the
    /// stroke width.
    #[must_use]
    pub fn orthogonal_projection(&self, from: &Point2, to: &Point2) -> Point2 {
        self.orthogonal_projection_by(from, to, self.magnitude)
    }

    /// Projects `from` orthogonally to the segment `from → to` by `magnitude`.
    ///
    /// The sign of `magnitude` picks the side: positive follows the
    /// counter-clockwise normal of the side vector.
    #[must_use]
    pub fn orthogonal_projection_by(&self, from: &Point2, to: &Point2, magnitude: f64) -> Point2 {
        let normal = orthonormal(self.side_vector(from, to));
        self.skew_point(from + self.scale_unit_vector(normal, magnitude))
    }

    #[must_use]
    pub fn is_skewed(&self) -> bool {
        self.options.is_skewed()
    }

    /// Shears an offset, Y first and then X.
    #[must_use]
    pub fn apply_skew(&self, v: Vector2) -> Vector2 {
        shear(v, self.shear)
    }

    /// Shears a local point into the skewed frame, Y first and then X.
    #[must_use]
    pub fn skew_point(&self, p: Point2) -> Point2 {
        Point2::from(self.apply_skew(p.coords))
    }

    /// Scales a unit vector by the uniform-stroke correction, then by `scalar`.
    #[must_use]
    pub fn scale_unit_vector(&self, unit_vector: Vector2, scalar: f64) -> Vector2 {
        unit_vector.component_mul(&self.stroke_uniform_scalar) * scalar
    }
}
