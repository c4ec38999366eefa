use crate::math::transform_2d::transform_point;
use crate::math::{Matrix3, Point2};
use crate::projection::{ProjectStroke, ProjectionOptions};

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Returns the smallest box containing every point, or `None` for no
    /// points.
    ///
    /// A NaN coordinate makes the matching box coordinates NaN.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in points {
            bounds.min.x = nan_min(bounds.min.x, p.x);
            bounds.min.y = nan_min(bounds.min.y, p.y);
            bounds.max.x = nan_max(bounds.max.x, p.x);
            bounds.max.y = nan_max(bounds.max.y, p.y);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns `true` if any corner coordinate is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.min.x.is_nan() || self.min.y.is_nan() || self.max.x.is_nan() || self.max.y.is_nan()
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Computes the exact bounding box of a stroked path.
///
/// Every projected stroke point is mapped through `transform` (identity by
/// default) and reduced with coordinate-wise min/max. The projected points
/// already carry the skew from the options, so `transform` holds only the
/// remaining part of the shape's transform and must not shear again.
#[derive(Debug)]
pub struct StrokeBoundingBox {
    projection: ProjectStroke,
    transform: Matrix3,
}

impl StrokeBoundingBox {
    /// Creates a new `StrokeBoundingBox` query.
    #[must_use]
    pub fn new(points: Vec<Point2>, options: ProjectionOptions, open_path: bool) -> Self {
        Self {
            projection: ProjectStroke::new(points, options, open_path),
            transform: Matrix3::identity(),
        }
    }

    /// Sets the skewed-local-to-final transform applied to the projected points.
    #[must_use]
    pub fn with_transform(mut self, transform: Matrix3) -> Self {
        self.transform = transform;
        self
    }

    /// Executes the query. Returns `None` for an empty path.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb2> {
        let projections = self.projection.execute();
        Aabb2::from_points(
            projections
                .iter()
                .map(|pr| transform_point(&self.transform, &pr.projected_point)),
        )
    }
}
