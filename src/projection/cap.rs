use crate::math::vector_2d::{orthonormal, unit_or_zero};
use crate::math::{Point2, Vector2};

use super::base::BaseProjector;
use super::join::JoinProjector;
use super::options::{LineCap, ProjectionOptions};
use super::Projection;

/// Projects the stroke around a free endpoint of an open path.
///
/// `edge` is the endpoint and `toward` its neighbor on the path. For a path
/// of a single point both are the same point.
#[derive(Debug, Clone, Copy)]
pub struct CapProjector {
    base: BaseProjector,
    edge: Point2,
    toward: Point2,
}

impl CapProjector {
    /// Creates a cap projector for endpoint `edge` whose segment runs to `toward`.
    #[must_use]
    pub fn new(edge: Point2, toward: Point2, options: &ProjectionOptions) -> Self {
        Self::with_base(BaseProjector::new(options), edge, toward)
    }

    pub(crate) fn with_base(base: BaseProjector, edge: Point2, toward: Point2) -> Self {
        Self { base, edge, toward }
    }

    /// The endpoint being projected.
    #[must_use]
    pub fn vertex(&self) -> Point2 {
        self.edge
    }

    /// Returns the boundary points for the configured line cap.
    #[must_use]
    pub fn project_points(&self) -> Vec<Point2> {
        match self.base.options().line_cap {
            LineCap::Butt => self.project_butt(),
            LineCap::Round => self.project_round(),
            LineCap::Square => self.project_square(),
        }
    }

    /// Returns the boundary points paired with the endpoint.
    #[must_use]
    pub fn project(&self) -> Vec<Projection> {
        self.project_points()
            .into_iter()
            .map(|projected_point| Projection::new(self.edge, projected_point))
            .collect()
    }

    /// Both sides of the segment, flush with the endpoint.
    #[must_use]
    pub fn project_butt(&self) -> Vec<Point2> {
        let m = self.base.magnitude();
        vec![
            self.base.orthogonal_projection_by(&self.edge, &self.toward, m),
            self.base.orthogonal_projection_by(&self.edge, &self.toward, -m),
        ]
    }

    /// Half of a round join folded back onto the segment.
    ///
    /// A zero-length unskewed cap is a full disc and yields its diagonal
    /// corners.
    #[must_use]
    pub fn project_round(&self) -> Vec<Point2> {
        if !self.base.is_skewed() && self.edge == self.toward {
            return self.project_diagonal();
        }
        JoinProjector::with_base(self.base, self.edge, self.toward, self.toward).project_round()
    }

    /// Outer corners of the square extending half a width past the endpoint.
    ///
    /// A zero-length cap yields its diagonal corners whether or not the shape
    /// is skewed.
    #[must_use]
    pub fn project_square(&self) -> Vec<Point2> {
        if self.edge == self.toward {
            return self.project_diagonal();
        }
        let m = self.base.magnitude();
        let side = self.base.side_vector(&self.edge, &self.toward);
        let extension = self.base.scale_unit_vector(unit_or_zero(side), -m);
        let offset = self.base.scale_unit_vector(orthonormal(side), m);
        vec![
            self.base.skew_point(self.edge + extension + offset),
            self.base.skew_point(self.edge + extension - offset),
        ]
    }

    fn project_diagonal(&self) -> Vec<Point2> {
        let diagonal = self
            .base
            .scale_unit_vector(Vector2::new(1.0, 1.0), self.base.magnitude());
        vec![
            self.base.skew_point(self.edge + diagonal),
            self.base.skew_point(self.edge - diagonal),
        ]
    }
}
