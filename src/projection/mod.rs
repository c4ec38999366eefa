//! Stroke projection: the boundary points a rendered stroke occupies around
//! each vertex of a path.
//!
//! Endpoints of open paths go through [`CapProjector`], every other vertex
//! through [`JoinProjector`]. [`ProjectStroke`] walks a whole path and picks
//! between them.

mod base;
mod cap;
mod join;
mod options;
mod path;

pub use base::BaseProjector;
pub use cap::CapProjector;
pub use join::JoinProjector;
pub use options::{LineCap, LineJoin, ProjectionOptions};
pub use path::{project_stroke_on_points, ProjectStroke};

use crate::math::Point2;

/// One boundary point contributed by a path vertex.
///
/// `origin_point` is the vertex as given, in the path's local frame.
/// `projected_point` is in the skewed local frame: the shape's skew is
/// already applied to the whole point, so a consumer maps it through the
/// rest of the transform (scale, rotation, translation) without shearing it
/// again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// The path vertex the point belongs to.
    pub origin_point: Point2,
    /// A point on the outer bound of the stroke at that vertex.
    pub projected_point: Point2,
}

impl Projection {
    #[must_use]
    pub fn new(origin_point: Point2, projected_point: Point2) -> Self {
        Self {
            origin_point,
            projected_point,
        }
    }
}

/// The projector chosen for a single vertex.
#[derive(Debug, Clone, Copy)]
pub enum VertexProjector {
    /// Free endpoint of an open path.
    Cap(CapProjector),
    /// Vertex between two segments.
    Join(JoinProjector),
}

impl VertexProjector {
    /// The vertex being projected.
    #[must_use]
    pub fn vertex(&self) -> Point2 {
        match self {
            Self::Cap(cap) => cap.vertex(),
            Self::Join(join) => join.vertex(),
        }
    }

    #[must_use]
    pub fn project_points(&self) -> Vec<Point2> {
        match self {
            Self::Cap(cap) => cap.project_points(),
            Self::Join(join) => join.project_points(),
        }
    }

    #[must_use]
    pub fn project(&self) -> Vec<Projection> {
        match self {
            Self::Cap(cap) => cap.project(),
            Self::Join(join) => join.project(),
        }
    }
}
