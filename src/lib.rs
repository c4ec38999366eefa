pub mod bounds;
pub mod error;
pub mod math;
pub mod projection;

pub use bounds::{Aabb2, StrokeBoundingBox};
pub use error::{Result, StrokeError, StyleError};
pub use projection::{
    project_stroke_on_points, BaseProjector, CapProjector, JoinProjector, LineCap, LineJoin,
    ProjectStroke, Projection, ProjectionOptions, VertexProjector,
};
