use crate::math::Point2;

use super::base::BaseProjector;
use super::cap::CapProjector;
use super::join::JoinProjector;
use super::options::ProjectionOptions;
use super::{Projection, VertexProjector};

/// Projects the stroke of a whole path onto its vertices.
///
/// Consecutive duplicate points are dropped first. A path reduced to a single
/// point is always treated as open. A closed path that repeats its start
/// point at the end projects that vertex once, as a join.
///
/// Reducing every projected point, mapped through the shape's transform, with
/// coordinate-wise min/max gives the bounding box of the stroked path.
#[derive(Debug)]
pub struct ProjectStroke {
    points: Vec<Point2>,
    options: ProjectionOptions,
    open_path: bool,
}

impl ProjectStroke {
    /// Creates a new stroke projection.
    #[must_use]
    pub fn new(points: Vec<Point2>, options: ProjectionOptions, open_path: bool) -> Self {
        Self {
            points,
            options,
            open_path,
        }
    }

    /// Executes the projection, returning every `(vertex, boundary point)`
    /// pair in vertex order.
    #[must_use]
    pub fn execute(&self) -> Vec<Projection> {
        if self.points.is_empty() {
            return Vec::new();
        }

        let mut points = dedup_consecutive(&self.points);
        let open_path = if points.len() == 1 {
            true
        } else {
            if !self.open_path {
                trim_closing_points(&mut points);
            }
            self.open_path
        };

        let base = BaseProjector::new(&self.options);
        let mut projections = Vec::with_capacity(points.len() * 2);
        for i in 0..points.len() {
            let projector = vertex_projector(base, &points, i, open_path);
            tracing::trace!(
                index = i,
                vertex = ?projector.vertex(),
                cap = matches!(projector, VertexProjector::Cap(_)),
                "projecting vertex"
            );
            projections.extend(projector.project());
        }

        tracing::debug!(
            input = self.points.len(),
            vertices = points.len(),
            projections = projections.len(),
            open_path,
            "projected stroke"
        );
        projections
    }
}

/// Projects the stroke of `points` with `options`.
///
/// Shorthand for [`ProjectStroke::execute`].
#[must_use]
pub fn project_stroke_on_points(
    points: &[Point2],
    options: &ProjectionOptions,
    open_path: bool,
) -> Vec<Projection> {
    ProjectStroke::new(points.to_vec(), *options, open_path).execute()
}

/// Drops points exactly equal to their predecessor. The first point is kept.
fn dedup_consecutive(points: &[Point2]) -> Vec<Point2> {
    let mut reduced: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        if reduced.last() != Some(&p) {
            reduced.push(p);
        }
    }
    reduced
}

/// Removes trailing points equal to the start point of a closed path.
fn trim_closing_points(points: &mut Vec<Point2>) {
    while points.len() > 1 && points.last() == points.first() {
        points.pop();
    }
}

/// Chooses the projector for vertex `i`, resolving its neighbors.
///
/// Boundary vertices of a closed path wrap around to the other end; those of
/// an open path see themselves as the missing neighbor and get a cap.
fn vertex_projector(
    base: BaseProjector,
    points: &[Point2],
    i: usize,
    open_path: bool,
) -> VertexProjector {
    let last = points.len() - 1;
    let vertex = points[i];
    let previous = match i {
        0 if open_path => vertex,
        0 => points[last],
        _ => points[i - 1],
    };
    let next = if i == last {
        if open_path {
            vertex
        } else {
            points[0]
        }
    } else {
        points[i + 1]
    };

    if open_path && (i == 0 || i == last) {
        let inward = if i == 0 { next } else { previous };
        VertexProjector::Cap(CapProjector::with_base(base, vertex, inward))
    } else {
        VertexProjector::Join(JoinProjector::with_base(base, vertex, previous, next))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::transform_2d::{scale_matrix, transform_point};
    use crate::math::Vector2;
    use crate::projection::{LineCap, LineJoin};

    const EPS: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn width(w: f64) -> ProjectionOptions {
        ProjectionOptions::default().with_stroke_width(w)
    }

    #[test]
    fn empty_input_projects_nothing() {
        assert!(project_stroke_on_points(&[], &width(10.0), true).is_empty());
        assert!(project_stroke_on_points(&[], &width(10.0), false).is_empty());
    }

    #[test]
    fn single_closed_point_becomes_cap() {
        let a = p(3.0, 4.0);
        let opts = width(10.0).with_line_cap(LineCap::Square);
        let projections = project_stroke_on_points(&[a], &opts, false);
        assert_eq!(projections.len(), 2);
        assert_eq!(projections[0].projected_point, p(8.0, 9.0));
        assert_eq!(projections[1].projected_point, p(-2.0, -1.0));
        assert!(projections.iter().all(|pr| pr.origin_point == a));
    }

    #[test]
    fn single_point_butt_cap_is_degenerate_pair() {
        let a = p(1.0, 1.0);
        let projections = project_stroke_on_points(&[a, a, a], &width(10.0), false);
        assert_eq!(projections.len(), 2);
        assert!(projections.iter().all(|pr| pr.projected_point == a));
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let points = [p(0.0, 0.0), p(0.0, 0.0), p(10.0, 0.0), p(10.0, 0.0)];
        let projections = project_stroke_on_points(&points, &width(10.0), true);
        assert_eq!(projections.len(), 4);
        assert_eq!(projections[0].origin_point, p(0.0, 0.0));
        assert_eq!(projections[1].origin_point, p(0.0, 0.0));
        assert_eq!(projections[2].origin_point, p(10.0, 0.0));
        assert_eq!(projections[3].origin_point, p(10.0, 0.0));
    }

    #[test]
    fn closed_path_projects_repeated_start_once() {
        let points = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 0.0)];
        let opts = width(2.0).with_line_join(LineJoin::Bevel);
        let projections = project_stroke_on_points(&points, &opts, false);
        assert_eq!(projections.len(), 6);
        let at_start = projections
            .iter()
            .filter(|pr| pr.origin_point == p(0.0, 0.0))
            .count();
        assert_eq!(at_start, 2);
    }

    #[test]
    fn open_path_keeps_repeated_start_as_caps() {
        let points = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 0.0)];
        let opts = width(2.0).with_line_join(LineJoin::Bevel);
        let projections = project_stroke_on_points(&points, &opts, true);
        assert_eq!(projections.len(), 8);
    }

    #[test]
    fn closed_two_point_path_folds_back_at_both_ends() {
        let points = [p(0.0, 0.0), p(10.0, 0.0)];
        let projections = project_stroke_on_points(&points, &width(4.0), false);
        assert_eq!(projections.len(), 4);
        for pr in &projections {
            let d = pr.projected_point - pr.origin_point;
            assert!(d.x.abs() < EPS);
            assert!((d.y.abs() - 2.0).abs() < EPS);
        }
    }

    #[test]
    fn closed_equilateral_triangle_bevel() {
        let h = 10.0 * 3.0_f64.sqrt() / 2.0;
        let points = [p(0.0, 0.0), p(10.0, 0.0), p(5.0, h)];
        let centroid = p(5.0, h / 3.0);
        let opts = width(10.0).with_line_join(LineJoin::Bevel);
        let projections = project_stroke_on_points(&points, &opts, false);

        assert_eq!(projections.len(), 6);
        for vertex in &points {
            let own: Vec<_> = projections
                .iter()
                .filter(|pr| pr.origin_point == *vertex)
                .collect();
            assert_eq!(own.len(), 2);
            for pr in own {
                assert!(((pr.projected_point - vertex).norm() - 5.0).abs() < EPS);
                // outer side: further from the centroid than the vertex
                assert!((pr.projected_point - centroid).norm() > (vertex - centroid).norm());
            }
        }
    }

    #[test]
    fn open_butt_caps_lie_on_endpoint_normals() {
        let a = p(0.0, 0.0);
        let b = p(3.0, 4.0);
        let direction = Vector2::new(0.6, 0.8);
        let projections = project_stroke_on_points(&[a, b], &width(10.0), true);

        assert_eq!(projections.len(), 4);
        for pr in &projections {
            let d = pr.projected_point - pr.origin_point;
            assert!(d.dot(&direction).abs() < EPS, "no extension along the segment");
            assert!((d.norm() - 5.0).abs() < EPS);
        }
        let at_a: Vec<_> = projections.iter().filter(|pr| pr.origin_point == a).collect();
        let spread = at_a[0].projected_point - at_a[1].projected_point;
        assert!((spread.norm() - 10.0).abs() < EPS);
    }

    #[test]
    fn miter_apex_distance_and_limit() {
        // Vertex at the origin, sides at ±30° from -x: alpha = 60°.
        let angle = 30.0_f64.to_radians();
        let b = p(-10.0 * angle.cos(), 10.0 * angle.sin());
        let c = p(-10.0 * angle.cos(), -10.0 * angle.sin());
        let a = p(0.0, 0.0);
        let opts = width(10.0).with_line_join(LineJoin::Miter);

        let projections = project_stroke_on_points(&[b, a, c], &opts, true);
        let at_a: Vec<_> = projections.iter().filter(|pr| pr.origin_point == a).collect();
        assert_eq!(at_a.len(), 1);
        let apex_distance = (at_a[0].projected_point - a).norm();
        assert!((apex_distance - 5.0 / (60.0_f64.to_radians() / 2.0).sin()).abs() < EPS);
        assert!((apex_distance - 10.0).abs() < EPS);

        // apex at 10 exceeds 1.5 · 5, so the join switches to bevel
        let tight = opts.with_miter_limit(1.5);
        let projections = project_stroke_on_points(&[b, a, c], &tight, true);
        let at_a: Vec<_> = projections.iter().filter(|pr| pr.origin_point == a).collect();
        assert_eq!(at_a.len(), 2);
        for pr in at_a {
            assert!(((pr.projected_point - a).norm() - 5.0).abs() < EPS);
        }
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let points = [p(0.0, 0.0), p(7.0, 1.0), p(3.0, 9.0), p(-2.0, 4.0)];
        let opts = width(3.0)
            .with_skew(20.0, -10.0)
            .with_scale(1.5, 0.75)
            .with_stroke_uniform(true)
            .with_line_join(LineJoin::Round)
            .with_line_cap(LineCap::Square);
        for open_path in [true, false] {
            let first = project_stroke_on_points(&points, &opts, open_path);
            let second = project_stroke_on_points(&points, &opts, open_path);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn uniform_stroke_keeps_rendered_half_width() {
        let opts = width(10.0)
            .with_scale(2.0, 1.0)
            .with_stroke_uniform(true);
        let render = scale_matrix(2.0, 1.0);

        let vertical = project_stroke_on_points(&[p(0.0, 0.0), p(0.0, 10.0)], &opts, true);
        for pr in &vertical {
            let origin = transform_point(&render, &pr.origin_point);
            let projected = transform_point(&render, &pr.projected_point);
            assert!(((projected.x - origin.x).abs() - 5.0).abs() < EPS);
        }

        let horizontal = project_stroke_on_points(&[p(0.0, 0.0), p(10.0, 0.0)], &opts, true);
        for pr in &horizontal {
            let origin = transform_point(&render, &pr.origin_point);
            let projected = transform_point(&render, &pr.projected_point);
            assert!(((projected.y - origin.y).abs() - 5.0).abs() < EPS);
        }
    }

    #[test]
    fn interior_vertices_join_and_endpoints_cap() {
        let points = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)];
        let base = BaseProjector::new(&width(2.0));
        assert!(matches!(vertex_projector(base, &points, 0, true), VertexProjector::Cap(_)));
        assert!(matches!(vertex_projector(base, &points, 1, true), VertexProjector::Join(_)));
        assert!(matches!(vertex_projector(base, &points, 2, true), VertexProjector::Cap(_)));
        for (i, &vertex) in points.iter().enumerate() {
            assert_eq!(vertex_projector(base, &points, i, true).vertex(), vertex);
        }
        for i in 0..points.len() {
            assert!(matches!(
                vertex_projector(base, &points, i, false),
                VertexProjector::Join(_)
            ));
        }
    }

    #[test]
    fn closed_boundary_vertices_wrap_neighbors() {
        let points = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)];
        let base = BaseProjector::new(&width(2.0).with_line_join(LineJoin::Bevel));
        let first = vertex_projector(base, &points, 0, false);
        let expected = JoinProjector::with_base(base, points[0], points[2], points[1]);
        assert_eq!(first.project_points(), expected.project_points());
    }

    #[test]
    fn nan_width_propagates() {
        let projections = project_stroke_on_points(
            &[p(0.0, 0.0), p(10.0, 0.0)],
            &width(f64::NAN),
            true,
        );
        assert_eq!(projections.len(), 4);
        assert!(projections.iter().all(|pr| pr.projected_point.y.is_nan()));
    }
}
