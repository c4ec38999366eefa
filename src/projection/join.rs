use crate::math::vector_2d::{angle_between, unit_or_zero};
use crate::math::{Point2, Vector2};

use super::base::BaseProjector;
use super::options::{LineJoin, ProjectionOptions};
use super::Projection;

/// Projects the stroke around a vertex joining two segments.
///
/// `A` is the vertex, `B` the previous point and `C` the next point. All
/// directions are taken from [`BaseProjector::side_vector`], so uniform strokes
/// reason about the rendered angle rather than the local one.
#[derive(Debug, Clone, Copy)]
pub struct JoinProjector {
    base: BaseProjector,
    a: Point2,
    b: Point2,
    c: Point2,
    ab: Vector2,
    alpha: f64,
    bisector: Vector2,
    rotation_factor: f64,
    collinear: bool,
}

impl JoinProjector {
    /// Creates a join projector for vertex `a` between `b` and `c`.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, options: &ProjectionOptions) -> Self {
        Self::with_base(BaseProjector::new(options), a, b, c)
    }

    #[allow(clippy::float_cmp)]
    pub(crate) fn with_base(base: BaseProjector, a: Point2, b: Point2, c: Point2) -> Self {
        let ab = base.side_vector(&a, &b);
        let ac = base.side_vector(&a, &c);
        let cross = ab.perp(&ac);
        Self {
            base,
            a,
            b,
            c,
            ab,
            alpha: angle_between(ab, ac),
            bisector: unit_or_zero(unit_or_zero(ab) + unit_or_zero(ac)),
            rotation_factor: if cross < 0.0 { -1.0 } else { 1.0 },
            collinear: cross == 0.0,
        }
    }

    /// The vertex being projected.
    #[must_use]
    pub fn vertex(&self) -> Point2 {
        self.a
    }

    /// Angle between the two sides, in `[0, π]`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Unit bisector of the two sides, pointing into the angle.
    ///
    /// Zero for a straight-through vertex, where the sides cancel out.
    #[must_use]
    pub fn bisector(&self) -> Vector2 {
        self.bisector
    }

    /// `+1` when `C` turns counter-clockwise from `B` around `A`, `-1` otherwise.
    #[must_use]
    pub fn rotation_factor(&self) -> f64 {
        self.rotation_factor
    }

    /// Returns the boundary points for the configured line join.
    #[must_use]
    pub fn project_points(&self) -> Vec<Point2> {
        match self.base.options().line_join {
            LineJoin::Miter => self.project_miter(),
            LineJoin::Round => self.project_round(),
            LineJoin::Bevel => self.project_bevel(),
        }
    }

    /// Returns the boundary points paired with the vertex.
    #[must_use]
    pub fn project(&self) -> Vec<Projection> {
        self.project_points()
            .into_iter()
            .map(|projected_point| Projection::new(self.a, projected_point))
            .collect()
    }

    /// The outer corners of the two segment outlines.
    #[must_use]
    pub fn project_bevel(&self) -> Vec<Point2> {
        let m = self.base.magnitude();
        if self.collinear {
            // Both sides of a straight or folded-back vertex are outer sides.
            let toward = if self.ab == Vector2::zeros() { self.c } else { self.b };
            return vec![
                self.base.orthogonal_projection_by(&self.a, &toward, m),
                self.base.orthogonal_projection_by(&self.a, &toward, -m),
            ];
        }
        vec![
            self.base
                .orthogonal_projection_by(&self.a, &self.b, -self.rotation_factor * m),
            self.base
                .orthogonal_projection_by(&self.a, &self.c, self.rotation_factor * m),
        ]
    }

    /// The miter apex, or the bevel corners once the miter limit is exceeded.
    #[must_use]
    pub fn project_miter(&self) -> Vec<Point2> {
        let hypot_unit_scalar = 1.0 / (self.alpha / 2.0).sin();
        let miter_limit = self.base.options().miter_limit;
        if self.collinear || hypot_unit_scalar > miter_limit {
            tracing::trace!(
                alpha = self.alpha,
                ratio = hypot_unit_scalar,
                miter_limit,
                "miter join falls back to bevel"
            );
            return self.project_bevel();
        }
        let miter = self
            .base
            .scale_unit_vector(-self.bisector, self.base.magnitude() * hypot_unit_scalar);
        vec![self.base.skew_point(self.a + miter)]
    }

    /// Extremes of the join's disc along each axis.
    ///
    /// Without skew these are the axis-aligned extremes on the outer side.
    /// With skew the disc becomes an ellipse whose extremes leave the axes, so
    /// the sheared extremes in X and Y are added as well.
    #[must_use]
    pub fn project_round(&self) -> Vec<Point2> {
        let m = self.base.magnitude();
        let us = self.base.stroke_uniform_scalar();
        let outward = -self.bisector;

        let mut points = Vec::with_capacity(4);
        for &sx in axis_signs(outward.x) {
            let offset = Vector2::new(sx * m * us.x, 0.0);
            points.push(self.base.skew_point(self.a + offset));
        }
        for &sy in axis_signs(outward.y) {
            let offset = Vector2::new(0.0, sy * m * us.y);
            points.push(self.base.skew_point(self.a + offset));
        }
        if self.base.is_skewed() {
            self.push_sheared_extremes(outward, &mut points);
        }
        points
    }

    /// Adds the points where the sheared disc reaches its extremes in X and Y.
    ///
    /// With shear factors `(tx, ty)` a local offset `(x, y)` maps to
    /// `((1 + tx·ty)·x + tx·y, ty·x + y)`. Over the ellipse
    /// `m·D·(cos θ, sin θ)`, `D = diag(us)`, each image coordinate is a dot
    /// product with `(cos θ, sin θ)` and peaks along the coefficient vector.
    fn push_sheared_extremes(&self, outward: Vector2, points: &mut Vec<Point2>) {
        let m = self.base.magnitude();
        let us = self.base.stroke_uniform_scalar();
        let t = self.base.shear_factors();
        let sheared_outward = self.base.apply_skew(outward.component_mul(&us));

        let toward_x = unit_or_zero(Vector2::new((1.0 + t.x * t.y) * us.x, t.x * us.y));
        let extreme_x = toward_x.component_mul(&us) * m;
        for &sx in axis_signs(sheared_outward.x) {
            points.push(self.base.skew_point(self.a + extreme_x * sx));
        }

        let toward_y = unit_or_zero(Vector2::new(t.y * us.x, us.y));
        let extreme_y = toward_y.component_mul(&us) * m;
        for &sy in axis_signs(sheared_outward.y) {
            points.push(self.base.skew_point(self.a + extreme_y * sy));
        }
    }
}

/// Signs to project along an axis given the outward component on it.
///
/// A zero component means the outer side is not decided on that axis, so
/// both directions are projected.
fn axis_signs(component: f64) -> &'static [f64] {
    if component > 0.0 {
        &[1.0]
    } else if component < 0.0 {
        &[-1.0]
    } else {
        &[1.0, -1.0]
    }
}
