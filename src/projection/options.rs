use std::fmt;
use std::str::FromStr;

use crate::error::{StrokeError, StyleError};

/// Shape applied to the free ends of an open path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// The stroke stops flush with the endpoint.
    #[default]
    Butt,
    /// A half disc centered on the endpoint.
    Round,
    /// A half square extending past the endpoint by half the stroke width.
    Square,
}

impl LineCap {
    /// Returns the style keyword for this cap.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for LineCap {
    type Err = StrokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            other => Err(StyleError::UnknownLineCap(other.to_owned()).into()),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape applied where two stroke segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner, limited by [`ProjectionOptions::miter_limit`].
    #[default]
    Miter,
    /// Circular arc around the vertex.
    Round,
    /// Corner cut straight across the two segment outlines.
    Bevel,
}

impl LineJoin {
    /// Returns the style keyword for this join.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for LineJoin {
    type Err = StrokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            other => Err(StyleError::UnknownLineJoin(other.to_owned()).into()),
        }
    }
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style and transform snapshot used to project a stroke.
///
/// Values are taken as given: negative widths, zero scales and non-finite
/// numbers are not rejected and propagate into the projected points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOptions {
    /// Full stroke width in local units.
    pub stroke_width: f64,
    /// Horizontal scale of the shape. The sign encodes a flip.
    pub scale_x: f64,
    /// Vertical scale of the shape. The sign encodes a flip.
    pub scale_y: f64,
    /// X shear angle in degrees.
    pub skew_x: f64,
    /// Y shear angle in degrees.
    pub skew_y: f64,
    /// Keep the on-screen stroke width constant under non-uniform scale.
    pub stroke_uniform: bool,
    /// Cap used at the endpoints of open paths.
    pub line_cap: LineCap,
    /// Join used at every other vertex.
    pub line_join: LineJoin,
    /// Maximum ratio of miter length to half the stroke width.
    pub miter_limit: f64,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            skew_y: 0.0,
            stroke_uniform: false,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            miter_limit: 4.0,
        }
    }
}

impl ProjectionOptions {
    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    #[must_use]
    pub fn with_skew(mut self, skew_x: f64, skew_y: f64) -> Self {
        self.skew_x = skew_x;
        self.skew_y = skew_y;
        self
    }

    #[must_use]
    pub fn with_stroke_uniform(mut self, stroke_uniform: bool) -> Self {
        self.stroke_uniform = stroke_uniform;
        self
    }

    #[must_use]
    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    #[must_use]
    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }

    #[must_use]
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    /// Returns half the stroke width, the distance every projection uses.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.stroke_width / 2.0
    }

    /// Returns `true` if either shear angle is nonzero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_skewed(&self) -> bool {
        self.skew_x != 0.0 || self.skew_y != 0.0
    }
}
