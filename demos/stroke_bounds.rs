//! Prints stroke bounds for a few shapes under different styles.
//!
//! Usage:
//! ```text
//! cargo run --example stroke_bounds
//! RUST_LOG=strokebound=trace cargo run --example stroke_bounds
//! ```

use strokebound::math::transform_2d::scale_matrix;
use strokebound::math::Point2;
use strokebound::{LineCap, LineJoin, ProjectionOptions, StrokeBoundingBox};

fn main() -> strokebound::Result<()> {
    // Default: WARN for everything, INFO for strokebound.
    // Override with RUST_LOG env var (e.g. RUST_LOG=strokebound=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("stroke_bounds=info".parse().unwrap_or_default())
        .add_directive("strokebound=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let zigzag = vec![
        Point2::new(0.0, 0.0),
        Point2::new(20.0, 40.0),
        Point2::new(40.0, 0.0),
        Point2::new(60.0, 40.0),
    ];
    let triangle = vec![
        Point2::new(0.0, 0.0),
        Point2::new(50.0, 0.0),
        Point2::new(25.0, 43.3),
    ];

    let styles = [("butt", "miter"), ("round", "round"), ("square", "bevel")];
    for (cap, join) in styles {
        let options = ProjectionOptions::default()
            .with_stroke_width(8.0)
            .with_line_cap(cap.parse::<LineCap>()?)
            .with_line_join(join.parse::<LineJoin>()?);

        for (name, points, open_path) in [("zigzag", &zigzag, true), ("triangle", &triangle, false)] {
            let Some(bounds) = StrokeBoundingBox::new(points.clone(), options, open_path).execute()
            else {
                continue;
            };
            tracing::info!(
                shape = name,
                cap,
                join,
                min_x = bounds.min.x,
                min_y = bounds.min.y,
                width = bounds.width(),
                height = bounds.height(),
                "stroke bounds"
            );
        }
    }

    // Uniform stroke on a shape stretched 3x horizontally.
    let options = ProjectionOptions::default()
        .with_stroke_width(8.0)
        .with_scale(3.0, 1.0)
        .with_stroke_uniform(true);
    if let Some(bounds) = StrokeBoundingBox::new(zigzag, options, true)
        .with_transform(scale_matrix(3.0, 1.0))
        .execute()
    {
        tracing::info!(
            width = bounds.width(),
            height = bounds.height(),
            "uniform stroke bounds after scaling"
        );
    }

    Ok(())
}
